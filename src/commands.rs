use crate::error::{AppResult, DomainError};
use crate::input::parser::{Verb, parse_command};
use crate::output::Output;
use crate::state::session::Session;
use crate::state::world::World;
use thiserror::Error;

mod drop;
mod examine;
mod exits;
mod go;
mod inventory;
mod look;
mod save;
mod take;

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// What the REPL loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Command context passed to command handlers
pub struct CmdCtx<'a> {
    pub world: &'a mut World,
    pub sess: &'a mut Session,
    pub out: Output,
}

impl CmdCtx<'_> {
    pub fn room_key(&self) -> AppResult<String> {
        self.sess
            .cursor()
            .map(|c| c.room_key.clone())
            .ok_or(DomainError::NoCurrentRoom)
    }
}

pub fn process_command(raw: &str, ctx: &mut CmdCtx) -> Result<Flow, CommandError> {
    let intent = parse_command(raw);
    let result = match &intent.verb {
        Verb::Look => look::look(ctx, &intent),
        Verb::Examine => examine::examine(ctx, &intent),
        Verb::Go => go::go(ctx, &intent),
        Verb::Take => take::take(ctx, &intent),
        Verb::Drop => drop::drop(ctx, &intent),
        Verb::Inventory => inventory::inventory(ctx, &intent),
        Verb::Exits => exits::exits(ctx, &intent),
        Verb::Verbs => {
            ctx.out
                .system(format!("Known verbs: {}", Verb::KNOWN.join(", ")));
            Ok(())
        }
        Verb::Save => save::save(ctx, &intent),
        Verb::Help => {
            ctx.out.system(help_text());
            Ok(())
        }
        Verb::Quit => {
            ctx.out.system("Goodbye!");
            return Ok(Flow::Quit);
        }
        Verb::Custom(c) if c.is_empty() => Ok(()),
        Verb::Custom(c) => {
            ctx.out.system(format!("{c} -> an unknown command"));
            Ok(())
        }
    };

    match result {
        Ok(()) => Ok(Flow::Continue),
        // Not placed in a room yet; a prompt, not a crash.
        Err(CommandError::Domain(DomainError::NoCurrentRoom)) => {
            ctx.out.system("You are nowhere. There's nowhere to go.");
            Ok(Flow::Continue)
        }
        Err(e) => Err(e),
    }
}

pub fn help_text() -> String {
    r#"
Available commands
------------------
  look                  Look around your current room
  examine <item>        Describe something here or in your pack
  go <dir>              Move (e.g., go north / n)
  take <item>           Pick up an item from the room
  drop <item>           Put down something you carry
  inventory             List what you are carrying
  exits                 List this room's exits
  save <path>           Dump the world to a JSON file
  verbs                 List all known verbs
  quit                  Leave the game
"#
    .to_string()
}
