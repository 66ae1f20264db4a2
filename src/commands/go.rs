use crate::commands::{CmdCtx, CommandResult, look};
use crate::error::DomainError;
use crate::input::parser::Intent;
use crate::state::session::Cursor;

pub fn go(ctx: &mut CmdCtx, intent: &Intent) -> CommandResult {
    let Some(dir) = intent.direction else {
        match intent.args.first() {
            Some(arg) => ctx.out.line(format!("'{arg}' is not a direction.")),
            None => ctx.out.system("Usage: go <direction>"),
        }
        return Ok(());
    };

    let key = ctx.room_key()?;
    match ctx.world.move_player(&key, dir) {
        Ok(to_key) => {
            ctx.sess.set_cursor(Some(Cursor { room_key: to_key }));
            // Arriving somewhere new, look around.
            look::look(ctx, intent)
        }
        Err(DomainError::NoExit(_)) => {
            ctx.out.line("You can't go that way.");
            Ok(())
        }
        Err(e) => {
            // log for ops, don't leak internals to the player
            tracing::error!(error = %e, "go: move failed");
            ctx.out.system("You try to move, but something goes wrong.");
            Ok(())
        }
    }
}
