use crate::commands::{CmdCtx, CommandResult};
use crate::input::parser::Intent;

pub fn examine(ctx: &mut CmdCtx, intent: &Intent) -> CommandResult {
    if intent.args.is_empty() {
        ctx.out.system("Usage: examine <item>");
        return Ok(());
    }
    let what = intent.args.join(" ");
    let key = ctx.room_key()?;

    // Pockets first, then the floor.
    let description = ctx
        .world
        .player
        .get(what.as_str())
        .or_else(|| {
            ctx.world
                .room(&key)
                .and_then(|room| room.get(what.as_str()))
        })
        .map(|item| item.description.clone());

    match description {
        Some(text) => ctx.out.line(text),
        None => ctx.out.line(format!("You don't see any '{what}' here.")),
    }
    Ok(())
}
