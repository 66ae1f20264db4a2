use crate::commands::{CmdCtx, CommandResult};
use crate::error::DomainError;
use crate::input::parser::Intent;

pub fn look(ctx: &mut CmdCtx, _intent: &Intent) -> CommandResult {
    let key = ctx.room_key()?;
    let room = ctx
        .world
        .room(&key)
        .ok_or_else(|| DomainError::UnknownRoom(key.clone()))?;

    ctx.out.line(&room.name);
    ctx.out.line(&room.description);

    // The room's container also holds the player; don't describe them to
    // themselves.
    let me = ctx.world.player.name.as_str();
    let things: Vec<String> = room
        .list()
        .into_iter()
        .filter(|item| item.name != me)
        .map(|item| item.display_text())
        .collect();
    if !things.is_empty() {
        ctx.out.line(format!("You see: {}", things.join(", ")));
    }

    let exits = room.exit_strings();
    if exits.is_empty() {
        ctx.out.line("There are no obvious exits.");
    } else {
        ctx.out.line(format!("Exits: {}", exits.join(", ")));
    }

    Ok(())
}
