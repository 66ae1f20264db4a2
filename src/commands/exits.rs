use crate::commands::{CmdCtx, CommandResult};
use crate::error::DomainError;
use crate::input::parser::Intent;

pub fn exits(ctx: &mut CmdCtx, _intent: &Intent) -> CommandResult {
    let key = ctx.room_key()?;
    let room = ctx
        .world
        .room(&key)
        .ok_or_else(|| DomainError::UnknownRoom(key.clone()))?;

    let strings = room.exit_strings();
    if strings.is_empty() {
        ctx.out.line("There are no obvious exits.");
        return Ok(());
    }
    ctx.out.line(format!("Exits from {}:", room.name));
    for s in strings {
        ctx.out.line(format!("    {s}"));
    }
    Ok(())
}
