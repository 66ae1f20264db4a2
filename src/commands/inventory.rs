use crate::commands::{CmdCtx, CommandResult};
use crate::input::parser::Intent;

pub fn inventory(ctx: &mut CmdCtx, _intent: &Intent) -> CommandResult {
    let pockets = &ctx.world.player.container;
    if pockets.is_empty() {
        ctx.out.line("You are not carrying anything.");
        return Ok(());
    }
    ctx.out.line(pockets.printable_inventory());
    Ok(())
}
