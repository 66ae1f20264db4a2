use crate::commands::{CmdCtx, CommandResult};
use crate::error::DomainError;
use crate::input::parser::Intent;

pub fn drop(ctx: &mut CmdCtx, intent: &Intent) -> CommandResult {
    if intent.args.is_empty() {
        ctx.out.system("Usage: drop <item>");
        return Ok(());
    }
    let what = intent.args.join(" ");
    let key = ctx.room_key()?;

    match ctx.world.player_drop(&key, &what) {
        Ok(()) => {
            ctx.out.line(format!("You drop the {what}."));
            Ok(())
        }
        Err(DomainError::NotCarrying(_)) => {
            ctx.out.line(format!("You are not carrying {what}."));
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "drop failed");
            ctx.out.system("You fumble, and something goes wrong.");
            Ok(())
        }
    }
}
