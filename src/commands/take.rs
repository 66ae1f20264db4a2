use crate::commands::{CmdCtx, CommandResult};
use crate::error::DomainError;
use crate::input::parser::Intent;
use rand::Rng;

pub fn take(ctx: &mut CmdCtx, intent: &Intent) -> CommandResult {
    if intent.args.is_empty() {
        ctx.out.system("Usage: take <item>");
        return Ok(());
    }
    let what = intent.args.join(" ");
    let key = ctx.room_key()?;

    match ctx.world.player_take(&key, &what) {
        Ok(()) => {
            ctx.out.line(format!("You pick up the {what}."));
            Ok(())
        }
        Err(DomainError::NotFound(_)) => {
            // Unknown thing
            let messages = [
                format!("You don't see any '{what}' here."),
                format!("There's no '{what}' around."),
                "You don't see that here.".to_string(),
                format!("You look around but don't see any '{what}'."),
                "Nothing by that name here.".to_string(),
                format!("You squint, but still no '{what}'."),
            ];
            let msg = &messages[rand::rng().random_range(0..messages.len())];
            ctx.out.line(msg);
            Ok(())
        }
        Err(DomainError::NotMovable(_)) => {
            // It exists but can't be taken
            let messages = [
                "You can't take that.",
                "That's firmly in place.",
                "It's too heavy to lift.",
                "You try, but it won't budge.",
                "That's not going anywhere.",
                "It's part of the scenery.",
                "It's bolted down.",
            ];
            let msg = messages[rand::rng().random_range(0..messages.len())];
            ctx.out.line(msg);
            Ok(())
        }
        Err(DomainError::AlreadyHeld(_)) => {
            ctx.out.line(format!("You already have the {what}."));
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "take failed");
            ctx.out.system("You reach out, but something goes wrong.");
            Ok(())
        }
    }
}
