use crate::commands::{CmdCtx, CommandResult};
use crate::error::DomainError;
use crate::input::parser::Intent;

/// Dump the full object graph to a JSON file. The format is whatever serde
/// makes of the world; nothing reads it back yet.
pub fn save(ctx: &mut CmdCtx, intent: &Intent) -> CommandResult {
    let Some(path) = intent.args.first() else {
        ctx.out.system("Usage: save <path>");
        return Ok(());
    };

    let json = serde_json::to_string_pretty(&*ctx.world).map_err(DomainError::from)?;
    std::fs::write(path, json)?;
    tracing::info!(path = %path, "world saved");
    ctx.out.system(format!("World saved to {path}"));
    Ok(())
}
