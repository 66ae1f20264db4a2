use clap::Parser;
use frobitz::state::session::Cursor;
use frobitz::{CmdCtx, Flow, Session, config, import_world, process_command};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// A toy interactive fiction engine.
#[derive(Debug, Parser)]
#[command(name = "frobitz", version, about)]
struct Args {
    /// World definition file (overrides config and environment)
    #[arg(long)]
    world: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let cfg = match &args.config {
        Some(path) => config::Config::load(path)?,
        None => config::Config::from_env()?,
    };
    let world_path = args
        .world
        .unwrap_or_else(|| PathBuf::from(&cfg.world_path));

    let mut world = import_world::load_world(&world_path)?;
    let mut sess = Session::default();
    let start = world.locate_player().map(str::to_string);
    sess.set_cursor(start.map(|room_key| Cursor { room_key }));

    println!("frobitz: type 'help' for commands, 'quit' to leave.");
    println!();

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    // Arrival view before the first prompt.
    {
        let mut ctx = CmdCtx {
            world: &mut world,
            sess: &mut sess,
            out: frobitz::output::Output,
        };
        process_command("look", &mut ctx)?;
    }

    let mut lines = stdin.lock().lines();
    loop {
        let n = sess.next_line();
        print!("{n}{}", cfg.prompt);
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break; // EOF
        };
        let line = line?;

        let mut ctx = CmdCtx {
            world: &mut world,
            sess: &mut sess,
            out: frobitz::output::Output,
        };
        match process_command(&line, &mut ctx) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => {
                tracing::error!(error = %e, "command failed");
                println!("Something went wrong; see the log.");
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, prelude::*};

    color_eyre::install().unwrap();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("warn".parse().unwrap()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::uptime()),
        )
        .with(tracing_error::ErrorLayer::default())
        .init();
}
