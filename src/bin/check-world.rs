//! Validate a world definition file and print a short summary.

use clap::Parser;
use frobitz::import_world;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "check-world", about = "Validate a frobitz world file")]
struct Args {
    /// World definition YAML file
    world: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let world = import_world::load_world(&args.world)?;

    println!("{}: OK", args.world.display());
    println!(
        "  player: {} ({}), starts in {}",
        world.player.name,
        world.player.race,
        world.locate_player().unwrap_or("nowhere")
    );
    println!("  rooms: {}", world.room_count());
    for room in world.rooms() {
        let exits = room.exit_strings().join(", ");
        let exits = if exits.is_empty() {
            "no exits".to_string()
        } else {
            exits
        };
        println!("    {}: {} item(s), {}", room.key, room.list().len(), exits);
    }

    Ok(())
}
