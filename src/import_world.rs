//! YAML world-definition loader.
//!
//! A world file declares the rooms, their contents and exits, and the
//! player's starting position; the loader validates the graph and hands
//! back a ready [`World`].
//!
//! ```yaml
//! version: 1
//! player:
//!   name: Frobitz
//!   start: bedroom
//! rooms:
//!   - id: bedroom
//!     name: Bedroom
//!     exits:
//!       - dir: north
//!         to: kitchen
//! ```

use crate::error::{AppResult, DomainError};
use crate::models::item::Item;
use crate::models::player::Player;
use crate::models::room::Room;
use crate::models::types::Direction;
use crate::state::world::World;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const WORLD_VERSION: u8 = 1;

#[derive(Debug, Deserialize)]
struct WorldYaml {
    pub version: u8,
    #[serde(default)]
    pub name: Option<String>,
    pub player: PlayerYaml,
    pub rooms: Vec<RoomYaml>,
}

#[derive(Debug, Deserialize)]
struct PlayerYaml {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub race: Option<String>,
    /// Key of the room the player wakes up in
    pub start: String,
    #[serde(default)]
    pub items: Vec<ItemYaml>,
}

#[derive(Debug, Deserialize)]
struct RoomYaml {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub items: Vec<ItemYaml>,
    #[serde(default)]
    pub exits: Vec<ExitYaml>,
}

#[derive(Debug, Deserialize)]
struct ItemYaml {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stackable: bool,
    /// Fixtures (tables, doors) can never be picked up
    #[serde(default)]
    pub fixed: bool,
    #[serde(default = "default_one")]
    pub count: u32,
    #[serde(default = "default_one")]
    pub weight: u32,
}

#[derive(Debug, Deserialize)]
struct ExitYaml {
    pub dir: String, // "north"
    pub to: String,  // "kitchen"
}

fn default_one() -> u32 {
    1
}

pub fn load_world(path: impl AsRef<Path>) -> AppResult<World> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), "loading world definition");
    parse_world(&data)
}

pub fn parse_world(yaml: &str) -> AppResult<World> {
    let file: WorldYaml = serde_yaml::from_str(yaml)?;
    build_world(file)
}

fn build_world(file: WorldYaml) -> AppResult<World> {
    if file.version != WORLD_VERSION {
        return Err(DomainError::InvalidData(format!(
            "unsupported world version: {}",
            file.version
        )));
    }

    let mut player = Player::default();
    if let Some(name) = file.player.name {
        player.name = name;
    }
    if let Some(description) = file.player.description {
        player.description = description;
    }
    if let Some(race) = file.player.race {
        player.race = race;
    }

    let mut world = World::new(player);

    for room_yaml in file.rooms {
        let mut room = Room::new(&room_yaml.id, &room_yaml.name);
        if let Some(description) = room_yaml.description {
            room.description = description;
        }
        for item_yaml in room_yaml.items {
            room.put(build_item(item_yaml)?)?;
        }
        for exit in room_yaml.exits {
            let dir = Direction::parse(&exit.dir)
                .ok_or_else(|| DomainError::InvalidDirection(exit.dir.clone()))?;
            room.add_exit(dir, exit.to)?;
        }
        world.add_room(room)?;
    }

    world.validate_exits()?;

    for item_yaml in file.player.items {
        let item = build_item(item_yaml)?;
        if !item.can_carry {
            return Err(DomainError::InvalidData(format!(
                "player cannot start with fixed item {}",
                item.name
            )));
        }
        world.player.put(item)?;
    }

    world.place_player(&file.player.start)?;

    tracing::info!(
        world = file.name.as_deref().unwrap_or("unnamed"),
        rooms = world.room_count(),
        start = %file.player.start,
        "world loaded"
    );
    Ok(world)
}

fn build_item(yaml: ItemYaml) -> AppResult<Item> {
    if yaml.count > 1 && !yaml.stackable {
        return Err(DomainError::InvalidData(format!(
            "item {} has count {} but is not stackable",
            yaml.name, yaml.count
        )));
    }
    let mut item = match yaml.description {
        Some(description) => Item::with_description(&yaml.name, description),
        None => Item::new(&yaml.name),
    };
    item.stackable = yaml.stackable;
    item.can_carry = !yaml.fixed;
    item.count = yaml.count;
    item.weight = yaml.weight;
    Ok(item)
}
