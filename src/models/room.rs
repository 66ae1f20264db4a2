use crate::error::{AppResult, DomainError};
use crate::models::container::Container;
use crate::models::item::{EntityKey, Item};
use crate::models::types::Direction;
use serde::Serialize;
use std::collections::HashMap;

/// A location. Owns a container for whatever sits here (furniture, loot,
/// the player) and a write-once map of exits to other rooms.
///
/// Exits hold room *keys*, not room references; the [`World`] registry owns
/// every room and resolves keys on movement.
///
/// [`World`]: crate::state::world::World
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    pub key: String,
    pub name: String,
    pub description: String,
    pub container: Container,
    exits: HashMap<Direction, String>,
}

impl Room {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        let key = key.into();
        let container = Container::new(key.clone());
        Self {
            key,
            name: name.into(),
            description: "A dull room".to_string(),
            container,
            exits: HashMap::new(),
        }
    }

    pub fn with_description(
        key: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            ..Self::new(key, name)
        }
    }

    /// Link this room to another. Each direction can be assigned once; a
    /// second assignment is rejected and the original exit stays.
    pub fn add_exit(&mut self, dir: Direction, to_key: impl Into<String>) -> AppResult<()> {
        if self.exits.contains_key(&dir) {
            return Err(DomainError::ExitInUse(dir));
        }
        self.exits.insert(dir, to_key.into());
        Ok(())
    }

    /// The target room key in that direction, if an exit was assigned.
    pub fn exit(&self, dir: Direction) -> Option<&str> {
        self.exits.get(&dir).map(String::as_str)
    }

    pub fn exit_count(&self) -> usize {
        self.exits.len()
    }

    /// Diagnostic `"n: kitchen"` lines, in fixed direction order.
    pub fn exit_strings(&self) -> Vec<String> {
        Direction::ALL
            .iter()
            .filter_map(|dir| {
                self.exits
                    .get(dir)
                    .map(|to| format!("{}: {}", dir.to_short(), to))
            })
            .collect()
    }

    // Explicit forwarding to the owned container; the room does not pretend
    // to *be* one.

    pub fn take(&mut self, item: &Item) -> AppResult<()> {
        self.container.take(item)
    }

    pub fn drop(&mut self, what: impl EntityKey) -> AppResult<()> {
        self.container.drop(what)
    }

    pub fn put(&mut self, item: Item) -> AppResult<()> {
        self.container.put(item)
    }

    pub fn has(&self, what: impl EntityKey) -> bool {
        self.container.has(what)
    }

    pub fn get(&self, what: impl EntityKey) -> Option<&Item> {
        self.container.get(what)
    }

    pub fn list(&self) -> Vec<&Item> {
        self.container.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mk_bedroom() -> Room {
        Room::with_description("bedroom", "Bedroom", "A dull bedroom")
    }

    #[test]
    fn exits_are_write_once() {
        let mut bedroom = mk_bedroom();
        assert!(bedroom.add_exit(Direction::North, "bath").is_ok());
        // Same direction again fails, even with a different target.
        let err = bedroom.add_exit(Direction::North, "bath").unwrap_err();
        assert!(matches!(err, DomainError::ExitInUse(Direction::North)));
        let err = bedroom.add_exit(Direction::North, "garage").unwrap_err();
        assert!(matches!(err, DomainError::ExitInUse(Direction::North)));
        // The original link is untouched.
        assert_eq!(bedroom.exit(Direction::North), Some("bath"));
        assert_eq!(bedroom.exit_count(), 1);
    }

    #[test]
    fn aliases_resolve_to_the_same_exit() {
        let mut bedroom = mk_bedroom();
        bedroom.add_exit(Direction::parse("n").unwrap(), "bath").unwrap();
        let north = Direction::parse("north").unwrap();
        assert_eq!(bedroom.exit(north), Some("bath"));
    }

    #[test]
    fn unset_directions_answer_none() {
        let room = mk_bedroom();
        for dir in Direction::ALL {
            assert_eq!(room.exit(dir), None);
        }
    }

    #[test]
    fn exit_strings_enumerate_in_direction_order() {
        let mut closet = Room::new("closet", "Closet");
        closet.add_exit(Direction::West, "kitchen").unwrap();
        closet.add_exit(Direction::South, "bedroom").unwrap();
        closet.add_exit(Direction::North, "garden").unwrap();
        assert_eq!(
            closet.exit_strings(),
            vec!["n: garden", "s: bedroom", "w: kitchen"]
        );
    }

    #[test]
    fn room_contents_go_through_the_container() {
        let mut room = mk_bedroom();
        let chair = Item::new("chair");
        let table = Item::new("table");

        assert!(room.take(&chair).is_ok());
        assert!(room.take(&table).is_ok());
        assert!(room.has("chair"));
        assert!(room.has(&table));
        assert_eq!(room.list().len(), 2);

        assert!(room.take(&table).is_err());
        assert!(room.drop("table").is_ok());
        assert!(!room.has("table"));
        assert_eq!(room.get("chair").map(|i| i.name.as_str()), Some("chair"));
    }

    #[test]
    fn default_description_is_dull() {
        let room = Room::new("cell", "Cell");
        assert_eq!(room.description, "A dull room");
    }
}
