use crate::error::{AppResult, DomainError};
use crate::models::player::Player;
use crate::models::room::Room;
use crate::models::types::Direction;
use indexmap::IndexMap;
use serde::Serialize;

/// The registry that owns every room and the player.
///
/// Rooms refer to each other by key; all cross-room operations go through
/// here. Serializable so a persistence collaborator can dump the whole
/// object graph.
#[derive(Debug, Serialize)]
pub struct World {
    rooms: IndexMap<String, Room>,
    pub player: Player,
}

impl World {
    pub fn new(player: Player) -> Self {
        Self {
            rooms: IndexMap::new(),
            player,
        }
    }

    /// Register a room. Keys are unique; a collision is a world-building
    /// bug, not a game outcome.
    pub fn add_room(&mut self, room: Room) -> AppResult<()> {
        if room.key.is_empty() {
            return Err(DomainError::InvalidKey("empty room key".to_string()));
        }
        if self.rooms.contains_key(&room.key) {
            return Err(DomainError::InvalidKey(format!(
                "duplicate room key: {}",
                room.key
            )));
        }
        self.rooms.insert(room.key.clone(), room);
        Ok(())
    }

    pub fn room(&self, key: &str) -> Option<&Room> {
        self.rooms.get(key)
    }

    pub fn room_mut(&mut self, key: &str) -> Option<&mut Room> {
        self.rooms.get_mut(key)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Every exit must point at a registered room.
    pub fn validate_exits(&self) -> AppResult<()> {
        for room in self.rooms.values() {
            for dir in Direction::ALL {
                if let Some(to) = room.exit(dir) {
                    if !self.rooms.contains_key(to) {
                        return Err(DomainError::InvalidData(format!(
                            "room {} exits {} to unknown room {}",
                            room.key, dir, to
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Put the player into a starting room.
    pub fn place_player(&mut self, room_key: &str) -> AppResult<()> {
        let entity = self.player.entity();
        let room = self
            .rooms
            .get_mut(room_key)
            .ok_or_else(|| DomainError::UnknownRoom(room_key.to_string()))?;
        room.take(&entity)
    }

    /// Which room currently holds the player. A full scan; the session
    /// cursor is the fast path, this is the ground truth.
    pub fn locate_player(&self) -> Option<&str> {
        let name = self.player.name.as_str();
        self.rooms
            .values()
            .find(|room| room.has(name))
            .map(|room| room.key.as_str())
    }

    /// Walk the player through an exit.
    ///
    /// Drop-from-origin and take-into-target form one critical section; if
    /// the second half fails the player is put back, so a failed move
    /// leaves both rooms exactly as they were. Answers the new room key.
    pub fn move_player(&mut self, from_key: &str, dir: Direction) -> AppResult<String> {
        let entity = self.player.entity();

        let to_key = {
            let from = self
                .rooms
                .get(from_key)
                .ok_or_else(|| DomainError::UnknownRoom(from_key.to_string()))?;
            from.exit(dir)
                .ok_or(DomainError::NoExit(dir))?
                .to_string()
        };
        if !self.rooms.contains_key(&to_key) {
            return Err(DomainError::UnknownRoom(to_key));
        }

        if let Some(from) = self.rooms.get_mut(from_key) {
            from.drop(entity.name.as_str())?;
        }
        let taken = match self.rooms.get_mut(&to_key) {
            Some(to) => to.take(&entity),
            None => Err(DomainError::UnknownRoom(to_key.clone())),
        };
        if let Err(e) = taken {
            // Restore the origin so the failure has no partial effect.
            if let Some(from) = self.rooms.get_mut(from_key) {
                let _ = from.take(&entity);
            }
            return Err(e);
        }

        tracing::debug!(player = %entity.name, from = %from_key, to = %to_key, "moved");
        Ok(to_key)
    }

    /// Move one unit of an item from a room's floor into the player's hands.
    pub fn player_take(&mut self, room_key: &str, name: &str) -> AppResult<()> {
        let proto = {
            let room = self
                .rooms
                .get(room_key)
                .ok_or_else(|| DomainError::UnknownRoom(room_key.to_string()))?;
            let stored = room
                .get(name)
                .ok_or_else(|| DomainError::NotFound(name.to_string()))?;
            if !stored.can_carry {
                return Err(DomainError::NotMovable(name.to_string()));
            }
            stored.clone()
        };

        if let Some(room) = self.rooms.get_mut(room_key) {
            room.drop(name)?;
        }
        if let Err(e) = self.player.take(&proto) {
            if let Some(room) = self.rooms.get_mut(room_key) {
                let _ = room.take(&proto);
            }
            return Err(e);
        }
        Ok(())
    }

    /// Move one unit of a carried item onto the floor of a room.
    pub fn player_drop(&mut self, room_key: &str, name: &str) -> AppResult<()> {
        if !self.rooms.contains_key(room_key) {
            return Err(DomainError::UnknownRoom(room_key.to_string()));
        }
        let proto = self
            .player
            .get(name)
            .ok_or_else(|| DomainError::NotCarrying(name.to_string()))?
            .clone();

        self.player.drop(name)?;
        let placed = match self.rooms.get_mut(room_key) {
            Some(room) => room.take(&proto),
            None => Err(DomainError::UnknownRoom(room_key.to_string())),
        };
        if let Err(e) = placed {
            let _ = self.player.take(&proto);
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::item::Item;

    fn mk_world() -> World {
        let mut world = World::new(Player::new("Frobitz", "A goofy looking guy."));
        world
            .add_room(Room::with_description("bedroom", "Bedroom", "A dull bedroom"))
            .unwrap();
        world.add_room(Room::new("bath", "Bathroom")).unwrap();
        world
            .room_mut("bedroom")
            .unwrap()
            .add_exit(Direction::North, "bath")
            .unwrap();
        world.place_player("bedroom").unwrap();
        world
    }

    #[test]
    fn duplicate_room_keys_are_a_contract_violation() {
        let mut world = World::new(Player::default());
        world.add_room(Room::new("hall", "Hall")).unwrap();
        let err = world.add_room(Room::new("hall", "Other Hall")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidKey(_)));
    }

    #[test]
    fn successful_move_updates_both_rooms() {
        let mut world = mk_world();
        assert!(world.room("bedroom").unwrap().has("Frobitz"));

        let to = world.move_player("bedroom", Direction::North).unwrap();
        assert_eq!(to, "bath");
        assert!(!world.room("bedroom").unwrap().has("Frobitz"));
        assert!(world.room("bath").unwrap().has("Frobitz"));
        assert_eq!(world.locate_player(), Some("bath"));
    }

    #[test]
    fn failed_move_changes_nothing() {
        let mut world = mk_world();

        // Legal direction, no exit assigned.
        let err = world.move_player("bedroom", Direction::West).unwrap_err();
        assert!(matches!(err, DomainError::NoExit(Direction::West)));
        assert!(world.room("bedroom").unwrap().has("Frobitz"));
        assert!(!world.room("bath").unwrap().has("Frobitz"));

        // Unknown origin key.
        let err = world.move_player("cellar", Direction::North).unwrap_err();
        assert!(matches!(err, DomainError::UnknownRoom(_)));
        assert_eq!(world.locate_player(), Some("bedroom"));
    }

    #[test]
    fn dangling_exit_target_fails_validation() {
        let mut world = mk_world();
        world
            .room_mut("bath")
            .unwrap()
            .add_exit(Direction::Up, "attic")
            .unwrap();
        assert!(matches!(
            world.validate_exits(),
            Err(DomainError::InvalidData(_))
        ));
        // And moving through it leaves the player where they were.
        world.move_player("bedroom", Direction::North).unwrap();
        let err = world.move_player("bath", Direction::Up).unwrap_err();
        assert!(matches!(err, DomainError::UnknownRoom(_)));
        assert!(world.room("bath").unwrap().has("Frobitz"));
    }

    #[test]
    fn player_take_moves_one_unit_from_floor_to_pockets() {
        let mut world = mk_world();
        let mut beer = Item::new("beer");
        beer.stackable = true;
        beer.count = 3;
        world.room_mut("bedroom").unwrap().put(beer).unwrap();

        world.player_take("bedroom", "beer").unwrap();
        assert_eq!(world.player.get("beer").map(|i| i.count), Some(1));
        assert_eq!(
            world.room("bedroom").unwrap().get("beer").map(|i| i.count),
            Some(2)
        );
    }

    #[test]
    fn player_take_refuses_fixtures_and_ghosts() {
        let mut world = mk_world();
        let mut table = Item::new("table");
        table.can_carry = false;
        world.room_mut("bedroom").unwrap().put(table).unwrap();

        assert!(matches!(
            world.player_take("bedroom", "table"),
            Err(DomainError::NotMovable(_))
        ));
        assert!(world.room("bedroom").unwrap().has("table"));
        assert!(matches!(
            world.player_take("bedroom", "unicorn"),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn player_drop_round_trips_through_the_floor() {
        let mut world = mk_world();
        let ax = Item::new("ax");
        world.player.put(ax).unwrap();

        world.player_drop("bedroom", "ax").unwrap();
        assert!(!world.player.has("ax"));
        assert!(world.room("bedroom").unwrap().has("ax"));

        world.player_take("bedroom", "ax").unwrap();
        assert!(world.player.has("ax"));
        assert!(!world.room("bedroom").unwrap().has("ax"));

        assert!(matches!(
            world.player_drop("bedroom", "whiskey"),
            Err(DomainError::NotCarrying(_))
        ));
    }
}
