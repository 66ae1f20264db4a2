use crate::error::{AppResult, DomainError};
use crate::models::dict::Dict;
use crate::models::item::{EntityKey, Item};
use serde::Serialize;

/// A named collection of entities, keyed by item name.
///
/// Rooms hold one for their floor, players hold one for their pockets. The
/// container stores its own records: `take` clones the static fields of the
/// offered item into a fresh record, so mutating the caller's copy afterwards
/// never changes what the container believes it holds.
#[derive(Debug, Clone, Serialize)]
pub struct Container {
    pub name: String,
    items: Dict<Item>,
}

impl Container {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let items = Dict::new(name.clone());
        Self { name, items }
    }

    pub fn has(&self, what: impl EntityKey) -> bool {
        self.items.has(what.entity_key())
    }

    pub fn get(&self, what: impl EntityKey) -> Option<&Item> {
        self.items.get(what.entity_key())
    }

    /// Accept one unit of `item`.
    ///
    /// Fails without mutating when the item cannot be carried, or when a
    /// non-stackable entry of the same name is already stored. Otherwise the
    /// stored count goes up by one, starting a fresh record at 1.
    pub fn take(&mut self, item: &Item) -> AppResult<()> {
        if !item.can_carry {
            tracing::debug!(item = %item.name, container = %self.name, "refused: cannot be moved");
            return Err(DomainError::NotMovable(item.name.clone()));
        }
        if let Some(held) = self.items.get_mut(&item.name) {
            if !held.stackable {
                tracing::debug!(item = %item.name, container = %self.name, "refused: already held, singular");
                return Err(DomainError::AlreadyHeld(item.name.clone()));
            }
            held.count += 1;
            tracing::trace!(item = %item.name, count = held.count, "stacked");
            return Ok(());
        }
        // Store a record of our own, never the caller's reference.
        let mut stored = item.clone();
        stored.count = 1;
        let key = stored.name.clone();
        self.items.set(key, stored)?;
        Ok(())
    }

    /// Give up one unit. The entry disappears when its count reaches zero;
    /// dropping something absent fails quietly and repeatably.
    pub fn drop(&mut self, what: impl EntityKey) -> AppResult<()> {
        let name = what.entity_key();
        let Some(held) = self.items.get_mut(name) else {
            tracing::debug!(item = %name, container = %self.name, "refused: not present");
            return Err(DomainError::NotCarrying(name.to_string()));
        };
        if held.count > 1 {
            held.count -= 1;
            return Ok(());
        }
        self.items.remove(name);
        Ok(())
    }

    /// Place a record directly, bypassing the carry policy.
    ///
    /// World building only: this is how a table ends up in a kitchen even
    /// though no one can pick it up. Stacks merge; colliding singular
    /// entries are rejected.
    pub fn put(&mut self, item: Item) -> AppResult<()> {
        let units = item.count.max(1);
        if let Some(held) = self.items.get_mut(&item.name) {
            if !held.stackable || !item.stackable {
                return Err(DomainError::AlreadyHeld(item.name));
            }
            held.count += units;
            return Ok(());
        }
        let mut stored = item;
        stored.count = units;
        let key = stored.name.clone();
        self.items.set(key, stored)?;
        Ok(())
    }

    /// Stored records in insertion order.
    pub fn list(&self) -> Vec<&Item> {
        self.items.values().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Diagnostic listing of the contents.
    pub fn printable_inventory(&self) -> String {
        let mut out = String::from("Inventory:");
        for item in self.items.values() {
            out.push_str("\n    ");
            out.push_str(&item.display_text());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stackable(name: &str) -> Item {
        let mut item = Item::new(name);
        item.stackable = true;
        item
    }

    #[test]
    fn gold_stacks_and_unstacks() {
        let gold = stackable("gold");
        let mut c = Container::new("pouch");

        assert!(c.take(&gold).is_ok());
        assert_eq!(c.get("gold").map(|i| i.count), Some(1));
        assert!(c.take(&gold).is_ok());
        assert_eq!(c.get("gold").map(|i| i.count), Some(2));

        assert!(c.drop("gold").is_ok());
        assert_eq!(c.get("gold").map(|i| i.count), Some(1));
        assert!(c.drop("gold").is_ok());
        assert!(!c.has("gold"));
    }

    #[test]
    fn repeated_takes_accumulate() {
        let beer = stackable("beer");
        let mut c = Container::new("crate");
        for _ in 0..5 {
            c.take(&beer).unwrap();
        }
        assert_eq!(c.get("beer").map(|i| i.count), Some(5));
    }

    #[test]
    fn singular_items_refuse_a_second_take() {
        let table = Item::new("table");
        let mut c = Container::new("room");

        assert!(c.take(&table).is_ok());
        let err = c.take(&table).unwrap_err();
        assert!(matches!(err, DomainError::AlreadyHeld(_)));
        assert_eq!(c.get("table").map(|i| i.count), Some(1));
        assert_eq!(c.list().len(), 1);
    }

    #[test]
    fn immovable_items_never_enter() {
        let mut anvil = Item::new("anvil");
        anvil.can_carry = false;
        let mut c = Container::new("bag");

        let before = c.list().len();
        assert!(matches!(c.take(&anvil), Err(DomainError::NotMovable(_))));
        assert!(matches!(c.take(&anvil), Err(DomainError::NotMovable(_))));
        assert_eq!(c.list().len(), before);
        assert!(!c.has("anvil"));
    }

    #[test]
    fn take_then_drop_returns_the_slot_to_absent() {
        let lantern = Item::new("lantern");
        let mut c = Container::new("pack");
        c.take(&lantern).unwrap();
        assert!(c.has("lantern"));
        c.drop(&lantern).unwrap();
        assert!(!c.has("lantern"));
    }

    #[test]
    fn dropping_what_is_absent_fails_forever_and_never_panics() {
        let mut c = Container::new("pack");
        for _ in 0..3 {
            assert!(matches!(c.drop("ghost"), Err(DomainError::NotCarrying(_))));
        }
    }

    #[test]
    fn stored_record_is_decoupled_from_the_caller() {
        let mut gold = stackable("gold");
        let mut c = Container::new("pouch");
        c.take(&gold).unwrap();
        c.take(&gold).unwrap();

        // The caller's copy never budged, and mangling it changes nothing.
        assert_eq!(gold.count, 0);
        gold.count = 99;
        gold.description = "fool's gold".to_string();
        assert_eq!(c.get("gold").map(|i| i.count), Some(2));
        assert!(c.get("gold").is_some_and(|i| i.description != "fool's gold"));
    }

    #[test]
    fn get_accepts_names_and_items() {
        let whiskey = Item::new("whiskey");
        let mut c = Container::new("cabinet");
        c.take(&whiskey).unwrap();
        assert!(c.has("whiskey"));
        assert!(c.has(&whiskey));
        assert_eq!(c.get(&whiskey).map(|i| i.name.as_str()), Some("whiskey"));
        assert!(c.get("rum").is_none());
    }

    #[test]
    fn put_places_fixed_furniture_and_merges_stacks() {
        let mut c = Container::new("kitchen");
        let mut table = Item::new("table");
        table.can_carry = false;
        c.put(table).unwrap();
        assert!(c.has("table"));
        assert_eq!(c.get("table").map(|i| i.count), Some(1));

        let mut beer = stackable("beer");
        beer.count = 3;
        c.put(beer.clone()).unwrap();
        c.put(beer).unwrap();
        assert_eq!(c.get("beer").map(|i| i.count), Some(6));

        let stool = Item::new("stool");
        c.put(stool.clone()).unwrap();
        assert!(matches!(c.put(stool), Err(DomainError::AlreadyHeld(_))));
    }

    #[test]
    fn list_keeps_insertion_order() {
        let mut c = Container::new("shelf");
        for name in ["chair", "table", "stool"] {
            c.take(&Item::new(name)).unwrap();
        }
        let names: Vec<&str> = c.list().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["chair", "table", "stool"]);
    }

    #[test]
    fn printable_inventory_lists_stacks() {
        let mut c = Container::new("pouch");
        c.take(&Item::new("ax")).unwrap();
        let gold = stackable("gold");
        c.take(&gold).unwrap();
        c.take(&gold).unwrap();
        let text = c.printable_inventory();
        assert!(text.contains("ax"));
        assert!(text.contains("gold (x2)"));
    }
}
