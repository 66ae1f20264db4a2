use serde::Serialize;

/// An entity that can sit in a container: a lantern on a table, gold in a
/// pocket, or the player standing in a room.
#[derive(Debug, Clone, Serialize)]
pub struct Item {
    /// Identity key within any container
    pub name: String,
    pub description: String,
    /// Tables and doors stay where they are
    pub can_carry: bool,
    /// Whether multiple units merge into one entry with a count
    pub stackable: bool,
    /// Units represented by this record; a stored record always has >= 1
    pub count: u32,
    /// Descriptive only, no logic reads it
    pub weight: u32,
}

impl Item {
    /// A carryable, single-instance item with a generated description.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let description = format!("You do not see anything special about {name}");
        Self {
            name,
            description,
            can_carry: true,
            stackable: false,
            count: 0,
            weight: 1,
        }
    }

    pub fn with_description(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::new(name)
        }
    }

    /// Inventory line for this record, e.g. `beer (x3)`.
    pub fn display_text(&self) -> String {
        if self.stackable && self.count > 1 {
            format!("{} (x{})", self.name, self.count)
        } else {
            self.name.clone()
        }
    }
}

/// Anything that resolves to an entity name: a plain name, or the item
/// itself. Lets container calls accept `"gold"` and `&gold` alike.
pub trait EntityKey {
    fn entity_key(&self) -> &str;
}

impl EntityKey for &str {
    fn entity_key(&self) -> &str {
        self
    }
}

impl EntityKey for &String {
    fn entity_key(&self) -> &str {
        self.as_str()
    }
}

impl EntityKey for &Item {
    fn entity_key(&self) -> &str {
        &self.name
    }
}
