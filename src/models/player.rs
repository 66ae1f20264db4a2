use crate::error::AppResult;
use crate::models::container::Container;
use crate::models::item::{EntityKey, Item};
use serde::Serialize;

/// The actor moving through the world. Carries a container of their own and
/// is represented inside a room's container by the entity record from
/// [`Player::entity`].
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub name: String,
    pub description: String,
    pub race: String,
    pub container: Container,
}

impl Player {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        let container = Container::new(format!("{name}'s inventory"));
        Self {
            name,
            description: description.into(),
            race: "Orc".to_string(),
            container,
        }
    }

    /// The entity record a room stores while the player stands in it.
    /// Singular and carryable, so a room accepts it at most once.
    pub fn entity(&self) -> Item {
        Item::with_description(&self.name, &self.description)
    }

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

impl Default for Player {
    fn default() -> Self {
        Self::new("Frobitz", "You do not see anything special.")
    }
}
