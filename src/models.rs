pub mod container;
pub mod dict;
pub mod item;
pub mod player;
pub mod room;
pub mod types;
