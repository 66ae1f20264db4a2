pub mod commands;
pub mod config;
pub mod error;
pub mod import_world;
pub mod input;
pub mod models;
pub mod output;
pub mod state;

// Convenient re-exports (so call sites can do `frobitz::World`, etc.)
pub use commands::{CmdCtx, Flow, process_command};
pub use state::{session::Session, world::World};
