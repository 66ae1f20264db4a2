use crate::models::types::Direction;
use thiserror::Error;

pub type AppResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Direction string is not one of the known aliases
    #[error("invalid direction: {0}")]
    InvalidDirection(String),

    /// A room already has an exit in that direction; exits are write-once
    #[error("exit {0} is already in use")]
    ExitInUse(Direction),

    /// The direction is legal but the room has no exit there
    #[error("no exit {0} from here")]
    NoExit(Direction),

    /// Room key does not resolve to a registered room
    #[error("unknown room: {0}")]
    UnknownRoom(String),

    /// The item refuses to be carried at all
    #[error("{0} cannot be moved")]
    NotMovable(String),

    /// A non-stackable entry of the same name is already stored
    #[error("{0} is already in the container")]
    AlreadyHeld(String),

    /// Dropping or transferring something the container does not hold
    #[error("not carrying: {0}")]
    NotCarrying(String),

    /// Lookup of something that is not here
    #[error("not found: {0}")]
    NotFound(String),

    /// No current room
    #[error("no current room")]
    NoCurrentRoom,

    /// Contract violation; all other variants above are normal game outcomes
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// World definition failed validation
    #[error("invalid world data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
