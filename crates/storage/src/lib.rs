#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{
    InMemoryRepository, MenteeRepository, PillarRepository, ResponseRepository, SprintRepository,
    Storage, StorageError,
};
pub use sqlite::{SqliteInitError, SqliteRepository};
