//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod game_repo;
mod task_repo;

#[cfg(test)]
mod tests;

pub use traits::Repository;
pub use db::{init_db, DbState};
pub use game_repo::GameRepository;
pub use task_repo::TaskRepository;
