//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde and chrono).

mod error;
mod game;
mod task;

pub use error::{DomainError, DomainResult};
pub use game::{Game, Membership, Platform};
pub use task::Task;
