//! Task module
//!
//! This module contains task-related types and logic.

mod model;
mod repository;
mod store;
mod validation;

pub use model::*;
pub use repository::TaskRepository;
pub use store::JsonTaskStore;
pub use validation::validate;
