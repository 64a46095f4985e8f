//! Core library for the Task Management System
//!
//! This crate contains the persistence and validation layer:
//! - Task model and status enumeration
//! - JSON file storage codec
//! - Task repository (create / read / update / delete)

pub mod error;
pub mod task;

pub use error::{Error, StoreError};
pub type Result<T> = std::result::Result<T, Error>;
