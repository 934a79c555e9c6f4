//! # todo-core
//!
//! Domain model, mutation operations, and error types for the todo workspace.
//!
//! This crate provides the foundational types shared by every other crate:
//! - The `Item` entity persisted in the JSON data file
//! - The `Status` enum with case-insensitive parsing
//! - Pure mutation operations (add, update, delete) over an owned list
//! - Cross-cutting error types
//! - The request-scoped `RequestContext` (trace ID + cancellation)

pub mod context;
pub mod enums;
pub mod errors;
pub mod item;
pub mod ops;

pub use context::RequestContext;
pub use enums::Status;
pub use errors::CoreError;
pub use item::Item;
