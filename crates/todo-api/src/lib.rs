//! # todo-api
//!
//! HTTP API over a shared [`todo_store::Store`].
//!
//! | route      | methods      | result                          |
//! |------------|--------------|---------------------------------|
//! | `/healthz` | GET          | `{"status":"ok"}`               |
//! | `/get`     | GET          | whole list, or one item `?id=N` |
//! | `/add`     | POST         | 201 + created item              |
//! | `/update`  | POST, PATCH  | updated item                    |
//! | `/delete`  | POST, DELETE | 204 No Content                  |
//! | `/list`    | GET          | HTML page                       |
//!
//! Errors are `{"error": "..."}` with 400 (validation / bad input), 404 (no
//! such item), 503 (cancelled or store closed) or 500. Every response carries
//! the request's `x-trace-id`.

mod app;
pub mod context;
pub mod error;
pub mod handlers;
mod server;
mod state;

pub use app::build_router;
pub use context::TRACE_ID_HEADER;
pub use error::{ApiError, ApiResult};
pub use server::{ServerError, serve};
pub use state::AppState;
