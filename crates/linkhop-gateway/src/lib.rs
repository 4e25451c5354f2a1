//! HTTP surface of linkhop.
//!
//! | route | handler |
//! |---|---|
//! | `GET /url` | list every short link, newest first |
//! | `POST /url` | shorten `{ "url": ... }` |
//! | `GET /u/{slug}` | 302 to the stored URL, or 404 |
//! | `GET /health` | liveness |

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::{AppError, Operation, Result};
pub use state::AppState;
