//! # todoboard
//!
//! Fetch-and-render pipeline for a JSON todo API.
//!
//! ## Pieces
//!
//! 1. **Fetcher** ([`fetcher`]) - one `GET` per request, explicit status check, JSON decode
//! 2. **Renderer** ([`renderer`]) - applies a fetch outcome to a [`DisplayTarget`]
//! 3. **Error display** ([`display::show_error`]) - writes a failure message into a slot
//! 4. **Board** ([`session`]) - the per-page context tying the two together
//! 5. **Aggregation** ([`settle`]) - `settle_all`, `all` and `race` over request groups
//!
//! ## Running
//!
//! ```bash
//! cargo run -- list
//! cargo run -- show 1
//! cargo run -- settle 1 2 9999
//! ```
//!
//! ## Key Dependencies
//!
//! - `reqwest` - HTTP client
//! - `tokio` - async runtime (current-thread in the binary)
//! - `futures` - join/select combinators behind [`settle`]
//! - `thiserror` - library error types
//! - `tracing` - request and render events

pub mod config;
pub mod display;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod model;
pub mod renderer;
pub mod session;
pub mod settle;
pub mod terminal;

pub use config::BoardConfig;
pub use display::DisplayTarget;
pub use error::{ConfigError, ErrorKind, FetchError};
pub use fetcher::Fetcher;
pub use model::{FetchResult, Payload, ResourceRequest, Shape, Todo};
pub use renderer::{render, Rendered};
pub use session::Board;
pub use settle::{settle_all, Settled};
