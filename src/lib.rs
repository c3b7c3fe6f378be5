// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::indexing_slicing
    )
)]

pub mod cors;
pub mod http_logging;
pub mod item;
pub mod logging;
pub mod server;
pub mod user_config;

// Re-export commonly used types
pub use item::{FieldViolation, Item, ItemError, ItemPayload, ItemStore, ListFilter};
pub use server::{build_app, item_routes, AppState};
pub use user_config::{load_user_config, ServerSettings, UserConfig};
