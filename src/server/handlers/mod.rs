//! HTTP handlers, one module per operation.

pub mod health;
pub mod item_create;
pub mod item_delete;
pub mod item_list;
pub mod item_read;
pub mod item_update;

pub use health::{health, root, route_not_found};
pub use item_create::create_item;
pub use item_delete::delete_item;
pub use item_list::list_items;
pub use item_read::get_item;
pub use item_update::update_item;
