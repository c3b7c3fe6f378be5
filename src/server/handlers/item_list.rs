mod filters;
mod handler;

pub use filters::ListItemsQuery;
pub use handler::list_items;

#[cfg(test)]
#[path = "item_list_tests.rs"]
mod item_list_tests;
