//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod item_list;
mod listing;

pub use header::Header;
pub use item_list::ItemList;
pub use listing::ListingForm;
