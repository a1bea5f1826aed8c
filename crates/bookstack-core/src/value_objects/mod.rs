//! Value objects shared across the domain

mod page;

pub use page::{PageQuery, DEFAULT_ITEMS_PER_PAGE, MAX_ITEMS_PER_PAGE};
