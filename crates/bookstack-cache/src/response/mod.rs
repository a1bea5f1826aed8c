//! Best-effort response cache

mod store;

pub use store::ResponseCache;
