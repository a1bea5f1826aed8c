//! Model → entity mappers

mod book;
mod post;
mod rate_limit;
mod tier;
mod user;
