//! Read-only JSON views of the content tables.

pub mod handlers;
