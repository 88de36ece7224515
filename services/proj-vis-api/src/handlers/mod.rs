//! HTTP request handlers.

pub mod grid;
