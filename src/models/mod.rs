//! Configuration models shared by the page host and the browser adapter.

pub mod config;
