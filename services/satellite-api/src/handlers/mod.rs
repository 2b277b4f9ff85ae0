//! HTTP request handlers for the satellite API.

pub mod health;
pub mod historical;
pub mod imagery;
pub mod ndvi;
pub mod root;
