// File: ./src/model/mod.rs
pub mod adapter;
pub mod item;

pub use adapter::parse_event_date;
pub use item::{DataSnapshot, DataState, EventRecord};
