// File: ./src/tui/mod.rs
pub mod action;
pub mod handlers;
pub mod state;
pub mod view;
