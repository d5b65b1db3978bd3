// File: ./src/lib.rs
pub mod carousel;
pub mod color_utils;
pub mod config;
pub mod date_utils;
pub mod event_list;
pub mod logging;
pub mod model;
pub mod paths;
pub mod source;

#[cfg(feature = "tui")]
pub mod tui;
