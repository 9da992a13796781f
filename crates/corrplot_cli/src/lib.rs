//! Terminal front end for corrplot.

pub mod app;
pub mod config;
pub mod export;
pub mod interactive;
pub mod logging;
pub mod render;
pub mod sweep;
