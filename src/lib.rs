pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod format;
pub mod global;
pub mod keyboard;
pub mod model;
pub mod screens;
pub mod state;
pub mod terminal;
pub mod wizard;
