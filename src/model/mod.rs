pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod preset;
