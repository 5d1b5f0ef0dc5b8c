pub mod classifier;
pub mod cli;
pub mod config;
pub mod core;
pub mod hotspot;
pub mod pipeline;
