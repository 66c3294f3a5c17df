pub mod config;
pub mod gradation;
pub mod output;
pub mod render;
pub mod sink;
pub mod stats;
pub mod user;
