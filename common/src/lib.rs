pub mod config;
pub mod sequence;
