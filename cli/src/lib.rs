pub mod config;
pub mod repeval_commands;
