pub mod config;
pub mod output;
pub mod process;
pub mod repositories;
