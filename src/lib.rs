pub mod config;
pub mod journal;
pub mod logging;
pub mod plugin;
