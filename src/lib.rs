pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod health;
pub mod net;
pub mod output;
pub mod runner;
