// Library root for the pickxi binary: configuration, pool loading, CLI
// definitions and command handlers. Exposed so integration tests can drive
// the commands without spawning a process.

pub mod cli;
pub mod commands;
pub mod config;
pub mod pool;
