//! Command handlers, one module per subcommand.

pub mod assemble;
pub mod completions;
pub mod config;
pub mod init;
pub mod purge;
pub mod quick;
