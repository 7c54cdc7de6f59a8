//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use chainkit_core::domain::NetworkSelector;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "chainkit",
    bin_name = "chainkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26d3} Protocol interfaces for Truffle projects",
    long_about = "chainkit vendors DeFi protocol interfaces (Aave, Bancor, dYdX, \
                  Kyber, 1inch, Uniswap) into a Truffle/TypeScript project and \
                  exports their deployment addresses and ABIs.",
    after_help = "EXAMPLES:\n\
        \x20 chainkit init\n\
        \x20 chainkit assemble --yes\n\
        \x20 chainkit quick uniswap v2router02 --abi\n\
        \x20 chainkit completions bash > /usr/share/bash-completion/completions/chainkit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write a template `chainkit.json`.
    #[command(
        about = "Write a template chainkit.json",
        after_help = "EXAMPLES:\n\
            \x20 chainkit init\n\
            \x20 chainkit init --force -C ./my-dapp"
    )]
    Init(InitArgs),

    /// Build the project described by `chainkit.json`.
    #[command(
        visible_alias = "a",
        about = "Assemble the project from chainkit.json",
        after_help = "EXAMPLES:\n\
            \x20 chainkit assemble\n\
            \x20 chainkit assemble --yes --offline\n\
            \x20 chainkit assemble --dry-run"
    )]
    Assemble(AssembleArgs),

    /// Vendor a single pack without a config file.
    #[command(
        visible_alias = "q",
        about = "Write one protocol pack into the current project",
        after_help = "EXAMPLES:\n\
            \x20 chainkit quick bancor                     # list packs\n\
            \x20 chainkit quick bancor ibancornetwork --abi\n\
            \x20 chainkit quick dydx flashloan --network kovan --sol-version 0.8.6"
    )]
    Quick(QuickArgs),

    /// Empty the project directory.
    #[command(
        about = "Delete everything in the project directory",
        after_help = "EXAMPLES:\n\
            \x20 chainkit purge\n\
            \x20 chainkit purge --yes -C ./scratch"
    )]
    Purge(PurgeArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 chainkit completions bash > ~/.local/share/bash-completion/completions/chainkit\n\
            \x20 chainkit completions zsh  > ~/.zfunc/_chainkit\n\
            \x20 chainkit completions fish > ~/.config/fish/completions/chainkit.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the chainkit tool configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 chainkit config get defaults.network\n\
            \x20 chainkit config list\n\
            \x20 chainkit config path"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `chainkit init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing `chainkit.json`.
    #[arg(short = 'f', long = "force", help = "Overwrite existing chainkit.json")]
    pub force: bool,
}

// ── assemble ──────────────────────────────────────────────────────────────────

/// Arguments for `chainkit assemble`.
#[derive(Debug, Args)]
pub struct AssembleArgs {
    /// Answer yes to the package manager's init prompts.
    #[arg(short = 'y', long = "yes", help = "Pass -y to the package manager init")]
    pub yes: bool,

    /// Install from the package manager's offline cache.
    #[arg(long = "offline", help = "Install dependencies offline")]
    pub offline: bool,

    /// Print the commands instead of running them.
    #[arg(
        long = "dry-run",
        help = "Generate files but only print the commands that would run"
    )]
    pub dry_run: bool,
}

// ── quick ─────────────────────────────────────────────────────────────────────

/// Arguments for `chainkit quick`.
#[derive(Debug, Args)]
pub struct QuickArgs {
    /// Protocol name, e.g. `uniswap`.
    #[arg(value_name = "PROTOCOL", help = "Protocol (aave, bancor, dydx, kyber, oneinch, uniswap)")]
    pub protocol: String,

    /// Pack name. Omit to list the protocol's packs.
    #[arg(value_name = "PACK", help = "Pack to write; omit to list packs")]
    pub pack: Option<String>,

    /// Also export the pack's ABIs.
    #[arg(long = "abi", help = "Write ABI JSON files")]
    pub abi: bool,

    /// Skip installing the protocol's npm packages.
    #[arg(long = "omit-npm-pack", help = "Do not install npm packages")]
    pub omit_npm_pack: bool,

    /// Solidity version for the pragma (defaults to the configured one).
    #[arg(long = "sol-version", value_name = "VERSION", help = "Solidity compiler version")]
    pub sol_version: Option<String>,

    /// Network for the address snippet (defaults to the configured one).
    #[arg(
        long = "network",
        value_name = "NETWORK",
        value_parser = parse_network,
        help = "all, mainnet, kovan or ropsten"
    )]
    pub network: Option<NetworkSelector>,
}

fn parse_network(value: &str) -> Result<NetworkSelector, String> {
    value.parse().map_err(|e: chainkit_core::domain::DomainError| e.to_string())
}

// ── purge ─────────────────────────────────────────────────────────────────────

/// Arguments for `chainkit purge`.
#[derive(Debug, Args)]
pub struct PurgeArgs {
    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation")]
    pub yes: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `chainkit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `chainkit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.network`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
