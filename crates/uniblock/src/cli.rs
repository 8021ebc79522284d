//! Clap derive structures for the `uniblock` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// uniblock -- toggle a device's internet access on a UniFi controller
#[derive(Debug, Parser)]
#[command(
    name = "uniblock",
    version,
    about = "Manage internet access for a specific device on the UniFi network",
    long_about = "Block or unblock a single device's internet access on a UniFi controller.\n\n\
        The device is matched by hostname first, then by MAC address (both\n\
        case-insensitive). Controller settings come from UNIFI_* environment\n\
        variables or the config file.",
    after_help = "Environment:\n  \
        UNIFI_HOST, UNIFI_PORT, UNIFI_USERNAME, UNIFI_PASSWORD, UNIFI_VERSION,\n  \
        UNIFI_SITE, UNIFI_VERIFY_TLS, UNIFI_CA_CERT, UNIFI_TIMEOUT, UNIFI_CONTROLLER"
)]
pub struct Cli {
    /// The name (or MAC address) of the device to manage
    #[arg(value_name = "DEVICE")]
    pub device: String,

    /// Action to perform: 'block' or 'unblock'
    #[arg(value_name = "ACTION")]
    pub action: String,

    #[command(flatten)]
    pub global: GlobalOpts,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file (defaults to the platform config dir)
    #[arg(long, env = "UNIBLOCK_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'o', env = "UNIBLOCK_OUTPUT", default_value = "text")]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto")]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable sentence
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}
