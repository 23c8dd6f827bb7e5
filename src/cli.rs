//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};
use std::time::Duration;
use zellij_tools::zellij::CommandOptions;

use crate::build_info;

/// Drive a zellij session from scripts and agents without stealing focus.
#[derive(Debug, Parser)]
#[command(name = "zellij-tools", version, long_version = build_info::LONG_VERSION)]
pub struct Args {
    /// Path to config file (default: ./zellij-tools.toml or ~/.config/zellij-tools/zellij-tools.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Log every zellij invocation to stderr.
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the focused tab's name, or `none`.
    FocusedTab {
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Run `zellij action <verb> [args...]` against the session.
    Action {
        #[command(flatten)]
        target: TargetArgs,
        /// Switch back to the currently focused tab once the action is done.
        #[arg(long = "keep-focus")]
        keep_focus: bool,
        /// Action verb and its arguments.
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Run a top-level zellij command (no `--session`), e.g. `list-sessions`.
    Run {
        /// Subprocess timeout in milliseconds.
        #[arg(long = "timeout-ms")]
        timeout_ms: Option<u64>,
        /// Command and its arguments.
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

/// Session targeting shared by session-scoped subcommands.
#[derive(Debug, clap::Args)]
pub struct TargetArgs {
    /// Session to target instead of the configured one.
    #[arg(short = 's', long = "session")]
    pub session: Option<String>,

    /// Subprocess timeout in milliseconds.
    #[arg(long = "timeout-ms")]
    pub timeout_ms: Option<u64>,
}

impl TargetArgs {
    pub fn options(&self) -> CommandOptions {
        CommandOptions {
            session: self.session.clone(),
            raw: false,
            timeout: self.timeout_ms.map(Duration::from_millis),
        }
    }
}
