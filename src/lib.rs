//! zellij-tools: address a zellij session from scripts and agents.
//!
//! Most zellij CLI actions act on whatever tab currently has focus, and some
//! move focus as a side effect. This crate runs the zellij binary against an
//! explicit session with uniform result/timeout semantics, and can wrap any
//! focus-moving action so the user's focused tab is put back afterwards.
//!
//! # Quick start
//!
//! ```no_run
//! use zellij_tools::config::load_config;
//! use zellij_tools::zellij::{CommandOptions, CommandRunner, FocusCoordinator};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config(None)?;
//! let runner = CommandRunner::new(&config.zellij);
//! let focus = FocusCoordinator::new(runner.clone());
//! let opts = CommandOptions::default();
//! focus
//!     .with_focus_preservation(
//!         || runner.execute_action_checked(&["new-tab", "--name", "logs"], &opts),
//!         true,
//!         &opts,
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
#[cfg(test)]
pub mod testsupport;
pub mod zellij;
