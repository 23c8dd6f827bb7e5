//! Zellij command transport and focus preservation.
//!
//! [`CommandRunner`] spawns the zellij binary against a session;
//! [`FocusCoordinator`] builds snapshot/act/restore on top of it.

pub mod focus;
pub mod layout;
pub mod process;
pub mod runner;

pub use focus::FocusCoordinator;
pub use layout::focused_tab_name;
pub use process::{ProcessLauncher, ProcessOutput, ProcessStatus, TokioLauncher};
pub use runner::{CommandOptions, CommandResult, CommandRunner, ACTION_SETTLE_DELAY};
