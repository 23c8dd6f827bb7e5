//! Focus preservation around focus-relocating zellij actions.
//!
//! Most zellij actions operate on whatever tab has focus, and several move
//! focus as a side effect. [`FocusCoordinator::with_focus_preservation`]
//! snapshots the focused tab, runs the caller's action, then switches back.
//!
//! Overlapping preserved operations against the same session are not
//! serialized: each snapshots and restores independently, so a later restore
//! can undo an earlier one.

use std::future::Future;
use tracing::{debug, warn};

use super::layout::focused_tab_name;
use super::runner::{CommandOptions, CommandRunner};
use crate::error::ZellijError;

/// Snapshot/act/restore on top of a [`CommandRunner`].
#[derive(Clone)]
pub struct FocusCoordinator {
    runner: CommandRunner,
}

impl FocusCoordinator {
    pub fn new(runner: CommandRunner) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &CommandRunner {
        &self.runner
    }

    /// Name of the currently focused tab, or `None` if no tab reports focus.
    ///
    /// Fails if the layout dump itself cannot be obtained.
    pub async fn focused_tab_name(
        &self,
        options: &CommandOptions,
    ) -> Result<Option<String>, ZellijError> {
        let layout = self
            .runner
            .execute_action_checked(&["dump-layout"], options)
            .await?;
        Ok(focused_tab_name(&layout))
    }

    /// Run `action`, keeping the user's focused tab where it was.
    ///
    /// With `preserve == false` this is just `action().await`. Otherwise the
    /// focused tab is captured first (a failure here means `action` never
    /// runs), `action` is awaited, and on success focus is switched back to
    /// the captured tab. If `action` fails its error is returned as-is and
    /// focus is left wherever the action put it.
    pub async fn with_focus_preservation<F, Fut, T, E>(
        &self,
        action: F,
        preserve: bool,
        options: &CommandOptions,
    ) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: From<ZellijError>,
    {
        if !preserve {
            return action().await;
        }

        let snapshot = self.focused_tab_name(options).await?;
        debug!(
            session = self.runner.session_for(options),
            focused_tab = ?snapshot,
            "captured focus before action"
        );

        let value = action().await?;

        let Some(tab) = snapshot else {
            debug!("no tab had focus; skipping restore");
            return Ok(value);
        };
        if let Err(err) = self.restore_focus(&tab, options).await {
            warn!(
                tab = %tab,
                error = %err,
                "action completed but restoring focus failed"
            );
            return Err(err.into());
        }
        Ok(value)
    }

    async fn restore_focus(&self, tab: &str, options: &CommandOptions) -> Result<(), ZellijError> {
        self.runner
            .execute_action_checked(&["go-to-tab-name", tab], options)
            .await?;
        Ok(())
    }
}
