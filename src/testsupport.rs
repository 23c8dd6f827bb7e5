//! Shared test fixtures for runner/focus test modules.
//!
//! [`ScriptedLauncher`] stands in for the zellij binary: tests queue the
//! outputs each spawn should produce and inspect the argv that was used.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::ZellijConfig;
use crate::error::ZellijError;
use crate::zellij::process::{ProcessLauncher, ProcessOutput};

/// Config pointing at a fake binary, default 10s timeout.
pub fn test_config(session: &str) -> ZellijConfig {
    ZellijConfig {
        session: session.to_string(),
        binary: PathBuf::from("/test/bin/zellij"),
        timeout_ms: 10_000,
    }
}

/// One recorded spawn.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordedCall {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub timeout: Duration,
}

/// Launcher replaying queued outputs in FIFO order.
///
/// Spawning with an empty queue panics so unexpected extra calls fail loudly.
#[derive(Debug, Default)]
pub struct ScriptedLauncher {
    outputs: Mutex<VecDeque<ProcessOutput>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedLauncher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, output: ProcessOutput) {
        self.outputs
            .lock()
            .expect("scripted outputs lock poisoned")
            .push_back(output);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .expect("scripted calls lock poisoned")
            .clone()
    }
}

#[async_trait]
impl ProcessLauncher for ScriptedLauncher {
    async fn launch(
        &self,
        program: &Path,
        args: &[String],
        limit: Duration,
    ) -> Result<ProcessOutput, ZellijError> {
        self.calls
            .lock()
            .expect("scripted calls lock poisoned")
            .push(RecordedCall {
                program: program.to_path_buf(),
                args: args.to_vec(),
                timeout: limit,
            });
        let next = self
            .outputs
            .lock()
            .expect("scripted outputs lock poisoned")
            .pop_front();
        Ok(next.unwrap_or_else(|| panic!("unexpected zellij spawn: {args:?}")))
    }
}
