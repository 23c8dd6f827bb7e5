//! Simulated zellij session for integration tests.
//!
//! [`SimulatedZellij`] implements `ProcessLauncher` over an in-memory set of
//! tabs, so focus moves caused by actions are visible to later `dump-layout`
//! calls exactly as they would be against a live session.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use zellij_tools::config::ZellijConfig;
use zellij_tools::error::ZellijError;
use zellij_tools::zellij::{ProcessLauncher, ProcessOutput};

#[derive(Debug)]
struct SessionState {
    tabs: Vec<String>,
    focused: Option<usize>,
    calls: Vec<Vec<String>>,
}

/// In-memory zellij session keyed by tab name.
#[derive(Debug)]
pub struct SimulatedZellij {
    state: Mutex<SessionState>,
}

impl SimulatedZellij {
    /// Session with the given tabs; `focused` names the focused one, if any.
    pub fn new(tabs: &[&str], focused: Option<&str>) -> Arc<Self> {
        let tabs: Vec<String> = tabs.iter().map(|t| t.to_string()).collect();
        let focused = focused.and_then(|name| tabs.iter().position(|t| t == name));
        Arc::new(Self {
            state: Mutex::new(SessionState {
                tabs,
                focused,
                calls: Vec::new(),
            }),
        })
    }

    pub fn focused_tab(&self) -> Option<String> {
        let state = self.state.lock().expect("sim lock");
        state.focused.map(|idx| state.tabs[idx].clone())
    }

    pub fn tabs(&self) -> Vec<String> {
        self.state.lock().expect("sim lock").tabs.clone()
    }

    /// Full argv of every spawn so far.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.state.lock().expect("sim lock").calls.clone()
    }

    /// Action verb (`dump-layout`, `go-to-tab-name`, ...) of every spawn so far.
    pub fn verbs(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|args| {
                let start = args.iter().position(|a| a == "action").map_or(0, |i| i + 1);
                args.get(start).cloned().unwrap_or_default()
            })
            .collect()
    }

    fn dump_layout(state: &SessionState) -> String {
        let mut out = String::from("layout {\n");
        for (idx, name) in state.tabs.iter().enumerate() {
            let focus = if state.focused == Some(idx) {
                " focus=true"
            } else {
                ""
            };
            out.push_str(&format!(
                "    tab name=\"{name}\"{focus} hide_floating_panes=true {{\n        pane focus=true\n    }}\n"
            ));
        }
        out.push_str("}\n");
        out
    }
}

#[async_trait]
impl ProcessLauncher for SimulatedZellij {
    async fn launch(
        &self,
        _program: &Path,
        args: &[String],
        _limit: Duration,
    ) -> Result<ProcessOutput, ZellijError> {
        let mut state = self.state.lock().expect("sim lock");
        state.calls.push(args.to_vec());

        let rest: Vec<&str> = match args {
            [flag, _session, action, rest @ ..] if flag == "--session" && action == "action" => {
                rest.iter().map(String::as_str).collect()
            }
            _ => return Ok(ProcessOutput::exited(2, "", "unsupported invocation")),
        };

        let output = match rest.as_slice() {
            ["dump-layout"] => ProcessOutput::exited(0, Self::dump_layout(&state), ""),
            ["go-to-tab-name", name] => match state.tabs.iter().position(|t| t == name) {
                Some(idx) => {
                    state.focused = Some(idx);
                    ProcessOutput::exited(0, "", "")
                }
                None => ProcessOutput::exited(1, "", format!("no tab named {name}\n")),
            },
            ["new-tab", "--name", name] => {
                state.tabs.push(name.to_string());
                state.focused = Some(state.tabs.len() - 1);
                ProcessOutput::exited(0, "", "")
            }
            ["query-tab-names"] => ProcessOutput::exited(0, state.tabs.join("\n") + "\n", ""),
            _ => ProcessOutput::exited(2, "", "unknown action"),
        };
        Ok(output)
    }
}

pub fn sim_config(session: &str) -> ZellijConfig {
    ZellijConfig {
        session: session.to_string(),
        binary: PathBuf::from("/sim/bin/zellij"),
        timeout_ms: 10_000,
    }
}
