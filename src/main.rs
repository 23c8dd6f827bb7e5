//! CLI entry point for zellij-tools.

mod build_info;
mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use zellij_tools::config::load_config_with_diagnostics;
use zellij_tools::error::ZellijError;
use zellij_tools::zellij::{CommandOptions, CommandRunner, FocusCoordinator};

use cli::CliCommand;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    init_tracing(args.verbose);
    tracing::debug!(
        version = build_info::VERSION,
        commit = build_info::GIT_COMMIT,
        built = build_info::BUILD_TIMESTAMP,
        "zellij-tools starting"
    );

    let loaded = match load_config_with_diagnostics(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    for warning in &loaded.diagnostics.warnings {
        eprintln!("warning: {warning}");
    }

    let runner = CommandRunner::new(&loaded.config.zellij);
    match run(args.command, runner).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr so stdout stays clean for command output.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Execute one subcommand; returns the process exit code.
async fn run(command: CliCommand, runner: CommandRunner) -> Result<i32, ZellijError> {
    match command {
        CliCommand::FocusedTab { target } => {
            let focus = FocusCoordinator::new(runner);
            let name = focus.focused_tab_name(&target.options()).await?;
            println!("{}", name.as_deref().unwrap_or("none"));
            Ok(0)
        }
        CliCommand::Action {
            target,
            keep_focus,
            args,
        } => {
            let options = target.options();
            let focus = FocusCoordinator::new(runner.clone());
            let stdout = focus
                .with_focus_preservation(
                    || runner.execute_action_checked(args.as_slice(), &options),
                    keep_focus,
                    &options,
                )
                .await?;
            print_nonempty(&stdout);
            Ok(0)
        }
        CliCommand::Run { timeout_ms, args } => {
            let mut options = CommandOptions::default();
            if let Some(ms) = timeout_ms {
                options = options.with_timeout(std::time::Duration::from_millis(ms));
            }
            let result = runner.execute_raw(args.as_slice(), &options).await?;
            print_nonempty(&result.stdout);
            if !result.stderr.is_empty() {
                eprintln!("{}", result.stderr);
            }
            Ok(result.exit_code)
        }
    }
}

fn print_nonempty(text: &str) {
    if !text.is_empty() {
        println!("{text}");
    }
}
