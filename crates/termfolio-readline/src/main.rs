mod console;
mod helper;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use termfolio_core::{InputRoute, Terminal, TerminalBuilder};
use termfolio_infrastructure::{JsonlContactOutbox, TermfolioPaths, TomlFlagStore, load_config};

use crate::console::{ConsoleHost, Renderer};
use crate::helper::CliHelper;

/// Interactive portfolio terminal.
#[derive(Parser, Debug)]
#[command(name = "termfolio", version, about, long_about = None)]
struct Args {
    /// Config file (defaults to <config_dir>/termfolio/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// State file holding the tutorial flags
    #[arg(long, value_name = "PATH")]
    state: Option<PathBuf>,

    /// Dispatch immediately instead of simulating processing time
    #[arg(long)]
    no_delay: bool,

    /// Forget that the tour was completed or skipped
    #[arg(long)]
    reset_tutorial: bool,

    /// Default log filter; RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Logs go to a daily file so the REPL output stays clean.
fn init_tracing(level: &str) -> Result<Option<WorkerGuard>> {
    let Ok(log_dir) = TermfolioPaths::log_dir() else {
        return Ok(None);
    };
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&log_dir, "termfolio.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

/// `#12` activates transcript line 12.
fn parse_line_ref(input: &str) -> Option<u64> {
    input.strip_prefix('#')?.parse().ok()
}

async fn submit(terminal: &mut Terminal, line: &str, delay: Duration) {
    match terminal.begin_submit(line) {
        Ok(pending) => {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            terminal.finish_submit(pending);
        }
        Err(e) => eprintln!("{}", e.to_string().yellow()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = init_tracing(&args.log_level)?;

    // ===== Configuration & State =====
    let loaded = load_config(args.config.as_deref()).context("Failed to load configuration")?;
    info!("[Main] Config source: {:?}", loaded.source);

    let state_path = match args.state {
        Some(path) => path,
        None => TermfolioPaths::state_file().context("Cannot resolve state file")?,
    };
    let flags = Arc::new(TomlFlagStore::open(&state_path).context("Failed to open state file")?);
    if args.reset_tutorial {
        flags.reset().context("Failed to reset tutorial flags")?;
    }

    let outbox_path = TermfolioPaths::outbox_file().context("Cannot resolve outbox file")?;
    let host = Arc::new(ConsoleHost::new(JsonlContactOutbox::new(outbox_path)));

    let mut terminal = TerminalBuilder::new(host.clone(), flags.clone())
        .config(&loaded.config)
        .build()
        .context("Invalid terminal configuration")?;

    let delay = if args.no_delay {
        Duration::ZERO
    } else {
        Duration::from_millis(terminal.settings().processing_delay_ms)
    };

    // ===== REPL Setup =====
    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new(terminal.registry())));

    let mut renderer = Renderer::default();
    terminal.boot();
    renderer.flush(&terminal, &host, false);
    println!(
        "{}",
        "Clickable lines end in [#n]; type #n to run them. Type 'quit' to leave.".bright_black()
    );
    println!();

    // ===== Main REPL Loop =====
    loop {
        let in_dialogue = terminal.route() == InputRoute::Dialogue;
        if let Some(helper) = rl.helper_mut() {
            helper.set_dialogue_active(in_dialogue);
        }

        let readline = rl.readline(&format!("{} ", terminal.prompt()));
        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if !in_dialogue {
                    if trimmed == "quit" || trimmed == "logout" {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    if !trimmed.is_empty() {
                        let _ = rl.add_history_entry(trimmed);
                    }
                    if let Some(id) = parse_line_ref(trimmed) {
                        match terminal.activate_line(id) {
                            Ok(true) => renderer.flush(&terminal, &host, true),
                            Ok(false) => println!("{}", format!("No clickable line #{}", id).yellow()),
                            Err(e) => eprintln!("{}", e.to_string().yellow()),
                        }
                        continue;
                    }
                }

                submit(&mut terminal, &line, delay).await;
                renderer.flush(&terminal, &host, false);
            }
            Err(ReadlineError::Interrupted) => {
                if terminal.interrupt() {
                    renderer.flush(&terminal, &host, false);
                } else {
                    println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
                }
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    debug!("[Main] Session ended with {} history entries", terminal.history().len());
    Ok(())
}
