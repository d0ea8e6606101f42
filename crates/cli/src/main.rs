use std::fmt::Write as _;
use std::path::Path;

use adminshell_tui::{RunOptions, themes};
use adminshell_types::{MenuEntryKind, ROUTE_TABLE};
use adminshell_util::{ConfigSource, LOG_FILE_PREFIX, LOG_FILE_SUFFIX, ShellConfig, default_log_dir, expand_tilde};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Rotated log files kept on disk.
const MAX_LOG_FILES: usize = 7;

/// Terminal admin dashboard shell.
#[derive(Debug, Parser)]
#[command(name = "adminshell", version, about)]
struct Args {
    /// JSON configuration file (defaults to $ADMINSHELL_CONFIG or the platform config dir)
    #[arg(long, value_name = "FILE")]
    config: Option<String>,

    /// Location to open at startup
    #[arg(long, value_name = "PATH", default_value = "/")]
    path: String,

    /// Theme id (dracula, dracula_hc, nord, nord_hc, ansi256)
    #[arg(long, value_name = "ID", env = "TUI_THEME")]
    theme: Option<String>,

    /// Validate the configuration, print the menu and routes, then exit
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = init_tracing(!args.check);

    let config_path = args.config.as_deref().map(expand_tilde);
    let (config, source) = ShellConfig::load(config_path.as_deref()).context("failed to load configuration")?;
    match &source {
        ConfigSource::Defaults => info!("using built-in configuration"),
        ConfigSource::File(path) => info!(path = %path.display(), "loaded configuration"),
    }

    if args.check {
        print!("{}", check_report(&config, &source));
        return Ok(());
    }

    let options = RunOptions {
        initial_path: args.path,
        theme_override: args.theme,
    };
    adminshell_tui::run(config, options).await
}

/// Logs go to stderr, except while the terminal UI owns the screen; then
/// they go to a daily rotated file under the log directory. Falls back to
/// stderr when the directory cannot be created. The returned guard flushes
/// the background writer on drop.
fn init_tracing(to_file: bool) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if !to_file {
        let _ = builder.with_writer(std::io::stderr).try_init();
        return None;
    }

    match log_file_appender(&default_log_dir()) {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = builder.with_ansi(false).with_writer(writer).try_init();
            Some(guard)
        }
        Err(error) => {
            let _ = builder.with_writer(std::io::stderr).try_init();
            warn!(error = %format!("{error:#}"), "file logging disabled");
            None
        }
    }
}

fn log_file_appender(directory: &Path) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(MAX_LOG_FILES)
        .build(directory)
        .with_context(|| format!("failed to open log directory {}", directory.display()))
}

/// Human-readable summary printed by `--check`.
fn check_report(config: &ShellConfig, source: &ConfigSource) -> String {
    let mut out = String::new();
    let origin = match source {
        ConfigSource::Defaults => "built-in defaults".to_string(),
        ConfigSource::File(path) => path.display().to_string(),
    };
    let _ = writeln!(out, "configuration: {origin}");
    let _ = writeln!(out, "project: {}", config.project_name);
    let _ = writeln!(out, "title: {}", config.title);
    let _ = writeln!(out, "user: {} <{}>", config.user.name, config.user.email);

    let _ = writeln!(out, "\nmenu:");
    for entry in &config.menu {
        match &entry.kind {
            MenuEntryKind::Leaf { path } => {
                let _ = writeln!(out, "  {} -> {}", entry.name, path);
            }
            MenuEntryKind::Container { submenu } => {
                let _ = writeln!(out, "  {} [submenu]", entry.name);
                for item in submenu {
                    let _ = writeln!(out, "    {} -> {}", item.name, item.path);
                }
            }
        }
    }

    let _ = writeln!(out, "\nroutes:");
    for (path, page) in ROUTE_TABLE {
        let _ = writeln!(out, "  {path} -> {page}");
    }
    let _ = writeln!(out, "  * -> Page Not Found");

    let _ = writeln!(out, "\nthemes:");
    for definition in themes::all() {
        let _ = writeln!(out, "  {:<12} {:<18} {}", definition.id, definition.label, definition.description);
    }
    out
}
