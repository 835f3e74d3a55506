//! Jobdeck - A terminal job board for remote developer positions.
//!
//! # Usage
//!
//! ```bash
//! jobdeck
//! jobdeck --endpoint https://jobs.example.com/api/crackeddevs
//! jobdeck --search rust --print
//! jobdeck --html 42 > job.html
//! ```

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use jobdeck::app::App;
use jobdeck::board::JobBoard;
use jobdeck::config::{
    ConfigFlags, ThemeMode, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use jobdeck::export::{render_detail_html, render_page_text};
use jobdeck::fetch::{JobSource, load_jobs};

/// A terminal job board for remote developer positions
#[derive(Parser, Debug)]
#[command(name = "jobdeck", version, about, long_about = None)]
struct Cli {
    /// Job listing endpoint (GET, returns a JSON array of postings)
    #[arg(long, value_name = "URL", conflicts_with = "file")]
    endpoint: Option<String>,

    /// Read the listing from a JSON file instead of the endpoint
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Filter postings by title
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    search: String,

    /// Start on this page
    #[arg(short, long, value_name = "N")]
    page: Option<usize>,

    /// Print the current page as plain text and exit
    #[arg(long, conflicts_with = "html")]
    print: bool,

    /// Print the detail card of a posting as HTML and exit
    #[arg(long, value_name = "ID")]
    html: Option<String>,

    /// Disable company logos (show placeholders only)
    #[arg(long)]
    no_logos: bool,

    /// Force logo rendering to use half-cell fallback mode
    #[arg(long)]
    force_half_cell: bool,

    /// Color theme (light or dark)
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// Write logs to this file in interactive mode
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("jobdeck.log")
}

/// Log to stderr, or to a file while the terminal UI owns the screen.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn job_source(cli: &Cli, effective: &ConfigFlags) -> JobSource {
    if let Some(path) = &cli.file {
        return JobSource::File(path.clone());
    }
    effective
        .endpoint
        .clone()
        .map_or_else(JobSource::default, JobSource::Http)
}

fn write_stdout(text: &str) -> Result<()> {
    let mut out = std::io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let interactive = !cli.print && cli.html.is_none();
    if interactive {
        let log_path = effective.log_file.clone().unwrap_or_else(default_log_path);
        init_logging(Some(&log_path))?;
    } else {
        init_logging(None)?;
    }

    let source = job_source(&cli, &effective);

    if cli.print {
        let mut board = JobBoard::with_jobs(load_jobs(&source));
        board.set_search_text(cli.search);
        if let Some(page) = cli.page
            && !board.go_to_page(page)
        {
            tracing::warn!(page, pages = board.page_count(), "page out of range");
        }
        return write_stdout(&render_page_text(&board));
    }

    if let Some(id) = &cli.html {
        let board = JobBoard::with_jobs(load_jobs(&source));
        let html = render_detail_html(board.job(id)).context("Failed to render job detail")?;
        return write_stdout(&html);
    }

    // Run the application
    let mut app = App::new(source)
        .with_search(cli.search)
        .with_page(cli.page)
        .with_logos_enabled(!effective.no_logos)
        .with_force_half_cell(effective.force_half_cell)
        .with_theme(effective.theme.unwrap_or_default())
        .with_config_paths(
            Some(global_path),
            local_path.exists().then(|| local_path.clone()),
        );

    app.run().context("Application error")
}
