//! formsmith - terminal form builder
//!
//! A Ratatui-based TUI for building simple forms (text, radio and checkbox
//! fields), stored locally as JSON and exportable as HTML.

mod app;
mod builder;
mod config;
mod model;
mod platform;
mod render;
mod state;
mod storage;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::{Parser, Subcommand};
use config::FormsmithConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use model::listed_forms;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use storage::{FileStore, FormStorage, KeyValueStore, MemoryStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "formsmith", version, about = "Build simple forms in the terminal")]
struct Cli {
    /// JSON store file (defaults to the platform data directory)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Keep forms in memory only; nothing is written to disk
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the interactive form builder (default)
    Tui,
    /// Render the forms list as a standalone HTML page
    Html {
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print every stored form, including ones without fields
    List,
    /// Show the configuration, saving any values given
    Config {
        /// Store file to use from now on
        #[arg(long = "set-data-file")]
        data_file: Option<PathBuf>,
        /// Default log filter (overridden by RUST_LOG)
        #[arg(long = "set-log-filter")]
        log_filter: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = FormsmithConfig::load().unwrap_or_else(|e| {
        eprintln!("Ignoring unreadable config: {e}");
        FormsmithConfig::default()
    });

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Some(Commands::Config {
        data_file,
        log_filter,
    }) = &cli.command
    {
        return run_config(config, data_file.clone(), log_filter.clone());
    }

    if cli.ephemeral {
        return run_command(cli.command, MemoryStore::new(), "memory (not saved)");
    }

    let store = FileStore::new(config.data_file(cli.data_file.as_deref()));
    let label = store.path().display().to_string();
    tracing::debug!("Using store {label}");
    run_command(cli.command, store, &label)
}

/// Persist any new settings, then print the effective configuration
fn run_config(
    mut config: FormsmithConfig,
    data_file: Option<PathBuf>,
    log_filter: Option<String>,
) -> Result<()> {
    if config.apply(data_file, log_filter) {
        config.save().context("saving config")?;
        tracing::info!("Configuration saved");
    }
    println!("data_file\t{}", config.data_file(None).display());
    println!("log_filter\t{}", config.log_filter());
    Ok(())
}

fn run_command<S: KeyValueStore>(command: Option<Commands>, store: S, label: &str) -> Result<()> {
    match command.unwrap_or(Commands::Tui) {
        Commands::Tui => run_tui(App::new(store, label)),
        Commands::Html { out } => {
            let forms = FormStorage::new(store).get_forms();
            let page = render::render_page("Your Forms", &render::render_forms_list(&forms));
            match out {
                Some(path) => std::fs::write(&path, page)
                    .with_context(|| format!("writing {}", path.display()))?,
                None => print!("{page}"),
            }
            Ok(())
        }
        // Handled in main before a store is opened
        Commands::Config { .. } => Ok(()),
        Commands::List => {
            let forms = FormStorage::new(store).get_forms();
            let listed = listed_forms(&forms).len();
            for form in &forms {
                println!("{}\t{}\t{} field(s)", form.id, form.title, form.fields.len());
            }
            println!("{} stored, {listed} listed", forms.len());
            Ok(())
        }
    }
}

fn run_tui<S: KeyValueStore>(mut app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: KeyValueStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> Result<()> {
    loop {
        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    app.handle_key(key)?;
                }
                Event::Resize(_width, _height) => {
                    // Layout is recomputed on the next draw
                }
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_to_tui() {
        let cli = Cli::try_parse_from(["formsmith"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.ephemeral);
    }

    #[test]
    fn test_cli_html_with_out_and_global_flags() {
        let cli =
            Cli::try_parse_from(["formsmith", "html", "--out", "forms.html", "--ephemeral"])
                .unwrap();
        assert!(cli.ephemeral);
        match cli.command {
            Some(Commands::Html { out }) => assert_eq!(out, Some(PathBuf::from("forms.html"))),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_config_setters() {
        let cli = Cli::try_parse_from([
            "formsmith",
            "config",
            "--set-data-file",
            "/tmp/forms.json",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Config {
                data_file,
                log_filter,
            }) => {
                assert_eq!(data_file, Some(PathBuf::from("/tmp/forms.json")));
                assert!(log_filter.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_html_command_writes_page() {
        let out = storage::temp_store_path("forms.html");
        std::fs::create_dir_all(out.parent().unwrap()).unwrap();
        run_command(
            Some(Commands::Html { out: Some(out.clone()) }),
            MemoryStore::new(),
            "memory",
        )
        .unwrap();
        let page = std::fs::read_to_string(&out).unwrap();
        assert!(page.contains("No forms created yet."));
    }
}
