//! sarview — browse a `sar -A` text report in the terminal.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};

use sarview_core::parse_file;
use sarview_tui::app::AppState;
use sarview_tui::{config, input, logging, ui};

#[derive(Parser, Debug)]
#[command(name = "sarview", version, about = "Browse a sar -A text report")]
struct Cli {
    /// sar text report to load
    #[arg(short, long)]
    file: PathBuf,

    /// Config file (default: <config dir>/sarview/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(config::default_path);
    let (config, config_warning) = match config::load(&config_path) {
        Ok(config) => (config, None),
        Err(e) => (config::Config::default(), Some(format!("{e:#}"))),
    };

    // Keep the guard alive for the whole session so buffered logs flush.
    let _log_guard = match logging::init(&config) {
        Ok((guard, path)) => {
            info!(log = %path.display(), "logging initialised");
            Some(guard)
        }
        Err(e) => {
            eprintln!("warning: file logging disabled: {e:#}");
            None
        }
    };
    if let Some(msg) = &config_warning {
        warn!(config = %config_path.display(), error = %msg, "config ignored, using defaults");
    }

    let report = parse_file(&cli.file)
        .with_context(|| format!("failed to load {}", cli.file.display()))?;

    let mut app = AppState::new(cli.file.clone(), report, config);
    if let Some(msg) = config_warning {
        app.set_warning(format!("Config ignored: {msg}"));
    }

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("session ended");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}
