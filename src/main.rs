use std::io::stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use storefront_autocomplete::app::{App, Outcome};
use storefront_autocomplete::config::{Config, ConfigResult, load_config};
use storefront_autocomplete::logging::init_logging;
use storefront_autocomplete::lookup::{AutocompleteClient, lookup_once, spawn_worker};

/// How long to wait for terminal input before ticking again
const TICK: Duration = Duration::from_millis(20);

/// Search a storefront with live product suggestions
#[derive(Debug, Parser)]
#[command(name = "storefront-autocomplete", version, about)]
struct Args {
    /// Initial search text
    query: Option<String>,

    /// Storefront base URL, e.g. http://127.0.0.1:8000
    #[arg(long)]
    base_url: Option<String>,

    /// Delay after the last keystroke before looking up
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Minimum trimmed length before suggestions are fetched
    #[arg(long)]
    min_chars: Option<usize>,

    /// Config file (default: <config dir>/storefront-autocomplete/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print suggestions for QUERY and exit, without the interactive UI
    #[arg(long, value_name = "QUERY")]
    lookup: Option<String>,
}

impl Args {
    /// Command-line values win over the config file
    fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.endpoint.base_url = base_url.clone();
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.autocomplete.debounce_ms = debounce_ms;
        }
        if let Some(min_chars) = self.min_chars {
            config.autocomplete.min_query_len = min_chars;
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = Some(log_file.clone());
        }
    }
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    let ConfigResult {
        mut config,
        warning,
    } = load_config(args.config.as_deref());
    args.apply(&mut config);

    init_logging(config.log_file.as_deref())?;
    let client = AutocompleteClient::new(&config.endpoint)?;

    if let Some(query) = &args.lookup {
        for suggestion in lookup_once(&client, query, config.autocomplete.min_query_len)? {
            println!("{}", suggestion.label());
        }
        return Ok(());
    }

    let mut app = App::new(&config, spawn_worker(client));
    app.status = warning;
    if let Some(query) = &args.query {
        app.set_initial_query(query, Instant::now());
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let mut terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal (automatic cleanup)
    let _ = execute!(stdout(), DisableBracketedPaste, DisableMouseCapture);
    ratatui::restore();
    result?;

    if let Some(Outcome::Submitted { url, .. }) = app.outcome() {
        println!("{}", url);
    }

    Ok(())
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());

        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Handle events without blocking lookups or the debounce
        if event::poll(TICK)? {
            let event = event::read()?;
            app.handle_event(event, Instant::now());
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
