use std::fs::OpenOptions;
use std::io::{Write, stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;

use glossa::app::App;
use glossa::config::{Config, config_dir, load_config};
use glossa::service::{GlossaryClient, Worker};
use glossa::session::{FileStore, KeyValueStore, MemoryStore, stored_token};

mod cli;

use cli::{Cli, Command};

/// Log filter variable; logging stays off unless it is set
const LOG_ENV: &str = "GLOSSA_LOG";
const LOG_FILE: &str = "glossa.log";

/// Longest the event loop sleeps, so worker responses show up promptly
const MAX_POLL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    init_logging();

    let cli = Cli::parse();
    let mut config = load_config()?;
    cli.apply_to(&mut config);

    match cli.command {
        Some(Command::Suggest { ref query }) => {
            let store = open_store();
            let lang = cli.lookup_language(&config, store.as_ref());
            cli::run_suggest(&config, store.as_ref(), lang, &query.join(" "))
        }
        Some(Command::Search { ref query }) => {
            let store = open_store();
            let lang = cli.lookup_language(&config, store.as_ref());
            cli::run_search(&config, store.as_ref(), lang, &query.join(" "))
        }
        Some(Command::Login(args)) => cli::run_login(&mut session_file()?, args),
        Some(Command::Logout) => cli::run_logout(&mut session_file()?),
        Some(Command::Whoami) => {
            cli::run_whoami(open_store().as_mut());
            Ok(())
        }
        None => run_interactive(&config, open_store(), cli.lang.is_some(), cli.open.as_deref()),
    }
}

/// File logger under the config directory, only when GLOSSA_LOG is set
///
/// The terminal belongs to the UI, so nothing is ever logged to stderr.
fn init_logging() {
    let Ok(filter) = std::env::var(LOG_ENV) else {
        return;
    };
    let Some(dir) = config_dir() else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
    else {
        return;
    };

    let filter = if filter.trim().is_empty() {
        "debug".to_string()
    } else {
        filter
    };
    env_logger::Builder::new()
        .parse_filters(&filter)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Session file in the config directory, or memory when it cannot be read
fn open_store() -> Box<dyn KeyValueStore> {
    match FileStore::default_path().map(FileStore::open) {
        Some(Ok(store)) => Box::new(store),
        Some(Err(e)) => {
            log::warn!("Session file unusable, using a temporary session: {}", e);
            Box::new(MemoryStore::new())
        }
        None => Box::new(MemoryStore::new()),
    }
}

/// The session file itself, for commands whose only job is to change it
fn session_file() -> Result<FileStore> {
    let path = FileStore::default_path()
        .ok_or_else(|| eyre!("No home directory to keep the session file in"))?;
    FileStore::open(&path)
        .wrap_err_with(|| format!("Cannot open session file {}", path.display()))
}

fn run_interactive(
    config: &Config,
    store: Box<dyn KeyValueStore>,
    lang_flag: bool,
    open: Option<&str>,
) -> Result<()> {
    let client = GlossaryClient::new(&config.api, stored_token(store.as_ref()))?;
    log::info!(
        "Starting against {} (token: {})",
        client.base_url(),
        client.has_token()
    );
    let worker = Worker::spawn(Arc::new(client));

    let mut app = App::new(config, store, Some(worker))?;
    if lang_flag {
        app.change_language(config.locale.default, Instant::now());
    }
    if let Some(path) = open {
        app.open_path(path);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;

    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        let timeout = app
            .time_until_due(Instant::now())
            .map_or(MAX_POLL, |due| due.min(MAX_POLL));
        app.handle_events(timeout)?;

        app.tick(Instant::now());
        app.poll_worker();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
