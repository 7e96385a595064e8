use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::Duration,
};
use tracing::{info, warn};
use typing_game::{
    app::App,
    config::{Config, ConfigStore, FileConfigStore},
    logging,
    runtime::{CrosstermEventSource, EventSource, GameEvent, Runner},
    text_source::SourceKind,
    typing_policy::ScoringMode,
};

const POLL_INTERVAL_MS: u64 = 250;

/// type the text, get your wpm and accuracy
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal typing game. Type the target text word by word; words-per-minute and accuracy are shown once the last word is typed. Esc restarts, F2 switches between random words and quotes, F3 changes the word count, Ctrl+C quits."
)]
pub struct Cli {
    /// number of random words to type (also selects random words as the source)
    #[clap(short = 'w', long)]
    number_of_words: Option<usize>,

    /// type a random quote instead of random words
    #[clap(short = 'q', long, conflicts_with = "number_of_words")]
    quote: bool,

    /// custom prompt to use for this run
    #[clap(short = 'p', long)]
    prompt: Option<String>,

    /// how finished words are credited toward accuracy
    #[clap(long, value_enum)]
    scoring: Option<ScoringMode>,

    /// log level for the log file (RUST_LOG takes precedence)
    #[clap(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    /// Layer command-line flags over the stored settings
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(n) = self.number_of_words {
            config.number_of_words = n;
            config.source = SourceKind::Words;
        }
        if self.quote {
            config.source = SourceKind::Quote;
        }
        if let Some(mode) = self.scoring {
            config.scoring_mode = mode;
        }
        config.prompt = self.prompt.clone();
        config
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    if let Some(path) = logging::init_default(&cli.log_level) {
        info!(log = %path.display(), "logging initialized");
    }

    let store = FileConfigStore::new();
    let config = cli.apply_to(store.load());
    let mut app = App::new(config);

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = store.save(&app.config) {
        warn!(error = %e, "failed to save settings");
    }

    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        Duration::from_millis(POLL_INTERVAL_MS),
    );
    run_loop(terminal, app, &runner)
}

/// Draw, then react to events until the app quits or input is gone
fn run_loop<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| ui(app, f))?;

    while !app.should_quit {
        match runner.step() {
            GameEvent::Key(key) => {
                app.handle_key(key);
                terminal.draw(|f| ui(app, f))?;
            }
            GameEvent::Resize => {
                terminal.draw(|f| ui(app, f))?;
            }
            GameEvent::Idle => {}
            GameEvent::Closed => {
                warn!("terminal input closed, exiting");
                break;
            }
        }
    }

    Ok(())
}

fn ui(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}
