use crossterm::event::KeyEvent;
use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::keys::{self, KeyAction};
use crate::session::Session;
use crate::text_source::{TextGenerator, TextSource};

/// The one active typing screen: settings, text supply and the session
#[derive(Debug)]
pub struct App<C: Clock + Clone = SystemClock> {
    pub config: Config,
    pub session: Session<C>,
    generator: TextGenerator,
    attribution: Option<String>,
    pub should_quit: bool,
}

impl App<SystemClock> {
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock + Clone> App<C> {
    pub fn with_clock(config: Config, clock: C) -> Self {
        let generator = TextGenerator::new(TextSource::from(&config));
        let prompt = generator.generate_prompt();
        let session = Session::with_clock(&prompt.text, config.scoring_mode, clock);
        Self {
            config,
            session,
            generator,
            attribution: prompt.attribution,
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.apply(keys::translate(key));
    }

    pub fn apply(&mut self, action: KeyAction) {
        let finished = self.session.is_completed();
        match action {
            KeyAction::Ignore => {}
            KeyAction::Type(c) if !finished => self.session.type_char(c),
            KeyAction::Backspace if !finished => self.session.backspace(),
            KeyAction::Type(_) | KeyAction::Backspace => {}
            KeyAction::Reset => self.restart(),
            KeyAction::Restart if finished => self.restart(),
            KeyAction::Restart => {}
            KeyAction::CycleSource => {
                self.config.cycle_source();
                self.reconfigure();
            }
            KeyAction::CycleWordCount => {
                self.config.cycle_word_count();
                self.reconfigure();
            }
            KeyAction::Quit => self.should_quit = true,
        }
    }

    /// Throw the session away and start over on a freshly generated text
    pub fn restart(&mut self) {
        let prompt = self.generator.generate_prompt();
        self.session.reset(&prompt.text);
        self.attribution = prompt.attribution;
    }

    /// Apply changed settings, then restart
    pub fn reconfigure(&mut self) {
        info!(
            source = %self.config.source,
            words = self.config.number_of_words,
            scoring = %self.config.scoring_mode,
            "settings changed"
        );
        self.generator.set_source(TextSource::from(&self.config));
        self.session.set_scoring_mode(self.config.scoring_mode);
        self.restart();
    }

    pub fn text_source(&self) -> &TextSource {
        self.generator.source()
    }

    /// Who the current text is by, for quotes
    pub fn attribution(&self) -> Option<&str> {
        self.attribution.as_deref()
    }
}
