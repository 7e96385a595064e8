use std::time::{Duration, SystemTime};

use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::typing_policy::{self, ScoringMode, DELIMITER};

/// Elapsed time below this counts as this much when computing wpm
pub const MIN_ELAPSED: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    NotStarted,
    InProgress,
    Completed,
}

/// Display state of one character of the word being typed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharState {
    Correct,
    Incorrect,
    Untyped,
}

/// Split a text into target words. Empty segments are dropped so that an
/// empty text has no words at all.
pub fn split_words(text: &str) -> Vec<String> {
    text.split(DELIMITER)
        .filter(|w| !w.is_empty())
        .map(str::to_owned)
        .collect()
}

/// One typing run over a fixed target text
#[derive(Debug, Clone)]
pub struct Session<C: Clock = SystemClock> {
    target_words: Vec<String>,
    target_char_count: usize,
    current_word_index: usize,
    current_input: String,
    started_at: Option<SystemTime>,
    ended_at: Option<SystemTime>,
    correct_char_count: usize,
    scoring_mode: ScoringMode,
    clock: C,
}

impl Session<SystemClock> {
    pub fn new(text: &str, scoring_mode: ScoringMode) -> Self {
        Self::with_clock(text, scoring_mode, SystemClock)
    }
}

impl<C: Clock> Session<C> {
    pub fn with_clock(text: &str, scoring_mode: ScoringMode, clock: C) -> Self {
        let target_words = split_words(text);
        let target_char_count = target_words.iter().map(|w| w.chars().count()).sum();
        Self {
            target_words,
            target_char_count,
            current_word_index: 0,
            current_input: String::new(),
            started_at: None,
            ended_at: None,
            correct_char_count: 0,
            scoring_mode,
            clock,
        }
    }

    /// Feed the full new value of the working input.
    pub fn apply_input_change(&mut self, new_value: String) {
        self.current_input = new_value;

        if self.started_at.is_none() {
            self.started_at = Some(self.clock.now());
            debug!(words = self.target_words.len(), "session started");
        }

        if self.ended_at.is_some() {
            return;
        }

        let Some(word) = self.target_words.get(self.current_word_index) else {
            return;
        };

        let typed = typing_policy::strip_delimiters(&self.current_input);
        let delimited = self.current_input.ends_with(DELIMITER);
        let is_last_word = self.current_word_index + 1 == self.target_words.len();
        let credit = typing_policy::word_credit(self.scoring_mode, &self.current_input, word);

        if is_last_word && (typed.chars().count() >= word.chars().count() || delimited) {
            self.correct_char_count += credit;
            self.current_word_index = self.target_words.len();
            self.ended_at = Some(self.clock.now());
            info!(
                wpm = self.words_per_minute(),
                accuracy = self.accuracy(),
                correct_chars = self.correct_char_count,
                "session completed"
            );
        } else if delimited {
            self.correct_char_count += credit;
            self.current_word_index += 1;
            self.current_input.clear();
        }
    }

    /// Type one more character on top of the working input
    pub fn type_char(&mut self, c: char) {
        let mut value = self.current_input.clone();
        value.push(c);
        self.apply_input_change(value);
    }

    pub fn backspace(&mut self) {
        self.current_input.pop();
    }

    /// Start over on `text`. The scoring mode is kept.
    pub fn reset(&mut self, text: &str)
    where
        C: Clone,
    {
        *self = Self::with_clock(text, self.scoring_mode, self.clock.clone());
        debug!(words = self.target_words.len(), "session reset");
    }

    pub fn phase(&self) -> SessionPhase {
        match (self.started_at, self.ended_at) {
            (_, Some(_)) => SessionPhase::Completed,
            (Some(_), None) => SessionPhase::InProgress,
            (None, None) => SessionPhase::NotStarted,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.ended_at.is_some()
    }

    pub fn elapsed(&self) -> Option<Duration> {
        let (start, end) = (self.started_at?, self.ended_at?);
        Some(end.duration_since(start).unwrap_or_default())
    }

    pub fn words_per_minute(&self) -> u32 {
        let Some(elapsed) = self.elapsed() else {
            return 0;
        };
        if self.target_words.is_empty() {
            return 0;
        }
        let minutes = elapsed.max(MIN_ELAPSED).as_millis() as f64 / 60_000.0;
        (self.target_words.len() as f64 / minutes).round() as u32
    }

    /// Share of the whole text credited so far, in percent. Reads 0 while
    /// the working input is empty, including between words.
    pub fn accuracy(&self) -> u32 {
        if self.current_input.is_empty() || self.target_char_count == 0 {
            return 0;
        }
        (self.correct_char_count as f64 / self.target_char_count as f64 * 100.0).round() as u32
    }

    /// Per-character state of the active word; empty once past the last word
    pub fn char_states(&self) -> Vec<CharState> {
        let Some(word) = self.target_words.get(self.current_word_index) else {
            return Vec::new();
        };
        let mut typed = self.current_input.chars();
        word.chars()
            .map(|expected| match typed.next() {
                Some(c) if c == expected => CharState::Correct,
                Some(_) => CharState::Incorrect,
                None => CharState::Untyped,
            })
            .collect()
    }

    /// `(current word index, total words)`
    pub fn progress(&self) -> (usize, usize) {
        (self.current_word_index, self.target_words.len())
    }

    pub fn target_words(&self) -> &[String] {
        &self.target_words
    }

    pub fn current_word(&self) -> Option<&str> {
        self.target_words
            .get(self.current_word_index)
            .map(String::as_str)
    }

    pub fn current_word_index(&self) -> usize {
        self.current_word_index
    }

    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    pub fn started_at(&self) -> Option<SystemTime> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<SystemTime> {
        self.ended_at
    }

    pub fn correct_char_count(&self) -> usize {
        self.correct_char_count
    }

    pub fn target_char_count(&self) -> usize {
        self.target_char_count
    }

    pub fn scoring_mode(&self) -> ScoringMode {
        self.scoring_mode
    }

    pub fn set_scoring_mode(&mut self, mode: ScoringMode) {
        self.scoring_mode = mode;
    }
}
