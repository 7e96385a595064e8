use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::Config;
use crate::language::{Language, QuoteBook};

/// Text used when nothing else is available
pub const DEFAULT_TEXT: &str = "Type this as fast as you can!";

/// Word counts offered by the word-count menu
pub const WORD_COUNTS: [usize; 4] = [10, 25, 50, 100];

/// Where generated texts come from, as stored in the config
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Words,
    Quote,
}

impl SourceKind {
    pub fn toggled(self) -> Self {
        match self {
            SourceKind::Words => SourceKind::Quote,
            SourceKind::Quote => SourceKind::Words,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TextSource {
    Static(String),
    RandomWords(usize),
    Quote,
}

impl From<&Config> for TextSource {
    fn from(config: &Config) -> Self {
        match (&config.prompt, config.source) {
            (Some(prompt), _) => TextSource::Static(prompt.clone()),
            (None, SourceKind::Words) => TextSource::RandomWords(config.number_of_words),
            (None, SourceKind::Quote) => TextSource::Quote,
        }
    }
}

/// The next menu word count after `current`, wrapping around
pub fn next_word_count(current: usize) -> usize {
    WORD_COUNTS
        .iter()
        .copied()
        .find(|&n| n > current)
        .unwrap_or(WORD_COUNTS[0])
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub text: String,
    pub attribution: Option<String>,
}

impl Prompt {
    fn plain(text: String) -> Self {
        Self {
            text,
            attribution: None,
        }
    }
}

/// Produces target texts for new sessions
#[derive(Debug)]
pub struct TextGenerator {
    source: TextSource,
    language: Option<Language>,
    quotes: Option<QuoteBook>,
}

impl TextGenerator {
    pub fn new(source: TextSource) -> Self {
        let language = Language::english()
            .map_err(|e| warn!(error = %e, "word list unavailable"))
            .ok();
        let quotes = QuoteBook::load()
            .map_err(|e| warn!(error = %e, "quote list unavailable"))
            .ok();
        Self {
            source,
            language,
            quotes,
        }
    }

    pub fn source(&self) -> &TextSource {
        &self.source
    }

    pub fn set_source(&mut self, source: TextSource) {
        self.source = source;
    }

    pub fn generate(&self) -> String {
        self.generate_prompt().text
    }

    /// A new text along with who said it, when it is a quote
    pub fn generate_prompt(&self) -> Prompt {
        match &self.source {
            TextSource::Static(text) => Prompt::plain(text.clone()),
            TextSource::RandomWords(count) => Prompt::plain(
                self.language
                    .as_ref()
                    .map(|lang| lang.get_random(*count).join(" "))
                    .filter(|text| !text.is_empty())
                    .unwrap_or_else(|| DEFAULT_TEXT.to_string()),
            ),
            TextSource::Quote => self
                .quotes
                .as_ref()
                .and_then(QuoteBook::random)
                .map(|q| Prompt {
                    text: q.text.clone(),
                    attribution: Some(q.source.clone()),
                })
                .unwrap_or_else(|| Prompt::plain(DEFAULT_TEXT.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::split_words;

    #[test]
    fn test_static_text_verbatim() {
        let generator = TextGenerator::new(TextSource::Static("custom test prompt".to_string()));
        assert_eq!(generator.generate(), "custom test prompt");
        assert_eq!(generator.generate(), "custom test prompt");
    }

    #[test]
    fn test_random_words_count() {
        let generator = TextGenerator::new(TextSource::RandomWords(25));
        let text = generator.generate();

        assert_eq!(split_words(&text).len(), 25);
        assert!(!text.contains("  "));
    }

    #[test]
    fn test_random_words_zero_falls_back() {
        let generator = TextGenerator::new(TextSource::RandomWords(0));
        assert_eq!(generator.generate(), DEFAULT_TEXT);
    }

    #[test]
    fn test_quote_comes_from_book() {
        let generator = TextGenerator::new(TextSource::Quote);
        let text = generator.generate();
        let book = QuoteBook::load().unwrap();

        assert!(book.quotes.iter().any(|q| q.text == text));
    }

    #[test]
    fn test_quote_carries_attribution() {
        let generator = TextGenerator::new(TextSource::Quote);
        let prompt = generator.generate_prompt();
        let book = QuoteBook::load().unwrap();

        let quote = book.quotes.iter().find(|q| q.text == prompt.text).unwrap();
        assert_eq!(prompt.attribution.as_deref(), Some(quote.source.as_str()));
    }

    #[test]
    fn test_words_have_no_attribution() {
        let generator = TextGenerator::new(TextSource::RandomWords(10));
        assert_eq!(generator.generate_prompt().attribution, None);

        let generator = TextGenerator::new(TextSource::Static("hi".to_string()));
        assert_eq!(generator.generate_prompt(), Prompt::plain("hi".to_string()));
    }

    #[test]
    fn test_source_from_config() {
        let mut config = Config::default();
        config.number_of_words = 50;
        assert_eq!(TextSource::from(&config), TextSource::RandomWords(50));

        config.source = SourceKind::Quote;
        assert_eq!(TextSource::from(&config), TextSource::Quote);

        config.prompt = Some("hello".to_string());
        assert_eq!(
            TextSource::from(&config),
            TextSource::Static("hello".to_string())
        );
    }

    #[test]
    fn test_next_word_count_cycles() {
        assert_eq!(next_word_count(10), 25);
        assert_eq!(next_word_count(25), 50);
        assert_eq!(next_word_count(50), 100);
        assert_eq!(next_word_count(100), 10);
        assert_eq!(next_word_count(15), 25);
        assert_eq!(next_word_count(500), 10);
    }

    #[test]
    fn test_source_kind_toggle_and_display() {
        assert_eq!(SourceKind::Words.toggled(), SourceKind::Quote);
        assert_eq!(SourceKind::Quote.toggled(), SourceKind::Words);
        assert_eq!(SourceKind::Words.to_string(), "words");
        assert_eq!(SourceKind::Quote.to_string(), "quote");
    }
}
