use rand::seq::SliceRandom;
use serde::Deserialize;

use super::core::read_asset;
use crate::error::Result;

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Quote {
    pub text: String,
    pub source: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct QuoteBook {
    pub quotes: Vec<Quote>,
}

impl QuoteBook {
    pub fn load() -> Result<Self> {
        read_asset("quotes.json")
    }

    pub fn random(&self) -> Option<&Quote> {
        self.quotes.choose(&mut rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_quotes() {
        let book = QuoteBook::load().unwrap();
        assert!(!book.quotes.is_empty());
        assert!(book.quotes.iter().all(|q| !q.text.trim().is_empty()));
    }

    #[test]
    fn test_random_quote_from_book() {
        let book = QuoteBook::load().unwrap();
        let quote = book.random().unwrap();
        assert!(book.quotes.contains(quote));
    }

    #[test]
    fn test_random_on_empty_book() {
        let book = QuoteBook { quotes: vec![] };
        assert!(book.random().is_none());
    }
}
