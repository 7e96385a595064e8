use include_dir::{include_dir, Dir};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{Error, Result};

static LANG_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/lang");

#[derive(Deserialize, Clone, Debug)]
pub struct Language {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl Language {
    pub fn load(name: &str) -> Result<Self> {
        read_asset(&format!("{name}.json"))
    }

    pub fn english() -> Result<Self> {
        Self::load("english")
    }
}

/// Deserialize one of the JSON files bundled into the binary
pub(crate) fn read_asset<T: DeserializeOwned>(file_name: &str) -> Result<T> {
    let file = LANG_DIR
        .get_file(file_name)
        .ok_or_else(|| Error::MissingAsset(file_name.to_string()))?;

    let contents = file
        .contents_utf8()
        .ok_or_else(|| Error::InvalidAsset(file_name.to_string()))?;

    Ok(serde_json::from_str(contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_language_english() {
        let lang = Language::english().unwrap();

        assert_eq!(lang.name, "english");
        assert!(!lang.words.is_empty());
        assert_eq!(lang.size as usize, lang.words.len());
    }

    #[test]
    fn test_words_have_no_delimiters() {
        let lang = Language::english().unwrap();
        assert!(lang.words.iter().all(|w| !w.is_empty() && !w.contains(' ')));
    }

    #[test]
    fn test_language_deserialization() {
        let json_data = r#"
        {
            "name": "test",
            "size": 3,
            "words": ["hello", "world", "test"]
        }
        "#;

        let lang: Language = serde_json::from_str(json_data).unwrap();

        assert_eq!(lang.name, "test");
        assert_eq!(lang.size, 3);
        assert!(lang.words.contains(&"world".to_string()));
    }

    #[test]
    fn test_missing_language() {
        assert_matches!(Language::load("klingon"), Err(Error::MissingAsset(name)) if name == "klingon.json");
    }
}
