use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const SAMPLE_SLIDES: [&str; 5] = [
    "Welcome to the presentation",
    "This is slide two",
    "Accessibility matters",
    "Everyone deserves equal access",
    "Thank you for watching",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub content: String,
}

impl Slide {
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into() }
    }
}

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read deck {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("deck contains no slides")]
    Empty,
}

/// Ordered, non-empty, fixed set of slides.
#[derive(Debug, Clone)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    pub fn new(slides: Vec<Slide>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(Self { slides })
    }

    /// The five slides shown when no deck file is given.
    pub fn sample() -> Self {
        Self {
            slides: SAMPLE_SLIDES.iter().map(|content| Slide::new(*content)).collect(),
        }
    }

    /// Parses plain text where slides are separated by blank lines. Lines
    /// inside one slide are joined with single spaces.
    pub fn parse(text: &str) -> Result<Self, DeckError> {
        let mut slides = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for line in text.lines().map(str::trim) {
            if line.is_empty() {
                if !current.is_empty() {
                    slides.push(Slide::new(current.join(" ")));
                    current.clear();
                }
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            slides.push(Slide::new(current.join(" ")));
        }

        Self::new(slides)
    }

    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let text = fs::read_to_string(path).map_err(|source| DeckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_deck_has_five_slides() {
        let deck = Deck::sample();
        assert_eq!(deck.len(), 5);
        assert_eq!(deck.get(0).map(|s| s.content.as_str()), Some("Welcome to the presentation"));
        assert_eq!(deck.get(4).map(|s| s.content.as_str()), Some("Thank you for watching"));
    }

    #[test]
    fn parse_splits_on_blank_lines_and_joins_lines() {
        let deck = Deck::parse("\n  First slide\ncontinues here\n\n\n\tSecond  \n   \nThird").unwrap();
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.get(0).unwrap().content, "First slide continues here");
        assert_eq!(deck.get(1).unwrap().content, "Second");
        assert_eq!(deck.get(2).unwrap().content, "Third");
    }

    #[test]
    fn empty_text_is_rejected() {
        assert!(matches!(Deck::parse(" \n\n \t\n"), Err(DeckError::Empty)));
        assert!(matches!(Deck::new(Vec::new()), Err(DeckError::Empty)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Deck::load(Path::new("/nonexistent/deck.txt")).unwrap_err();
        assert!(matches!(err, DeckError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/deck.txt"));
    }
}
