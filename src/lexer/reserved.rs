use lazy_static::lazy_static;
use log::debug;
use std::{collections::HashSet, fs, io, path::Path};

lazy_static! {
    static ref PASCAL_RESERVED: ReservedWords =
        ReservedWords::parse(include_str!("../../pascal_reserved_words.txt"));
}

/// Case-sensitive set of spellings that classify as `ReservedWord` instead
/// of `Identifier`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservedWords {
    words: HashSet<String>,
}

impl ReservedWords {
    pub fn new() -> Self {
        ReservedWords::default()
    }

    /// Builds a set from a word list with one word per line. Surrounding
    /// whitespace is trimmed and blank lines are skipped.
    pub fn parse(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .collect()
    }

    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let words = ReservedWords::parse(&fs::read_to_string(path)?);
        debug!("loaded {} reserved words from {}", words.len(), path.display());
        Ok(words)
    }

    /// The built-in Pascal reserved-word list.
    pub fn pascal() -> &'static ReservedWords {
        &PASCAL_RESERVED
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ReservedWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        ReservedWords {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}
