//! Word list loading.
//!
//! Word lists are plain text with one entry per line. Line terminators (`\n`
//! or `\r\n`) are stripped; everything else on the line, including inner and
//! trailing spaces, is part of the word. Blank lines become empty words.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::data_structures::PrefixTrie;
use crate::error::NiihauResult;

/// A supplier of words to register.
#[cfg_attr(test, mockall::automock)]
pub trait WordSource {
    /// Returns every word, in order.
    fn load_words(&self) -> NiihauResult<Vec<String>>;

    /// Short description for log output.
    fn describe(&self) -> String;
}

/// Reads a word list from a file on disk.
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    /// Creates a source for the file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the word list.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileWordSource {
    fn load_words(&self) -> NiihauResult<Vec<String>> {
        let file = File::open(&self.path)?;
        Ok(read_words(BufReader::new(file))?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Reads one word per line from `reader`.
pub fn read_words<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    reader.lines().collect()
}

/// Registers every word from `source` in `trie` and returns how many were read.
pub fn load_into(trie: &mut PrefixTrie, source: &dyn WordSource) -> NiihauResult<usize> {
    let words = source.load_words()?;
    let count = words.len();
    trie.add_words(&words);

    tracing::info!(
        source = %source.describe(),
        words = count,
        nodes = trie.node_count(),
        "Loaded word list"
    );
    Ok(count)
}

impl PrefixTrie {
    /// Builds a trie from every word in `source`.
    pub fn from_source(source: &dyn WordSource) -> NiihauResult<Self> {
        let mut trie = Self::new();
        load_into(&mut trie, source)?;
        Ok(trie)
    }
}
