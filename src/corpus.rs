use crate::error::{KaResult, KeyAnnealError};
use fnv::FnvHashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Raw occurrence count of an n-gram.
pub type Count = i64;

pub const MONOGRAMS_FILE: &str = "monograms.txt";
pub const BIGRAMS_FILE: &str = "bigrams.txt";
pub const TRIGRAMS_FILE: &str = "trigrams.txt";

/// Character, bigram and trigram counts of a corpus.
///
/// Lookups of n-grams that never occurred return 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyModel {
    pub monograms: FnvHashMap<char, Count>,
    pub bigrams: FnvHashMap<[char; 2], Count>,
    pub trigrams: FnvHashMap<[char; 3], Count>,
}

impl FrequencyModel {
    #[inline(always)]
    pub fn monogram(&self, c: char) -> Count {
        self.monograms.get(&c).copied().unwrap_or(0)
    }

    #[inline(always)]
    pub fn bigram(&self, a: char, b: char) -> Count {
        self.bigrams.get(&[a, b]).copied().unwrap_or(0)
    }

    #[inline(always)]
    pub fn trigram(&self, a: char, b: char, c: char) -> Count {
        self.trigrams.get(&[a, b, c]).copied().unwrap_or(0)
    }

    pub fn bigram_total(&self) -> Count {
        self.bigrams.values().sum()
    }

    pub fn trigram_total(&self) -> Count {
        self.trigrams.values().sum()
    }

    /// Counts the characters, adjacent pairs and adjacent triples of one line.
    /// Lines shorter than two characters are ignored entirely.
    pub fn add_line(&mut self, line: &str) {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() < 2 {
            return;
        }

        for w in chars.windows(2) {
            *self.bigrams.entry([w[0], w[1]]).or_default() += 1;
        }
        for w in chars.windows(3) {
            *self.trigrams.entry([w[0], w[1], w[2]]).or_default() += 1;
        }
        for &c in &chars {
            *self.monograms.entry(c).or_default() += 1;
        }
    }

    /// Builds a model from raw text, one sample per line (e.g. a word list).
    pub fn from_text_reader<R: Read>(reader: R) -> KaResult<Self> {
        let mut model = Self::default();
        for line in BufReader::new(reader).lines() {
            model.add_line(&line?);
        }
        Ok(model)
    }

    pub fn load_text<P: AsRef<Path>>(path: P) -> KaResult<Self> {
        let path = path.as_ref();
        info!("📚 Loading text corpus: {}", path.display());

        let model = Self::from_text_reader(open(path)?)?;
        model.log_summary();
        Ok(model)
    }

    /// Loads precomputed counts from `monograms.txt`, `bigrams.txt` and
    /// `trigrams.txt` inside `dir`. Each line is `<ngram> <count>`.
    pub fn load_folder<P: AsRef<Path>>(dir: P) -> KaResult<Self> {
        let dir = dir.as_ref();
        info!("📚 Loading frequency folder: {}", dir.display());

        let mut model = Self::default();
        for (key, count) in read_counts(&dir.join(MONOGRAMS_FILE))? {
            if let Some([c]) = ngram_key::<1>(&key) {
                model.monograms.insert(c, count);
            }
        }
        for (key, count) in read_counts(&dir.join(BIGRAMS_FILE))? {
            if let Some(k) = ngram_key::<2>(&key) {
                model.bigrams.insert(k, count);
            }
        }
        for (key, count) in read_counts(&dir.join(TRIGRAMS_FILE))? {
            if let Some(k) = ngram_key::<3>(&key) {
                model.trigrams.insert(k, count);
            }
        }

        model.log_summary();
        Ok(model)
    }

    fn log_summary(&self) {
        debug!(
            "   -> Loaded: {} 1-grams, {} 2-grams, {} 3-grams.",
            self.monograms.len(),
            self.bigrams.len(),
            self.trigrams.len()
        );
    }
}

fn open(path: &Path) -> KaResult<File> {
    File::open(path).map_err(|e| {
        KeyAnnealError::Io(io::Error::new(
            e.kind(),
            format!("Could not open '{}': {}", path.display(), e),
        ))
    })
}

fn ngram_key<const N: usize>(key: &str) -> Option<[char; N]> {
    let chars: Vec<char> = key.chars().collect();
    chars.try_into().ok()
}

/// Reads whitespace separated `<key> <count>` lines. Malformed lines are skipped.
fn read_counts(path: &Path) -> KaResult<Vec<(String, Count)>> {
    let file = open(path)?;

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(file);

    let mut entries = Vec::new();
    let mut skipped = 0;

    for (row_idx, result) in rdr.records().enumerate() {
        let rec = match result {
            Ok(rec) => rec,
            Err(e) => {
                debug!("   ⚠️  [Row {}] Parse Error: {}", row_idx + 1, e);
                skipped += 1;
                continue;
            }
        };

        let fields: Vec<&str> = rec.iter().flat_map(str::split_whitespace).collect();
        if fields.len() != 2 {
            skipped += 1;
            continue;
        }

        match fields[1].parse::<Count>() {
            Ok(count) => entries.push((fields[0].to_string(), count)),
            Err(_) => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(
            "   ⚠️  Skipped {} invalid rows in {}.",
            skipped,
            path.display()
        );
    }

    Ok(entries)
}
