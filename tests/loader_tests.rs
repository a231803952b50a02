use keyanneal::corpus::{FrequencyModel, BIGRAMS_FILE, MONOGRAMS_FILE, TRIGRAMS_FILE};
use keyanneal::error::KeyAnnealError;
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

fn write_folder(dir: &std::path::Path) {
    fs::write(dir.join(MONOGRAMS_FILE), "e 500\nt 300\n' 20\n").unwrap();
    fs::write(
        dir.join(BIGRAMS_FILE),
        "th 120\nhe 100\nth 130\nbad\nxy notanumber\nabc 5\n",
    )
    .unwrap();
    fs::write(dir.join(TRIGRAMS_FILE), "the 80\n, a 3\nand 40 extra\n").unwrap();
}

// --- FOLDER LOADER ---

#[test]
fn test_folder_loader_parses_counts() {
    let dir = tempdir().unwrap();
    write_folder(dir.path());

    let cf = FrequencyModel::load_folder(dir.path()).unwrap();

    assert_eq!(cf.monogram('e'), 500);
    assert_eq!(cf.monogram('\''), 20);
    assert_eq!(cf.trigram('t', 'h', 'e'), 80);
    assert_eq!(cf.trigram('a', 'n', 'd'), 0);
}

#[test]
fn test_folder_loader_last_duplicate_wins() {
    let dir = tempdir().unwrap();
    write_folder(dir.path());

    let cf = FrequencyModel::load_folder(dir.path()).unwrap();
    assert_eq!(cf.bigram('t', 'h'), 130);
    assert_eq!(cf.bigram('h', 'e'), 100);
}

#[test]
fn test_folder_loader_skips_malformed_rows() {
    let dir = tempdir().unwrap();
    write_folder(dir.path());

    let cf = FrequencyModel::load_folder(dir.path()).unwrap();
    // "bad", "xy notanumber" and the 3-char key "abc" are dropped.
    assert_eq!(cf.bigrams.len(), 2);
    assert_eq!(cf.bigram_total(), 230);
}

#[test]
fn test_folder_loader_missing_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(MONOGRAMS_FILE), "e 1\n").unwrap();

    let res = FrequencyModel::load_folder(dir.path());
    match res {
        Err(KeyAnnealError::Io(e)) => assert!(e.to_string().contains(BIGRAMS_FILE)),
        other => panic!("expected io error, got {:?}", other),
    }
}

// --- TEXT LOADER ---

#[test]
fn test_text_loader_counts_windows() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "the").unwrap();
    writeln!(file, "then").unwrap();
    writeln!(file, "a").unwrap();

    let cf = FrequencyModel::load_text(file.path()).unwrap();

    assert_eq!(cf.monogram('t'), 2);
    assert_eq!(cf.monogram('n'), 1);
    // Single-character lines contribute nothing.
    assert_eq!(cf.monogram('a'), 0);
    assert_eq!(cf.bigram('t', 'h'), 2);
    assert_eq!(cf.bigram('e', 'n'), 1);
    assert_eq!(cf.trigram('t', 'h', 'e'), 2);
    assert_eq!(cf.trigram('h', 'e', 'n'), 1);
    // Windows never cross line boundaries.
    assert_eq!(cf.bigram('e', 't'), 0);
}

#[test]
fn test_text_loader_missing_file() {
    let dir = tempdir().unwrap();
    let res = FrequencyModel::load_text(dir.path().join("nope.txt"));
    assert!(matches!(res, Err(KeyAnnealError::Io(_))));
}
