use keyanneal::corpus::FrequencyModel;
use keyanneal::error::KeyAnnealError;
use keyanneal::keyboard::Keyboard;
use keyanneal::layouts::{KnownLayout, LayoutStore};
use keyanneal::stats::{LayoutStats, StatsReport};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_missing_store_starts_from_known_layouts() {
    let dir = tempdir().unwrap();
    let store = LayoutStore::load_or_default(dir.path().join("layouts.json")).unwrap();

    assert_eq!(store.len(), 5);
    assert_eq!(store.get("qwerty"), Some(KnownLayout::Qwerty.get_str()));
    assert_eq!(store.get("colemak_dh"), Some(KnownLayout::ColemakDh.get_str()));
}

#[test]
fn test_store_save_and_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("layouts.json");

    let mut store = LayoutStore::with_known_layouts();
    let kb = Keyboard::new("',hqt;yezsainkmwpufv/o.ldjcgrxb").unwrap();
    store.insert("000 optimized sfb", &kb);
    store.save(&path).unwrap();

    let loaded = LayoutStore::load(&path).unwrap();
    assert_eq!(loaded, store);

    // Flat object, keys sorted.
    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let keys: Vec<&String> = raw.as_object().unwrap().keys().collect();
    assert_eq!(keys[0], "000 optimized sfb");
    assert_eq!(raw["000 optimized sfb"], "',hqt;yezsainkmwpufv/o.ldjcgrxb");
}

#[test]
fn test_insert_overwrites_by_name() {
    let mut store = LayoutStore::default();
    let qwerty = Keyboard::new(KnownLayout::Qwerty.get_str()).unwrap();
    let dvorak = Keyboard::new(KnownLayout::Dvorak.get_str()).unwrap();

    store.insert("000 optimized roll", &qwerty);
    store.insert("000 optimized roll", &dvorak);

    assert_eq!(store.len(), 1);
    assert_eq!(store.get("000 optimized roll"), Some(dvorak.layout()));
}

#[test]
fn test_invalid_stored_layout_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("layouts.json");
    fs::write(&path, r#"{ "short": "qwerty" }"#).unwrap();

    let store = LayoutStore::load(&path).unwrap();
    assert!(matches!(store.keyboards(), Err(KeyAnnealError::Layout(_))));
}

#[test]
fn test_malformed_store_is_json_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("layouts.json");
    fs::write(&path, "[1, 2").unwrap();

    assert!(matches!(LayoutStore::load(&path), Err(KeyAnnealError::Json(_))));
}

#[test]
fn test_stats_are_percentages() {
    let mut cf = FrequencyModel::default();
    cf.add_line("qaqa");
    cf.add_line("tyty");

    let kb = Keyboard::new(KnownLayout::Qwerty.get_str()).unwrap();
    let stats = LayoutStats::compute(&kb, &cf);

    // Bigrams: qa, aq, qa, ty, yt, ty -> 3 of 6 on one finger.
    assert_eq!(stats.sfb, 50.0);
    // Trigrams: qaq, aqa, tyt, yty -> the last two alternate.
    assert_eq!(stats.alternate, 50.0);
    assert_eq!(stats.roll, 0.0);
    assert_eq!(stats.three_roll, 0.0);
}

#[test]
fn test_stats_report_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stats.json");

    let mut cf = FrequencyModel::default();
    cf.add_line("the cat sat on the mat");

    let keyboards = LayoutStore::with_known_layouts().keyboards().unwrap();
    let report = StatsReport::compute(&keyboards, &cf);
    report.save_to_json(&path).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let qwerty = &raw["qwerty"];
    for key in ["alternate", "roll", "sfb", "3roll"] {
        assert!(qwerty[key].is_number(), "missing {}", key);
    }

    let reloaded: StatsReport = serde_json::from_value(raw).unwrap();
    assert_eq!(reloaded.layouts.len(), 5);
}
