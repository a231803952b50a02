use crate::error::KaResult;
use crate::keyboard::Keyboard;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownLayout {
    Qwerty,
    Colemak,
    ColemakDh,
    Workman,
    Dvorak,
}

impl KnownLayout {
    // Row-major, 31 keys: 10 top, 11 home, 10 bottom.
    pub fn get_str(&self) -> &'static str {
        match self {
            Self::Qwerty => "qwertyuiopasdfghjkl;'zxcvbnm,./",
            Self::Colemak => "qwfpgjluy;arstdhneio'zxcvbkm,./",
            Self::ColemakDh => "qwfpbjluy;arstgmneio'zxcdvkh,./",
            Self::Workman => "qdrwbjfup;ashtgyneoi'zxmcvkl,./",
            // '/' takes the slot of '-' so the symbol set matches the others
            Self::Dvorak => "',.pyfgcrlaoeuidhtns/;qjkxbmwvz",
        }
    }
}

/// Named row-major layouts persisted as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutStore {
    layouts: BTreeMap<String, String>,
}

impl LayoutStore {
    pub fn with_known_layouts() -> Self {
        let layouts = KnownLayout::iter()
            .map(|l| (l.to_string(), l.get_str().to_string()))
            .collect();
        Self { layouts }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> KaResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Loads the store, or starts from the built-in layouts if the file does
    /// not exist yet.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> KaResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            info!("📂 Loading layouts: {}", path.display());
            Self::load(path)
        } else {
            warn!(
                "⚠️  Layout file '{}' not found. Using built-in layouts.",
                path.display()
            );
            Ok(Self::with_known_layouts())
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> KaResult<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    pub fn insert(&mut self, name: impl Into<String>, kb: &Keyboard) {
        self.layouts.insert(name.into(), kb.layout().to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.layouts.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Parses every stored layout, in name order.
    pub fn keyboards(&self) -> KaResult<Vec<(String, Keyboard)>> {
        self.layouts
            .iter()
            .map(|(name, layout)| Ok((name.clone(), Keyboard::new(layout)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_layouts_are_valid() {
        for layout in KnownLayout::iter() {
            let kb = Keyboard::new(layout.get_str());
            assert!(kb.is_ok(), "{} is not a valid layout", layout);
        }
    }

    #[test]
    fn test_known_layouts_share_symbol_set() {
        let mut qwerty: Vec<char> = KnownLayout::Qwerty.get_str().chars().collect();
        qwerty.sort_unstable();
        for layout in KnownLayout::iter() {
            let mut chars: Vec<char> = layout.get_str().chars().collect();
            chars.sort_unstable();
            assert_eq!(chars, qwerty, "{}", layout);
        }
    }

    #[test]
    fn test_keyboards_sorted_by_name() {
        let store = LayoutStore::with_known_layouts();
        let names: Vec<String> = store.keyboards().unwrap().into_iter().map(|(n, _)| n).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(store.len(), 5);
    }
}
