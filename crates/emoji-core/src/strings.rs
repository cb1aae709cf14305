//! Localized string lookup.
//!
//! The matcher resolves keyword keys through a [`Localizer`]; hosts usually
//! back it with their own resource system. [`StringTable`] is the in-memory
//! implementation used by the reference host and the CLI.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::{BUILTIN, FamilyId};

/// Resolves localization keys to display strings.
pub trait Localizer {
    /// Look up `key`. `None` when the key is unknown.
    fn resolve(&self, key: &str) -> Option<Cow<'_, str>>;
}

impl<L: Localizer + ?Sized> Localizer for &L {
    fn resolve(&self, key: &str) -> Option<Cow<'_, str>> {
        (**self).resolve(key)
    }
}

impl<L: Localizer + ?Sized> Localizer for Arc<L> {
    fn resolve(&self, key: &str) -> Option<Cow<'_, str>> {
        (**self).resolve(key)
    }
}

/// Key/value string table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringTable {
    entries: HashMap<String, String>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// English strings for the built-in catalog and family labels.
    pub fn english() -> Self {
        let mut table = Self::new();
        for entry in BUILTIN {
            table.insert(entry.description_key(), entry.description);
            if let Some(keywords) = entry.keywords {
                table.insert(entry.keywords_key(), keywords);
            }
        }
        for family in FamilyId::ALL {
            table.insert(family.label_key(), family.name());
        }
        table.insert(SHOW_MORE_KEY, "Show more emoji");
        table
    }

    /// Parse a flat JSON object of `"key": "value"` pairs.
    pub fn from_json(src: &str) -> emoji_common::Result<Self> {
        emoji_common::ConfigFormat::Json.parse("strings.json", src.to_string())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Layer `overrides` on top of this table; entries in `overrides` win.
    pub fn with_overrides(mut self, overrides: StringTable) -> Self {
        self.entries.extend(overrides.entries);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StringTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Localizer for StringTable {
    fn resolve(&self, key: &str) -> Option<Cow<'_, str>> {
        self.entries.get(key).map(|s| Cow::Borrowed(s.as_str()))
    }
}

/// Label key for the quick picker's "show more" entry.
pub const SHOW_MORE_KEY: &str = "picker.show_more";
