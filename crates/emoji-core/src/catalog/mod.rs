//! The emoji catalog: an immutable, family-partitioned list of records.
//!
//! Records are stored flat, grouped by family in [`FamilyId::ALL`] order, and
//! each record's [`EmojiId`] is its index in that flat list. Matching walks
//! the flat order; the full picker browses one family slice at a time.

mod data;

use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use smol_str::{SmolStr, format_smolstr};

pub(crate) use data::BUILTIN;

/// Emoji categories used to partition the catalog for browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum FamilyId {
    #[default]
    People,
    Nature,
    Activities,
    Places,
    Objects,
    Symbols,
}

impl FamilyId {
    pub const COUNT: usize = 6;

    /// Every family, in browsing order.
    pub const ALL: [FamilyId; Self::COUNT] = [
        FamilyId::People,
        FamilyId::Nature,
        FamilyId::Activities,
        FamilyId::Places,
        FamilyId::Objects,
        FamilyId::Symbols,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            FamilyId::People => "People",
            FamilyId::Nature => "Nature",
            FamilyId::Activities => "Activities",
            FamilyId::Places => "Places",
            FamilyId::Objects => "Objects",
            FamilyId::Symbols => "Symbols",
        }
    }

    /// Localization key for the family's tab label.
    pub fn label_key(self) -> SmolStr {
        format_smolstr!("family.{}", self.name().to_ascii_lowercase())
    }
}

impl fmt::Display for FamilyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown family name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown emoji family: {0}")]
pub struct UnknownFamily(pub String);

impl FromStr for FamilyId {
    type Err = UnknownFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FamilyId::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFamily(s.to_string()))
    }
}

/// Stable identity of a record: its position in the catalog's flat order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct EmojiId(u32);

impl EmojiId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One emoji with the localization keys used to describe and find it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiRecord {
    #[serde(skip)]
    id: EmojiId,
    pub glyph: SmolStr,
    /// Space-separated symbolic shortcuts, e.g. `":) :-)"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<SmolStr>,
    pub description_key: SmolStr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords_key: Option<SmolStr>,
    pub family: FamilyId,
}

impl EmojiRecord {
    pub fn new(
        family: FamilyId,
        glyph: impl Into<SmolStr>,
        description_key: impl Into<SmolStr>,
    ) -> Self {
        Self {
            id: EmojiId::default(),
            glyph: glyph.into(),
            shortcut: None,
            description_key: description_key.into(),
            keywords_key: None,
            family,
        }
    }

    pub fn with_shortcut(mut self, shortcut: impl Into<SmolStr>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    pub fn with_keywords(mut self, keywords_key: impl Into<SmolStr>) -> Self {
        self.keywords_key = Some(keywords_key.into());
        self
    }

    /// Identity assigned by the owning [`Catalog`].
    pub fn id(&self) -> EmojiId {
        self.id
    }
}

/// Immutable emoji collection. Build once, then share behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<EmojiRecord>,
    families: [Range<usize>; FamilyId::COUNT],
}

impl Catalog {
    /// Build a catalog from arbitrary records.
    ///
    /// Records are grouped by family in [`FamilyId::ALL`] order; order within
    /// a family is the input order.
    pub fn from_records(records: impl IntoIterator<Item = EmojiRecord>) -> Self {
        let mut records: Vec<EmojiRecord> = records.into_iter().collect();
        // Stable, so within-family order survives.
        records.sort_by_key(|r| r.family);

        let mut families: [Range<usize>; FamilyId::COUNT] = Default::default();
        for family in FamilyId::ALL {
            let start = records.partition_point(|r| r.family < family);
            let end = records.partition_point(|r| r.family <= family);
            families[family.index()] = start..end;
        }

        for (index, record) in records.iter_mut().enumerate() {
            record.id = EmojiId(index as u32);
        }

        Self { records, families }
    }

    /// Parse a JSON array of records.
    pub fn from_json(src: &str) -> emoji_common::Result<Self> {
        let records: Vec<EmojiRecord> =
            emoji_common::ConfigFormat::Json.parse("catalog.json", src.to_string())?;
        Ok(Self::from_records(records))
    }

    /// The catalog that ships with the crate.
    pub fn builtin() -> Self {
        Self::from_records(BUILTIN.iter().map(|entry| entry.record()))
    }

    /// Process-wide built-in catalog, built on first use.
    pub fn shared() -> Arc<Catalog> {
        static SHARED: OnceLock<Arc<Catalog>> = OnceLock::new();
        SHARED.get_or_init(|| Arc::new(Catalog::builtin())).clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: EmojiId) -> Option<&EmojiRecord> {
        self.records.get(id.index())
    }

    /// All records in matching order: family order, then insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, EmojiRecord> {
        self.records.iter()
    }

    /// Records of one family. Empty when the family has no entries.
    pub fn family(&self, family: FamilyId) -> &[EmojiRecord] {
        &self.records[self.families[family.index()].clone()]
    }

    pub fn find_glyph(&self, glyph: &str) -> Option<&EmojiRecord> {
        self.records.iter().find(|r| r.glyph == glyph)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a EmojiRecord;
    type IntoIter = std::slice::Iter<'a, EmojiRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_grouped_by_family_keep_input_order() {
        let catalog = Catalog::from_records([
            EmojiRecord::new(FamilyId::Symbols, "❤️", "heart"),
            EmojiRecord::new(FamilyId::People, "😀", "grin"),
            EmojiRecord::new(FamilyId::Symbols, "✨", "sparkles"),
            EmojiRecord::new(FamilyId::People, "😂", "joy"),
        ]);

        let glyphs: Vec<&str> = catalog.iter().map(|r| r.glyph.as_str()).collect();
        assert_eq!(glyphs, ["😀", "😂", "❤️", "✨"]);

        for (index, record) in catalog.iter().enumerate() {
            assert_eq!(record.id().index(), index);
            assert_eq!(catalog.get(record.id()), Some(record));
        }
    }

    #[test]
    fn empty_family_is_an_empty_slice() {
        let catalog = Catalog::from_records([EmojiRecord::new(FamilyId::Nature, "🐶", "dog")]);
        assert!(catalog.family(FamilyId::People).is_empty());
        assert!(catalog.family(FamilyId::Symbols).is_empty());
        assert_eq!(catalog.family(FamilyId::Nature).len(), 1);
    }

    #[test]
    fn builtin_covers_every_family() {
        let catalog = Catalog::builtin();
        for family in FamilyId::ALL {
            assert!(!catalog.family(family).is_empty(), "{family} is empty");
            assert!(catalog.family(family).iter().all(|r| r.family == family));
        }
        let total: usize = FamilyId::ALL.iter().map(|f| catalog.family(*f).len()).sum();
        assert_eq!(total, catalog.len());
    }

    #[test]
    fn builtin_glyphs_are_unique() {
        let catalog = Catalog::builtin();
        for record in &catalog {
            assert_eq!(catalog.find_glyph(&record.glyph).map(|r| r.id()), Some(record.id()));
        }
    }

    #[test]
    fn family_names_parse_case_insensitively() {
        assert_eq!("nature".parse::<FamilyId>(), Ok(FamilyId::Nature));
        assert_eq!("SYMBOLS".parse::<FamilyId>(), Ok(FamilyId::Symbols));
        assert!("food".parse::<FamilyId>().is_err());
        assert_eq!(FamilyId::Places.label_key(), "family.places");
    }

    #[test]
    fn json_catalog_loads() {
        let catalog = Catalog::from_json(
            r#"[
                {"glyph": "🙂", "shortcut": ":)", "description_key": "d.smile", "keywords_key": "k.smile", "family": "People"},
                {"glyph": "🐶", "description_key": "d.dog", "family": "Nature"}
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.family(FamilyId::People)[0].shortcut.as_deref(), Some(":)"));
        assert_eq!(catalog.family(FamilyId::Nature)[0].keywords_key, None);
    }
}
