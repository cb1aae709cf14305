//! Shortcut lookup and keyword search over the catalog.
//!
//! Results are ranked in three tiers: the exact shortcut hit, then records
//! where the query matches a whole keyword, then records where it only
//! matches the start of a keyword. Within a tier, catalog order is kept, so
//! the same catalog and strings always give the same output.

use emoji_common::perf;

use crate::catalog::{Catalog, EmojiRecord};
use crate::strings::Localizer;

/// Default trigger character.
pub const TRIGGER: char = ':';

/// How a record matched a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    /// The query is one of the record's shortcuts.
    Shortcut,
    /// The query matches one of the record's keywords in full.
    Full,
    /// The query matches the beginning of one of the record's keywords.
    Partial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedMatch<'c> {
    pub record: &'c EmojiRecord,
    pub tier: MatchTier,
}

/// Query interface over a borrowed catalog.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'c> {
    catalog: &'c Catalog,
    trigger: char,
}

impl<'c> Matcher<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            trigger: TRIGGER,
        }
    }

    pub fn with_trigger(mut self, trigger: char) -> Self {
        self.trigger = trigger;
        self
    }

    /// Find the record with `token` among its shortcuts.
    ///
    /// The token is compared verbatim (shortcuts are symbols, so `:D` and
    /// `:d` differ). When several records carry the token, the first one in
    /// catalog order wins.
    pub fn match_shortcut(&self, token: &str) -> Option<&'c EmojiRecord> {
        let needle = format!(" {token} ");
        self.catalog.iter().find(|record| {
            record
                .shortcut
                .as_deref()
                .is_some_and(|shortcut| format!(" {shortcut} ").contains(&needle))
        })
    }

    /// Ranked search. See the module docs for the tiering rules.
    ///
    /// A leading trigger character is ignored for keyword matching. Records
    /// whose keyword key doesn't resolve are only reachable via shortcut.
    pub fn search_ranked<L>(&self, query: &str, strings: &L) -> Vec<RankedMatch<'c>>
    where
        L: Localizer + ?Sized,
    {
        let (results, elapsed) = perf::measure("emoji search", || self.rank(query, strings));
        tracing::debug!(
            query,
            results = results.len(),
            elapsed_us = elapsed.as_micros() as u64,
            "emoji search"
        );
        results
    }

    /// Ranked search without tier information.
    pub fn search<L>(&self, query: &str, strings: &L) -> Vec<&'c EmojiRecord>
    where
        L: Localizer + ?Sized,
    {
        self.search_ranked(query, strings)
            .into_iter()
            .map(|m| m.record)
            .collect()
    }

    fn rank<L>(&self, query: &str, strings: &L) -> Vec<RankedMatch<'c>>
    where
        L: Localizer + ?Sized,
    {
        let shortcut_hit = self.match_shortcut(query);

        let lowered = query.to_lowercase();
        let body = lowered.strip_prefix(self.trigger).unwrap_or(&lowered);
        let needle = format!(" {body}");
        let whole_word = format!(" {body} ");

        let mut full = Vec::new();
        let mut partial = Vec::new();
        for record in self.catalog {
            if shortcut_hit.is_some_and(|hit| hit.id() == record.id()) {
                continue;
            }
            let Some(key) = record.keywords_key.as_deref() else {
                continue;
            };
            let Some(keywords) = strings.resolve(key) else {
                tracing::debug!(key, glyph = %record.glyph, "unresolved keyword key");
                continue;
            };

            let haystack = format!(" {} ", keywords.to_lowercase());
            if haystack.contains(&whole_word) {
                full.push(RankedMatch {
                    record,
                    tier: MatchTier::Full,
                });
            } else if haystack.contains(&needle) {
                partial.push(RankedMatch {
                    record,
                    tier: MatchTier::Partial,
                });
            }
        }

        let mut results = Vec::with_capacity(full.len() + partial.len() + 1);
        if let Some(record) = shortcut_hit {
            results.push(RankedMatch {
                record,
                tier: MatchTier::Shortcut,
            });
        }
        results.append(&mut full);
        results.append(&mut partial);
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EmojiRecord, FamilyId};
    use crate::strings::StringTable;

    fn small_catalog() -> (Catalog, StringTable) {
        let catalog = Catalog::from_records([
            EmojiRecord::new(FamilyId::People, "😀", "d.grin")
                .with_shortcut(":)")
                .with_keywords("k.grin"),
            EmojiRecord::new(FamilyId::People, "😃", "d.smiley").with_keywords("k.smiley"),
            EmojiRecord::new(FamilyId::People, "😄", "d.smile").with_keywords("k.smile"),
            EmojiRecord::new(FamilyId::People, "🙂", "d.slight")
                .with_shortcut(":-) (:")
                .with_keywords("k.missing"),
            EmojiRecord::new(FamilyId::Symbols, "❤️", "d.heart").with_shortcut("<3"),
        ]);
        let strings: StringTable = [
            ("k.grin", "happy smile"),
            ("k.smiley", "Smiley Happy"),
            ("k.smile", "smile joy"),
        ]
        .into_iter()
        .collect();
        (catalog, strings)
    }

    fn glyphs(records: &[&EmojiRecord]) -> Vec<String> {
        records.iter().map(|r| r.glyph.to_string()).collect()
    }

    #[test]
    fn shortcut_matches_whole_tokens_verbatim() {
        let (catalog, _) = small_catalog();
        let matcher = Matcher::new(&catalog);

        assert_eq!(matcher.match_shortcut(":)").map(|r| r.glyph.as_str()), Some("😀"));
        assert_eq!(matcher.match_shortcut("(:").map(|r| r.glyph.as_str()), Some("🙂"));
        assert_eq!(matcher.match_shortcut(":-)").map(|r| r.glyph.as_str()), Some("🙂"));
        assert_eq!(matcher.match_shortcut("<3").map(|r| r.glyph.as_str()), Some("❤️"));
        // Substrings of a shortcut are not shortcuts.
        assert!(matcher.match_shortcut(":").is_none());
        assert!(matcher.match_shortcut("-)").is_none());
        assert!(matcher.match_shortcut("").is_none());
    }

    #[test]
    fn shortcut_ties_go_to_catalog_order() {
        let catalog = Catalog::from_records([
            EmojiRecord::new(FamilyId::Nature, "🐶", "d.dog").with_shortcut(":3"),
            EmojiRecord::new(FamilyId::People, "😺", "d.cat").with_shortcut(":3"),
        ]);
        let hit = Matcher::new(&catalog).match_shortcut(":3").unwrap();
        // People sorts before Nature.
        assert_eq!(hit.glyph, "😺");
    }

    #[test]
    fn smi_is_a_partial_match() {
        let (catalog, strings) = small_catalog();
        let ranked = Matcher::new(&catalog).search_ranked("smi", &strings);

        let grin = ranked.iter().find(|m| m.record.glyph == "😀").unwrap();
        assert_eq!(grin.tier, MatchTier::Partial);
        assert!(ranked.iter().all(|m| m.tier == MatchTier::Partial));
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn full_matches_come_before_partial_matches() {
        let (catalog, strings) = small_catalog();
        let ranked = Matcher::new(&catalog).search_ranked(":smile", &strings);

        let tiers: Vec<_> = ranked.iter().map(|m| (m.record.glyph.as_str(), m.tier)).collect();
        assert_eq!(
            tiers,
            [
                ("😀", MatchTier::Full),
                ("😄", MatchTier::Full),
                ("😃", MatchTier::Partial),
            ]
        );
    }

    #[test]
    fn shortcut_hit_leads_and_is_not_repeated() {
        let catalog = Catalog::from_records([
            EmojiRecord::new(FamilyId::People, "😐", "d.neutral").with_keywords("k.neutral"),
            EmojiRecord::new(FamilyId::People, "🤐", "d.zip")
                .with_shortcut(":x")
                .with_keywords("k.zip"),
        ]);
        let strings: StringTable = [("k.neutral", "x meh"), ("k.zip", "x zipper")]
            .into_iter()
            .collect();

        let ranked = Matcher::new(&catalog).search_ranked(":x", &strings);
        let tiers: Vec<_> = ranked.iter().map(|m| (m.record.glyph.as_str(), m.tier)).collect();
        assert_eq!(tiers, [("🤐", MatchTier::Shortcut), ("😐", MatchTier::Full)]);
    }

    #[test]
    fn query_is_lowercased_for_keywords() {
        let (catalog, strings) = small_catalog();
        let results = Matcher::new(&catalog).search(":HAPPY", &strings);
        assert_eq!(glyphs(&results), ["😀", "😃"]);
    }

    #[test]
    fn unresolved_keywords_stay_reachable_by_shortcut() {
        let (catalog, strings) = small_catalog();
        let matcher = Matcher::new(&catalog);

        // 🙂's keyword key is missing from the table.
        assert!(matcher.search(":missing", &strings).is_empty());
        let results = matcher.search(":-)", &strings);
        assert_eq!(glyphs(&results), ["🙂"]);
    }

    #[test]
    fn search_is_deterministic() {
        let catalog = Catalog::builtin();
        let strings = StringTable::english();
        let matcher = Matcher::new(&catalog);
        for query in [":s", ":smile", ":heart", ":ball", ":"] {
            assert_eq!(matcher.search(query, &strings), matcher.search(query, &strings));
        }
    }

    #[test]
    fn no_record_appears_twice() {
        let catalog = Catalog::builtin();
        let strings = StringTable::english();
        let matcher = Matcher::new(&catalog);
        for query in [":)", ":s", ":ball", ":love", ":p"] {
            let results = matcher.search_ranked(query, &strings);
            let mut ids: Vec<_> = results.iter().map(|m| m.record.id()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), results.len(), "duplicate in {query}");
            assert!(results.windows(2).all(|w| w[0].tier <= w[1].tier));
        }
    }

    #[test]
    fn builtin_smile_ranking() {
        let catalog = Catalog::builtin();
        let strings = StringTable::english();
        let results = Matcher::new(&catalog).search(":smile", &strings);
        insta::assert_snapshot!(glyphs(&results).join(" "), @"😀 😄 🙂 😃");
    }

    #[test]
    fn custom_trigger_is_stripped() {
        let (catalog, strings) = small_catalog();
        let results = Matcher::new(&catalog)
            .with_trigger('#')
            .search("#joy", &strings);
        assert_eq!(glyphs(&results), ["😄"]);
    }
}
