use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use emoji_common::perf::TimingGuard;
use emoji_common::telemetry::{self, TelemetryConfig};
use emoji_common::{FileStore, Loader};
use emoji_core::{
    BufferHost, Catalog, EmojiHost, EmojiSuggester, FamilyId, Matcher, NavDirection, StringTable,
    SuggestionConfig, SuggestionKey, dispatch_key,
};
use miette::Result;
use tracing::Level;
use web_time::Instant;

#[derive(Parser)]
#[command(version, about = "Emoji suggestions for plain text", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Suggestion settings (.json or .toml)
    #[arg(long, global = true, env = "EMOJI_CONFIG")]
    config: Option<PathBuf>,

    /// JSON string table layered over the English strings
    #[arg(long, global = true, env = "EMOJI_STRINGS")]
    strings: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank catalog entries for a token such as ":smile"
    Search {
        query: String,

        /// Maximum number of results
        #[arg(long, short, default_value_t = 10)]
        limit: usize,
    },
    /// Look up the emoji for a text shortcut such as ":)"
    Shortcut { token: String },
    /// List families, or every emoji in one family
    Families { family: Option<FamilyId> },
    /// Replay keystrokes through the suggestion engine
    Type {
        /// Text to type, one keystroke per character
        keys: String,

        /// Pause between keystrokes
        #[arg(long, default_value_t = 40)]
        delay_ms: u64,

        /// Move the selection right this many times before confirming
        #[arg(long, default_value_t = 0)]
        select: usize,

        /// Press enter once the last search has run
        #[arg(long, conflicts_with = "escape")]
        confirm: bool,

        /// Press escape once the last search has run
        #[arg(long)]
        escape: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_miette();

    let cli = Cli::parse();
    telemetry::init(TelemetryConfig::from_env("emoji-cli").with_level(cli.log_level));

    let config = match &cli.config {
        Some(path) => SuggestionConfig::load(path)?,
        None => SuggestionConfig::default(),
    };
    let strings = match &cli.strings {
        Some(path) => {
            let overrides: StringTable = FileStore::new(path).load()?;
            StringTable::english().with_overrides(overrides)
        }
        None => StringTable::english(),
    };
    let catalog = Catalog::shared();

    match cli.command {
        Commands::Search { query, limit } => search(&catalog, &config, &strings, &query, limit),
        Commands::Shortcut { token } => shortcut(&catalog, &config, &strings, &token)?,
        Commands::Families { family } => families(&catalog, &strings, family),
        Commands::Type {
            keys,
            delay_ms,
            select,
            confirm,
            escape,
        } => {
            let replay = Replay {
                keys,
                delay: Duration::from_millis(delay_ms),
                select,
                finish: if confirm {
                    Some(SuggestionKey::Confirm)
                } else if escape {
                    Some(SuggestionKey::Escape)
                } else {
                    None
                },
            };
            replay.run(catalog, config, strings).await;
        }
    }

    Ok(())
}

/// Prefix the trigger if the user left it off.
fn token_for(query: &str, trigger: char) -> String {
    if query.starts_with(trigger) {
        query.to_string()
    } else {
        format!("{trigger}{query}")
    }
}

fn search(
    catalog: &Catalog,
    config: &SuggestionConfig,
    strings: &StringTable,
    query: &str,
    limit: usize,
) {
    let token = token_for(query, config.trigger);
    let matches = Matcher::new(catalog)
        .with_trigger(config.trigger)
        .search_ranked(&token, strings);
    if matches.is_empty() {
        println!("no matches for {token}");
        return;
    }
    for ranked in matches.iter().take(limit) {
        println!(
            "{}\t{:?}\t{}",
            ranked.record.glyph,
            ranked.tier,
            describe(strings, &ranked.record.description_key)
        );
    }
    if matches.len() > limit {
        println!("… {} more", matches.len() - limit);
    }
}

fn shortcut(
    catalog: &Catalog,
    config: &SuggestionConfig,
    strings: &StringTable,
    token: &str,
) -> Result<()> {
    let record = Matcher::new(catalog)
        .with_trigger(config.trigger)
        .match_shortcut(token)
        .ok_or_else(|| miette::miette!("no emoji uses the shortcut {token:?}"))?;
    println!(
        "{}\t{}",
        record.glyph,
        describe(strings, &record.description_key)
    );
    Ok(())
}

fn families(catalog: &Catalog, strings: &StringTable, family: Option<FamilyId>) {
    match family {
        Some(family) => {
            for record in catalog.family(family) {
                println!(
                    "{}\t{}",
                    record.glyph,
                    describe(strings, &record.description_key)
                );
            }
        }
        None => {
            for family in FamilyId::ALL {
                let glyphs: Vec<&str> = catalog
                    .family(family)
                    .iter()
                    .map(|r| r.glyph.as_str())
                    .collect();
                println!(
                    "{:<12}{:>4}  {}",
                    describe(strings, &family.label_key()),
                    glyphs.len(),
                    glyphs.join("")
                );
            }
        }
    }
}

fn describe(strings: &StringTable, key: &str) -> String {
    use emoji_core::Localizer;
    strings
        .resolve(key)
        .map(|s| s.into_owned())
        .unwrap_or_else(|| key.to_string())
}

struct Replay {
    keys: String,
    delay: Duration,
    select: usize,
    finish: Option<SuggestionKey>,
}

impl Replay {
    async fn run(self, catalog: Arc<Catalog>, config: SuggestionConfig, strings: StringTable) {
        let _timing = TimingGuard::new("keystroke replay");
        let mut engine = EmojiSuggester::new(catalog, config);
        let mut host = BufferHost::new().with_strings(strings);

        for ch in self.keys.chars() {
            host.type_char(ch);
            dispatch_key(&mut engine, &mut host, SuggestionKey::Char(ch));
            tokio::time::sleep(self.delay).await;
            engine.poll(&host);
        }

        // Let the last debounced search run.
        if let Some(deadline) = engine.next_deadline() {
            tokio::time::sleep(deadline.saturating_duration_since(Instant::now())).await;
            engine.poll(&host);
        }

        if self.finish.is_some() {
            for _ in 0..self.select {
                dispatch_key(
                    &mut engine,
                    &mut host,
                    SuggestionKey::Navigate(NavDirection::Right),
                );
            }
        }
        if let Some(key) = self.finish {
            let handling = dispatch_key(&mut engine, &mut host, key);
            tracing::debug!(?key, ?handling, "final key");
        }

        for event in engine.drain_events() {
            println!("event     {event:?}");
        }
        if engine.is_active() {
            let selected = engine.selected_index();
            let row: Vec<String> = engine
                .candidates()
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    let glyph = c.glyph(engine.catalog());
                    if Some(i) == selected {
                        format!("[{glyph}]")
                    } else {
                        glyph.to_string()
                    }
                })
                .collect();
            println!("{:?}  {}", engine.state(), row.join(" "));
            if let Some(candidate) = engine.selected_candidate() {
                println!("selected  {}", candidate.label(engine.catalog(), &host));
            }
        }
        println!("document  {:?}", host.text());
        println!("token     {:?}", host.trigger_span_text().unwrap_or_default());
    }
}

fn init_miette() {
    // A hook is already installed when this runs twice; keep the first.
    let _ = miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .with_cause_chain()
                .color(true)
                .context_lines(3)
                .tab_width(2)
                .break_words(true)
                .build(),
        )
    }));
    miette::set_panic_hook();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_is_added_once() {
        assert_eq!(token_for("smile", ':'), ":smile");
        assert_eq!(token_for(":smile", ':'), ":smile");
    }

    #[test]
    fn cli_parses_type_flags() {
        let cli = Cli::try_parse_from(["emoji", "type", ":dog", "--confirm", "--select", "1"])
            .unwrap();
        match cli.command {
            Commands::Type {
                keys,
                select,
                confirm,
                escape,
                ..
            } => {
                assert_eq!(keys, ":dog");
                assert_eq!(select, 1);
                assert!(confirm);
                assert!(!escape);
            }
            _ => panic!("expected type command"),
        }
        assert!(Cli::try_parse_from(["emoji", "type", ":x", "--confirm", "--escape"]).is_err());
    }

    #[test]
    fn families_parse_by_name() {
        let cli = Cli::try_parse_from(["emoji", "families", "nature"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Families {
                family: Some(FamilyId::Nature)
            }
        ));
    }
}
