//! Property-based tests for the prompt library decoder
//!
//! Generates well-formed libraries from known records and checks that the
//! decoder returns exactly those records, and that arbitrary input never
//! panics and only ever yields complete records.

use proptest::prelude::*;

use prompt_library::csv_handler::decoder::trim_field;
use prompt_library::csv_handler::{decode, decode_with_stats, PromptRecord};

const HEADER: &str = "name,content";

/// How a record's content is laid out in the library text.
#[derive(Debug, Clone)]
enum Layout {
    Unquoted(String),
    Quoted(String),
    Multiline(Vec<String>),
}

impl Layout {
    fn content(&self) -> String {
        match self {
            Layout::Unquoted(s) | Layout::Quoted(s) => s.clone(),
            Layout::Multiline(lines) => lines.join("\n"),
        }
    }

    fn encode(&self, name: &str) -> String {
        match self {
            Layout::Unquoted(s) => format!("{},{}", name, s),
            Layout::Quoted(s) => format!("{},\"{}\"", name, s),
            Layout::Multiline(lines) => format!("{},\"{}\"", name, lines.join("\n")),
        }
    }
}

/// Strategy for record names: no commas, no surrounding whitespace
fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z][A-Za-z0-9]{0,15}".prop_map(|s| s),
        "[A-Za-z][A-Za-z0-9]{0,6} [A-Za-z0-9]{1,6}".prop_map(|s| s),
    ]
}

/// Strategy for content layouts that the decoder must reproduce exactly
fn layout_strategy() -> impl Strategy<Value = Layout> {
    prop_oneof![
        // Unquoted content may contain further commas but no quotes
        "[a-zA-Z0-9][a-zA-Z0-9 ,.]{0,40}[a-zA-Z0-9.]".prop_map(Layout::Unquoted),
        // Single-line quoted content may start with spaces but not be empty
        "[a-zA-Z0-9 ,.]{0,20}[a-zA-Z0-9,.]".prop_map(Layout::Quoted),
        // Multi-line: first segment has no trailing whitespace, the rest is free-form
        (
            "[a-zA-Z0-9,.]{1,20}",
            prop::collection::vec("[a-zA-Z0-9 ,.]{0,20}", 1..4),
        )
            .prop_map(|(first, rest)| {
                let mut lines = vec![first];
                lines.extend(rest);
                Layout::Multiline(lines)
            }),
    ]
}

/// Strategy for a whole library: the records and the text that encodes them
fn library_strategy() -> impl Strategy<Value = (Vec<PromptRecord>, String)> {
    prop::collection::vec((name_strategy(), layout_strategy()), 0..12).prop_map(|entries| {
        let mut text = String::from(HEADER);
        let mut records = Vec::new();
        for (name, layout) in entries {
            text.push('\n');
            text.push_str(&layout.encode(&name));
            records.push(PromptRecord::new(name, layout.content()));
        }
        (records, text)
    })
}

/// Strategy for noisy input heavy in the characters the decoder cares about
fn noisy_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z\",\n \r]{0,200}".prop_map(|s| s),
        "[a-z\",\n \u{85}\u{feff}]{0,100}".prop_map(|s| s),
        any::<String>(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // A library written with the three supported layouts decodes back to its records
    #[test]
    fn well_formed_library_decodes_exactly((records, text) in library_strategy()) {
        prop_assert_eq!(decode(&text), records);
    }

    // A trailing newline after the last record adds nothing
    #[test]
    fn trailing_newline_is_ignored((records, text) in library_strategy()) {
        let with_newline = format!("{}\n", text);
        prop_assert_eq!(decode(&with_newline), records);
    }

    // A quoted field left open at the end swallows nothing before it and emits nothing itself
    #[test]
    fn unterminated_tail_is_discarded(
        (records, text) in library_strategy(),
        name in name_strategy(),
        tail in prop::collection::vec("[a-zA-Z0-9 ,.]{0,20}", 0..3),
    ) {
        let mut broken = format!("{}\n{},\"open", text, name);
        for line in &tail {
            broken.push('\n');
            broken.push_str(line);
        }

        let (decoded, stats) = decode_with_stats(&broken);
        prop_assert_eq!(decoded, records);
        prop_assert_eq!(stats.unterminated_fields, 1);
    }

    // Arbitrary input never panics and yields only complete, trimmed-name records
    #[test]
    fn arbitrary_input_yields_complete_records(text in noisy_text_strategy()) {
        let records = decode(&text);
        for record in &records {
            prop_assert!(!record.name.is_empty());
            prop_assert!(!record.content.is_empty());
            prop_assert!(!record.name.contains(','));
            prop_assert_eq!(trim_field(&record.name), record.name.as_str());
        }
    }

    // Decoding is deterministic and the stats agree with the output
    #[test]
    fn stats_are_consistent(text in noisy_text_strategy()) {
        let (records, stats) = decode_with_stats(&text);
        prop_assert_eq!(&records, &decode(&text));
        prop_assert_eq!(stats.records, records.len() as u64);
        prop_assert_eq!(stats.lines_read, text.split('\n').count() as u64 - 1);
        prop_assert!(stats.unterminated_fields <= 1);
        prop_assert!(stats.records + stats.malformed_lines + stats.incomplete_records <= stats.lines_read);
    }

    // The header line is never decoded, whatever it contains
    #[test]
    fn header_is_always_skipped(header in "[a-zA-Z0-9 ,\"]{0,30}", (records, text) in library_strategy()) {
        let body = text.strip_prefix(HEADER).unwrap_or(&text);
        let replaced = format!("{}{}", header, body);
        prop_assert_eq!(decode(&replaced), records);
    }
}
