//! Language tags, label entries, and the eligible-set rule.
//!
//! The set of languages a user is studying used to be read from a global
//! store.  Here it is an explicit [`LanguagePrefs`] value handed to whoever
//! needs it, so filtering is a pure function over `(&[LabelEntry], &LanguagePrefs)`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseError;

// ───────────────────────────────────────── language tag ──────

/// A lower-cased, ASCII-alphabetic language tag such as `en` or `pt`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageTag(String);

impl LanguageTag {
    /// The language every deployment is guaranteed to have labels for.
    pub fn english() -> Self {
        Self("en".into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for LanguageTag {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ParseError::LanguageTag(s.to_string()));
        }
        Ok(Self(s.to_ascii_lowercase()))
    }
}

impl TryFrom<String> for LanguageTag {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LanguageTag> for String {
    fn from(tag: LanguageTag) -> Self {
        tag.0
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse a comma-separated tag list (`"en, es,pt"`).  Empty items are skipped.
pub fn parse_tag_list(s: &str) -> Result<Vec<LanguageTag>, ParseError> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(LanguageTag::from_str)
        .collect()
}

// ───────────────────────────────────────── entries ───────────

/// One translation of the word being displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEntry {
    pub language: LanguageTag,
    pub label: String,
}

impl LabelEntry {
    pub fn new(language: LanguageTag, label: impl Into<String>) -> Self {
        Self {
            language,
            label: label.into(),
        }
    }
}

/// Label used when there is nothing at all to show.
pub const PLACEHOLDER_LABEL: &str = "…";

// ───────────────────────────────────────── preferences ───────

/// Read-only snapshot of the user's language configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePrefs {
    /// Languages the user is actively working in.
    pub active: Vec<LanguageTag>,
    /// Preferred language for the canonical (tooltip) label.
    pub primary: Option<LanguageTag>,
    /// Language shown when fewer than two languages are active.
    pub fallback: LanguageTag,
}

impl Default for LanguagePrefs {
    fn default() -> Self {
        Self {
            active: Vec::new(),
            primary: None,
            fallback: LanguageTag::english(),
        }
    }
}

impl LanguagePrefs {
    pub fn with_active(active: Vec<LanguageTag>) -> Self {
        Self {
            active,
            ..Self::default()
        }
    }

    /// A reel only makes sense with two or more languages; below that the
    /// fallback language is shown on its own.
    fn uses_active_set(&self) -> bool {
        self.active.len() >= 2
    }

    fn is_eligible(&self, language: &LanguageTag) -> bool {
        if self.uses_active_set() {
            self.active.contains(language)
        } else {
            *language == self.fallback
        }
    }
}

/// Filter `entries` down to the ones the reel should cycle through.
///
/// Never returns an empty list: when nothing matches, the first supplied
/// entry stands in, and when nothing was supplied a [`PLACEHOLDER_LABEL`]
/// in the fallback language does.
pub fn eligible_entries(entries: &[LabelEntry], prefs: &LanguagePrefs) -> Vec<LabelEntry> {
    let eligible: Vec<LabelEntry> = entries
        .iter()
        .filter(|e| prefs.is_eligible(&e.language))
        .cloned()
        .collect();
    if !eligible.is_empty() {
        return eligible;
    }

    tracing::debug!(
        supplied = entries.len(),
        "no eligible labels, falling back to a single placeholder"
    );
    match entries.first() {
        Some(first) => vec![first.clone()],
        None => vec![LabelEntry::new(prefs.fallback.clone(), PLACEHOLDER_LABEL)],
    }
}

/// The label the tooltip compares against: the entry in the user's primary
/// language if there is one, else the first supplied entry.
pub fn canonical_label<'a>(entries: &'a [LabelEntry], prefs: &LanguagePrefs) -> Option<&'a str> {
    prefs
        .primary
        .as_ref()
        .and_then(|primary| entries.iter().find(|e| &e.language == primary))
        .or_else(|| entries.first())
        .map(|e| e.label.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(s: &str) -> LanguageTag {
        s.parse().unwrap()
    }

    fn house() -> Vec<LabelEntry> {
        vec![
            LabelEntry::new(tag("en"), "House"),
            LabelEntry::new(tag("es"), "Casa"),
        ]
    }

    #[test]
    fn tags_are_normalised() {
        assert_eq!(tag(" EN ").as_str(), "en");
        assert!("".parse::<LanguageTag>().is_err());
        assert!("en-US".parse::<LanguageTag>().is_err());
    }

    #[test]
    fn tag_list_skips_blanks() {
        let tags = parse_tag_list("en, ,ES").unwrap();
        assert_eq!(tags, vec![tag("en"), tag("es")]);
        assert!(parse_tag_list("en,1x").is_err());
    }

    #[test]
    fn two_active_languages_keep_both() {
        let prefs = LanguagePrefs::with_active(vec![tag("en"), tag("es")]);
        assert_eq!(eligible_entries(&house(), &prefs).len(), 2);
    }

    #[test]
    fn single_active_language_keeps_one() {
        let prefs = LanguagePrefs::with_active(vec![tag("en")]);
        let eligible = eligible_entries(&house(), &prefs);
        assert_eq!(eligible, vec![LabelEntry::new(tag("en"), "House")]);
    }

    #[test]
    fn no_preferences_fall_back_to_english() {
        let eligible = eligible_entries(&house(), &LanguagePrefs::default());
        assert_eq!(eligible, vec![LabelEntry::new(tag("en"), "House")]);
    }

    #[test]
    fn unmatched_languages_use_first_entry() {
        let prefs = LanguagePrefs::with_active(vec![tag("de"), tag("fr")]);
        let eligible = eligible_entries(&house(), &prefs);
        assert_eq!(eligible, vec![LabelEntry::new(tag("en"), "House")]);
    }

    #[test]
    fn empty_input_yields_placeholder() {
        let eligible = eligible_entries(&[], &LanguagePrefs::default());
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].label, PLACEHOLDER_LABEL);
    }

    #[test]
    fn canonical_prefers_primary_language() {
        let mut prefs = LanguagePrefs::default();
        assert_eq!(canonical_label(&house(), &prefs), Some("House"));
        prefs.primary = Some(tag("es"));
        assert_eq!(canonical_label(&house(), &prefs), Some("Casa"));
        prefs.primary = Some(tag("ja"));
        assert_eq!(canonical_label(&house(), &prefs), Some("House"));
    }

    #[test]
    fn entries_deserialize_from_json() {
        let json = r#"[{"language":"EN","label":"House"},{"language":"es","label":"Casa"}]"#;
        let entries: Vec<LabelEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries, house());
        assert!(serde_json::from_str::<Vec<LabelEntry>>(r#"[{"language":"","label":"x"}]"#).is_err());
    }
}
