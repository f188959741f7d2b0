pub mod lexicon;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::entry::{DailyLogEntry, SentimentSnapshot};
use crate::locale::Locale;

pub use lexicon::Lexicon;

pub const GENERIC_WEIGHT: f64 = 1.0;
pub const HEALTH_WEIGHT: f64 = 1.5;
pub const POLARITY_THRESHOLD: f64 = 0.2;
pub const STRONG_THRESHOLD: f64 = 0.6;
pub const CONFIDENCE_SATURATION: f64 = 5.0;
pub const MAX_KEYWORDS: usize = 3;

pub const EMOJI_STRONG_POSITIVE: &str = "😄";
pub const EMOJI_POSITIVE: &str = "🙂";
pub const EMOJI_NEUTRAL: &str = "😐";
pub const EMOJI_NEGATIVE: &str = "😕";
pub const EMOJI_STRONG_NEGATIVE: &str = "😢";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn label(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SentimentKeywords {
    pub positive: Vec<&'static str>,
    pub negative: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentResult {
    pub sentiment: SentimentLabel,
    pub score: f64,
    pub keywords: SentimentKeywords,
    pub confidence: f64,
    pub emoji: &'static str,
}

impl SentimentResult {
    pub fn neutral() -> Self {
        Self {
            sentiment: SentimentLabel::Neutral,
            score: 0.0,
            keywords: SentimentKeywords::default(),
            confidence: 0.0,
            emoji: EMOJI_NEUTRAL,
        }
    }

    pub fn snapshot(&self) -> SentimentSnapshot {
        SentimentSnapshot::from(self)
    }
}

#[derive(Debug, Default)]
struct Tally {
    weight: f64,
    keywords: Vec<&'static str>,
}

impl Tally {
    fn scan(mut self, text: &str, phrases: &[&'static str], weight: f64) -> Self {
        for &phrase in phrases {
            if text.contains(phrase) {
                self.weight += weight;
                if self.keywords.len() < MAX_KEYWORDS {
                    self.keywords.push(phrase);
                }
            }
        }
        self
    }
}

fn mask_phrases(text: &str, phrases: &[&str]) -> String {
    phrases
        .iter()
        .fold(text.to_string(), |masked, &phrase| masked.replace(phrase, " "))
}

/// Scores one note. Pure: the same `(text, locale)` always yields the same result.
pub fn analyze_sentiment(text: &str, locale: Locale) -> SentimentResult {
    if text.trim().is_empty() {
        return SentimentResult::neutral();
    }

    let lowercase = text.to_lowercase();
    let lexicon = Lexicon::for_locale(locale);

    let positive = Tally::default()
        .scan(&lowercase, lexicon.positive, GENERIC_WEIGHT)
        .scan(&lowercase, lexicon.positive_health, HEALTH_WEIGHT);
    // "sans douleur" must not also count as "douleur".
    let remainder = mask_phrases(&lowercase, lexicon.positive_health);
    let negative = Tally::default()
        .scan(&remainder, lexicon.negative, GENERIC_WEIGHT)
        .scan(&remainder, lexicon.negative_health, HEALTH_WEIGHT);

    let total = positive.weight + negative.weight;
    let score = if total > 0.0 {
        (positive.weight - negative.weight) / total
    } else {
        0.0
    };
    let sentiment = label_for_score(score);
    let confidence = (total / CONFIDENCE_SATURATION).min(1.0);

    debug!(
        %locale,
        sentiment = sentiment.label(),
        score,
        confidence,
        "classified note"
    );

    SentimentResult {
        sentiment,
        score,
        keywords: SentimentKeywords {
            positive: positive.keywords,
            negative: negative.keywords,
        },
        confidence,
        emoji: emoji_for(sentiment, score),
    }
}

pub fn label_for_score(score: f64) -> SentimentLabel {
    if score > POLARITY_THRESHOLD {
        SentimentLabel::Positive
    } else if score < -POLARITY_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

fn emoji_for(sentiment: SentimentLabel, score: f64) -> &'static str {
    let strong = score.abs() > STRONG_THRESHOLD;
    match (sentiment, strong) {
        (SentimentLabel::Positive, true) => EMOJI_STRONG_POSITIVE,
        (SentimentLabel::Positive, false) => EMOJI_POSITIVE,
        (SentimentLabel::Negative, true) => EMOJI_STRONG_NEGATIVE,
        (SentimentLabel::Negative, false) => EMOJI_NEGATIVE,
        (SentimentLabel::Neutral, _) => EMOJI_NEUTRAL,
    }
}

/// Computes the snapshot persisted with a newly saved entry. Entries without
/// a note carry no snapshot.
pub fn attach_sentiment(mut entry: DailyLogEntry, locale: Locale) -> DailyLogEntry {
    entry.sentiment = match entry.note.as_deref() {
        Some(note) if !note.trim().is_empty() => Some(analyze_sentiment(note, locale).snapshot()),
        _ => None,
    };
    entry
}

/// Recomputes snapshots for historical entries. Existing snapshots are kept
/// unless `overwrite` is set.
pub fn backfill_sentiment(
    entries: &[DailyLogEntry],
    locale: Locale,
    overwrite: bool,
) -> Vec<DailyLogEntry> {
    entries
        .iter()
        .cloned()
        .map(|entry| {
            if entry.sentiment.is_some() && !overwrite {
                entry
            } else {
                attach_sentiment(entry, locale)
            }
        })
        .collect()
}
