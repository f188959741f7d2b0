use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entry::{DailyLogEntry, EntryLog};
use crate::locale::Messages;
use crate::mean;
use crate::sentiment::SentimentLabel;

pub const TREND_DAYS: i64 = 30;
pub const MIN_TREND_POINTS: usize = 4;
pub const TREND_THRESHOLD: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
}

impl TrendDirection {
    pub fn text(self, messages: &Messages) -> &'static str {
        match self {
            TrendDirection::Improving => messages.trend_improving,
            TrendDirection::Declining => messages.trend_declining,
            TrendDirection::Stable => messages.trend_stable,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSummary {
    pub average_sentiment: f64,
    pub trend_direction: TrendDirection,
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    pub total_analyzed: usize,
}

/// Summarizes stored sentiment snapshots over the `days` ending at `as_of`.
/// Entries without a snapshot are skipped; nothing is recomputed.
pub fn summarize_sentiment_trend(entries: &[DailyLogEntry], as_of: NaiveDate, days: i64) -> TrendSummary {
    let log = EntryLog::new(entries);
    let snapshots: Vec<_> = log
        .window(as_of, days)
        .into_iter()
        .filter_map(|entry| entry.sentiment.as_ref())
        .collect();

    let count = |label: SentimentLabel| snapshots.iter().filter(|snapshot| snapshot.label == label).count();
    let scores: Vec<f64> = snapshots.iter().map(|snapshot| snapshot.score).collect();

    TrendSummary {
        average_sentiment: mean(&scores).unwrap_or(0.0),
        trend_direction: direction(&scores),
        positive_count: count(SentimentLabel::Positive),
        negative_count: count(SentimentLabel::Negative),
        neutral_count: count(SentimentLabel::Neutral),
        total_analyzed: scores.len(),
    }
}

/// Compares the older half of chronological scores against the newer half.
pub fn direction(scores: &[f64]) -> TrendDirection {
    if scores.len() < MIN_TREND_POINTS {
        return TrendDirection::Stable;
    }
    let (first, second) = scores.split_at(scores.len() / 2);
    let first = mean(first).unwrap_or(0.0);
    let second = mean(second).unwrap_or(0.0);

    if second - first > TREND_THRESHOLD {
        TrendDirection::Improving
    } else if first - second > TREND_THRESHOLD {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    }
}
