pub mod alerts;
pub mod catalog;
pub mod companion;
pub mod config;
pub mod entry;
pub mod error;
pub mod insights;
pub mod locale;
pub mod quality;
pub mod sentiment;
pub mod trend;

use chrono::NaiveDate;
use serde::Serialize;

pub use crate::alerts::{detect_red_flags, AlertSeverity, RedFlagAlert};
pub use crate::catalog::{Domain, ItemId, Signal, SymptomId};
pub use crate::config::AnalyticsConfig;
pub use crate::entry::{DailyLogEntry, EntryLog, SentimentSnapshot};
pub use crate::error::{Error, Result};
pub use crate::insights::{generate_insights, Insight, InsightType};
pub use crate::locale::Locale;
pub use crate::quality::{score_quality_of_life, DomainScore, Interpretation, QualityOfLifeReport, Severity};
pub use crate::sentiment::{analyze_sentiment, attach_sentiment, backfill_sentiment, SentimentLabel, SentimentResult};
pub use crate::trend::{summarize_sentiment_trend, TrendDirection, TrendSummary};

#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Anchor day for every window. Defaults to the latest entry date.
    pub as_of: Option<NaiveDate>,
    pub locale: Locale,
    pub quality_days: i64,
    pub trend_days: i64,
    pub digest_symptom_days: i64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::from_config(&AnalyticsConfig::default())
    }
}

impl AnalysisOptions {
    pub fn from_config(config: &AnalyticsConfig) -> Self {
        Self {
            as_of: None,
            locale: config.locale.to_locale(),
            quality_days: config.windows.quality_days,
            trend_days: config.windows.trend_days,
            digest_symptom_days: config.windows.digest_symptom_days,
        }
    }

    pub fn with_as_of(mut self, as_of: NaiveDate) -> Self {
        self.as_of = Some(as_of);
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    fn anchor(&self, entries: &[DailyLogEntry]) -> NaiveDate {
        self.as_of
            .or_else(|| EntryLog::new(entries).latest_date())
            .unwrap_or_default()
    }
}

/// Everything the presentation layer renders for one snapshot of entries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub as_of: NaiveDate,
    pub locale: Locale,
    pub quality_of_life: QualityOfLifeReport,
    pub insights: Vec<Insight>,
    pub red_flags: Vec<RedFlagAlert>,
    pub sentiment_trend: TrendSummary,
}

/// Runs every read-side component over the same snapshot. Nothing is cached:
/// each call recomputes from the entries it is given.
pub fn analyze(entries: &[DailyLogEntry], options: &AnalysisOptions) -> AnalysisReport {
    let as_of = options.anchor(entries);
    let quality_window = trailing(entries, as_of, options.quality_days);

    AnalysisReport {
        as_of,
        locale: options.locale,
        quality_of_life: score_quality_of_life(&quality_window, options.locale),
        insights: generate_insights(entries, as_of, options.locale),
        red_flags: detect_red_flags(entries, as_of, options.locale),
        sentiment_trend: summarize_sentiment_trend(entries, as_of, options.trend_days),
    }
}

/// Compact text for the conversational assistant.
pub fn assistant_context(entries: &[DailyLogEntry], options: &AnalysisOptions) -> String {
    let as_of = options.anchor(entries);
    let quality_window = trailing(entries, as_of, options.quality_days);
    let quality = score_quality_of_life(&quality_window, options.locale);
    let trend = summarize_sentiment_trend(entries, as_of, options.trend_days);
    let symptoms = companion::top_symptoms(
        entries,
        as_of,
        options.digest_symptom_days,
        companion::DIGEST_SYMPTOMS,
    );
    companion::assistant_digest(&trend, &symptoms, &quality, options.locale)
}

fn trailing(entries: &[DailyLogEntry], as_of: NaiveDate, days: i64) -> Vec<DailyLogEntry> {
    let start = entry::days_before(as_of, days.max(1) - 1);
    entries
        .iter()
        .filter(|entry| entry.date >= start && entry.date <= as_of)
        .cloned()
        .collect()
}

pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

pub fn format_float(value: f64, digits: usize) -> String {
    format!("{:.1$}", value, digits)
}
