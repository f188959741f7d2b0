mod en;
mod fr;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::catalog::{Domain, ItemId, Signal, SymptomId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    pub fn from_tag(tag: &str) -> Option<Self> {
        let language = tag
            .trim()
            .split(|c| c == '-' || c == '_')
            .next()
            .unwrap_or("")
            .to_lowercase();
        match language.as_str() {
            "fr" => Some(Locale::Fr),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// Unknown or missing tags fall back to `default`.
    pub fn resolve(tag: Option<&str>, default: Locale) -> Self {
        match tag {
            Some(value) if !value.trim().is_empty() => Self::from_tag(value).unwrap_or_else(|| {
                warn!(tag = value, fallback = %default, "unsupported locale tag");
                default
            }),
            _ => default,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::En => "en",
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::Fr => &fr::MESSAGES,
            Locale::En => &en::MESSAGES,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug)]
pub struct InsightText {
    pub title: &'static str,
    pub message: &'static str,
}

#[derive(Debug)]
pub struct AlertText {
    pub title: &'static str,
    pub message: &'static str,
    pub action: &'static str,
}

#[derive(Debug)]
pub struct Messages {
    /// Monday first.
    pub weekdays: [&'static str; 7],
    /// Indexed in `Domain::ALL` order.
    pub domains: [&'static str; 4],
    /// Indexed in `SymptomId::ALL` order.
    pub symptoms: [&'static str; 13],
    /// Indexed in `Signal::ALL` order.
    pub signals: [&'static str; 3],

    pub interpretation_no_data: &'static str,
    pub interpretation_no_impact: &'static str,
    pub interpretation_mild: &'static str,
    pub interpretation_moderate: &'static str,
    pub interpretation_significant: &'static str,
    pub interpretation_severe: &'static str,

    pub recommendation_no_data: &'static str,
    pub recommendation_clear: &'static str,
    pub recommendation_moderate: &'static str,
    pub recommendation_high: &'static str,

    pub mood_up: InsightText,
    pub mood_down: InsightText,
    pub sleep_up: InsightText,
    pub sleep_down: InsightText,
    pub best_day: InsightText,
    pub top_symptoms: InsightText,
    pub morning_pattern: InsightText,
    pub evening_pattern: InsightText,
    pub energy_good: InsightText,
    pub energy_low: InsightText,
    pub consistency: InsightText,

    pub chest_pain: AlertText,
    pub palpitations: AlertText,
    pub self_harm: AlertText,
    pub persistent_low_mood: AlertText,
    pub severe_headaches: AlertText,
    pub poor_sleep: AlertText,
    pub severe_vasomotor: AlertText,
    pub exhaustion: AlertText,

    pub trend_improving: &'static str,
    pub trend_declining: &'static str,
    pub trend_stable: &'static str,
    pub digest_sentiment: &'static str,
    pub digest_counts: &'static str,
    pub digest_symptoms: &'static str,
    pub digest_no_symptoms: &'static str,
    pub digest_quality: &'static str,

    pub fallback_responses: &'static [&'static str],
}

impl Messages {
    pub fn weekday(&self, weekday: chrono::Weekday) -> &'static str {
        self.weekdays[weekday.num_days_from_monday() as usize]
    }

    pub fn domain(&self, domain: Domain) -> &'static str {
        self.domains[domain as usize]
    }

    pub fn symptom(&self, id: SymptomId) -> &'static str {
        self.symptoms[id as usize]
    }

    pub fn item(&self, item: ItemId) -> &'static str {
        match item {
            ItemId::Symptom(id) => self.symptom(id),
            ItemId::Signal(signal) => self.signal(signal),
        }
    }

    pub fn signal(&self, signal: Signal) -> &'static str {
        self.signals[signal as usize]
    }
}

/// Fills `{name}` placeholders in a template.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut output = template.to_string();
    for (name, value) in values {
        output = output.replace(&format!("{{{}}}", name), value);
    }
    output
}
