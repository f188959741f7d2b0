use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::catalog::{ItemId, Signal, SymptomId};
use crate::sentiment::{SentimentLabel, SentimentResult};

/// Immutable copy of a sentiment result, stored next to the entry whose note
/// produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSnapshot {
    pub label: SentimentLabel,
    pub score: f64,
    pub emoji: String,
    pub confidence: f64,
}

impl From<&SentimentResult> for SentimentSnapshot {
    fn from(result: &SentimentResult) -> Self {
        Self {
            label: result.sentiment,
            score: result.score,
            emoji: result.emoji.to_string(),
            confidence: result.confidence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLogEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub mood: Option<i32>,
    #[serde(default)]
    pub energy_level: Option<i32>,
    #[serde(default)]
    pub sleep_quality: Option<i32>,
    #[serde(default, rename = "symptomIntensities")]
    pub symptoms: BTreeMap<SymptomId, f64>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentSnapshot>,
}

impl DailyLogEntry {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            mood: None,
            energy_level: None,
            sleep_quality: None,
            symptoms: BTreeMap::new(),
            note: None,
            sentiment: None,
        }
    }

    pub fn with_mood(mut self, mood: i32) -> Self {
        self.mood = Some(mood);
        self
    }

    pub fn with_energy(mut self, energy_level: i32) -> Self {
        self.energy_level = Some(energy_level);
        self
    }

    pub fn with_sleep(mut self, sleep_quality: i32) -> Self {
        self.sleep_quality = Some(sleep_quality);
        self
    }

    pub fn with_symptom(mut self, id: SymptomId, intensity: f64) -> Self {
        self.symptoms.insert(id, intensity);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Self-rated signal clamped to its declared scale.
    pub fn signal(&self, signal: Signal) -> Option<f64> {
        let raw = match signal {
            Signal::Mood => self.mood,
            Signal::SleepQuality => self.sleep_quality,
            Signal::EnergyLevel => self.energy_level,
        }?;
        Some(signal.spec().clamp(raw as f64))
    }

    pub fn mood(&self) -> Option<f64> {
        self.signal(Signal::Mood)
    }

    pub fn sleep(&self) -> Option<f64> {
        self.signal(Signal::SleepQuality)
    }

    pub fn energy(&self) -> Option<f64> {
        self.signal(Signal::EnergyLevel)
    }

    /// Symptom intensity clamped to its scale. Non-finite values count as absent.
    pub fn symptom(&self, id: SymptomId) -> Option<f64> {
        let raw = *self.symptoms.get(&id)?;
        if !raw.is_finite() {
            return None;
        }
        Some(id.spec().clamp(raw))
    }

    pub fn item(&self, item: ItemId) -> Option<f64> {
        match item {
            ItemId::Symptom(id) => self.symptom(id),
            ItemId::Signal(signal) => self.signal(signal),
        }
    }

    pub fn has_symptom(&self, id: SymptomId) -> bool {
        self.symptom(id).map(|value| value > 0.0).unwrap_or(false)
    }

    pub fn note_text(&self) -> &str {
        self.note.as_deref().unwrap_or("")
    }

    /// Case-insensitive substring match against any phrase. No negation handling:
    /// "no chest pain" still contains "chest pain".
    pub fn note_mentions(&self, phrases: &[&str]) -> bool {
        let note = self.note_text();
        if note.trim().is_empty() {
            return false;
        }
        let lowercase = note.to_lowercase();
        phrases.iter().any(|phrase| lowercase.contains(phrase))
    }
}

/// Chronological, one-entry-per-day view over a caller supplied snapshot.
#[derive(Debug, Clone)]
pub struct EntryLog<'a> {
    entries: Vec<&'a DailyLogEntry>,
}

impl<'a> EntryLog<'a> {
    /// Later entries for the same calendar day replace earlier ones.
    pub fn new(entries: &'a [DailyLogEntry]) -> Self {
        let mut by_date: BTreeMap<NaiveDate, &'a DailyLogEntry> = BTreeMap::new();
        for entry in entries {
            if by_date.insert(entry.date, entry).is_some() {
                debug!(date = %entry.date, "duplicate entry for day, keeping the last one");
            }
        }
        Self {
            entries: by_date.into_values().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.entries.last().map(|entry| entry.date)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a DailyLogEntry> + '_ {
        self.entries.iter().copied()
    }

    /// Entries dated in `[start, end]`, oldest first.
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> Vec<&'a DailyLogEntry> {
        self.entries
            .iter()
            .copied()
            .filter(|entry| entry.date >= start && entry.date <= end)
            .collect()
    }

    /// The trailing `days` calendar days ending at `as_of`, oldest first.
    pub fn window(&self, as_of: NaiveDate, days: i64) -> Vec<&'a DailyLogEntry> {
        if days <= 0 {
            return Vec::new();
        }
        self.between(days_before(as_of, days - 1), as_of)
    }
}

/// `date` minus `days`, saturating at the earliest representable date.
pub fn days_before(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_sub_days(Days::new(days.max(0) as u64))
        .unwrap_or(NaiveDate::MIN)
}
