use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::catalog::SymptomId;
use crate::entry::{DailyLogEntry, EntryLog};
use crate::locale::{render, InsightText, Locale, Messages};
use crate::mean;

pub const MAX_INSIGHTS: usize = 5;
pub const WEEK_DAYS: i64 = 7;
pub const MOOD_CHANGE_PERCENT: f64 = 10.0;
pub const SLEEP_CHANGE_POINTS: f64 = 1.0;
pub const TOP_SYMPTOM_LIMIT: usize = 2;
pub const PATTERN_MIN_DAYS: usize = 3;
pub const GOOD_ENERGY: f64 = 3.0;
pub const CONSISTENCY_RATIO: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    Positive,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub kind: InsightType,
    pub tag: &'static str,
    pub title: String,
    pub message: String,
    pub value: String,
}

impl Insight {
    fn new(
        id: &'static str,
        kind: InsightType,
        tag: &'static str,
        text: &InsightText,
        values: &[(&str, &str)],
        value: String,
    ) -> Self {
        Self {
            id,
            kind,
            tag,
            title: text.title.to_string(),
            message: render(text.message, values),
            value,
        }
    }
}

/// Current and previous calendar week, most recent entry first.
#[derive(Debug, Clone)]
pub struct Weeks<'a> {
    pub current: Vec<&'a DailyLogEntry>,
    pub previous: Vec<&'a DailyLogEntry>,
}

impl<'a> Weeks<'a> {
    pub fn ending(log: &EntryLog<'a>, as_of: NaiveDate) -> Self {
        let mut current = log.window(as_of, WEEK_DAYS);
        let mut previous = as_of
            .checked_sub_days(Days::new(WEEK_DAYS as u64))
            .map(|end| log.window(end, WEEK_DAYS))
            .unwrap_or_default();
        current.reverse();
        previous.reverse();
        Self { current, previous }
    }
}

type InsightRule = fn(&Weeks<'_>, &Messages) -> Option<Insight>;

const RULES: [InsightRule; 7] = [
    mood_trend,
    sleep_trend,
    best_day,
    top_symptoms,
    time_of_day_pattern,
    energy_level,
    consistency,
];

pub fn generate_insights(entries: &[DailyLogEntry], as_of: NaiveDate, locale: Locale) -> Vec<Insight> {
    let log = EntryLog::new(entries);
    let weeks = Weeks::ending(&log, as_of);
    let messages = locale.messages();

    let mut insights: Vec<Insight> = RULES
        .iter()
        .filter_map(|rule| rule(&weeks, messages))
        .inspect(|insight| debug!(id = insight.id, "insight fired"))
        .collect();
    insights.truncate(MAX_INSIGHTS);
    insights
}

fn average(entries: &[&DailyLogEntry], field: impl Fn(&DailyLogEntry) -> Option<f64>) -> Option<f64> {
    let values: Vec<f64> = entries.iter().filter_map(|entry| field(*entry)).collect();
    mean(&values)
}

fn mood_trend(weeks: &Weeks<'_>, messages: &Messages) -> Option<Insight> {
    let current = average(&weeks.current, DailyLogEntry::mood)?;
    let previous = average(&weeks.previous, DailyLogEntry::mood)?;
    if previous <= 0.0 {
        return None;
    }
    let change = (current - previous) / previous * 100.0;
    if change.abs() <= MOOD_CHANGE_PERCENT {
        return None;
    }
    let (kind, text) = if change > 0.0 {
        (InsightType::Positive, &messages.mood_up)
    } else {
        (InsightType::Warning, &messages.mood_down)
    };
    let percent = format!("{:.0}", change.abs());
    Some(Insight::new(
        "mood_trend",
        kind,
        "mood",
        text,
        &[("percent", percent.as_str())],
        format!("{:+.0}%", change),
    ))
}

fn sleep_trend(weeks: &Weeks<'_>, messages: &Messages) -> Option<Insight> {
    let current = average(&weeks.current, DailyLogEntry::sleep)?;
    let previous = average(&weeks.previous, DailyLogEntry::sleep)?;
    let delta = current - previous;
    if delta.abs() <= SLEEP_CHANGE_POINTS {
        return None;
    }
    let (kind, text) = if delta > 0.0 {
        (InsightType::Positive, &messages.sleep_up)
    } else {
        (InsightType::Info, &messages.sleep_down)
    };
    let points = format!("{:.1}", delta.abs());
    Some(Insight::new(
        "sleep_trend",
        kind,
        "sleep",
        text,
        &[("delta", points.as_str())],
        format!("{:+.1}", delta),
    ))
}

fn best_day(weeks: &Weeks<'_>, messages: &Messages) -> Option<Insight> {
    let (entry, mood) = weeks
        .current
        .iter()
        .filter_map(|entry| entry.mood().map(|mood| (*entry, mood)))
        .filter(|(_, mood)| *mood > 0.0)
        .fold(None, |best: Option<(&DailyLogEntry, f64)>, candidate| match best {
            Some(current) if candidate.1 <= current.1 => Some(current),
            _ => Some(candidate),
        })?;
    let mood_text = format!("{:.0}", mood);
    Some(Insight::new(
        "best_day",
        InsightType::Positive,
        "mood",
        &messages.best_day,
        &[
            ("weekday", messages.weekday(entry.date.weekday())),
            ("mood", mood_text.as_str()),
        ],
        entry.date.to_string(),
    ))
}

/// Days each symptom was present (intensity above zero), highest count first,
/// ties kept in catalog order. Symptoms never present are omitted.
pub fn symptom_day_counts(entries: &[&DailyLogEntry]) -> Vec<(SymptomId, usize)> {
    let mut counts: Vec<(SymptomId, usize)> = SymptomId::ALL
        .into_iter()
        .map(|id| (id, entries.iter().filter(|entry| entry.has_symptom(id)).count()))
        .filter(|(_, count)| *count > 0)
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn top_symptoms(weeks: &Weeks<'_>, messages: &Messages) -> Option<Insight> {
    let top: Vec<(SymptomId, usize)> = symptom_day_counts(&weeks.current)
        .into_iter()
        .take(TOP_SYMPTOM_LIMIT)
        .collect();
    if top.is_empty() {
        return None;
    }
    let names = top
        .iter()
        .map(|(id, _)| messages.symptom(*id))
        .collect::<Vec<_>>()
        .join(", ");
    let value = top
        .iter()
        .map(|(id, count)| format!("{}:{}", id.key(), count))
        .collect::<Vec<_>>()
        .join(",");
    Some(Insight::new(
        "top_symptoms",
        InsightType::Info,
        "symptoms",
        &messages.top_symptoms,
        &[("symptoms", names.as_str())],
        value,
    ))
}

/// Entries carry no time of day, so hot flashes stand in for daytime episodes
/// and night sweats for night-time ones.
fn time_of_day_pattern(weeks: &Weeks<'_>, messages: &Messages) -> Option<Insight> {
    let count = |id: SymptomId| weeks.current.iter().filter(|entry| entry.has_symptom(id)).count();
    let morning = count(SymptomId::HotFlashes);
    let evening = count(SymptomId::NightSweats);

    let (text, value, days) = if morning >= PATTERN_MIN_DAYS && morning > evening {
        (&messages.morning_pattern, "morning", morning)
    } else if evening >= PATTERN_MIN_DAYS && evening > morning {
        (&messages.evening_pattern, "evening", evening)
    } else {
        return None;
    };
    let days_text = days.to_string();
    Some(Insight::new(
        "time_pattern",
        InsightType::Info,
        "vasomotor",
        text,
        &[("count", days_text.as_str())],
        value.to_string(),
    ))
}

fn energy_level(weeks: &Weeks<'_>, messages: &Messages) -> Option<Insight> {
    let energy = average(&weeks.current, DailyLogEntry::energy)?;
    if energy <= 0.0 {
        return None;
    }
    let (kind, text) = if energy >= GOOD_ENERGY {
        (InsightType::Positive, &messages.energy_good)
    } else {
        (InsightType::Info, &messages.energy_low)
    };
    let formatted = format!("{:.1}", energy);
    Some(Insight::new(
        "energy_level",
        kind,
        "energy",
        text,
        &[("average", formatted.as_str())],
        formatted.clone(),
    ))
}

fn consistency(weeks: &Weeks<'_>, messages: &Messages) -> Option<Insight> {
    let logged = weeks.current.len();
    if (logged as f64) / (WEEK_DAYS as f64) < CONSISTENCY_RATIO {
        return None;
    }
    let count = logged.to_string();
    Some(Insight::new(
        "consistency",
        InsightType::Positive,
        "tracking",
        &messages.consistency,
        &[("count", count.as_str())],
        format!("{}/{}", logged, WEEK_DAYS),
    ))
}
