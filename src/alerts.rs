use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::catalog::SymptomId;
use crate::entry::{DailyLogEntry, EntryLog};
use crate::locale::{render, AlertText, Locale};

pub const RECENT_DAYS: i64 = 7;
pub const EXTENDED_DAYS: i64 = 14;

/// Phrase lists are shared by every locale so detection never depends on wording.
pub const CHEST_PAIN_PHRASES: &[&str] = &[
    "douleur thoracique",
    "douleur à la poitrine",
    "douleurs thoraciques",
    "oppression thoracique",
    "mal à la poitrine",
    "chest pain",
    "chest tightness",
    "pain in my chest",
];

pub const PALPITATION_PHRASES: &[&str] = &[
    "palpitation",
    "coeur qui bat vite",
    "cœur qui bat vite",
    "cœur qui s'emballe",
    "tachycardie",
    "racing heart",
    "heart racing",
    "heart pounding",
];

pub const SELF_HARM_PHRASES: &[&str] = &[
    "suicide",
    "suicidaire",
    "me suicider",
    "en finir",
    "me faire du mal",
    "envie de mourir",
    "plus envie de vivre",
    "kill myself",
    "end my life",
    "hurt myself",
    "want to die",
    "self-harm",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedFlagAlert {
    pub id: &'static str,
    pub severity: AlertSeverity,
    pub title: String,
    pub message: String,
    pub recommended_action: String,
    pub priority_rank: u8,
}

struct AlertWindows<'a> {
    recent: Vec<&'a DailyLogEntry>,
    extended: Vec<&'a DailyLogEntry>,
}

impl AlertWindows<'_> {
    fn recent_days(&self, predicate: impl Fn(&DailyLogEntry) -> bool) -> usize {
        self.recent.iter().filter(|&&entry| predicate(entry)).count()
    }

    fn extended_days(&self, predicate: impl Fn(&DailyLogEntry) -> bool) -> usize {
        self.extended.iter().filter(|&&entry| predicate(entry)).count()
    }
}

fn alert(
    id: &'static str,
    severity: AlertSeverity,
    priority_rank: u8,
    text: &AlertText,
    count: usize,
) -> RedFlagAlert {
    let count = count.to_string();
    RedFlagAlert {
        id,
        severity,
        title: text.title.to_string(),
        message: render(text.message, &[("count", count.as_str())]),
        recommended_action: text.action.to_string(),
        priority_rank,
    }
}

/// Every matching rule, never capped, most urgent first.
pub fn detect_red_flags(entries: &[DailyLogEntry], as_of: NaiveDate, locale: Locale) -> Vec<RedFlagAlert> {
    let log = EntryLog::new(entries);
    let windows = AlertWindows {
        recent: log.window(as_of, RECENT_DAYS),
        extended: log.window(as_of, EXTENDED_DAYS),
    };
    let messages = locale.messages();
    let mut alerts = Vec::new();

    let chest_pain = windows.recent_days(|entry| entry.note_mentions(CHEST_PAIN_PHRASES));
    let palpitations = windows.recent_days(|entry| entry.note_mentions(PALPITATION_PHRASES));
    if chest_pain >= 2 {
        alerts.push(alert("chest_pain", AlertSeverity::Critical, 1, &messages.chest_pain, chest_pain));
    } else if palpitations >= 3 {
        alerts.push(alert("palpitations", AlertSeverity::High, 2, &messages.palpitations, palpitations));
    }

    let self_harm = windows.recent_days(|entry| entry.note_mentions(SELF_HARM_PHRASES));
    let low_mood = windows.recent_days(|entry| entry.mood().map(|mood| mood <= 2.0).unwrap_or(false));
    if self_harm >= 1 {
        alerts.push(alert("self_harm", AlertSeverity::Critical, 0, &messages.self_harm, self_harm));
    } else if low_mood >= 5 {
        alerts.push(alert(
            "persistent_low_mood",
            AlertSeverity::High,
            2,
            &messages.persistent_low_mood,
            low_mood,
        ));
    }

    let headaches = windows.recent_days(|entry| {
        entry
            .symptom(SymptomId::Headache)
            .map(|intensity| intensity >= 4.0)
            .unwrap_or(false)
    });
    if headaches >= 3 {
        alerts.push(alert(
            "severe_headaches",
            AlertSeverity::Medium,
            3,
            &messages.severe_headaches,
            headaches,
        ));
    }

    let poor_sleep = windows.extended_days(|entry| entry.sleep().map(|sleep| sleep <= 3.0).unwrap_or(false));
    if poor_sleep >= 7 {
        alerts.push(alert("poor_sleep", AlertSeverity::Medium, 4, &messages.poor_sleep, poor_sleep));
    }

    let at_max = |id: SymptomId| {
        windows.recent_days(|entry| {
            entry
                .symptom(id)
                .map(|intensity| intensity >= id.spec().max_scale)
                .unwrap_or(false)
        })
    };
    let vasomotor = at_max(SymptomId::HotFlashes).max(at_max(SymptomId::NightSweats));
    if vasomotor >= 5 {
        alerts.push(alert(
            "severe_vasomotor",
            AlertSeverity::Medium,
            5,
            &messages.severe_vasomotor,
            vasomotor,
        ));
    }

    let exhausted = windows.recent_days(|entry| {
        let fatigued = entry
            .symptom(SymptomId::Fatigue)
            .map(|intensity| intensity >= 4.0)
            .unwrap_or(false);
        let drained = entry.energy().map(|energy| energy <= 2.0).unwrap_or(false);
        fatigued && drained
    });
    if exhausted >= 5 {
        alerts.push(alert("exhaustion", AlertSeverity::Low, 6, &messages.exhaustion, exhausted));
    }

    // Stable sort: equal ranks keep rule order.
    alerts.sort_by_key(|alert| alert.priority_rank);
    for alert in &alerts {
        debug!(id = alert.id, rank = alert.priority_rank, "red flag raised");
    }
    alerts
}

