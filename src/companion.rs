use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::SymptomId;
use crate::entry::{DailyLogEntry, EntryLog};
use crate::insights::symptom_day_counts;
use crate::locale::{render, Locale};
use crate::quality::QualityOfLifeReport;
use crate::trend::TrendSummary;

pub const DIGEST_SYMPTOMS: usize = 3;

/// Most frequent symptoms over the `days` ending at `as_of`.
pub fn top_symptoms(
    entries: &[DailyLogEntry],
    as_of: NaiveDate,
    days: i64,
    limit: usize,
) -> Vec<(SymptomId, usize)> {
    let log = EntryLog::new(entries);
    let window = log.window(as_of, days);
    symptom_day_counts(&window).into_iter().take(limit).collect()
}

pub fn assistant_digest(
    trend: &TrendSummary,
    top_symptoms: &[(SymptomId, usize)],
    quality: &QualityOfLifeReport,
    locale: Locale,
) -> String {
    let messages = locale.messages();
    let average = format!("{:.2}", trend.average_sentiment);
    let positive = trend.positive_count.to_string();
    let negative = trend.negative_count.to_string();
    let neutral = trend.neutral_count.to_string();
    let score = format!("{:.1}", quality.global_score);

    let symptoms_line = if top_symptoms.is_empty() {
        messages.digest_no_symptoms.to_string()
    } else {
        let names = top_symptoms
            .iter()
            .take(DIGEST_SYMPTOMS)
            .map(|(id, days)| format!("{} ({})", messages.symptom(*id), days))
            .collect::<Vec<_>>()
            .join(", ");
        render(messages.digest_symptoms, &[("symptoms", names.as_str())])
    };

    [
        render(
            messages.digest_sentiment,
            &[
                ("average", average.as_str()),
                ("direction", trend.trend_direction.text(messages)),
            ],
        ),
        render(
            messages.digest_counts,
            &[
                ("positive", positive.as_str()),
                ("negative", negative.as_str()),
                ("neutral", neutral.as_str()),
            ],
        ),
        symptoms_line,
        render(
            messages.digest_quality,
            &[
                ("score", score.as_str()),
                ("interpretation", quality.interpretation_text.as_str()),
            ],
        ),
    ]
    .join("\n")
}

/// Picks a generic empathetic reply. The random source is injected so callers
/// and tests control the choice.
pub fn fallback_response<R: Rng + ?Sized>(rng: &mut R, locale: Locale) -> &'static str {
    let responses = locale.messages().fallback_responses;
    responses.choose(rng).copied().unwrap_or("")
}
