use chrono::NaiveDate;
use symptom_insights::entry::SentimentSnapshot;
use symptom_insights::trend::direction;
use symptom_insights::{summarize_sentiment_trend, DailyLogEntry, SentimentLabel, TrendDirection};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 7, d).unwrap()
}

fn scored(d: u32, score: f64) -> DailyLogEntry {
    let label = if score > 0.2 {
        SentimentLabel::Positive
    } else if score < -0.2 {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    };
    let mut entry = DailyLogEntry::new(day(d)).with_note("note");
    entry.sentiment = Some(SentimentSnapshot {
        label,
        score,
        emoji: String::new(),
        confidence: 0.4,
    });
    entry
}

#[test]
fn empty_window_is_stable_and_zero() {
    let summary = summarize_sentiment_trend(&[], day(30), 30);
    assert_eq!(summary.average_sentiment, 0.0);
    assert_eq!(summary.trend_direction, TrendDirection::Stable);
    assert_eq!(summary.total_analyzed, 0);
}

#[test]
fn fewer_than_four_snapshots_stay_stable() {
    let entries = vec![scored(1, -1.0), scored(2, 1.0), scored(3, 1.0)];
    let summary = summarize_sentiment_trend(&entries, day(30), 30);
    assert_eq!(summary.trend_direction, TrendDirection::Stable);
    assert_eq!(summary.total_analyzed, 3);
    assert_eq!(summary.positive_count, 2);
    assert_eq!(summary.negative_count, 1);
}

#[test]
fn rising_scores_are_improving() {
    let entries = vec![
        scored(4, -0.6),
        scored(1, -0.4),
        scored(9, 0.5),
        scored(12, 0.3),
        scored(15, 0.0),
    ];
    // Chronological: [-0.4, -0.6] against [0.5, 0.3, 0.0]
    let summary = summarize_sentiment_trend(&entries, day(30), 30);
    assert_eq!(summary.trend_direction, TrendDirection::Improving);
    assert!((summary.average_sentiment - (-0.04)).abs() < 1e-6);
    assert_eq!(summary.positive_count, 2);
    assert_eq!(summary.negative_count, 2);
    assert_eq!(summary.neutral_count, 1);
    assert_eq!(
        summary.total_analyzed,
        summary.positive_count + summary.negative_count + summary.neutral_count
    );
}

#[test]
fn falling_scores_are_declining() {
    let entries = vec![scored(20, 0.8), scored(21, 0.6), scored(22, 0.0), scored(23, -0.2)];
    let summary = summarize_sentiment_trend(&entries, day(30), 30);
    assert_eq!(summary.trend_direction, TrendDirection::Declining);
}

#[test]
fn entries_without_snapshots_are_skipped() {
    let mut entries = vec![scored(10, 0.5), scored(11, 0.5)];
    entries.push(DailyLogEntry::new(day(12)).with_note("Je me sens bien et heureuse"));
    entries.push(DailyLogEntry::new(day(13)).with_mood(5));
    let summary = summarize_sentiment_trend(&entries, day(30), 30);
    assert_eq!(summary.total_analyzed, 2);
    assert!((summary.average_sentiment - 0.5).abs() < 1e-6);
}

#[test]
fn stored_snapshots_are_trusted_over_the_note() {
    let mut entry = scored(10, -0.8);
    entry.note = Some("Je me sens bien et heureuse".to_string());
    let summary = summarize_sentiment_trend(&[entry], day(30), 30);
    assert_eq!(summary.negative_count, 1);
    assert!((summary.average_sentiment + 0.8).abs() < 1e-6);
}

#[test]
fn window_excludes_older_and_future_days() {
    let entries = vec![scored(20, -1.0), scored(21, 1.0), scored(25, 0.5), scored(31, -1.0)];
    let summary = summarize_sentiment_trend(&entries, day(30), 10);
    assert_eq!(summary.total_analyzed, 2);
    assert!((summary.average_sentiment - 0.75).abs() < 1e-6);
}

#[test]
fn odd_lengths_put_the_extra_point_in_the_newer_half() {
    // [-0.5, -0.5] vs [0.5, 0.5, 0.5]
    assert_eq!(direction(&[-0.5, -0.5, 0.5, 0.5, 0.5]), TrendDirection::Improving);
    assert_eq!(direction(&[0.6, 0.6, 0.0, 0.0]), TrendDirection::Declining);
    assert_eq!(direction(&[0.1, 0.1, 0.2, 0.2]), TrendDirection::Stable);
}
