use chrono::NaiveDate;
use symptom_insights::sentiment::{EMOJI_NEUTRAL, EMOJI_POSITIVE, EMOJI_STRONG_NEGATIVE, EMOJI_STRONG_POSITIVE};
use symptom_insights::{analyze_sentiment, attach_sentiment, backfill_sentiment, DailyLogEntry, Locale, SentimentLabel};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 4, d).unwrap()
}

#[test]
fn blank_note_is_neutral_with_zero_confidence() {
    for text in ["", "   \n\t"] {
        let result = analyze_sentiment(text, Locale::Fr);
        assert_eq!(result.sentiment, SentimentLabel::Neutral);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.emoji, EMOJI_NEUTRAL);
        assert!(result.keywords.positive.is_empty());
        assert!(result.keywords.negative.is_empty());
    }
}

#[test]
fn text_without_keywords_scores_zero() {
    let result = analyze_sentiment("Rien de spécial aujourd'hui", Locale::Fr);
    assert_eq!(result.sentiment, SentimentLabel::Neutral);
    assert_eq!(result.score, 0.0);
    assert_eq!(result.confidence, 0.0);
}

#[test]
fn french_happy_note_is_positive() {
    let result = analyze_sentiment("Je me sens bien et heureuse aujourd'hui", Locale::Fr);
    assert_eq!(result.sentiment, SentimentLabel::Positive);
    assert!(result.score > 0.2);
    assert!((result.score - 1.0).abs() < 1e-6);
    assert_eq!(result.keywords.positive, vec!["bien", "heureuse"]);
    assert!((result.confidence - 0.4).abs() < 1e-6);
    assert_eq!(result.emoji, EMOJI_STRONG_POSITIVE);
}

#[test]
fn health_phrases_outweigh_generic_words() {
    // happy (1.0) against migraine (1.5): (1 - 1.5) / 2.5 = -0.2, not below the threshold
    let result = analyze_sentiment("I feel happy but had a migraine", Locale::En);
    assert!((result.score + 0.2).abs() < 1e-6);
    assert_eq!(result.sentiment, SentimentLabel::Neutral);
    assert!((result.confidence - 0.5).abs() < 1e-6);
}

#[test]
fn keyword_lists_are_capped_in_scan_order() {
    let result = analyze_sentiment(
        "Tired and anxious, awful night sweats and a headache",
        Locale::En,
    );
    assert_eq!(result.sentiment, SentimentLabel::Negative);
    assert_eq!(result.keywords.negative, vec!["tired", "anxious", "awful"]);
    assert!((result.score + 1.0).abs() < 1e-6);
    assert!((result.confidence - 1.0).abs() < 1e-6);
    assert_eq!(result.emoji, EMOJI_STRONG_NEGATIVE);
}

#[test]
fn mild_polarity_uses_mild_emoji() {
    let result = analyze_sentiment("Good and calm day, a bit tired", Locale::En);
    assert_eq!(result.sentiment, SentimentLabel::Positive);
    assert!((result.score - 1.0 / 3.0).abs() < 1e-6);
    assert_eq!(result.emoji, EMOJI_POSITIVE);
}

#[test]
fn classification_is_idempotent() {
    let text = "Mal dormi, bouffées de chaleur, mais contente de ma journée";
    let first = analyze_sentiment(text, Locale::Fr);
    let second = analyze_sentiment(text, Locale::Fr);
    assert_eq!(first, second);
}

#[test]
fn lexicon_follows_locale() {
    let result = analyze_sentiment("Je me sens bien et heureuse", Locale::En);
    assert_eq!(result.sentiment, SentimentLabel::Neutral);
    assert_eq!(result.score, 0.0);
}

#[test]
fn attach_sentiment_snapshots_the_note() {
    let entry = attach_sentiment(
        DailyLogEntry::new(day(1)).with_note("Je me sens bien et heureuse"),
        Locale::Fr,
    );
    let snapshot = entry.sentiment.expect("snapshot");
    assert_eq!(snapshot.label, SentimentLabel::Positive);
    assert_eq!(snapshot.emoji, EMOJI_STRONG_POSITIVE);

    let without_note = attach_sentiment(DailyLogEntry::new(day(2)), Locale::Fr);
    assert!(without_note.sentiment.is_none());
}

#[test]
fn backfill_keeps_existing_snapshots_unless_asked() {
    let stale = attach_sentiment(DailyLogEntry::new(day(1)).with_note("triste"), Locale::Fr);
    let mut edited = stale.clone();
    edited.note = Some("heureuse".to_string());
    let entries = vec![edited, DailyLogEntry::new(day(2)).with_note("calme et sereine")];

    let kept = backfill_sentiment(&entries, Locale::Fr, false);
    assert_eq!(kept[0].sentiment, stale.sentiment);
    assert_eq!(kept[1].sentiment.as_ref().map(|s| s.label), Some(SentimentLabel::Positive));

    let refreshed = backfill_sentiment(&entries, Locale::Fr, true);
    assert_eq!(refreshed[0].sentiment.as_ref().map(|s| s.label), Some(SentimentLabel::Positive));
}

#[test]
fn relieved_health_phrases_read_as_positive() {
    for (text, locale, phrase) in [
        ("Journée sans douleur", Locale::Fr, "sans douleur"),
        ("Enfin moins de bouffées de chaleur", Locale::Fr, "moins de bouffées"),
        ("Pain free morning", Locale::En, "pain free"),
        ("No hot flash today", Locale::En, "no hot flash"),
    ] {
        let result = analyze_sentiment(text, locale);
        assert_eq!(result.sentiment, SentimentLabel::Positive, "{text}");
        assert_eq!(result.keywords.positive, vec![phrase], "{text}");
        assert!(result.keywords.negative.is_empty(), "{text}");
        assert!((result.score - 1.0).abs() < 1e-6);
    }
}

#[test]
fn relief_phrase_does_not_hide_other_complaints() {
    // sans douleur (+1.5) against migraine (-1.5)
    let result = analyze_sentiment("Sans douleur au dos mais une migraine", Locale::Fr);
    assert_eq!(result.keywords.negative, vec!["migraine"]);
    assert_eq!(result.score, 0.0);
    assert_eq!(result.sentiment, SentimentLabel::Neutral);
}
