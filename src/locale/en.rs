use super::{AlertText, InsightText, Messages};

pub static MESSAGES: Messages = Messages {
    weekdays: [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ],
    domains: ["vasomotor", "psychosocial", "physical", "sexual"],
    symptoms: [
        "hot flashes",
        "night sweats",
        "chills",
        "anxiety",
        "irritability",
        "mood swings",
        "brain fog",
        "headache",
        "fatigue",
        "joint pain",
        "bloating",
        "low libido",
        "vaginal dryness",
    ],
    signals: ["mood", "sleep quality", "energy level"],

    interpretation_no_data: "No data for this period",
    interpretation_no_impact: "No impact on your quality of life",
    interpretation_mild: "Mild impact on your quality of life",
    interpretation_moderate: "Moderate impact on your quality of life",
    interpretation_significant: "Significant impact on your quality of life",
    interpretation_severe: "Severe impact on your quality of life",

    recommendation_no_data: "Log a few days to get a personalised assessment.",
    recommendation_clear: "Nothing stands out, your {domain} domain is clear. Keep logging to follow your progress.",
    recommendation_moderate: "Your {domain} domain is the most affected. Small lifestyle adjustments may help.",
    recommendation_high: "Your {domain} domain is strongly affected. Consider discussing it with a healthcare professional.",

    mood_up: InsightText {
        title: "Mood improving",
        message: "Your average mood is up {percent}% compared with last week.",
    },
    mood_down: InsightText {
        title: "Mood dipping",
        message: "Your average mood is down {percent}% compared with last week.",
    },
    sleep_up: InsightText {
        title: "Better sleep",
        message: "Your sleep quality rose by {delta} points on average this week.",
    },
    sleep_down: InsightText {
        title: "Sleep changing",
        message: "Your sleep quality dropped by {delta} points on average this week.",
    },
    best_day: InsightText {
        title: "Best day",
        message: "{weekday} was your best day this week (mood {mood}/5).",
    },
    top_symptoms: InsightText {
        title: "Most frequent symptoms",
        message: "This week you mostly logged: {symptoms}.",
    },
    morning_pattern: InsightText {
        title: "Daytime pattern",
        message: "Hot flashes showed up on {count} days this week, more often than night sweats.",
    },
    evening_pattern: InsightText {
        title: "Night-time pattern",
        message: "Night sweats showed up on {count} days this week, more often than hot flashes.",
    },
    energy_good: InsightText {
        title: "Good energy",
        message: "Your average energy this week is {average}/5.",
    },
    energy_low: InsightText {
        title: "Energy to watch",
        message: "Your average energy this week is {average}/5. Rest and movement can help.",
    },
    consistency: InsightText {
        title: "Great consistency",
        message: "You logged {count} of the last 7 days.",
    },

    chest_pain: AlertText {
        title: "Recurring chest pain",
        message: "You mentioned chest pain on {count} days this week.",
        action: "Seek medical advice promptly. If the pain is intense or spreading, call emergency services (911 / 112).",
    },
    palpitations: AlertText {
        title: "Frequent palpitations",
        message: "You mentioned palpitations on {count} days this week.",
        action: "Book an appointment with your doctor to check your heart rhythm.",
    },
    self_harm: AlertText {
        title: "You are not alone",
        message: "Some of your notes suggest very dark thoughts. If you are in danger, call or text 988 (Suicide & Crisis Lifeline), available 24/7.",
        action: "Reach out now to 988 or to someone you trust. In an emergency, call 911.",
    },
    persistent_low_mood: AlertText {
        title: "Persistent low mood",
        message: "Your mood was low on {count} of the last 7 days.",
        action: "Talk to a healthcare professional about how you are feeling.",
    },
    severe_headaches: AlertText {
        title: "Severe headaches",
        message: "You logged intense headaches on {count} days this week.",
        action: "Discuss these headaches with your doctor, especially if they are new or unusual.",
    },
    poor_sleep: AlertText {
        title: "Ongoing poor sleep",
        message: "Your sleep quality was poor on {count} of the last 14 days.",
        action: "Mention it to your doctor; treatments for sleep disruption exist.",
    },
    severe_vasomotor: AlertText {
        title: "Intense vasomotor symptoms",
        message: "Hot flashes or night sweats were at their maximum on {count} days this week.",
        action: "Ask your doctor about treatment options for vasomotor symptoms.",
    },
    exhaustion: AlertText {
        title: "Persistent exhaustion",
        message: "Strong fatigue with low energy on {count} days this week.",
        action: "Consider a check-up to rule out other causes of fatigue.",
    },

    trend_improving: "improving",
    trend_declining: "declining",
    trend_stable: "stable",
    digest_sentiment: "Average note sentiment: {average} ({direction}).",
    digest_counts: "Notes: {positive} positive, {negative} negative, {neutral} neutral.",
    digest_symptoms: "Most frequent symptoms this week: {symptoms}.",
    digest_no_symptoms: "No symptoms logged this week.",
    digest_quality: "Quality-of-life score: {score}/8 ({interpretation}).",

    fallback_responses: &[
        "Thank you for sharing this. How are you feeling right now?",
        "That sounds hard. I'm here to listen whenever you want to talk.",
        "You're doing your best, and that matters. Would you like to tell me more?",
        "It's completely normal to have ups and downs. What would help you today?",
    ],
};
