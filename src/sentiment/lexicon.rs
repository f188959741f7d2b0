use crate::locale::Locale;

/// Keyword lists scanned in declaration order. Generic words weigh 1, health
/// phrases weigh [`super::HEALTH_WEIGHT`].
#[derive(Debug)]
pub struct Lexicon {
    pub positive: &'static [&'static str],
    pub negative: &'static [&'static str],
    pub positive_health: &'static [&'static str],
    pub negative_health: &'static [&'static str],
}

impl Lexicon {
    pub fn for_locale(locale: Locale) -> &'static Lexicon {
        match locale {
            Locale::Fr => &FRENCH,
            Locale::En => &ENGLISH,
        }
    }
}

static FRENCH: Lexicon = Lexicon {
    positive: &[
        "bien",
        "heureuse",
        "heureux",
        "contente",
        "content",
        "joie",
        "calme",
        "sereine",
        "détendue",
        "motivée",
        "énergique",
        "super",
        "génial",
        "optimiste",
        "apaisée",
        "en forme",
    ],
    negative: &[
        "triste",
        "fatiguée",
        "épuisée",
        "stress",
        "angoisse",
        "déprimée",
        "colère",
        "énervée",
        "irritée",
        "difficile",
        "horrible",
        "pleure",
        "isolée",
        "mauvaise",
    ],
    positive_health: &[
        "bien dormi",
        "mieux dormi",
        "reposée",
        "nuit calme",
        "plein d'énergie",
        "moins de bouffées",
        "sans douleur",
    ],
    negative_health: &[
        "bouffées de chaleur",
        "sueurs nocturnes",
        "insomnie",
        "mal dormi",
        "migraine",
        "maux de tête",
        "mal de tête",
        "douleur",
        "palpitation",
        "nausée",
        "vertige",
        "crampe",
    ],
};

static ENGLISH: Lexicon = Lexicon {
    positive: &[
        "good",
        "great",
        "happy",
        "calm",
        "relaxed",
        "better",
        "grateful",
        "energetic",
        "motivated",
        "wonderful",
        "peaceful",
        "hopeful",
    ],
    negative: &[
        "sad",
        "tired",
        "exhausted",
        "stressed",
        "anxious",
        "angry",
        "irritated",
        "awful",
        "terrible",
        "depressed",
        "lonely",
        "crying",
        "worse",
    ],
    positive_health: &[
        "slept well",
        "well rested",
        "full of energy",
        "pain free",
        "fewer flashes",
        "no hot flash",
    ],
    negative_health: &[
        "hot flash",
        "night sweat",
        "insomnia",
        "couldn't sleep",
        "migraine",
        "headache",
        "pain",
        "palpitation",
        "nausea",
        "dizzy",
        "cramp",
    ],
};
