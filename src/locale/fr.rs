use super::{AlertText, InsightText, Messages};

pub static MESSAGES: Messages = Messages {
    weekdays: [
        "lundi",
        "mardi",
        "mercredi",
        "jeudi",
        "vendredi",
        "samedi",
        "dimanche",
    ],
    domains: ["vasomoteur", "psychosocial", "physique", "sexuel"],
    symptoms: [
        "bouffées de chaleur",
        "sueurs nocturnes",
        "frissons",
        "anxiété",
        "irritabilité",
        "sautes d'humeur",
        "brouillard mental",
        "maux de tête",
        "fatigue",
        "douleurs articulaires",
        "ballonnements",
        "baisse de libido",
        "sécheresse vaginale",
    ],
    signals: ["humeur", "qualité du sommeil", "niveau d'énergie"],

    interpretation_no_data: "Pas de données sur cette période",
    interpretation_no_impact: "Aucun impact sur votre qualité de vie",
    interpretation_mild: "Impact léger sur votre qualité de vie",
    interpretation_moderate: "Impact modéré sur votre qualité de vie",
    interpretation_significant: "Impact important sur votre qualité de vie",
    interpretation_severe: "Impact sévère sur votre qualité de vie",

    recommendation_no_data: "Renseignez quelques jours pour obtenir une évaluation personnalisée.",
    recommendation_clear: "Rien de marquant, votre domaine {domain} est au vert. Continuez à noter vos journées pour suivre votre évolution.",
    recommendation_moderate: "Votre domaine {domain} est le plus touché. Quelques ajustements du quotidien peuvent aider.",
    recommendation_high: "Votre domaine {domain} est fortement touché. Parlez-en à un professionnel de santé.",

    mood_up: InsightText {
        title: "Humeur en hausse",
        message: "Votre humeur moyenne a progressé de {percent} % par rapport à la semaine dernière.",
    },
    mood_down: InsightText {
        title: "Humeur en baisse",
        message: "Votre humeur moyenne a baissé de {percent} % par rapport à la semaine dernière.",
    },
    sleep_up: InsightText {
        title: "Meilleur sommeil",
        message: "La qualité de votre sommeil a gagné {delta} points en moyenne cette semaine.",
    },
    sleep_down: InsightText {
        title: "Sommeil en évolution",
        message: "La qualité de votre sommeil a perdu {delta} points en moyenne cette semaine.",
    },
    best_day: InsightText {
        title: "Meilleure journée",
        message: "Votre meilleure journée cette semaine : {weekday} (humeur {mood}/5).",
    },
    top_symptoms: InsightText {
        title: "Symptômes les plus fréquents",
        message: "Cette semaine, vous avez surtout noté : {symptoms}.",
    },
    morning_pattern: InsightText {
        title: "Tendance diurne",
        message: "Des bouffées de chaleur sur {count} jours cette semaine, plus souvent que les sueurs nocturnes.",
    },
    evening_pattern: InsightText {
        title: "Tendance nocturne",
        message: "Des sueurs nocturnes sur {count} jours cette semaine, plus souvent que les bouffées de chaleur.",
    },
    energy_good: InsightText {
        title: "Bonne énergie",
        message: "Votre énergie moyenne cette semaine est de {average}/5.",
    },
    energy_low: InsightText {
        title: "Énergie à surveiller",
        message: "Votre énergie moyenne cette semaine est de {average}/5. Repos et activité douce peuvent aider.",
    },
    consistency: InsightText {
        title: "Belle régularité",
        message: "Vous avez renseigné {count} des 7 derniers jours.",
    },

    chest_pain: AlertText {
        title: "Douleurs thoraciques répétées",
        message: "Vous avez mentionné une douleur thoracique sur {count} jours cette semaine.",
        action: "Consultez rapidement un médecin. Si la douleur est intense ou irradie, appelez le 15 ou le 112.",
    },
    palpitations: AlertText {
        title: "Palpitations fréquentes",
        message: "Vous avez mentionné des palpitations sur {count} jours cette semaine.",
        action: "Prenez rendez-vous avec votre médecin pour un bilan cardiaque.",
    },
    self_harm: AlertText {
        title: "Vous n'êtes pas seule",
        message: "Certaines de vos notes évoquent des pensées très sombres. Si vous êtes en danger, appelez le 3114 (numéro national de prévention du suicide), gratuit et disponible 24h/24.",
        action: "Contactez dès maintenant le 3114 ou une personne de confiance. En cas d'urgence, appelez le 15.",
    },
    persistent_low_mood: AlertText {
        title: "Humeur basse persistante",
        message: "Votre humeur a été basse sur {count} des 7 derniers jours.",
        action: "Parlez de ce que vous ressentez à un professionnel de santé.",
    },
    severe_headaches: AlertText {
        title: "Maux de tête intenses",
        message: "Vous avez noté des maux de tête intenses sur {count} jours cette semaine.",
        action: "Parlez-en à votre médecin, surtout s'ils sont nouveaux ou inhabituels.",
    },
    poor_sleep: AlertText {
        title: "Sommeil dégradé",
        message: "Votre sommeil a été de mauvaise qualité sur {count} des 14 derniers jours.",
        action: "Mentionnez-le à votre médecin, des solutions existent.",
    },
    severe_vasomotor: AlertText {
        title: "Symptômes vasomoteurs intenses",
        message: "Bouffées de chaleur ou sueurs nocturnes au maximum sur {count} jours cette semaine.",
        action: "Demandez à votre médecin quels traitements sont possibles.",
    },
    exhaustion: AlertText {
        title: "Épuisement persistant",
        message: "Fatigue forte et énergie basse sur {count} jours cette semaine.",
        action: "Un bilan peut aider à écarter d'autres causes de fatigue.",
    },

    trend_improving: "en amélioration",
    trend_declining: "en baisse",
    trend_stable: "stable",
    digest_sentiment: "Tonalité moyenne des notes : {average} ({direction}).",
    digest_counts: "Notes : {positive} positives, {negative} négatives, {neutral} neutres.",
    digest_symptoms: "Symptômes les plus fréquents cette semaine : {symptoms}.",
    digest_no_symptoms: "Aucun symptôme noté cette semaine.",
    digest_quality: "Score de qualité de vie : {score}/8 ({interpretation}).",

    fallback_responses: &[
        "Merci de partager cela avec moi. Comment vous sentez-vous en ce moment ?",
        "Ça a l'air difficile. Je suis là pour vous écouter quand vous le souhaitez.",
        "Vous faites de votre mieux, et c'est important. Voulez-vous m'en dire plus ?",
        "C'est tout à fait normal d'avoir des hauts et des bas. Qu'est-ce qui vous aiderait aujourd'hui ?",
    ],
};
