use crate::profile::Craving;

/// Static advisory content shown alongside the daily logger and the
/// pregnancy screens. Informational only, never a diagnosis.

/// Symptom tags offered by the daily logger.
pub const SYMPTOM_TAGS: [&str; 5] = ["Cramps", "Headache", "Bloating", "Acne", "Tiredness"];

pub struct SymptomInfo {
    pub tag: &'static str,
    pub reason: &'static str,
    pub remedies: &'static [&'static str],
}

pub static SYMPTOM_INFO: [SymptomInfo; 5] = [
    SymptomInfo {
        tag: "Cramps",
        reason: "During your period, your uterus contracts to shed its lining. These contractions can cause cramping.",
        remedies: &[
            "Try a heating pad or hot water bottle on your abdomen.",
            "Gentle exercise like walking or stretching can help.",
            "Sip on warm chamomile tea or ginger tea.",
            "Stay hydrated and avoid salty foods, which can cause bloating.",
        ],
    },
    SymptomInfo {
        tag: "Headache",
        reason: "Hormone changes (especially the drop in estrogen) right before or during your period are a common trigger for headaches.",
        remedies: &[
            "Make sure you are drinking enough water.",
            "Rest in a quiet, dark room if possible.",
            "A cool cloth on your forehead can provide relief.",
            "Try to maintain a regular sleep schedule.",
        ],
    },
    SymptomInfo {
        tag: "Bloating",
        reason: "Hormonal changes can cause your body to retain more water and salt, leading to that 'puffy' feeling.",
        remedies: &[
            "Drink plenty of water (it sounds counterintuitive, but it helps).",
            "Reduce your salt (sodium) intake.",
            "Eat potassium-rich foods like bananas or avocados.",
            "Avoid carbonated drinks and gas-producing foods.",
        ],
    },
    SymptomInfo {
        tag: "Acne",
        reason: "Your hormones (like testosterone) can fluctuate, causing your skin's oil glands to work overtime, leading to breakouts.",
        remedies: &[
            "Be extra-gentle with your skincare routine; don't scrub.",
            "Use a gentle, non-comedogenic cleanser.",
            "Try to avoid touching your face.",
            "Change your pillowcase regularly.",
        ],
    },
    SymptomInfo {
        tag: "Tiredness",
        reason: "Fluctuating hormones, trouble sleeping due to other symptoms (like cramps), and low iron levels can all contribute to fatigue.",
        remedies: &[
            "Aim for 7-9 hours of sleep.",
            "Eat iron-rich foods like leafy greens, beans, and lean meat.",
            "Try gentle exercise to boost your energy levels.",
            "Take short naps if you need to.",
        ],
    },
];

/// Look up the info card for a symptom tag.
pub fn symptom_info(tag: &str) -> Option<&'static SymptomInfo> {
    SYMPTOM_INFO.iter().find(|info| info.tag == tag)
}

/// Healthy-swap suggestions for a logged craving.
pub fn craving_suggestions(craving: Craving) -> &'static str {
    match craving {
        Craving::Sweet => "\
• Fruits: A great source of natural sugars, fiber, and vitamins.
• Dark Chocolate (70%+): Contains magnesium, which can help with period symptoms.
• Yogurt with Berries: Provides protein and calcium, and the berries add natural sweetness.",
        Craving::Sour => "\
• Roasted Makhana (Fox Nuts): A light, crunchy snack. Try with a sprinkle of amchur (dry mango powder).
• Sprouts Chaat: A nutrient-dense salad with moong sprouts, veggies, and a dash of lemon juice.",
        Craving::Spicy => "\
• Warm Vegetable Soup: Hydrating, comforting, and packed with nutrients.
• Moong Dal Chilla: A savory pancake made from lentils, it's high in protein and easy to digest.",
    }
}

pub struct NutritionTip {
    pub title: &'static str,
    pub content: &'static str,
}

/// Pregnancy nutrition tips, shown as fixed cards.
pub static NUTRITION_TIPS: [NutritionTip; 6] = [
    NutritionTip {
        title: "Folic Acid is Key",
        content: "Take a prenatal vitamin with at least 400mcg of folic acid daily, especially in the first 12 weeks, to help prevent birth defects.",
    },
    NutritionTip {
        title: "Eat Your Colors",
        content: "Fill your plate with colorful fruits and vegetables. They provide essential vitamins and minerals for you and your baby.",
    },
    NutritionTip {
        title: "Lean Protein",
        content: "Include sources of lean protein like chicken, fish (low-mercury), beans, and lentils. Protein is crucial for your baby's growth.",
    },
    NutritionTip {
        title: "Calcium for Bones",
        content: "Get plenty of calcium from dairy, fortified non-dairy milk, or dark leafy greens to support your baby's bone development.",
    },
    NutritionTip {
        title: "Hydrate, Hydrate!",
        content: "Drink plenty of water (around 8-12 glasses a day). It helps form amniotic fluid and supports your increased blood volume.",
    },
    NutritionTip {
        title: "Food Safety",
        content: "Avoid raw or undercooked meat, unpasteurized dairy, and high-mercury fish to prevent infections that can harm your baby.",
    },
];

pub struct WeeklyInsight {
    pub week: i64,
    pub title: &'static str,
    pub content: &'static str,
}

/// Milestone insights keyed by gestational week.
pub static WEEKLY_INSIGHTS: [WeeklyInsight; 4] = [
    WeeklyInsight {
        week: 8,
        title: "Baby is the size of a raspberry!",
        content: "Your baby's fingers and toes are now forming. You might be feeling morning sickness. Try eating small, frequent meals.",
    },
    WeeklyInsight {
        week: 12,
        title: "Baby can make a fist!",
        content: "Your baby is fully formed! The risk of miscarriage drops. You might notice your clothes getting tighter.",
    },
    WeeklyInsight {
        week: 20,
        title: "Halfway there!",
        content: "You might feel your baby move (quickening)! The 20-week anatomy scan is usually around this time.",
    },
    WeeklyInsight {
        week: 40,
        title: "Full term!",
        content: "Baby is ready! Look for signs of labor, like regular contractions or your water breaking. Rest up!",
    },
];

static GENERIC_INSIGHT: WeeklyInsight = WeeklyInsight {
    week: 0,
    title: "Growing every day!",
    content: "Remember to take your prenatal vitamins and stay hydrated.",
};

/// Insight for a gestational week: exact milestone, else the next one
/// coming up, else the generic fallback.
pub fn weekly_insight(week: i64) -> &'static WeeklyInsight {
    WEEKLY_INSIGHTS
        .iter()
        .find(|insight| insight.week == week)
        .or_else(|| WEEKLY_INSIGHTS.iter().find(|insight| insight.week > week))
        .unwrap_or(&GENERIC_INSIGHT)
}
