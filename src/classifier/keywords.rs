use crate::core::types::{HazardType, Sentiment};

/// Hazard vocabulary; also the labeled training set of the hazard model.
pub const HAZARD_KEYWORDS: &[(HazardType, &[&str])] = &[
    (
        HazardType::Tsunami,
        &[
            "tsunami",
            "tidal wave",
            "seismic wave",
            "earthquake",
            "seaquake",
            "ocean wave",
            "giant wave",
            "wall of water",
            "flooding",
            "evacuation",
        ],
    ),
    (
        HazardType::StormSurge,
        &[
            "storm surge",
            "cyclone",
            "hurricane",
            "typhoon",
            "storm",
            "wind",
            "high wind",
            "gale",
            "tempest",
            "squall",
            "stormy weather",
        ],
    ),
    (
        HazardType::HighWaves,
        &[
            "high waves",
            "big waves",
            "rough sea",
            "choppy",
            "swell",
            "surf",
            "wave height",
            "breaking waves",
            "whitecaps",
            "stormy sea",
        ],
    ),
    (
        HazardType::Flooding,
        &[
            "flooding",
            "flood",
            "inundation",
            "water level",
            "rising water",
            "submerged",
            "underwater",
            "waterlogged",
            "deluge",
            "overflow",
        ],
    ),
    (
        HazardType::CoastalDamage,
        &[
            "coastal damage",
            "erosion",
            "beach erosion",
            "shoreline",
            "coastline",
            "damaged",
            "destruction",
            "debris",
            "wreckage",
            "collapsed",
        ],
    ),
    (
        HazardType::AbnormalTide,
        &[
            "abnormal tide",
            "unusual tide",
            "tide level",
            "high tide",
            "low tide",
            "tidal",
            "tide change",
            "water level",
            "sea level",
        ],
    ),
];

pub const OCEAN_TERMS: &[&str] = &[
    "ocean", "sea", "coast", "beach", "shore", "marine", "coastal", "tide", "wave",
];

pub const EMERGENCY_TERMS: &[&str] = &[
    "warning",
    "alert",
    "emergency",
    "disaster",
    "flood",
    "storm",
    "weather",
];

/// Checked in this order; the first category with any match wins.
pub const SENTIMENT_KEYWORDS: &[(Sentiment, &[&str])] = &[
    (
        Sentiment::Urgent,
        &[
            "urgent",
            "emergency",
            "immediate",
            "critical",
            "danger",
            "warning",
            "alert",
        ],
    ),
    (
        Sentiment::Negative,
        &[
            "bad",
            "terrible",
            "awful",
            "disaster",
            "damage",
            "destruction",
            "fear",
        ],
    ),
    (
        Sentiment::Positive,
        &["good", "safe", "calm", "normal", "stable", "recovered"],
    ),
    (
        Sentiment::Neutral,
        &[
            "observed",
            "noticed",
            "seen",
            "reported",
            "situation",
            "condition",
        ],
    ),
];

/// Example sentences whose words train the RELEVANT label.
pub const RELEVANT_SAMPLES: &[&str] = &[
    "tsunami warning issued for coastal areas",
    "high waves observed at the beach",
    "storm surge causing flooding in low lying areas",
    "abnormal tide levels detected",
    "coastal erosion due to strong waves",
    "flooding reported in coastal regions",
    "rough sea conditions with high waves",
    "cyclone approaching causing storm surge",
];

pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

pub fn count_matches(haystack: &str, needles: &[&str]) -> usize {
    needles.iter().filter(|n| haystack.contains(*n)).count()
}
