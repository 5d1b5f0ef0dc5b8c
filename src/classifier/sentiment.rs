use crate::classifier::keywords::{count_matches, SENTIMENT_KEYWORDS};
use crate::core::types::Sentiment;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScore {
    pub sentiment: Sentiment,
    pub confidence: f64,
}

/// First category (URGENT, NEGATIVE, POSITIVE, NEUTRAL) with a keyword hit wins.
/// Expects lower-cased text.
pub fn analyze_sentiment(lower: &str) -> SentimentScore {
    for (sentiment, keywords) in SENTIMENT_KEYWORDS {
        let hits = count_matches(lower, keywords);
        if hits > 0 {
            return SentimentScore {
                sentiment: *sentiment,
                confidence: (hits as f64 * 0.3).min(1.0),
            };
        }
    }
    SentimentScore {
        sentiment: Sentiment::Neutral,
        confidence: 0.5,
    }
}
