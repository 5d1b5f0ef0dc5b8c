//! Social post triage: relevance gate, hazard type, sentiment and location.

pub mod bayes;
pub mod keywords;
pub mod location;
pub mod sentiment;

use crate::config::ClassifierConfig;
use crate::core::error::TideError;
use crate::core::types::{ClassificationResult, HazardType, Sentiment};
use bayes::{BayesModel, Classification};
use keywords::{contains_any, EMERGENCY_TERMS, HAZARD_KEYWORDS, OCEAN_TERMS};
use location::LocationExtractor;
use sentiment::{analyze_sentiment, SentimentScore};

pub const RELEVANT_CONFIDENCE: f64 = 0.8;
pub const NOT_RELEVANT_CONFIDENCE: f64 = 0.2;
/// Confidence reported for posts rejected by the relevance gate.
pub const REJECTED_CONFIDENCE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Relevance {
    pub is_relevant: bool,
    pub confidence: f64,
}

/// Optional post metadata. It does not influence the result.
#[derive(Debug, Clone, Default)]
pub struct PostMeta<'a> {
    pub platform: Option<&'a str>,
    pub author: Option<&'a str>,
    pub location: Option<&'a str>,
}

/// Trained once, then read-only; safe to share across threads by reference.
#[derive(Debug, Clone)]
pub struct Classifier {
    model: BayesModel,
    locations: LocationExtractor,
    hazard_threshold: f64,
}

impl Classifier {
    pub fn new(cfg: &ClassifierConfig) -> Result<Self, TideError> {
        Self::with_model(BayesModel::hazard_default(), cfg)
    }

    pub fn with_model(model: BayesModel, cfg: &ClassifierConfig) -> Result<Self, TideError> {
        let locations =
            LocationExtractor::new().map_err(|e| TideError::Config(e.to_string()))?;
        Ok(Self {
            model,
            locations,
            hazard_threshold: cfg.hazard_confidence_threshold,
        })
    }

    pub fn relevance(&self, text: &str) -> Relevance {
        relevance(&text.to_lowercase())
    }

    /// Top label of the hazard model, without thresholding.
    pub fn classify_hazard(&self, text: &str) -> Option<Classification> {
        self.model.top(&text.to_lowercase())
    }

    pub fn sentiment(&self, text: &str) -> SentimentScore {
        analyze_sentiment(&text.to_lowercase())
    }

    pub fn extract_location(&self, text: &str) -> Option<String> {
        self.locations.extract(text)
    }

    pub fn process_post(&self, content: &str, meta: &PostMeta<'_>) -> ClassificationResult {
        let lower = content.to_lowercase();
        let relevance = relevance(&lower);
        if !relevance.is_relevant {
            tracing::debug!(
                platform = meta.platform.unwrap_or("-"),
                author = meta.author.unwrap_or("-"),
                "post rejected by relevance gate"
            );
            return ClassificationResult {
                hazard_type: None,
                is_relevant: false,
                sentiment: Sentiment::Neutral,
                confidence: REJECTED_CONFIDENCE,
                extracted_location: None,
            };
        }

        let hazard = self.model.top(&lower);
        let hazard_type = hazard.and_then(|c| self.accept_hazard(c));
        let sentiment = analyze_sentiment(&lower);
        let extracted_location = self.locations.extract(content);

        tracing::debug!(
            platform = meta.platform.unwrap_or("-"),
            author = meta.author.unwrap_or("-"),
            hazard_label = ?hazard.map(|c| c.label),
            hazard_confidence = hazard.map(|c| c.confidence).unwrap_or(0.0),
            sentiment = %sentiment.sentiment,
            sentiment_confidence = sentiment.confidence,
            "post classified"
        );

        // The caller sees the relevance confidence, not the hazard or sentiment one.
        ClassificationResult {
            hazard_type,
            is_relevant: true,
            sentiment: sentiment.sentiment,
            confidence: relevance.confidence,
            extracted_location,
        }
    }

    fn accept_hazard(&self, c: Classification) -> Option<HazardType> {
        if c.confidence > self.hazard_threshold {
            c.label.hazard()
        } else {
            None
        }
    }
}

/// Relevance gate over lower-cased text.
pub fn relevance(lower: &str) -> Relevance {
    let has_hazard = HAZARD_KEYWORDS
        .iter()
        .any(|(_, words)| contains_any(lower, words));
    let is_relevant = has_hazard
        || (contains_any(lower, OCEAN_TERMS) && contains_any(lower, EMERGENCY_TERMS));
    Relevance {
        is_relevant,
        confidence: if is_relevant {
            RELEVANT_CONFIDENCE
        } else {
            NOT_RELEVANT_CONFIDENCE
        },
    }
}
