//! Multinomial naive Bayes over keyword-sized documents.
//!
//! Training happens once in [`BayesTrainer::train`]; the resulting [`BayesModel`] is
//! immutable and can be shared across threads. Class priors are uniform: the training
//! documents are keyword lists, so class sizes say nothing about base rates.

use rustc_hash::{FxHashMap, FxHashSet};
use stop_words::{get, LANGUAGE};

use crate::classifier::keywords::{HAZARD_KEYWORDS, RELEVANT_SAMPLES};
use crate::core::types::HazardType;

const SMOOTHING: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Hazard(HazardType),
    /// Generic hazard vocabulary without a specific type.
    Relevant,
}

impl Label {
    pub fn hazard(&self) -> Option<HazardType> {
        match self {
            Label::Hazard(h) => Some(*h),
            Label::Relevant => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: Label,
    /// Posterior probability in [0, 1].
    pub confidence: f64,
}

#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: FxHashSet<String>,
}

impl Tokenizer {
    pub fn english() -> Self {
        Self {
            stopwords: get(LANGUAGE::English).iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn without_stopwords() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .filter(|t| !self.stopwords.contains(*t))
            .map(|t| t.to_string())
            .collect()
    }
}

pub struct BayesTrainer {
    tokenizer: Tokenizer,
    documents: Vec<(Vec<String>, Label)>,
}

impl BayesTrainer {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
            documents: Vec::new(),
        }
    }

    pub fn add_document(&mut self, text: &str, label: Label) {
        let tokens = self.tokenizer.tokenize(text);
        self.documents.push((tokens, label));
    }

    pub fn train(self) -> BayesModel {
        let mut labels: Vec<Label> = Vec::new();
        let mut vocab: FxHashMap<String, usize> = FxHashMap::default();
        for (tokens, label) in &self.documents {
            if !labels.contains(label) {
                labels.push(*label);
            }
            for token in tokens {
                let next = vocab.len();
                vocab.entry(token.clone()).or_insert(next);
            }
        }

        let mut token_counts = vec![vec![0u32; vocab.len()]; labels.len()];
        let mut totals = vec![0u32; labels.len()];
        for (tokens, label) in &self.documents {
            let Some(li) = labels.iter().position(|l| l == label) else {
                continue;
            };
            for token in tokens {
                if let Some(&ti) = vocab.get(token) {
                    token_counts[li][ti] += 1;
                    totals[li] += 1;
                }
            }
        }

        tracing::debug!(
            labels = labels.len(),
            vocabulary = vocab.len(),
            documents = self.documents.len(),
            "hazard model trained"
        );

        BayesModel {
            tokenizer: self.tokenizer,
            labels,
            vocab,
            token_counts,
            totals,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BayesModel {
    tokenizer: Tokenizer,
    labels: Vec<Label>,
    vocab: FxHashMap<String, usize>,
    token_counts: Vec<Vec<u32>>,
    totals: Vec<u32>,
}

impl BayesModel {
    /// Trains the hazard model: one document per hazard keyword, plus each word longer
    /// than two characters of the sample sentences as a RELEVANT document.
    pub fn hazard_default() -> Self {
        let mut trainer = BayesTrainer::new(Tokenizer::english());
        for (hazard, keywords) in HAZARD_KEYWORDS {
            for keyword in keywords.iter() {
                trainer.add_document(keyword, Label::Hazard(*hazard));
            }
        }
        for sample in RELEVANT_SAMPLES {
            for word in sample.to_lowercase().split(' ') {
                if word.len() > 2 {
                    trainer.add_document(word, Label::Relevant);
                }
            }
        }
        trainer.train()
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocab.len()
    }

    /// Posterior over all labels, best first. Ties keep training order.
    pub fn classify(&self, text: &str) -> Vec<Classification> {
        if self.labels.is_empty() {
            return Vec::new();
        }
        let known: Vec<usize> = self
            .tokenizer
            .tokenize(text)
            .iter()
            .filter_map(|t| self.vocab.get(t).copied())
            .collect();

        let v = self.vocab.len() as f64;
        let log_scores: Vec<f64> = (0..self.labels.len())
            .map(|li| {
                let denom = self.totals[li] as f64 + SMOOTHING * v;
                known
                    .iter()
                    .map(|&ti| ((self.token_counts[li][ti] as f64 + SMOOTHING) / denom).ln())
                    .sum()
            })
            .collect();

        let max = log_scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let weights: Vec<f64> = log_scores.iter().map(|s| (s - max).exp()).collect();
        let norm: f64 = weights.iter().sum();

        let mut out: Vec<Classification> = self
            .labels
            .iter()
            .zip(weights)
            .map(|(label, w)| Classification {
                label: *label,
                confidence: w / norm,
            })
            .collect();
        out.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        out
    }

    pub fn top(&self, text: &str) -> Option<Classification> {
        self.classify(text).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_model() -> BayesModel {
        let mut trainer = BayesTrainer::new(Tokenizer::without_stopwords());
        trainer.add_document("cyclone storm", Label::Hazard(HazardType::StormSurge));
        trainer.add_document("gale", Label::Hazard(HazardType::StormSurge));
        trainer.add_document("tsunami", Label::Hazard(HazardType::Tsunami));
        trainer.add_document("earthquake", Label::Hazard(HazardType::Tsunami));
        trainer.train()
    }

    #[test]
    fn tokenizer_splits_and_lowercases() {
        let tokens = Tokenizer::without_stopwords().tokenize("Storm-Surge, HIGH waves!");
        assert_eq!(tokens, vec!["storm", "surge", "high", "waves"]);
    }

    #[test]
    fn english_stopwords_keep_hazard_modifiers() {
        let tokenizer = Tokenizer::english();
        assert_eq!(tokenizer.tokenize("high tide"), vec!["high", "tide"]);
        assert_eq!(tokenizer.tokenize("low tide"), vec!["low", "tide"]);
        assert_eq!(tokenizer.tokenize("big waves"), vec!["big", "waves"]);
        assert_eq!(tokenizer.tokenize("waves at the shore"), vec!["waves", "shore"]);
    }

    #[test]
    fn posteriors_sum_to_one() {
        let model = toy_model();
        let total: f64 = model
            .classify("cyclone near the tsunami zone")
            .iter()
            .map(|c| c.confidence)
            .sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn evidence_moves_the_posterior() {
        let model = toy_model();
        let top = model.top("earthquake then tsunami").unwrap();
        assert_eq!(top.label, Label::Hazard(HazardType::Tsunami));
        assert!(top.confidence > 0.5);
    }

    #[test]
    fn unknown_words_leave_uniform_posterior() {
        let model = toy_model();
        let result = model.classify("lunch");
        assert_eq!(result.len(), 2);
        assert!((result[0].confidence - 0.5).abs() < 1e-9);
        assert_eq!(result[0].label, Label::Hazard(HazardType::StormSurge));
    }

    #[test]
    fn default_model_knows_every_hazard_category() {
        let model = BayesModel::hazard_default();
        assert_eq!(model.labels().len(), HAZARD_KEYWORDS.len() + 1);
        assert!(model.labels().contains(&Label::Relevant));
        assert!(model.vocabulary_size() > 50);
    }
}
