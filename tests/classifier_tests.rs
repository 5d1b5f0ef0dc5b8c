use tidewatch::classifier::{Classifier, PostMeta, RELEVANT_CONFIDENCE};
use tidewatch::config::ClassifierConfig;
use tidewatch::core::types::{HazardType, Sentiment};

fn classifier() -> Classifier {
    Classifier::new(&ClassifierConfig::default()).unwrap()
}

#[test]
fn unrelated_text_is_rejected() {
    let result = classifier().process_post("I had lunch today", &PostMeta::default());
    assert!(!result.is_relevant);
    assert_eq!(result.hazard_type, None);
    assert_eq!(result.sentiment, Sentiment::Neutral);
    assert_eq!(result.confidence, 0.1);
    assert_eq!(result.extracted_location, None);
}

#[test]
fn tsunami_warning_is_relevant_and_urgent() {
    let result = classifier().process_post(
        "Tsunami warning! Evacuate the coast immediately",
        &PostMeta::default(),
    );
    assert!(result.is_relevant);
    assert_eq!(result.sentiment, Sentiment::Urgent);
    assert_eq!(result.confidence, RELEVANT_CONFIDENCE);
}

#[test]
fn location_is_taken_from_content() {
    let result = classifier().process_post(
        "Heavy flooding near Marina Beach",
        &PostMeta {
            location: Some("Chennai"),
            ..Default::default()
        },
    );
    assert!(result.is_relevant);
    assert_eq!(result.extracted_location.as_deref(), Some("Marina Beach"));
}

#[test]
fn ocean_term_alone_is_not_enough() {
    let c = classifier();
    assert!(!c.relevance("a quiet day at the beach").is_relevant);
    assert!(c.relevance("weather alert for the coast").is_relevant);
}

#[test]
fn relevant_posts_always_report_relevance_confidence() {
    let c = classifier();
    let texts = [
        "Cyclone, hurricane or typhoon: storm season is here",
        "Rough sea, choppy swell and breaking waves with whitecaps",
        "Water level rising, streets submerged after the flood",
        "Sea looks calm and normal after the storm",
    ];
    for text in texts {
        let result = c.process_post(text, &PostMeta::default());
        assert!(result.is_relevant, "{text}");
        assert_eq!(result.confidence, RELEVANT_CONFIDENCE, "{text}");
    }
}

#[test]
fn default_model_names_wave_hazard() {
    let c = classifier();
    let text = "Rough sea, choppy swell and breaking waves with whitecaps";
    let top = c.classify_hazard(text).unwrap();
    assert!(top.confidence > 0.9);
    let result = c.process_post(text, &PostMeta::default());
    assert_eq!(result.hazard_type, Some(HazardType::HighWaves));
}

#[test]
fn hazard_is_dropped_under_strict_threshold() {
    let strict = Classifier::new(&ClassifierConfig {
        hazard_confidence_threshold: 1.0,
    })
    .unwrap();
    let result = strict.process_post(
        "Rough sea, choppy swell and breaking waves with whitecaps",
        &PostMeta::default(),
    );
    assert!(result.is_relevant);
    assert_eq!(result.hazard_type, None);
}
