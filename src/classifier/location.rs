use regex::Regex;

/// Pulls a place name out of free text.
///
/// Two patterns are tried in order: a capitalized phrase after `at|in|near|around`,
/// then a capitalized phrase followed by `beach|coast|shore|port|harbor`.
#[derive(Debug, Clone)]
pub struct LocationExtractor {
    patterns: Vec<Regex>,
    preposition: Regex,
}

impl LocationExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            patterns: vec![
                Regex::new(r"(?:at|in|near|around)\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*")?,
                Regex::new(r"[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\s+(?i:beach|coast|shore|port|harbor)")?,
            ],
            preposition: Regex::new(r"^(?i:at|in|near|around)\s+")?,
        })
    }

    pub fn extract(&self, text: &str) -> Option<String> {
        self.patterns.iter().find_map(|re| {
            re.find(text).map(|m| {
                self.preposition
                    .replace(m.as_str(), "")
                    .trim()
                    .to_string()
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Option<String> {
        LocationExtractor::new().unwrap().extract(text)
    }

    #[test]
    fn preposition_pattern_wins() {
        assert_eq!(
            extract("High waves observed at Marina Beach").as_deref(),
            Some("Marina Beach")
        );
        assert_eq!(
            extract("Flooding near Port Blair after the quake").as_deref(),
            Some("Port Blair")
        );
    }

    #[test]
    fn suffix_pattern_keeps_the_suffix() {
        assert_eq!(
            extract("Puri beach is closed today").as_deref(),
            Some("Puri beach")
        );
        assert_eq!(
            extract("Strong currents off Kovalam COAST").as_deref(),
            Some("Kovalam COAST")
        );
    }

    #[test]
    fn lowercase_text_has_no_location() {
        assert_eq!(extract("waves at the beach are high"), None);
    }
}
