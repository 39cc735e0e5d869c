//! Noise filtering of listing titles

/// Rejects listings whose title contains an ignore substring
#[derive(Debug, Clone, Default)]
pub struct NoiseFilter {
    words: Vec<String>,
}

impl NoiseFilter {
    /// Create a filter from ignore substrings; matching is case-insensitive
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Whether `title` denotes a non-product listing.
    ///
    /// Plain substring containment, so "board" also catches "motherboards".
    pub fn is_noise(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.words.iter().any(|word| title.contains(word.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> NoiseFilter {
        NoiseFilter::new(["generation", "heat sink", "Compute Module", "board"])
    }

    #[test]
    fn test_case_insensitive() {
        let filter = filter();
        assert!(filter.is_noise("10th Generation Processor"));
        assert!(filter.is_noise("10TH GENERATION PROCESSOR"));
        assert!(filter.is_noise("Intel® Compute Module Kit"));
    }

    #[test]
    fn test_substring_not_whole_word() {
        assert!(filter().is_noise("Server Motherboards"));
        assert!(filter().is_noise("Thermal Solution (Heat Sinks)"));
    }

    #[test]
    fn test_products_pass() {
        let filter = filter();
        assert!(!filter.is_noise("Intel® Core™ i7-9700 Processor"));
        assert!(!filter.is_noise(""));
    }

    #[test]
    fn test_filtering_is_pure() {
        let filter = filter();
        for title in ["Desktop Board DZ77", "Core i5-8400", "Heat Sink"] {
            assert_eq!(filter.is_noise(title), filter.is_noise(title));
        }
    }

    #[test]
    fn test_empty_words_ignored() {
        let filter = NoiseFilter::new(["", "kit"]);
        assert!(!filter.is_noise("Core i3"));
        assert!(filter.is_noise("NUC Kit"));
    }
}
