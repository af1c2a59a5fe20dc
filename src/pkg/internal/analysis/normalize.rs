use std::collections::BTreeSet;

use crate::pkg::internal::vocab::Vocabulary;

/// Tokenized view of a document. `all` keeps stop words (it backs the word
/// count), `filtered` is the keyword vocabulary used for set comparisons.
#[derive(Debug, Default)]
pub struct TokenStream {
    pub all: Vec<String>,
    pub filtered: Vec<String>,
}

impl TokenStream {
    pub fn word_count(&self) -> usize {
        self.all.len()
    }

    pub fn keyword_set(&self) -> BTreeSet<String> {
        self.filtered.iter().cloned().collect()
    }
}

/// Lowercases and splits on every non-alphanumeric boundary. Whitespace-only
/// input yields empty sequences, never an error.
pub fn normalize(text: &str, vocab: &Vocabulary) -> TokenStream {
    let lowered = text.to_lowercase();
    let all: Vec<String> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    let filtered = all
        .iter()
        .filter(|t| t.len() > 2 && !vocab.stop_words.contains(t.as_str()))
        .cloned()
        .collect();
    TokenStream { all, filtered }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::internal::vocab::VOCAB;

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(normalize("", &VOCAB).all.is_empty());
        let ws = normalize("   \n\t  ", &VOCAB);
        assert!(ws.all.is_empty());
        assert!(ws.filtered.is_empty());
        assert_eq!(ws.word_count(), 0);
    }

    #[test]
    fn test_splits_on_punctuation_and_lowercases() {
        let stream = normalize("Senior Engineer, Python/Django (remote)", &VOCAB);
        assert_eq!(
            stream.all,
            vec!["senior", "engineer", "python", "django", "remote"]
        );
    }

    #[test]
    fn test_stop_words_counted_but_not_kept_as_keywords() {
        let stream = normalize("the quick brown fox and the lazy dog", &VOCAB);
        assert_eq!(stream.word_count(), 8);
        assert!(!stream.filtered.contains(&"the".to_string()));
        assert!(!stream.filtered.contains(&"and".to_string()));
        assert!(stream.filtered.contains(&"quick".to_string()));
    }

    #[test]
    fn test_short_tokens_dropped_from_keywords() {
        let stream = normalize("go to c lab aws", &VOCAB);
        // length <= 2 falls out of the keyword set, word count keeps it
        assert_eq!(stream.word_count(), 5);
        assert_eq!(stream.keyword_set().len(), 2);
        assert!(stream.keyword_set().contains("aws"));
        assert!(stream.keyword_set().contains("lab"));
    }
}
