/// English function words excluded from the vocabulary.
///
/// A skill token equal to one of these never gets a vocabulary column, but
/// it still participates in the exact matched/missing set computation.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "it", "in", "on", "of", "to", "and", "or", "for", "with", "this",
    "that", "be", "are", "was", "were", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "can", "shall", "not", "no",
    "but", "if", "at", "by", "from", "as", "into", "about", "up", "out", "so", "its", "you",
    "your", "i", "my", "we", "our", "they", "them", "their", "he", "she", "his", "her",
];

/// Check whether a normalized term is a stop word.
#[inline]
pub fn is_stop_word(term: &str) -> bool {
    STOP_WORDS.contains(&term)
}
