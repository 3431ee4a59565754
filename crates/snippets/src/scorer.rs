use crate::spans::{find_query_spans, QueryTerms};
use crate::types::Token;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Words that are likely to appear in opinion-bearing sentences.
/// Matched case-sensitively against the token text.
const OPINION_INDICATORS: &[&str] = &[
    // Positive.
    "nice",
    "good",
    "better",
    "best",
    "beautiful",
    "great",
    "delicious",
    "favorite",
    "wonderful",
    "friendly",
    // Negative.
    "bad",
    "worst",
    "worse",
    "ugly",
    "horrible",
    "disgusting",
    "mean",
    // Verbs.
    "love",
    "loved",
    "loves",
    "like",
    "liked",
    "likes",
    "amaze",
    "amazed",
    "amazes",
    "hate",
    "hated",
    "hates",
    "avoid",
    "avoided",
    "avoids",
];

static OPINION_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| OPINION_INDICATORS.iter().copied().collect());

/// Whether `word` is an opinion indicator
#[must_use]
pub fn is_opinion_word(word: &str) -> bool {
    OPINION_WORDS.contains(word)
}

/// Number of distinct opinion indicators present in `sentence`
pub fn count_opinion_indicators(sentence: &[Token]) -> usize {
    sentence
        .iter()
        .map(Token::text)
        .filter(|word| is_opinion_word(word))
        .collect::<HashSet<_>>()
        .len()
}

/// Sum of squared span lengths over the query spans of `sentence`
pub fn compute_query_match_score(sentence: &[Token], query: &QueryTerms) -> usize {
    find_query_spans(sentence, query)
        .iter()
        .map(|span| span.len() * span.len())
        .sum()
}

/// Relevance of a sentence to the query
pub fn score_sentence(sentence: &[Token], query: &QueryTerms) -> usize {
    count_opinion_indicators(sentence) + compute_query_match_score(sentence, query)
}
