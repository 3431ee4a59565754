use crate::tokenizer::split_words;
use crate::types::{Span, Token};
use std::collections::HashMap;

/// Query tokens indexed by their case-folded text.
///
/// When a word occurs more than once in the query, the first position wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryTerms {
    tokens: Vec<Token>,
    positions: HashMap<String, usize>,
}

impl QueryTerms {
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut positions = HashMap::with_capacity(tokens.len());
        for (index, token) in tokens.iter().enumerate() {
            positions.entry(token.folded().to_string()).or_insert(index);
        }
        Self { tokens, positions }
    }

    /// Tokenize a query string the same way sentences are tokenized
    #[must_use]
    pub fn parse(query: &str) -> Self {
        Self::new(split_words(query))
    }

    /// Position of the first query token equal to `folded`
    #[must_use]
    pub fn position(&self, folded: &str) -> Option<usize> {
        self.positions.get(folded).copied()
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<&str> for QueryTerms {
    fn from(query: &str) -> Self {
        Self::parse(query)
    }
}

/// Find the non-overlapping runs of `tokens` that are query words.
///
/// Adjacent matches share a span only while each one is the query word right
/// after the previous match's query word, so `pepperoni pizza` merges for the
/// query `pepperoni pizza` but `pizza pepperoni` does not.
pub fn find_query_spans(tokens: &[Token], query: &QueryTerms) -> Vec<Span> {
    scan_spans(tokens.iter().map(|token| Some(token.folded())), query)
}

/// Span scan over folded texts; `None` entries can never match.
pub(crate) fn scan_spans<'t, I>(folded: I, query: &QueryTerms) -> Vec<Span>
where
    I: IntoIterator<Item = Option<&'t str>>,
{
    let mut spans = Vec::new();
    let mut span_start: Option<usize> = None;
    let mut last_query_index = 0usize;
    let mut len = 0usize;

    for (i, word) in folded.into_iter().enumerate() {
        len = i + 1;
        match word.and_then(|w| query.position(w)) {
            Some(query_index) => {
                match span_start {
                    None => span_start = Some(i),
                    Some(start) if last_query_index + 1 != query_index => {
                        spans.push(Span::new(start, i));
                        span_start = Some(i);
                    }
                    Some(_) => {}
                }
                last_query_index = query_index;
            }
            None => {
                if let Some(start) = span_start.take() {
                    spans.push(Span::new(start, i));
                }
            }
        }
    }

    if let Some(start) = span_start {
        spans.push(Span::new(start, len));
    }
    spans
}
