//! # Review Snippets
//!
//! Query-aware snippets for search-result previews of free-text reviews.
//!
//! ## Pipeline
//!
//! ```text
//! Document
//!     │
//!     ├──> Tokenizer → sentences → words/punctuation
//!     │
//!     ├──> Sentence Selection
//!     │    ├─> Score: opinion words + Σ(span length)²
//!     │    ├─> Stable rank, highest first
//!     │    └─> Greedy accept within the character/sentence budget
//!     │
//!     └──> Rendering (document order)
//!          ├─> Wrap query spans in highlight markers
//!          └─> Punctuation-aware join
//! ```
//!
//! A span is a run of query words; neighbouring matches only merge when they
//! are also neighbours, in order, within the query. Matching is
//! case-insensitive and output keeps the document's casing.
//!
//! ## Example
//!
//! ```rust
//! use review_snippets::{Limit, SnippetConfig, Snippeter};
//!
//! let config = SnippetConfig::default()
//!     .with_tags("<b>", "</b>")
//!     .with_budget(Limit::Unbounded, Limit::AtMost(1));
//! let snippeter = Snippeter::new(config).unwrap();
//!
//! let snippet = snippeter.highlight(
//!     "I love deep dish pizza. The staff was slow.",
//!     "deep dish pizza",
//! );
//! assert_eq!(snippet, "I love <b>deep dish pizza</b>.");
//! ```

mod config;
mod error;
mod format;
mod highlight;
mod scorer;
mod selector;
mod snippet;
mod spans;
mod tokenizer;
mod types;

pub use config::{BudgetPolicy, SnippetConfig, CLOSETAG, OPENTAG};
pub use error::{Result, SnippetError};
pub use format::{join_tokens, join_words};
pub use highlight::{highlight_tokens, insert_highlights};
pub use scorer::{
    compute_query_match_score, count_opinion_indicators, is_opinion_word, score_sentence,
};
pub use selector::{rank_sentences, select_snippet_sentences, RankedSentence};
pub use snippet::{highlight_doc, Snippeter};
pub use spans::{find_query_spans, QueryTerms};
pub use tokenizer::{split_sentences, split_words, tokenize_document};
pub use types::{
    Budget, Fragment, Limit, SelectedSentence, Sentence, Snippet, Span, Token, TokenKind,
};
