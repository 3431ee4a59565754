use crate::error::{Result, SnippetError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single word or punctuation mark taken from a sentence.
///
/// The original text is kept for output; the case-folded form is computed
/// once so that matching never has to re-fold.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    text: String,
    folded: String,
    kind: TokenKind,
}

impl Token {
    /// Create a token, classifying it by shape
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = TokenKind::classify(&text);
        let folded = text.to_lowercase();
        Self { text, folded, kind }
    }

    /// Original text, casing preserved
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lower-cased text used for query matching
    #[must_use]
    pub fn folded(&self) -> &str {
        &self.folded
    }

    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Whether the formatter should glue this token to the previous one
    #[must_use]
    pub const fn is_punctuation(&self) -> bool {
        !matches!(self.kind, TokenKind::Word)
    }

    /// Length in characters (not bytes)
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Token {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Shape class of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Letters, digits and the word-safe symbols, optionally quoted
    Word,
    /// A literal `,`
    Comma,
    /// `...`
    Ellipsis,
    /// One of `.`, `?`, `!`
    Terminal,
}

impl TokenKind {
    /// Classify a string by its shape
    #[must_use]
    pub fn classify(text: &str) -> Self {
        match text {
            "," => Self::Comma,
            "..." => Self::Ellipsis,
            "." | "?" | "!" => Self::Terminal,
            _ => Self::Word,
        }
    }
}

/// An ordered run of tokens produced from one sentence of a document
pub type Sentence = Vec<Token>;

/// Half-open token interval `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of tokens covered
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }
}

impl From<(usize, usize)> for Span {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

/// Upper bound on characters or sentences.
///
/// `Unbounded` is a regular value, never an error, and is never exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "LimitRepr", into = "LimitRepr")]
pub enum Limit {
    #[default]
    Unbounded,
    AtMost(usize),
}

impl Limit {
    /// `count > limit`
    #[must_use]
    pub const fn is_exceeded_by(self, count: usize) -> bool {
        match self {
            Self::Unbounded => false,
            Self::AtMost(max) => count > max,
        }
    }

    /// `count >= limit`
    #[must_use]
    pub const fn is_reached_by(self, count: usize) -> bool {
        match self {
            Self::Unbounded => false,
            Self::AtMost(max) => count >= max,
        }
    }

    #[must_use]
    pub const fn get(self) -> Option<usize> {
        match self {
            Self::Unbounded => None,
            Self::AtMost(max) => Some(max),
        }
    }
}

impl From<usize> for Limit {
    fn from(max: usize) -> Self {
        Self::AtMost(max)
    }
}

impl From<Option<usize>> for Limit {
    fn from(max: Option<usize>) -> Self {
        max.map_or(Self::Unbounded, Self::AtMost)
    }
}

impl FromStr for Limit {
    type Err = SnippetError;

    fn from_str(raw: &str) -> Result<Self> {
        let value = raw.trim();
        if ["inf", "infinity", "unbounded", "none"]
            .iter()
            .any(|marker| value.eq_ignore_ascii_case(marker))
        {
            return Ok(Self::Unbounded);
        }
        value
            .parse::<usize>()
            .map(Self::AtMost)
            .map_err(|_| SnippetError::invalid_budget(raw))
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => f.write_str("inf"),
            Self::AtMost(max) => write!(f, "{max}"),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum LimitRepr {
    Count(u64),
    Text(String),
}

impl TryFrom<LimitRepr> for Limit {
    type Error = SnippetError;

    fn try_from(repr: LimitRepr) -> Result<Self> {
        match repr {
            LimitRepr::Count(max) => usize::try_from(max)
                .map(Self::AtMost)
                .map_err(|_| SnippetError::invalid_budget(max.to_string())),
            LimitRepr::Text(text) => text.parse(),
        }
    }
}

impl From<Limit> for LimitRepr {
    fn from(limit: Limit) -> Self {
        match limit {
            Limit::Unbounded => Self::Text("inf".to_string()),
            Limit::AtMost(max) => Self::Count(max as u64),
        }
    }
}

/// Character and sentence caps for a snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Budget {
    pub max_chars: Limit,
    pub max_sents: Limit,
}

impl Budget {
    #[must_use]
    pub fn new(max_chars: impl Into<Limit>, max_sents: impl Into<Limit>) -> Self {
        Self {
            max_chars: max_chars.into(),
            max_sents: max_sents.into(),
        }
    }

    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_chars: Limit::Unbounded,
            max_sents: Limit::Unbounded,
        }
    }
}

/// Element of a highlighted token stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    Word(&'a Token),
    Open,
    Close,
}

impl<'a> Fragment<'a> {
    #[must_use]
    pub const fn token(&self) -> Option<&'a Token> {
        match self {
            Self::Word(token) => Some(token),
            Self::Open | Self::Close => None,
        }
    }

    #[must_use]
    pub const fn is_marker(&self) -> bool {
        matches!(self, Self::Open | Self::Close)
    }
}

impl<'a> From<&'a Token> for Fragment<'a> {
    fn from(token: &'a Token) -> Self {
        Self::Word(token)
    }
}

/// One sentence that made it into a snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedSentence {
    /// Position of the sentence in the document
    pub index: usize,
    pub score: usize,
    /// Sentence text without highlight markers
    pub text: String,
}

/// A rendered snippet together with the sentences it was built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub text: String,
    /// Selected sentences in document order
    pub sentences: Vec<SelectedSentence>,
    /// Total sentences found in the document
    pub total_sentences: usize,
}

impl Snippet {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Pretty-printed JSON report
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_classification() {
        assert_eq!(Token::from("pizza").kind(), TokenKind::Word);
        assert_eq!(Token::from("$9.47").kind(), TokenKind::Word);
        assert_eq!(Token::from(",").kind(), TokenKind::Comma);
        assert_eq!(Token::from("...").kind(), TokenKind::Ellipsis);
        assert_eq!(Token::from("?").kind(), TokenKind::Terminal);
        assert!(Token::from("!").is_punctuation());
        assert!(!Token::from("don't").is_punctuation());
    }

    #[test]
    fn test_token_keeps_case_and_folds() {
        let token = Token::from("PiZzA");
        assert_eq!(token.text(), "PiZzA");
        assert_eq!(token.folded(), "pizza");
    }

    #[test]
    fn test_span_len() {
        let span = Span::new(4, 6);
        assert_eq!(span.len(), 2);
        assert!(span.contains(4));
        assert!(!span.contains(6));
        assert_eq!(Span::from((7, 10)), Span::new(7, 10));
    }

    #[test]
    fn test_limit_comparisons() {
        assert!(!Limit::Unbounded.is_exceeded_by(usize::MAX));
        assert!(!Limit::Unbounded.is_reached_by(usize::MAX));
        assert!(Limit::AtMost(1).is_exceeded_by(2));
        assert!(!Limit::AtMost(1).is_exceeded_by(1));
        assert!(Limit::AtMost(1).is_reached_by(1));
    }

    #[test]
    fn test_limit_parsing() {
        assert_eq!("10".parse::<Limit>().unwrap(), Limit::AtMost(10));
        assert_eq!(" 0 ".parse::<Limit>().unwrap(), Limit::AtMost(0));
        assert_eq!("inf".parse::<Limit>().unwrap(), Limit::Unbounded);
        assert_eq!("Infinity".parse::<Limit>().unwrap(), Limit::Unbounded);

        for bad in ["ten", "-1", "1.5", ""] {
            match bad.parse::<Limit>() {
                Err(SnippetError::InvalidBudget { value }) => assert_eq!(value, bad),
                other => panic!("expected InvalidBudget for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_limit_display_round_trips() {
        for limit in [Limit::Unbounded, Limit::AtMost(35)] {
            assert_eq!(limit.to_string().parse::<Limit>().unwrap(), limit);
        }
    }

    #[test]
    fn test_budget_from_json() {
        let budget: Budget = serde_json::from_str(r#"{"max_chars": 35}"#).unwrap();
        assert_eq!(budget, Budget::new(Limit::AtMost(35), Limit::Unbounded));

        let budget: Budget = serde_json::from_str(r#"{"max_sents": "inf"}"#).unwrap();
        assert_eq!(budget, Budget::unbounded());

        assert!(serde_json::from_str::<Budget>(r#"{"max_chars": "lots"}"#).is_err());
    }
}
