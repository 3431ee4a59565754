use crate::config::SnippetConfig;
use crate::error::Result;
use crate::format::{join_tokens, join_words};
use crate::highlight::insert_highlights;
use crate::selector::select_snippet_sentences;
use crate::spans::QueryTerms;
use crate::tokenizer::tokenize_document;
use crate::types::{Budget, Fragment, Limit, SelectedSentence, Snippet};

/// Build a highlighted snippet of `doc` for `query` with the default markers.
///
/// ```rust
/// use review_snippets::{highlight_doc, Limit};
///
/// let snippet = highlight_doc(
///     "The only good pizza is a pepperoni pizza.",
///     "pepperoni pizza",
///     Limit::Unbounded,
///     Limit::Unbounded,
/// );
/// assert_eq!(
///     snippet,
///     "The only good [[HIGHLIGHT]]pizza[[ENDHIGHLIGHT]] is a \
///      [[HIGHLIGHT]]pepperoni pizza[[ENDHIGHLIGHT]]."
/// );
/// ```
pub fn highlight_doc(
    doc: &str,
    query: &str,
    max_chars: impl Into<Limit>,
    max_sents: impl Into<Limit>,
) -> String {
    let config = SnippetConfig {
        budget: Budget::new(max_chars, max_sents),
        ..SnippetConfig::default()
    };
    Snippeter { config }.highlight(doc, query)
}

/// Snippet builder bound to one validated configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snippeter {
    config: SnippetConfig,
}

impl Snippeter {
    /// Create a snippeter, rejecting invalid configuration
    pub fn new(config: SnippetConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &SnippetConfig {
        &self.config
    }

    /// Highlighted snippet text
    #[must_use]
    pub fn highlight(&self, doc: &str, query: &str) -> String {
        self.snippet(doc, query).text
    }

    /// Highlighted snippet together with the sentences it was built from
    #[must_use]
    pub fn snippet(&self, doc: &str, query: &str) -> Snippet {
        let sentences = tokenize_document(doc);
        let query = QueryTerms::parse(query);
        let selected = select_snippet_sentences(&sentences, &query, &self.config);

        let fragments: Vec<Fragment<'_>> = selected
            .iter()
            .flat_map(|sentence| sentence.tokens.iter().map(Fragment::Word))
            .collect();
        let highlighted = insert_highlights(&fragments, &query);
        let text = join_words(&highlighted, &self.config.open_tag, &self.config.close_tag);

        Snippet {
            text,
            sentences: selected
                .iter()
                .map(|sentence| SelectedSentence {
                    index: sentence.index,
                    score: sentence.score,
                    text: join_tokens(sentence.tokens),
                })
                .collect(),
            total_sentences: sentences.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BudgetPolicy;

    #[test]
    fn test_rejects_invalid_config() {
        assert!(Snippeter::new(SnippetConfig::default().with_tags("|", "|")).is_err());
        assert!(Snippeter::new(SnippetConfig::preview()).is_ok());
    }

    #[test]
    fn test_custom_tags() {
        let snippeter = Snippeter::new(SnippetConfig::default().with_tags("<b>", "</b>")).unwrap();
        assert_eq!(
            snippeter.highlight("I like pIzZa.", "PiZzA"),
            "I like <b>pIzZa</b>."
        );
    }

    #[test]
    fn test_report_lists_selected_sentences() {
        let snippeter = Snippeter::new(
            SnippetConfig::default()
                .with_budget(Limit::Unbounded, Limit::AtMost(2))
                .with_policy(BudgetPolicy::Strict),
        )
        .unwrap();
        let snippet = snippeter.snippet("I love sushi. It's alright. Get me some sushi!", "sushi");

        assert_eq!(snippet.total_sentences, 3);
        let indices: Vec<usize> = snippet.sentences.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 2]);
        assert_eq!(snippet.sentences[1].text, "Get me some sushi!");
        assert_eq!(snippet.sentences[0].score, 2);
    }

    #[test]
    fn test_empty_document() {
        let snippet = Snippeter::default().snippet("", "pizza");
        assert!(snippet.is_empty());
        assert_eq!(snippet.total_sentences, 0);
        assert!(snippet.sentences.is_empty());
    }

    #[test]
    fn test_report_serializes() {
        let snippet = Snippeter::default().snippet("Pizza!", "pizza");
        let json = snippet.to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["text"], "[[HIGHLIGHT]]Pizza[[ENDHIGHLIGHT]]!");
        assert_eq!(value["sentences"][0]["score"], 1);
    }
}
