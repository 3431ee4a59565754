use crate::spans::{scan_spans, QueryTerms};
use crate::types::{Fragment, Token};

/// Wrap every query span of `fragments` in `Open`/`Close` markers.
///
/// Markers, and words already between a marker pair, never match, so running
/// this on its own output changes nothing.
pub fn insert_highlights<'a>(fragments: &[Fragment<'a>], query: &QueryTerms) -> Vec<Fragment<'a>> {
    let mut depth = 0usize;
    let matchable: Vec<Option<&str>> = fragments
        .iter()
        .map(|fragment| match fragment {
            Fragment::Open => {
                depth += 1;
                None
            }
            Fragment::Close => {
                depth = depth.saturating_sub(1);
                None
            }
            Fragment::Word(token) if depth == 0 => Some(token.folded()),
            Fragment::Word(_) => None,
        })
        .collect();

    let spans = scan_spans(matchable, query);
    let mut out = Vec::with_capacity(fragments.len() + spans.len() * 2);
    let mut cursor = 0;
    for span in spans {
        out.extend_from_slice(&fragments[cursor..span.start]);
        out.push(Fragment::Open);
        out.extend_from_slice(&fragments[span.start..span.end]);
        out.push(Fragment::Close);
        cursor = span.end;
    }
    out.extend_from_slice(&fragments[cursor..]);
    out
}

/// Highlight a plain token stream
pub fn highlight_tokens<'a>(tokens: &'a [Token], query: &QueryTerms) -> Vec<Fragment<'a>> {
    let fragments: Vec<Fragment<'a>> = tokens.iter().map(Fragment::Word).collect();
    insert_highlights(&fragments, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::split_words;

    fn render(fragments: &[Fragment<'_>]) -> Vec<String> {
        fragments
            .iter()
            .map(|fragment| match fragment {
                Fragment::Word(token) => token.text().to_string(),
                Fragment::Open => "<".to_string(),
                Fragment::Close => ">".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_wraps_longest_span() {
        let tokens = split_words("I like pepperoni pizza.");
        let query = QueryTerms::parse("pepperoni pizza");
        let out = highlight_tokens(&tokens, &query);
        assert_eq!(
            render(&out),
            ["I", "like", "<", "pepperoni", "pizza", ">", "."]
        );
    }

    #[test]
    fn test_multiple_spans() {
        let tokens = split_words("pizza pepperoni olive pizza olive pizza");
        let query = QueryTerms::parse("pepperoni olive pizza");
        let out = highlight_tokens(&tokens, &query);
        assert_eq!(
            render(&out),
            [
                "<", "pizza", ">", "<", "pepperoni", "olive", "pizza", ">", "<", "olive",
                "pizza", ">"
            ]
        );
    }

    #[test]
    fn test_empty_query_passes_through() {
        let tokens = split_words("Nothing to see here.");
        let out = highlight_tokens(&tokens, &QueryTerms::default());
        assert!(out.iter().all(|f| !f.is_marker()));
        assert_eq!(out.len(), tokens.len());
    }

    #[test]
    fn test_idempotent() {
        let tokens = split_words("Deep dish pizza is my favorite pizza.");
        let query = QueryTerms::parse("deep dish pizza");
        let once = highlight_tokens(&tokens, &query);
        let twice = insert_highlights(&once, &query);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_span_crosses_sentence_boundary() {
        let mut tokens = split_words("Pizza is great.");
        tokens.extend(split_words("Pizza again."));
        let query = QueryTerms::parse("great . pizza");
        let out = highlight_tokens(&tokens, &query);
        assert_eq!(
            render(&out),
            ["<", "Pizza", ">", "is", "<", "great", ".", "Pizza", ">", "again", "<", ".", ">"]
        );
    }
}
