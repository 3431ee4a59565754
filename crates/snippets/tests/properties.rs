use proptest::prelude::*;
use review_snippets::{
    highlight_doc, highlight_tokens, insert_highlights, join_tokens, split_words, Limit,
    QueryTerms, SnippetConfig, Snippeter,
};

const VOCAB: &[&str] = &[
    "pizza", "pepperoni", "deep", "dish", "sushi", "love", "great", "the", "is", "food",
];

fn vocab_word() -> impl Strategy<Value = &'static str> {
    prop::sample::select(VOCAB)
}

fn review() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (
            prop::collection::vec(vocab_word(), 1..6),
            prop::sample::select(&[".", "?", "!", "..."][..]),
        ),
        0..6,
    )
    .prop_map(|sentences| {
        sentences
            .into_iter()
            .map(|(words, mark)| format!("{}{mark}", words.join(" ")))
            .collect::<Vec<_>>()
            .join(" ")
    })
}

fn query() -> impl Strategy<Value = String> {
    prop::collection::vec(vocab_word(), 0..4).prop_map(|words| words.join(" "))
}

fn recase(text: &str, mask: &[bool]) -> String {
    text.chars()
        .enumerate()
        .map(|(i, ch)| {
            if mask.get(i % mask.len().max(1)).copied().unwrap_or(false) {
                ch.to_ascii_uppercase()
            } else {
                ch
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn join_reconstructs_simple_sentences(
        words in prop::collection::vec(("[a-z]{1,8}", any::<bool>()), 1..8),
        mark in prop::sample::select(&[".", "?", "!", "..."][..]),
    ) {
        let last = words.len() - 1;
        let mut sentence = String::new();
        for (i, (word, comma)) in words.iter().enumerate() {
            sentence.push_str(word);
            if *comma && i < last {
                sentence.push(',');
            }
            if i < last {
                sentence.push(' ');
            }
        }
        sentence.push_str(mark);

        prop_assert_eq!(join_tokens(&split_words(&sentence)), sentence);
    }

    #[test]
    fn query_case_does_not_change_output(
        doc in review(),
        query in query(),
        mask in prop::collection::vec(any::<bool>(), 1..16),
    ) {
        let expected = highlight_doc(&doc, &query, Limit::Unbounded, Limit::Unbounded);
        let recased = recase(&query, &mask);
        prop_assert_eq!(
            highlight_doc(&doc, &recased, Limit::Unbounded, Limit::Unbounded),
            expected
        );
    }

    #[test]
    fn highlighting_is_idempotent(doc in review(), query in query()) {
        let tokens = split_words(&doc);
        let query = QueryTerms::parse(&query);
        let once = highlight_tokens(&tokens, &query);
        let twice = insert_highlights(&once, &query);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn strict_budget_is_never_exceeded(
        doc in review(),
        query in query(),
        max_chars in 0usize..160,
        max_sents in 0usize..4,
    ) {
        let snippeter = Snippeter::new(
            SnippetConfig::default().with_budget(Limit::AtMost(max_chars), Limit::AtMost(max_sents)),
        )
        .unwrap();
        let snippet = snippeter.snippet(&doc, &query);
        prop_assert!(snippet.text.chars().count() <= max_chars);
        prop_assert!(snippet.sentences.len() <= max_sents);
    }

    #[test]
    fn unmatched_query_returns_whole_review(doc in review()) {
        let snippet = highlight_doc(&doc, "burgers", Limit::Unbounded, Limit::Unbounded);
        prop_assert_eq!(snippet, doc);
    }
}
