use crate::config::{BudgetPolicy, SnippetConfig};
use crate::format::join_words;
use crate::highlight::highlight_tokens;
use crate::scorer::score_sentence;
use crate::spans::QueryTerms;
use crate::types::{Budget, Sentence, Token};

/// A sentence with its document position and relevance score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedSentence<'a> {
    pub index: usize,
    pub score: usize,
    pub tokens: &'a [Token],
}

/// Score every sentence and order them from most to least relevant.
///
/// The sort is stable: equal scores keep document order.
pub fn rank_sentences<'a>(sentences: &'a [Sentence], query: &QueryTerms) -> Vec<RankedSentence<'a>> {
    let mut ranked: Vec<RankedSentence<'a>> = sentences
        .iter()
        .enumerate()
        .map(|(index, tokens)| RankedSentence {
            index,
            score: score_sentence(tokens, query),
            tokens,
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Pick the sentences for a snippet, returned in document order.
///
/// Candidates are taken in rank order until the configured budget is spent;
/// see [`BudgetPolicy`] for how each cap is checked.
pub fn select_snippet_sentences<'a>(
    sentences: &'a [Sentence],
    query: &QueryTerms,
    config: &SnippetConfig,
) -> Vec<RankedSentence<'a>> {
    let ranked = rank_sentences(sentences, query);
    for candidate in &ranked {
        log::trace!(
            "sentence {} scored {} ({} tokens)",
            candidate.index,
            candidate.score,
            candidate.tokens.len()
        );
    }

    let mut selected = match config.policy {
        BudgetPolicy::Strict => select_strict(ranked, query, config),
        BudgetPolicy::Legacy => select_legacy(ranked, config),
    };
    selected.sort_by_key(|sentence| sentence.index);

    log::debug!(
        "selected {} of {} sentences ({} policy)",
        selected.len(),
        sentences.len(),
        config.policy.as_str()
    );
    selected
}

fn select_strict<'a>(
    ranked: Vec<RankedSentence<'a>>,
    query: &QueryTerms,
    config: &SnippetConfig,
) -> Vec<RankedSentence<'a>> {
    let Budget {
        max_chars,
        max_sents,
    } = config.budget;
    let mut selected = Vec::new();
    let mut char_count = 0usize;

    for candidate in ranked {
        if max_sents.is_reached_by(selected.len()) {
            break;
        }

        let separator = usize::from(!selected.is_empty());
        let cost = rendered_len(candidate.tokens, query, config) + separator;
        if max_chars.is_exceeded_by(char_count + cost) {
            log::trace!(
                "skipping sentence {}: {} chars would exceed {}",
                candidate.index,
                char_count + cost,
                max_chars
            );
            continue;
        }

        char_count += cost;
        selected.push(candidate);
    }
    selected
}

fn select_legacy<'a>(
    ranked: Vec<RankedSentence<'a>>,
    config: &SnippetConfig,
) -> Vec<RankedSentence<'a>> {
    let Budget {
        max_chars,
        max_sents,
    } = config.budget;
    let tag_len = config.open_tag.chars().count() + config.close_tag.chars().count();
    let mut selected = Vec::new();
    let mut char_count = 0usize;

    for candidate in ranked {
        if max_chars.is_exceeded_by(char_count) || max_sents.is_exceeded_by(selected.len()) {
            break;
        }
        char_count += candidate.tokens.iter().map(Token::char_len).sum::<usize>() + tag_len;
        selected.push(candidate);
    }
    selected
}

/// Length of a sentence once highlighted and joined on its own
fn rendered_len(tokens: &[Token], query: &QueryTerms, config: &SnippetConfig) -> usize {
    join_words(
        &highlight_tokens(tokens, query),
        &config.open_tag,
        &config.close_tag,
    )
    .chars()
    .count()
}
