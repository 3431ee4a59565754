//! Built-in demonstration cases printed by `snippets --examples`.

use anyhow::{Context as AnyhowContext, Result};
use review_snippets::{Limit, SnippetConfig, Snippeter};
use std::fmt::Write;

pub struct Demo {
    pub description: &'static str,
    pub document: &'static str,
    pub query: &'static str,
    pub max_chars: Limit,
    pub max_sents: Limit,
}

const INF: Limit = Limit::Unbounded;

pub const DEMOS: &[Demo] = &[
    // Single sentence
    Demo {
        description: "Queries are case-insensitive.",
        document: "I like pIzZa.",
        query: "PiZzA",
        max_chars: INF,
        max_sents: INF,
    },
    Demo {
        description: "The longest span possible is highlighted.",
        document: "I like pepperoni pizza.",
        query: "pepperoni pizza",
        max_chars: INF,
        max_sents: INF,
    },
    Demo {
        description: "There can be multiple matches.",
        document: "My favorite pizza is pepperoni pizza",
        query: "pepperoni pizza",
        max_chars: INF,
        max_sents: INF,
    },
    // Multiple sentences
    Demo {
        description: "Without a budget every sentence is kept.",
        document: "I love their pesto. It's amazing! This sentence is pointless.",
        query: "pesto",
        max_chars: INF,
        max_sents: INF,
    },
    Demo {
        description: "If nothing matches, all sentences are returned.",
        document: "They have sushi. They also have Thai food.",
        query: "burgers",
        max_chars: INF,
        max_sents: INF,
    },
    Demo {
        description: "Sentences are broken at punctuation marks.",
        document: "Pizza. Sushi? Pizza... Sushi!",
        query: "pizza",
        max_chars: INF,
        max_sents: INF,
    },
    Demo {
        description: "Prices do not end a sentence.",
        document: "It cost $9.47.",
        query: "cost",
        max_chars: INF,
        max_sents: INF,
    },
    Demo {
        description: "The number of sentences can be limited. The ones with the most \
                      query term matches and opinion words are selected. (1 sentence)",
        document: "I love sushi. Sushi is my favorite food. Yes, I love sushi!",
        query: "sushi",
        max_chars: INF,
        max_sents: Limit::AtMost(1),
    },
    Demo {
        description: "Sentence order is preserved and unselected ones are omitted. \
                      Here the snippet is limited to two sentences and the middle is skipped.",
        document: "I love sushi. It's alright. Get me some sushi!",
        query: "sushi",
        max_chars: INF,
        max_sents: Limit::AtMost(2),
    },
    Demo {
        description: "Or the number of characters (including tags) can be limited. Here \
                      the snippet must be <= 5 characters. Only the last sentence fits.",
        document: "Pizza is my favorite food. I love it. LOL!",
        query: "pizza",
        max_chars: Limit::AtMost(5),
        max_sents: INF,
    },
];

/// Render every demo with the markers and policy of `base`
pub fn render_demos(base: &SnippetConfig) -> Result<String> {
    let mut out = String::new();
    for demo in DEMOS {
        let config = base.clone().with_budget(demo.max_chars, demo.max_sents);
        let snippeter = Snippeter::new(config).context("Invalid snippet configuration")?;
        let snippet = snippeter.highlight(demo.document, demo.query);

        writeln!(out, "#### {} ####", demo.description)?;
        writeln!(out, "DOCUMENT: \"\"\"{}\"\"\"", demo.document)?;
        writeln!(out, "QUERY:    \"\"\"{}\"\"\"", demo.query)?;
        writeln!(out, "SNIPPET:  \"\"\"{snippet}\"\"\"")?;
        writeln!(out)?;
    }
    Ok(out)
}
