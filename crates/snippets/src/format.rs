use crate::types::{Fragment, Token};

/// Join fragments into display text.
///
/// Pieces are separated by one space, except before punctuation, after an
/// opening marker and before a closing marker.
pub fn join_words(fragments: &[Fragment<'_>], open_tag: &str, close_tag: &str) -> String {
    let mut out = String::new();
    let mut pieces = fragments.iter().peekable();
    while let Some(fragment) = pieces.next() {
        out.push_str(match fragment {
            Fragment::Word(token) => token.text(),
            Fragment::Open => open_tag,
            Fragment::Close => close_tag,
        });

        let Some(next) = pieces.peek() else { break };
        let glued = matches!(fragment, Fragment::Open)
            || matches!(next, Fragment::Close)
            || next.token().is_some_and(Token::is_punctuation);
        if !glued {
            out.push(' ');
        }
    }
    out
}

/// Join tokens with no markers
pub fn join_tokens(tokens: &[Token]) -> String {
    let fragments: Vec<Fragment<'_>> = tokens.iter().map(Fragment::Word).collect();
    join_words(&fragments, "", "")
}
