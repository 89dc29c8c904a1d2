// Article lexicon - the fixed sets the transformer classifies against

use lazy_static::lazy_static;
use std::collections::HashSet;

/// Punctuation that can directly prefix an article with no separating space,
/// e.g. the opening quote in `"An apple a day`.
pub const LEADING_SYMBOLS: [char; 13] = [
    '\'', '"', '(', '[', '{', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{201E}',
    '\u{201A}', '\u{00AB}', '\u{00BB}',
];

const BASE_FORMS: [&str; 6] = ["a", "an", "the", "A", "An", "The"];

lazy_static! {
    static ref ARTICLE_FORMS: HashSet<String> = build_article_forms();
}

fn build_article_forms() -> HashSet<String> {
    let mut forms = HashSet::new();
    for base in BASE_FORMS {
        forms.insert(base.to_string());
        for symbol in LEADING_SYMBOLS {
            let mut form = String::with_capacity(symbol.len_utf8() + base.len());
            form.push(symbol);
            form.push_str(base);
            forms.insert(form);
        }
    }
    forms
}

/// Set membership is the sole article test; there is no grammatical analysis.
pub fn is_article_form(token: &str) -> bool {
    ARTICLE_FORMS.contains(token)
}

pub fn is_leading_symbol(c: char) -> bool {
    LEADING_SYMBOLS.contains(&c)
}
