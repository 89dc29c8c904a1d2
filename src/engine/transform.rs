// Article transformer - masks or removes articles word by word, per line

use super::lexicon;

/// Replacement policy applied to every article occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformMode {
    /// Replace the article text with `width` underscores, keeping any
    /// leading symbol.
    Mask { width: usize },
    /// Drop the article text, keeping any leading symbol attached to the
    /// next surviving word.
    Remove,
}

/// A token recognized as an article occurrence.
struct ArticleToken {
    symbol: Option<char>,
    /// True when the character after the optional leading symbol is
    /// uppercase. Controls re-capitalization of the following word.
    capitalized: bool,
}

fn classify(token: &str) -> Option<ArticleToken> {
    if !lexicon::is_article_form(token) {
        return None;
    }
    let mut chars = token.chars();
    let first = chars.next()?;
    if lexicon::is_leading_symbol(first) {
        // A missing second character counts as not-uppercase
        let capitalized = chars.next().map_or(false, char::is_uppercase);
        Some(ArticleToken {
            symbol: Some(first),
            capitalized,
        })
    } else {
        Some(ArticleToken {
            symbol: None,
            capitalized: first.is_uppercase(),
        })
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut rewritten = String::with_capacity(word.len());
            rewritten.extend(first.to_uppercase());
            rewritten.push_str(chars.as_str());
            rewritten
        }
        None => String::new(),
    }
}

/// Transform one line. Runs of spaces and tabs collapse to a single
/// separator and the line is trimmed, so a line with no articles still
/// comes back whitespace-normalized. An empty or whitespace-only line
/// yields an empty line.
fn transform_paragraph(paragraph: &str, mode: TransformMode) -> String {
    let words: Vec<&str> = paragraph
        .split(|c: char| c == ' ' || c == '\t')
        .filter(|word| !word.is_empty())
        .collect();

    let mut out = String::with_capacity(paragraph.len() + 1);
    for (i, word) in words.iter().enumerate() {
        if let Some(article) = classify(word) {
            if let Some(symbol) = article.symbol {
                out.push(symbol);
            }
            if let TransformMode::Mask { width } = mode {
                for _ in 0..width {
                    out.push('_');
                }
                out.push(' ');
            }
            // Under Remove the kept symbol abuts the next word directly
        } else if i > 0 && classify(words[i - 1]).map_or(false, |a| a.capitalized) {
            // Lookback consults the original previous token, never its
            // rewritten form
            match mode {
                TransformMode::Mask { .. } => out.push_str(word),
                TransformMode::Remove => out.push_str(&capitalize_first(word)),
            }
            out.push(' ');
        } else {
            out.push_str(word);
            out.push(' ');
        }
    }
    out.truncate(out.trim_end().len());
    out
}

/// Transform a whole document. Lines are transformed independently and
/// rejoined with their original endings, so the output has the same number
/// of line breaks, in the same style (`\n` or `\r\n`), as the input.
///
/// Total over all inputs; never panics and never fails.
pub fn transform(document: &str, mode: TransformMode) -> String {
    let mut out = String::with_capacity(document.len());
    let mut rest = document;
    while let Some(pos) = rest.find('\n') {
        let line = &rest[..pos];
        let (line, ending) = match line.strip_suffix('\r') {
            Some(stripped) => (stripped, "\r\n"),
            None => (line, "\n"),
        };
        out.push_str(&transform_paragraph(line, mode));
        out.push_str(ending);
        rest = &rest[pos + 1..];
    }
    out.push_str(&transform_paragraph(rest, mode));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTENCE: &str =
        "I wrote the phrase \"An apple a day keeps the doctor away\" on a piece of paper.";

    #[test]
    fn test_mask_end_to_end() {
        assert_eq!(
            transform(SENTENCE, TransformMode::Mask { width: 3 }),
            "I wrote ___ phrase \"___ apple ___ day keeps ___ doctor away\" on ___ piece of paper."
        );
    }

    #[test]
    fn test_remove_end_to_end() {
        assert_eq!(
            transform(SENTENCE, TransformMode::Remove),
            "I wrote phrase \"Apple day keeps doctor away\" on piece of paper."
        );
    }

    #[test]
    fn test_remove_twice_is_noop() {
        let once = transform(SENTENCE, TransformMode::Remove);
        let twice = transform(&once, TransformMode::Remove);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_remove_lowercase_article_keeps_following_case() {
        assert_eq!(
            transform("the phrase is nice", TransformMode::Remove),
            "phrase is nice"
        );
    }

    #[test]
    fn test_remove_capitalized_article_capitalizes_following() {
        assert_eq!(
            transform("The phrase is nice", TransformMode::Remove),
            "Phrase is nice"
        );
    }

    #[test]
    fn test_remove_capitalized_article_before_capitalized_word() {
        assert_eq!(
            transform("The Phrase is nice", TransformMode::Remove),
            "Phrase is nice"
        );
    }

    #[test]
    fn test_mask_keeps_following_word_unchanged() {
        assert_eq!(
            transform("The phrase is nice", TransformMode::Mask { width: 3 }),
            "___ phrase is nice"
        );
    }

    #[test]
    fn test_symbol_attached_article_mask() {
        assert_eq!(
            transform("\"An apple a day", TransformMode::Mask { width: 3 }),
            "\"___ apple ___ day"
        );
    }

    #[test]
    fn test_symbol_attached_article_remove() {
        assert_eq!(
            transform("\"An apple a day", TransformMode::Remove),
            "\"Apple day"
        );
    }

    #[test]
    fn test_bracket_attached_article() {
        assert_eq!(
            transform("(a side note)", TransformMode::Mask { width: 2 }),
            "(__ side note)"
        );
        assert_eq!(transform("(a side note)", TransformMode::Remove), "(side note)");
    }

    #[test]
    fn test_mask_width_contract() {
        for width in 1..=8 {
            let masked = transform("the word", TransformMode::Mask { width });
            assert_eq!(masked, format!("{} word", "_".repeat(width)));
        }
    }

    #[test]
    fn test_no_article_text_unchanged() {
        let text = "nothing to see here, officer";
        assert_eq!(transform(text, TransformMode::Mask { width: 4 }), text);
        assert_eq!(transform(text, TransformMode::Remove), text);
    }

    #[test]
    fn test_whitespace_collapses_within_lines() {
        assert_eq!(
            transform("  some\t\ttext   here ", TransformMode::Remove),
            "some text here"
        );
    }

    #[test]
    fn test_line_count_preserved() {
        let text = "the cat\n\nAn owl\nthe end";
        for mode in [TransformMode::Mask { width: 3 }, TransformMode::Remove] {
            let result = transform(text, mode);
            assert_eq!(
                result.matches('\n').count(),
                text.matches('\n').count(),
                "mode {:?}",
                mode
            );
        }
    }

    #[test]
    fn test_crlf_endings_preserved() {
        assert_eq!(
            transform("the cat\r\nthe dog", TransformMode::Remove),
            "cat\r\ndog"
        );
        assert_eq!(
            transform("the cat\r\nthe dog\n", TransformMode::Mask { width: 1 }),
            "_ cat\r\n_ dog\n"
        );
    }

    #[test]
    fn test_paragraphs_are_independent() {
        // A capitalized article at the end of one line never re-capitalizes
        // the first word of the next
        assert_eq!(
            transform("I saw The\nphrase", TransformMode::Remove),
            "I saw\nphrase"
        );
    }

    #[test]
    fn test_article_at_line_end() {
        assert_eq!(transform("I saw the", TransformMode::Remove), "I saw");
        assert_eq!(
            transform("I saw the", TransformMode::Mask { width: 3 }),
            "I saw ___"
        );
    }

    #[test]
    fn test_article_only_line_removed_to_empty() {
        assert_eq!(transform("the", TransformMode::Remove), "");
        assert_eq!(transform("The An a", TransformMode::Remove), "");
    }

    #[test]
    fn test_empty_and_whitespace_documents() {
        assert_eq!(transform("", TransformMode::Mask { width: 3 }), "");
        assert_eq!(transform("   \t ", TransformMode::Remove), "");
        assert_eq!(transform("\n", TransformMode::Remove), "\n");
    }

    #[test]
    fn test_lookback_uses_original_token() {
        // The second "An" is removed as an article itself; "apple" still
        // sees the original capitalized article right before it
        assert_eq!(transform("An An apple", TransformMode::Remove), "Apple");
    }

    #[test]
    fn test_bare_symbol_token_is_not_an_article() {
        assert_eq!(
            transform("\" a day", TransformMode::Mask { width: 2 }),
            "\" __ day"
        );
    }

    #[test]
    fn test_trailing_symbol_is_not_a_leading_symbol() {
        assert_eq!(
            transform("away\" the end", TransformMode::Remove),
            "away\" end"
        );
    }

    #[test]
    fn test_capitalized_word_casing_untouched_by_lowercase_article() {
        assert_eq!(
            transform("the Phrase is nice", TransformMode::Remove),
            "Phrase is nice"
        );
    }

    #[test]
    fn test_typographic_quote_article() {
        assert_eq!(
            transform("\u{201C}The story begins", TransformMode::Remove),
            "\u{201C}Story begins"
        );
        assert_eq!(
            transform("\u{201C}The story begins", TransformMode::Mask { width: 3 }),
            "\u{201C}___ story begins"
        );
    }
}
