// ABOUTME: Plain-text heuristics used by the rewrite passes.
// ABOUTME: Whitespace normalization, bullet/Roman/title-case detection, sentence splitting.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

/// Canonical uppercase Roman numerals from 1 to 4999.
static ROMAN_NUMERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^M{0,4}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$").unwrap()
});

static CALLOUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)^(note|tip|warning|important)\s*:\s*(.+)$").unwrap());

// Words that stay lowercase inside a Title Case line.
const MINOR_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "by", "for", "from", "in", "into", "of", "on", "or", "the",
    "to", "vs", "vs.", "with",
];

const BULLET_GLYPHS: &[char] = &['•', '—', '‣', '·'];

const SENTENCE_END: &[char] = &['.', '!', '?'];

/// Collapses runs of whitespace into single spaces and trims the ends.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Length in characters, not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

/// True for text made only of punctuation/symbols, e.g. `...` or `—`.
pub fn is_punctuation_only(s: &str) -> bool {
    let trimmed = s.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_whitespace() || !c.is_alphanumeric())
}

/// True for a lone character or punctuation-only text.
pub fn is_stray(s: &str) -> bool {
    let trimmed = s.trim();
    char_len(trimmed) == 1 || is_punctuation_only(trimmed)
}

pub fn is_roman_numeral(s: &str) -> bool {
    let trimmed = s.trim();
    !trimmed.is_empty() && ROMAN_NUMERAL.is_match(trimmed)
}

/// Returns the text after a leading bullet glyph, if there is one.
///
/// A hyphen only counts when followed by whitespace so `-10% damage` stays
/// prose. The remainder must not be empty.
pub fn strip_bullet(s: &str) -> Option<&str> {
    let trimmed = s.trim_start();
    let mut chars = trimmed.chars();
    let first = chars.next()?;
    let rest = chars.as_str();

    let stripped = if first == '-' {
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        rest.trim_start()
    } else if BULLET_GLYPHS.contains(&first) {
        rest.trim_start()
    } else {
        return None;
    };

    if stripped.trim().is_empty() {
        None
    } else {
        Some(stripped)
    }
}

/// Splits a callout line into its keyword (as written) and remainder.
pub fn parse_callout(s: &str) -> Option<(&str, &str)> {
    let caps = CALLOUT.captures(s.trim())?;
    let keyword = caps.get(1)?.as_str();
    let rest = caps.get(2)?.as_str().trim();
    Some((keyword, rest))
}

/// Title Case check for short lines: every word starts with an uppercase
/// letter or digit; minor words may be lowercase after the first word.
pub fn is_title_case(s: &str) -> bool {
    if !s.chars().any(char::is_alphabetic) {
        return false;
    }

    s.split_whitespace().enumerate().all(|(i, word)| {
        match word.chars().find(|c| c.is_alphanumeric()) {
            None => true,
            Some(c) if c.is_numeric() || c.is_uppercase() => true,
            Some(_) => i > 0 && MINOR_WORDS.contains(&word.to_lowercase().as_str()),
        }
    })
}

pub fn ends_with_sentence_punctuation(s: &str) -> bool {
    s.trim_end().ends_with(['.', '!', '?', ',', ';'])
}

/// Sentence boundaries in `text`: `.`, `!` or `?` followed by whitespace and
/// an uppercase letter or digit. Each pair is the byte offset just past the
/// punctuation and the offset where the next sentence starts.
pub fn sentence_breaks(text: &str) -> Vec<(usize, usize)> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut breaks = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (idx, c) = chars[i];
        if SENTENCE_END.contains(&c) {
            let mut j = i + 1;
            while j < chars.len() && chars[j].1.is_whitespace() {
                j += 1;
            }
            let next_starts_sentence = chars
                .get(j)
                .is_some_and(|(_, next)| next.is_uppercase() || next.is_ascii_digit());
            if j > i + 1 && next_starts_sentence {
                breaks.push((idx + c.len_utf8(), chars[j].0));
                i = j;
                continue;
            }
        }
        i += 1;
    }

    breaks
}

/// Splits prose at [`sentence_breaks`]. Fragments are trimmed; punctuation
/// stays with its sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for (end, next) in sentence_breaks(text) {
        let sentence = text[start..end].trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }
        start = next;
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

/// Greedily groups consecutive sentences by their character lengths, closing
/// a group once it passes `max_chars` (counting one joining space between
/// sentences) or holds `max_sentences` sentences.
pub fn group_spans(lengths: &[usize], max_chars: usize, max_sentences: usize) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = 0;
    let mut chars = 0;

    for (i, len) in lengths.iter().enumerate() {
        if i > start {
            chars += 1;
        }
        chars += len;

        if chars > max_chars || i + 1 - start >= max_sentences {
            spans.push(start..i + 1);
            start = i + 1;
            chars = 0;
        }
    }

    if start < lengths.len() {
        spans.push(start..lengths.len());
    }
    spans
}

/// Joins sentences into chunks per [`group_spans`].
pub fn group_sentences(sentences: &[String], max_chars: usize, max_sentences: usize) -> Vec<String> {
    let lengths: Vec<usize> = sentences.iter().map(|s| char_len(s)).collect();
    group_spans(&lengths, max_chars, max_sentences)
        .into_iter()
        .map(|span| sentences[span].join(" "))
        .collect()
}
