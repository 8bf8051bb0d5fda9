//! Single-flow text layout: paragraphs → wrapped lines → pages.
//!
//! Greedy word-wrap against the static metric tables. Explicit `\n` always
//! starts a new line, an empty paragraph becomes one blank line, and a word
//! wider than the line is broken at character boundaries.

use crate::layout::font_metrics::{get_metrics, FontMetricTable, PageConfig};

/// One page worth of already-wrapped lines, top to bottom.
pub type PageLines = Vec<String>;

/// Wraps and paginates `text`. The result always has at least one page.
pub fn layout_text(text: &str, config: &PageConfig) -> Vec<PageLines> {
    let metrics = get_metrics(&config.font);
    let lines = wrap_text(text, metrics, config.text_width_em());
    paginate(lines, config.lines_per_page())
}

/// Wraps every paragraph of `text` to `max_width_em`.
pub fn wrap_text(text: &str, metrics: &FontMetricTable, max_width_em: f32) -> Vec<String> {
    text.split('\n')
        .flat_map(|paragraph| {
            wrap_paragraph(paragraph.trim_end_matches('\r'), metrics, max_width_em)
        })
        .collect()
}

fn wrap_paragraph(paragraph: &str, metrics: &FontMetricTable, max_width_em: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in paragraph.split_whitespace() {
        let word_w = metrics.measure_str(word);

        if word_w > max_width_em {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let mut pieces = break_word(word, metrics, max_width_em);
            // The tail of a broken word can share its line with what follows.
            let tail = pieces.pop().unwrap_or_default();
            lines.extend(pieces);
            current_width = metrics.measure_str(&tail);
            current = tail;
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
            current_width = word_w;
        } else if current_width + metrics.space_width + word_w > max_width_em {
            lines.push(std::mem::replace(&mut current, word.to_string()));
            current_width = word_w;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += metrics.space_width + word_w;
        }
    }

    // Also covers the empty paragraph: it yields one blank line.
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Splits a single overlong word into pieces that each fit the line.
/// Every piece holds at least one character.
fn break_word(word: &str, metrics: &FontMetricTable, max_width_em: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut width = 0.0_f32;

    for c in word.chars() {
        let char_w = metrics.char_width(c);
        if !piece.is_empty() && width + char_w > max_width_em {
            pieces.push(std::mem::take(&mut piece));
            width = 0.0;
        }
        piece.push(c);
        width += char_w;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

/// Chunks lines into pages of `lines_per_page`.
pub fn paginate(lines: Vec<String>, lines_per_page: usize) -> Vec<PageLines> {
    if lines.is_empty() {
        return vec![Vec::new()];
    }
    lines
        .chunks(lines_per_page.max(1))
        .map(<[String]>::to_vec)
        .collect()
}
