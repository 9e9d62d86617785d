//! Width-aware line wrapping

use crate::fonts::{text_width_mm, TextStyle};

/// Split `text` into lines no wider than `max_width_mm` when set in `style`
///
/// Greedy word wrap over whitespace-normalized text. A single word wider
/// than the line is broken between characters. Blank input yields no lines.
pub fn split_text_to_size(text: &str, style: TextStyle, max_width_mm: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if text_width_mm(&candidate, style) <= max_width_mm {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if text_width_mm(word, style) <= max_width_mm {
            current = word.to_string();
        } else {
            let mut pieces = break_word(word, style, max_width_mm);
            current = pieces.pop().unwrap_or_default();
            lines.extend(pieces);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Break an over-long word into chunks that each fit the line
fn break_word(word: &str, style: TextStyle, max_width_mm: f64) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();

    for c in word.chars() {
        piece.push(c);
        if text_width_mm(&piece, style) > max_width_mm && piece.chars().count() > 1 {
            piece.pop();
            pieces.push(std::mem::take(&mut piece));
            piece.push(c);
        }
    }

    if !piece.is_empty() {
        pieces.push(piece);
    }

    pieces
}
