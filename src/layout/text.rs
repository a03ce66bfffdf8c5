use crate::font::Font;
use crate::units::Pt;

/// Distance between consecutive baselines, as a multiple of the font size
pub const LINE_HEIGHT_FACTOR: f32 = 1.15;

/// Baseline-to-baseline distance for text set at `size`
pub fn line_height(size: Pt) -> Pt {
    size * LINE_HEIGHT_FACTOR
}

/// Calculate the width of a given string of text given the font and font size
pub fn width_of_text(text: &str, font: Font, size: Pt) -> Pt {
    let units: u32 = text.chars().map(|ch| font.glyph_width(ch) as u32).sum();
    size * (units as f32 / 1000.0)
}

/// Split text into lines no wider than `max_width`.
///
/// Explicit newlines always start a new line (blank lines are kept). Within a
/// paragraph, lines break at whitespace; runs of whitespace collapse to a single
/// space. A word that is wider than `max_width` on its own is broken between
/// characters so that nothing overflows.
pub fn wrap_text(text: &str, font: Font, size: Pt, max_width: Pt) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines: Vec<String> = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();

        for word in paragraph.split_whitespace() {
            let candidate = if line.is_empty() {
                word.to_string()
            } else {
                format!("{line} {word}")
            };

            if width_of_text(&candidate, font, size) <= max_width {
                line = candidate;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }

            if width_of_text(word, font, size) <= max_width {
                line = word.to_string();
            } else {
                // no break point in the word, split it between characters
                for ch in word.chars() {
                    line.push(ch);
                    if line.chars().count() > 1 && width_of_text(&line, font, size) > max_width {
                        line.pop();
                        lines.push(std::mem::take(&mut line));
                        line.push(ch);
                    }
                }
            }
        }

        lines.push(line);
    }

    lines
}
