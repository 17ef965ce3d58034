//! Text-to-glyph split for per-letter title reveals.
//!
//! Splitting is pure: it turns a string into ordered [`Glyph`] records and
//! leaves building one element per glyph to the host.

#[cfg(test)]
#[path = "split_test.rs"]
mod split_test;

/// One character of a split title. `index` is its reveal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub index: usize,
    pub ch: char,
}

impl Glyph {
    #[must_use]
    pub fn text(&self) -> String {
        self.ch.to_string()
    }
}

/// The text to split from a title element.
///
/// `direct` is the element's own text nodes (excluding child elements).
/// When that is blank, the inline span's text is removed from the full
/// text content instead.
#[must_use]
pub fn title_text(direct: &str, full: &str, span: &str) -> String {
    let direct = direct.trim();
    if !direct.is_empty() {
        return direct.to_owned();
    }
    if span.is_empty() {
        return full.trim().to_owned();
    }
    full.replacen(span, "", 1).trim().to_owned()
}

/// One glyph per character, whitespace included.
#[must_use]
pub fn split_glyphs(text: &str) -> Vec<Glyph> {
    text.chars().enumerate().map(|(index, ch)| Glyph { index, ch }).collect()
}

/// Split `full` after removing the first occurrence of `excluded`.
#[must_use]
pub fn split_title(full: &str, excluded: &str) -> Vec<Glyph> {
    split_glyphs(&title_text("", full, excluded))
}
