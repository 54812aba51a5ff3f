//! Static font-metric tables used to lay text onto the visual surface.
//!
//! Character widths are in em units (relative to font size). This is an
//! intentional approximation: template strategies only need to know where a
//! line wraps at the virtual page width, not exact glyph shapes, and the
//! surface is rasterized as tone bands rather than drawn glyph by glyph.
//! Both tables cover ASCII 0x20..=0x7E (95 printable characters);
//! index = (char as usize) - 32. Non-ASCII falls back to an average width.

// ────────────────────────────────────────────────────────────────────────────
// Font class
// ────────────────────────────────────────────────────────────────────────────

/// The two width profiles the six templates draw from. Sans covers the
/// Arial/Helvetica family (modern, creative, executive); serif covers the
/// Georgia/Times family (minimalist, professional, elegant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontClass {
    Sans,
    Serif,
}

// ────────────────────────────────────────────────────────────────────────────
// Metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one font class, widths in em at 1em.
/// `widths[i]` = width of ASCII character `(i + 32)`.
pub struct FontMetricTable {
    pub font: FontClass,
    widths: [f32; 95],
    /// Fallback width for codepoints outside 0x20..=0x7E.
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in px at the given font size.
    pub fn width_px(&self, s: &str, font_size: f32) -> f32 {
        let em: f32 = s
            .chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum();
        em * font_size
    }

    /// Greedy word-wraps one paragraph at `max_width` px, returning the line
    /// strings. A word wider than the full line is kept whole on its own
    /// line (it overflows rather than breaking mid-word). Empty input yields
    /// no lines.
    pub fn wrap(&self, text: &str, font_size: f32, max_width: f32) -> Vec<String> {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return Vec::new();
        }
        let space_px = self.space_width * font_size;

        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in words {
            let word_px = self.width_px(word, font_size);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_px;
            } else if current_width + space_px + word_px > max_width {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_px;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += space_px + word_px;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }

    /// Wraps multi-paragraph text: newlines in the stored value are hard
    /// breaks, so bullet-style descriptions keep their line structure.
    pub fn wrap_paragraphs(&self, text: &str, font_size: f32, max_width: f32) -> Vec<String> {
        text.lines()
            .flat_map(|paragraph| self.wrap(paragraph, font_size, max_width))
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

/// Humanist sans-serif profile.
static SANS_TABLE: FontMetricTable = FontMetricTable {
    font: FontClass::Sans,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.25, 0.30, 0.38, 0.56, 0.56, 0.89, 0.67, 0.22, 0.33, 0.33, 0.39, 0.59, 0.28, 0.33, 0.28, 0.31,
        // 0     1     2     3     4     5     6     7     8     9
        0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
        // :     ;     <     =     >     ?     @
        0.28, 0.28, 0.59, 0.59, 0.59, 0.50, 1.02,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.67, 0.61, 0.61, 0.67, 0.56, 0.50, 0.67, 0.67, 0.25, 0.39, 0.61, 0.53, 0.78,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.67, 0.72, 0.56, 0.72, 0.61, 0.50, 0.56, 0.67, 0.67, 0.89, 0.61, 0.61, 0.56,
        // [     \     ]     ^     _     `
        0.28, 0.31, 0.28, 0.47, 0.56, 0.34,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.56, 0.56, 0.50, 0.56, 0.56, 0.31, 0.56, 0.56, 0.22, 0.22, 0.53, 0.22, 0.83,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.56, 0.56, 0.56, 0.56, 0.33, 0.44, 0.39, 0.56, 0.50, 0.72, 0.50, 0.50, 0.44,
        // {     |     }     ~
        0.33, 0.26, 0.33, 0.59,
    ],
    average_char_width: 0.52,
    space_width: 0.25,
};

/// Old-style serif profile, roughly 85% of the sans widths.
static SERIF_TABLE: FontMetricTable = FontMetricTable {
    font: FontClass::Serif,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.21, 0.26, 0.32, 0.48, 0.48, 0.76, 0.57, 0.19, 0.28, 0.28, 0.33, 0.50, 0.24, 0.28, 0.24, 0.26,
        // 0     1     2     3     4     5     6     7     8     9
        0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48,
        // :     ;     <     =     >     ?     @
        0.24, 0.24, 0.50, 0.50, 0.50, 0.43, 0.87,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.57, 0.52, 0.52, 0.57, 0.48, 0.43, 0.57, 0.57, 0.21, 0.33, 0.52, 0.45, 0.66,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.57, 0.61, 0.48, 0.61, 0.52, 0.43, 0.48, 0.57, 0.57, 0.76, 0.52, 0.52, 0.48,
        // [     \     ]     ^     _     `
        0.24, 0.26, 0.24, 0.40, 0.48, 0.29,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.48, 0.48, 0.43, 0.48, 0.48, 0.26, 0.48, 0.48, 0.19, 0.19, 0.45, 0.19, 0.71,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.48, 0.48, 0.48, 0.48, 0.28, 0.37, 0.33, 0.48, 0.43, 0.61, 0.43, 0.43, 0.37,
        // {     |     }     ~
        0.28, 0.22, 0.28, 0.50,
    ],
    average_char_width: 0.44,
    space_width: 0.21,
};

/// Returns the static metric table for a font class.
pub fn get_metrics(font: FontClass) -> &'static FontMetricTable {
    match font {
        FontClass::Sans => &SANS_TABLE,
        FontClass::Serif => &SERIF_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
