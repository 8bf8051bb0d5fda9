//! Static font-metric tables for the PDF base-14 fonts used by the exporter.
//!
//! Character widths are in em units (AFM widths / 1000), so a string's width in
//! points is `measure_str(s) * font_size_pt`. Widths are looked up by the
//! WinAnsi byte a character encodes to, matching the Adobe AFM files for every
//! code point the exporter can draw. The exporter only wraps, it never kerns,
//! so per-glyph advance widths are exact.

// ────────────────────────────────────────────────────────────────────────────
// Font family enum
// ────────────────────────────────────────────────────────────────────────────

/// Base-14 fonts the exporter can emit without embedding a font file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// Proportional sans-serif; metric-compatible with Arial. Used for exports.
    Helvetica,
    /// Fixed-pitch; every glyph is 0.6em. Lets wrap tests count characters
    /// instead of summing widths.
    #[cfg_attr(not(test), allow(dead_code))]
    Courier,
}

impl FontFamily {
    /// The `/BaseFont` name written into the PDF font dictionary.
    pub fn base_font(&self) -> &'static str {
        match self {
            FontFamily::Helvetica => "Helvetica",
            FontFamily::Courier => "Courier",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

/// Millimetres to PDF points.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Geometry of one page of exported text. All lengths in points.
#[derive(Debug, Clone)]
pub struct PageConfig {
    pub font: FontFamily,
    pub font_size_pt: f32,
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    pub margin_left_pt: f32,
    pub margin_right_pt: f32,
    pub margin_top_pt: f32,
    /// A new page starts once the next line would cross this margin.
    pub margin_bottom_pt: f32,
    pub line_height_pt: f32,
}

impl PageConfig {
    /// Usable text width in em units at the configured font size.
    pub fn text_width_em(&self) -> f32 {
        (self.page_width_pt - self.margin_left_pt - self.margin_right_pt) / self.font_size_pt
    }

    /// How many lines fit between the top margin and the bottom break line.
    pub fn lines_per_page(&self) -> usize {
        let usable = self.page_height_pt - self.margin_top_pt - self.margin_bottom_pt;
        ((usable / self.line_height_pt).floor() as usize).max(1)
    }
}

/// Returns the default page config for the given font family.
///
/// Assumes: A4 portrait, 12pt, 10mm left/right/top margins, 20mm bottom
/// break margin, 10mm line height.
pub fn default_page_config(font: FontFamily) -> PageConfig {
    PageConfig {
        font,
        font_size_pt: 12.0,
        page_width_pt: 595.28,
        page_height_pt: 841.89,
        margin_left_pt: 10.0 * PT_PER_MM,
        margin_right_pt: 10.0 * PT_PER_MM,
        margin_top_pt: 10.0 * PT_PER_MM,
        margin_bottom_pt: 20.0 * PT_PER_MM,
        line_height_pt: 10.0 * PT_PER_MM,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for a font family.
///
/// `ascii[i]` = width of byte `(i + 0x20)`, 0x20 (space) through 0x7E (~).
/// `upper[i]` = width of WinAnsi byte `(i + 0x80)`, 0x80 through 0xFF.
/// Slots WinAnsi leaves undefined (0x81, 0x8D, 0x8F, 0x90, 0x9D) are never
/// produced by `win_ansi_byte`.
pub struct FontMetricTable {
    ascii: [f32; 95],
    upper: [f32; 128],
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars().map(|c| self.char_width(c)).sum()
    }

    /// Width of the glyph actually drawn for `c`; unencodable characters
    /// are drawn (and measured) as `?`.
    pub fn char_width(&self, c: char) -> f32 {
        match win_ansi_byte(c).unwrap_or(b'?') {
            b @ 0x20..=0x7E => self.ascii[(b - 0x20) as usize],
            b @ 0x80..=0xFF => self.upper[(b - 0x80) as usize],
            _ => self.ascii[(b'?' - 0x20) as usize],
        }
    }
}

/// Maps a character to its `WinAnsiEncoding` byte, if the encoding has one.
/// Tabs are drawn as spaces.
pub fn win_ansi_byte(c: char) -> Option<u8> {
    let byte = match c {
        ' '..='~' => c as u8,
        '\t' => b' ',
        '\u{A0}'..='\u{FF}' => c as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => return None,
    };
    Some(byte)
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (WinAnsi 0x20..=0x7E and 0x80..=0xFF)
// ────────────────────────────────────────────────────────────────────────────

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    ascii: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    #[rustfmt::skip]
    upper: [
        // €      -      ‚      ƒ      „      …      †      ‡      ˆ      ‰      Š      ‹      Œ      -      Ž      -
        0.556, 0.556, 0.222, 0.556, 0.333, 1.000, 0.556, 0.556, 0.333, 1.000, 0.667, 0.333, 1.000, 0.556, 0.611, 0.556,
        // -      ‘      ’      “      ”      •      –      —      ˜      ™      š      ›      œ      -      ž      Ÿ
        0.556, 0.222, 0.222, 0.333, 0.333, 0.350, 0.556, 1.000, 0.333, 1.000, 0.500, 0.333, 0.944, 0.556, 0.500, 0.667,
        // nbsp   ¡      ¢      £      ¤      ¥      ¦      §      ¨      ©      ª      «      ¬      shy    ®      ¯
        0.278, 0.333, 0.556, 0.556, 0.556, 0.556, 0.260, 0.556, 0.333, 0.737, 0.370, 0.556, 0.584, 0.333, 0.737, 0.333,
        // °      ±      ²      ³      ´      µ      ¶      ·      ¸      ¹      º      »      ¼      ½      ¾      ¿
        0.400, 0.584, 0.333, 0.333, 0.333, 0.556, 0.537, 0.278, 0.333, 0.333, 0.365, 0.556, 0.834, 0.834, 0.834, 0.611,
        // À      Á      Â      Ã      Ä      Å      Æ      Ç      È      É      Ê      Ë      Ì      Í      Î      Ï
        0.667, 0.667, 0.667, 0.667, 0.667, 0.667, 1.000, 0.722, 0.667, 0.667, 0.667, 0.667, 0.278, 0.278, 0.278, 0.278,
        // Ð      Ñ      Ò      Ó      Ô      Õ      Ö      ×      Ø      Ù      Ú      Û      Ü      Ý      Þ      ß
        0.722, 0.722, 0.778, 0.778, 0.778, 0.778, 0.778, 0.584, 0.778, 0.722, 0.722, 0.722, 0.722, 0.667, 0.667, 0.611,
        // à      á      â      ã      ä      å      æ      ç      è      é      ê      ë      ì      í      î      ï
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.889, 0.500, 0.556, 0.556, 0.556, 0.556, 0.278, 0.278, 0.278, 0.278,
        // ð      ñ      ò      ó      ô      õ      ö      ÷      ø      ù      ú      û      ü      ý      þ      ÿ
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.584, 0.611, 0.556, 0.556, 0.556, 0.556, 0.500, 0.556, 0.500,
    ],
    space_width: 0.278,
};

static COURIER_TABLE: FontMetricTable = FontMetricTable {
    ascii: [0.6; 95],
    upper: [0.6; 128],
    space_width: 0.6,
};

/// Returns the static metric table for a given font family.
pub fn get_metrics(font: &FontFamily) -> &'static FontMetricTable {
    match font {
        FontFamily::Helvetica => &HELVETICA_TABLE,
        FontFamily::Courier => &COURIER_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        let metrics = get_metrics(&FontFamily::Helvetica);
        assert_eq!(metrics.measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_single_space() {
        let metrics = get_metrics(&FontFamily::Helvetica);
        let width = metrics.measure_str(" ");
        assert!(
            (width - 0.278).abs() < 1e-4,
            "space width should be 0.278, got {width}"
        );
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        let metrics = get_metrics(&FontFamily::Helvetica);
        // "Rust" = R(0.722) + u(0.556) + s(0.500) + t(0.278) = 2.056
        let width = metrics.measure_str("Rust");
        assert!(
            (width - 2.056).abs() < 1e-3,
            "Rust width should be ~2.056, got {width}"
        );
    }

    #[test]
    fn test_win_ansi_glyphs_use_their_own_widths() {
        let metrics = get_metrics(&FontFamily::Helvetica);
        assert!((metrics.char_width('—') - 1.0).abs() < 1e-4);
        assert!((metrics.char_width('…') - 1.0).abs() < 1e-4);
        assert!((metrics.char_width('™') - 1.0).abs() < 1e-4);
        assert!((metrics.char_width('Æ') - 1.0).abs() < 1e-4);
        assert!((metrics.char_width('æ') - 0.889).abs() < 1e-4);
        assert!((metrics.char_width('’') - 0.222).abs() < 1e-4);
        assert!((metrics.char_width('é') - 0.556).abs() < 1e-4);
    }

    #[test]
    fn test_unencodable_chars_measure_as_question_mark() {
        let metrics = get_metrics(&FontFamily::Helvetica);
        assert_eq!(metrics.char_width('日'), metrics.char_width('?'));
        assert_eq!(metrics.char_width('\t'), metrics.space_width);
    }

    #[test]
    fn test_win_ansi_byte() {
        assert_eq!(win_ansi_byte('A'), Some(b'A'));
        assert_eq!(win_ansi_byte('—'), Some(0x97));
        assert_eq!(win_ansi_byte('é'), Some(0xE9));
        assert_eq!(win_ansi_byte('日'), None);
        assert_eq!(win_ansi_byte('\n'), None);
    }

    #[test]
    fn test_courier_is_fixed_pitch() {
        let metrics = get_metrics(&FontFamily::Courier);
        assert!((metrics.measure_str("iiii") - metrics.measure_str("WWWW")).abs() < 1e-6);
    }

    #[test]
    fn test_default_page_config_sanity() {
        let config = default_page_config(FontFamily::Helvetica);
        assert_eq!(config.font, FontFamily::Helvetica);
        assert_eq!(config.font.base_font(), "Helvetica");
        // (595.28 - 2 * 28.35) / 12 ≈ 44.9em
        assert!(config.text_width_em() > 44.0 && config.text_width_em() < 46.0);
        // (841.89 - 28.35 - 56.69) / 28.35 ≈ 26.7 → 26 lines
        assert_eq!(config.lines_per_page(), 26);
    }
}
