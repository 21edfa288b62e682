//! Text operators for the standard fonts

use crate::Align;

/// Font resource and measurements for one run of text
pub struct TextRenderContext<'a> {
    /// Font resource name on the page (e.g., "F1")
    pub font_name: &'a str,
    /// Font size in points
    pub font_size: f32,
    /// Advance width of the run in points
    pub text_width: f64,
}

/// Characters at WinAnsi codes 0x80..=0x9F, where the encoding departs from Latin-1
#[rustfmt::skip]
const WIN_ANSI_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'), None, Some('\u{201A}'), Some('\u{0192}'), // 80-83
    Some('\u{201E}'), Some('\u{2026}'), Some('\u{2020}'), Some('\u{2021}'), // 84-87
    Some('\u{02C6}'), Some('\u{2030}'), Some('\u{0160}'), Some('\u{2039}'), // 88-8B
    Some('\u{0152}'), None, Some('\u{017D}'), None, // 8C-8F
    None, Some('\u{2018}'), Some('\u{2019}'), Some('\u{201C}'), // 90-93
    Some('\u{201D}'), Some('\u{2022}'), Some('\u{2013}'), Some('\u{2014}'), // 94-97
    Some('\u{02DC}'), Some('\u{2122}'), Some('\u{0161}'), Some('\u{203A}'), // 98-9B
    Some('\u{0153}'), None, Some('\u{017E}'), Some('\u{0178}'), // 9C-9F
];

/// WinAnsi code for a character, or `?` when the standard fonts lack it
pub fn win_ansi_code(c: char) -> u8 {
    match u32::from(c) {
        code @ (0x20..=0x7E | 0xA0..=0xFF) => code as u8,
        _ => WIN_ANSI_HIGH
            .iter()
            .position(|&mapped| mapped == Some(c))
            .map_or(b'?', |index| 0x80 + index as u8),
    }
}

/// Encode text as a WinAnsi hex string, e.g. `<48656C6C6F>`
pub fn encode_win_ansi_hex(text: &str) -> String {
    let body: String = text
        .chars()
        .map(|c| format!("{:02X}", win_ansi_code(c)))
        .collect();
    format!("<{body}>")
}

/// Operators that show one line of text
///
/// `x` is the alignment anchor and `y` the baseline, both in PDF
/// coordinates (from the bottom-left).
pub fn generate_text_operators(
    text_hex: &str,
    x: f64,
    y: f64,
    align: Align,
    ctx: &TextRenderContext,
) -> Vec<u8> {
    let start_x = match align {
        Align::Left => x,
        Align::Center => x - ctx.text_width / 2.0,
        Align::Right => x - ctx.text_width,
    };

    format!(
        "BT\n0 0 0 rg\n/{} {} Tf\n{start_x} {y} Td\n{text_hex} Tj\nET\n",
        ctx.font_name, ctx.font_size
    )
    .into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operators(align: Align) -> String {
        let ctx = TextRenderContext {
            font_name: "F2",
            font_size: 10.0,
            text_width: 40.0,
        };
        String::from_utf8(generate_text_operators("<5A>", 200.0, 500.0, align, &ctx)).unwrap()
    }

    #[test]
    fn test_win_ansi_code() {
        assert_eq!(win_ansi_code('A'), b'A');
        assert_eq!(win_ansi_code(' '), 0x20);
        assert_eq!(win_ansi_code('ü'), 0xFC);
        assert_eq!(win_ansi_code('\t'), b'?');
        assert_eq!(win_ansi_code('\u{7F}'), b'?');
        assert_eq!(win_ansi_code('\u{81}'), b'?');
        assert_eq!(win_ansi_code('₹'), b'?');
    }

    #[test]
    fn test_win_ansi_punctuation() {
        assert_eq!(win_ansi_code('€'), 0x80);
        assert_eq!(win_ansi_code('…'), 0x85);
        assert_eq!(win_ansi_code('‘'), 0x91);
        assert_eq!(win_ansi_code('’'), 0x92);
        assert_eq!(win_ansi_code('“'), 0x93);
        assert_eq!(win_ansi_code('”'), 0x94);
        assert_eq!(win_ansi_code('–'), 0x96);
        assert_eq!(win_ansi_code('—'), 0x97);
        assert_eq!(win_ansi_code('™'), 0x99);
        assert_eq!(win_ansi_code('Ÿ'), 0x9F);

        let mapped = WIN_ANSI_HIGH.iter().flatten().count();
        assert_eq!(mapped, 27);
    }

    #[test]
    fn test_encode_hex() {
        assert_eq!(encode_win_ansi_hex("Rupees: 5"), "<5275706565733A2035>");
        assert_eq!(encode_win_ansi_hex(""), "<>");
        assert_eq!(encode_win_ansi_hex("₹1"), "<3F31>");
        assert_eq!(
            encode_win_ansi_hex("O\u{2019}Brien \u{2013} \u{20AC}5"),
            "<4F92427269656E2096208035>"
        );
    }

    #[test]
    fn test_left_aligned_operators() {
        assert_eq!(
            operators(Align::Left),
            "BT\n0 0 0 rg\n/F2 10 Tf\n200 500 Td\n<5A> Tj\nET\n"
        );
    }

    #[test]
    fn test_alignment_shifts_start() {
        assert!(operators(Align::Center).contains("180 500 Td"));
        assert!(operators(Align::Right).contains("160 500 Td"));
    }
}
