use crate::refs::{ObjectReferences, RefType};
use pdf_writer::{Finish, Name, Pdf};

/// One of the standard PDF Type 1 faces that every conforming reader ships
/// with. Using these avoids embedding font programs entirely; the advance
/// widths below come from the Adobe Font Metrics for each face.
///
/// Text is encoded as WinAnsi (CP-1252), so characters outside that set are
/// rendered as `?`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
}

impl Font {
    /// Every face, in the order they are registered as page resources
    pub const ALL: [Font; 4] = [
        Font::Helvetica,
        Font::HelveticaBold,
        Font::HelveticaOblique,
        Font::HelveticaBoldOblique,
    ];

    /// The PostScript name of the face, used as the `/BaseFont` entry
    pub fn base_font(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::HelveticaOblique => "Helvetica-Oblique",
            Font::HelveticaBoldOblique => "Helvetica-BoldOblique",
        }
    }

    /// Resource index of the face; content streams refer to it as `/F{index}`
    pub fn index(&self) -> usize {
        match self {
            Font::Helvetica => 0,
            Font::HelveticaBold => 1,
            Font::HelveticaOblique => 2,
            Font::HelveticaBoldOblique => 3,
        }
    }

    fn is_bold(&self) -> bool {
        matches!(self, Font::HelveticaBold | Font::HelveticaBoldOblique)
    }

    /// Advance width of a single character, in thousandths of the font size
    pub fn glyph_width(&self, ch: char) -> u16 {
        let widths = if self.is_bold() {
            &HELVETICA_BOLD_WIDTHS
        } else {
            &HELVETICA_WIDTHS
        };

        match encode_char(ch) {
            code @ 0x20..=0x7e => widths[(code - 0x20) as usize],
            0x85 | 0x97 => 1000,
            0x91 | 0x92 => {
                if self.is_bold() {
                    278
                } else {
                    222
                }
            }
            0x93 | 0x94 => {
                if self.is_bold() {
                    500
                } else {
                    333
                }
            }
            0x95 => 350,
            0x96 => 556,
            _ => 556,
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Font(self.index()));
        let mut font = writer.type1_font(id);
        font.base_font(Name(self.base_font().as_bytes()));
        font.encoding_predefined(Name(b"WinAnsiEncoding"));
        font.finish();
    }
}

/// Map a character onto its WinAnsi code point, substituting `?` for
/// anything the encoding can't represent
pub fn encode_char(ch: char) -> u8 {
    match ch {
        ' '..='~' => ch as u8,
        '\u{a0}'..='\u{ff}' => ch as u32 as u8,
        '€' => 0x80,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '\t' => b' ',
        _ => b'?',
    }
}

/// Encode a whole string as WinAnsi bytes
pub fn encode_text(text: &str) -> Vec<u8> {
    text.chars().map(encode_char).collect()
}

// advance widths for codes 0x20 ..= 0x7e
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];
