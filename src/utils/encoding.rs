use crate::subtitle::{SrtError, SrtResult};

const UTF8_BOM: &str = "\u{feff}";

/// The eight code points where Latin-9 differs from Latin-1
const LATIN9_OVERRIDES: [(u8, char); 8] = [
    (0xA4, '\u{20AC}'), // €
    (0xA6, '\u{0160}'), // Š
    (0xA8, '\u{0161}'), // š
    (0xB4, '\u{017D}'), // Ž
    (0xB8, '\u{017E}'), // ž
    (0xBC, '\u{0152}'), // Œ
    (0xBD, '\u{0153}'), // œ
    (0xBE, '\u{0178}'), // Ÿ
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Latin9,
}

impl TextEncoding {
    pub fn as_str(&self) -> &str {
        match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Latin9 => "ISO-8859-15",
        }
    }
}

/// Decoded file content and how to write it back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding: TextEncoding,
    pub bom: bool,
}

/// Decode bytes as UTF-8, falling back to ISO-8859-15 (Latin-9)
///
/// This is not charset detection: any byte sequence is valid Latin-9, so files
/// in other legacy encodings come out garbled rather than failing.
pub fn decode(bytes: &[u8]) -> DecodedText {
    match std::str::from_utf8(bytes) {
        Ok(text) => match text.strip_prefix(UTF8_BOM) {
            Some(rest) => DecodedText {
                text: rest.to_string(),
                encoding: TextEncoding::Utf8,
                bom: true,
            },
            None => DecodedText {
                text: text.to_string(),
                encoding: TextEncoding::Utf8,
                bom: false,
            },
        },
        Err(_) => DecodedText {
            text: bytes.iter().map(|&b| latin9_char(b)).collect(),
            encoding: TextEncoding::Latin9,
            bom: false,
        },
    }
}

/// Encode text back into `encoding`, failing on unrepresentable characters
pub fn encode(text: &str, encoding: TextEncoding, bom: bool) -> SrtResult<Vec<u8>> {
    match encoding {
        TextEncoding::Utf8 => {
            let mut out = Vec::with_capacity(text.len() + UTF8_BOM.len());
            if bom {
                out.extend_from_slice(UTF8_BOM.as_bytes());
            }
            out.extend_from_slice(text.as_bytes());
            Ok(out)
        }
        TextEncoding::Latin9 => text
            .chars()
            .map(|c| {
                latin9_byte(c).ok_or_else(|| {
                    SrtError::Encoding(format!(
                        "character {:?} (U+{:04X}) cannot be written as {}",
                        c,
                        c as u32,
                        encoding.as_str()
                    ))
                })
            })
            .collect(),
    }
}

fn latin9_char(byte: u8) -> char {
    LATIN9_OVERRIDES
        .iter()
        .find(|(b, _)| *b == byte)
        .map(|(_, c)| *c)
        .unwrap_or(char::from(byte))
}

fn latin9_byte(c: char) -> Option<u8> {
    if let Some((b, _)) = LATIN9_OVERRIDES.iter().find(|(_, oc)| *oc == c) {
        return Some(*b);
    }
    let byte = u8::try_from(u32::from(c)).ok()?;
    // Latin-1 code points displaced by the overrides have no Latin-9 byte
    if LATIN9_OVERRIDES.iter().any(|(b, _)| *b == byte) {
        return None;
    }
    Some(byte)
}
