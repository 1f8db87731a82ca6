//! Text decoding for source tables.

use std::path::Path;

use encoding_rs::Encoding;

use crate::error::{IngestError, Result};

/// Encoding label used for both registry sources.
///
/// Decoded as true ISO-8859-1: every byte maps to the code point of the same
/// value, including the C1 controls at 0x80..=0x9F.
pub const REGISTRY_ENCODING_LABEL: &str = "ISO-8859-1";

/// Labels that select [`TextEncoding::Latin1`] rather than the WHATWG table,
/// which would resolve them to windows-1252.
const LATIN1_LABELS: &[&str] = &[
    "iso-8859-1",
    "iso8859-1",
    "iso_8859-1",
    "iso88591",
    "latin1",
    "latin-1",
    "l1",
    "cp819",
    "ibm819",
];

/// A text encoding applied to whole files before CSV parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// ISO-8859-1, one code point per byte.
    Latin1,
    /// Any other encoding from the WHATWG label table.
    Whatwg(&'static Encoding),
}

impl TextEncoding {
    /// Strict UTF-8, used for files this pipeline wrote itself.
    #[must_use]
    pub fn utf8() -> Self {
        Self::Whatwg(encoding_rs::UTF_8)
    }

    /// Encoding of the raw registry inputs.
    #[must_use]
    pub fn registry() -> Self {
        Self::Latin1
    }

    /// Look up an encoding by label. Latin-1 aliases resolve to
    /// [`TextEncoding::Latin1`]; everything else goes through the WHATWG table.
    pub fn from_label(label: &str) -> Result<Self> {
        let trimmed = label.trim();
        if LATIN1_LABELS
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(trimmed))
        {
            return Ok(Self::Latin1);
        }
        Encoding::for_label(trimmed.as_bytes())
            .map(Self::Whatwg)
            .ok_or_else(|| IngestError::UnknownEncoding {
                label: label.to_string(),
            })
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Latin1 => REGISTRY_ENCODING_LABEL,
            Self::Whatwg(encoding) => encoding.name(),
        }
    }

    /// Decode `bytes` read from `path`; malformed input is an error.
    pub fn decode(&self, bytes: &[u8], path: &Path) -> Result<String> {
        match self {
            Self::Latin1 => Ok(encoding_rs::mem::decode_latin1(bytes).into_owned()),
            Self::Whatwg(encoding) => {
                let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
                if had_errors {
                    return Err(IngestError::MalformedText {
                        path: path.to_path_buf(),
                        encoding: self.name(),
                    });
                }
                Ok(text.into_owned())
            }
        }
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self::utf8()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_label_resolves_to_registry_encoding() {
        let encoding = TextEncoding::from_label(REGISTRY_ENCODING_LABEL).expect("known label");
        assert_eq!(encoding, TextEncoding::registry());
        assert_eq!(
            TextEncoding::from_label(" Latin1 ").expect("alias"),
            TextEncoding::Latin1
        );
    }

    #[test]
    fn registry_encoding_maps_each_byte_to_same_code_point() {
        let bytes: Vec<u8> = (0..=255).collect();
        let text = TextEncoding::registry()
            .decode(&bytes, Path::new("all-bytes.csv"))
            .expect("decode");
        let code_points: Vec<u32> = text.chars().map(u32::from).collect();
        let expected: Vec<u32> = (0..=255).collect();
        assert_eq!(code_points, expected);
    }

    #[test]
    fn windows_1252_label_still_uses_whatwg_table() {
        let encoding = TextEncoding::from_label("windows-1252").expect("known label");
        assert_eq!(encoding.name(), "windows-1252");
        let text = encoding
            .decode(b"\x80", Path::new("cp1252.csv"))
            .expect("decode");
        assert_eq!(text, "\u{20ac}");
    }

    #[test]
    fn utf8_rejects_malformed_bytes() {
        let err = TextEncoding::utf8()
            .decode(b"caf\xe9", Path::new("bad.csv"))
            .unwrap_err();
        assert!(matches!(err, IngestError::MalformedText { .. }));
    }

    #[test]
    fn unknown_label_is_an_error() {
        assert!(matches!(
            TextEncoding::from_label("klingon-8"),
            Err(IngestError::UnknownEncoding { .. })
        ));
    }
}
