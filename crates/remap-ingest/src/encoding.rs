//! Validated text encodings.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};
use serde::Deserialize;

use crate::error::{IngestError, Result};

/// Common names that are not WHATWG labels, mapped to one that is.
const ALIASES: &[(&str, &str)] = &[
    ("cp932", "shift_jis"),
    ("ms932", "shift_jis"),
    ("sjis", "shift_jis"),
    ("shift-jis", "shift_jis"),
    ("u8", "utf-8"),
    ("utf-8-sig", "utf-8"),
    ("utf-16-le", "utf-16le"),
    ("utf-16-be", "utf-16be"),
    ("cp936", "gbk"),
    ("cp949", "euc-kr"),
    ("cp950", "big5"),
];

/// An encoding label that resolved to a supported encoding.
///
/// Labels follow the WHATWG Encoding Standard (`utf-8`, `shift_jis`,
/// `windows-1252`, `utf-16le`, ...), matched case-insensitively after trimming.
/// Labels the standard lacks are retried lowercased with `_` read as `-`, and
/// a few common codec names (`cp932`, `utf-8-sig`, `cp949`, ...) are aliased.
///
/// The standard folds `ascii` and `latin1` into `windows-1252`, so bytes
/// 0x80-0x9F decode as the Windows-1252 characters. `utf-8-sig` is plain
/// UTF-8 here: the CSV BOM is always stripped and text BOMs are always kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct EncodingName {
    encoding: &'static Encoding,
}

impl EncodingName {
    /// Resolves `label` to an encoding.
    pub fn parse(label: &str) -> Result<Self> {
        let trimmed = label.trim();
        Encoding::for_label_no_replacement(trimmed.as_bytes())
            .or_else(|| {
                let normalized = trimmed.to_ascii_lowercase().replace('_', "-");
                let canonical = ALIASES
                    .iter()
                    .find(|&&(alias, _)| alias == normalized)
                    .map_or(normalized.as_str(), |&(_, target)| target);
                Encoding::for_label_no_replacement(canonical.as_bytes())
            })
            .map(|encoding| Self { encoding })
            .ok_or_else(|| IngestError::UnknownEncoding {
                label: trimmed.to_string(),
            })
    }

    /// Canonical name of the encoding.
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Decodes `bytes`, treating malformed sequences as fatal.
    ///
    /// With `strip_bom` set, a leading BOM of this encoding is dropped;
    /// otherwise it is kept as U+FEFF.
    pub(crate) fn decode<'a>(&self, bytes: &'a [u8], strip_bom: bool) -> Option<Cow<'a, str>> {
        if strip_bom {
            let (text, had_errors) = self.encoding.decode_with_bom_removal(bytes);
            return (!had_errors).then_some(text);
        }
        self.encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
    }

    /// Encodes `text`, returning `None` if a character is unmappable.
    pub(crate) fn encode<'a>(&self, text: &'a str) -> Option<Cow<'a, [u8]>> {
        // encoding_rs only encodes UTF-16 input as UTF-8 output.
        if self.encoding == UTF_16LE {
            return Some(Cow::Owned(
                text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            ));
        }
        if self.encoding == UTF_16BE {
            return Some(Cow::Owned(
                text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            ));
        }
        let (bytes, _, had_errors) = self.encoding.encode(text);
        (!had_errors).then_some(bytes)
    }
}

impl Default for EncodingName {
    fn default() -> Self {
        Self {
            encoding: encoding_rs::UTF_8,
        }
    }
}

impl FromStr for EncodingName {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EncodingName {
    type Error = IngestError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl fmt::Display for EncodingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_labels() {
        assert_eq!(EncodingName::parse("utf-8").unwrap().name(), "UTF-8");
        assert_eq!(EncodingName::parse(" UTF8 ").unwrap().name(), "UTF-8");
        assert_eq!(EncodingName::parse("shift_jis").unwrap().name(), "Shift_JIS");
        assert_eq!(EncodingName::parse("latin1").unwrap().name(), "windows-1252");
    }

    #[test]
    fn test_parse_codec_aliases() {
        assert_eq!(EncodingName::parse("cp932").unwrap().name(), "Shift_JIS");
        assert_eq!(EncodingName::parse("MS932").unwrap().name(), "Shift_JIS");
        assert_eq!(EncodingName::parse("utf_8").unwrap().name(), "UTF-8");
        assert_eq!(EncodingName::parse("utf-8-sig").unwrap().name(), "UTF-8");
        assert_eq!(EncodingName::parse("UTF_16_LE").unwrap().name(), "UTF-16LE");
        assert_eq!(EncodingName::parse("euc_jp").unwrap().name(), "EUC-JP");
        assert_eq!(EncodingName::parse("cp949").unwrap().name(), "EUC-KR");
    }

    #[test]
    fn test_parse_unknown_label() {
        let err = EncodingName::parse("klingon").unwrap_err();
        assert_eq!(
            err.to_string(),
            "\"klingon\" is not supported as an encoding"
        );
        assert!("iso-2022-kr".parse::<EncodingName>().is_err());
    }

    #[test]
    fn test_decode_strict() {
        let utf8 = EncodingName::default();
        assert!(utf8.decode(&[0xff, 0xfe, 0x41], false).is_none());
        assert_eq!(utf8.decode(b"\xef\xbb\xbfA", true).unwrap(), "A");
        assert_eq!(utf8.decode(b"\xef\xbb\xbfA", false).unwrap(), "\u{feff}A");
    }

    #[test]
    fn test_encode_unmappable() {
        let latin = EncodingName::parse("windows-1252").unwrap();
        assert_eq!(latin.encode("caf\u{e9}").unwrap().as_ref(), b"caf\xe9");
        assert!(latin.encode("\u{3042}").is_none());
    }

    #[test]
    fn test_encode_utf16() {
        let le = EncodingName::parse("utf-16le").unwrap();
        assert_eq!(le.encode("A").unwrap().as_ref(), &[0x41, 0x00]);
        let be = EncodingName::parse("utf-16be").unwrap();
        assert_eq!(be.encode("A").unwrap().as_ref(), &[0x00, 0x41]);
    }
}
