//! Encodings described in Section 12 of Technical Note #5176.
//!
//! An encoding maps character codes to glyphs. Custom encodings map codes to glyph ids
//! directly, the predefined encodings map codes to SIDs which are resolved through the charset.

use std::convert::TryFrom;

use log::debug;

use crate::binary::read::{ReadArrayCow, ReadBinary, ReadCtxt, ReadFrom, ReadScope};
use crate::binary::{U16Be, U8};
use crate::error::ParseError;

use super::charset::{Charset, Range};
use super::SID;

const SUPPLEMENT_FORMAT_MASK: u8 = 0x80;

// Encoding data is located via the offset operand to the Encoding operator in the Top DICT. Only
// one Encoding operator can be specified per font except for CIDFonts which specify no encoding.
#[derive(Clone, Debug)]
pub enum Encoding<'a> {
    Standard,
    Expert,
    Custom(CustomEncoding<'a>),
}

#[derive(Clone, Debug)]
pub enum CustomEncoding<'a> {
    Format0 {
        codes: ReadArrayCow<'a, U8>,
        supplements: ReadArrayCow<'a, Supplement>,
    },
    Format1 {
        ranges: ReadArrayCow<'a, Range<u8, u8>>,
        supplements: ReadArrayCow<'a, Supplement>,
    },
}

/// An additional code for a glyph that is already encoded.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Supplement {
    pub code: u8,
    pub sid: SID,
}

impl ReadFrom for Supplement {
    type ReadType = (U8, U16Be);
    fn read_from((code, sid): (u8, u16)) -> Self {
        Supplement { code, sid }
    }
}

impl<'a> Encoding<'a> {
    /// Read the encoding located by the `Encoding` operand of the Top DICT.
    ///
    /// Returns `None` for CID-keyed fonts and when the operand is absent.
    pub fn read(
        scope: &ReadScope<'a>,
        offset: i32,
        is_cid: bool,
    ) -> Result<Option<Encoding<'a>>, ParseError> {
        if is_cid {
            debug!("CID-keyed font has no encoding");
            return Ok(None);
        }

        match offset {
            -1 => Ok(None),
            0 => Ok(Some(Encoding::Standard)),
            1 => Ok(Some(Encoding::Expert)),
            _ => {
                let offset = usize::try_from(offset)?;
                let custom = scope.offset(offset).read::<CustomEncoding<'_>>()?;
                Ok(Some(Encoding::Custom(custom)))
            }
        }
    }

    /// Map a character code to a glyph id.
    ///
    /// Returns `None` if the code is unencoded or the glyph is not in the font.
    pub fn glyph_id_for_code(&self, code: u8, charset: &Charset<'_>) -> Option<u16> {
        match self {
            Encoding::Standard => {
                standard_encoding_sid(code).and_then(|sid| charset.sid_to_gid(sid))
            }
            Encoding::Expert => expert_encoding_sid(code).and_then(|sid| charset.sid_to_gid(sid)),
            Encoding::Custom(custom) => custom.glyph_id_for_code(code, charset),
        }
    }
}

impl<'b> ReadBinary for CustomEncoding<'b> {
    type HostType<'a> = CustomEncoding<'a>;

    fn read<'a>(ctxt: &mut ReadCtxt<'a>) -> Result<Self::HostType<'a>, ParseError> {
        // The high-order bit of the format byte indicates supplementary codes follow the base
        // table. These are used by fonts with multiply-encoded glyphs.
        let format = ctxt.read::<U8>()?;
        let has_supplements = format & SUPPLEMENT_FORMAT_MASK != 0;
        match format & !SUPPLEMENT_FORMAT_MASK {
            0 => {
                let ncodes = ctxt.read::<U8>()?;
                let codes = ctxt.read_array::<U8>(usize::from(ncodes))?;
                let supplements = read_supplements(ctxt, has_supplements)?;
                Ok(CustomEncoding::Format0 {
                    codes: ReadArrayCow::Borrowed(codes),
                    supplements,
                })
            }
            1 => {
                let nranges = ctxt.read::<U8>()?;
                let ranges = ctxt.read_array::<Range<u8, u8>>(usize::from(nranges))?;
                let supplements = read_supplements(ctxt, has_supplements)?;
                Ok(CustomEncoding::Format1 {
                    ranges: ReadArrayCow::Borrowed(ranges),
                    supplements,
                })
            }
            _ => Err(ParseError::BadValue),
        }
    }
}

fn read_supplements<'a>(
    ctxt: &mut ReadCtxt<'a>,
    has_supplements: bool,
) -> Result<ReadArrayCow<'a, Supplement>, ParseError> {
    if !has_supplements {
        return Ok(ReadArrayCow::Owned(Vec::new()));
    }

    let nsups = ctxt.read::<U8>()?;
    let supplements = ctxt.read_array::<Supplement>(usize::from(nsups))?;
    Ok(ReadArrayCow::Borrowed(supplements))
}

impl<'a> CustomEncoding<'a> {
    pub fn supplements(&self) -> &ReadArrayCow<'a, Supplement> {
        match self {
            CustomEncoding::Format0 { supplements, .. }
            | CustomEncoding::Format1 { supplements, .. } => supplements,
        }
    }

    pub fn glyph_id_for_code(&self, code: u8, charset: &Charset<'_>) -> Option<u16> {
        // Supplements are applied after the base table so they take precedence
        if let Some(supplement) = self
            .supplements()
            .iter()
            .find(|supplement| supplement.code == code)
        {
            return charset.sid_to_gid(supplement.sid);
        }

        // Glyph id 0 (.notdef) is never encoded so the tables begin with glyph id 1
        match self {
            CustomEncoding::Format0 { codes, .. } => codes
                .iter()
                .position(|candidate| candidate == code)
                .and_then(|index| u16::try_from(index + 1).ok()),
            CustomEncoding::Format1 { ranges, .. } => {
                let mut glyph_id = 1usize;
                for range in ranges.iter() {
                    let first = usize::from(range.first);
                    let code = usize::from(code);
                    if first <= code && code < first + range.len() {
                        return u16::try_from(glyph_id + (code - first)).ok();
                    }
                    glyph_id += range.len();
                }
                None
            }
        }
    }
}

/// The SID the Standard encoding assigns to `code`, `None` if unencoded.
pub fn standard_encoding_sid(code: u8) -> Option<SID> {
    match STANDARD_ENCODING[usize::from(code)] {
        0 => None,
        sid => Some(SID::from(sid)),
    }
}

/// The SID the Expert encoding assigns to `code`, `None` if unencoded.
pub fn expert_encoding_sid(code: u8) -> Option<SID> {
    match EXPERT_ENCODING[usize::from(code)] {
        0 => None,
        sid => Some(sid),
    }
}

const STANDARD_ENCODING: [u8; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
    25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47,
    48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70,
    71, 72, 73, 74, 75, 76, 77, 78, 79, 80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 91, 92, 93,
    94, 95, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 96, 97, 98, 99, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 0,
    111, 112, 113, 114, 0, 115, 116, 117, 118, 119, 120, 121, 122, 0, 123, 0, 124, 125, 126,
    127, 128, 129, 130, 131, 0, 132, 133, 0, 134, 135, 136, 137, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 138, 0, 139, 0, 0, 0, 0, 140, 141, 142, 143, 0, 0, 0, 0, 0, 144, 0, 0, 0,
    145, 0, 0, 146, 147, 148, 149, 0, 0, 0, 0,
];

const EXPERT_ENCODING: [u16; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 229, 230, 0, 231, 232, 233, 234, 235, 236, 237, 238, 13, 14, 15, 99, 239, 240, 241,
    242, 243, 244, 245, 246, 247, 248, 27, 28, 249, 250, 251, 252, 0, 253, 254, 255, 256, 257,
    0, 0, 0, 258, 0, 0, 259, 260, 261, 262, 0, 0, 263, 264, 265, 0, 266, 109, 110, 267, 268,
    269, 0, 270, 271, 272, 273, 274, 275, 276, 277, 278, 279, 280, 281, 282, 283, 284, 285, 286,
    287, 288, 289, 290, 291, 292, 293, 294, 295, 296, 297, 298, 299, 300, 301, 302, 303, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 304, 305, 306, 0, 0, 307, 308, 309, 310, 311, 0, 312, 0, 0, 313, 0, 0, 314, 315, 0, 0,
    316, 317, 318, 0, 0, 0, 158, 155, 163, 319, 320, 321, 322, 323, 324, 325, 0, 0, 326, 150,
    164, 169, 327, 328, 329, 330, 331, 332, 333, 334, 335, 336, 337, 338, 339, 340, 341, 342,
    343, 344, 345, 346, 347, 348, 349, 350, 351, 352, 353, 354, 355, 356, 357, 358, 359, 360,
    361, 362, 363, 364, 365, 366, 367, 368, 369, 370, 371, 372, 373, 374, 375, 376, 377, 378,
];

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_read_custom_encoding_format0() {
        let data_format0 = [0, 3, 4, 5, 6];
        let mut ctxt = ReadScope::new(&data_format0).ctxt();
        let format0_encoding = ctxt.read::<CustomEncoding<'_>>().unwrap();
        match format0_encoding {
            CustomEncoding::Format0 { codes, supplements } => {
                assert_eq!(codes.iter().collect_vec(), vec![4, 5, 6]);
                assert!(supplements.is_empty());
            }
            _ => panic!("expected CustomEncoding::Format0 got something else"),
        }
    }

    #[test]
    fn test_read_custom_encoding_format1() {
        let data_format1 = [1, 2, 4, 5, 6, 7];
        let mut ctxt = ReadScope::new(&data_format1).ctxt();
        let format1_encoding = ctxt.read::<CustomEncoding<'_>>().unwrap();
        match format1_encoding {
            CustomEncoding::Format1 { ranges, .. } => assert_eq!(
                ranges.iter().collect_vec(),
                vec![
                    Range {
                        first: 4,
                        n_left: 5
                    },
                    Range {
                        first: 6,
                        n_left: 7
                    }
                ]
            ),
            _ => panic!("expected CustomEncoding::Format1 got something else"),
        }
    }

    #[test]
    fn test_read_custom_encoding_bad_format() {
        let data = [2, 0];
        assert_eq!(
            ReadScope::new(&data).read::<CustomEncoding<'_>>().err(),
            Some(ParseError::BadValue)
        );
    }

    #[test]
    fn test_format0_glyph_id_for_code() {
        let data = [0, 3, 0x41, 0x42, 0x43];
        let encoding = ReadScope::new(&data).read::<CustomEncoding<'_>>().unwrap();
        let charset = Charset::ISOAdobe;
        assert_eq!(encoding.glyph_id_for_code(0x41, &charset), Some(1));
        assert_eq!(encoding.glyph_id_for_code(0x43, &charset), Some(3));
        assert_eq!(encoding.glyph_id_for_code(0x44, &charset), None);
    }

    #[test]
    fn test_format1_glyph_id_for_code() {
        // A..C then a..b
        let data = [1, 2, 0x41, 2, 0x61, 1];
        let encoding = ReadScope::new(&data).read::<CustomEncoding<'_>>().unwrap();
        let charset = Charset::ISOAdobe;
        assert_eq!(encoding.glyph_id_for_code(0x41, &charset), Some(1));
        assert_eq!(encoding.glyph_id_for_code(0x43, &charset), Some(3));
        assert_eq!(encoding.glyph_id_for_code(0x61, &charset), Some(4));
        assert_eq!(encoding.glyph_id_for_code(0x62, &charset), Some(5));
        assert_eq!(encoding.glyph_id_for_code(0x44, &charset), None);
        assert_eq!(encoding.glyph_id_for_code(0x63, &charset), None);
    }

    #[test]
    fn test_supplements() {
        // Format 0 with the supplement bit set, then one supplement mapping space to SID 34
        let data = [0x80, 2, 0x41, 0x42, 1, 0x20, 0x00, 0x22];
        let encoding = ReadScope::new(&data).read::<CustomEncoding<'_>>().unwrap();
        assert_eq!(
            encoding.supplements().iter().collect_vec(),
            vec![Supplement {
                code: 0x20,
                sid: 34
            }]
        );
        let charset = Charset::ISOAdobe;
        assert_eq!(encoding.glyph_id_for_code(0x41, &charset), Some(1));
        assert_eq!(encoding.glyph_id_for_code(0x20, &charset), Some(34));
    }

    #[test]
    fn test_truncated_supplements() {
        let data = [0x81, 1, 0x41, 0, 1, 0x20, 0x00];
        assert_eq!(
            ReadScope::new(&data).read::<CustomEncoding<'_>>().err(),
            Some(ParseError::BadEof)
        );
    }

    #[test]
    fn test_predefined_encodings() {
        assert_eq!(standard_encoding_sid(0x41), Some(34));
        assert_eq!(standard_encoding_sid(0x20), Some(1));
        assert_eq!(standard_encoding_sid(0x7F), None);
        assert_eq!(expert_encoding_sid(0x20), Some(1));
        assert_eq!(expert_encoding_sid(0x21), Some(229));

        let charset = Charset::ISOAdobe;
        assert_eq!(
            Encoding::Standard.glyph_id_for_code(0x41, &charset),
            Some(34)
        );
        assert_eq!(Encoding::Standard.glyph_id_for_code(0, &charset), None);
        assert_eq!(
            Encoding::Expert.glyph_id_for_code(0x21, &Charset::Expert),
            Some(2)
        );
    }

    #[test]
    fn test_read_encoding() {
        let scope = ReadScope::new(&[0xFF, 0xFF, 0, 1, 0x41]);
        assert!(Encoding::read(&scope, -1, false).unwrap().is_none());
        assert!(Encoding::read(&scope, 5, true).unwrap().is_none());
        assert!(matches!(
            Encoding::read(&scope, 0, false),
            Ok(Some(Encoding::Standard))
        ));
        assert!(matches!(
            Encoding::read(&scope, 1, false),
            Ok(Some(Encoding::Expert))
        ));
        let custom = Encoding::read(&scope, 2, false).unwrap();
        assert!(matches!(custom, Some(Encoding::Custom(_))));
    }
}
