//! Font DICT select as described in Section 19 of Technical Note #5176.
//!
//! CID-keyed fonts carry an array of Font DICTs, each with its own Private DICT and local
//! subroutines. FDSelect assigns every glyph to one of them.

use std::iter;

use itertools::Itertools;

use crate::binary::read::{ReadArrayCow, ReadBinaryDep, ReadCtxt};
use crate::binary::{U16Be, U8};
use crate::error::ParseError;

use super::charset::Range;

#[derive(Clone, Debug)]
pub enum FDSelect<'a> {
    Format0 {
        glyph_font_dict_indices: ReadArrayCow<'a, U8>,
    },
    // Formats 1 and 2 are not defined
    Format3 {
        ranges: ReadArrayCow<'a, Range<u16, u8>>,
        sentinel: u16,
    },
}

impl<'b> ReadBinaryDep for FDSelect<'b> {
    type Args<'a> = usize;
    type HostType<'a> = FDSelect<'a>;

    fn read_dep<'a>(
        ctxt: &mut ReadCtxt<'a>,
        n_glyphs: usize,
    ) -> Result<Self::HostType<'a>, ParseError> {
        match ctxt.read::<U8>()? {
            0 => {
                let glyph_font_dict_indices = ctxt.read_array::<U8>(n_glyphs)?;
                Ok(FDSelect::Format0 {
                    glyph_font_dict_indices: ReadArrayCow::Borrowed(glyph_font_dict_indices),
                })
            }
            3 => {
                let nranges = usize::from(ctxt.read::<U16Be>()?);
                let ranges = ctxt.read_array(nranges)?;
                let sentinel = ctxt.read::<U16Be>()?;
                Ok(FDSelect::Format3 {
                    ranges: ReadArrayCow::Borrowed(ranges),
                    sentinel,
                })
            }
            _ => Err(ParseError::BadValue),
        }
    }
}

impl<'a> FDSelect<'a> {
    /// Returns the index of the Font DICT for the supplied `glyph_id`.
    ///
    /// Format 0 falls back to the first Font DICT for glyphs it does not list. Format 3
    /// returns `None` for glyphs at or beyond the sentinel.
    pub fn font_dict_index(&self, glyph_id: u16) -> Option<u8> {
        match self {
            FDSelect::Format0 {
                glyph_font_dict_indices,
            } => Some(
                glyph_font_dict_indices
                    .get_item(usize::from(glyph_id))
                    .unwrap_or(0),
            ),
            FDSelect::Format3 { ranges, sentinel } => {
                if glyph_id >= *sentinel {
                    return None;
                }

                let range_windows = ranges
                    .iter()
                    .map(|Range { first, n_left }| (first, n_left))
                    .chain(iter::once((*sentinel, 0)))
                    .tuple_windows();

                for ((first, fd_index), (last, _)) in range_windows {
                    if glyph_id >= first && glyph_id < last {
                        return Some(fd_index);
                    }
                }

                Some(0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::read::ReadScope;

    #[test]
    fn test_fd_select_font_dict_index_format0() {
        let glyph_font_dict_indices = ReadArrayCow::Owned(vec![1, 2, 3]);
        let fd_select = FDSelect::Format0 {
            glyph_font_dict_indices,
        };

        assert_eq!(fd_select.font_dict_index(2), Some(3));
        assert_eq!(fd_select.font_dict_index(3), Some(0));
    }

    #[test]
    fn test_fd_select_font_dict_index_format3() {
        // Set up 3 ranges:
        //  0..10 -> Font DICT index 2
        // 10..17 -> Font DICT index 1
        // 17..33 -> Font DICT index 0
        let ranges: Vec<Range<u16, u8>> = vec![
            Range {
                first: 0,
                n_left: 2,
            },
            Range {
                first: 10,
                n_left: 1,
            },
            Range {
                first: 17,
                n_left: 0,
            },
        ];
        let fd_select = FDSelect::Format3 {
            ranges: ReadArrayCow::Owned(ranges),
            sentinel: 33,
        };

        assert_eq!(fd_select.font_dict_index(2), Some(2));
        assert_eq!(fd_select.font_dict_index(10), Some(1));
        assert_eq!(fd_select.font_dict_index(32), Some(0));
        assert_eq!(fd_select.font_dict_index(33), None);
    }

    #[test]
    fn test_read_fd_select_format3_boundaries() {
        // Two ranges, (0, fd 0) and (5, fd 1), with sentinel 10
        let data = [3, 0, 2, 0, 0, 0, 0, 5, 1, 0, 10];
        let fd_select = ReadScope::new(&data)
            .ctxt()
            .read_dep::<FDSelect<'_>>(10)
            .unwrap();

        assert_eq!(fd_select.font_dict_index(4), Some(0));
        assert_eq!(fd_select.font_dict_index(5), Some(1));
        assert_eq!(fd_select.font_dict_index(9), Some(1));
        assert_eq!(fd_select.font_dict_index(10), None);
    }

    #[test]
    fn test_read_fd_select_format0() {
        let data = [0, 0, 1, 1];
        let fd_select = ReadScope::new(&data)
            .ctxt()
            .read_dep::<FDSelect<'_>>(3)
            .unwrap();

        assert_eq!(fd_select.font_dict_index(0), Some(0));
        assert_eq!(fd_select.font_dict_index(2), Some(1));
    }

    #[test]
    fn test_read_fd_select_bad_format() {
        let data = [1, 0, 0];
        assert_eq!(
            ReadScope::new(&data)
                .ctxt()
                .read_dep::<FDSelect<'_>>(1)
                .err(),
            Some(ParseError::BadValue)
        );
    }
}
