//! CFF font handling.
//!
//! Refer to [Technical Note #5176](http://wwwimages.adobe.com/content/dam/Adobe/en/devnet/font/pdfs/5176.CFF.pdf)
//! for more information.

use std::borrow::Cow;
use std::convert::TryFrom;
use std::fmt;

use byteorder::{BigEndian, ByteOrder};
use log::{debug, warn};
use rustc_hash::FxHashMap;

use crate::binary::read::{ReadBinary, ReadBinaryDep, ReadCtxt, ReadScope};
use crate::error::{CFFParseError, ParseError, ResultExt, Structure};

mod charset;
pub mod charstring;
mod dict;
mod encoding;
mod fd_select;
#[cfg(feature = "outline")]
pub mod outline;
mod token;

pub use charset::{Charset, CustomCharset, Range};
pub use charstring::{calc_subroutine_bias, GlyphError};
pub use dict::{
    delta_decode, Dict, DictOperator, Operand, PrivateDict, PrivateDictOperator, Ros, TopDict,
    TopDictOperator, MAX_OPERANDS,
};
pub use encoding::{
    expert_encoding_sid, standard_encoding_sid, CustomEncoding, Encoding, Supplement,
};
pub use fd_select::FDSelect;
pub use token::{esc, read_token, Context, Real, StackEffect, Token, TWO_BYTE_OPERATOR_MARK};

/// String identifier, an index into the standard strings followed by the String INDEX.
pub type SID = u16;

/// Top level representation of a CFF font set.
///
/// Refer to Technical Note #5176
#[derive(Clone, Debug)]
pub struct CFF<'a> {
    pub header: Header,
    pub name_index: Index<'a>,
    pub strings: StringTable<'a>,
    pub global_subr_index: Index<'a>,
    pub fonts: Vec<Font<'a>>,
}

/// CFF Font Header described in Section 6 of Technical Note #5176
#[derive(Clone, Debug, PartialEq)]
pub struct Header {
    pub major: u8,
    pub minor: u8,
    pub hdr_size: u8,
    pub off_size: u8,
}

/// A CFF INDEX described in Section 5 of Technical Note #5176
#[derive(Copy, Clone)]
pub struct Index<'a> {
    pub count: usize,
    off_size: u8,
    offset_array: &'a [u8],
    data_array: &'a [u8],
}

/// The standard strings overlaid with the String INDEX of a font set.
#[derive(Copy, Clone, Debug)]
pub struct StringTable<'a> {
    index: Index<'a>,
}

/// A single font within a CFF font set
#[derive(Clone, Debug)]
pub struct Font<'a> {
    pub name: String,
    pub top_dict: TopDict,
    /// The Private DICT of the font. For CID-keyed fonts this is only used for glyphs that
    /// FDSelect does not assign to a Font DICT.
    pub private_dict: PrivateDict,
    pub char_strings_index: Index<'a>,
    pub charset: Charset<'a>,
    pub encoding: Option<Encoding<'a>>,
    pub local_subr_index: Option<Index<'a>>,
    pub global_subr_index: Index<'a>,
    pub variant: CFFVariant<'a>,
    strings: StringTable<'a>,
    glyph_ids: FxHashMap<String, u16>,
}

#[derive(Clone, Debug)]
pub enum CFFVariant<'a> {
    Type1,
    CID(CIDData<'a>),
}

/// The Font DICTs and FDSelect of a CID-keyed font.
#[derive(Clone, Debug)]
pub struct CIDData<'a> {
    pub font_dicts: Vec<CIDFontDict<'a>>,
    pub fd_select: FDSelect<'a>,
}

/// An entry of the Font DICT INDEX with its Private DICT and local subroutines.
#[derive(Clone, Debug)]
pub struct CIDFontDict<'a> {
    pub font_name: Option<String>,
    pub private_dict: PrivateDict,
    pub local_subr_index: Option<Index<'a>>,
}

/// The subroutines in force for a particular glyph.
#[derive(Copy, Clone, Debug)]
pub struct SubroutineSet<'a> {
    pub global: Index<'a>,
    pub local: Option<Index<'a>>,
}

impl<'a> CFF<'a> {
    /// Parse a CFF font set from `data`.
    pub fn parse(data: &'a [u8]) -> Result<CFF<'a>, CFFParseError> {
        // Offsets in the Top DICT are relative to the start of the CFF data
        let scope = ReadScope::new(data);
        let mut ctxt = scope.ctxt();

        let header = ctxt.read::<Header>().context(Structure::Header, 0)?;
        let name_index = read_index(&mut ctxt, Structure::NameIndex)?;
        let top_dict_index_offset = ctxt.position();
        let top_dict_index = read_index(&mut ctxt, Structure::TopDictIndex)?;
        let strings = StringTable::new(read_index(&mut ctxt, Structure::StringIndex)?);
        let global_subr_index = read_index(&mut ctxt, Structure::GlobalSubrIndex)?;

        let mut fonts = Vec::with_capacity(name_index.count);
        for (font_index, name) in name_index.iter().enumerate() {
            // Deleted fonts keep their entry in the Name INDEX with a leading NUL
            if name.first() == Some(&0) {
                debug!("skipping deleted font at index {}", font_index);
                continue;
            }

            let top_dict_data = top_dict_index
                .read_object(font_index)
                .ok_or(ParseError::BadIndex)
                .context(Structure::TopDictIndex, top_dict_index_offset)?;
            let font = Font::read(
                &scope,
                String::from_utf8_lossy(name).into_owned(),
                (top_dict_data, top_dict_index_offset),
                strings,
                global_subr_index,
            )?;
            fonts.push(font);
        }

        Ok(CFF {
            header,
            name_index,
            strings,
            global_subr_index,
            fonts,
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Look up a font by the name it has in the Name INDEX.
    pub fn font(&self, name: &str) -> Option<&Font<'a>> {
        self.fonts.iter().find(|font| font.name == name)
    }

    pub fn first_font(&self) -> Option<&Font<'a>> {
        self.fonts.first()
    }

    pub fn fonts(&self) -> impl Iterator<Item = &Font<'a>> {
        self.fonts.iter()
    }

    /// Read a string with the given SID from the String INDEX
    pub fn read_string(&self, sid: SID) -> Result<&'a str, ParseError> {
        self.strings.get(sid)
    }
}

impl ReadBinary for Header {
    type HostType<'b> = Self;

    fn read(ctxt: &mut ReadCtxt<'_>) -> Result<Self, ParseError> {
        // From section 6 of Technical Note #5176:
        // If the major version number is understood by an implementation it can safely proceed
        // with reading the font. The minor version number indicates extensions to the format
        // that are undetectable by implementations that do not support them.
        let major = ctxt.read_u8()?;
        if major != 1 {
            return Err(ParseError::BadVersion);
        }
        let minor = ctxt.read_u8()?;
        let hdr_size = ctxt.read_u8()?;
        let off_size = ctxt.read_u8()?;

        ctxt.check(hdr_size >= 4)?;
        ctxt.check((1..=4).contains(&off_size))?;

        let _unknown = ctxt.read_slice(usize::from(hdr_size - 4))?;

        Ok(Header {
            major,
            minor,
            hdr_size,
            off_size,
        })
    }
}

impl<'b> ReadBinary for Index<'b> {
    type HostType<'a> = Index<'a>;

    fn read<'a>(ctxt: &mut ReadCtxt<'a>) -> Result<Self::HostType<'a>, ParseError> {
        let count = usize::from(ctxt.read_u16be()?);
        if count == 0 {
            return Ok(Index::empty());
        }

        let off_size = ctxt.read_u8()?;
        ctxt.check((1..=4).contains(&off_size))?;

        let offset_array_size = (count + 1) * usize::from(off_size);
        let offset_array = ctxt.read_slice(offset_array_size)?;

        // Offsets start at 1 and may not decrease, so every object has a non-negative length
        let mut previous = 1;
        for index in 0..=count {
            let offset =
                lookup_offset_index(off_size, offset_array, index).ok_or(ParseError::BadOffset)?;
            if (index == 0 && offset != 1) || offset < previous {
                return Err(ParseError::BadOffset);
            }
            previous = offset;
        }

        let data_array = ctxt.read_slice(previous - 1)?;

        Ok(Index {
            count,
            off_size,
            offset_array,
            data_array,
        })
    }
}

impl<'a> Index<'a> {
    /// An INDEX without any objects.
    pub const fn empty() -> Self {
        Index {
            count: 0,
            off_size: 1,
            offset_array: &[],
            data_array: &[],
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn read_object(&self, index: usize) -> Option<&'a [u8]> {
        if index >= self.count {
            return None;
        }

        let start = lookup_offset_index(self.off_size, self.offset_array, index)?.checked_sub(1)?;
        let end = lookup_offset_index(self.off_size, self.offset_array, index + 1)?.checked_sub(1)?;
        self.data_array.get(start..end)
    }

    pub fn read<T: ReadBinaryDep<Args<'a> = ()>>(
        &self,
        index: usize,
    ) -> Result<T::HostType<'a>, ParseError> {
        let data = self.read_object(index).ok_or(ParseError::BadIndex)?;
        ReadScope::new(data).read_dep::<T>(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a [u8]> {
        let index = *self;
        (0..index.count).filter_map(move |i| index.read_object(i))
    }

    /// Returns the size of the data held by this INDEX.
    pub fn data_len(&self) -> usize {
        self.data_array.len()
    }
}

impl fmt::Debug for Index<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Index")
            .field("count", &self.count)
            .field("off_size", &self.off_size)
            .field("data_len", &self.data_array.len())
            .finish()
    }
}

impl<'a> StringTable<'a> {
    pub fn new(index: Index<'a>) -> Self {
        StringTable { index }
    }

    /// Read a string with the given SID.
    pub fn get(&self, sid: SID) -> Result<&'a str, ParseError> {
        let sid = usize::from(sid);
        // Test if SID is in standard range then fetch from the internal table, otherwise fetch
        // the string from the String INDEX using a value of (SID – nStdStrings) as the index
        match STANDARD_STRINGS.get(sid) {
            Some(string) => Ok(string),
            None => {
                let bytes = self
                    .index
                    .read_object(sid - STANDARD_STRINGS.len())
                    .ok_or(ParseError::BadIndex)?;
                std::str::from_utf8(bytes).map_err(|_utf8_err| ParseError::BadValue)
            }
        }
    }

    /// Read a string with the given SID, substituting a placeholder if it does not exist.
    pub fn name(&self, sid: SID) -> Cow<'a, str> {
        match self.get(sid) {
            Ok(string) => Cow::from(string),
            Err(_) => Cow::from(format!("SID{}", sid)),
        }
    }

    /// The number of strings, standard strings included.
    pub fn count(&self) -> usize {
        STANDARD_STRINGS.len() + self.index.count
    }
}

impl<'a> Font<'a> {
    fn read(
        scope: &ReadScope<'a>,
        name: String,
        (top_dict_data, top_dict_offset): (&'a [u8], usize),
        strings: StringTable<'a>,
        global_subr_index: Index<'a>,
    ) -> Result<Font<'a>, CFFParseError> {
        let top_dict = TopDict::read(ReadScope::new(top_dict_data), &strings)
            .context(Structure::TopDict, top_dict_offset)?;
        // Synthetic fonts and Type 1 charstrings are not supported
        if top_dict.synthetic_base.is_some() || top_dict.charstring_type != 2 {
            return Err(ParseError::NotImplemented).context(Structure::TopDict, top_dict_offset);
        }

        let offset = top_dict.char_strings;
        let char_strings_index = required_offset(offset)
            .and_then(|offset| offset_scope(scope, offset))
            .and_then(|scope| scope.read::<Index<'_>>())
            .context(Structure::CharStringsIndex, location(offset))?;
        let n_glyphs = char_strings_index.count;

        let (private_dict, local_subr_index) = read_private_dict(scope, top_dict.private)?;

        let charset = Charset::read(scope, top_dict.charset, top_dict.is_cid, n_glyphs)
            .context(Structure::Charset, location(top_dict.charset))?;
        let encoding = Encoding::read(scope, top_dict.encoding, top_dict.is_cid)
            .context(Structure::Encoding, location(top_dict.encoding))?;

        let variant = if top_dict.is_cid {
            CFFVariant::CID(read_cid_data(scope, &top_dict, n_glyphs, &strings)?)
        } else {
            CFFVariant::Type1
        };

        let mut font = Font {
            name,
            top_dict,
            private_dict,
            char_strings_index,
            charset,
            encoding,
            local_subr_index,
            global_subr_index,
            variant,
            strings,
            glyph_ids: FxHashMap::default(),
        };
        // Iterate in reverse so the first glyph with a given name wins
        font.glyph_ids = (0..font.num_glyphs())
            .rev()
            .filter_map(|glyph_id| Some((font.glyph_name(glyph_id)?, glyph_id)))
            .collect();

        Ok(font)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn top_dict(&self) -> &TopDict {
        &self.top_dict
    }

    /// The transform from glyph space to text space, `[a b c d e f]`.
    pub fn font_matrix(&self) -> [f64; 6] {
        self.top_dict.font_matrix
    }

    pub fn weight(&self) -> Option<&str> {
        self.top_dict.weight.as_deref()
    }

    pub fn num_glyphs(&self) -> u16 {
        // The CharStrings INDEX count is a u16
        u16::try_from(self.char_strings_index.count).unwrap_or(u16::MAX)
    }

    pub fn is_cid(&self) -> bool {
        match self.variant {
            CFFVariant::CID(_) => true,
            CFFVariant::Type1 => false,
        }
    }

    /// Returns the name of a glyph.
    ///
    /// Glyphs of CID-keyed fonts are named after their CID, for example `cid00042`.
    pub fn glyph_name(&self, glyph_id: u16) -> Option<String> {
        if glyph_id >= self.num_glyphs() {
            return None;
        }

        let id = self.charset.id_for_glyph(glyph_id)?;
        if self.is_cid() {
            Some(format!("cid{:05}", id))
        } else {
            Some(self.strings.name(id).into_owned())
        }
    }

    pub fn glyph_id(&self, name: &str) -> Option<u16> {
        self.glyph_ids.get(name).copied()
    }

    /// Returns the glyph id of `name`, or `.notdef` if there is no such glyph.
    pub fn glyph_id_or_notdef(&self, name: &str) -> Result<u16, GlyphError> {
        match self.glyph_id(name) {
            Some(glyph_id) => Ok(glyph_id),
            None if self.num_glyphs() > 0 => {
                warn!("glyph {} not found in {}, using .notdef", name, self.name);
                Ok(0)
            }
            None => Err(GlyphError::MissingGlyph(name.to_string())),
        }
    }

    /// Map a character code to a glyph id through the encoding of the font.
    pub fn glyph_id_for_code(&self, code: u8) -> Option<u16> {
        self.encoding
            .as_ref()?
            .glyph_id_for_code(code, &self.charset)
    }

    pub fn char_string(&self, glyph_id: u16) -> Option<&'a [u8]> {
        self.char_strings_index.read_object(usize::from(glyph_id))
    }

    /// Returns the Font DICT that governs `glyph_id` in a CID-keyed font.
    pub fn font_dict(&self, glyph_id: u16) -> Option<&CIDFontDict<'a>> {
        match &self.variant {
            CFFVariant::CID(cid) => {
                let index = cid.fd_select.font_dict_index(glyph_id)?;
                cid.font_dicts.get(usize::from(index))
            }
            CFFVariant::Type1 => None,
        }
    }

    /// Returns the Private DICT that governs `glyph_id`.
    pub fn private_dict(&self, glyph_id: u16) -> &PrivateDict {
        self.font_dict(glyph_id)
            .map_or(&self.private_dict, |font_dict| &font_dict.private_dict)
    }

    pub fn default_width_x(&self, glyph_id: u16) -> f64 {
        self.private_dict(glyph_id).default_width_x
    }

    pub fn nominal_width_x(&self, glyph_id: u16) -> f64 {
        self.private_dict(glyph_id).nominal_width_x
    }

    /// Returns the global and local subroutines used by the charstring of `glyph_id`.
    ///
    /// CID-keyed fonts use the local subroutines of the Font DICT of the glyph, falling back to
    /// the local subroutines of the font when the Font DICT has none.
    pub fn subroutines(&self, glyph_id: u16) -> SubroutineSet<'a> {
        let local = self
            .font_dict(glyph_id)
            .and_then(|font_dict| font_dict.local_subr_index)
            .or(self.local_subr_index);

        SubroutineSet {
            global: self.global_subr_index,
            local,
        }
    }

    /// Interpret the charstring of `glyph_id`, returning its advance width.
    pub fn advance_width(&self, glyph_id: u16) -> Result<f32, GlyphError> {
        let mut ctxt = charstring::CharStringVisitorContext::new(self, glyph_id);
        ctxt.run(&mut charstring::NullVisitor)?;
        Ok(ctxt.width())
    }
}

impl<'a> SubroutineSet<'a> {
    pub fn global_bias(&self) -> u16 {
        calc_subroutine_bias(self.global.count)
    }

    /// The local subroutine bias, `None` if there are no local subroutines.
    pub fn local_bias(&self) -> Option<u16> {
        self.local.map(|local| calc_subroutine_bias(local.count))
    }
}

fn read_index<'a>(
    ctxt: &mut ReadCtxt<'a>,
    structure: Structure,
) -> Result<Index<'a>, CFFParseError> {
    let offset = ctxt.position();
    ctxt.read::<Index<'_>>().context(structure, offset)
}

/// Convert an offset operand that must be present.
fn required_offset(offset: i32) -> Result<usize, ParseError> {
    usize::try_from(offset).map_err(|_| ParseError::MissingValue)
}

/// A `ReadScope` starting `offset` bytes into `scope`.
fn offset_scope<'a>(scope: &ReadScope<'a>, offset: usize) -> Result<ReadScope<'a>, ParseError> {
    if offset > scope.data().len() {
        return Err(ParseError::BadOffset);
    }
    Ok(scope.offset(offset))
}

/// Location of a structure for error reporting.
fn location(offset: i32) -> usize {
    usize::try_from(offset).unwrap_or(0)
}

/// Read a Private DICT and the local subroutines it refers to.
///
/// `private` is the `(size, offset)` operand pair of the `Private` operator.
fn read_private_dict<'a>(
    scope: &ReadScope<'a>,
    private: Option<(usize, usize)>,
) -> Result<(PrivateDict, Option<Index<'a>>), CFFParseError> {
    let (size, offset) = match private {
        Some((size, offset)) if size > 0 => (size, offset),
        _ => return Ok((PrivateDict::default(), None)),
    };

    let private_dict = scope
        .offset_length(offset, size)
        .and_then(PrivateDict::read)
        .context(Structure::PrivateDict, offset)?;

    // The local subrs offset is relative to the beginning of the Private DICT data
    let local_subr_index = match private_dict.subrs {
        Some(subrs) => {
            let local_offset = usize::try_from(subrs)
                .ok()
                .and_then(|subrs| offset.checked_add(subrs))
                .ok_or(ParseError::BadOffset)
                .context(Structure::LocalSubrIndex, offset)?;
            let index = offset_scope(scope, local_offset)
                .and_then(|scope| scope.read::<Index<'_>>())
                .context(Structure::LocalSubrIndex, local_offset)?;
            Some(index)
        }
        None => None,
    };

    Ok((private_dict, local_subr_index))
}

fn read_cid_data<'a>(
    scope: &ReadScope<'a>,
    top_dict: &TopDict,
    n_glyphs: usize,
    strings: &StringTable<'a>,
) -> Result<CIDData<'a>, CFFParseError> {
    // Each Font DICT in the FDArray specifies information unique to a particular group of
    // glyphs in the font
    let offset = top_dict.fd_array;
    let font_dict_index = required_offset(offset)
        .and_then(|offset| offset_scope(scope, offset))
        .and_then(|scope| scope.read::<Index<'_>>())
        .context(Structure::FontDictIndex, location(offset))?;

    let offset = top_dict.fd_select;
    let fd_select = required_offset(offset)
        .and_then(|offset| offset_scope(scope, offset))
        .and_then(|scope| scope.read_dep::<FDSelect<'_>>(n_glyphs))
        .context(Structure::FDSelect, location(offset))?;

    let mut font_dicts = Vec::with_capacity(font_dict_index.count);
    for (index, object) in font_dict_index.iter().enumerate() {
        let font_dict = TopDict::read(ReadScope::new(object), strings)
            .context(Structure::FontDict, location(top_dict.fd_array))?;
        if font_dict.private.is_none() {
            debug!("Font DICT {} has no Private DICT", index);
        }

        let (private_dict, local_subr_index) = read_private_dict(scope, font_dict.private)?;
        font_dicts.push(CIDFontDict {
            font_name: font_dict.font_name,
            private_dict,
            local_subr_index,
        });
    }

    Ok(CIDData {
        font_dicts,
        fd_select,
    })
}

fn lookup_offset_index(off_size: u8, offset_array: &[u8], index: usize) -> Option<usize> {
    let start = index * usize::from(off_size);
    let buf = offset_array.get(start..start + usize::from(off_size))?;
    match off_size {
        1 => Some(usize::from(buf[0])),
        2 => Some(usize::from(BigEndian::read_u16(buf))),
        3 => usize::try_from(BigEndian::read_u24(buf)).ok(),
        4 => usize::try_from(BigEndian::read_u32(buf)).ok(),
        _ => None,
    }
}

pub(crate) const STANDARD_STRINGS: [&str; 391] = [
    ".notdef", "space", "exclam", "quotedbl", "numbersign", "dollar", "percent", "ampersand",
    "quoteright", "parenleft", "parenright", "asterisk", "plus", "comma", "hyphen", "period",
    "slash", "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    "colon", "semicolon", "less", "equal", "greater", "question", "at", "A", "B", "C", "D", "E",
    "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W",
    "X", "Y", "Z", "bracketleft", "backslash", "bracketright", "asciicircum", "underscore",
    "quoteleft", "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p",
    "q", "r", "s", "t", "u", "v", "w", "x", "y", "z", "braceleft", "bar", "braceright",
    "asciitilde", "exclamdown", "cent", "sterling", "fraction", "yen", "florin", "section",
    "currency", "quotesingle", "quotedblleft", "guillemotleft", "guilsinglleft",
    "guilsinglright", "fi", "fl", "endash", "dagger", "daggerdbl", "periodcentered",
    "paragraph", "bullet", "quotesinglbase", "quotedblbase", "quotedblright", "guillemotright",
    "ellipsis", "perthousand", "questiondown", "grave", "acute", "circumflex", "tilde",
    "macron", "breve", "dotaccent", "dieresis", "ring", "cedilla", "hungarumlaut", "ogonek",
    "caron", "emdash", "AE", "ordfeminine", "Lslash", "Oslash", "OE", "ordmasculine", "ae",
    "dotlessi", "lslash", "oslash", "oe", "germandbls", "onesuperior", "logicalnot", "mu",
    "trademark", "Eth", "onehalf", "plusminus", "Thorn", "onequarter", "divide", "brokenbar",
    "degree", "thorn", "threequarters", "twosuperior", "registered", "minus", "eth", "multiply",
    "threesuperior", "copyright", "Aacute", "Acircumflex", "Adieresis", "Agrave", "Aring",
    "Atilde", "Ccedilla", "Eacute", "Ecircumflex", "Edieresis", "Egrave", "Iacute",
    "Icircumflex", "Idieresis", "Igrave", "Ntilde", "Oacute", "Ocircumflex", "Odieresis",
    "Ograve", "Otilde", "Scaron", "Uacute", "Ucircumflex", "Udieresis", "Ugrave", "Yacute",
    "Ydieresis", "Zcaron", "aacute", "acircumflex", "adieresis", "agrave", "aring", "atilde",
    "ccedilla", "eacute", "ecircumflex", "edieresis", "egrave", "iacute", "icircumflex",
    "idieresis", "igrave", "ntilde", "oacute", "ocircumflex", "odieresis", "ograve", "otilde",
    "scaron", "uacute", "ucircumflex", "udieresis", "ugrave", "yacute", "ydieresis", "zcaron",
    "exclamsmall", "Hungarumlautsmall", "dollaroldstyle", "dollarsuperior", "ampersandsmall",
    "Acutesmall", "parenleftsuperior", "parenrightsuperior", "twodotenleader", "onedotenleader",
    "zerooldstyle", "oneoldstyle", "twooldstyle", "threeoldstyle", "fouroldstyle",
    "fiveoldstyle", "sixoldstyle", "sevenoldstyle", "eightoldstyle", "nineoldstyle",
    "commasuperior", "threequartersemdash", "periodsuperior", "questionsmall", "asuperior",
    "bsuperior", "centsuperior", "dsuperior", "esuperior", "isuperior", "lsuperior",
    "msuperior", "nsuperior", "osuperior", "rsuperior", "ssuperior", "tsuperior", "ff", "ffi",
    "ffl", "parenleftinferior", "parenrightinferior", "Circumflexsmall", "hyphensuperior",
    "Gravesmall", "Asmall", "Bsmall", "Csmall", "Dsmall", "Esmall", "Fsmall", "Gsmall",
    "Hsmall", "Ismall", "Jsmall", "Ksmall", "Lsmall", "Msmall", "Nsmall", "Osmall", "Psmall",
    "Qsmall", "Rsmall", "Ssmall", "Tsmall", "Usmall", "Vsmall", "Wsmall", "Xsmall", "Ysmall",
    "Zsmall", "colonmonetary", "onefitted", "rupiah", "Tildesmall", "exclamdownsmall",
    "centoldstyle", "Lslashsmall", "Scaronsmall", "Zcaronsmall", "Dieresissmall", "Brevesmall",
    "Caronsmall", "Dotaccentsmall", "Macronsmall", "figuredash", "hypheninferior",
    "Ogoneksmall", "Ringsmall", "Cedillasmall", "questiondownsmall", "oneeighth",
    "threeeighths", "fiveeighths", "seveneighths", "onethird", "twothirds", "zerosuperior",
    "foursuperior", "fivesuperior", "sixsuperior", "sevensuperior", "eightsuperior",
    "ninesuperior", "zeroinferior", "oneinferior", "twoinferior", "threeinferior",
    "fourinferior", "fiveinferior", "sixinferior", "seveninferior", "eightinferior",
    "nineinferior", "centinferior", "dollarinferior", "periodinferior", "commainferior",
    "Agravesmall", "Aacutesmall", "Acircumflexsmall", "Atildesmall", "Adieresissmall",
    "Aringsmall", "AEsmall", "Ccedillasmall", "Egravesmall", "Eacutesmall", "Ecircumflexsmall",
    "Edieresissmall", "Igravesmall", "Iacutesmall", "Icircumflexsmall", "Idieresissmall",
    "Ethsmall", "Ntildesmall", "Ogravesmall", "Oacutesmall", "Ocircumflexsmall", "Otildesmall",
    "Odieresissmall", "OEsmall", "Oslashsmall", "Ugravesmall", "Uacutesmall",
    "Ucircumflexsmall", "Udieresissmall", "Yacutesmall", "Thornsmall", "Ydieresissmall",
    "001.000", "001.001", "001.002", "001.003", "Black", "Bold", "Book", "Light", "Medium",
    "Regular", "Roman", "Semibold",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{dict_int, encode_char_string, index, CffBuilder, Cs, FontDictBuilder};

    const ENDCHAR: u16 = 14;

    fn endchar() -> Vec<u8> {
        encode_char_string(&[Cs::Op(ENDCHAR)])
    }

    #[test]
    fn test_iter_index() {
        let offset_array = [1, 2, 3];
        let data_array = [4, 5];
        let index = Index {
            count: 2,
            off_size: 1,
            offset_array: &offset_array,
            data_array: &data_array,
        };

        assert_eq!(index.iter().collect::<Vec<_>>(), vec![[4], [5]]);
    }

    #[test]
    fn test_read_index() {
        let objects: [&[u8]; 3] = [b"abc", b"", b"de"];
        let data = index(&objects);
        let index = ReadScope::new(&data).read::<Index<'_>>().unwrap();

        assert_eq!(index.len(), 3);
        assert_eq!(index.iter().collect::<Vec<_>>(), objects.to_vec());
        assert_eq!(index.read_object(1), Some(&b""[..]));
        assert_eq!(index.read_object(3), None);
        assert_eq!(index.data_len(), 5);
    }

    #[test]
    fn test_read_index_off_size2() {
        let object = vec![7; 300];
        let data = index(&[&object]);
        assert_eq!(data[2], 2);

        let index = ReadScope::new(&data).read::<Index<'_>>().unwrap();
        assert_eq!(index.read_object(0), Some(object.as_slice()));
    }

    #[test]
    fn test_read_empty_index() {
        let data = [0, 0, 0xFF];
        let mut ctxt = ReadScope::new(&data).ctxt();
        let index = ctxt.read::<Index<'_>>().unwrap();

        assert!(index.is_empty());
        assert_eq!(index.iter().count(), 0);
        assert_eq!(ctxt.position(), 2);
    }

    #[test]
    fn test_read_index_bad_off_size() {
        let data = [0, 1, 5, 0, 0, 0, 0, 1];
        assert_eq!(
            ReadScope::new(&data).read::<Index<'_>>().err(),
            Some(ParseError::BadValue)
        );
    }

    #[test]
    fn test_read_index_bad_first_offset() {
        let data = [0, 1, 1, 2, 3, 0xAA, 0xBB];
        assert_eq!(
            ReadScope::new(&data).read::<Index<'_>>().err(),
            Some(ParseError::BadOffset)
        );
    }

    #[test]
    fn test_read_index_decreasing_offsets() {
        let data = [0, 2, 1, 1, 3, 2, 0xAA, 0xBB];
        assert_eq!(
            ReadScope::new(&data).read::<Index<'_>>().err(),
            Some(ParseError::BadOffset)
        );
    }

    #[test]
    fn test_read_index_truncated() {
        let data = [0, 1, 1, 1, 5, 0xAA];
        assert_eq!(
            ReadScope::new(&data).read::<Index<'_>>().err(),
            Some(ParseError::BadEof)
        );
    }

    #[test]
    fn test_string_table() {
        let data = index(&[b"Custom"]);
        let strings = StringTable::new(ReadScope::new(&data).read::<Index<'_>>().unwrap());

        assert_eq!(strings.get(0), Ok(".notdef"));
        assert_eq!(strings.get(390), Ok("Semibold"));
        assert_eq!(strings.get(391), Ok("Custom"));
        assert_eq!(strings.get(392), Err(ParseError::BadIndex));
        assert_eq!(strings.name(392), "SID392");
        assert_eq!(strings.count(), 392);
    }

    #[test]
    fn test_read_header() {
        let data = [1, 0, 6, 4, 0xAA, 0xBB, 0, 0];
        let mut ctxt = ReadScope::new(&data).ctxt();
        let header = ctxt.read::<Header>().unwrap();

        assert_eq!(
            header,
            Header {
                major: 1,
                minor: 0,
                hdr_size: 6,
                off_size: 4
            }
        );
        assert_eq!(ctxt.position(), 6);
    }

    #[test]
    fn test_read_header_errors() {
        assert_eq!(
            ReadScope::new(&[2, 0, 4, 1]).read::<Header>(),
            Err(ParseError::BadVersion)
        );
        assert_eq!(
            ReadScope::new(&[1, 0, 4, 5]).read::<Header>(),
            Err(ParseError::BadValue)
        );
        assert_eq!(
            ReadScope::new(&[1, 0]).read::<Header>(),
            Err(ParseError::BadEof)
        );
    }

    #[test]
    fn test_parse_font() {
        let mut builder = CffBuilder::new(vec![endchar(), endchar()]);
        // 384 Weight
        builder.top_dict = [dict_int(384), vec![4]].concat();
        // 500 defaultWidthX 600 nominalWidthX
        builder.private_dict = [dict_int(500), vec![20], dict_int(600), vec![21]].concat();
        // Format 0, glyph 1 is SID 34 "A"
        builder.charset = Some(vec![0, 0, 34]);
        let data = builder.build();

        let cff = CFF::parse(&data).unwrap();
        assert_eq!(cff.header().hdr_size, 4);
        assert_eq!(cff.fonts().count(), 1);
        assert!(cff.font("Missing").is_none());

        let font = cff.font("Test").unwrap();
        assert_eq!(font.name(), "Test");
        assert!(!font.is_cid());
        assert_eq!(font.num_glyphs(), 2);
        assert_eq!(font.weight(), Some("Bold"));
        assert_eq!(font.font_matrix(), [0.001, 0.0, 0.0, 0.001, 0.0, 0.0]);
        assert_eq!(font.glyph_name(0).as_deref(), Some(".notdef"));
        assert_eq!(font.glyph_name(1).as_deref(), Some("A"));
        assert_eq!(font.glyph_name(2), None);
        assert_eq!(font.glyph_id("A"), Some(1));
        assert_eq!(font.glyph_id("B"), None);
        assert_eq!(font.glyph_id_or_notdef("B"), Ok(0));
        assert_eq!(font.default_width_x(1), 500.0);
        assert_eq!(font.nominal_width_x(1), 600.0);
        assert!(font.encoding.is_none());
        assert_eq!(font.glyph_id_for_code(0x41), None);
        assert!(font.subroutines(1).local.is_none());
    }

    #[test]
    fn test_parse_font_with_encoding() {
        let mut builder = CffBuilder::new(vec![endchar(), endchar()]);
        builder.charset = Some(vec![0, 0, 34]);
        // Format 0, glyph 1 has code 0x41
        builder.encoding = Some(vec![0, 1, 0x41]);
        let data = builder.build();

        let cff = CFF::parse(&data).unwrap();
        let font = cff.first_font().unwrap();
        assert_eq!(font.glyph_id_for_code(0x41), Some(1));
        assert_eq!(font.glyph_id_for_code(0x42), None);
    }

    #[test]
    fn test_parse_font_with_local_subrs() {
        let mut builder = CffBuilder::new(vec![endchar()]);
        builder.local_subrs = vec![endchar(), endchar(), endchar()];
        builder.global_subrs = vec![endchar()];
        let data = builder.build();

        let cff = CFF::parse(&data).unwrap();
        let font = cff.first_font().unwrap();
        let subrs = font.subroutines(0);
        assert_eq!(subrs.local.map(|local| local.len()), Some(3));
        assert_eq!(subrs.local_bias(), Some(107));
        assert_eq!(subrs.global.len(), 1);
        assert_eq!(subrs.global_bias(), 107);
    }

    #[test]
    fn test_parse_cid_font() {
        let mut builder = CffBuilder::new(vec![endchar(), endchar(), endchar()]);
        // Format 0, glyphs 1 and 2 are CIDs 5 and 6
        builder.charset = Some(vec![0, 0, 5, 0, 6]);
        builder.local_subrs = vec![endchar(), endchar()];
        // Format 3: glyph 0 uses Font DICT 0, glyphs 1 and 2 Font DICT 1
        let fd_select = vec![3, 0, 2, 0, 0, 0, 0, 1, 1, 0, 3];
        let font_dicts = vec![
            FontDictBuilder {
                private_dict: [dict_int(100), vec![21]].concat(),
                local_subrs: vec![endchar()],
            },
            FontDictBuilder {
                private_dict: [dict_int(200), vec![21]].concat(),
                local_subrs: Vec::new(),
            },
        ];
        builder.cid = Some((fd_select, font_dicts));
        let data = builder.build();

        let cff = CFF::parse(&data).unwrap();
        let font = cff.first_font().unwrap();
        assert!(font.is_cid());
        assert!(font.encoding.is_none());

        let ros = font.top_dict().ros.as_ref().unwrap();
        assert_eq!(ros.registry, "Adobe");
        assert_eq!(ros.ordering, "Identity");

        assert_eq!(font.glyph_name(0).as_deref(), Some("cid00000"));
        assert_eq!(font.glyph_name(2).as_deref(), Some("cid00006"));
        assert_eq!(font.glyph_id("cid00005"), Some(1));

        assert_eq!(font.nominal_width_x(0), 100.0);
        assert_eq!(font.nominal_width_x(1), 200.0);
        assert_eq!(font.nominal_width_x(2), 200.0);

        // Font DICT 1 has no local subrs so the ones of the font are used
        assert_eq!(font.subroutines(0).local.map(|local| local.len()), Some(1));
        assert_eq!(font.subroutines(1).local.map(|local| local.len()), Some(2));
    }

    #[test]
    fn test_parse_cid_font_missing_charset() {
        let mut builder = CffBuilder::new(vec![endchar()]);
        builder.cid = Some((vec![0, 0], vec![FontDictBuilder::default()]));
        let data = builder.build();

        let err = CFF::parse(&data).unwrap_err();
        assert_eq!(err.structure, Structure::Charset);
        assert_eq!(err.error, ParseError::BadValue);
    }

    #[test]
    fn test_parse_type1_charstrings() {
        let mut builder = CffBuilder::new(vec![endchar()]);
        // 1 CharstringType
        builder.top_dict = vec![140, 12, 6];
        let data = builder.build();

        let err = CFF::parse(&data).unwrap_err();
        assert_eq!(err.structure, Structure::TopDict);
        assert_eq!(err.error, ParseError::NotImplemented);
    }

    #[test]
    fn test_parse_truncated_char_strings() {
        let data = CffBuilder::new(vec![endchar()]).build();

        // The CharStrings INDEX is the last structure in the data
        let err = CFF::parse(&data[..data.len() - 1]).unwrap_err();
        assert_eq!(err.structure, Structure::CharStringsIndex);
        assert_eq!(err.error, ParseError::BadEof);
    }

    #[test]
    fn test_parse_truncated_header() {
        let err = CFF::parse(&[1, 0, 4]).unwrap_err();
        assert_eq!(
            err,
            CFFParseError {
                structure: Structure::Header,
                offset: 0,
                error: ParseError::BadEof
            }
        );
    }
}
