//! CFF DICT data described in Section 4 of Technical Note #5176.
//!
//! A DICT is read into a generic list of `(operator, operands)` pairs by [Dict], then folded into
//! the typed [TopDict] or [PrivateDict] records.

use std::convert::TryFrom;
use std::fmt;
use std::ops::Add;

use log::debug;

use crate::binary::read::{ReadBinary, ReadCtxt, ReadScope};
use crate::error::ParseError;

use super::token::{esc, read_token, Context, Real, StackEffect, Token};
use super::{StringTable, SID};

// Technical Note #5176: An operator may be preceded by up to a maximum of 48 operands.
pub const MAX_OPERANDS: usize = 48;

const DEFAULT_FONT_MATRIX: [f64; 6] = [0.001, 0.0, 0.0, 0.001, 0.0, 0.0];

/// Operators of a DICT, one implementation per operator table.
pub trait DictOperator: TryFrom<u16, Error = ParseError> + Copy + PartialEq + fmt::Debug {
    const CONTEXT: Context;

    fn name(self) -> &'static str;

    fn stack_effect(self) -> StackEffect;
}

/// A CFF DICT described in Section 4 of Technical Note #5176
#[derive(Debug, PartialEq, Clone)]
pub struct Dict<O: DictOperator> {
    dict: Vec<(O, Vec<Operand>)>,
}

/// CFF operand to an operator
#[derive(Debug, PartialEq, Clone)]
pub enum Operand {
    Integer(i32),
    Real(Real),
}

/// Operators of the Top DICT and the Font DICTs of a CID-keyed font.
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum TopDictOperator {
    Version = 0,
    Notice = 1,
    FullName = 2,
    FamilyName = 3,
    Weight = 4,
    FontBBox = 5,
    UniqueID = 13,
    XUID = 14,
    Charset = 15,
    Encoding = 16,
    CharStrings = 17,
    Private = 18,
    Copyright = esc(0),
    IsFixedPitch = esc(1),
    ItalicAngle = esc(2),
    UnderlinePosition = esc(3),
    UnderlineThickness = esc(4),
    PaintType = esc(5),
    CharstringType = esc(6),
    FontMatrix = esc(7),
    StrokeWidth = esc(8),
    SyntheticBase = esc(20),
    PostScript = esc(21),
    BaseFontName = esc(22),
    BaseFontBlend = esc(23),
    ROS = esc(30),
    CIDFontVersion = esc(31),
    CIDFontRevision = esc(32),
    CIDFontType = esc(33),
    CIDCount = esc(34),
    UIDBase = esc(35),
    FDArray = esc(36),
    FDSelect = esc(37),
    FontName = esc(38),
}

/// Operators of a Private DICT.
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum PrivateDictOperator {
    BlueValues = 6,
    OtherBlues = 7,
    FamilyBlues = 8,
    FamilyOtherBlues = 9,
    StdHW = 10,
    StdVW = 11,
    Subrs = 19,
    DefaultWidthX = 20,
    NominalWidthX = 21,
    BlueScale = esc(9),
    BlueShift = esc(10),
    BlueFuzz = esc(11),
    StemSnapH = esc(12),
    StemSnapV = esc(13),
    ForceBold = esc(14),
    LanguageGroup = esc(17),
    ExpansionFactor = esc(18),
    InitialRandomSeed = esc(19),
}

/// Registry, Ordering, Supplement of a CID-keyed font.
#[derive(Debug, PartialEq, Clone)]
pub struct Ros {
    pub registry: String,
    pub ordering: String,
    pub supplement: f64,
}

/// The Top DICT of a font, or one Font DICT of a CID-keyed font.
///
/// Offsets that are absent are `-1`, since `0` is a meaningful value for `charset` and
/// `encoding`.
#[derive(Debug, PartialEq, Clone)]
pub struct TopDict {
    pub version: Option<String>,
    pub notice: Option<String>,
    pub copyright: Option<String>,
    pub full_name: Option<String>,
    pub family_name: Option<String>,
    pub weight: Option<String>,
    pub is_fixed_pitch: bool,
    pub italic_angle: f64,
    pub underline_position: f64,
    pub underline_thickness: f64,
    pub paint_type: i32,
    pub charstring_type: i32,
    /// `[a, b, c, d, e, f]`
    pub font_matrix: [f64; 6],
    pub unique_id: Option<i32>,
    pub font_bbox: [f64; 4],
    pub stroke_width: f64,
    pub xuid: Vec<i32>,
    pub charset: i32,
    pub encoding: i32,
    pub char_strings: i32,
    /// `(size, offset)` of the Private DICT.
    pub private: Option<(usize, usize)>,
    pub synthetic_base: Option<i32>,
    pub postscript: Option<String>,
    pub base_font_name: Option<String>,
    pub base_font_blend: Vec<f64>,
    pub ros: Option<Ros>,
    pub cid_font_version: f64,
    pub cid_font_revision: f64,
    pub cid_font_type: i32,
    pub cid_count: i32,
    pub uid_base: Option<i32>,
    pub fd_array: i32,
    pub fd_select: i32,
    pub font_name: Option<String>,
    pub is_cid: bool,
}

#[derive(Debug, PartialEq, Clone)]
pub struct PrivateDict {
    pub blue_values: Vec<f64>,
    pub other_blues: Vec<f64>,
    pub family_blues: Vec<f64>,
    pub family_other_blues: Vec<f64>,
    pub blue_scale: f64,
    pub blue_shift: f64,
    pub blue_fuzz: f64,
    pub std_hw: Option<f64>,
    pub std_vw: Option<f64>,
    pub stem_snap_h: Vec<f64>,
    pub stem_snap_v: Vec<f64>,
    pub force_bold: bool,
    pub language_group: i32,
    pub expansion_factor: f64,
    pub initial_random_seed: i32,
    /// Offset of the local subroutines relative to the start of the Private DICT.
    pub subrs: Option<i32>,
    pub default_width_x: f64,
    pub nominal_width_x: f64,
}

impl<O: DictOperator> ReadBinary for Dict<O> {
    type HostType<'b> = Self;

    fn read<'a>(ctxt: &mut ReadCtxt<'a>) -> Result<Self::HostType<'a>, ParseError> {
        let mut dict = Vec::new();
        let mut operands = Vec::new();

        while ctxt.bytes_available() {
            match read_token(ctxt, O::CONTEXT)? {
                Token::Operator(id) => {
                    let operator = O::try_from(id)?;
                    if let StackEffect::Exact(n) = operator.stack_effect() {
                        if operands.len() != usize::from(n) {
                            debug!(
                                "{} expects {}, found {} operand(s)",
                                operator.name(),
                                operator.stack_effect(),
                                operands.len()
                            );
                        }
                    }
                    dict.push((operator, std::mem::take(&mut operands)));
                }
                Token::Integer(value) => operands.push(Operand::Integer(value)),
                Token::Real(real) => operands.push(Operand::Real(real)),
                Token::Fixed(_) => return Err(ParseError::BadValue),
            }

            if operands.len() > MAX_OPERANDS {
                return Err(ParseError::LimitExceeded);
            }
        }

        Ok(Dict { dict })
    }
}

impl<O: DictOperator> Dict<O> {
    pub fn new() -> Self {
        Dict { dict: Vec::new() }
    }

    /// Returns the operands of the last occurrence of `key`.
    pub fn get(&self, key: O) -> Option<&[Operand]> {
        self.dict.iter().rev().find_map(|(op, args)| {
            if *op == key {
                Some(args.as_slice())
            } else {
                None
            }
        })
    }

    /// Returns the i32 value of this operator if the operands hold a single integer.
    pub fn get_i32(&self, key: O) -> Option<Result<i32, ParseError>> {
        self.get(key).map(|operands| match operands {
            [operand] => operand.to_i32(),
            _ => Err(ParseError::BadValue),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &(O, Vec<Operand>)> {
        self.dict.iter()
    }

    pub fn len(&self) -> usize {
        self.dict.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dict.is_empty()
    }
}

impl<O: DictOperator> Default for Dict<O> {
    fn default() -> Self {
        Dict::new()
    }
}

impl Operand {
    pub fn to_f64(&self) -> Result<f64, ParseError> {
        match self {
            Operand::Integer(value) => Ok(f64::from(*value)),
            Operand::Real(real) => real.to_f64(),
        }
    }

    /// Integer value of this operand. Reals are accepted when they hold a whole number.
    pub fn to_i32(&self) -> Result<i32, ParseError> {
        match self {
            Operand::Integer(value) => Ok(*value),
            Operand::Real(real) => {
                let value = real.to_f64()?;
                if value.fract() == 0.0 && value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX)
                {
                    Ok(value as i32)
                } else {
                    Err(ParseError::BadValue)
                }
            }
        }
    }
}

/// Decode a delta encoded array: the first value is absolute and each following value is added
/// to the running total.
pub fn delta_decode<T>(values: impl IntoIterator<Item = T>) -> Vec<T>
where
    T: Copy + Add<Output = T>,
{
    values
        .into_iter()
        .scan(None, |total: &mut Option<T>, value| {
            let next = match *total {
                Some(total) => total + value,
                None => value,
            };
            *total = Some(next);
            Some(next)
        })
        .collect()
}

fn operand(operands: &[Operand], index: usize) -> Result<&Operand, ParseError> {
    operands.get(index).ok_or(ParseError::MissingValue)
}

fn number(operands: &[Operand]) -> Result<f64, ParseError> {
    operand(operands, 0)?.to_f64()
}

fn integer(operands: &[Operand]) -> Result<i32, ParseError> {
    operand(operands, 0)?.to_i32()
}

fn sid(operands: &[Operand]) -> Result<SID, ParseError> {
    Ok(SID::try_from(integer(operands)?)?)
}

fn string(operands: &[Operand], strings: &StringTable<'_>) -> Result<String, ParseError> {
    Ok(strings.name(sid(operands)?).into_owned())
}

fn numbers(operands: &[Operand]) -> Result<Vec<f64>, ParseError> {
    operands.iter().map(Operand::to_f64).collect()
}

fn delta_numbers(operands: &[Operand]) -> Result<Vec<f64>, ParseError> {
    Ok(delta_decode(numbers(operands)?))
}

impl Default for TopDict {
    fn default() -> Self {
        TopDict {
            version: None,
            notice: None,
            copyright: None,
            full_name: None,
            family_name: None,
            weight: None,
            is_fixed_pitch: false,
            italic_angle: 0.0,
            underline_position: -100.0,
            underline_thickness: 50.0,
            paint_type: 0,
            charstring_type: 2,
            font_matrix: DEFAULT_FONT_MATRIX,
            unique_id: None,
            font_bbox: [0.0; 4],
            stroke_width: 0.0,
            xuid: Vec::new(),
            charset: -1,
            encoding: -1,
            char_strings: -1,
            private: None,
            synthetic_base: None,
            postscript: None,
            base_font_name: None,
            base_font_blend: Vec::new(),
            ros: None,
            cid_font_version: 0.0,
            cid_font_revision: 0.0,
            cid_font_type: 0,
            cid_count: 8720,
            uid_base: None,
            fd_array: -1,
            fd_select: -1,
            font_name: None,
            is_cid: false,
        }
    }
}

impl TopDict {
    /// Read and fold a Top DICT, resolving strings through `strings`.
    pub fn read(scope: ReadScope<'_>, strings: &StringTable<'_>) -> Result<TopDict, ParseError> {
        let dict = scope.read::<Dict<TopDictOperator>>()?;
        TopDict::from_dict(&dict, strings)
    }

    pub fn from_dict(
        dict: &Dict<TopDictOperator>,
        strings: &StringTable<'_>,
    ) -> Result<TopDict, ParseError> {
        use TopDictOperator::*;

        let mut top = TopDict::default();
        for (operator, operands) in dict.iter() {
            let operands = operands.as_slice();
            if operator.is_cid_only() {
                top.is_cid = true;
            }

            match operator {
                Version => top.version = Some(string(operands, strings)?),
                Notice => top.notice = Some(string(operands, strings)?),
                Copyright => top.copyright = Some(string(operands, strings)?),
                FullName => top.full_name = Some(string(operands, strings)?),
                FamilyName => top.family_name = Some(string(operands, strings)?),
                Weight => top.weight = Some(string(operands, strings)?),
                IsFixedPitch => top.is_fixed_pitch = integer(operands)? != 0,
                ItalicAngle => top.italic_angle = number(operands)?,
                UnderlinePosition => top.underline_position = number(operands)?,
                UnderlineThickness => top.underline_thickness = number(operands)?,
                PaintType => top.paint_type = integer(operands)?,
                CharstringType => top.charstring_type = integer(operands)?,
                FontMatrix => {
                    top.font_matrix = match numbers(operands)?.as_slice() {
                        [a, b, c, d] => [*a, *b, *c, *d, 0.0, 0.0],
                        [a, b, c, d, e, f] => [*a, *b, *c, *d, *e, *f],
                        _ => return Err(ParseError::BadValue),
                    }
                }
                UniqueID => top.unique_id = Some(integer(operands)?),
                FontBBox => {
                    top.font_bbox = match numbers(operands)?.as_slice() {
                        [x_min, y_min, x_max, y_max] => [*x_min, *y_min, *x_max, *y_max],
                        _ => return Err(ParseError::BadValue),
                    }
                }
                StrokeWidth => top.stroke_width = number(operands)?,
                XUID => {
                    let values = operands
                        .iter()
                        .map(Operand::to_i32)
                        .collect::<Result<Vec<_>, _>>()?;
                    top.xuid = delta_decode(values);
                }
                Charset => top.charset = integer(operands)?,
                Encoding => top.encoding = integer(operands)?,
                CharStrings => top.char_strings = integer(operands)?,
                Private => {
                    let size = operand(operands, 0)?.to_i32()?;
                    let offset = operand(operands, 1)?.to_i32()?;
                    top.private = Some((usize::try_from(size)?, usize::try_from(offset)?));
                }
                SyntheticBase => top.synthetic_base = Some(integer(operands)?),
                PostScript => top.postscript = Some(string(operands, strings)?),
                BaseFontName => top.base_font_name = Some(string(operands, strings)?),
                BaseFontBlend => top.base_font_blend = delta_numbers(operands)?,
                ROS => {
                    let registry = SID::try_from(operand(operands, 0)?.to_i32()?)?;
                    let ordering = SID::try_from(operand(operands, 1)?.to_i32()?)?;
                    top.ros = Some(Ros {
                        registry: strings.name(registry).into_owned(),
                        ordering: strings.name(ordering).into_owned(),
                        supplement: operand(operands, 2)?.to_f64()?,
                    });
                }
                CIDFontVersion => top.cid_font_version = number(operands)?,
                CIDFontRevision => top.cid_font_revision = number(operands)?,
                CIDFontType => top.cid_font_type = integer(operands)?,
                CIDCount => top.cid_count = integer(operands)?,
                UIDBase => top.uid_base = Some(integer(operands)?),
                FDArray => top.fd_array = integer(operands)?,
                FDSelect => top.fd_select = integer(operands)?,
                FontName => top.font_name = Some(string(operands, strings)?),
            }
        }

        Ok(top)
    }
}

impl Default for PrivateDict {
    fn default() -> Self {
        PrivateDict {
            blue_values: Vec::new(),
            other_blues: Vec::new(),
            family_blues: Vec::new(),
            family_other_blues: Vec::new(),
            blue_scale: 0.039625,
            blue_shift: 7.0,
            blue_fuzz: 1.0,
            std_hw: None,
            std_vw: None,
            stem_snap_h: Vec::new(),
            stem_snap_v: Vec::new(),
            force_bold: false,
            language_group: 0,
            expansion_factor: 0.06,
            initial_random_seed: 0,
            subrs: None,
            default_width_x: 0.0,
            nominal_width_x: 0.0,
        }
    }
}

impl PrivateDict {
    pub fn read(scope: ReadScope<'_>) -> Result<PrivateDict, ParseError> {
        let dict = scope.read::<Dict<PrivateDictOperator>>()?;
        PrivateDict::from_dict(&dict)
    }

    pub fn from_dict(dict: &Dict<PrivateDictOperator>) -> Result<PrivateDict, ParseError> {
        use PrivateDictOperator::*;

        let mut private = PrivateDict::default();
        for (operator, operands) in dict.iter() {
            let operands = operands.as_slice();
            match operator {
                BlueValues => private.blue_values = delta_numbers(operands)?,
                OtherBlues => private.other_blues = delta_numbers(operands)?,
                FamilyBlues => private.family_blues = delta_numbers(operands)?,
                FamilyOtherBlues => private.family_other_blues = delta_numbers(operands)?,
                StdHW => private.std_hw = Some(number(operands)?),
                StdVW => private.std_vw = Some(number(operands)?),
                Subrs => private.subrs = Some(integer(operands)?),
                DefaultWidthX => private.default_width_x = number(operands)?,
                NominalWidthX => private.nominal_width_x = number(operands)?,
                BlueScale => private.blue_scale = number(operands)?,
                BlueShift => private.blue_shift = number(operands)?,
                BlueFuzz => private.blue_fuzz = number(operands)?,
                StemSnapH => private.stem_snap_h = delta_numbers(operands)?,
                StemSnapV => private.stem_snap_v = delta_numbers(operands)?,
                ForceBold => private.force_bold = integer(operands)? != 0,
                LanguageGroup => private.language_group = integer(operands)?,
                ExpansionFactor => private.expansion_factor = number(operands)?,
                InitialRandomSeed => private.initial_random_seed = integer(operands)?,
            }
        }

        Ok(private)
    }
}

impl TopDictOperator {
    /// Operators that only occur in the Top DICT of a CID-keyed font.
    pub fn is_cid_only(self) -> bool {
        use TopDictOperator::*;

        matches!(
            self,
            ROS | CIDFontVersion
                | CIDFontRevision
                | CIDFontType
                | CIDCount
                | UIDBase
                | FDArray
                | FDSelect
                | FontName
        )
    }
}

impl DictOperator for TopDictOperator {
    const CONTEXT: Context = Context::TopDict;

    fn name(self) -> &'static str {
        use TopDictOperator::*;

        match self {
            Version => "version",
            Notice => "Notice",
            FullName => "FullName",
            FamilyName => "FamilyName",
            Weight => "Weight",
            FontBBox => "FontBBox",
            UniqueID => "UniqueID",
            XUID => "XUID",
            Charset => "charset",
            Encoding => "Encoding",
            CharStrings => "CharStrings",
            Private => "Private",
            Copyright => "Copyright",
            IsFixedPitch => "isFixedPitch",
            ItalicAngle => "ItalicAngle",
            UnderlinePosition => "UnderlinePosition",
            UnderlineThickness => "UnderlineThickness",
            PaintType => "PaintType",
            CharstringType => "CharstringType",
            FontMatrix => "FontMatrix",
            StrokeWidth => "StrokeWidth",
            SyntheticBase => "SyntheticBase",
            PostScript => "PostScript",
            BaseFontName => "BaseFontName",
            BaseFontBlend => "BaseFontBlend",
            ROS => "ROS",
            CIDFontVersion => "CIDFontVersion",
            CIDFontRevision => "CIDFontRevision",
            CIDFontType => "CIDFontType",
            CIDCount => "CIDCount",
            UIDBase => "UIDBase",
            FDArray => "FDArray",
            FDSelect => "FDSelect",
            FontName => "FontName",
        }
    }

    fn stack_effect(self) -> StackEffect {
        use TopDictOperator::*;

        match self {
            FontBBox => StackEffect::Exact(4),
            XUID | BaseFontBlend => StackEffect::Delta,
            Private => StackEffect::Exact(2),
            FontMatrix => StackEffect::Variable,
            ROS => StackEffect::Exact(3),
            _ => StackEffect::Exact(1),
        }
    }
}

impl TryFrom<u16> for TopDictOperator {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        use TopDictOperator::*;

        const COPYRIGHT: u16 = esc(0);
        const IS_FIXED_PITCH: u16 = esc(1);
        const ITALIC_ANGLE: u16 = esc(2);
        const UNDERLINE_POSITION: u16 = esc(3);
        const UNDERLINE_THICKNESS: u16 = esc(4);
        const PAINT_TYPE: u16 = esc(5);
        const CHARSTRING_TYPE: u16 = esc(6);
        const FONT_MATRIX: u16 = esc(7);
        const STROKE_WIDTH: u16 = esc(8);
        const SYNTHETIC_BASE: u16 = esc(20);
        const POSTSCRIPT: u16 = esc(21);
        const BASE_FONT_NAME: u16 = esc(22);
        const BASE_FONT_BLEND: u16 = esc(23);
        const ROS_ID: u16 = esc(30);
        const CID_FONT_VERSION: u16 = esc(31);
        const CID_FONT_REVISION: u16 = esc(32);
        const CID_FONT_TYPE: u16 = esc(33);
        const CID_COUNT: u16 = esc(34);
        const UID_BASE: u16 = esc(35);
        const FD_ARRAY: u16 = esc(36);
        const FD_SELECT: u16 = esc(37);
        const FONT_NAME: u16 = esc(38);

        match value {
            0 => Ok(Version),
            1 => Ok(Notice),
            2 => Ok(FullName),
            3 => Ok(FamilyName),
            4 => Ok(Weight),
            5 => Ok(FontBBox),
            13 => Ok(UniqueID),
            14 => Ok(XUID),
            15 => Ok(Charset),
            16 => Ok(Encoding),
            17 => Ok(CharStrings),
            18 => Ok(Private),
            COPYRIGHT => Ok(Copyright),
            IS_FIXED_PITCH => Ok(IsFixedPitch),
            ITALIC_ANGLE => Ok(ItalicAngle),
            UNDERLINE_POSITION => Ok(UnderlinePosition),
            UNDERLINE_THICKNESS => Ok(UnderlineThickness),
            PAINT_TYPE => Ok(PaintType),
            CHARSTRING_TYPE => Ok(CharstringType),
            FONT_MATRIX => Ok(FontMatrix),
            STROKE_WIDTH => Ok(StrokeWidth),
            SYNTHETIC_BASE => Ok(SyntheticBase),
            POSTSCRIPT => Ok(PostScript),
            BASE_FONT_NAME => Ok(BaseFontName),
            BASE_FONT_BLEND => Ok(BaseFontBlend),
            ROS_ID => Ok(ROS),
            CID_FONT_VERSION => Ok(CIDFontVersion),
            CID_FONT_REVISION => Ok(CIDFontRevision),
            CID_FONT_TYPE => Ok(CIDFontType),
            CID_COUNT => Ok(CIDCount),
            UID_BASE => Ok(UIDBase),
            FD_ARRAY => Ok(FDArray),
            FD_SELECT => Ok(FDSelect),
            FONT_NAME => Ok(FontName),
            _ => Err(ParseError::BadValue),
        }
    }
}

impl DictOperator for PrivateDictOperator {
    const CONTEXT: Context = Context::PrivateDict;

    fn name(self) -> &'static str {
        use PrivateDictOperator::*;

        match self {
            BlueValues => "BlueValues",
            OtherBlues => "OtherBlues",
            FamilyBlues => "FamilyBlues",
            FamilyOtherBlues => "FamilyOtherBlues",
            StdHW => "StdHW",
            StdVW => "StdVW",
            Subrs => "Subrs",
            DefaultWidthX => "defaultWidthX",
            NominalWidthX => "nominalWidthX",
            BlueScale => "BlueScale",
            BlueShift => "BlueShift",
            BlueFuzz => "BlueFuzz",
            StemSnapH => "StemSnapH",
            StemSnapV => "StemSnapV",
            ForceBold => "ForceBold",
            LanguageGroup => "LanguageGroup",
            ExpansionFactor => "ExpansionFactor",
            InitialRandomSeed => "initialRandomSeed",
        }
    }

    fn stack_effect(self) -> StackEffect {
        use PrivateDictOperator::*;

        match self {
            BlueValues | OtherBlues | FamilyBlues | FamilyOtherBlues | StemSnapH | StemSnapV => {
                StackEffect::Delta
            }
            _ => StackEffect::Exact(1),
        }
    }
}

impl TryFrom<u16> for PrivateDictOperator {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        use PrivateDictOperator::*;

        const BLUE_SCALE: u16 = esc(9);
        const BLUE_SHIFT: u16 = esc(10);
        const BLUE_FUZZ: u16 = esc(11);
        const STEM_SNAP_H: u16 = esc(12);
        const STEM_SNAP_V: u16 = esc(13);
        const FORCE_BOLD: u16 = esc(14);
        const LANGUAGE_GROUP: u16 = esc(17);
        const EXPANSION_FACTOR: u16 = esc(18);
        const INITIAL_RANDOM_SEED: u16 = esc(19);

        match value {
            6 => Ok(BlueValues),
            7 => Ok(OtherBlues),
            8 => Ok(FamilyBlues),
            9 => Ok(FamilyOtherBlues),
            10 => Ok(StdHW),
            11 => Ok(StdVW),
            19 => Ok(Subrs),
            20 => Ok(DefaultWidthX),
            21 => Ok(NominalWidthX),
            BLUE_SCALE => Ok(BlueScale),
            BLUE_SHIFT => Ok(BlueShift),
            BLUE_FUZZ => Ok(BlueFuzz),
            STEM_SNAP_H => Ok(StemSnapH),
            STEM_SNAP_V => Ok(StemSnapV),
            FORCE_BOLD => Ok(ForceBold),
            LANGUAGE_GROUP => Ok(LanguageGroup),
            EXPANSION_FACTOR => Ok(ExpansionFactor),
            INITIAL_RANDOM_SEED => Ok(InitialRandomSeed),
            _ => Err(ParseError::BadValue),
        }
    }
}
