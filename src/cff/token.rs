//! Operand and operator tokens shared by DICT data and Type 2 charstrings.
//!
//! Refer to Table 3 "Operand Encoding" in Technical Note #5176 and section 3.2 of Technical
//! Note #5177.

use std::convert::TryFrom;
use std::fmt;

use tinyvec::TinyVec;

use crate::binary::read::ReadCtxt;
use crate::error::ParseError;

/// The first byte of a two byte operator.
pub const TWO_BYTE_OPERATOR_MARK: u8 = 12;

const END_OF_FLOAT_FLAG: u8 = 0xf;
const FLOAT_BUF_LEN: usize = 64;

/// Operator id of the two byte operator `12 b`.
pub const fn esc(b: u8) -> u16 {
    1200 + b as u16
}

/// The table of operators that is active while reading.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Context {
    TopDict,
    PrivateDict,
    CharString,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// A one byte operator id or `esc(b)` for a two byte operator.
    Operator(u16),
    Integer(i32),
    Real(Real),
    /// A 16.16 fixed point number, only present in charstrings.
    Fixed(f32),
}

/// How an operator consumes the operands preceding it.
///
/// This is used for diagnostics only.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StackEffect {
    /// Takes exactly this many operands.
    Exact(u8),
    /// Takes a varying number of operands.
    Variable,
    /// Takes a delta encoded array.
    Delta,
    /// Consumes everything on the stack.
    Clear,
}

// On a corpus of 23945 CFF fonts real values were encountered as follows:
//     572 2 bytes
//     776 3 bytes
//    1602 4 bytes
//   14037 5 bytes
//    3491 6 bytes
//      36 7 bytes
// Using 7 bytes for the tiny vec covers all of these.

/// A real number in packed BCD form
///
/// To parse the value into `f64` use the `TryFrom`/`TryInto` impl.
#[derive(Debug, PartialEq, Clone)]
pub struct Real(pub(crate) TinyVec<[u8; 7]>);

/// Read one operand or operator.
///
/// Bytes 29 and 30 introduce 32-bit integers and reals in DICT data but are operators in
/// charstrings. Byte 255 introduces a fixed point number in charstrings and is reserved in DICT
/// data.
pub fn read_token(ctxt: &mut ReadCtxt<'_>, context: Context) -> Result<Token, ParseError> {
    let b0 = ctxt.read_u8()?;
    let in_dict = context != Context::CharString;

    match b0 {
        TWO_BYTE_OPERATOR_MARK => Ok(Token::Operator(esc(ctxt.read_u8()?))),
        28 => Ok(Token::Integer(i32::from(ctxt.read_i16be()?))),
        29 if in_dict => Ok(Token::Integer(ctxt.read_i32be()?)),
        30 if in_dict => Ok(Token::Real(Real(TinyVec::from(
            ctxt.read_until_nibble(END_OF_FLOAT_FLAG)?,
        )))),
        0..=31 => Ok(Token::Operator(u16::from(b0))),
        32..=246 => Ok(Token::Integer(i32::from(b0) - 139)),
        247..=250 => {
            let b1 = ctxt.read_u8()?;
            Ok(Token::Integer((i32::from(b0) - 247) * 256 + i32::from(b1) + 108))
        }
        251..=254 => {
            let b1 = ctxt.read_u8()?;
            Ok(Token::Integer(-(i32::from(b0) - 251) * 256 - i32::from(b1) - 108))
        }
        255 if in_dict => Err(ParseError::BadValue),
        255 => {
            let integer = ctxt.read_i16be()?;
            let fraction = ctxt.read_u16be()?;
            Ok(Token::Fixed(
                f32::from(integer) + f32::from(fraction) / 65535.0,
            ))
        }
    }
}

impl Real {
    pub fn to_f64(&self) -> Result<f64, ParseError> {
        f64::try_from(self)
    }
}

// Portions of this try_from impl derived from ttf-parser, licenced under Apache-2.0.
// https://github.com/RazrFalcon/ttf-parser/blob/ba2d9c8b9a207951b7b07e9481bc74688762bd21/src/tables/cff/dict.rs#L188
impl TryFrom<&Real> for f64 {
    type Error = ParseError;

    /// Try to parse this `Real` into an `f64`.
    fn try_from(real: &Real) -> Result<Self, Self::Error> {
        let mut buf = [0u8; FLOAT_BUF_LEN];
        let mut used = 0;

        'bytes: for byte in real.0.iter() {
            for nibble in [byte >> 4, byte & 0xF] {
                if nibble == END_OF_FLOAT_FLAG {
                    break 'bytes;
                }
                parse_float_nibble(nibble, &mut used, &mut buf)?;
            }
        }

        // An exponent marker without any digits means an exponent of zero.
        if used > 0 && matches!(buf[used - 1], b'E' | b'-') && has_exponent(&buf[..used]) {
            push_float_byte(b'0', &mut used, &mut buf)?;
        }

        let s = core::str::from_utf8(&buf[..used]).map_err(|_| ParseError::BadValue)?;
        s.parse().map_err(|_| ParseError::BadValue)
    }
}

impl TryFrom<Real> for f64 {
    type Error = ParseError;

    fn try_from(real: Real) -> Result<Self, Self::Error> {
        f64::try_from(&real)
    }
}

fn has_exponent(s: &[u8]) -> bool {
    s.contains(&b'E')
}

// Adobe Technical Note #5176, Table 5 Nibble Definitions
fn parse_float_nibble(nibble: u8, idx: &mut usize, data: &mut [u8]) -> Result<(), ParseError> {
    match nibble {
        0..=9 => push_float_byte(b'0' + nibble, idx, data),
        0xa => push_float_byte(b'.', idx, data),
        0xb => push_float_byte(b'E', idx, data),
        0xc => {
            push_float_byte(b'E', idx, data)?;
            push_float_byte(b'-', idx, data)
        }
        // Reserved
        0xd => Ok(()),
        0xe => push_float_byte(b'-', idx, data),
        _ => Err(ParseError::BadValue),
    }
}

fn push_float_byte(byte: u8, idx: &mut usize, data: &mut [u8]) -> Result<(), ParseError> {
    let slot = data.get_mut(*idx).ok_or(ParseError::LimitExceeded)?;
    *slot = byte;
    *idx += 1;
    Ok(())
}

impl fmt::Display for StackEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackEffect::Exact(n) => write!(f, "{} operand(s)", n),
            StackEffect::Variable => f.write_str("a variable number of operands"),
            StackEffect::Delta => f.write_str("a delta array"),
            StackEffect::Clear => f.write_str("the whole stack"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::read::ReadScope;
    use tinyvec::tiny_vec;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < f64::EPSILON,
            "{:?} != {:?} ± {}",
            actual,
            expected,
            f64::EPSILON
        );
    }

    fn read_dict_token(data: &[u8]) -> Result<Token, ParseError> {
        read_token(&mut ReadScope::new(data).ctxt(), Context::TopDict)
    }

    #[test]
    fn test_read_op1() {
        assert_eq!(read_dict_token(&[0, 0]).unwrap(), Token::Operator(0));
    }

    #[test]
    fn test_fail_op1() {
        assert!(read_dict_token(&[]).is_err());
    }

    #[test]
    fn test_read_op2() {
        assert_eq!(read_dict_token(&[12, 1]).unwrap(), Token::Operator(1201));
    }

    #[test]
    fn test_fail_op2() {
        assert_eq!(read_dict_token(&[12]), Err(ParseError::BadEof));
    }

    #[test]
    fn test_read_i8() {
        assert_eq!(read_dict_token(&[0x8b]).unwrap(), Token::Integer(0));
    }

    #[test]
    fn test_read_i16() {
        //                             _____-10000______  ______10000_____  100   -100
        let mut ctxt = ReadScope::new(&[0x1c, 0xd8, 0xf0, 0x1c, 0x27, 0x10, 0xef, 0x27]).ctxt();
        for expected in [-10000, 10000, 100, -100] {
            assert_eq!(
                read_token(&mut ctxt, Context::PrivateDict).unwrap(),
                Token::Integer(expected)
            );
        }
    }

    #[test]
    fn test_read_two_byte_ints() {
        //                             __1000__  __-1000__
        let mut ctxt = ReadScope::new(&[0xfa, 0x7c, 0xfe, 0x7c]).ctxt();
        assert_eq!(
            read_token(&mut ctxt, Context::CharString).unwrap(),
            Token::Integer(1000)
        );
        assert_eq!(
            read_token(&mut ctxt, Context::CharString).unwrap(),
            Token::Integer(-1000)
        );
    }

    #[test]
    fn test_read_truncated_operand() {
        assert_eq!(read_dict_token(&[0x1c, 0xd8]), Err(ParseError::BadEof));
        assert_eq!(read_dict_token(&[0xfa]), Err(ParseError::BadEof));
    }

    #[test]
    fn test_read_i32() {
        //                   __________-100000___________  ____________100000__________
        let mut ctxt =
            ReadScope::new(&[0x1d, 0xff, 0xfe, 0x79, 0x60, 0x1d, 0x00, 0x01, 0x86, 0xa0]).ctxt();
        assert_eq!(
            read_token(&mut ctxt, Context::TopDict).unwrap(),
            Token::Integer(-100000)
        );
        assert_eq!(
            read_token(&mut ctxt, Context::TopDict).unwrap(),
            Token::Integer(100000)
        );
    }

    #[test]
    fn test_charstring_operators_in_dict_operand_space() {
        let mut ctxt = ReadScope::new(&[29, 30, 31]).ctxt();
        for expected in [29, 30, 31] {
            assert_eq!(
                read_token(&mut ctxt, Context::CharString).unwrap(),
                Token::Operator(expected)
            );
        }
    }

    #[test]
    fn test_read_fixed() {
        // 1.5 in 16.16
        let mut ctxt = ReadScope::new(&[0xff, 0x00, 0x01, 0x80, 0x00]).ctxt();
        match read_token(&mut ctxt, Context::CharString).unwrap() {
            Token::Fixed(value) => assert!((value - 1.5).abs() < 0.0001),
            token => panic!("expected Token::Fixed got {:?}", token),
        }
        assert_eq!(read_dict_token(&[0xff]), Err(ParseError::BadValue));
    }

    #[test]
    fn test_read_real() {
        // From Technical Note #5176:
        // Thus, the value –2.25 is encoded by the byte sequence (1e e2 a2 5f) and the value
        // 0.140541E–3 by the sequence (1e 0a 14 05 41 c3 ff).
        let mut ctxt = ReadScope::new(&[
            // ______-2.25________  _______________0.140541E–3______________
            0x1e, 0xe2, 0xa2, 0x5f, 0x1e, 0x0a, 0x14, 0x05, 0x41, 0xc3, 0xff,
        ])
        .ctxt();
        let token = read_token(&mut ctxt, Context::TopDict).unwrap();
        assert_eq!(token, Token::Real(Real(tiny_vec![0xe2, 0xa2, 0x5f])));
        let Token::Real(real) = token else {
            panic!("token didn't match Real")
        };
        assert_close(f64::try_from(real).unwrap(), -2.25);
        let Token::Real(real) = read_token(&mut ctxt, Context::TopDict).unwrap() else {
            panic!("token didn't match Real")
        };
        assert_close(f64::try_from(real).unwrap(), 0.000140541);
    }

    #[test]
    fn test_real_negative_two_point_five() {
        let real = Real(tiny_vec![0xe2, 0xa5, 0xff]);
        assert_close(real.to_f64().unwrap(), -2.5);
    }

    #[test]
    fn test_real_exponent_without_digits() {
        // 5 E end
        let real = Real(tiny_vec![0x5b, 0xff]);
        assert_close(real.to_f64().unwrap(), 5.0);
        // 5 E- end
        let real = Real(tiny_vec![0x5c, 0xff]);
        assert_close(real.to_f64().unwrap(), 5.0);
    }

    #[test]
    fn test_real_reserved_nibble_ignored() {
        // 1 <reserved> . 5 end
        let real = Real(tiny_vec![0x1d, 0xa5, 0xff]);
        assert_close(real.to_f64().unwrap(), 1.5);
    }

    #[test]
    fn test_real_missing_terminator() {
        assert_eq!(read_dict_token(&[0x1e, 0xe2, 0xa2]), Err(ParseError::BadEof));
    }
}
