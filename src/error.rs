//! Error types

use crate::binary::read::ReadEof;
use std::fmt;

/// Errors that originate when parsing binary data
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ParseError {
    BadEof,
    BadValue,
    BadVersion,
    BadOffset,
    BadIndex,
    LimitExceeded,
    MissingValue,
    NotImplemented,
}

/// The CFF structure that was being read when a `ParseError` occurred.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Structure {
    Header,
    NameIndex,
    TopDictIndex,
    StringIndex,
    GlobalSubrIndex,
    TopDict,
    PrivateDict,
    CharStringsIndex,
    Charset,
    Encoding,
    FontDictIndex,
    FontDict,
    FDSelect,
    LocalSubrIndex,
}

/// A `ParseError` located within the CFF data.
///
/// `offset` is the byte offset from the start of the CFF data of the structure that failed to
/// parse.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CFFParseError {
    pub structure: Structure,
    pub offset: usize,
    pub error: ParseError,
}

/// Attach location information to a `ParseError`.
pub trait ResultExt<T> {
    fn context(self, structure: Structure, offset: usize) -> Result<T, CFFParseError>;
}

impl<T> ResultExt<T> for Result<T, ParseError> {
    fn context(self, structure: Structure, offset: usize) -> Result<T, CFFParseError> {
        self.map_err(|error| CFFParseError {
            structure,
            offset,
            error,
        })
    }
}

impl From<ReadEof> for ParseError {
    fn from(_error: ReadEof) -> Self {
        ParseError::BadEof
    }
}

impl From<std::num::TryFromIntError> for ParseError {
    fn from(_error: std::num::TryFromIntError) -> Self {
        ParseError::BadValue
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BadEof => write!(f, "end of data reached unexpectedly"),
            ParseError::BadValue => write!(f, "invalid value"),
            ParseError::BadVersion => write!(f, "unexpected data version"),
            ParseError::BadOffset => write!(f, "invalid data offset"),
            ParseError::BadIndex => write!(f, "invalid data index"),
            ParseError::LimitExceeded => write!(f, "limit exceeded"),
            ParseError::MissingValue => write!(f, "an expected data value was missing"),
            ParseError::NotImplemented => write!(f, "feature not implemented"),
        }
    }
}

impl std::error::Error for ParseError {}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Structure::Header => "header",
            Structure::NameIndex => "Name INDEX",
            Structure::TopDictIndex => "Top DICT INDEX",
            Structure::StringIndex => "String INDEX",
            Structure::GlobalSubrIndex => "Global Subr INDEX",
            Structure::TopDict => "Top DICT",
            Structure::PrivateDict => "Private DICT",
            Structure::CharStringsIndex => "CharStrings INDEX",
            Structure::Charset => "charset",
            Structure::Encoding => "encoding",
            Structure::FontDictIndex => "Font DICT INDEX",
            Structure::FontDict => "Font DICT",
            Structure::FDSelect => "FDSelect",
            Structure::LocalSubrIndex => "Local Subr INDEX",
        };
        f.write_str(name)
    }
}

impl fmt::Display for CFFParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at offset {}: {}",
            self.structure, self.offset, self.error
        )
    }
}

impl std::error::Error for CFFParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context() {
        let res: Result<(), ParseError> = Err(ParseError::BadEof);
        let err = res.context(Structure::CharStringsIndex, 42).unwrap_err();
        assert_eq!(
            err,
            CFFParseError {
                structure: Structure::CharStringsIndex,
                offset: 42,
                error: ParseError::BadEof
            }
        );
        assert_eq!(
            err.to_string(),
            "CharStrings INDEX at offset 42: end of data reached unexpectedly"
        );
    }
}
