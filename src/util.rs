//! General utility functions

use std::error;
use std::fmt;

/// Returned by `from_hex` when the input is not a sequence of hex pairs
#[derive(Debug, PartialEq, Eq)]
pub struct FromHexError {
    pub input: String,
}

impl fmt::Display for FromHexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid hex: {}", self.input)
    }
}

impl error::Error for FromHexError {}

pub fn to_hex(buf: &[u8]) -> String {
    buf.iter()
        .map(|n| format!("{:02x}", n))
        .collect::<Vec<_>>()
        .concat()
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'A'..=b'F' => Some(byte - b'A' + 10),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'0'..=b'9' => Some(byte - b'0'),
        _ => None,
    }
}

/// Decodes pairs of hex digits; both cases are accepted
///
/// Fails on odd-length input or on any character that is not a hex digit
pub fn from_hex(str: &str) -> Result<Vec<u8>, FromHexError> {
    let err = || FromHexError { input: str.to_owned() };

    if str.len() % 2 != 0 {
        return Err(err());
    }

    let mut b = Vec::with_capacity(str.len() / 2);
    for pair in str.as_bytes().chunks(2) {
        let hi = hex_value(pair[0]).ok_or_else(err)?;
        let lo = hex_value(pair[1]).ok_or_else(err)?;
        b.push((hi << 4) | lo);
    }

    Ok(b)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&[]), "");
        assert_eq!(to_hex(&[0x00, 0x0f, 0xab, 0xff]), "000fabff");
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(from_hex("").unwrap(), Vec::<u8>::new());
        assert_eq!(from_hex("deadBEEF").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(from_hex(&to_hex(&[1, 2, 254])).unwrap(), vec![1, 2, 254]);
    }

    #[test]
    fn test_from_hex_invalid() {
        assert_eq!(
            from_hex("12g4"),
            Err(FromHexError { input: "12g4".to_owned() })
        );

        // odd length
        assert!(from_hex("abc").is_err());

        // whitespace is not skipped
        assert!(from_hex("ab cd").is_err());

        // multi-byte utf8 never decodes
        assert!(from_hex("é0").is_err());
    }
}
