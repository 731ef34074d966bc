//! The opcodes understood by the script engine
//!
//! Opcode keywords are matched case-sensitively.

use std::fmt;

use super::num::MAX_SMALL_INT;
use super::ScriptError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpCode {
    /// OP_0
    Zero,
    /// OP_FALSE; same effect as OP_0
    False,
    /// OP_1 to OP_16
    Small(u8),
    Dup,
    Drop,
    Equal,
    EqualVerify,
    Hash160,
    CheckSig,
}

const PREFIX: &str = "OP_";

impl OpCode {
    /// Parses an opcode keyword
    ///
    /// `OP_<digits>` outside 1..16 is a RangeError; anything else
    /// that is not a known opcode is an UnsupportedToken
    pub fn from_keyword(keyword: &str) -> Result<OpCode, ScriptError> {
        let op = match keyword {
            "OP_0" => OpCode::Zero,
            "OP_FALSE" => OpCode::False,
            "OP_DUP" => OpCode::Dup,
            "OP_DROP" => OpCode::Drop,
            "OP_EQUAL" => OpCode::Equal,
            "OP_EQUALVERIFY" => OpCode::EqualVerify,
            "OP_HASH160" => OpCode::Hash160,
            "OP_CHECKSIG" => OpCode::CheckSig,
            _ => return OpCode::small_from_keyword(keyword),
        };

        Ok(op)
    }

    fn small_from_keyword(keyword: &str) -> Result<OpCode, ScriptError> {
        let digits = match keyword.strip_prefix(PREFIX) {
            Some(digits) if is_decimal(digits) => digits,
            _ => return Err(ScriptError::UnsupportedToken(keyword.to_owned())),
        };

        // too many digits to parse is out of range as well
        match digits.parse::<i64>() {
            Ok(n) if n >= 1 && n <= MAX_SMALL_INT => Ok(OpCode::Small(n as u8)),
            _ => Err(ScriptError::RangeError(keyword.to_owned())),
        }
    }
}

/// True for a non-empty string of ASCII digits
pub fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            OpCode::Zero => "OP_0",
            OpCode::False => "OP_FALSE",
            OpCode::Small(n) => return write!(f, "{}{}", PREFIX, n),
            OpCode::Dup => "OP_DUP",
            OpCode::Drop => "OP_DROP",
            OpCode::Equal => "OP_EQUAL",
            OpCode::EqualVerify => "OP_EQUALVERIFY",
            OpCode::Hash160 => "OP_HASH160",
            OpCode::CheckSig => "OP_CHECKSIG",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_keyword() {
        assert_eq!(Ok(OpCode::Zero), OpCode::from_keyword("OP_0"));
        assert_eq!(Ok(OpCode::False), OpCode::from_keyword("OP_FALSE"));
        assert_eq!(Ok(OpCode::Small(1)), OpCode::from_keyword("OP_1"));
        assert_eq!(Ok(OpCode::Small(16)), OpCode::from_keyword("OP_16"));
        assert_eq!(Ok(OpCode::CheckSig), OpCode::from_keyword("OP_CHECKSIG"));
    }

    #[test]
    fn test_small_out_of_range() {
        for keyword in &["OP_17", "OP_00", "OP_255", "OP_99999999999999999999999"] {
            assert_eq!(
                Err(ScriptError::RangeError(keyword.to_string())),
                OpCode::from_keyword(keyword)
            );
        }
    }

    #[test]
    fn test_unsupported() {
        for keyword in &["op_dup", "OP_", "OP_-1", "OP_1A", "OP_VERIFY", "DUP"] {
            assert_eq!(
                Err(ScriptError::UnsupportedToken(keyword.to_string())),
                OpCode::from_keyword(keyword)
            );
        }
    }

    #[test]
    fn test_display_round_trips_keyword() {
        for keyword in &["OP_0", "OP_FALSE", "OP_7", "OP_DUP", "OP_DROP", "OP_EQUAL",
                         "OP_EQUALVERIFY", "OP_HASH160", "OP_CHECKSIG"] {
            assert_eq!(*keyword, OpCode::from_keyword(keyword).unwrap().to_string());
        }
    }
}
