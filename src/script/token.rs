//! Tokenizing program text into instructions
//!
//! A program is split on runs of whitespace. Each word is classified,
//! in this order, as
//!
//! * a decimal literal such as `7`
//! * `PUSHDATA <operand>` (case-insensitive), taking the next word as operand
//! * a bracket literal such as `<PUBKEY_ALICE>`, pushed as raw text
//! * an opcode keyword such as `OP_DUP`
//!
//! Words are classified lazily while iterating, so an error is only
//! reported once the tokenizer reaches the offending word.
//!
//! A PUSHDATA operand is hex-decoded when it is all hex digits and of
//! even length; other text is pushed as its UTF-8 bytes. This is
//! ambiguous: literal text such as `cafe` is always read as hex. An
//! even-length operand that starts out as hex but contains a non-hex
//! digit, such as `12g4`, is rejected as malformed.

use std::fmt;
use std::str::SplitWhitespace;

use super::num::MAX_SMALL_INT;
use super::opcode::{self, OpCode};
use super::ScriptError;
use crate::util;

const PUSHDATA: &str = "PUSHDATA";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction<'a> {
    /// A decimal literal
    PushNumber(u8),

    /// `PUSHDATA <operand>` with the bytes the operand decoded to
    PushData { operand: &'a str, data: Box<[u8]> },

    /// The text between `<` and `>`
    PushLiteral(&'a str),

    Op(OpCode),
}

/// Iterator over the instructions of a program
pub struct Tokenizer<'a> {
    words: SplitWhitespace<'a>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(program: &'a str) -> Tokenizer<'a> {
        Tokenizer {
            words: program.split_whitespace(),
        }
    }

    fn classify(&mut self, word: &'a str) -> Result<Instruction<'a>, ScriptError> {
        if opcode::is_decimal(word) {
            return parse_number(word);
        }

        if word.eq_ignore_ascii_case(PUSHDATA) {
            let operand = self
                .words
                .next()
                .ok_or(ScriptError::MalformedOperand { operand: None })?;

            return Ok(Instruction::PushData {
                operand,
                data: decode_operand(operand)?,
            });
        }

        if let Some(text) = bracket_literal(word) {
            return Ok(Instruction::PushLiteral(text));
        }

        OpCode::from_keyword(word).map(Instruction::Op)
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Instruction<'a>, ScriptError>;

    fn next(&mut self) -> Option<Self::Item> {
        let word = self.words.next()?;
        Some(self.classify(word))
    }
}

fn parse_number(word: &str) -> Result<Instruction, ScriptError> {
    match word.parse::<i64>() {
        Ok(n) if n <= MAX_SMALL_INT => Ok(Instruction::PushNumber(n as u8)),
        _ => Err(ScriptError::RangeError(word.to_owned())),
    }
}

/// Returns the interior of `<text>`; `<>` has no interior and is not a literal
fn bracket_literal(word: &str) -> Option<&str> {
    word.strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .filter(|text| !text.is_empty())
}

/// Decodes a PUSHDATA operand
///
/// An even-length operand starting with a hex pair is read as hex and
/// must decode completely; anything else is taken as literal text.
fn decode_operand(operand: &str) -> Result<Box<[u8]>, ScriptError> {
    let bytes = operand.as_bytes();
    let hex_like = bytes.len() % 2 == 0
        && bytes.len() >= 2
        && bytes[0].is_ascii_hexdigit()
        && bytes[1].is_ascii_hexdigit();

    if !hex_like {
        return Ok(bytes.to_vec().into_boxed_slice());
    }

    util::from_hex(operand)
        .map(|data| data.into_boxed_slice())
        .map_err(|_| ScriptError::MalformedOperand {
            operand: Some(operand.to_owned()),
        })
}

/// Renders instructions as the labels used in traces
impl<'a> fmt::Display for Instruction<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Instruction::PushNumber(n) => write!(f, "PUSH_NUM({})", n),
            Instruction::PushData { operand, .. } => write!(f, "PUSHDATA({})", operand),
            Instruction::PushLiteral(text) => write!(f, "PUSH_DATA(<{}>)", text),
            Instruction::Op(op) => write!(f, "{}", op),
        }
    }
}
