//! SCRIPTING interface
//!
//! Programs are whitespace separated text such as
//!
//! ```text
//! <SIG(PUBKEY_ALICE)> <PUBKEY_ALICE> OP_DUP OP_HASH160 PUSHDATA <hash> OP_EQUALVERIFY OP_CHECKSIG
//! ```
//!
//! and are run against a single stack in one pass. There are two ways
//! for a script to fail: OP_EQUAL and OP_CHECKSIG push a false value
//! and let the script continue, whereas every `ScriptError` aborts the
//! whole evaluation.

use std::error;
use std::fmt;

pub mod context;
pub mod num;
pub mod opcode;
pub mod stack;
pub mod token;
pub mod trace;

#[cfg(test)]
mod test_log;

use self::context::Context;
use self::trace::{LoggerTracer, NoTrace, Tracer};
use crate::crypto::{Crypto, MockCrypto};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// Pop from an empty stack
    StackUnderflow,

    /// PUSHDATA with an invalid hex operand, or without operand (None)
    MalformedOperand { operand: Option<String> },

    /// A word that is not a literal or a known opcode
    UnsupportedToken(String),

    /// A small integer outside the pushable range
    RangeError(String),

    /// OP_EQUALVERIFY on unequal items
    VerificationFailure,

    /// Nothing left on the stack after the last instruction
    EmptyResult,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ScriptError::StackUnderflow => write!(f, "stack underflow"),
            ScriptError::MalformedOperand { operand: None } => write!(f, "PUSHDATA without operand"),
            ScriptError::MalformedOperand { operand: Some(ref operand) } => {
                write!(f, "invalid hex operand for PUSHDATA: {}", operand)
            }
            ScriptError::UnsupportedToken(ref token) => write!(f, "unsupported token: {}", token),
            ScriptError::RangeError(ref token) => {
                write!(f, "small integer out of range (max {}): {}", num::MAX_SMALL_INT, token)
            }
            ScriptError::VerificationFailure => write!(f, "OP_EQUALVERIFY failed"),
            ScriptError::EmptyResult => write!(f, "stack empty at end of script"),
        }
    }
}

impl error::Error for ScriptError {}

/// Evaluates `program` with the mock crypto
///
/// With `trace` set, each step is logged to the terminal
pub fn evaluate(program: &str, trace: bool) -> Result<bool, ScriptError> {
    let crypto = MockCrypto;

    if trace {
        let logger = crate::terminal_logger(slog::Level::Info);
        let mut tracer = LoggerTracer::new(logger.clone());
        evaluate_with_logger(program, &crypto, &mut tracer, logger)
    } else {
        evaluate_with(program, &crypto, &mut NoTrace)
    }
}

/// Evaluates `program` with the given crypto, reporting steps to `tracer`
pub fn evaluate_with(program: &str, crypto: &dyn Crypto, tracer: &mut dyn Tracer) -> Result<bool, ScriptError> {
    Context::new(crypto).run(program, tracer)
}

/// Like `evaluate_with`, logging the run to `logger`
pub fn evaluate_with_logger(
    program: &str,
    crypto: &dyn Crypto,
    tracer: &mut dyn Tracer,
    logger: slog::Logger,
) -> Result<bool, ScriptError> {
    Context::new(crypto).with_logger(logger).run(program, tracer)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty_program() {
        assert_eq!(Err(ScriptError::EmptyResult), evaluate("", false));
        assert_eq!(Err(ScriptError::EmptyResult), evaluate("  \n ", false));
    }

    #[test]
    fn test_trace_does_not_change_result() {
        for program in &["OP_1", "OP_0", "<a> <b> OP_EQUAL", "OP_DROP", "OP_17", ""] {
            assert_eq!(evaluate(program, false), evaluate(program, true));
        }
    }

    #[test]
    fn test_evaluate_with_logger() {
        let (logger, drain) = test_log::CaptureDrain::logger();
        let result = evaluate_with_logger("OP_2 OP_DUP", &MockCrypto, &mut NoTrace, logger);

        assert_eq!(Ok(true), result);
        assert_eq!(
            vec!["run - start", "execute", "execute", "run - done"],
            drain.messages()
        );
    }

    #[test]
    fn test_display() {
        assert_eq!("small integer out of range (max 16): OP_17", ScriptError::RangeError("OP_17".to_owned()).to_string());
        assert_eq!(
            "PUSHDATA without operand",
            ScriptError::MalformedOperand { operand: None }.to_string()
        );
    }
}
