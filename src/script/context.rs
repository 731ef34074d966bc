use super::num;
use super::opcode::OpCode;
use super::stack::Stack;
use super::token::{Instruction, Tokenizer};
use super::trace::{self, Tracer};
use super::ScriptError;
use crate::crypto::Crypto;

/// Context provides an execution environment for a single script
///
/// It owns the stack, and borrows the crypto capability used by
/// OP_HASH160 and OP_CHECKSIG
pub struct Context<'a> {
    pub stack: Stack,

    crypto: &'a dyn Crypto,
    logger: slog::Logger,
}

impl<'a> Context<'a> {
    pub fn new(crypto: &'a dyn Crypto) -> Context<'a> {
        Context {
            stack: Stack::new(),
            crypto,
            logger: slog::Logger::root(slog::Discard, o!()),
        }
    }

    pub fn with_logger(mut self, logger: slog::Logger) -> Context<'a> {
        self.logger = logger;
        self
    }

    /// Runs all instructions of `program` in order, and returns the
    /// truth value of the resulting top of the stack
    ///
    /// Aborts on the first error. An empty stack after the last
    /// instruction is an EmptyResult.
    pub fn run(&mut self, program: &str, tracer: &mut dyn Tracer) -> Result<bool, ScriptError> {
        debug!(self.logger, "run - start"; "program" => program);

        let result = self.run_instructions(program, tracer);
        match result {
            Ok(verdict) => debug!(self.logger, "run - done"; "verdict" => verdict),
            Err(ref err) => debug!(self.logger, "run - aborted"; "error" => %err),
        }
        result
    }

    fn run_instructions(&mut self, program: &str, tracer: &mut dyn Tracer) -> Result<bool, ScriptError> {
        for instruction in Tokenizer::new(program) {
            let instruction = instruction?;

            trace!(self.logger, "execute"; "instruction" => %instruction);
            self.execute(&instruction)?;

            tracer.step(&instruction.to_string(), &self.stack);
        }

        tracer.step(trace::END, &self.stack);

        let top = self.stack.top().ok_or(ScriptError::EmptyResult)?;
        Ok(num::cast_to_bool(top))
    }

    /// Executes a single instruction against the stack
    pub fn execute(&mut self, instruction: &Instruction) -> Result<(), ScriptError> {
        match *instruction {
            Instruction::PushNumber(n) => self.stack.push_int(n as i64),
            Instruction::PushData { ref data, .. } => self.stack.push(data.clone()),
            Instruction::PushLiteral(text) => self.stack.push(text.as_bytes().to_vec().into_boxed_slice()),
            Instruction::Op(op) => self.execute_op(op)?,
        }
        Ok(())
    }

    fn execute_op(&mut self, op: OpCode) -> Result<(), ScriptError> {
        match op {
            OpCode::Zero | OpCode::False => self.stack.push_int(0),

            OpCode::Small(n) => self.stack.push_int(n as i64),

            OpCode::Dup => {
                // the copy is a new allocation; items are never shared
                let a = self.stack.pop()?;
                self.stack.push(a.clone());
                self.stack.push(a);
            }

            OpCode::Drop => {
                self.stack.pop()?;
            }

            OpCode::Equal => {
                let b = self.stack.pop()?;
                let a = self.stack.pop()?;
                self.stack.push_bool(a == b);
            }

            OpCode::EqualVerify => {
                let b = self.stack.pop()?;
                let a = self.stack.pop()?;
                if a != b {
                    return Err(ScriptError::VerificationFailure);
                }
            }

            OpCode::Hash160 => {
                let a = self.stack.pop()?;
                let digest = self.crypto.hash160(&a);
                self.stack.push(Box::new(digest));
            }

            OpCode::CheckSig => {
                // ... <sig> <pubkey> OP_CHECKSIG
                let public_key = self.stack.pop()?;
                let signature = self.stack.pop()?;
                let valid = self.crypto.check_sig(&signature, &public_key);
                self.stack.push_bool(valid);
            }
        }
        Ok(())
    }
}
