//! Observing a running script
//!
//! After each instruction the context hands the stack to a `Tracer`.
//! Tracers only observe; they cannot change the outcome of a script.

use super::num;
use super::stack::Stack;

/// Label of the snapshot taken after the last instruction
pub const END: &str = "END";

pub trait Tracer {
    fn step(&mut self, label: &str, stack: &Stack);
}

/// Ignores all steps
pub struct NoTrace;

impl Tracer for NoTrace {
    fn step(&mut self, _: &str, _: &Stack) {}
}

/// Collects the rendered steps of a single evaluation
#[derive(Debug, Default)]
pub struct TraceLog {
    lines: Vec<String>,
}

impl TraceLog {
    pub fn new() -> TraceLog {
        TraceLog { lines: Vec::new() }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Tracer for TraceLog {
    fn step(&mut self, label: &str, stack: &Stack) {
        self.lines.push(format_step(label, stack));
    }
}

/// Writes each step to a logger at info level
pub struct LoggerTracer {
    logger: slog::Logger,
}

impl LoggerTracer {
    pub fn new(logger: slog::Logger) -> LoggerTracer {
        LoggerTracer { logger }
    }
}

impl Tracer for LoggerTracer {
    fn step(&mut self, label: &str, stack: &Stack) {
        info!(self.logger, "{}", label; "stack" => render_stack(stack), "depth" => stack.len());
    }
}

/// Renders a stack bottom to top
///
/// Single byte items are shown as integers, other items as quoted text
pub fn render_stack(stack: &Stack) -> String {
    let items: Vec<String> = stack
        .iter()
        .map(|item| {
            if item.len() == 1 {
                num::decode_int(item).to_string()
            } else {
                format!("\"{}\"", String::from_utf8_lossy(item))
            }
        })
        .collect();

    format!("[{}]", items.join(", "))
}

pub fn format_step(label: &str, stack: &Stack) -> String {
    format!("{} | stack={}", label, render_stack(stack))
}
