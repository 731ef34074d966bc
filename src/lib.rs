//! Bitcoin-style script evaluation
//!
//! A tokenizer and stack machine for P2PKH-like spend conditions.
//! Hashing and signature checks are provided by a `Crypto`
//! implementation; this crate only ships a mock.

#[macro_use]
pub extern crate slog;
extern crate slog_term;

extern crate clap;
extern crate ring;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate toml;

mod hash;

pub mod config;
pub mod crypto;
pub mod demo;
pub mod script;
pub mod util;

use slog::Drain;

pub use crate::crypto::{Crypto, MockCrypto};
pub use crate::hash::HASH160_LEN;
pub use crate::script::{evaluate, evaluate_with, evaluate_with_logger, ScriptError};

/// Creates a logger writing to stderr, filtered at `level`
pub fn terminal_logger(level: slog::Level) -> slog::Logger {
    let decorator = slog_term::PlainSyncDecorator::new(std::io::stderr());
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog::LevelFilter::new(drain, level).fuse();

    slog::Logger::root(drain, o!())
}
