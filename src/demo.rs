//! Builds the P2PKH demo scripts
//!
//! A P2PKH spend is the unlocking script `<sig> <pubkey>` followed by
//! the locking script
//!
//! ```text
//! OP_DUP OP_HASH160 PUSHDATA <hex hash160(pubkey)> OP_EQUALVERIFY OP_CHECKSIG
//! ```

use crate::crypto::{self, Crypto};
use crate::script::trace::TraceLog;
use crate::script::{self, ScriptError};
use crate::util;

/// Public key whose signature is used in the rejected demo
pub const OTHER_PUBKEY: &str = "PUBKEY_OTHER";

/// Locking script paying to the given public key hash
pub fn p2pkh_lock(pubkey_hash: &[u8]) -> String {
    format!(
        "OP_DUP OP_HASH160 PUSHDATA {} OP_EQUALVERIFY OP_CHECKSIG",
        util::to_hex(pubkey_hash)
    )
}

/// Unlocking script providing a signature and the public key
pub fn p2pkh_unlock(signature: &str, public_key: &str) -> String {
    format!("<{}> <{}>", signature, public_key)
}

/// Unlocking script followed by the locking script for `public_key`
pub fn p2pkh_program(crypto: &dyn Crypto, signature: &str, public_key: &str) -> String {
    let pubkey_hash = crypto.hash160(public_key.as_bytes());

    format!(
        "{} {}",
        p2pkh_unlock(signature, public_key),
        p2pkh_lock(&pubkey_hash)
    )
}

pub struct Scenario {
    pub name: &'static str,
    pub program: String,
}

/// A spend with a valid mock signature, and one signed by another key
pub fn scenarios(crypto: &dyn Crypto, public_key: &str) -> Vec<Scenario> {
    vec![
        Scenario {
            name: "valid signature",
            program: p2pkh_program(crypto, &crypto::mock_signature(public_key), public_key),
        },
        Scenario {
            name: "wrong signature",
            program: p2pkh_program(crypto, &crypto::mock_signature(OTHER_PUBKEY), public_key),
        },
    ]
}

/// Evaluates a scenario, collecting its trace
pub fn run(crypto: &dyn Crypto, scenario: &Scenario, logger: &slog::Logger) -> (Result<bool, ScriptError>, TraceLog) {
    let logger = logger.new(o!("scenario" => scenario.name));

    let mut log = TraceLog::new();
    let result = script::evaluate_with_logger(&scenario.program, crypto, &mut log, logger);

    (result, log)
}
