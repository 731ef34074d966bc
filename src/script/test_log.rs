//! A slog drain that keeps records in memory, for tests

use std::fmt;
use std::sync::{Arc, Mutex};

use slog::{Drain, Key, Level, OwnedKVList, Record, Serializer, KV};

#[derive(Debug, Clone)]
pub struct Captured {
    pub level: Level,
    pub msg: String,
    pub kv: Vec<(String, String)>,
}

impl Captured {
    pub fn value(&self, key: &str) -> Option<&str> {
        self.kv
            .iter()
            .find(|&&(ref k, _)| k == key)
            .map(|&(_, ref v)| v.as_str())
    }
}

struct KvCollector(Vec<(String, String)>);

impl Serializer for KvCollector {
    fn emit_arguments(&mut self, key: Key, val: &fmt::Arguments) -> slog::Result {
        self.0.push((key.to_string(), val.to_string()));
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct CaptureDrain {
    records: Arc<Mutex<Vec<Captured>>>,
}

impl CaptureDrain {
    /// Creates a logger at trace level that writes into the returned drain
    pub fn logger() -> (slog::Logger, CaptureDrain) {
        let drain = CaptureDrain::default();
        let logger = slog::Logger::root(drain.clone(), o!());
        (logger, drain)
    }

    pub fn records(&self) -> Vec<Captured> {
        self.records.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.msg).collect()
    }
}

impl Drain for CaptureDrain {
    type Ok = ();
    type Err = slog::Never;

    fn log(&self, record: &Record, _: &OwnedKVList) -> Result<(), slog::Never> {
        let mut kv = KvCollector(Vec::new());
        let _ = record.kv().serialize(record, &mut kv);

        self.records.lock().unwrap().push(Captured {
            level: record.level(),
            msg: record.msg().to_string(),
            kv: kv.0,
        });
        Ok(())
    }
}
