//! Command line and config-file handling for the bitcrust-script binary
//!
//! The config file is optional toml:
//!
//! ```toml
//! trace = true
//! demo_pubkey = "PUBKEY_ALICE"
//! ```

use std::error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use clap::{App, Arg, ArgMatches, SubCommand};
use slog::Level;

pub const DEFAULT_DEMO_PUBKEY: &str = "PUBKEY_ALICE";

#[derive(Deserialize, Serialize, Debug, PartialEq)]
#[serde(default)]
pub struct ConfigFile {
    /// Print the stack after every instruction
    pub trace: bool,

    /// Public key used to build the demo scripts
    pub demo_pubkey: String,
}

impl Default for ConfigFile {
    fn default() -> ConfigFile {
        ConfigFile {
            trace: false,
            demo_pubkey: DEFAULT_DEMO_PUBKEY.to_owned(),
        }
    }
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<ConfigFile, ConfigError> {
        let s = fs::read_to_string(path)?;
        Ok(toml::from_str(&s)?)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ConfigError::Io(ref err) => write!(f, "can't read config file: {}", err),
            ConfigError::Parse(ref err) => write!(f, "can't parse config file: {}", err),
        }
    }
}

impl error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            ConfigError::Io(ref err) => Some(err),
            ConfigError::Parse(ref err) => Some(err),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

#[derive(Clone)]
pub struct Config {
    pub logger: slog::Logger,
    pub log_level: Level,
    pub trace: bool,
    pub demo_pubkey: String,
}

impl<'a, 'b> Config {
    pub fn from_args(matches: &ArgMatches) -> Result<Config, ConfigError> {
        let log_level = match matches.occurrences_of("debug") {
            0 => Level::Warning,
            1 => Level::Info,
            2 => Level::Debug,
            _ => Level::Trace,
        };

        let config_file = match matches.value_of("config") {
            Some(path) => ConfigFile::load(Path::new(path))?,
            None => ConfigFile::default(),
        };

        let logger = crate::terminal_logger(log_level);
        debug!(logger, "Config loaded";
            "file" => matches.value_of("config").unwrap_or("-"),
            "trace" => config_file.trace);

        Ok(Config {
            logger,
            log_level,
            trace: matches.is_present("trace") || config_file.trace,
            demo_pubkey: config_file.demo_pubkey,
        })
    }

    pub fn matches() -> App<'a, 'b> {
        App::new("bitcrust-script")
            .version(clap::crate_version!())
            .about("Evaluates Bitcoin-style scripts")
            .arg(Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .help("Location of a toml config file"))
            .arg(Arg::with_name("debug")
                .short("d")
                .long("debug")
                .multiple(true)
                .help("Turn debugging information on"))
            .arg(Arg::with_name("trace")
                .short("t")
                .long("trace")
                .help("Print the stack after every instruction"))
            .subcommand(SubCommand::with_name("eval")
                .about("Evaluate a script")
                .arg(Arg::with_name("program")
                    .help("Script text, e.g. \"<abc> OP_DUP OP_EQUAL\"")
                    .required(true)
                    .index(1)))
            .subcommand(SubCommand::with_name("demo")
                .about("Run the P2PKH demo scripts"))
            .subcommand(SubCommand::with_name("hash")
                .about("Print the hex hash160 of a text, as used with PUSHDATA")
                .arg(Arg::with_name("text")
                    .required(true)
                    .index(1)))
    }
}
