#[macro_use]
extern crate slog;
extern crate bitcrust_script;
extern crate clap;

use std::process;

use clap::ArgMatches;

use bitcrust_script::config::Config;
use bitcrust_script::demo;
use bitcrust_script::script::trace::{NoTrace, TraceLog, Tracer};
use bitcrust_script::{evaluate_with_logger, util, Crypto, MockCrypto};

fn main() {
    let matches = Config::matches().get_matches();

    let config = match Config::from_args(&matches) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(2);
        }
    };

    let ok = match matches.subcommand() {
        ("eval", Some(eval_matches)) => eval(&config, eval_matches),
        ("demo", Some(_)) => run_demo(&config),
        ("hash", Some(hash_matches)) => hash(hash_matches),
        _ => {
            println!("{}", matches.usage());
            true
        }
    };

    if !ok {
        process::exit(1);
    }
}

fn eval(config: &Config, matches: &ArgMatches) -> bool {
    let program = matches.value_of("program").unwrap_or_default();

    let mut log = TraceLog::new();
    let mut no_trace = NoTrace;
    let tracer: &mut dyn Tracer = if config.trace { &mut log } else { &mut no_trace };
    let result = evaluate_with_logger(program, &MockCrypto, tracer, config.logger.clone());

    for line in log.lines() {
        println!("{}", line);
    }

    match result {
        Ok(verdict) => {
            info!(config.logger, "eval - done"; "verdict" => verdict);
            println!("{}", verdict);
            verdict
        }
        Err(err) => {
            info!(config.logger, "eval - aborted"; "error" => %err);
            println!("Script error: {}", err);
            false
        }
    }
}

fn run_demo(config: &Config) -> bool {
    let crypto = MockCrypto;
    let mut ok = true;

    for scenario in demo::scenarios(&crypto, &config.demo_pubkey) {
        println!("== {}", scenario.name);
        println!("{}", scenario.program);

        let (result, log) = demo::run(&crypto, &scenario, &config.logger);
        if config.trace {
            println!();
            for line in log.lines() {
                println!("{}", line);
            }
        }

        match result {
            Ok(true) => println!("Result: valid\n"),
            Ok(false) => println!("Result: invalid\n"),
            Err(err) => {
                println!("Result: failed ({})\n", err);
                ok = false;
            }
        }
    }

    ok
}

fn hash(matches: &ArgMatches) -> bool {
    let text = matches.value_of("text").unwrap_or_default();
    println!("{}", util::to_hex(&MockCrypto.hash160(text.as_bytes())));
    true
}
