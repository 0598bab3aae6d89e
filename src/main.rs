use log::{error, info};
use smlcore::{DecoderConfig, Reader};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

/* Reads one hex encoded SML file per line from stdin, prints one JSON instruction per line */
fn main() -> ExitCode {
    let default_filter = std::env::var("SML_LOG_LEVEL").unwrap_or("info".to_string());
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(default_filter));

    let config = match DecoderConfig::load_default() {
        Ok(c) => c,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let reader = Reader::new(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = false;

    for (no, line) in io::stdin().lock().lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!("Unable to read stdin: {e}");
                return ExitCode::FAILURE;
            }
        };
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let data = match hex::decode(line.replace(' ', "")) {
            Ok(d) => d,
            Err(e) => {
                error!("Line {}: no hex data: {e}", no + 1);
                failed = true;
                continue;
            }
        };

        let instructions = match reader.read_bytes(&data) {
            Ok(i) => i,
            Err(e) => {
                error!("Line {}: {e}", no + 1);
                failed = true;
                continue;
            }
        };
        info!("Line {}: {} instructions", no + 1, instructions.len());

        for instruction in instructions {
            match serde_json::to_string(&instruction) {
                Ok(json) => {
                    if writeln!(out, "{json}").is_err() {
                        return ExitCode::FAILURE;
                    }
                }
                Err(e) => error!("Unable to serialize {}: {e}", instruction.name()),
            }
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
