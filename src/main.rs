use std::{fs, io::{self, Read}, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use tf_idf_uniqueness::{config::Config, service::{handle_json, StatusCode}};
use tracing::debug;

fn read_body(config: &Config) -> Result<String> {
    match &config.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read request file {}", path.display())),
        None => {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .context("failed to read request from stdin")?;
            Ok(body)
        }
    }
}

fn main() -> Result<ExitCode> {
    let config = Config::parse();
    config.init_tracing();

    let body = read_body(&config)?;
    debug!(bytes = body.len(), "read request");

    let (status, response) = handle_json(&body, config.pretty);
    println!("{response}");

    Ok(match status {
        StatusCode::Ok => ExitCode::SUCCESS,
        StatusCode::BadRequest => ExitCode::from(1),
        StatusCode::InternalServerError => ExitCode::from(2),
    })
}
