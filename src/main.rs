use clap::{App, Arg};
use colored::*;
use std::error::Error;
use std::io::{self, Read};
use std::process;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use claim_reader::constants::TOKEN_ENV;
use claim_reader::helpers::print_output;
use claim_reader::jwt_core::{decode_header, try_extract_claims};
use claim_reader::types::Output;

fn main() -> Result<(), Box<dyn Error>> {
    let matches = App::new("JWT Claim Reader")
        .version("1.0")
        .about("Reads the claims of a JWT without verifying its signature")
        .arg(
            Arg::with_name("token")
                .help("The JWT token to read, or '-' to read it from stdin")
                .env(TOKEN_ENV)
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("format")
                .help("The output format (text, json)")
                .short("f")
                .long("format")
                .takes_value(true)
                .possible_values(&["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::with_name("claim")
                .help("Print only the value of this claim")
                .short("c")
                .long("claim")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .help("Log why a token could not be read")
                .short("v")
                .long("verbose"),
        )
        .get_matches();

    init_logging(matches.is_present("verbose"));

    let token = match matches.value_of("token").unwrap_or_default() {
        "-" => read_stdin()?,
        token => token.to_string(),
    };
    let format = matches.value_of("format").unwrap_or("text");

    let claims = match try_extract_claims(&token) {
        Ok(claims) => claims,
        Err(e) => {
            debug!(error = %e, "token unreadable");
            print_output(format, &Output::unreadable());
            process::exit(1);
        }
    };
    debug!(claims = claims.len(), "token payload decoded");

    if let Some(name) = matches.value_of("claim") {
        match claims.get(name) {
            Some(value) => println!("{}", value),
            None => {
                warn!(claim = name, "claim not present in token");
                eprintln!("{} Claim '{}' not present", "[-]".yellow(), name);
                process::exit(1);
            }
        }
        return Ok(());
    }

    print_output(format, &Output::decoded(decode_header(&token), claims));
    Ok(())
}

fn read_stdin() -> io::Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf.trim().to_string())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}
