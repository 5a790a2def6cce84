#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via `TINCT_DEMO_*` prefix.

use std::env;
use std::process;
use std::str::FromStr;

use tinct::CapabilityMode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
tinct-demo: attribute gallery for the tinct styling library

USAGE:
    tinct-demo [OPTIONS]

OPTIONS:
    --mode=MODE          Capability mode: 'auto' (default), 'once',
                         'always', or 'never'
    --stream=STREAM      Destination: 'stdout' (default), 'stderr',
                         or 'diagnostic'
    --help, -h           Show this help message
    --version, -V        Show version

Pipe the output through `cat -v` (or redirect it to a file) to watch the
escape sequences disappear under 'auto', and reappear under 'always'.

ENVIRONMENT VARIABLES:
    TINCT_DEMO_MODE      Override --mode
    TINCT_DEMO_STREAM    Override --stream";

/// Parsed command-line options.
pub struct Opts {
    /// Capability mode for the shared gate.
    pub mode: CapabilityMode,
    /// Destination stream name: "stdout", "stderr", or "diagnostic".
    pub stream: String,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            mode: CapabilityMode::Auto,
            stream: "stdout".into(),
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn parse() -> Self {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Ok(val) = env::var("TINCT_DEMO_MODE")
            && let Ok(mode) = CapabilityMode::from_str(&val)
        {
            opts.mode = mode;
        }
        if let Ok(val) = env::var("TINCT_DEMO_STREAM") {
            opts.stream = val;
        }

        // Parse command-line args (override env vars)
        for arg in env::args().skip(1) {
            if let Some(val) = arg.strip_prefix("--mode=") {
                match CapabilityMode::from_str(val) {
                    Ok(mode) => opts.mode = mode,
                    Err(()) => {
                        eprintln!("unknown mode '{val}' (expected auto|once|always|never)");
                        process::exit(2);
                    }
                }
            } else if let Some(val) = arg.strip_prefix("--stream=") {
                opts.stream = val.to_string();
            } else if arg == "--help" || arg == "-h" {
                println!("{HELP_TEXT}");
                process::exit(0);
            } else if arg == "--version" || arg == "-V" {
                println!("tinct-demo {VERSION}");
                process::exit(0);
            } else {
                eprintln!("unknown option '{arg}' (try --help)");
                process::exit(2);
            }
        }

        if !matches!(opts.stream.as_str(), "stdout" | "stderr" | "diagnostic") {
            eprintln!(
                "unknown stream '{}' (expected stdout|stderr|diagnostic)",
                opts.stream
            );
            process::exit(2);
        }

        opts
    }
}
