#![forbid(unsafe_code)]

//! Capability classification: interactive-terminal and style-support queries.
//!
//! Both queries are pure reads of OS/environment state at call time; nothing
//! is cached here. The refresh policy lives in [`crate::gate`].
//!
//! # Detection Strategy
//!
//! - Interactive: resolve the destination to one of the standard OS
//!   descriptors and ask the host whether it is attached to a terminal
//!   device. Destinations other than the three standard streams never
//!   classify as interactive.
//! - Style support: on Unix, `TERM` is matched (case-sensitive substring)
//!   against a fixed allow-list of terminal types known to honor SGR
//!   sequences; an absent `TERM` means "not style-capable". On Windows the
//!   console host processes VT sequences on every supported version, so the
//!   query is unconditionally true.
//!
//! A classification that cannot be determined degrades to "not capable"
//! rather than erroring; styled output falls back to plain text.
//!
//! The platform implementation is selected at build time. Targets with
//! neither a Unix nor a Windows terminal layer are rejected by the compiler.

use std::env;

#[cfg(not(any(unix, windows)))]
compile_error!(
    "tinct has no terminal classifier for this target platform (expected unix or windows)"
);

/// Identity of an output destination, as seen by the classifier.
///
/// Only the three standard process streams are recognized; everything else
/// is [`Target::Other`] and never classifies as interactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Primary output stream (stdout).
    Stdout,
    /// Primary error stream (stderr).
    Stderr,
    /// Secondary diagnostic stream; buffered, shares the error stream's
    /// descriptor.
    Diagnostic,
    /// Anything else: files, pipes, sockets, in-memory writers.
    Other,
}

/// Classification queries, injectable for tests and embedders.
///
/// Implementations must be pure queries against OS/environment state at call
/// time; caching belongs to [`crate::gate::CapabilityGate`].
pub trait Classifier: Send + Sync {
    /// Whether `target` is attached to an interactive terminal device.
    fn is_interactive(&self, target: Target) -> bool;

    /// Whether the terminal's declared type is known to support ANSI styling.
    fn style_support(&self) -> bool;
}

/// Terminal types known to honor SGR escape sequences.
///
/// Matched against `TERM` by case-sensitive substring containment, so
/// `xterm-256color` and `screen.xterm-256color` both qualify via `xterm`.
/// Fixed at build time; not user-configurable.
const STYLE_CAPABLE_TERMS: &[&str] = &[
    "ansi", "color", "console", "cygwin", "gnome", "konsole", "kterm", "linux", "msys", "putty",
    "rxvt", "screen", "tmux", "vt100", "xterm",
];

/// Environment inputs consumed by style-support classification.
///
/// Split from the decision logic so the allow-list can be tested without
/// touching the process environment.
#[derive(Debug, Clone)]
struct EnvInputs {
    term: Option<String>,
}

impl EnvInputs {
    fn from_env() -> Self {
        Self {
            term: env::var("TERM").ok(),
        }
    }
}

/// Style-support verdict for a given `TERM` value; absent means no styling.
fn term_supports_styles(term: Option<&str>) -> bool {
    match term {
        Some(term) => STYLE_CAPABLE_TERMS.iter().any(|known| term.contains(known)),
        None => false,
    }
}

/// Build-time host classifier for the current platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostClassifier;

#[cfg(unix)]
impl Classifier for HostClassifier {
    fn is_interactive(&self, target: Target) -> bool {
        match target {
            Target::Stdout => rustix::termios::isatty(std::io::stdout()),
            // The diagnostic stream is a buffered view of the same descriptor.
            Target::Stderr | Target::Diagnostic => rustix::termios::isatty(std::io::stderr()),
            Target::Other => false,
        }
    }

    fn style_support(&self) -> bool {
        term_supports_styles(EnvInputs::from_env().term.as_deref())
    }
}

#[cfg(windows)]
impl Classifier for HostClassifier {
    fn is_interactive(&self, target: Target) -> bool {
        use std::io::IsTerminal;
        // `IsTerminal` asks the console host first and falls back to the
        // MSYS/Cygwin pseudo-terminal pipe probe when that query is negative.
        match target {
            Target::Stdout => std::io::stdout().is_terminal(),
            Target::Stderr | Target::Diagnostic => std::io::stderr().is_terminal(),
            Target::Other => false,
        }
    }

    fn style_support(&self) -> bool {
        // The console host processes VT sequences on every supported Windows
        // version; capability does not vary with TERM.
        true
    }
}
