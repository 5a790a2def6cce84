#![forbid(unsafe_code)]

//! Conditional ANSI text styling with terminal capability detection.
//!
//! Programs tag pieces of output with colors and text styles by applying
//! symbolic attribute values to a [`StyledStream`]; the attributes become
//! SGR escape sequences when the destination is an interactive,
//! style-capable terminal and disappear entirely when it is not (output
//! redirected to a file or pipe, a dumb terminal type, an unset `TERM`).
//!
//! Three layers, leaves first:
//!
//! - [`classify`]: pure OS/environment queries: is this destination a
//!   terminal, and does the declared terminal type support styling?
//! - [`gate`]: the refresh policy ([`CapabilityMode`]) plus the cached
//!   classification behind a single lock.
//! - [`stream`]: [`StyledStream`], which turns attributes into escape
//!   sequences or silence and passes payload bytes through untouched.
//!
//! # Example
//!
//! ```no_run
//! use std::io::Write;
//! use tinct::{CapabilityMode, Foreground, Modifier, Style, StyledStream};
//!
//! fn main() -> std::io::Result<()> {
//!     // Honor the terminal by default; hosts may force or disable styling.
//!     tinct::set_mode(CapabilityMode::Auto);
//!
//!     let mut out = StyledStream::stdout();
//!     let heading = Modifier::new().style(Style::Bold).fg(Foreground::Cyan);
//!     out.apply_all(heading)?.write_all(b"tinct\n")?;
//!     out.apply(Style::Reset)?;
//!     Ok(())
//! }
//! ```
//!
//! Capability state is an explicit [`CapabilityGate`]; the convenience
//! constructors share one process-wide gate, while embedders that want
//! scoped state construct their own and wire it with
//! [`StyledStream::with_gate`].

pub mod attr;
pub mod classify;
pub mod gate;
pub mod logging;
pub mod stream;

pub use attr::{Attr, Background, Foreground, Modifier, Style};
pub use classify::{Classifier, HostClassifier, Target};
pub use gate::{CapabilityGate, CapabilityMode};
pub use stream::StyledStream;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace};

/// Select the capability mode of the process-wide shared gate.
///
/// Equivalent to `CapabilityGate::shared().set_mode(mode)`. Any cached
/// classification is cleared; the next evaluation recomputes.
pub fn set_mode(mode: CapabilityMode) {
    CapabilityGate::shared().set_mode(mode);
}

/// Capability mode of the process-wide shared gate.
#[must_use]
pub fn mode() -> CapabilityMode {
    CapabilityGate::shared().mode()
}
