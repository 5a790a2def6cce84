#![forbid(unsafe_code)]

//! Conditional attribute emission over any [`io::Write`].
//!
//! [`StyledStream`] wraps a writer together with its destination identity
//! and a capability gate. Attribute writes consult the gate first: capable
//! destinations get `ESC [ <code> m`, incapable ones get nothing, and the
//! payload bytes pass through unchanged either way.
//!
//! ## Escape Sequence Reference
//!
//! | Write                  | Bytes                                   |
//! |------------------------|-----------------------------------------|
//! | Single attribute       | `ESC [ <code> m`                        |
//! | Modifier (full bundle) | `ESC [ <style> m ESC [ <bg> m ESC [ <fg> m` |
//! | Sentinel axis          | (nothing)                               |
//!
//! The bundle order (Style, then Background, then Foreground) is a
//! contract, not an implementation detail.

use std::io::{self, BufWriter, Stderr, Stdout, Write};

use crate::attr::{Attr, Modifier};
use crate::classify::Target;
use crate::gate::CapabilityGate;

/// Write one SGR sequence: `ESC [ <code> m`.
fn write_sgr(writer: &mut impl Write, code: u8) -> io::Result<()> {
    write!(writer, "\x1b[{code}m")
}

/// A writer that conditionally decorates its output with SGR sequences.
///
/// Payload writes go straight through via the [`Write`] impl; attribute
/// writes are gated. There is no failure path for a well-formed attribute:
/// an incapable destination degrades silently to plain-text passthrough,
/// and only genuine I/O errors from the underlying writer surface.
///
/// # Example
/// ```no_run
/// use std::io::Write;
/// use tinct::{Foreground, Style, StyledStream};
///
/// fn greet() -> std::io::Result<()> {
///     let mut out = StyledStream::stdout();
///     out.apply(Foreground::Green)?.write_all(b"ready")?;
///     out.apply(Foreground::Reset)?.write_all(b"\n")?;
///     out.apply(Style::Reset)?;
///     Ok(())
/// }
/// ```
pub struct StyledStream<'g, W: Write> {
    writer: W,
    target: Target,
    gate: &'g CapabilityGate,
}

impl StyledStream<'static, Stdout> {
    /// Styled handle on the primary output stream, using the shared gate.
    #[must_use]
    pub fn stdout() -> Self {
        Self::with_gate(io::stdout(), Target::Stdout, CapabilityGate::shared())
    }
}

impl StyledStream<'static, Stderr> {
    /// Styled handle on the primary error stream, using the shared gate.
    #[must_use]
    pub fn stderr() -> Self {
        Self::with_gate(io::stderr(), Target::Stderr, CapabilityGate::shared())
    }
}

impl StyledStream<'static, BufWriter<Stderr>> {
    /// Styled handle on the buffered secondary diagnostic stream.
    ///
    /// Shares the error stream's descriptor; buffered output is flushed on
    /// [`Write::flush`] or when the stream is dropped.
    #[must_use]
    pub fn diagnostic() -> Self {
        Self::with_gate(
            BufWriter::new(io::stderr()),
            Target::Diagnostic,
            CapabilityGate::shared(),
        )
    }
}

impl<'g, W: Write> StyledStream<'g, W> {
    /// Wrap `writer` with an explicit destination identity and gate.
    ///
    /// The target is trusted: classification is keyed by it, not by the
    /// writer, so handing a plain `Vec<u8>` in with [`Target::Stdout`]
    /// classifies like the real primary output stream. Destinations the
    /// classifier does not recognize belong under [`Target::Other`].
    #[must_use]
    pub fn with_gate(writer: W, target: Target, gate: &'g CapabilityGate) -> Self {
        Self {
            writer,
            target,
            gate,
        }
    }

    /// Destination identity used for classification.
    #[must_use]
    pub const fn target(&self) -> Target {
        self.target
    }

    /// Apply a single attribute.
    ///
    /// Writes one SGR sequence when the gate allows emission and the value
    /// is not its axis's sentinel; otherwise writes nothing. Returns the
    /// stream for chaining.
    pub fn apply(&mut self, attr: impl Into<Attr>) -> io::Result<&mut Self> {
        let attr = attr.into();
        // Gate first, sentinel second: skipping a sentinel is an explicit
        // no-op, distinct from "capability disabled".
        if self.gate.evaluate(self.target)
            && let Some(code) = attr.code()
        {
            write_sgr(&mut self.writer, code)?;
        }
        Ok(self)
    }

    /// Apply a full modifier bundle.
    ///
    /// Consults the gate once, then emits the Style, Background, and
    /// Foreground axes in that order, each skipping its sentinel
    /// independently.
    pub fn apply_all(&mut self, modifier: Modifier) -> io::Result<&mut Self> {
        if !self.gate.evaluate(self.target) {
            return Ok(self);
        }
        if let Some(code) = modifier.style.code() {
            write_sgr(&mut self.writer, code)?;
        }
        if let Some(code) = modifier.bg.code() {
            write_sgr(&mut self.writer, code)?;
        }
        if let Some(code) = modifier.fg.code() {
            write_sgr(&mut self.writer, code)?;
        }
        Ok(self)
    }

    /// The underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consume the stream, returning the underlying writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Write for StyledStream<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
