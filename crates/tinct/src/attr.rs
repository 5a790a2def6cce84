#![forbid(unsafe_code)]

//! Attribute catalogs: the three styling axes and the [`Modifier`] bundle.
//!
//! Each axis is a closed set of symbolic values mapping to an SGR parameter.
//! Two values are distinguished on every axis:
//!
//! - `Reset`: the axis-specific reset code,
//! - `None`: the no-op sentinel, meaning "leave this axis untouched".
//!
//! Attributes are immutable `Copy` values; equality is symbolic identity.
//! Whether an attribute actually reaches the destination is decided by the
//! emission layer in [`crate::stream`], not here.

/// Text style attributes (SGR 0–9).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Style {
    /// No-op sentinel; leaves the style axis untouched.
    #[default]
    None,
    /// Reset all attributes (SGR 0).
    Reset,
    /// Bold / increased intensity.
    Bold,
    /// Dim / decreased intensity.
    Dim,
    /// Italic text.
    Italic,
    /// Single underline.
    Underline,
    /// Slow blink.
    Blink,
    /// Rapid blink.
    RapidBlink,
    /// Reverse video (swap fg/bg).
    Reversed,
    /// Concealed / hidden text.
    Conceal,
    /// Crossed-out text.
    CrossedOut,
}

impl Style {
    /// SGR parameter for this attribute, or `None` for the sentinel.
    #[must_use]
    pub const fn code(self) -> Option<u8> {
        match self {
            Self::None => None,
            Self::Reset => Some(0),
            Self::Bold => Some(1),
            Self::Dim => Some(2),
            Self::Italic => Some(3),
            Self::Underline => Some(4),
            Self::Blink => Some(5),
            Self::RapidBlink => Some(6),
            Self::Reversed => Some(7),
            Self::Conceal => Some(8),
            Self::CrossedOut => Some(9),
        }
    }
}

/// Foreground colors (SGR 30–37, 90–97, reset 39).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Foreground {
    /// No-op sentinel; leaves the foreground axis untouched.
    #[default]
    None,
    /// Restore the default foreground (SGR 39).
    Reset,
    /// Black (SGR 30).
    Black,
    /// Red (SGR 31).
    Red,
    /// Green (SGR 32).
    Green,
    /// Yellow (SGR 33).
    Yellow,
    /// Blue (SGR 34).
    Blue,
    /// Magenta (SGR 35).
    Magenta,
    /// Cyan (SGR 36).
    Cyan,
    /// White (SGR 37).
    White,
    /// Bright black / gray (SGR 90).
    BrightBlack,
    /// Bright red (SGR 91).
    BrightRed,
    /// Bright green (SGR 92).
    BrightGreen,
    /// Bright yellow (SGR 93).
    BrightYellow,
    /// Bright blue (SGR 94).
    BrightBlue,
    /// Bright magenta (SGR 95).
    BrightMagenta,
    /// Bright cyan (SGR 96).
    BrightCyan,
    /// Bright white (SGR 97).
    BrightWhite,
}

impl Foreground {
    /// SGR parameter for this attribute, or `None` for the sentinel.
    #[must_use]
    pub const fn code(self) -> Option<u8> {
        match self {
            Self::None => None,
            Self::Reset => Some(39),
            Self::Black => Some(30),
            Self::Red => Some(31),
            Self::Green => Some(32),
            Self::Yellow => Some(33),
            Self::Blue => Some(34),
            Self::Magenta => Some(35),
            Self::Cyan => Some(36),
            Self::White => Some(37),
            Self::BrightBlack => Some(90),
            Self::BrightRed => Some(91),
            Self::BrightGreen => Some(92),
            Self::BrightYellow => Some(93),
            Self::BrightBlue => Some(94),
            Self::BrightMagenta => Some(95),
            Self::BrightCyan => Some(96),
            Self::BrightWhite => Some(97),
        }
    }
}

/// Background colors (SGR 40–47, 100–107, reset 49).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Background {
    /// No-op sentinel; leaves the background axis untouched.
    #[default]
    None,
    /// Restore the default background (SGR 49).
    Reset,
    /// Black (SGR 40).
    Black,
    /// Red (SGR 41).
    Red,
    /// Green (SGR 42).
    Green,
    /// Yellow (SGR 43).
    Yellow,
    /// Blue (SGR 44).
    Blue,
    /// Magenta (SGR 45).
    Magenta,
    /// Cyan (SGR 46).
    Cyan,
    /// White (SGR 47).
    White,
    /// Bright black / gray (SGR 100).
    BrightBlack,
    /// Bright red (SGR 101).
    BrightRed,
    /// Bright green (SGR 102).
    BrightGreen,
    /// Bright yellow (SGR 103).
    BrightYellow,
    /// Bright blue (SGR 104).
    BrightBlue,
    /// Bright magenta (SGR 105).
    BrightMagenta,
    /// Bright cyan (SGR 106).
    BrightCyan,
    /// Bright white (SGR 107).
    BrightWhite,
}

impl Background {
    /// SGR parameter for this attribute, or `None` for the sentinel.
    #[must_use]
    pub const fn code(self) -> Option<u8> {
        match self {
            Self::None => None,
            Self::Reset => Some(49),
            Self::Black => Some(40),
            Self::Red => Some(41),
            Self::Green => Some(42),
            Self::Yellow => Some(43),
            Self::Blue => Some(44),
            Self::Magenta => Some(45),
            Self::Cyan => Some(46),
            Self::White => Some(47),
            Self::BrightBlack => Some(100),
            Self::BrightRed => Some(101),
            Self::BrightGreen => Some(102),
            Self::BrightYellow => Some(103),
            Self::BrightBlue => Some(104),
            Self::BrightMagenta => Some(105),
            Self::BrightCyan => Some(106),
            Self::BrightWhite => Some(107),
        }
    }
}

/// A single attribute on any of the three axes.
///
/// The emission entry point takes `impl Into<Attr>` so call sites can pass
/// an axis value directly; handling is exhaustive over the three axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attr {
    /// A text style attribute.
    Style(Style),
    /// A foreground color.
    Fg(Foreground),
    /// A background color.
    Bg(Background),
}

impl Attr {
    /// SGR parameter for this attribute, or `None` for an axis sentinel.
    #[must_use]
    pub const fn code(self) -> Option<u8> {
        match self {
            Self::Style(style) => style.code(),
            Self::Fg(fg) => fg.code(),
            Self::Bg(bg) => bg.code(),
        }
    }
}

impl From<Style> for Attr {
    fn from(style: Style) -> Self {
        Self::Style(style)
    }
}

impl From<Foreground> for Attr {
    fn from(fg: Foreground) -> Self {
        Self::Fg(fg)
    }
}

impl From<Background> for Attr {
    fn from(bg: Background) -> Self {
        Self::Bg(bg)
    }
}

/// A bundle of one attribute per axis, emitted together.
///
/// All three axes default to the `None` sentinel; an axis is never absent,
/// only explicitly untouched. Emission order is fixed: Style, then
/// Background, then Foreground (see [`crate::stream::StyledStream::apply_all`]).
///
/// # Example
/// ```
/// use tinct::{Background, Foreground, Modifier, Style};
///
/// let warning = Modifier::new()
///     .style(Style::Bold)
///     .fg(Foreground::Yellow);
/// assert_eq!(warning.bg, Background::None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifier {
    /// Text style axis.
    pub style: Style,
    /// Foreground color axis.
    pub fg: Foreground,
    /// Background color axis.
    pub bg: Background,
}

impl Modifier {
    /// A modifier with every axis set to the no-op sentinel.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: Style::None,
            fg: Foreground::None,
            bg: Background::None,
        }
    }

    /// Set the style axis.
    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the foreground axis.
    #[must_use]
    pub const fn fg(mut self, fg: Foreground) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background axis.
    #[must_use]
    pub const fn bg(mut self, bg: Background) -> Self {
        self.bg = bg;
        self
    }

    /// Whether every axis is the sentinel (emits nothing, even when capable).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.style, Style::None)
            && matches!(self.fg, Foreground::None)
            && matches!(self.bg, Background::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_carry_no_code() {
        assert_eq!(Style::None.code(), None);
        assert_eq!(Foreground::None.code(), None);
        assert_eq!(Background::None.code(), None);
    }

    #[test]
    fn axis_reset_codes() {
        assert_eq!(Style::Reset.code(), Some(0));
        assert_eq!(Foreground::Reset.code(), Some(39));
        assert_eq!(Background::Reset.code(), Some(49));
    }

    #[test]
    fn color_code_blocks_are_offset_by_ten() {
        assert_eq!(Foreground::Black.code(), Some(30));
        assert_eq!(Background::Black.code(), Some(40));
        assert_eq!(Foreground::White.code(), Some(37));
        assert_eq!(Background::White.code(), Some(47));
        assert_eq!(Foreground::BrightBlack.code(), Some(90));
        assert_eq!(Background::BrightBlack.code(), Some(100));
        assert_eq!(Foreground::BrightWhite.code(), Some(97));
        assert_eq!(Background::BrightWhite.code(), Some(107));
    }

    #[test]
    fn style_codes_are_contiguous() {
        let styles = [
            Style::Reset,
            Style::Bold,
            Style::Dim,
            Style::Italic,
            Style::Underline,
            Style::Blink,
            Style::RapidBlink,
            Style::Reversed,
            Style::Conceal,
            Style::CrossedOut,
        ];
        for (i, style) in styles.iter().enumerate() {
            assert_eq!(style.code(), Some(i as u8));
        }
    }

    #[test]
    fn attr_union_delegates_codes() {
        assert_eq!(Attr::from(Style::Underline).code(), Some(4));
        assert_eq!(Attr::from(Foreground::Red).code(), Some(31));
        assert_eq!(Attr::from(Background::Red).code(), Some(41));
        assert_eq!(Attr::from(Style::None).code(), None);
    }

    #[test]
    fn default_modifier_is_empty() {
        assert!(Modifier::default().is_empty());
        assert!(Modifier::new().is_empty());
        assert_eq!(Modifier::default(), Modifier::new());
    }

    #[test]
    fn modifier_builder_sets_axes_independently() {
        let m = Modifier::new()
            .style(Style::Underline)
            .bg(Background::Red);
        assert_eq!(m.style, Style::Underline);
        assert_eq!(m.bg, Background::Red);
        assert_eq!(m.fg, Foreground::None);
        assert!(!m.is_empty());
    }

    #[test]
    fn modifier_equality_is_symbolic() {
        let a = Modifier::new().fg(Foreground::Cyan);
        let b = Modifier::new().fg(Foreground::Cyan);
        assert_eq!(a, b);
        assert_ne!(a, b.fg(Foreground::BrightCyan));
    }

    #[test]
    fn modifier_is_hashable() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Modifier::new().style(Style::Bold));
        set.insert(Modifier::new().style(Style::Dim));
        set.insert(Modifier::new().style(Style::Bold));
        assert_eq!(set.len(), 2);
    }
}
