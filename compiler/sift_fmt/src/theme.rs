//! Styling for tree output.

use std::borrow::Cow;
use std::io;

use crate::Sink;

/// ANSI escape sequences used by [`Theme::ansi`].
mod colors {
    pub const TEXT: &str = "\x1b[1m"; // Bold
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const INDEX: &str = "\x1b[1;36m"; // Bold cyan
    pub const FAINT: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// For `Auto`, `is_tty` decides; it is ignored otherwise.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Style tokens written around styled output. Empty tokens write nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Matched text.
    pub text: Cow<'static, str>,
    /// The `ERROR: ` marker.
    pub error: Cow<'static, str>,
    /// Grammar-site indices.
    pub index: Cow<'static, str>,
    /// Separators.
    pub faint: Cow<'static, str>,
    /// Ends any of the above.
    pub reset: Cow<'static, str>,
}

impl Theme {
    /// No styling at all.
    pub const fn plain() -> Self {
        Theme {
            text: Cow::Borrowed(""),
            error: Cow::Borrowed(""),
            index: Cow::Borrowed(""),
            faint: Cow::Borrowed(""),
            reset: Cow::Borrowed(""),
        }
    }

    /// ANSI terminal colors.
    pub const fn ansi() -> Self {
        Theme {
            text: Cow::Borrowed(colors::TEXT),
            error: Cow::Borrowed(colors::ERROR),
            index: Cow::Borrowed(colors::INDEX),
            faint: Cow::Borrowed(colors::FAINT),
            reset: Cow::Borrowed(colors::RESET),
        }
    }

    pub fn for_mode(mode: ColorMode, is_tty: bool) -> Self {
        if mode.should_use_colors(is_tty) {
            Self::ansi()
        } else {
            Self::plain()
        }
    }

    /// Write `text` wrapped in `style` and the reset token.
    pub(crate) fn put(&self, out: &mut Sink<'_>, style: &str, text: &str) -> io::Result<()> {
        if style.is_empty() {
            return out.put(text);
        }
        out.put(style)?;
        out.put(text)?;
        out.put(&self.reset)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::plain()
    }
}
