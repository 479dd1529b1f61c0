use std::io;

use crate::{RenderOptions, RenderPolicy, Sink, Theme};

const ERROR_MARKER: &str = "ERROR: ";

/// Indented outline of matched text and errors, without rule names.
///
/// ```text
/// =>
///     if
///     42
/// ```
#[derive(Clone, Debug)]
pub struct SimpleTree {
    options: RenderOptions,
    theme: Theme,
}

impl Default for SimpleTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleTree {
    /// Non-verbose and compact.
    pub fn new() -> Self {
        SimpleTree {
            options: RenderOptions::new(false, true),
            theme: Theme::plain(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

impl RenderPolicy for SimpleTree {
    fn options(&self) -> RenderOptions {
        self.options
    }

    fn put_text(&mut self, out: &mut Sink<'_>, text: &str) -> io::Result<()> {
        self.theme.put(out, &self.theme.text, text)
    }

    fn put_error(&mut self, out: &mut Sink<'_>, message: &str) -> io::Result<()> {
        self.theme.put(out, &self.theme.error, ERROR_MARKER)?;
        out.put(message)
    }

    fn put_placeholder(&mut self, out: &mut Sink<'_>) -> io::Result<()> {
        out.put("=>")
    }

    fn put_ln(&mut self, out: &mut Sink<'_>, _first: bool) -> io::Result<()> {
        out.newline()
    }
}

/// Outline annotated with `name[index]` for every node and a separator
/// before each payload.
///
/// ```text
/// root[0]
///     keyword[0] - if
///     number[0] - 42
/// ```
#[derive(Clone, Debug)]
pub struct FullTree {
    options: RenderOptions,
    theme: Theme,
}

impl Default for FullTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FullTree {
    /// Non-verbose and compact.
    pub fn new() -> Self {
        FullTree {
            options: RenderOptions::new(false, true),
            theme: Theme::plain(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

impl RenderPolicy for FullTree {
    fn options(&self) -> RenderOptions {
        self.options
    }

    fn put_name(&mut self, out: &mut Sink<'_>, name: &str) -> io::Result<()> {
        out.put(name)
    }

    fn put_index(&mut self, out: &mut Sink<'_>, index: usize) -> io::Result<()> {
        out.put("[")?;
        self.theme.put(out, &self.theme.index, &index.to_string())?;
        out.put("]")
    }

    fn put_begin(&mut self, out: &mut Sink<'_>) -> io::Result<()> {
        self.theme.put(out, &self.theme.faint, " - ")
    }

    fn put_text(&mut self, out: &mut Sink<'_>, text: &str) -> io::Result<()> {
        self.theme.put(out, &self.theme.text, text)
    }

    fn put_error(&mut self, out: &mut Sink<'_>, message: &str) -> io::Result<()> {
        self.theme.put(out, &self.theme.error, ERROR_MARKER)?;
        out.put(message)
    }

    fn put_ln(&mut self, out: &mut Sink<'_>, _first: bool) -> io::Result<()> {
        out.newline()
    }
}
