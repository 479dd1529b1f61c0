use std::io;

use crate::{EscapeStyle, RenderOptions, RenderPolicy, Sink};

/// Settings of the [`Json`] policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JsonOptions {
    /// Keep empty children.
    pub verbose: bool,
    /// Emit `ruleindex` fields.
    pub include_index: bool,
    pub escape: EscapeStyle,
}

impl Default for JsonOptions {
    fn default() -> Self {
        JsonOptions {
            verbose: false,
            include_index: true,
            escape: EscapeStyle::Json,
        }
    }
}

impl JsonOptions {
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn with_index(mut self, include_index: bool) -> Self {
        self.include_index = include_index;
        self
    }

    #[must_use]
    pub fn with_escape(mut self, escape: EscapeStyle) -> Self {
        self.escape = escape;
        self
    }
}

/// One JSON object per node: `rulename`, optionally `ruleindex`, then one
/// of `text`, `error` or `children`.
///
/// ```text
/// {
///     "rulename": "root",
///     "ruleindex": 0,
///     "children": [
///         {
///             "rulename": "number",
///             "ruleindex": 0,
///             "text": "42"
///         }
///     ]
/// }
/// ```
///
/// Lists always open a `children` array. Objects and arrays track their
/// own separators, so there is never a trailing comma.
#[derive(Clone, Debug, Default)]
pub struct Json {
    options: JsonOptions,
    /// One entry per open object: how many fields it has so far.
    objects: Vec<usize>,
    /// One entry per open array: whether it has elements.
    arrays: Vec<bool>,
    scratch: String,
}

impl Json {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: JsonOptions) -> Self {
        Json {
            options,
            ..Self::default()
        }
    }

    /// Indentation level of the next line.
    fn level(&self) -> usize {
        self.objects.len() + self.arrays.len()
    }

    fn field(&mut self, out: &mut Sink<'_>, key: &str) -> io::Result<()> {
        if let Some(fields) = self.objects.last_mut() {
            if *fields > 0 {
                out.put(",")?;
            }
            *fields += 1;
        }
        out.newline_at(self.level())?;
        out.put("\"")?;
        out.put(key)?;
        out.put("\": ")
    }

    fn string(&mut self, out: &mut Sink<'_>, value: &str) -> io::Result<()> {
        self.scratch.clear();
        self.options.escape.escape_into(value, &mut self.scratch);
        out.put("\"")?;
        out.put(&self.scratch)?;
        out.put("\"")
    }
}

impl RenderPolicy for Json {
    fn options(&self) -> RenderOptions {
        RenderOptions::new(self.options.verbose, false)
    }

    fn put_main_begin(&mut self, out: &mut Sink<'_>) -> io::Result<()> {
        self.objects.push(0);
        out.put("{")
    }

    fn put_name(&mut self, out: &mut Sink<'_>, name: &str) -> io::Result<()> {
        self.field(out, "rulename")?;
        self.string(out, name)
    }

    fn put_index(&mut self, out: &mut Sink<'_>, index: usize) -> io::Result<()> {
        if !self.options.include_index {
            return Ok(());
        }
        self.field(out, "ruleindex")?;
        out.put(&index.to_string())
    }

    fn put_text(&mut self, out: &mut Sink<'_>, text: &str) -> io::Result<()> {
        self.field(out, "text")?;
        self.string(out, text)
    }

    fn put_error(&mut self, out: &mut Sink<'_>, message: &str) -> io::Result<()> {
        self.field(out, "error")?;
        self.string(out, message)
    }

    fn put_ln_begin(&mut self, out: &mut Sink<'_>) -> io::Result<()> {
        self.field(out, "children")?;
        self.arrays.push(false);
        out.put("[")
    }

    fn put_ln(&mut self, out: &mut Sink<'_>, first: bool) -> io::Result<()> {
        if !first {
            out.put(",")?;
        }
        if let Some(filled) = self.arrays.last_mut() {
            *filled = true;
        }
        out.newline_at(self.level())
    }

    fn put_ln_end(&mut self, out: &mut Sink<'_>) -> io::Result<()> {
        let filled = self.arrays.pop().unwrap_or(false);
        if filled {
            out.newline_at(self.level())?;
        }
        out.put("]")
    }

    fn put_main_end(&mut self, out: &mut Sink<'_>) -> io::Result<()> {
        let fields = self.objects.pop().unwrap_or(0);
        if fields > 0 {
            out.newline_at(self.level())?;
        }
        out.put("}")
    }
}
