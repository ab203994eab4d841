use super::{Span, SpanSink};
use std::fmt;

/// Configuration of the console commands generated from spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillCommandFormat {
    /// The command keyword, `fill` by default.
    pub keyword: String,
}

impl Default for FillCommandFormat {
    fn default() -> Self {
        Self {
            keyword: "fill".to_string(),
        }
    }
}

impl FillCommandFormat {
    /// A format using the given command keyword.
    pub fn with_keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }

    /// The console command filling the cells of `span`.
    #[inline]
    pub fn command<'a>(&'a self, span: &'a Span) -> FillCommand<'a> {
        FillCommand { format: self, span }
    }
}

/// A console command filling the cells of one span, e.g.
/// `fill 3 60 -2 3 64 -2 stone 0 replace`.
///
/// Rendered through its `Display` implementation. The span endpoints are
/// written in their emission order; the tail descriptor, if any, is appended
/// verbatim.
#[derive(Debug, Copy, Clone)]
pub struct FillCommand<'a> {
    format: &'a FillCommandFormat,
    span: &'a Span,
}

impl fmt::Display for FillCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (s, e) = (&self.span.start, &self.span.end);
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.format.keyword, s.x, s.y, s.z, e.x, e.y, e.z
        )?;

        if !self.span.tail.is_empty() {
            write!(f, " {}", self.span.tail)?;
        }

        Ok(())
    }
}

/// A span sink rendering every span as a console fill command.
#[derive(Debug, Clone, Default)]
pub struct FillCommands {
    format: FillCommandFormat,
    commands: Vec<String>,
}

impl FillCommands {
    /// An empty set of commands rendered with the default `fill` keyword.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty set of commands rendered with the given format.
    pub fn with_format(format: FillCommandFormat) -> Self {
        Self {
            format,
            commands: Vec::new(),
        }
    }

    /// The commands rendered so far, in emission order.
    #[inline]
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// The number of commands rendered so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Has no command been rendered yet?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Consumes this sink, returning the rendered commands.
    #[inline]
    pub fn into_commands(self) -> Vec<String> {
        self.commands
    }
}

impl SpanSink for FillCommands {
    fn accept(&mut self, span: Span) {
        self.commands.push(self.format.command(&span).to_string());
    }
}
