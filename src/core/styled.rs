//! Styled text that is only rendered when a record is actually emitted.
//!
//! [`StyledText`] holds a style and the `fmt::Arguments` of a log statement by
//! reference. Nothing is formatted until `Display::fmt` runs, so a styled
//! statement below the logger threshold never touches its arguments, and the
//! output is never formatted twice (a `{}` inside an argument stays literal).

use colored::{Color, ColoredString, Colorize};
use std::fmt;

/// Colors and emphasis applied to a piece of text.
///
/// # Example
///
/// ```
/// use category_logger::Style;
/// use colored::Color;
///
/// let alert = Style::new().fg(Color::Red).bold();
/// let painted = alert.format(format_args!("{} peers lost", 3));
/// assert!(painted.contains("3 peers lost"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Style {
    foreground: Option<Color>,
    background: Option<Color>,
    bold: bool,
    dimmed: bool,
    italic: bool,
    underline: bool,
    strikethrough: bool,
}

impl Style {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            foreground: None,
            background: None,
            bold: false,
            dimmed: false,
            italic: false,
            underline: false,
            strikethrough: false,
        }
    }

    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub const fn dimmed(mut self) -> Self {
        self.dimmed = true;
        self
    }

    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    #[must_use]
    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    #[must_use]
    pub const fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    pub fn is_plain(&self) -> bool {
        *self == Style::new()
    }

    /// Apply the style to already rendered text
    pub fn paint(&self, text: &str) -> ColoredString {
        let mut painted = text.normal();
        if let Some(color) = self.foreground {
            painted = painted.color(color);
        }
        if let Some(color) = self.background {
            painted = painted.on_color(color);
        }
        if self.bold {
            painted = painted.bold();
        }
        if self.dimmed {
            painted = painted.dimmed();
        }
        if self.italic {
            painted = painted.italic();
        }
        if self.underline {
            painted = painted.underline();
        }
        if self.strikethrough {
            painted = painted.strikethrough();
        }
        painted
    }

    /// Format `args` and style the result in one step
    pub fn format(&self, args: fmt::Arguments<'_>) -> String {
        self.paint(&crate::core::format::format(args)).to_string()
    }
}

/// Deferred `style + format string + arguments`.
///
/// Usually built by the logging macros' `style:` form rather than directly.
#[derive(Clone, Copy)]
pub struct StyledText<'a> {
    style: &'a Style,
    args: fmt::Arguments<'a>,
}

impl<'a> StyledText<'a> {
    pub fn new(style: &'a Style, args: fmt::Arguments<'a>) -> Self {
        Self { style, args }
    }

    pub fn style(&self) -> &Style {
        self.style
    }
}

impl fmt::Display for StyledText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.style.paint(&crate::core::format::format(self.args)), f)
    }
}

impl fmt::Debug for StyledText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyledText")
            .field("style", self.style)
            .field("args", &self.args)
            .finish()
    }
}
