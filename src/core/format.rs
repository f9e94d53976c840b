//! Formatting shortcuts over `core::fmt`.
//!
//! The format string is checked at compile time by `format_args!`, so a
//! placeholder/argument mismatch never reaches runtime.
//!
//! ```
//! use category_logger::{format_append, formatted};
//!
//! assert_eq!(formatted!("xyz {}", 42), "xyz 42");
//!
//! let mut s = String::from("a=");
//! format_append!(s, "{}", 1).unwrap();
//! assert_eq!(s, "a=1");
//! ```

use std::fmt;

/// Render `args` to a new string.
#[inline]
pub fn format(args: fmt::Arguments<'_>) -> String {
    match args.as_str() {
        Some(literal) => literal.to_owned(),
        None => fmt::format(args),
    }
}

/// Append the rendering of `args` to `out` without an intermediate string.
#[inline]
pub fn format_to<W: fmt::Write + ?Sized>(out: &mut W, args: fmt::Arguments<'_>) -> fmt::Result {
    out.write_fmt(args)
}
