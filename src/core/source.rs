//! Source locations attached to records, and the path shortening applied
//! when they are rendered.

use std::sync::OnceLock;

/// Where a log statement lives, captured by [`source_location!`](crate::source_location).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
    pub module_path: &'static str,
}

impl SourceLocation {
    pub const fn new(file: &'static str, line: u32, module_path: &'static str) -> Self {
        Self {
            file,
            line,
            module_path,
        }
    }
}

/// Source roots baked in at build time through `CATEGORY_LOGGER_SOURCE_ROOTS`,
/// split with the platform path-list separator.
pub fn compiled_source_roots() -> &'static [String] {
    static ROOTS: OnceLock<Vec<String>> = OnceLock::new();
    ROOTS.get_or_init(|| match option_env!("CATEGORY_LOGGER_SOURCE_ROOTS") {
        Some(raw) => parse_source_roots(raw),
        None => Vec::new(),
    })
}

/// Split a path list (`:` on unix, `;` on windows) into non-empty roots.
pub fn parse_source_roots(raw: &str) -> Vec<String> {
    std::env::split_paths(raw)
        .filter_map(|p| p.to_str().map(str::to_owned))
        .filter(|p| !p.is_empty())
        .collect()
}

/// Shorten `path` for display.
///
/// The first root that prefixes `path` on a directory boundary is stripped
/// along with the separator following it. Without a matching root only the
/// file name is kept.
pub fn trim_source_path<'a>(path: &'a str, roots: &[String]) -> &'a str {
    for root in roots {
        if let Some(rest) = path.strip_prefix(root.as_str()) {
            let on_boundary = root.ends_with(['/', '\\']) || rest.starts_with(['/', '\\']);
            if !on_boundary {
                continue;
            }
            let rest = rest.trim_start_matches(['/', '\\']);
            if !rest.is_empty() {
                return rest;
            }
        }
    }

    match path.rfind(['/', '\\']) {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}
