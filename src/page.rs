//! Pure page-level helpers shared by the browser glue.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Whether `path` is the site's homepage, where the hero reveal runs.
#[must_use]
pub fn is_homepage(path: &str) -> bool {
    path == "/" || path == "/home" || path.ends_with("/index.html") || path.ends_with('/')
}

/// A parsed `var(--name)` or `var(--name, fallback)` reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CssVar<'a> {
    pub name: &'a str,
    pub fallback: Option<&'a str>,
}

/// Parse a CSS custom property reference. Anything else is `None`.
#[must_use]
pub fn parse_css_var(raw: &str) -> Option<CssVar<'_>> {
    let inner = raw.trim().strip_prefix("var(")?.strip_suffix(')')?;
    let (name, fallback) = match inner.split_once(',') {
        Some((name, fallback)) => (name.trim(), Some(fallback.trim()).filter(|f| !f.is_empty())),
        None => (inner.trim(), None),
    };
    if !name.starts_with("--") || name.len() < 3 {
        return None;
    }
    Some(CssVar { name, fallback })
}

/// Resolve `raw` through `lookup` when it is a `var(...)` reference.
///
/// `lookup` returns the custom property's computed value, or an empty string
/// when it is unset. Unresolvable references are returned unchanged.
pub fn resolve_css_value(raw: &str, lookup: impl Fn(&str) -> String) -> String {
    let Some(var) = parse_css_var(raw) else {
        return raw.to_owned();
    };
    let value = lookup(var.name);
    let value = value.trim();
    if !value.is_empty() {
        return value.to_owned();
    }
    var.fallback.map_or_else(|| raw.to_owned(), str::to_owned)
}
