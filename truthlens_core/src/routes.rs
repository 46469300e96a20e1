//! Ordered route table for the hash router.
//!
//! Patterns are evaluated top to bottom and the first structural match wins.
//! The wildcard fallback is not a regular entry: it is consulted only after
//! every declared pattern failed, so it can never shadow one.

use std::fmt;

/// Pages the shell knows how to mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// The landing page with the full section sequence.
    Landing,
    /// Static "page not found" view.
    NotFound,
}

impl Page {
    /// Returns a lowercase label for the page.
    pub fn as_label(&self) -> &'static str {
        match self {
            Page::Landing => "landing",
            Page::NotFound => "not-found",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
    Rest,
}

/// A parsed path pattern such as `/`, `/archive/:id` or `/docs/*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern. A `*` is only a wildcard in last position.
    pub fn new(pattern: &str) -> Self {
        let parts: Vec<&str> = split_segments(pattern).collect();
        let last = parts.len().saturating_sub(1);
        let segments = parts
            .iter()
            .enumerate()
            .map(|(idx, part)| match *part {
                "*" if idx == last => Segment::Rest,
                p if p.len() > 1 && p.starts_with(':') => Segment::Param(p[1..].to_string()),
                p => Segment::Static(p.to_string()),
            })
            .collect();

        Self {
            raw: pattern.to_string(),
            segments,
        }
    }

    /// The catch-all pattern.
    pub fn wildcard() -> Self {
        Self::new("*")
    }

    /// Pattern source as declared.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Names of the `:param` segments, in order.
    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// Structural match against an already normalized path.
    pub fn matches(&self, path: &str) -> bool {
        let mut parts = split_segments(path);
        for segment in &self.segments {
            match segment {
                Segment::Rest => return true,
                Segment::Static(expected) => match parts.next() {
                    Some(part) if part == expected.as_str() => {}
                    _ => return false,
                },
                Segment::Param(_) => {
                    if parts.next().is_none() {
                        return false;
                    }
                }
            }
        }
        parts.next().is_none()
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// One declared `(pattern, page)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// Path pattern checked against the current location.
    pub pattern: RoutePattern,
    /// Page mounted when the pattern matches.
    pub page: Page,
}

/// Ordered route table with a terminal wildcard fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    fallback: Page,
}

impl RouteTable {
    /// Start an empty table whose fallback is [`Page::NotFound`].
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder {
            entries: Vec::new(),
            fallback: Page::NotFound,
        }
    }

    /// The routes served by the TruthLens shell.
    pub fn truthlens() -> Self {
        Self::builder().route("/", Page::Landing).build()
    }

    /// Declared entries, in evaluation order (fallback excluded).
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Page rendered when nothing else matches.
    pub fn fallback(&self) -> Page {
        self.fallback
    }

    /// Resolve a route path to exactly one page.
    pub fn resolve(&self, path: &str) -> Page {
        let path = normalize_path(path);
        let page = self
            .entries
            .iter()
            .find(|entry| entry.pattern.matches(&path))
            .map(|entry| entry.page)
            .unwrap_or(self.fallback);
        tracing::debug!(path = %path, page = page.as_label(), "resolved route");
        page
    }
}

/// Builder for [`RouteTable`].
#[derive(Debug)]
pub struct RouteTableBuilder {
    entries: Vec<RouteEntry>,
    fallback: Page,
}

impl RouteTableBuilder {
    /// Append a route; earlier routes take precedence.
    pub fn route(mut self, pattern: &str, page: Page) -> Self {
        self.entries.push(RouteEntry {
            pattern: RoutePattern::new(pattern),
            page,
        });
        self
    }

    /// Replace the wildcard fallback page.
    pub fn fallback(mut self, page: Page) -> Self {
        self.fallback = page;
        self
    }

    /// Finish the table.
    pub fn build(self) -> RouteTable {
        RouteTable {
            entries: self.entries,
            fallback: self.fallback,
        }
    }
}

/// Convert `window.location.hash` into a route path.
///
/// `""`, `"#"` and `"#/"` all mean the root. Query strings inside the
/// fragment are dropped; they never take part in matching.
pub fn path_from_hash(hash: &str) -> String {
    let fragment = hash.strip_prefix('#').unwrap_or(hash);
    let path = fragment.split('?').next().unwrap_or_default();
    normalize_path(path)
}

fn normalize_path(path: &str) -> String {
    let joined = split_segments(path).collect::<Vec<_>>().join("/");
    format!("/{joined}")
}
