//! Whitespace policy for the writer.
//!
//! An [`IndentationPolicy`] says how nesting depth maps to emitted
//! whitespace: an indent unit repeated once per level, an inline separator
//! between a key and its scalar value, and a line-break string. Policies are
//! immutable per level; [`increase_depth`](IndentationPolicy::increase_depth)
//! and [`decrease_depth`](IndentationPolicy::decrease_depth) return new
//! instances with the same strings. The [`compact`](IndentationPolicy::compact)
//! policy makes every write a no-op and depth changes the identity, so
//! compact and indented output share one writer code path.

/// Depth-parameterized whitespace configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentationPolicy {
    depth: usize,
    indent_unit: String,
    separator: String,
    line_break: String,
    compact: bool,
}

impl IndentationPolicy {
    pub const DEFAULT_INDENT_UNIT: &'static str = "\t";
    pub const DEFAULT_SEPARATOR: &'static str = " ";
    pub const DEFAULT_LINE_BREAK: &'static str = "\n";

    /// A policy at depth zero with the given strings.
    pub fn new(
        indent_unit: impl Into<String>,
        separator: impl Into<String>,
        line_break: impl Into<String>,
    ) -> Self {
        IndentationPolicy {
            depth: 0,
            indent_unit: indent_unit.into(),
            separator: separator.into(),
            line_break: line_break.into(),
            compact: false,
        }
    }

    /// The policy that suppresses all whitespace.
    pub fn compact() -> Self {
        IndentationPolicy {
            depth: 0,
            indent_unit: String::new(),
            separator: String::new(),
            line_break: String::new(),
            compact: true,
        }
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// A copy of this policy one level deeper. Identity for the compact
    /// policy.
    pub fn increase_depth(&self) -> Self {
        if self.compact {
            return self.clone();
        }
        IndentationPolicy {
            depth: self.depth + 1,
            ..self.clone()
        }
    }

    /// A copy of this policy one level shallower, saturating at zero.
    /// Identity for the compact policy.
    pub fn decrease_depth(&self) -> Self {
        if self.compact {
            return self.clone();
        }
        IndentationPolicy {
            depth: self.depth.saturating_sub(1),
            ..self.clone()
        }
    }

    /// Append the indent unit once per depth level.
    pub fn write_indent(&self, out: &mut String) {
        if self.compact {
            return;
        }
        for _ in 0..self.depth {
            out.push_str(&self.indent_unit);
        }
    }

    /// Append the inline separator.
    pub fn write_separator(&self, out: &mut String) {
        if self.compact {
            return;
        }
        out.push_str(&self.separator);
    }

    /// Append the line-break string.
    pub fn write_line_break(&self, out: &mut String) {
        if self.compact {
            return;
        }
        out.push_str(&self.line_break);
    }
}

impl Default for IndentationPolicy {
    fn default() -> Self {
        IndentationPolicy::new(
            Self::DEFAULT_INDENT_UNIT,
            Self::DEFAULT_SEPARATOR,
            Self::DEFAULT_LINE_BREAK,
        )
    }
}
