use std::fmt::Write as _;

use crate::foundation::error::{TreeError, TreeResult};

pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Baseline node size used by the external hierarchy layout.
///
/// `x` is the breadth spacing unit and `y` the depth spacing unit (the baseline node height).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NodeSize {
    pub x: f64,
    pub y: f64,
}

impl NodeSize {
    pub fn new(x: f64, y: f64) -> TreeResult<Self> {
        if !(x.is_finite() && y.is_finite()) {
            return Err(TreeError::validation("node size must be finite"));
        }
        if x <= 0.0 || y <= 0.0 {
            return Err(TreeError::validation("node size must be > 0"));
        }
        Ok(Self { x, y })
    }
}

impl Default for NodeSize {
    fn default() -> Self {
        Self { x: 140.0, y: 140.0 }
    }
}

/// Append `v` in shortest round-trip form, printing negative zero as `0`.
pub(crate) fn push_num(out: &mut String, v: f64) {
    if v == 0.0 {
        out.push('0');
    } else {
        let _ = write!(out, "{v}");
    }
}

pub(crate) fn fmt_num(v: f64) -> String {
    let mut s = String::new();
    push_num(&mut s, v);
    s
}

/// Format a surface point as `x,y`.
pub(crate) fn push_pair(out: &mut String, x: f64, y: f64) {
    push_num(out, x);
    out.push(',');
    push_num(out, y);
}

/// Escape text for use in XML content and attribute values.
pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
