//! Recursive indented renderer for [`Value`] trees.
//!
//! Walks a tree and produces a deterministic multi-line string, two spaces
//! of indentation per nesting level, in two variants: typed mode prefixes
//! scalars and unknowns with a bracketed type tag (`[string]`, `[int]`,
//! `[float64]`, `[bool]`, `[nil]`, `[unknown]`), untyped mode shows bare
//! values. Mapping entries are sorted by key at every level, so output does
//! not depend on the map's internal iteration order.
//!
//! Rendering is total: every node shape, including [`Value::Unknown`],
//! produces output. It never fails or panics, and it never mutates the
//! input — concurrent callers may share a tree freely.
//!
//! # Example
//! ```
//! use maptree_core::{render, Map, Value};
//!
//! let mut m = Map::new();
//! m.insert("b", 1i64);
//! m.insert("a", "two");
//!
//! assert_eq!(render(&Value::Map(m), true, 0), "a :[string] two\nb :[int] 1");
//! ```

use crate::map::Map;
use crate::value::Value;

/// Render a tree node to an indented string.
///
/// `typed` selects type-annotated output; `offset` is the starting
/// indentation depth (0 for the common case). The output carries no
/// trailing newline.
pub fn render(node: &Value, typed: bool, offset: usize) -> String {
    let mut out = String::new();
    write_node(node, typed, true, offset, &mut out);
    out
}

/// Render a map as the tree root. Backs [`Map::string_indent`] and
/// [`Map::string_indent_no_type_info`] without requiring the caller to wrap
/// the map in a [`Value`].
pub(crate) fn render_map(map: &Map, typed: bool, offset: usize) -> String {
    let mut out = String::new();
    write_map_entries(map, typed, true, offset, &mut out);
    out
}

fn write_node(node: &Value, typed: bool, root: bool, indent: usize, out: &mut String) {
    match node {
        Value::Null => out.push_str(if typed { "[nil] nil" } else { "nil" }),
        Value::String(s) => {
            if typed {
                out.push_str("[string] ");
            }
            out.push_str(s);
        }
        Value::Int(i) => {
            if typed {
                out.push_str("[int] ");
            }
            out.push_str(&i.to_string());
        }
        Value::Float(f) => {
            if typed {
                out.push_str("[float64] ");
            }
            out.push_str(&format_float(*f));
        }
        Value::Bool(b) => {
            if typed {
                out.push_str("[bool] ");
            }
            out.push_str(if *b { "true" } else { "false" });
        }
        Value::Seq(items) => write_seq_items(items, typed, indent, out),
        Value::Map(map) => write_map_entries(map, typed, root, indent, out),
        Value::Unknown(opaque) => {
            out.push_str(if typed { "[unknown] " } else { "[?] " });
            out.push_str(&opaque.repr());
        }
    }
}

/// Emit sequence elements with positional labels: `[item: i]` in typed
/// mode, `[i]` in untyped mode. String, float, and bool elements get their
/// value on a fresh indented line; everything else continues in place.
fn write_seq_items(items: &[Value], typed: bool, indent: usize, out: &mut String) {
    for (i, item) in items.iter().enumerate() {
        out.push('\n');
        push_indent(indent, out);
        if typed {
            out.push_str("[item: ");
            out.push_str(&i.to_string());
            out.push(']');
        } else {
            out.push('[');
            out.push_str(&i.to_string());
            out.push(']');
        }
        if matches!(item, Value::String(_) | Value::Float(_) | Value::Bool(_)) {
            out.push('\n');
        }
        push_indent(indent, out);
        write_node(item, typed, false, indent + 1, out);
    }
}

/// Emit mapping entries as `key :value` lines in ascending key order.
///
/// Values are rendered first so sorting operates on finished
/// `(key, rendered)` pairs; the sort is stable and keyed purely on the
/// byte-wise key comparison, computed fresh for each level. The line break
/// is suppressed only for the very first entry of the root mapping, which
/// keeps the top level free of a leading newline.
fn write_map_entries(map: &Map, typed: bool, root: bool, indent: usize, out: &mut String) {
    let mut entries: Vec<(&str, String)> = map
        .iter()
        .map(|(key, value)| {
            let mut rendered = String::new();
            write_node(value, typed, false, indent + 1, &mut rendered);
            (key.as_str(), rendered)
        })
        .collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    for (i, (key, rendered)) in entries.iter().enumerate() {
        if !(root && i == 0) {
            out.push('\n');
        }
        push_indent(indent, out);
        out.push_str(key);
        out.push_str(" :");
        out.push_str(rendered);
    }
}

/// Format a float in scientific notation with a 2-digit mantissa and a
/// signed, minimum-two-digit exponent: `3.14e+00`, `1.23e-03`. Non-finite
/// floats fall back to their plain display form so rendering stays total.
fn format_float(f: f64) -> String {
    if !f.is_finite() {
        return f.to_string();
    }
    let s = format!("{:.2e}", f);
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        None => s,
    }
}

fn push_indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}
