//! Serializes a [`Value`] tree back to JSON text.
//!
//! The writer is one recursive dispatch over the value variants; layout is
//! delegated entirely to the [`IndentationPolicy`], so the compact and
//! indented forms run through the same code. Containers put every element on
//! its own line (under a non-compact policy): a line break at the parent's
//! depth, the element's indentation one level deeper, and a `,` in front of
//! every element after the first. An object entry keeps a scalar value on
//! the key's line after the inline separator; a nested array or object
//! instead starts on its own line at the child depth.
//!
//! Numbers always re-parse to the variant they came from: floats whose
//! decimal rendering carries no `.` or exponent get a trailing `.0`.

use crate::indent::IndentationPolicy;
use crate::value::{Object, Value};

/// Serialize `value`, laying out whitespace per `policy`.
///
/// `None` uses the compact policy: no whitespace beyond what the grammar
/// requires.
///
/// ```
/// use jsontree::{serialize, IndentationPolicy, Value};
///
/// let value = Value::Array(vec![Value::Int(1), Value::Bool(true)]);
/// assert_eq!(serialize(&value, None), "[1,true]");
/// assert_eq!(
///     serialize(&value, Some(IndentationPolicy::default())),
///     "[\n\t1,\n\ttrue\n]"
/// );
/// ```
pub fn serialize(value: &Value, policy: Option<IndentationPolicy>) -> String {
    let policy = policy.unwrap_or_else(IndentationPolicy::compact);
    let mut out = String::new();
    write_element(value, &mut out, &policy);
    out
}

fn write_element(value: &Value, out: &mut String, policy: &IndentationPolicy) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Int(i) => out.push_str(&i.to_string()),
        Value::Float(f) => out.push_str(&format_float(*f)),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => write_array(items, out, policy),
        Value::Object(entries) => write_object(entries, out, policy),
    }
}

fn write_array(items: &[Value], out: &mut String, policy: &IndentationPolicy) {
    out.push('[');
    let child = policy.increase_depth();

    let mut first = true;
    for item in items {
        if !first {
            out.push(',');
        }
        policy.write_line_break(out);
        child.write_indent(out);
        write_element(item, out, &child);
        first = false;
    }

    policy.write_line_break(out);
    policy.write_indent(out);
    out.push(']');
}

fn write_object(entries: &Object, out: &mut String, policy: &IndentationPolicy) {
    out.push('{');
    let child = policy.increase_depth();

    let mut first = true;
    for (key, value) in entries {
        if !first {
            out.push(',');
        }
        policy.write_line_break(out);
        child.write_indent(out);
        write_string(key, out);
        out.push(':');
        if value.is_container() {
            child.write_line_break(out);
            child.write_indent(out);
        } else {
            child.write_separator(out);
        }
        write_element(value, out, &child);
        first = false;
    }

    policy.write_line_break(out);
    policy.write_indent(out);
    out.push('}');
}

/// Quote and escape a string. Only `\b \f \n \r \t \" \\` are escaped;
/// everything else, non-ASCII included, passes through verbatim.
fn write_string(input: &str, out: &mut String) {
    out.push('"');
    for c in input.chars() {
        match c {
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out.push('"');
}

/// Decimal text for a float, culture-invariant.
///
/// `{}` formatting never emits an exponent, so a whole-number float like
/// `1e2` renders as `100`; the trailing `.0` keeps it lexically a float on
/// re-parse. Non-finite floats have no JSON form and render as `null`; they
/// cannot come out of the parser but can be built by hand.
fn format_float(f: f64) -> String {
    if !f.is_finite() {
        return "null".to_string();
    }
    let mut text = f.to_string();
    if !(text.contains('.') || text.contains('e')) {
        text.push_str(".0");
    }
    text
}
