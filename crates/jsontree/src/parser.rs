//! Recursive-descent JSON parser.
//!
//! The grammar, with `skip_ws` standing for [`Cursor::skip_whitespace`]:
//!
//! ```text
//! document  := skip_ws element skip_ws EOF
//! element   := object | array | string | number | bool | null
//! object    := '{' skip_ws (entry (',' skip_ws entry)*)? skip_ws '}'
//! entry     := string skip_ws ':' element
//! array     := '[' skip_ws (element (',' skip_ws element)*)? skip_ws ']'
//! string    := '"' (char | escape)* '"'
//! number    := '-'? digit+ ('.' digit+)? (('e'|'E') ('+'|'-')? digit+)?
//! bool      := 'true' | 'false'
//! null      := 'null'
//! ```
//!
//! Key behaviors:
//!
//! - **Dispatch by lookahead**: one character decides which rule runs; a
//!   digit or `-` selects number, `{`/`[`/`"` select the obvious rules,
//!   `t`/`f`/`n` select the keyword rule.
//! - **Strict separators**: containers require exactly one `,` between
//!   elements and reject a trailing `,` before the closer.
//! - **Duplicate keys are errors**, not silent overwrites; the error names
//!   the key and the object's start offset.
//! - **Lexical number classification**: the presence of `.` or an exponent
//!   marker selects `Value::Float`, otherwise `Value::Int`. The scan stops
//!   at the first character that cannot extend the numeral, which becomes
//!   the new cursor position.
//! - **No recovery**: the first error aborts the whole parse.
//!
//! Recursion depth equals input nesting depth; callers needing a hard bound
//! must impose one before calling [`parse`].

use crate::cursor::Cursor;
use crate::error::{ParseError, Result};
use crate::value::{Object, Value};

/// Parse one complete JSON document.
///
/// Leading and trailing whitespace is allowed; any other content after the
/// root value is a [`ParseError::TrailingContent`] error.
///
/// ```
/// use jsontree::{parse, Value};
///
/// let value = parse("[1, 2.5, \"three\"]").unwrap();
/// assert_eq!(value.get_index(0), Some(&Value::Int(1)));
/// assert_eq!(value.get_index(1), Some(&Value::Float(2.5)));
/// ```
pub fn parse(input: &str) -> Result<Value> {
    let mut cur = Cursor::new(input);
    let value = read_element(&mut cur)?;
    cur.skip_whitespace();
    if !cur.is_empty() {
        return Err(ParseError::TrailingContent {
            offset: cur.offset(),
        });
    }
    Ok(value)
}

fn read_element(cur: &mut Cursor) -> Result<Value> {
    cur.skip_whitespace();
    let Some(c) = cur.peek(0) else {
        return Err(ParseError::UnexpectedEof {
            offset: cur.offset(),
        });
    };
    match c {
        '0'..='9' | '-' => read_number(cur),
        '{' => read_object(cur),
        '[' => read_array(cur),
        '"' => Ok(Value::String(read_string(cur)?)),
        't' | 'f' | 'n' => read_keyword(cur),
        _ => Err(ParseError::UnexpectedChar {
            offset: cur.offset(),
            expected: "a JSON value",
        }),
    }
}

/// Caller guarantees the cursor sits on `[`.
fn read_array(cur: &mut Cursor) -> Result<Value> {
    cur.advance(1);
    let start = cur.offset();
    let mut items = Vec::new();

    cur.skip_whitespace();
    if cur.is_empty() {
        return Err(ParseError::UnterminatedContainer {
            container: "array",
            offset: start,
        });
    }
    if cur.peek(0) == Some(']') {
        cur.advance(1);
        return Ok(Value::Array(items));
    }

    loop {
        items.push(read_element(cur)?);

        cur.skip_whitespace();
        match cur.peek(0) {
            None => {
                return Err(ParseError::UnterminatedContainer {
                    container: "array",
                    offset: start,
                })
            }
            Some(']') => {
                cur.advance(1);
                return Ok(Value::Array(items));
            }
            Some(',') => {
                cur.advance(1);
                cur.skip_whitespace();
                match cur.peek(0) {
                    None => {
                        return Err(ParseError::UnterminatedContainer {
                            container: "array",
                            offset: start,
                        })
                    }
                    Some(']') => {
                        return Err(ParseError::UnexpectedChar {
                            offset: cur.offset(),
                            expected: "a value after ','",
                        })
                    }
                    Some(_) => {}
                }
            }
            Some(_) => {
                return Err(ParseError::UnexpectedChar {
                    offset: cur.offset(),
                    expected: "',' or ']'",
                })
            }
        }
    }
}

/// Caller guarantees the cursor sits on `{`.
fn read_object(cur: &mut Cursor) -> Result<Value> {
    cur.advance(1);
    let start = cur.offset();
    let mut entries = Object::new();

    cur.skip_whitespace();
    if cur.is_empty() {
        return Err(ParseError::UnterminatedContainer {
            container: "object",
            offset: start,
        });
    }
    if cur.peek(0) == Some('}') {
        cur.advance(1);
        return Ok(Value::Object(entries));
    }

    loop {
        let (key, value) = read_entry(cur)?;
        if entries.contains_key(&key) {
            return Err(ParseError::DuplicateKey { key, offset: start });
        }
        entries.insert(key, value);

        cur.skip_whitespace();
        match cur.peek(0) {
            None => {
                return Err(ParseError::UnterminatedContainer {
                    container: "object",
                    offset: start,
                })
            }
            Some('}') => {
                cur.advance(1);
                return Ok(Value::Object(entries));
            }
            Some(',') => {
                cur.advance(1);
                cur.skip_whitespace();
                match cur.peek(0) {
                    None => {
                        return Err(ParseError::UnterminatedContainer {
                            container: "object",
                            offset: start,
                        })
                    }
                    Some('}') => {
                        return Err(ParseError::UnexpectedChar {
                            offset: cur.offset(),
                            expected: "an object entry after ','",
                        })
                    }
                    Some(_) => {}
                }
            }
            Some(_) => {
                return Err(ParseError::UnexpectedChar {
                    offset: cur.offset(),
                    expected: "',' or '}'",
                })
            }
        }
    }
}

fn read_entry(cur: &mut Cursor) -> Result<(String, Value)> {
    cur.skip_whitespace();
    match cur.peek(0) {
        Some('"') => {}
        Some(_) => {
            return Err(ParseError::UnexpectedChar {
                offset: cur.offset(),
                expected: "an object key string",
            })
        }
        None => {
            return Err(ParseError::UnexpectedEof {
                offset: cur.offset(),
            })
        }
    }
    let key = read_string(cur)?;

    cur.skip_whitespace();
    match cur.peek(0) {
        Some(':') => cur.advance(1),
        Some(_) => {
            return Err(ParseError::UnexpectedChar {
                offset: cur.offset(),
                expected: "':' after object key",
            })
        }
        None => {
            return Err(ParseError::UnexpectedEof {
                offset: cur.offset(),
            })
        }
    }

    let value = read_element(cur)?;
    Ok((key, value))
}

/// Caller guarantees the cursor sits on `"`. Returns the decoded content.
///
/// Outside escape state, `\` enters it, `"` ends the string, and anything
/// else — including raw control characters and non-ASCII — is taken
/// verbatim. In escape state exactly one character is consumed and decoded.
fn read_string(cur: &mut Cursor) -> Result<String> {
    cur.advance(1);
    let mut out = String::new();

    loop {
        let Some(c) = cur.bump() else {
            return Err(ParseError::UnterminatedString {
                offset: cur.offset(),
            });
        };
        match c {
            '"' => return Ok(out),
            '\\' => {
                let esc_pos = cur.offset();
                let Some(esc) = cur.bump() else {
                    return Err(ParseError::UnterminatedString {
                        offset: cur.offset(),
                    });
                };
                match esc {
                    '\\' => out.push('\\'),
                    'b' => out.push('\u{0008}'),
                    'f' => out.push('\u{000C}'),
                    'r' => out.push('\r'),
                    'n' => out.push('\n'),
                    't' => out.push('\t'),
                    '"' => out.push('"'),
                    'u' => out.push(read_unicode_escape(cur)?),
                    _ => return Err(ParseError::InvalidEscape { offset: esc_pos }),
                }
            }
            _ => out.push(c),
        }
    }
}

/// Decode the four hex digits after `\u`. A high surrogate must be followed
/// by a `\uXXXX` low surrogate; the pair yields one scalar value.
fn read_unicode_escape(cur: &mut Cursor) -> Result<char> {
    let unit = read_hex_unit(cur)?;

    if (0xD800..=0xDBFF).contains(&unit) {
        let pair_pos = cur.offset();
        if !(cur.peek(0) == Some('\\') && cur.peek(1) == Some('u')) {
            return Err(ParseError::InvalidUnicodeEscape { offset: pair_pos });
        }
        cur.advance(2);
        let low = read_hex_unit(cur)?;
        if !(0xDC00..=0xDFFF).contains(&low) {
            return Err(ParseError::InvalidUnicodeEscape { offset: pair_pos });
        }
        let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
        return char::from_u32(code).ok_or(ParseError::InvalidUnicodeEscape { offset: pair_pos });
    }
    if (0xDC00..=0xDFFF).contains(&unit) {
        return Err(ParseError::InvalidUnicodeEscape {
            offset: cur.offset(),
        });
    }
    char::from_u32(unit).ok_or(ParseError::InvalidUnicodeEscape {
        offset: cur.offset(),
    })
}

fn read_hex_unit(cur: &mut Cursor) -> Result<u32> {
    let mut unit = 0;
    for _ in 0..4 {
        let pos = cur.offset();
        let Some(c) = cur.bump() else {
            return Err(ParseError::InvalidUnicodeEscape { offset: pos });
        };
        let digit = c
            .to_digit(16)
            .ok_or(ParseError::InvalidUnicodeEscape { offset: pos })?;
        unit = unit * 16 + digit;
    }
    Ok(unit)
}

/// Caller guarantees the cursor sits on a digit or `-`.
///
/// One forward scan both classifies the literal (any `.` or exponent marker
/// makes it a float) and finds where it ends. Position bookkeeping mirrors
/// the grammar checks: the dot and the exponent marker need a digit before
/// them and must not be the final character, and an exponent sign is only
/// legal directly after the marker with at least one digit following.
fn read_number(cur: &mut Cursor) -> Result<Value> {
    let start = cur.offset();
    let rest = cur.remainder();

    let mut end = rest.len();
    let mut digits = 0usize;
    let mut dot: Option<usize> = None;
    let mut marker: Option<usize> = None;
    let mut sign: Option<usize> = None;
    let mut count = 0usize;

    for (i, (pos, c)) in rest.char_indices().enumerate() {
        match c {
            '-' if i == 0 => {}
            '0'..='9' => digits += 1,
            '.' if dot.is_none() && marker.is_none() => {
                if digits == 0 {
                    return Err(ParseError::MalformedNumber {
                        offset: start,
                        reason: "floats must not start with a dot",
                    });
                }
                dot = Some(i);
            }
            'e' | 'E' if marker.is_none() => {
                if digits == 0 {
                    return Err(ParseError::MalformedNumber {
                        offset: start,
                        reason: "floats must not start with an exponent marker",
                    });
                }
                marker = Some(i);
            }
            '+' | '-' if i > 0 && marker == Some(i - 1) => sign = Some(i),
            _ => {
                end = pos;
                break;
            }
        }
        count = i + 1;
    }

    if digits == 0 {
        return Err(ParseError::MalformedNumber {
            offset: start,
            reason: "expected at least one digit",
        });
    }
    let last = count - 1;
    if dot == Some(last) {
        return Err(ParseError::MalformedNumber {
            offset: start,
            reason: "floats must not end with a dot",
        });
    }
    if marker == Some(last) {
        return Err(ParseError::MalformedNumber {
            offset: start,
            reason: "floats must not end with an exponent marker",
        });
    }
    if sign == Some(last) {
        return Err(ParseError::MalformedNumber {
            offset: start,
            reason: "floats must not end with an exponent sign",
        });
    }

    let literal = &rest[..end];
    if dot.is_some() || marker.is_some() {
        let value: f64 = literal.parse().map_err(|_| ParseError::MalformedNumber {
            offset: start,
            reason: "invalid float literal",
        })?;
        if value.is_infinite() {
            return Err(ParseError::MalformedNumber {
                offset: start,
                reason: "float literal does not fit in an f64",
            });
        }
        cur.advance(count);
        Ok(Value::Float(value))
    } else {
        let value: i64 = literal
            .parse()
            .map_err(|_| ParseError::IntegerOverflow { offset: start })?;
        cur.advance(count);
        Ok(Value::Int(value))
    }
}

/// Caller guarantees the cursor sits on `t`, `f`, or `n`.
///
/// Consumes a run of lowercase ASCII letters, capped at the length of the
/// longest keyword so a garbage run cannot trigger an unbounded scan.
fn read_keyword(cur: &mut Cursor) -> Result<Value> {
    let offset = cur.offset();
    let mut len = 0;
    while len < 5 {
        match cur.peek(len) {
            Some(c) if c.is_ascii_lowercase() => len += 1,
            _ => break,
        }
    }

    let word = cur.slice(0, len);
    let value = match word.as_str() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => {
            return Err(ParseError::UnexpectedChar {
                offset,
                expected: "'true', 'false' or 'null'",
            })
        }
    };
    cur.advance(len);
    Ok(value)
}
