// ============================================================================
// Textual Codec
// Canonical "(real, imaginary)" parser and formatter
// ============================================================================
//
// Grammar:
//   "(" ws* real ws* "," ws* real ws* ")" ws*
//
// ws is space, tab, newline or carriage return. real is what C strtod reads:
// a decimal double (sign, digits, optional fraction, optional exponent), a
// hex double (0x digits, optional fraction, optional binary exponent p), or
// inf/infinity/nan with an optional nan(chars) payload.
// Parsing is a single left-to-right pass; the first token that does not fit
// fails the whole input.

use crate::numeric::{Complex, ComplexError, ComplexResult, SyntaxErrorKind};
use std::fmt;
use std::str::FromStr;

/// Significant digits needed for any f64 to survive format-then-parse.
pub const ROUND_TRIP_DIGITS: usize = 17;

/// Significant digits guaranteed to survive parse-then-format (`DBL_DIG`).
pub const LEGACY_DIGITS: usize = 15;

// ============================================================================
// Parsing
// ============================================================================

#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.pos += 1;
        }
    }

    /// Consume `delim` after optional whitespace.
    fn expect(&mut self, delim: u8, kind: SyntaxErrorKind) -> ComplexResult<()> {
        self.skip_whitespace();
        if self.peek() == Some(delim) {
            self.pos += 1;
            Ok(())
        } else {
            Err(ComplexError::syntax(kind, self.pos))
        }
    }

    /// Consume the longest prefix that reads as a double.
    fn double(&mut self, kind: SyntaxErrorKind) -> ComplexResult<f64> {
        self.skip_whitespace();
        let start = self.pos;
        let end = scan_double(self.input.as_bytes(), start)
            .ok_or_else(|| ComplexError::syntax(kind, start))?;
        let value = read_double(&self.input[start..end])
            .ok_or_else(|| ComplexError::syntax(kind, start))?;
        self.pos = end;
        Ok(value)
    }

    fn finish(&mut self) -> ComplexResult<()> {
        self.skip_whitespace();
        if self.pos == self.input.len() {
            Ok(())
        } else {
            Err(ComplexError::syntax(
                SyntaxErrorKind::TrailingCharacters,
                self.pos,
            ))
        }
    }
}

fn starts_with_ignore_case(bytes: &[u8], word: &[u8]) -> bool {
    bytes.len() >= word.len() && bytes[..word.len()].eq_ignore_ascii_case(word)
}

fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    i
}

fn skip_hex_digits(bytes: &[u8], mut i: usize) -> usize {
    while bytes.get(i).is_some_and(u8::is_ascii_hexdigit) {
        i += 1;
    }
    i
}

/// Consume `[eE][+-]digits` (or `[pP]...` for hex) only when digits follow.
fn skip_exponent(bytes: &[u8], i: usize, markers: [u8; 2]) -> usize {
    if !bytes.get(i).is_some_and(|b| markers.contains(b)) {
        return i;
    }
    let mut j = i + 1;
    if matches!(bytes.get(j), Some(b'+' | b'-')) {
        j += 1;
    }
    let exp_end = skip_digits(bytes, j);
    if exp_end > j {
        exp_end
    } else {
        i
    }
}

/// End of an optional `(n-char-sequence)` payload after `nan`.
fn skip_nan_payload(bytes: &[u8], i: usize) -> usize {
    if bytes.get(i) != Some(&b'(') {
        return i;
    }
    let mut j = i + 1;
    while bytes
        .get(j)
        .is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'_')
    {
        j += 1;
    }
    if bytes.get(j) == Some(&b')') {
        j + 1
    } else {
        i
    }
}

/// End offset of a double starting at `start`, if there is one.
///
/// Accepts the same prefixes as C `strtod`. An exponent marker is only
/// consumed when digits follow it, so `"1e"` scans as `"1"`, and `"0x"`
/// without hex digits scans as `"0"`.
fn scan_double(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start;
    if matches!(bytes.get(i), Some(b'+' | b'-')) {
        i += 1;
    }

    let rest = &bytes[i..];
    if starts_with_ignore_case(rest, b"infinity") {
        return Some(i + 8);
    }
    if starts_with_ignore_case(rest, b"inf") {
        return Some(i + 3);
    }
    if starts_with_ignore_case(rest, b"nan") {
        return Some(skip_nan_payload(bytes, i + 3));
    }

    if bytes.get(i) == Some(&b'0') && matches!(bytes.get(i + 1), Some(b'x' | b'X')) {
        if let Some(end) = scan_hex_body(bytes, i + 2) {
            return Some(end);
        }
    }

    let int_end = skip_digits(bytes, i);
    let mut digits = int_end - i;
    i = int_end;
    if bytes.get(i) == Some(&b'.') {
        let frac_end = skip_digits(bytes, i + 1);
        digits += frac_end - (i + 1);
        i = frac_end;
    }
    if digits == 0 {
        return None;
    }
    Some(skip_exponent(bytes, i, [b'e', b'E']))
}

/// Hex digits, optional fraction and optional binary exponent after `0x`.
fn scan_hex_body(bytes: &[u8], start: usize) -> Option<usize> {
    let int_end = skip_hex_digits(bytes, start);
    let mut digits = int_end - start;
    let mut i = int_end;
    if bytes.get(i) == Some(&b'.') {
        let frac_end = skip_hex_digits(bytes, i + 1);
        digits += frac_end - (i + 1);
        i = frac_end;
    }
    if digits == 0 {
        return None;
    }
    Some(skip_exponent(bytes, i, [b'p', b'P']))
}

/// Convert a token accepted by [`scan_double`].
fn read_double(token: &str) -> Option<f64> {
    let (negative, body) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    let magnitude = if starts_with_ignore_case(body.as_bytes(), b"nan") {
        f64::NAN
    } else if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        hex_to_f64(hex)?
    } else {
        body.parse::<f64>().ok()?
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// Signed decimal exponent, saturated far beyond the f64 range.
fn parse_binary_exponent(text: &str) -> Option<i64> {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let mut value: i64 = 0;
    for b in digits.bytes() {
        let digit = i64::from(char::from(b).to_digit(10)?);
        value = (value * 10 + digit).min(100_000);
    }
    Some(if negative { -value } else { value })
}

/// Correctly rounded (ties to even) value of `digits[.digits][p[+-]exp]` in
/// base 16.
fn hex_to_f64(text: &str) -> Option<f64> {
    let (significand, exponent) = match text.find(['p', 'P']) {
        Some(at) => (&text[..at], parse_binary_exponent(&text[at + 1..])?),
        None => (text, 0),
    };

    // mantissa * 2^exp, with `sticky` set if nonzero digits did not fit
    let mut mantissa: u64 = 0;
    let mut exp = exponent;
    let mut sticky = false;
    let mut seen_point = false;
    for b in significand.bytes() {
        if b == b'.' {
            seen_point = true;
            continue;
        }
        let digit = u64::from(char::from(b).to_digit(16)?);
        if mantissa >> 60 == 0 {
            mantissa = mantissa * 16 + digit;
            if seen_point {
                exp -= 4;
            }
        } else {
            sticky |= digit != 0;
            if !seen_point {
                exp += 4;
            }
        }
    }
    if mantissa == 0 {
        return Some(0.0);
    }

    let shift = mantissa.leading_zeros();
    let mantissa = u128::from(mantissa << shift);
    // value = 1.f * 2^top
    let top = exp - i64::from(shift) + 63;
    if top > 1023 {
        return Some(f64::INFINITY);
    }
    let kept_bits = if top >= -1022 { 53 } else { top + 1075 };
    if kept_bits < 0 {
        return Some(0.0);
    }

    let dropped = 64 - kept_bits as u32;
    let mut kept = mantissa >> dropped;
    let rest = mantissa & ((1u128 << dropped) - 1);
    let half = 1u128 << (dropped - 1);
    if rest > half || (rest == half && (sticky || kept & 1 == 1)) {
        kept += 1;
    }

    // kept * 2^scale is exact: kept has at most 54 bits
    let scale = top - (kept_bits - 1);
    let power = if scale >= -1022 {
        f64::from_bits(((scale + 1023) as u64) << 52)
    } else {
        f64::from_bits(1u64 << (scale + 1074))
    };
    Some(kept as f64 * power)
}

fn parse_complex(cursor: &mut Cursor<'_>) -> ComplexResult<Complex> {
    cursor.expect(b'(', SyntaxErrorKind::MissingOpenParen)?;
    let re = cursor.double(SyntaxErrorKind::InvalidReal)?;
    cursor.expect(b',', SyntaxErrorKind::MissingComma)?;
    let im = cursor.double(SyntaxErrorKind::InvalidImaginary)?;
    cursor.expect(b')', SyntaxErrorKind::MissingCloseParen)?;
    cursor.finish()?;
    Ok(Complex::new(re, im))
}

/// Parse the canonical textual form.
///
/// # Errors
/// Returns `Syntax` naming the first token that failed: a missing `(`, `,`
/// or `)`, a malformed real or imaginary part, or anything but whitespace
/// after the closing parenthesis.
///
/// # Example
/// ```
/// use pg_complex::codec::text::parse;
/// use pg_complex::numeric::Complex;
///
/// assert_eq!(parse(" ( 1.5 , -2 ) ").unwrap(), Complex::new(1.5, -2.0));
/// assert!(parse("(1,2) x").is_err());
/// ```
pub fn parse(input: &str) -> ComplexResult<Complex> {
    let result = parse_complex(&mut Cursor::new(input));
    if let Err(ref err) = result {
        tracing::debug!(input, %err, "complex parse failed");
    }
    result
}

// ============================================================================
// Formatting
// ============================================================================

fn trim_fraction_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Render a double like C's `%.<digits>g`.
///
/// Scientific notation is used when the decimal exponent is below -4 or at
/// least `digits`; trailing zeros are removed in both notations.
pub fn format_double(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = digits.max(1);
    let sci = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };

    if exp < -4 || exp >= precision as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction_zeros(mantissa), sign, exp.unsigned_abs())
    } else {
        let decimals = (precision as i32 - 1 - exp) as usize;
        trim_fraction_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Canonical form with a chosen number of significant digits.
pub fn format_with_digits(c: &Complex, digits: usize) -> String {
    format!(
        "({}, {})",
        format_double(c.re(), digits),
        format_double(c.im(), digits)
    )
}

/// Canonical form `(a, b)` with round-trip precision.
///
/// # Example
/// ```
/// use pg_complex::codec::text::format;
/// use pg_complex::numeric::Complex;
///
/// assert_eq!(format(&Complex::new(3.5, -2.25)), "(3.5, -2.25)");
/// ```
pub fn format(c: &Complex) -> String {
    format_with_digits(c, ROUND_TRIP_DIGITS)
}

/// Cast from a generic text value. Same grammar as [`parse`].
pub fn cast_from_text(text: &str) -> ComplexResult<Complex> {
    parse(text)
}

/// Cast to a generic text value. Same output as [`format`].
pub fn cast_to_text(c: &Complex) -> String {
    format(c)
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl FromStr for Complex {
    type Err = ComplexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self))
    }
}

// ============================================================================
// Tests
// ============================================================================
