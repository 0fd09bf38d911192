//! Number literal grammar and canonical decimal text.
//!
//! The grammar is the one from RFC 8259 §6:
//!
//! ```text
//! number = [ "-" ] int [ frac ] [ exp ]
//! int    = "0" / ( digit1-9 *digit )
//! frac   = "." 1*digit
//! exp    = ( "e" / "E" ) [ "-" / "+" ] 1*digit
//! ```
//!
//! Nothing else is accepted: no leading `+`, no surrounding whitespace, no
//! `Infinity`/`NaN` spellings.

use crate::NumberFormatError;

/// Byte cursor over a candidate literal. Only ASCII is ever consumed, so `pos`
/// always sits on a char boundary.
struct Cursor<'a> {
    literal: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(literal: &'a str) -> Self {
        Self { literal, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.literal.as_bytes().get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn at_end(&self) -> bool {
        self.pos >= self.literal.len()
    }

    fn unexpected(&self, expected: &'static str) -> NumberFormatError {
        match self.literal[self.pos..].chars().next() {
            Some(found) => NumberFormatError::UnexpectedChar {
                literal: self.literal.to_owned(),
                offset: self.pos,
                found,
                expected,
            },
            None => NumberFormatError::UnexpectedEnd {
                literal: self.literal.to_owned(),
                expected,
            },
        }
    }

    /// One or more decimal digits.
    fn digits(&mut self) -> Result<(), NumberFormatError> {
        if !matches!(self.peek(), Some(b'0'..=b'9')) {
            return Err(self.unexpected("a digit"));
        }
        while let Some(b'0'..=b'9') = self.peek() {
            self.advance();
        }
        Ok(())
    }
}

/// Checks `literal` against the JSON number grammar.
pub fn validate(literal: &str) -> Result<(), NumberFormatError> {
    if literal.is_empty() {
        return Err(NumberFormatError::Empty);
    }

    let mut cursor = Cursor::new(literal);

    if cursor.peek() == Some(b'-') {
        cursor.advance();
    }

    // Integer part
    match cursor.peek() {
        Some(b'0') => {
            cursor.advance();
            if let Some(b'0'..=b'9') = cursor.peek() {
                return Err(NumberFormatError::LeadingZero {
                    literal: literal.to_owned(),
                });
            }
        }
        Some(b'1'..=b'9') => cursor.digits()?,
        _ => return Err(cursor.unexpected("a digit")),
    }

    // Fractional part
    if cursor.peek() == Some(b'.') {
        cursor.advance();
        cursor.digits()?;
    }

    // Exponent
    if let Some(b'e' | b'E') = cursor.peek() {
        cursor.advance();
        if let Some(b'+' | b'-') = cursor.peek() {
            cursor.advance();
        }
        cursor.digits()?;
    }

    if !cursor.at_end() {
        return Err(cursor.unexpected("end of number"));
    }
    Ok(())
}

/// Rejects grammatical literals whose magnitude does not fit a finite `f64`.
pub fn check_range(literal: &str) -> Result<(), NumberFormatError> {
    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(()),
        _ => Err(NumberFormatError::OutOfRange {
            literal: literal.to_owned(),
        }),
    }
}

/// Grammar and range together: the full safe-number contract.
pub fn check(literal: &str) -> Result<(), NumberFormatError> {
    validate(literal)?;
    check_range(literal)
}

/// Rejects NaN and the infinities.
pub fn check_finite(value: f64) -> Result<(), NumberFormatError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(NumberFormatError::NonFinite { value })
    }
}

/// Shortest round-tripping text for `value`, spelled the way ECMAScript's
/// `Number#toString` spells it (`343435`, `0.1`, `1e+21`).
///
/// Non-finite input yields `Infinity`, `-Infinity` or `NaN`, none of which is
/// grammatical.
pub fn format_f64(value: f64) -> String {
    ryu_js::Buffer::new().format(value).to_owned()
}

/// `f64` reading of arbitrary text. Overflow saturates to infinity; text that
/// is not a number at all reads as NaN.
pub fn parse_f64(literal: &str) -> f64 {
    literal.parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_grammatical_literals() {
        for literal in [
            "0", "-0", "7", "-7", "10", "343435", "34335325", "0.5", "-0.25", "1e5", "1E5",
            "1e+5", "1e-5", "-1.5e-300", "0e0", "123.456E+78",
        ] {
            assert_eq!(validate(literal), Ok(()), "{literal}");
        }
    }

    #[test]
    fn empty_literal() {
        assert_eq!(validate(""), Err(NumberFormatError::Empty));
    }

    #[test]
    fn leading_zeros() {
        for literal in ["007", "00", "-01", "01.5"] {
            assert!(
                matches!(validate(literal), Err(NumberFormatError::LeadingZero { .. })),
                "{literal}"
            );
        }
    }

    #[test]
    fn missing_digits_report_end_of_input() {
        for literal in ["-", "1.", "1e", "1e+", "-1.5E-"] {
            match validate(literal) {
                Err(NumberFormatError::UnexpectedEnd { expected, .. }) => {
                    assert_eq!(expected, "a digit", "{literal}")
                }
                other => panic!("{literal}: {other:?}"),
            }
        }
    }

    #[test]
    fn stray_characters_report_offset() {
        match validate("12x") {
            Err(NumberFormatError::UnexpectedChar { offset, found, .. }) => {
                assert_eq!(offset, 2);
                assert_eq!(found, 'x');
            }
            other => panic!("{other:?}"),
        }
        match validate("1.é") {
            Err(NumberFormatError::UnexpectedChar { offset, found, .. }) => {
                assert_eq!(offset, 2);
                assert_eq!(found, 'é');
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn rejects_non_json_spellings() {
        for literal in ["+1", " 1", "1 ", ".5", "1.5.3", "0x10", "Infinity", "NaN", "1e5e5", "--1"] {
            assert!(validate(literal).is_err(), "{literal}");
        }
    }

    #[test]
    fn range_check_catches_overflow_only() {
        assert!(check("343435e3952305253256").is_err());
        assert!(check("-1e400").is_err());
        assert_eq!(check("1e-400"), Ok(()));
        assert_eq!(check("1.7976931348623157e308"), Ok(()));
    }

    #[test]
    fn float_text_follows_ecmascript() {
        assert_eq!(format_f64(343435.0), "343435");
        assert_eq!(format_f64(0.1), "0.1");
        assert_eq!(format_f64(-1.5), "-1.5");
        assert_eq!(format_f64(1e21), "1e+21");
        assert_eq!(format_f64(f64::INFINITY), "Infinity");
        assert_eq!(format_f64(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_f64(f64::NAN), "NaN");
    }

    #[test]
    fn parse_is_total() {
        assert_eq!(parse_f64("34335325"), 34335325.0);
        assert_eq!(parse_f64("1e400"), f64::INFINITY);
        assert_eq!(parse_f64("Infinity"), f64::INFINITY);
        assert!(parse_f64("not a number").is_nan());
    }
}
