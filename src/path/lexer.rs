//! Lexer for SVG path data using logos
//!
//! Path data is split into single command letters and numeric runs. Numbers
//! are converted to fixed-point integers at lexing time so the resolver never
//! sees a float.

use logos::Logos;

use super::error::PathError;

/// Byte range in the path data string
pub type Span = std::ops::Range<usize>;

/// Fixed-point scale: Inkscape writes coordinates with up to 4 decimals
pub const FIXED_POINT_SCALE: f64 = 10_000.0;

/// Lexing failures, resolved into a [`PathError`] by [`tokenize`]
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LexError {
    #[default]
    Malformed,
    OutOfRange,
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(error = LexError)]
#[logos(skip r"[^A-Za-z0-9.\-]+")]
pub enum Token {
    /// A command letter; case selects absolute or relative coordinates
    #[regex(r"[A-Za-z]", |lex| lex.slice().chars().next())]
    Command(char),

    /// A coordinate scaled by [`FIXED_POINT_SCALE`]
    // `e` may continue a number but never start one, so a lone `e` lexes as a command
    #[regex(r"[0-9.\-][0-9.e\-]*", |lex| to_fixed(lex.slice()))]
    Number(i32),
}

/// Parse a numeric literal and scale it to fixed point.
///
/// Rounds half-to-even.
pub fn to_fixed(text: &str) -> Result<i32, LexError> {
    let value: f64 = text.parse().map_err(|_| LexError::Malformed)?;
    let scaled = (value * FIXED_POINT_SCALE).round_ties_even();
    if scaled.is_finite() && scaled >= i32::MIN as f64 && scaled <= i32::MAX as f64 {
        Ok(scaled as i32)
    } else {
        Err(LexError::OutOfRange)
    }
}

/// Lex path data into tokens with spans
pub fn tokenize(data: &str) -> Result<Vec<(Token, Span)>, PathError> {
    Token::lexer(data)
        .spanned()
        .map(|(tok, span)| match tok {
            Ok(t) => {
                log::trace!("token {:?} at {:?}", t, span);
                Ok((t, span))
            }
            Err(LexError::Malformed) => Err(PathError::MalformedNumber {
                text: data[span.clone()].to_string(),
                span,
            }),
            Err(LexError::OutOfRange) => Err(PathError::NumberOutOfRange {
                text: data[span.clone()].to_string(),
                span,
            }),
        })
        .collect()
}
