//! Hand-written recursive-descent parser for roll strings like `"4x3d8-5; 9d10 & 3d6"`.
//!
//! The grammar, with whitespace allowed around every token:
//! ```text
//! roll      := clause (';' clause)*
//! clause    := (UINT 'x')? dice
//! dice      := dice_base ('&' dice_base)*
//! dice_base := UINT? 'd' UINT SIGNED_INT?
//! ```
//!
//! Input is lowercased before parsing, so `4X3D8` is the same as `4x3d8`.

pub mod cursor;

use alloc::{vec, vec::Vec};
use core::{ops::Range, str::FromStr};

use tracing::{debug, trace};

pub use self::cursor::Cursor;
use crate::{
	dice::{Dice, Error as DiceError},
	expr::Expr,
};

/// Maximum number of dice terms that can be joined with `&` in a single clause
pub const MAX_CHAIN_LEN: usize = 1024;

/// Maximum repetition count a single clause can have (the `R` in `Rx...`)
pub const MAX_REPEAT: u32 = 1024;

/// Parses a full roll string into one expression per clause (repeated clauses contribute one copy per repetition),
/// in the order they appear.
///
/// # Errors
/// If any clause fails to parse, or there is unparsed text left over after the last clause, an error describing the
/// first problem is returned and no expressions are produced.
///
/// # Examples
/// ```
/// use dicebag::{Dice, Expr};
///
/// let exprs = dicebag::parse::roll("4x3d8-5")?;
/// assert_eq!(exprs, vec![Expr::Dice(Dice::new(3, 8, -5)?); 4]);
///
/// let exprs = dicebag::parse::roll("12d10+5 & 4d6+2")?;
/// assert_eq!(exprs.len(), 1);
/// assert_eq!(exprs[0].to_string(), "12d10+5 & 4d6+2");
///
/// assert!(dicebag::parse::roll("4d6 + xyzzy").is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn roll(input: &str) -> Result<Vec<Expr>, Error> {
	let lc = input.to_ascii_lowercase();
	let mut cursor = Cursor::new(&lc);

	let result = roll_part(&mut cursor).and_then(|exprs| expect_end(&mut cursor).map(|()| exprs));
	match &result {
		Ok(exprs) => debug!(exprs = exprs.len(), "parsed roll"),
		Err(err) => debug!(%err, "rejected roll"),
	}
	result
}

/// Parses one or more `;`-separated clauses, without requiring the input to end afterwards.
///
/// # Errors
/// If any of the clauses fails to parse, its error is returned and the cursor is left where it started.
pub fn roll_part(cursor: &mut Cursor<'_>) -> Result<Vec<Expr>, Error> {
	cursor.attempt(|cursor| {
		let mut exprs = Vec::new();
		loop {
			exprs.extend(clause(cursor)?);
			if !cursor.match_and_consume(";") {
				break Ok(exprs);
			}
		}
	})
}

/// Parses a single dice chain, optionally prefixed with a repetition count like `4x`.
/// The chain is parsed once and a copy of it is produced for every repetition.
///
/// # Errors
/// If the repetition count is above [`MAX_REPEAT`] or the dice chain fails to parse, an error is returned and the
/// cursor is left where it started.
pub fn clause(cursor: &mut Cursor<'_>) -> Result<Vec<Expr>, Error> {
	cursor.attempt(|cursor| {
		cursor.skip_whitespace();
		let start = cursor.position();
		let snapshot = cursor.snapshot();
		let repeat = match cursor.read_unsigned_int() {
			Ok(Some(count)) if cursor.match_and_consume("x") => count,
			_ => {
				cursor.restore(snapshot);
				1
			}
		};
		if repeat > MAX_REPEAT {
			return Err(Error::new(ErrorKind::TooManyRepeats, start..cursor.position()));
		}

		let expr = dice(cursor)?;
		trace!(%expr, repeat, "parsed clause");

		let repeat = usize::try_from(repeat).map_err(|_err| Error::new(ErrorKind::Overflow, start..cursor.position()))?;
		Ok(vec![expr; repeat])
	})
}

/// Parses one or more dice terms joined with `&`. The terms are nested to the right, so `a & b & c` becomes
/// `a & (b & c)`.
///
/// # Errors
/// If any of the terms fails to parse, or there are more than [`MAX_CHAIN_LEN`] of them, an error is returned and
/// the cursor is left where it started.
pub fn dice(cursor: &mut Cursor<'_>) -> Result<Expr, Error> {
	cursor.attempt(|cursor| {
		let start = cursor.position();
		let first = Expr::Dice(dice_base(cursor)?);

		let mut rest = Vec::new();
		while cursor.match_and_consume("&") {
			if rest.len() >= MAX_CHAIN_LEN.saturating_sub(1) {
				return Err(Error::new(ErrorKind::ChainTooLong, start..cursor.position()));
			}
			rest.push(Expr::Dice(dice_base(cursor)?));
		}

		Ok(match rest.into_iter().rev().reduce(|rhs, lhs| lhs.and(rhs)) {
			Some(tail) => first.and(tail),
			None => first,
		})
	})
}

/// Parses a single dice term like `d20`, `4d6`, or `8d12-15`. The count defaults to 1 and the modifier to 0.
///
/// # Errors
/// If the term is malformed, or describes zero dice or zero-sided dice, an error is returned and the cursor is left
/// where it started.
pub fn dice_base(cursor: &mut Cursor<'_>) -> Result<Dice, Error> {
	cursor.attempt(|cursor| {
		cursor.skip_whitespace();
		let start = cursor.position();

		let count = cursor.read_unsigned_int()?.unwrap_or(1);
		if !cursor.match_and_consume("d") {
			return Err(cursor.expected("'d'"));
		}
		let Some(sides) = cursor.read_unsigned_int()? else {
			return Err(cursor.expected("number of sides"));
		};
		let modifier = cursor.read_signed_int()?.unwrap_or(0);

		Dice::new(count, sides, modifier).map_err(|err| Error::new(ErrorKind::Dice(err), start..cursor.position()))
	})
}

/// Ensures there is nothing but whitespace left in the input.
fn expect_end(cursor: &mut Cursor<'_>) -> Result<(), Error> {
	if cursor.is_exhausted() {
		Ok(())
	} else {
		let start = cursor.position();
		Err(Error::new(
			ErrorKind::TrailingInput,
			start..start.saturating_add(cursor.rest().len()),
		))
	}
}

/// Error produced when input doesn't match the grammar
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at {}..{}", .span.start, .span.end)]
#[non_exhaustive]
pub struct Error {
	/// What went wrong
	pub kind: ErrorKind,

	/// Byte range of the input where it went wrong
	pub span: Range<usize>,
}

impl Error {
	/// Creates a new error of the given kind at the given span.
	#[must_use]
	pub const fn new(kind: ErrorKind, span: Range<usize>) -> Self {
		Self { kind, span }
	}
}

/// Specific reason for an [`Error`]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
	/// A required token was missing.
	#[error("expected {0}")]
	Expected(&'static str),

	/// Everything up to a point was valid, but there was more input after it.
	#[error("unexpected trailing input")]
	TrailingInput,

	/// A number was too large to represent.
	#[error("number out of range")]
	Overflow,

	/// More dice terms were joined with `&` than allowed.
	#[error("more than {} dice terms joined with '&'", MAX_CHAIN_LEN)]
	ChainTooLong,

	/// A clause was repeated more times than allowed.
	#[error("more than {} repetitions of a clause", MAX_REPEAT)]
	TooManyRepeats,

	/// The dice described are invalid.
	#[error("invalid dice: {0}")]
	Dice(DiceError),
}

impl FromStr for Dice {
	type Err = Error;

	/// Parses a single dice term (such as `3d8-5`), requiring it to make up the whole input.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let lc = s.to_ascii_lowercase();
		let mut cursor = Cursor::new(&lc);
		let dice = dice_base(&mut cursor)?;
		expect_end(&mut cursor)?;
		Ok(dice)
	}
}

impl FromStr for Expr {
	type Err = Error;

	/// Parses a single chain of dice terms (such as `9d10 & 3d6`), requiring it to make up the whole input.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let lc = s.to_ascii_lowercase();
		let mut cursor = Cursor::new(&lc);
		let expr = dice(&mut cursor)?;
		expect_end(&mut cursor)?;
		Ok(expr)
	}
}
