//! Backtrackable cursor over the not-yet-parsed remainder of an input string.
//!
//! The cursor is a plain position into an immutable string, so snapshots are just copies of that position and
//! restoring one can never observe partially-consumed state.

use core::ops::Range;

use tracing::trace;

use super::{Error, ErrorKind};

/// Cursor for consuming primitive tokens from an input string.
///
/// Every reading method skips leading whitespace first. Whitespace skipped that way stays consumed even if nothing
/// else matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'src> {
	/// Full input
	src: &'src str,

	/// Byte offset of the first unconsumed character
	pos: usize,
}

/// Saved position of a [`Cursor`], to be handed back to [`Cursor::restore()`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot(usize);

impl<'src> Cursor<'src> {
	/// Creates a new cursor at the start of the input.
	#[must_use]
	pub const fn new(src: &'src str) -> Self {
		Self { src, pos: 0 }
	}

	/// Gets the byte offset of the first unconsumed character.
	#[must_use]
	#[inline]
	pub const fn position(&self) -> usize {
		self.pos
	}

	/// Gets the remaining unconsumed input.
	#[must_use]
	pub fn rest(&self) -> &'src str {
		self.src.get(self.pos..).unwrap_or_default()
	}

	/// Discards any whitespace at the front of the remaining input.
	pub fn skip_whitespace(&mut self) {
		let trimmed = self.rest().trim_start();
		self.pos = self.src.len().saturating_sub(trimmed.len());
	}

	/// Skips whitespace, then checks whether there is nothing left to consume.
	pub fn is_exhausted(&mut self) -> bool {
		self.skip_whitespace();
		self.rest().is_empty()
	}

	/// Skips whitespace, then consumes the longest run of ASCII digits as an unsigned integer.
	///
	/// Returns `Ok(None)` without consuming anything if there are no digits.
	///
	/// # Errors
	/// If the digits don't fit in a [`u32`], an [`ErrorKind::Overflow`] error spanning them is returned and nothing
	/// is consumed.
	pub fn read_unsigned_int(&mut self) -> Result<Option<u32>, Error> {
		self.skip_whitespace();
		let rest = self.rest();
		let len = rest.bytes().take_while(u8::is_ascii_digit).count();
		let Some(digits) = rest.get(..len).filter(|digits| !digits.is_empty()) else {
			return Ok(None);
		};

		let span = self.span_of(len);
		let val = digits.parse().map_err(|_err| Error::new(ErrorKind::Overflow, span.clone()))?;
		self.pos = span.end;
		Ok(Some(val))
	}

	/// Skips whitespace, then consumes an integer with an optional leading `+` or `-`.
	///
	/// A sign that isn't followed by digits is left unconsumed and `Ok(None)` is returned, the same as when there is
	/// no integer at all.
	///
	/// # Errors
	/// If the value doesn't fit in an [`i32`], an [`ErrorKind::Overflow`] error is returned.
	pub fn read_signed_int(&mut self) -> Result<Option<i32>, Error> {
		self.skip_whitespace();
		let snapshot = self.snapshot();
		let start = self.pos;

		let negate = if self.match_and_consume("+") {
			false
		} else if self.match_and_consume("-") {
			true
		} else {
			return self
				.read_unsigned_int()?
				.map(|val| i32::try_from(val).map_err(|_err| Error::new(ErrorKind::Overflow, start..self.pos)))
				.transpose();
		};

		let Some(val) = self.read_unsigned_int()? else {
			self.restore(snapshot);
			return Ok(None);
		};

		let signed = if negate {
			0_i32.checked_sub_unsigned(val)
		} else {
			i32::try_from(val).ok()
		};
		signed
			.map(Some)
			.ok_or_else(|| Error::new(ErrorKind::Overflow, start..self.pos))
	}

	/// Skips whitespace, then consumes `literal` if the remaining input starts with it.
	pub fn match_and_consume(&mut self, literal: &str) -> bool {
		self.skip_whitespace();
		if self.rest().starts_with(literal) {
			self.pos = self.pos.saturating_add(literal.len());
			true
		} else {
			false
		}
	}

	/// Saves the current position so that it can be returned to with [`Self::restore()`].
	#[must_use]
	#[inline]
	pub const fn snapshot(&self) -> Snapshot {
		Snapshot(self.pos)
	}

	/// Returns to a previously saved position, un-consuming everything consumed since.
	pub fn restore(&mut self, snapshot: Snapshot) {
		if snapshot.0 != self.pos {
			trace!(from = self.pos, to = snapshot.0, "backtracking");
		}
		self.pos = snapshot.0;
	}

	/// Runs a parsing function, restoring the cursor to where it was beforehand if the function fails.
	///
	/// # Errors
	/// Any error from the function is passed through as-is.
	pub fn attempt<T, E>(&mut self, parse: impl FnOnce(&mut Self) -> Result<T, E>) -> Result<T, E> {
		let snapshot = self.snapshot();
		let result = parse(self);
		if result.is_err() {
			self.restore(snapshot);
		}
		result
	}

	/// Skips whitespace, then builds an [`ErrorKind::Expected`] error spanning the next character (or the empty end
	/// of the input).
	#[must_use]
	pub fn expected(&mut self, what: &'static str) -> Error {
		self.skip_whitespace();
		let len = self.rest().chars().next().map_or(0, char::len_utf8);
		Error::new(ErrorKind::Expected(what), self.span_of(len))
	}

	/// Builds a span covering the next `len` bytes.
	fn span_of(&self, len: usize) -> Range<usize> {
		self.pos..self.pos.saturating_add(len)
	}
}
