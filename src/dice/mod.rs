//! All functionality for directly creating dice, rolling them, and working with their resulting rolls.
//!
//! This is the home of the dice "primitives". For joining several dice terms together, see [`Expr::And`].
//!
//! [`Expr::And`]: crate::expr::Expr::And

pub mod roller;

use alloc::{
	format,
	string::{String, ToString},
	vec::Vec,
};
use core::{fmt, num::NonZeroU32};

pub use self::roller::Roller;
use crate::expr::Describe;

/// Maximum number of dice that can be rolled as a single set
pub const MAX_COUNT: u32 = 10_000;

/// Number of sides on the default die
const D20_SIDES: NonZeroU32 = NonZeroU32::MIN.saturating_add(19);

/// A set of one or more rollable dice with a specific number of sides, along with a flat modifier to add to the sum
/// of their outcomes.
///
/// Both the count and the sides are guaranteed to be at least 1 by their types. Use [`Dice::new()`] or
/// [`Dice::builder()`] to construct dice from plain integers with validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_structs)]
pub struct Dice {
	/// Number of dice to roll
	pub count: NonZeroU32,

	/// Number of sides for each die
	pub sides: NonZeroU32,

	/// Flat value added to (or subtracted from, if negative) the sum of the outcomes
	pub modifier: i32,
}

impl Dice {
	/// Creates a new set of dice with a given count, number of sides, and modifier.
	///
	/// # Errors
	/// If either the count or the number of sides is 0, or the count is above [`MAX_COUNT`], an error variant is
	/// returned.
	///
	/// # Examples
	/// ```
	/// use dicebag::dice::{Dice, Error};
	///
	/// let dice = Dice::new(3, 8, -5)?;
	/// assert_eq!(dice.to_string(), "3d8-5");
	///
	/// assert_eq!(Dice::new(0, 6, 0), Err(Error::InvalidCount(0)));
	/// assert_eq!(Dice::new(2, 0, 0), Err(Error::InvalidSides(0)));
	/// assert_eq!(Dice::new(u32::MAX, 6, 0), Err(Error::TooManyDice(u32::MAX)));
	/// # Ok::<(), dicebag::dice::Error>(())
	/// ```
	pub const fn new(count: u32, sides: u32, modifier: i32) -> Result<Self, Error> {
		let Some(nz_count) = NonZeroU32::new(count) else {
			return Err(Error::InvalidCount(count));
		};
		if count > MAX_COUNT {
			return Err(Error::TooManyDice(count));
		}
		let Some(nz_sides) = NonZeroU32::new(sides) else {
			return Err(Error::InvalidSides(sides));
		};

		Ok(Self {
			count: nz_count,
			sides: nz_sides,
			modifier,
		})
	}

	/// Creates a new dice builder.
	#[must_use]
	#[inline]
	pub fn builder() -> Builder {
		Builder::default()
	}

	/// Rolls the dice using the given roller. Shorthand for [`Roller::roll()`].
	///
	/// # Errors
	/// If there are too many dice or the total of the rolled outcomes overflows, an error variant is returned.
	#[inline]
	pub fn roll(&self, roller: &mut impl Roller) -> Result<Rolled, Error> {
		roller.roll(self)
	}

	/// Checks whether rolling these dice always yields the same total, which is only the case for one-sided dice.
	#[must_use]
	#[inline]
	pub const fn is_deterministic(&self) -> bool {
		self.sides.get() == 1
	}
}

impl Default for Dice {
	/// Creates the default dice (1d20).
	#[inline]
	fn default() -> Self {
		Self {
			count: NonZeroU32::MIN,
			sides: D20_SIDES,
			modifier: 0,
		}
	}
}

impl fmt::Display for Dice {
	/// Formats the value using the given formatter. [Read more][core::fmt::Debug::fmt()]
	///
	/// The format is `{count}d{sides}`, followed by the modifier with its sign unless it is zero.
	///
	/// # Examples
	/// ```
	/// use dicebag::Dice;
	///
	/// assert_eq!(Dice::new(12, 10, 5)?.to_string(), "12d10+5");
	/// assert_eq!(Dice::new(8, 12, -15)?.to_string(), "8d12-15");
	/// assert_eq!(Dice::new(1, 6, 0)?.to_string(), "1d6");
	/// # Ok::<(), dicebag::dice::Error>(())
	/// ```
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}d{}", self.count, self.sides)?;
		if self.modifier > 0 {
			write!(f, "+{}", self.modifier)
		} else if self.modifier < 0 {
			write!(f, "{}", self.modifier)
		} else {
			Ok(())
		}
	}
}

/// Representation of the result from rolling [`Dice`], or of several such results merged together
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::exhaustive_structs)]
pub struct Rolled {
	/// Each individual die outcome, in the order they were rolled
	pub outcomes: Vec<u32>,

	/// Cumulative modifier of every set of dice that contributed to this result
	pub modifier: i64,

	/// Sum of all outcomes and the cumulative modifier
	pub total: i64,
}

impl Rolled {
	/// Creates a new rolled set of dice from a given set of dice and an iterator of outcomes, calculating the total.
	///
	/// # Errors
	/// If there is an integer overflow while summing the outcomes, an error variant is returned.
	///
	/// # Examples
	/// ```
	/// use dicebag::dice::{Dice, Rolled};
	///
	/// let dice = Dice::new(3, 6, 2)?;
	/// let rolled = Rolled::from_dice_and_outcomes(&dice, [4, 1, 6])?;
	/// assert_eq!(rolled.total, 13);
	/// assert_eq!(rolled.modifier, 2);
	/// assert_eq!(rolled.outcomes, vec![4, 1, 6]);
	/// # Ok::<(), dicebag::dice::Error>(())
	/// ```
	pub fn from_dice_and_outcomes(dice: &Dice, outcomes: impl IntoIterator<Item = u32>) -> Result<Self, Error> {
		let outcomes = outcomes.into_iter().collect::<Vec<_>>();
		let modifier = i64::from(dice.modifier);

		let mut total = modifier;
		for outcome in &outcomes {
			total = total
				.checked_add(i64::from(*outcome))
				.ok_or(Error::Overflow(*dice))?;
		}

		Ok(Self {
			outcomes,
			modifier,
			total,
		})
	}

	/// Merges this result with another, producing a new result whose outcomes are this one's followed by the
	/// other's, and whose total and modifier are the sums of both.
	///
	/// Returns [`None`] if either sum overflows.
	///
	/// # Examples
	/// ```
	/// use dicebag::dice::{Dice, Rolled};
	///
	/// let a = Rolled::from_dice_and_outcomes(&Dice::new(2, 10, 5)?, [3, 9])?;
	/// let b = Rolled::from_dice_and_outcomes(&Dice::new(1, 6, -2)?, [6])?;
	/// let merged = a.merge(b).unwrap();
	/// assert_eq!(merged.outcomes, vec![3, 9, 6]);
	/// assert_eq!(merged.total, 21);
	/// assert_eq!(merged.modifier, 3);
	/// # Ok::<(), dicebag::dice::Error>(())
	/// ```
	#[must_use]
	pub fn merge(self, other: Self) -> Option<Self> {
		let total = self.total.checked_add(other.total)?;
		let modifier = self.modifier.checked_add(other.modifier)?;

		let mut outcomes = self.outcomes;
		outcomes.extend(other.outcomes);

		Some(Self {
			outcomes,
			modifier,
			total,
		})
	}
}

impl Describe for Rolled {
	/// Builds a string of the total followed by a list of all of the individual outcomes, and the cumulative modifier
	/// if it isn't zero.
	///
	/// If `list_limit` is specified and there are more outcomes than it, the list of outcomes will be truncated and
	/// appended with "X more..." (where X is the remaining outcome count past the max).
	///
	/// # Examples
	/// ```
	/// use dicebag::{dice::{Dice, Rolled}, expr::Describe};
	///
	/// let dice = Dice::new(4, 6, 3)?;
	/// let rolled = Rolled::from_dice_and_outcomes(&dice, [6, 2, 5, 3])?;
	///
	/// assert_eq!(rolled.describe(None), "19 <= [6, 2, 5, 3] (modifier: 3)");
	/// assert_eq!(rolled.describe(Some(2)), "19 <= [6, 2, 2 more...] (modifier: 3)");
	/// # Ok::<(), dicebag::dice::Error>(())
	/// ```
	fn describe(&self, list_limit: Option<usize>) -> String {
		let list_limit = list_limit.unwrap_or(usize::MAX);
		let truncated = self.outcomes.len().saturating_sub(list_limit);

		format!(
			"{} <= [{}{}]{}",
			self.total,
			self.outcomes
				.iter()
				.take(list_limit)
				.map(ToString::to_string)
				.collect::<Vec<_>>()
				.join(", "),
			match (truncated, list_limit) {
				(0, _) => String::new(),
				(_, 0) => format!("{truncated} more..."),
				_ => format!(", {truncated} more..."),
			},
			if self.modifier == 0 {
				String::new()
			} else {
				format!(" (modifier: {})", self.modifier)
			}
		)
	}
}

impl fmt::Display for Rolled {
	/// Formats the value using the given formatter. [Read more][core::fmt::Debug::fmt()]
	///
	/// The output is equivalent to calling [`Self::describe(None)`].
	///
	/// [`Self::describe(None)`]: Self::describe()
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.describe(None))
	}
}

/// An error resulting from a dice operation
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
	/// Dice were requested with a count of zero.
	#[error("dice count must be at least 1, got {0}")]
	InvalidCount(u32),

	/// Dice were requested with zero sides.
	#[error("dice must have at least 1 side, got {0}")]
	InvalidSides(u32),

	/// Dice were requested with a count above [`MAX_COUNT`].
	#[error("cannot roll more than {max} dice at once, got {0}", max = MAX_COUNT)]
	TooManyDice(u32),

	/// There was an integer overflow when totalling the outcomes of the dice.
	#[error("integer overflow while totalling {0}")]
	Overflow(Dice),
}

/// Builds [`Dice`] with a fluent interface. Unset values default to those of a plain `1d20`.
///
/// # Examples
/// ```
/// use dicebag::dice::{Dice, Error};
///
/// let dice = Dice::builder().count(2).sides(6).modifier(-1).build()?;
/// assert_eq!(dice, Dice::new(2, 6, -1)?);
///
/// let dice = Dice::builder().count(3).build()?;
/// assert_eq!(dice.to_string(), "3d20");
///
/// assert_eq!(Dice::builder().sides(0).build(), Err(Error::InvalidSides(0)));
/// # Ok::<(), dicebag::dice::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Builder {
	/// Number of dice to roll
	count: u32,

	/// Number of sides per die
	sides: u32,

	/// Modifier to add to the sum of the outcomes
	modifier: i32,
}

impl Builder {
	/// Sets the number of dice to roll.
	#[must_use]
	pub const fn count(mut self, count: u32) -> Self {
		self.count = count;
		self
	}

	/// Sets the number of sides per die.
	#[must_use]
	pub const fn sides(mut self, sides: u32) -> Self {
		self.sides = sides;
		self
	}

	/// Sets the modifier to add to the sum of the outcomes.
	#[must_use]
	pub const fn modifier(mut self, modifier: i32) -> Self {
		self.modifier = modifier;
		self
	}

	/// Finalizes the dice.
	///
	/// # Errors
	/// If the count or number of sides is 0, an error variant is returned.
	pub const fn build(self) -> Result<Dice, Error> {
		Dice::new(self.count, self.sides, self.modifier)
	}
}

impl Default for Builder {
	#[inline]
	fn default() -> Self {
		Self {
			count: 1,
			sides: 20,
			modifier: 0,
		}
	}
}
