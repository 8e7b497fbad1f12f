//! Tree data structures for evaluating chains of dice joined with `&`, and working with their results.

use alloc::{boxed::Box, format, string::String, vec::Vec};
use core::fmt;

use crate::dice::{roller::Roller, Dice, Error as DiceError, Rolled};

/// Individual elements of a dice expression
///
/// Trees are only ever built bottom-up, so each node exclusively owns its children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Expr {
	/// Dice literal
	Dice(Dice),

	/// Two expressions rolled independently, with their results merged (left first)
	And(Box<Self>, Box<Self>),
}

impl Expr {
	/// Joins this expression with another, producing an [`Expr::And`] with `self` on the left.
	#[must_use]
	pub fn and(self, rhs: Self) -> Self {
		Self::And(Box::new(self), Box::new(rhs))
	}

	/// Evaluates the expression, rolling all dice it contains with the given roller.
	/// For an [`Expr::And`], the left side is rolled entirely before the right side, so the left side's outcomes
	/// come first in the merged result.
	///
	/// # Errors
	/// If there is an integer overflow while totalling any dice or merging results, an error variant is returned.
	///
	/// # Examples
	/// ```
	/// use dicebag::{dice::{roller::Iter as IterRoller, Dice}, expr::Expr};
	///
	/// let expr = Expr::Dice(Dice::new(2, 10, 5)?).and(Expr::Dice(Dice::new(1, 6, -1)?));
	/// let rolled = expr.eval(&mut IterRoller::new([7, 2, 4]))?;
	/// assert_eq!(rolled.outcomes, vec![7, 2, 4]);
	/// assert_eq!(rolled.total, 17);
	/// assert_eq!(rolled.modifier, 4);
	/// # Ok::<(), Box<dyn std::error::Error>>(())
	/// ```
	pub fn eval(&self, roller: &mut impl Roller) -> Result<Rolled, EvalError> {
		match self {
			Self::Dice(dice) => roller.roll(dice).map_err(|err| EvalError::Dice(self.clone(), err)),
			Self::And(a, b) => {
				let lhs = a.eval(roller)?;
				let rhs = b.eval(roller)?;
				lhs.merge(rhs).ok_or_else(|| EvalError::Overflow(self.clone()))
			}
		}
	}

	/// Checks whether the expression is deterministic (will always yield the same total with every evaluation).
	/// A [`Self::Dice`] is only deterministic if its dice have one side, and an [`Self::And`] is deterministic if both
	/// of its children are.
	#[must_use]
	pub fn is_deterministic(&self) -> bool {
		match self {
			Self::Dice(dice) => dice.is_deterministic(),
			Self::And(a, b) => a.is_deterministic() && b.is_deterministic(),
		}
	}
}

impl From<Dice> for Expr {
	#[inline]
	fn from(dice: Dice) -> Self {
		Self::Dice(dice)
	}
}

impl Describe for Expr {
	/// Builds a full usable expression string from the expression tree. All strings output from this result in the
	/// exact same tree when re-parsing them.
	///
	/// `list_limit` does not affect the output of this implementation in any way since there are no possible lists of
	/// elements included, so it is always safe to pass `None`.
	fn describe(&self, _list_limit: Option<usize>) -> String {
		match self {
			Self::Dice(dice) => format!("{dice}"),
			Self::And(a, b) => format!("{} & {}", a.describe(None), b.describe(None)),
		}
	}
}

impl fmt::Display for Expr {
	/// Formats the value using the given formatter. [Read more][core::fmt::Debug::fmt()]
	///
	/// The output of this implementation is equivalent to [`Self::describe(None)`].
	///
	/// [`Self::describe(None)`]: Self::describe()
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.describe(None))
	}
}

/// Evaluates every expression in order with the same roller, collecting their results in the same order.
///
/// # Errors
/// If evaluating any of the expressions fails, the first such error is returned.
///
/// # Examples
/// ```
/// use dicebag::{dice::roller::Max as MaxRoller, expr::eval_all};
///
/// let exprs = dicebag::parse_roll("2x d6+1; 3d8")?;
/// let results = eval_all(&exprs, &mut MaxRoller)?;
/// let totals = results.iter().map(|rolled| rolled.total).collect::<Vec<_>>();
/// assert_eq!(totals, vec![7, 7, 24]);
///
/// for (expr, rolled) in exprs.iter().zip(&results) {
/// 	assert_eq!(rolled.outcomes.len(), if expr.to_string() == "3d8" { 3 } else { 1 });
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn eval_all(exprs: &[Expr], roller: &mut impl Roller) -> Result<Vec<Rolled>, EvalError> {
	exprs.iter().map(|expr| expr.eval(roller)).collect()
}

/// Error that can occur during [`Expr::eval()`]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
	/// Dice-related error (likely during totalling)
	#[error("dice error while evaluating \"{0}\": {1}")]
	Dice(Expr, #[source] DiceError),

	/// Integer overflow while merging the results of both sides of an [`Expr::And`]
	#[error("integer overflow while evaluating \"{0}\"")]
	Overflow(Expr),
}

/// Trait to allow creation of expanded descriptions with an optional max number of individual listed results where
/// applicable
pub trait Describe {
	/// Builds a detailed string for the value.
	/// Any elements that can have multiple results should list all of the specific individual results that occurred
	/// (ideally, up to `list_limit` of them).
	#[must_use]
	fn describe(&self, list_limit: Option<usize>) -> String;
}
