//! Abstractions for producing die outcomes using various means.

use core::{iter::Peekable, num::NonZeroU32};

#[cfg(feature = "fastrand")]
use fastrand::Rng;
use tracing::trace;

use super::{Dice, Error, Rolled, MAX_COUNT};

/// Rolls dice - what else is there to say?
///
/// Implementors only need to produce a single outcome in `[1, sides]`; everything else is built on top of that.
pub trait Roller {
	/// Rolls a single die, producing an outcome in `[1, sides]`.
	#[must_use]
	fn roll_die(&mut self, sides: NonZeroU32) -> u32;

	/// Rolls a set of dice, drawing each of its outcomes in order and adding its modifier to their sum.
	///
	/// # Errors
	/// If the dice count is above [`MAX_COUNT`] or the total of the outcomes overflows, an error variant is returned.
	fn roll(&mut self, dice: &Dice) -> Result<Rolled, Error>
	where
		Self: Sized,
	{
		if dice.count.get() > MAX_COUNT {
			return Err(Error::TooManyDice(dice.count.get()));
		}

		let outcomes = (1..=dice.count.get()).map(|die| {
			let outcome = self.roll_die(dice.sides);
			trace!(die, sides = dice.sides.get(), outcome, "rolled die");
			outcome
		});

		Rolled::from_dice_and_outcomes(dice, outcomes)
	}
}

/// Generates outcomes with random values using [fastrand]. Requires the `fastrand` feature (enabled by default).
///
/// # Examples
///
/// ## Default fastrand roller
/// ```
/// use dicebag::dice::{roller::{FastRand as FastRandRoller, Roller}, Dice};
///
/// let mut roller = FastRandRoller::default();
///
/// let dice = Dice::new(4, 6, 0)?;
/// let _ = roller.roll(&dice)?;
/// let _ = roller.roll(&dice)?;
/// # Ok::<(), dicebag::dice::Error>(())
/// ```
///
/// ## Manually seeded fastrand roller
/// ```
/// use dicebag::dice::{roller::{FastRand as FastRandRoller, Roller}, Dice};
///
/// let dice = Dice::new(4, 6, 0)?;
/// let first = FastRandRoller::with_seed(0x750c38d574400).roll(&dice)?;
/// let second = FastRandRoller::with_seed(0x750c38d574400).roll(&dice)?;
/// assert_eq!(first, second);
/// # Ok::<(), dicebag::dice::Error>(())
/// ```
#[cfg(feature = "fastrand")]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "std", derive(Default))]
pub struct FastRand(Rng);

#[cfg(feature = "fastrand")]
impl FastRand {
	/// Creates a new fastrand roller that uses the given RNG instance to generate outcomes.
	#[must_use]
	#[inline]
	pub const fn new(rng: Rng) -> Self {
		Self(rng)
	}

	/// Creates a new fastrand roller that uses a pre-seeded RNG instance to generate outcomes.
	#[must_use]
	#[inline]
	pub fn with_seed(seed: u64) -> Self {
		Self(Rng::with_seed(seed))
	}
}

#[cfg(feature = "fastrand")]
impl Roller for FastRand {
	/// Rolls a single die using the [`fastrand::Rng`] the roller was created with.
	#[inline]
	fn roll_die(&mut self, sides: NonZeroU32) -> u32 {
		self.0.u32(1..=sides.get())
	}
}

/// Generates outcomes that always have a specific value, regardless of the number of sides.
///
/// # Examples
/// ```
/// use dicebag::dice::{roller::{Roller, Val as ValRoller}, Dice};
///
/// let mut roller = ValRoller(3);
///
/// let rolled = roller.roll(&Dice::new(4, 6, 0)?)?;
/// assert!(rolled.outcomes.iter().all(|outcome| *outcome == 3));
/// assert_eq!(rolled.total, 12);
/// # Ok::<(), dicebag::dice::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Val(pub u32);

impl Roller for Val {
	/// Rolls a single die, always with one specific value.
	#[inline]
	fn roll_die(&mut self, _sides: NonZeroU32) -> u32 {
		self.0
	}
}

/// Generates outcomes that always have their max value.
///
/// # Examples
/// ```
/// use dicebag::dice::{roller::{Max as MaxRoller, Roller}, Dice};
///
/// let mut roller = MaxRoller;
///
/// let rolled = roller.roll(&Dice::new(4, 6, -4)?)?;
/// assert!(rolled.outcomes.iter().all(|outcome| *outcome == 6));
/// assert_eq!(rolled.total, 20);
/// # Ok::<(), dicebag::dice::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Max;

impl Roller for Max {
	/// Rolls a single die, always with the max value (same as the number of sides).
	#[inline]
	fn roll_die(&mut self, sides: NonZeroU32) -> u32 {
		sides.get()
	}
}

/// Generates outcomes from an iterator of values. Mainly useful for testing purposes.
///
/// # Examples
/// ```
/// use dicebag::dice::{roller::{Iter as IterRoller, Roller}, Dice};
///
/// let mut roller = IterRoller::new(vec![1, 2, 3, 4, 10]);
/// let rolled = roller.roll(&Dice::new(5, 6, 0)?)?;
/// assert_eq!(rolled.outcomes, vec![1, 2, 3, 4, 10]);
/// assert!(!roller.can_roll());
/// # Ok::<(), dicebag::dice::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Iter<I: Iterator<Item = u32>>(Peekable<I>);

impl<I: Iterator<Item = u32>> Iter<I> {
	/// Checks whether the iterator still has values available.
	#[inline]
	pub fn can_roll(&mut self) -> bool {
		self.0.peek().is_some()
	}

	/// Creates a new roller that uses the given iterator to provide outcomes.
	#[must_use]
	#[inline]
	pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
		Self(iter.into_iter().peekable())
	}
}

impl<I: Iterator<Item = u32>> Roller for Iter<I> {
	/// Rolls a die with the value from the next iteration.
	///
	/// # Panics
	/// If the iterator has finished, this will panic.
	#[inline]
	#[expect(
		clippy::expect_used,
		reason = "Mostly for testing, otherwise manual checking of can_roll() is expected"
	)]
	fn roll_die(&mut self, _sides: NonZeroU32) -> u32 {
		self.0.next().expect("iterator is finished")
	}
}
