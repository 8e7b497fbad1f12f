use crate::{
	dice::{
		roller::{FastRand as FastRandRoller, Iter as IterRoller, Max as MaxRoller},
		Dice,
	},
	expr::{eval_all, Describe, Expr},
};

#[test]
fn single_dice() {
	let expr = dice(3, 8, -5);
	let rolled = expr.eval(&mut IterRoller::new([8, 2, 7])).unwrap();
	assert_eq!(rolled.outcomes, vec![8, 2, 7]);
	assert_eq!(rolled.modifier, -5);
	assert_eq!(rolled.total, 12);
}

#[test]
fn combination_outcome_order() {
	let expr = dice(2, 6, 1).and(dice(1, 4, 0).and(dice(3, 10, -2)));
	let rolled = expr.eval(&mut IterRoller::new([1, 2, 3, 4, 5, 6])).unwrap();
	assert_eq!(rolled.outcomes, vec![1, 2, 3, 4, 5, 6]);
	assert_eq!(rolled.total, 20);
	assert_eq!(rolled.modifier, -1);
}

#[test]
fn combination_matches_its_parts() {
	let left = dice(4, 6, 3);
	let right = dice(2, 20, -4);
	let rolls = [6, 5, 4, 3, 20, 1];

	let combined = left.clone().and(right.clone()).eval(&mut IterRoller::new(rolls)).unwrap();

	let mut roller = IterRoller::new(rolls);
	let a = left.eval(&mut roller).unwrap();
	let b = right.eval(&mut roller).unwrap();

	assert_eq!(combined.outcomes, [a.outcomes, b.outcomes].concat());
	assert_eq!(combined.total, a.total + b.total);
}

#[test]
fn random_outcomes_in_range() {
	let expr = dice(50, 6, 0).and(dice(50, 12, 0));
	let rolled = expr.eval(&mut FastRandRoller::default()).unwrap();
	assert_eq!(rolled.outcomes.len(), 100);
	assert!(rolled.outcomes[..50].iter().all(|outcome| (1..=6).contains(outcome)));
	assert!(rolled.outcomes[50..].iter().all(|outcome| (1..=12).contains(outcome)));
}

#[test]
fn eval_all_keeps_order() {
	let exprs = vec![dice(1, 6, 0), dice(1, 8, 0).and(dice(1, 4, 0)), dice(1, 20, 2)];
	let results = eval_all(&exprs, &mut MaxRoller).unwrap();
	let totals = results.iter().map(|rolled| rolled.total).collect::<Vec<_>>();
	assert_eq!(totals, vec![6, 12, 22]);
}

#[test]
fn eval_all_empty() {
	assert!(eval_all(&[], &mut MaxRoller).unwrap().is_empty());
}

#[test]
fn determinism() {
	assert!(dice(4, 1, 2).is_deterministic());
	assert!(!dice(4, 2, 2).is_deterministic());
	assert!(dice(1, 1, 0).and(dice(3, 1, 0)).is_deterministic());
	assert!(!dice(1, 1, 0).and(dice(3, 6, 0)).is_deterministic());
}

#[test]
fn describe_expr() {
	assert_eq!(dice(12, 10, 5).describe(None), "12d10+5");
	assert_eq!(dice(1, 6, 0).to_string(), "1d6");
	assert_eq!(
		dice(9, 10, 0).and(dice(3, 6, 0).and(dice(4, 12, 17))).to_string(),
		"9d10 & 3d6 & 4d12+17"
	);
}

#[test]
fn from_dice() {
	let d = Dice::new(2, 4, 1).unwrap();
	assert_eq!(Expr::from(d), Expr::Dice(d));
}

fn dice(count: u32, sides: u32, modifier: i32) -> Expr {
	Expr::Dice(Dice::new(count, sides, modifier).unwrap())
}
