#![feature(test)]

extern crate test;

use dicebag::{parse, Dice, Expr};
use test::Bencher;

#[bench]
fn parse_basic(b: &mut Bencher) {
	b.iter(|| parse::roll("4d8 + 4").unwrap());
}

#[bench]
fn parse_complex(b: &mut Bencher) {
	b.iter(|| parse::roll("4d6+3 ; 8d12 -15 ; 3x 9d10 & 3d6 & 4d12 +17").unwrap());
}

#[bench]
fn parse_long_chain(b: &mut Bencher) {
	let input = vec!["12d10+5"; parse::MAX_CHAIN_LEN].join(" & ");
	b.iter(|| parse::roll(&input).unwrap());
}

#[bench]
fn parse_many_clauses(b: &mut Bencher) {
	let input = vec!["2x 4d6-1 & d20"; 500].join("; ");
	b.iter(|| parse::roll(&input).unwrap());
}

#[bench]
fn fromstr_dice(b: &mut Bencher) {
	b.iter(|| "100d42-17".parse::<Dice>().unwrap());
}

#[bench]
fn fromstr_expr(b: &mut Bencher) {
	b.iter(|| "9d10 & 3d6 & 4d12+17".parse::<Expr>().unwrap());
}
