#![feature(test)]

extern crate test;

use test::Bencher;

use dicebag::{dice::roller::FastRand, expr::eval_all};

#[bench]
fn e2e_basic(b: &mut Bencher) {
	let mut rng = FastRand::default();
	b.iter(|| eval_all(&dicebag::parse_roll("4d8 + 4").unwrap(), &mut rng).unwrap());
}

#[bench]
fn e2e_complex(b: &mut Bencher) {
	let mut rng = FastRand::default();
	b.iter(|| {
		eval_all(
			&dicebag::parse_roll("4d6+3 ; 8d12 -15 ; 4x 9d10 & 3d6 & 4d12 +17").unwrap(),
			&mut rng,
		)
		.unwrap()
	});
}
