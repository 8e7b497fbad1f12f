use crate::parse::{cursor::Cursor, ErrorKind};

#[test]
fn exhausted_skips_whitespace() {
	let mut cursor = Cursor::new("  \t\n");
	assert!(cursor.is_exhausted());
	assert_eq!(cursor.position(), 4);

	let mut cursor = Cursor::new("  d6");
	assert!(!cursor.is_exhausted());
	assert_eq!(cursor.rest(), "d6");
}

#[test]
fn unsigned_int() {
	let mut cursor = Cursor::new(" 42d6");
	assert_eq!(cursor.read_unsigned_int(), Ok(Some(42)));
	assert_eq!(cursor.rest(), "d6");
	assert_eq!(cursor.read_unsigned_int(), Ok(None));
	assert_eq!(cursor.rest(), "d6");
}

#[test]
fn unsigned_int_leading_zeros() {
	let mut cursor = Cursor::new("007");
	assert_eq!(cursor.read_unsigned_int(), Ok(Some(7)));
	assert!(cursor.is_exhausted());
}

#[test]
fn unsigned_int_overflow() {
	let mut cursor = Cursor::new("99999999999999999999 d6");
	let err = cursor.read_unsigned_int().unwrap_err();
	assert_eq!(err.kind, ErrorKind::Overflow);
	assert_eq!(err.span, 0..20);
	assert_eq!(cursor.position(), 0);

	let mut cursor = Cursor::new("4294967295");
	assert_eq!(cursor.read_unsigned_int(), Ok(Some(u32::MAX)));
	let mut cursor = Cursor::new("4294967296");
	assert!(cursor.read_unsigned_int().is_err());
}

#[test]
fn signed_int() {
	let mut cursor = Cursor::new("+5 - 3 7");
	assert_eq!(cursor.read_signed_int(), Ok(Some(5)));
	assert_eq!(cursor.read_signed_int(), Ok(Some(-3)));
	assert_eq!(cursor.read_signed_int(), Ok(Some(7)));
	assert!(cursor.is_exhausted());
}

#[test]
fn signed_int_sign_without_digits() {
	let mut cursor = Cursor::new(" + xyzzy");
	assert_eq!(cursor.read_signed_int(), Ok(None));
	assert_eq!(cursor.rest(), "+ xyzzy");

	let mut cursor = Cursor::new("-d4");
	assert_eq!(cursor.read_signed_int(), Ok(None));
	assert_eq!(cursor.rest(), "-d4");

	let mut cursor = Cursor::new("d4");
	assert_eq!(cursor.read_signed_int(), Ok(None));
	assert_eq!(cursor.rest(), "d4");
}

#[test]
fn signed_int_range() {
	let mut cursor = Cursor::new("-2147483648");
	assert_eq!(cursor.read_signed_int(), Ok(Some(i32::MIN)));

	let mut cursor = Cursor::new("+2147483647");
	assert_eq!(cursor.read_signed_int(), Ok(Some(i32::MAX)));

	for input in ["-2147483649", "+2147483648", "2147483648"] {
		let err = Cursor::new(input).read_signed_int().unwrap_err();
		assert_eq!(err.kind, ErrorKind::Overflow);
	}
}

#[test]
fn match_and_consume() {
	let mut cursor = Cursor::new("  & d6");
	assert!(!cursor.match_and_consume(";"));
	assert_eq!(cursor.rest(), "& d6");
	assert!(cursor.match_and_consume("&"));
	assert!(cursor.match_and_consume("d"));
	assert_eq!(cursor.rest(), "6");
}

#[test]
fn snapshot_and_restore() {
	let mut cursor = Cursor::new("4x3d8");
	let snapshot = cursor.snapshot();
	assert_eq!(cursor.read_unsigned_int(), Ok(Some(4)));
	assert!(cursor.match_and_consume("x"));
	cursor.restore(snapshot);
	assert_eq!(cursor.position(), 0);
	assert_eq!(cursor.rest(), "4x3d8");
}

#[test]
fn attempt_restores_on_failure() {
	let mut cursor = Cursor::new("12 34");
	let result: Result<u32, ()> = cursor.attempt(|cursor| {
		assert_eq!(cursor.read_unsigned_int(), Ok(Some(12)));
		Err(())
	});
	assert!(result.is_err());
	assert_eq!(cursor.position(), 0);

	let result: Result<Option<u32>, ()> = cursor.attempt(|cursor| Ok(cursor.read_unsigned_int().unwrap_or(None)));
	assert_eq!(result, Ok(Some(12)));
	assert_eq!(cursor.rest(), " 34");
}

#[test]
fn expected_spans_next_char() {
	let mut cursor = Cursor::new("4 xd6");
	assert_eq!(cursor.read_unsigned_int(), Ok(Some(4)));
	let err = cursor.expected("'d'");
	assert_eq!(err.kind, ErrorKind::Expected("'d'"));
	assert_eq!(err.span, 2..3);

	let mut cursor = Cursor::new("4d");
	assert!(cursor.match_and_consume("4d"));
	assert_eq!(cursor.expected("number of sides").span, 2..2);
}
