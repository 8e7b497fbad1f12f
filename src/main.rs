use std::{
	env,
	io::{self, IsTerminal, Write},
	process::ExitCode,
};

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use dicebag::{dice::roller::FastRand as FastRandRoller, expr::eval_all, parse};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(io::stderr)
		.init();

	let input = match read_input() {
		Ok(input) => input,
		Err(err) => {
			eprintln!("Unable to read input: {err}");
			return ExitCode::FAILURE;
		}
	};

	let exprs = match dicebag::parse_roll(&input) {
		Ok(exprs) => exprs,
		Err(err) => {
			report_parse_error(&input, &err);
			return ExitCode::FAILURE;
		}
	};

	println!("Parsing: {input}");
	match eval_all(&exprs, &mut FastRandRoller::default()) {
		Ok(results) => {
			for (expr, rolled) in exprs.iter().zip(&results) {
				println!("{expr}: {rolled}");
			}
			ExitCode::SUCCESS
		}
		Err(err) => {
			eprintln!("Evaluation error: {err}");
			ExitCode::FAILURE
		}
	}
}

/// Obtains the roll string by combining all args passed to the executable, so that it can be left unquoted even with
/// spaces. Falls back to the first line of stdin if there are no args.
fn read_input() -> io::Result<String> {
	let args = env::args();
	if args.len() > 1 {
		// The first argument is ignored since it is typically the name of the executable itself
		return Ok(args.skip(1).collect::<Vec<_>>().join(" "));
	}

	let stdin = io::stdin();
	if stdin.is_terminal() {
		print!("Enter roll: ");
		io::stdout().flush()?;
	}

	let mut line = String::new();
	stdin.read_line(&mut line)?;
	Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

fn report_parse_error(input: &str, err: &parse::Error) {
	let result = Report::build(ReportKind::Error, err.span.clone())
		.with_config(Config::default().with_index_type(IndexType::Byte))
		.with_message(format!("Invalid input: {input}"))
		.with_label(
			Label::new(err.span.clone())
				.with_message(err.kind.to_string())
				.with_color(Color::Red),
		)
		.finish()
		.eprint(Source::from(input));

	if result.is_err() {
		eprintln!("Invalid input: {err}");
	}
}
