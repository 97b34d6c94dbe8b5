use std::path::Path;
use std::process::ExitCode;

use fltrace::{trace, Printer};

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	let mut args = std::env::args_os().skip(1);
	let (Some(path), None) = (args.next(), args.next()) else {
		eprintln!("usage: fltrace <flt file>");
		return ExitCode::from(1);
	};
	let path = Path::new(&path);

	let data = match std::fs::read(path) {
		Ok(data) => data,
		Err(e) => {
			eprintln!("{}: {e}", path.display());
			return ExitCode::from(2);
		}
	};

	let mut out = Printer::new();
	let result = trace(&data, &mut out);
	// Everything decoded before a framing error is still reported.
	print!("{}", out.finish());
	if let Err(e) = result {
		eprintln!("{}: {e}", path.display());
		return ExitCode::from(2);
	}
	ExitCode::SUCCESS
}
