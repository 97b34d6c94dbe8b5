use std::backtrace::Backtrace;

use gospel::read::Reader;
use strict_result::{Strict, StrictResult};

#[derive(Debug, thiserror::Error)]
#[error("invalid identifier string {text:?}")]
pub struct DecodeError {
	text: String,
	backtrace: Backtrace,
}

pub fn decode(bytes: &[u8]) -> Result<String, DecodeError> {
	match std::str::from_utf8(bytes) {
		Ok(s) => {
			if !s.is_ascii() {
				tracing::warn!("non-ascii identifier {s:?}");
			}
			Ok(s.to_owned())
		}
		Err(_) => Err(DecodeError {
			text: String::from_utf8_lossy(bytes).into_owned(),
			backtrace: Backtrace::capture(),
		}),
	}
}

#[extend::ext(name = ReaderExt)]
pub impl Reader<'_> {
	// Fixed-width id field, null-padded, padding not guaranteed zeroed past
	// the first terminator.
	fn sized_string<const N: usize, E>(&mut self) -> StrictResult<String, E>
	where
		E: From<gospel::read::Error> + From<DecodeError>,
	{
		let d = self.slice(N)?;
		let len = d.iter().position(|a| *a == 0).unwrap_or(d.len());
		Ok(decode(&d[..len])?).strict()
	}
}

macro_rules! ensure {
	($cond:expr, $($t:tt)*) => {
		if !($cond) {
			return Err(format!($($t)*).into());
		}
	};
}

pub(crate) use ensure;
