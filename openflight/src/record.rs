use std::backtrace::Backtrace;

mod read;

pub use read::RecordReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(num_enum::TryFromPrimitive, num_enum::IntoPrimitive)]
#[repr(i16)]
pub enum Opcode {
	Header = 1,
	Group = 2,
	Object = 4,
	Face = 5,
	PushLevel = 10,
	PopLevel = 11,
	LongId = 33,
}

/// Leads every record. `length` is the total size of the record in bytes,
/// header included, and is authoritative for framing regardless of how much
/// of the payload is actually decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
	pub opcode: i16,
	pub length: u16,
}

impl RecordHeader {
	pub const SIZE: usize = 4;
}

/// The decoded prefix of a face record. Real faces carry more trailing data;
/// everything past `material_index` is skipped via the declared length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
	pub id: String,
	pub ir_color_code: i32,
	pub relative_priority: i16,
	pub draw_type: i8,
	pub texture_white: i8,
	pub color_name_index: u16,
	pub alt_color_name_index: u16,
	pub reserved1: i8,
	pub template_billboard: i8,
	pub detail_texture_pattern_index: i16,
	pub texture_pattern_index: i16,
	pub material_index: i16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
	Header(String),
	Group(String),
	Object(String),
	Face(Face),
	FullId(String),
	Push,
	Pop,
	Skip(i16),
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
	#[error("{source}")]
	Gospel {
		#[from]
		source: gospel::read::Error,
		backtrace: Backtrace,
	},
	#[error(transparent)]
	Decode(#[from] crate::util::DecodeError),
	#[error("{message}")]
	Whatever {
		message: String,
		backtrace: Backtrace,
	},
}

impl From<String> for ReadError {
	fn from(message: String) -> Self {
		Self::Whatever {
			message,
			backtrace: Backtrace::capture(),
		}
	}
}
