use gospel::read::{Be as _, Reader};

use crate::record::{Face, Opcode, ReadError, Record, RecordHeader};
use crate::util::{decode, ensure, ReaderExt as _};

/// Streaming decoder over a flat record stream. Each call to
/// [`next_record`](Self::next_record) consumes exactly one record's declared
/// length, whatever the decode itself touched.
#[derive(Debug, Clone)]
pub struct RecordReader<'a> {
	f: Reader<'a>,
}

impl<'a> RecordReader<'a> {
	pub fn new(data: &'a [u8]) -> Self {
		RecordReader {
			f: Reader::new(data),
		}
	}

	pub fn pos(&self) -> usize {
		self.f.pos()
	}

	/// Returns `Ok(None)` on a clean end of stream. A partial header or a
	/// record whose declared length cannot hold is a framing error; framing
	/// cannot be recovered past that point.
	pub fn next_record(&mut self) -> Result<Option<Record>, ReadError> {
		if self.f.remaining().is_empty() {
			return Ok(None);
		}
		let start = self.f.pos();
		let header = RecordHeader {
			opcode: self.f.i16()?,
			length: self.f.u16()?,
		};
		let length = header.length as usize;
		ensure!(
			length >= RecordHeader::SIZE,
			"record at {start:#X}: declared length {length} is shorter than the header"
		);
		let end = start + length;
		ensure!(
			end <= self.f.len(),
			"record at {start:#X}: declared length {length} runs past end of stream"
		);

		let record = match Opcode::try_from(header.opcode) {
			Ok(Opcode::Header) => Record::Header(self.f.sized_string::<8, _>()?),
			Ok(Opcode::Group) => Record::Group(self.f.sized_string::<8, _>()?),
			Ok(Opcode::Object) => Record::Object(self.f.sized_string::<8, _>()?),
			Ok(Opcode::Face) => Record::Face(Face::read(&mut self.f)?),
			Ok(Opcode::PushLevel) => Record::Push,
			Ok(Opcode::PopLevel) => Record::Pop,
			Ok(Opcode::LongId) => {
				// No terminator is guaranteed; the declared length is the
				// only bound.
				let d = self.f.slice(length - RecordHeader::SIZE)?;
				let len = d.iter().position(|a| *a == 0).unwrap_or(d.len());
				Record::FullId(decode(&d[..len])?)
			}
			Err(_) => {
				tracing::debug!("skipping opcode {} at {start:#X}", header.opcode);
				Record::Skip(header.opcode)
			}
		};

		ensure!(
			self.f.pos() <= end,
			"record at {start:#X}: decoded past the declared length"
		);
		self.f.slice(end - self.f.pos())?;
		Ok(Some(record))
	}
}

impl Face {
	fn read(f: &mut Reader) -> Result<Face, ReadError> {
		Ok(Face {
			id: f.sized_string::<8, _>()?,
			ir_color_code: f.i32()?,
			relative_priority: f.i16()?,
			draw_type: f.i8()?,
			texture_white: f.i8()?,
			color_name_index: f.u16()?,
			alt_color_name_index: f.u16()?,
			reserved1: f.i8()?,
			template_billboard: f.i8()?,
			detail_texture_pattern_index: f.i16()?,
			texture_pattern_index: f.i16()?,
			material_index: f.i16()?,
		})
	}
}
