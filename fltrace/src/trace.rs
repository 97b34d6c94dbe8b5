use openflight::record::{ReadError, Record, RecordReader};

use crate::print::Printer;

/// Nesting depth driven by push/pop records. It is a bare counter, not a
/// tree, and has no floor: unbalanced pops drive it negative and the
/// display side clamps.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nesting {
	depth: i32,
}

impl Nesting {
	pub fn new() -> Self {
		Nesting { depth: 0 }
	}

	pub fn push(&mut self) {
		self.depth += 1;
	}

	pub fn pop(&mut self) {
		self.depth -= 1;
	}

	pub fn depth(&self) -> i32 {
		self.depth
	}
}

/// Decodes every record in `data`, emitting one line per printable record at
/// the nesting depth current when it was read. Lines emitted before a
/// framing error stay in `out`.
pub fn trace(data: &[u8], out: &mut Printer) -> Result<(), ReadError> {
	let mut f = RecordReader::new(data);
	let mut nest = Nesting::new();
	while let Some(record) = f.next_record()? {
		match record {
			Record::Push => nest.push(),
			Record::Pop => nest.pop(),
			Record::Header(id) => out.line(nest.depth(), "Header", &id),
			Record::Group(id) => out.line(nest.depth(), "Group", &id),
			Record::Object(id) => out.line(nest.depth(), "Object", &id),
			Record::Face(face) => {
				// The unbalanced parenthesis is part of the established
				// output format.
				let info = format!(
					"{} (Material Index: {} (Color Index: {})",
					face.id, face.material_index, face.color_name_index
				);
				out.line(nest.depth(), "Face", &info);
			}
			Record::FullId(name) => out.line(nest.depth(), "Full ID", &name),
			Record::Skip(_) => {}
		}
	}
	Ok(())
}

#[cfg(test)]
mod test {
	use super::Nesting;

	#[test]
	fn no_floor() {
		let mut n = Nesting::new();
		n.pop();
		assert_eq!(n.depth(), -1);
		n.push();
		n.push();
		assert_eq!(n.depth(), 1);
	}
}
