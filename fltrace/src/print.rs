/// Line-oriented sink for the emitted trace, indenting two spaces per
/// nesting level.
#[derive(Debug, Clone, Default)]
pub struct Printer {
	out: String,
}

impl Printer {
	pub fn new() -> Self {
		Printer { out: String::new() }
	}

	/// Negative depths come from unbalanced pop records and render with no
	/// indent.
	pub fn line(&mut self, depth: i32, kind: &str, text: &str) {
		for _ in 0..depth.max(0) {
			self.out.push_str("  ");
		}
		self.out.push_str(kind);
		self.out.push_str(": ");
		self.out.push_str(text);
		self.out.push('\n');
	}

	pub fn finish(self) -> String {
		self.out
	}
}
