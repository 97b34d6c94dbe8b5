pub mod print;
pub use print::Printer;

pub mod trace;
pub use trace::{trace, Nesting};
