#![feature(error_generic_member_access)]

pub mod record;

mod util;

pub use util::DecodeError;
