mod buid;

pub use buid::*;
