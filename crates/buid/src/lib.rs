mod base58;
mod error;
mod generator;
mod id;
mod os_random;
mod rand;
#[cfg(feature = "serde")]
mod serde;
mod thread_random;
mod time;
mod unix_clock;

pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::os_random::*;
pub use crate::rand::*;
pub use crate::thread_random::*;
pub use crate::time::*;
pub use crate::unix_clock::*;
