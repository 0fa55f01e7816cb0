//! An LS-8: 256 bytes of memory, eight 8-bit registers and a
//! fetch/decode/execute loop.

pub mod alu;
pub mod core;
pub mod error;
pub mod inst;
pub mod loader;
pub mod mem;

pub use crate::core::{Core, State};
pub use crate::error::{Error, Result};
