// Profile assembly: raw form strings -> ProfileRecord.
// Pure and total; no I/O happens here.

pub mod assembler;
pub mod defaults;
pub mod handlers;

pub use assembler::assemble;
