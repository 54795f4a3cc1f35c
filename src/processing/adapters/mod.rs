//! Output writer implementations.

mod filesystem;

pub use filesystem::CapStdTaskOutputWriter;
