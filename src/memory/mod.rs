// Wed Oct 14 2026 - Alex

pub mod error;
pub mod file;
pub mod flags;
pub mod traits;

pub use error::MemoryError;
pub use file::MemoryFile;
pub use flags::OpenFlags;
pub use traits::{MemoryReader, MemoryWriter};
