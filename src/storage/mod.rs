//! Storage backends for word records.

pub mod file;
pub mod memory;
pub mod traits;

pub use file::CsvBackend;
pub use memory::MemoryBackend;
pub use traits::WordStore;
