pub mod file;
pub mod local;
pub mod memory;

pub use file::FileStorage;
pub use local::LocalStorage;
pub use memory::MemoryStorage;
