//! Session storage backends.

pub mod file;
pub mod memory;
pub mod traits;

pub use file::FileSession;
pub use memory::MemorySession;
pub use traits::SessionStore;
