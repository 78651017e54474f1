mod memory;

pub use memory::MemorySessionStore;
