mod datastore;
mod memory;


pub use datastore::{ImageStore, SharedStore};
pub use memory::MemoryStore;
