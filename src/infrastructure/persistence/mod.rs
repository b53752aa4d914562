pub mod local;
pub mod store;

pub use local::LocalRepositories;
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
