pub mod memory;
pub mod migrations;
pub mod repository;
pub mod sqlite;

pub use memory::MemoryRepository;
pub use repository::{MosqueRepository, RecordKind, StoreError};
pub use sqlite::SqliteRepository;
