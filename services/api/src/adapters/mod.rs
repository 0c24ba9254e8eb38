pub mod kv_file;
pub mod kv_memory;
pub mod summary_llm;

pub use kv_file::FileKeyValueStore;
pub use kv_memory::MemoryKeyValueStore;
pub use summary_llm::{OpenAiSummaryAdapter, UnconfiguredSummaryAdapter};
