//! Dictionary indexing and word-list loading.

pub mod index;
pub mod loader;

pub use index::DictionaryIndex;
pub use loader::{load_word_list_json, load_word_list_text};
