mod sqlite;

pub use sqlite::{CacheKey, DictionaryCache, fingerprint};
