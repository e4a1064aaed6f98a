use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension};
use sha2::{Digest, Sha256};
use std::path::PathBuf;
use tracing::warn;

use crate::dictionary::TextDictionary;
use crate::paths;

/// Identifies one translated dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKey {
    /// Fingerprint of the source dictionary, see [`fingerprint`].
    pub source_fingerprint: String,
    pub target_language: String,
    pub endpoint: String,
}

impl CacheKey {
    /// Compute the stored key for this entry.
    pub fn digest(&self) -> String {
        let cache_input = serde_json::json!({
            "source": self.source_fingerprint,
            "target_language": self.target_language,
            "endpoint": self.endpoint,
        });

        let mut hasher = Sha256::new();
        hasher.update(cache_input.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// SHA-256 over the dictionary's JSON form, so key order and shape both count.
pub fn fingerprint(dictionary: &TextDictionary) -> String {
    let mut hasher = Sha256::new();
    // Serializing a TextDictionary cannot fail: keys are strings and values are plain data.
    let json = serde_json::to_vec(dictionary).unwrap_or_default();
    hasher.update(&json);
    hex::encode(hasher.finalize())
}

/// Persistent store of translated dictionaries.
#[derive(Debug, Clone)]
pub struct DictionaryCache {
    db_path: PathBuf,
}

impl DictionaryCache {
    /// Opens the cache under the user cache directory.
    pub fn new() -> Result<Self> {
        let cache_dir = paths::cache_dir()?;

        std::fs::create_dir_all(&cache_dir).with_context(|| {
            format!("Failed to create cache directory: {}", cache_dir.display())
        })?;

        Self::open(cache_dir.join("dictionaries.db"))
    }

    /// Opens (creating if needed) a cache database at `db_path`.
    pub fn open(db_path: PathBuf) -> Result<Self> {
        let cache = Self { db_path };
        cache.init_db()?;
        Ok(cache)
    }

    fn init_db(&self) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS dictionaries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                cache_key TEXT UNIQUE NOT NULL,
                source_fingerprint TEXT NOT NULL,
                target_language TEXT NOT NULL,
                endpoint TEXT NOT NULL,
                dictionary TEXT NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                accessed_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )
        .context("Failed to create dictionaries table")?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_dictionaries_key ON dictionaries(cache_key)",
            [],
        )
        .context("Failed to create index")?;

        Ok(())
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.db_path)
            .with_context(|| format!("Failed to open cache database: {}", self.db_path.display()))
    }

    /// Returns the stored dictionary, or `None` on a miss.
    ///
    /// Rows that no longer parse are treated as misses.
    pub fn get(&self, key: &CacheKey) -> Result<Option<TextDictionary>> {
        let cache_key = key.digest();
        let conn = self.connect()?;

        let stored: Option<String> = conn
            .query_row(
                "SELECT dictionary FROM dictionaries WHERE cache_key = ?1",
                [&cache_key],
                |row| row.get(0),
            )
            .optional()
            .context("Failed to query dictionary cache")?;

        let Some(stored) = stored else {
            return Ok(None);
        };

        match serde_json::from_str(&stored) {
            Ok(dictionary) => {
                conn.execute(
                    "UPDATE dictionaries SET accessed_at = CURRENT_TIMESTAMP WHERE cache_key = ?1",
                    [&cache_key],
                )?;
                Ok(Some(dictionary))
            }
            Err(error) => {
                warn!(
                    %error,
                    target_lang = %key.target_language,
                    "ignoring unreadable cache entry"
                );
                Ok(None)
            }
        }
    }

    pub fn put(&self, key: &CacheKey, dictionary: &TextDictionary) -> Result<()> {
        let cache_key = key.digest();
        let json = serde_json::to_string(dictionary).context("Failed to serialize dictionary")?;
        let conn = self.connect()?;

        conn.execute(
            "INSERT OR REPLACE INTO dictionaries
             (cache_key, source_fingerprint, target_language, endpoint, dictionary)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            [
                &cache_key,
                &key.source_fingerprint,
                &key.target_language,
                &key.endpoint,
                &json,
            ],
        )
        .context("Failed to insert dictionary into cache")?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::dictionary::TextValue;
    use tempfile::TempDir;

    fn create_test_cache(temp_dir: &TempDir) -> DictionaryCache {
        DictionaryCache::open(temp_dir.path().join("dictionaries.db")).unwrap()
    }

    fn source() -> TextDictionary {
        TextDictionary::from_iter([
            ("sidebar_home", TextValue::from("Home")),
            ("grammar_sections", TextValue::from(["Pronouns", "Verbs"])),
        ])
    }

    fn key_for(target_language: &str) -> CacheKey {
        CacheKey {
            source_fingerprint: fingerprint(&source()),
            target_language: target_language.to_string(),
            endpoint: "http://localhost:5000".to_string(),
        }
    }

    #[test]
    fn test_cache_miss() {
        let temp_dir = TempDir::new().unwrap();
        let cache = create_test_cache(&temp_dir);

        assert!(cache.get(&key_for("ta")).unwrap().is_none());
    }

    #[test]
    fn test_cache_hit_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let cache = create_test_cache(&temp_dir);
        let translated = TextDictionary::from_iter([
            ("sidebar_home", TextValue::from("முகப்பு")),
            ("grammar_sections", TextValue::from(["பிரதிபெயர்கள்", "வினைச்சொற்கள்"])),
        ]);

        cache.put(&key_for("ta"), &translated).unwrap();

        assert_eq!(cache.get(&key_for("ta")).unwrap(), Some(translated));
        assert!(cache.get(&key_for("fr")).unwrap().is_none());
    }

    #[test]
    fn test_key_includes_endpoint() {
        let local = key_for("ta");
        let mut production = key_for("ta");
        production.endpoint = "https://tutor.example.com".to_string();

        assert_ne!(local.digest(), production.digest());
    }

    #[test]
    fn test_fingerprint_changes_with_source() {
        let mut changed = source();
        changed.insert("sidebar_home", "Start");

        assert_eq!(fingerprint(&source()), fingerprint(&source()));
        assert_ne!(fingerprint(&source()), fingerprint(&changed));
    }

    #[test]
    fn test_unreadable_row_is_a_miss() {
        let temp_dir = TempDir::new().unwrap();
        let cache = create_test_cache(&temp_dir);
        let key = key_for("ta");

        cache
            .connect()
            .unwrap()
            .execute(
                "INSERT INTO dictionaries
                 (cache_key, source_fingerprint, target_language, endpoint, dictionary)
                 VALUES (?1, 'x', 'ta', 'e', 'not json')",
                [&key.digest()],
            )
            .unwrap();

        assert!(cache.get(&key).unwrap().is_none());
    }
}
