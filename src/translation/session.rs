use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::language::BASE_LANGUAGE;
use crate::backend::TranslateBackend;
use crate::cache::{CacheKey, DictionaryCache, fingerprint};
use crate::dictionary::{TextDictionary, flatten};
use crate::error::BackendError;

/// Result of [`TranslationSession::set_language`].
#[derive(Debug)]
pub enum LanguageSwitch {
    /// Switched to the base language; the source dictionary is active.
    Base,
    /// Switched using a previously translated dictionary.
    Cached,
    /// Switched after one batch request of `leaves` strings.
    Fetched { leaves: usize },
    /// The translation failed; the previous language and dictionary remain active.
    Retained { error: BackendError },
}

impl LanguageSwitch {
    pub const fn is_switched(&self) -> bool {
        !matches!(self, Self::Retained { .. })
    }
}

/// Owns the UI language and the dictionary shown for it.
///
/// The active dictionary is always a complete snapshot: it is replaced as a
/// whole when a switch succeeds and left untouched when one fails.
pub struct TranslationSession {
    backend: Arc<dyn TranslateBackend>,
    base_language: String,
    active_language: String,
    source: Arc<TextDictionary>,
    source_fingerprint: String,
    active: Arc<TextDictionary>,
    translated: HashMap<String, Arc<TextDictionary>>,
    store: Option<DictionaryCache>,
}

impl TranslationSession {
    /// Creates a session showing `source` in the base language.
    pub fn new(backend: Arc<dyn TranslateBackend>, source: TextDictionary) -> Self {
        let source = Arc::new(source);
        Self {
            backend,
            base_language: BASE_LANGUAGE.to_string(),
            active_language: BASE_LANGUAGE.to_string(),
            source_fingerprint: fingerprint(&source),
            active: Arc::clone(&source),
            source,
            translated: HashMap::new(),
            store: None,
        }
    }

    /// Persists translated dictionaries in `store` across runs.
    #[must_use]
    pub fn with_store(mut self, store: DictionaryCache) -> Self {
        self.store = Some(store);
        self
    }

    pub fn base_language(&self) -> &str {
        &self.base_language
    }

    pub fn active_language(&self) -> &str {
        &self.active_language
    }

    /// Snapshot of the dictionary currently shown.
    pub fn active_dictionary(&self) -> Arc<TextDictionary> {
        Arc::clone(&self.active)
    }

    pub fn source_dictionary(&self) -> Arc<TextDictionary> {
        Arc::clone(&self.source)
    }

    /// Replaces the source text, drops every translation made from the old
    /// one, and returns to the base language.
    pub fn set_source_dictionary(&mut self, source: TextDictionary) {
        self.source = Arc::new(source);
        self.source_fingerprint = fingerprint(&self.source);
        self.translated.clear();
        self.reset_to_base();
    }

    /// Shows the source dictionary. Never touches the network.
    pub fn reset_to_base(&mut self) {
        self.active_language.clone_from(&self.base_language);
        self.active = Arc::clone(&self.source);
    }

    /// Switches the UI language.
    ///
    /// The base language completes without awaiting anything. Other
    /// languages are served from memory, then from the persistent store,
    /// then with a single batch translate request.
    pub async fn set_language(&mut self, code: &str) -> LanguageSwitch {
        if code == self.base_language {
            self.reset_to_base();
            return LanguageSwitch::Base;
        }

        if let Some(dictionary) = self.translated.get(code).cloned() {
            self.activate(code, dictionary);
            return LanguageSwitch::Cached;
        }

        if let Some(dictionary) = self.load_stored(code) {
            let dictionary = Arc::new(dictionary);
            self.translated.insert(code.to_string(), Arc::clone(&dictionary));
            self.activate(code, dictionary);
            return LanguageSwitch::Cached;
        }

        match self.fetch(code).await {
            Ok(dictionary) => {
                let leaves = dictionary.leaf_count();
                self.save_stored(code, &dictionary);

                let dictionary = Arc::new(dictionary);
                self.translated.insert(code.to_string(), Arc::clone(&dictionary));
                self.activate(code, dictionary);

                info!(target_lang = code, leaves, "UI text translated");
                LanguageSwitch::Fetched { leaves }
            }
            Err(error) => {
                warn!(
                    target_lang = code,
                    active = %self.active_language,
                    %error,
                    "keeping previous UI text"
                );
                LanguageSwitch::Retained { error }
            }
        }
    }

    fn activate(&mut self, code: &str, dictionary: Arc<TextDictionary>) {
        self.active_language = code.to_string();
        self.active = dictionary;
    }

    async fn fetch(&self, code: &str) -> Result<TextDictionary, BackendError> {
        let request = flatten(&self.source);
        if request.is_empty() {
            return request.reassemble(Vec::new());
        }

        debug!(
            target_lang = code,
            leaves = request.len(),
            "requesting batch translation"
        );
        let translated = self.backend.translate(request.leaves(), code).await?;
        request.reassemble(translated)
    }

    fn cache_key(&self, code: &str) -> CacheKey {
        CacheKey {
            source_fingerprint: self.source_fingerprint.clone(),
            target_language: code.to_string(),
            endpoint: self.backend.endpoint().to_string(),
        }
    }

    fn load_stored(&self, code: &str) -> Option<TextDictionary> {
        let store = self.store.as_ref()?;
        match store.get(&self.cache_key(code)) {
            Ok(found) => found
                .filter(|dictionary| dictionary.same_shape(&self.source))
                .map(|mut dictionary| {
                    dictionary.conform_to(&self.source);
                    dictionary
                }),
            Err(error) => {
                warn!(%error, "dictionary cache unavailable");
                None
            }
        }
    }

    fn save_stored(&self, code: &str, dictionary: &TextDictionary) {
        if let Some(store) = &self.store
            && let Err(error) = store.put(&self.cache_key(code), dictionary)
        {
            warn!(%error, "failed to store translated dictionary");
        }
    }
}
