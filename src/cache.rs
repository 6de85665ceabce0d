//! Translation caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};

use crate::options::{PatternKind, TranslateOptions};
use crate::translator;

/// Global cache of rendered translations.
static CACHE: Mutex<Option<LruCache<CacheKey, String>>> = Mutex::new(None);

const CACHE_SIZE: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    kind: PatternKind,
    options: TranslateOptions,
    pattern: String,
}

/// Get or translate a pattern, returning the rendered TeX text.
pub fn get_or_translate(kind: PatternKind, pattern: &str, options: &TranslateOptions) -> String {
    let mut cache_guard = CACHE.lock().unwrap_or_else(PoisonError::into_inner);

    let cache = cache_guard.get_or_insert_with(|| {
        LruCache::new(NonZeroUsize::new(CACHE_SIZE).unwrap_or(NonZeroUsize::MIN))
    });

    let key = CacheKey {
        kind,
        options: *options,
        pattern: pattern.to_string(),
    };
    if let Some(rendered) = cache.get(&key) {
        return rendered.clone();
    }

    tracing::debug!(?kind, pattern, "translation cache miss");
    let rendered = translator::translate(kind, Some(pattern), options).to_string();
    cache.put(key, rendered.clone());
    rendered
}
