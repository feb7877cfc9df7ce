//! Date pattern caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use crate::ast::DatePattern;
use crate::error::ParseError;

/// Global cache for parsed date patterns.
static CACHE: Mutex<Option<LruCache<String, DatePattern>>> = Mutex::new(None);

const CACHE_SIZE: usize = 64;

/// Get or parse a date pattern, using the cache.
pub fn get_or_parse(pattern: &str) -> Result<DatePattern, ParseError> {
    let mut cache_guard = CACHE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let cache = cache_guard.get_or_insert_with(|| {
        LruCache::new(NonZeroUsize::new(CACHE_SIZE).unwrap_or(NonZeroUsize::MIN))
    });

    if let Some(parsed) = cache.get(pattern) {
        return Ok(parsed.clone());
    }

    #[cfg(feature = "log")]
    log::trace!("date pattern cache miss: {:?}", pattern);

    let parsed = DatePattern::parse(pattern)?;
    cache.put(pattern.to_string(), parsed.clone());
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cached_pattern_matches_fresh_parse() {
        let first = get_or_parse("yyyy/MM/dd").unwrap();
        let second = get_or_parse("yyyy/MM/dd").unwrap();
        assert_eq!(first, second);
        assert_eq!(first, DatePattern::parse("yyyy/MM/dd").unwrap());
    }

    #[test]
    fn test_errors_are_not_cached() {
        assert!(get_or_parse("yyy").is_err());
        assert!(get_or_parse("yyy").is_err());
    }
}
