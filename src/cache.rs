use dashmap::DashMap;
use log::debug;
use std::sync::Arc;

use crate::error::MatchResult;
use crate::params::MatchParams;
use crate::template::UrlTemplate;

/// Concurrent cache of compiled templates keyed by template string.
///
/// Matching through the cache is observably identical to compiling fresh on
/// every call; the cache only skips recompilation. Safe to share across
/// threads: entries are immutable after insert and concurrent population of
/// the same template keeps a single winner.
pub struct TemplateCache {
    templates: DashMap<String, Arc<UrlTemplate>>,
}

impl TemplateCache {
    pub fn new() -> TemplateCache {
        TemplateCache {
            templates: DashMap::new(),
        }
    }

    /// Look up a compiled template, compiling and inserting on first use.
    ///
    /// Compile failures are returned to the caller and never cached, so a
    /// corrected constraint recompiles cleanly on the next call.
    pub fn get_or_compile(&self, template: &str) -> MatchResult<Arc<UrlTemplate>> {
        if let Some(hit) = self.templates.get(template) {
            return Ok(Arc::clone(hit.value()));
        }

        debug!("Compiling uncached template '{template}'");
        let compiled = Arc::new(UrlTemplate::compile(template)?);
        let entry = self
            .templates
            .entry(template.to_string())
            .or_insert(compiled);
        Ok(Arc::clone(entry.value()))
    }

    /// Cached equivalent of [`match_url`](crate::match_url).
    pub fn match_url(&self, template: &str, url: &str) -> MatchResult<Option<MatchParams>> {
        Ok(self.get_or_compile(template)?.match_url(url))
    }

    /// Number of cached templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// True when nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_reuses_the_compiled_template() {
        let cache = TemplateCache::new();

        let first = cache.get_or_compile("/users/<name>").unwrap();
        let second = cache.get_or_compile("/users/<name>").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cached_match_equals_fresh_match() {
        let cache = TemplateCache::new();

        for (template, url) in [
            ("/users/<name>", "/users/freewind"),
            ("/users/<name>", "/posts/1"),
            ("/users/*", "/users/a/b/c"),
            ("", ""),
        ] {
            let cached = cache.match_url(template, url).unwrap();
            let fresh = crate::template::match_url(template, url).unwrap();
            assert_eq!(cached, fresh, "diverged on '{template}' vs '{url}'");
        }
    }

    #[test]
    fn test_compile_failure_is_not_cached() {
        let cache = TemplateCache::new();

        assert!(cache.match_url("/users/<id:(>", "/users/1").is_err());
        assert!(cache.is_empty());
    }
}
