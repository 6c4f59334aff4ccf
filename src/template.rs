use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

use crate::error::{MatchError, MatchResult};
use crate::params::MatchParams;

/// Placeholder token: `<name>` or `<name:constraint>`. Names and constraints
/// may not contain `<`, `>` or `/`; anything else between the delimiters is
/// taken as-is. Text that does not form a token stays literal.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<([^<>/]+?)>").expect("placeholder token pattern"));

/// Pre-compiled URL template for efficient matching
#[derive(Debug, Clone)]
pub struct UrlTemplate {
    /// The original template string.
    template: String,
    /// Anchored regex translated from the template.
    regex: Regex,
    /// Placeholder names in declaration order, one per capture group.
    names: SmallVec<[String; 4]>,
}

impl UrlTemplate {
    /// Compile a template for efficient reuse.
    ///
    /// Template syntax:
    /// - `/users` - literal path, matched verbatim
    /// - `/users/<name>` - named placeholder, captures one or more
    ///   characters up to the next `/`
    /// - `/users/<id:\d+>` - placeholder constrained by an inline regex
    ///   fragment
    /// - `/users/*` - trailing wildcard, accepts (and does not capture)
    ///   anything after the final `/`
    ///
    /// Matching is whole-string: a template never matches a prefix or
    /// substring of the URL.
    ///
    /// # Example
    ///
    /// ```
    /// use urlmatch::UrlTemplate;
    ///
    /// let template = UrlTemplate::compile("/users/<name>/posts/<id:\\d+>").unwrap();
    /// let params = template.match_url("/users/freewind/posts/42").unwrap();
    /// assert_eq!(params.get("name"), Some("freewind"));
    /// assert_eq!(params.get("id"), Some("42"));
    /// ```
    pub fn compile(template: &str) -> MatchResult<UrlTemplate> {
        let mut names: SmallVec<[String; 4]> = SmallVec::new();
        let mut pattern = String::with_capacity(template.len() + 8);
        pattern.push('^');

        let mut tail_start = 0;
        for token in PLACEHOLDER.find_iter(template) {
            pattern.push_str(&regex::escape(&template[tail_start..token.start()]));

            // strip the <> delimiters; the name ends at the first colon
            let inner = &template[token.start() + 1..token.end() - 1];
            match inner.split_once(':') {
                Some((name, constraint)) => {
                    names.push(name.to_string());
                    pattern.push('(');
                    pattern.push_str(constraint);
                    pattern.push(')');
                }
                None => {
                    names.push(inner.to_string());
                    pattern.push_str("([^/]+)");
                }
            }
            tail_start = token.end();
        }

        let tail = &template[tail_start..];
        match tail.strip_suffix("/*") {
            Some(prefix) => {
                // wildcard tail: the slash stays literal, the rest of the
                // URL is accepted without capturing
                pattern.push_str(&regex::escape(prefix));
                pattern.push_str("/.*");
            }
            None => pattern.push_str(&regex::escape(tail)),
        }
        pattern.push('$');

        let regex =
            Regex::new(&pattern).map_err(|e| MatchError::pattern(template, e))?;
        debug!("Compiled template '{template}' into pattern '{pattern}'");

        Ok(UrlTemplate {
            template: template.to_string(),
            regex,
            names,
        })
    }

    /// Match a URL against this template and extract placeholder values.
    ///
    /// Returns `None` if the URL does not match the whole template. A match
    /// with no placeholders returns an empty [`MatchParams`].
    pub fn match_url(&self, url: &str) -> Option<MatchParams> {
        let caps = self.regex.captures(url)?;

        let mut params = MatchParams::with_capacity(self.names.len());
        for (i, name) in self.names.iter().enumerate() {
            if let Some(value) = caps.get(i + 1) {
                params.insert(name.clone(), value.as_str().to_string());
            }
        }

        Some(params)
    }

    /// The original template string
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The translated regex pattern
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Placeholder names in declaration order
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Match a URL against a template in one call.
///
/// Compiles `template`, attempts a whole-string match of `url` and extracts
/// placeholder values in declaration order. No state is retained between
/// calls; use [`TemplateCache`](crate::TemplateCache) to reuse compiled
/// templates across many URLs.
///
/// Returns `Ok(None)` when the URL does not match, and `Err` only when a
/// `<name:constraint>` fragment is rejected by the regex engine.
pub fn match_url(template: &str, url: &str) -> MatchResult<Option<MatchParams>> {
    Ok(UrlTemplate::compile(template)?.match_url(url))
}
