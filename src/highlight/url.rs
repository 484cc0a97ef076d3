//! Injected URL recognition.
//!
//! The extractor never hardcodes what a URL looks like. A host hands it a
//! [`UrlRule`]; [`RegexUrlRule`] covers the common case of a regular
//! expression whose capture group isolates the URL from any prefix the
//! expression had to consume.

use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;

/// Default pattern: optional non-word prefix, then the URL in group 1.
///
/// The prefix class excludes `@`, `/`, `.` and `-` so an address like
/// `@user.com` can only match from inside the name, where the extractor's
/// preceding-`@` check rejects it.
pub const DEFAULT_URL_PATTERN: &str = r"(?i)[^\w@/.-]?((?:https?://)?(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z]{2,}(?::\d{1,5})?(?:[/?#][^\s]*)?)";

static DEFAULT_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_URL_PATTERN).expect("default url pattern compiles"));

/// A URL candidate, in byte offsets into the searched text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlMatch {
    /// Span of the whole match, including any consumed prefix.
    pub matched: Range<usize>,
    /// Span of the URL itself; always inside `matched`.
    pub url: Range<usize>,
}

impl UrlMatch {
    /// A match with no consumed prefix.
    #[must_use]
    pub fn exact(range: Range<usize>) -> Self {
        Self {
            matched: range.clone(),
            url: range,
        }
    }
}

/// URL recognition rule supplied by the host application.
pub trait UrlRule: Send + Sync {
    /// Human-readable name of this rule, for diagnostics.
    fn name(&self) -> &'static str {
        "url"
    }

    /// All URL candidates in `text`, in any order.
    fn find_urls(&self, text: &str) -> Vec<UrlMatch>;
}

impl<F> UrlRule for F
where
    F: Fn(&str) -> Vec<UrlMatch> + Send + Sync,
{
    fn name(&self) -> &'static str {
        "closure"
    }

    fn find_urls(&self, text: &str) -> Vec<UrlMatch> {
        self(text)
    }
}

/// A [`UrlRule`] backed by a regular expression.
#[derive(Clone)]
pub struct RegexUrlRule {
    pattern: Regex,
    group: usize,
}

impl RegexUrlRule {
    /// Compile `pattern`. Capture group 1 is the URL when the pattern has
    /// one, otherwise the whole match is.
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)?;
        let group = usize::from(pattern.captures_len() > 1);
        Ok(Self { pattern, group })
    }

    /// Use capture group `group` as the URL span.
    #[must_use]
    pub fn with_group(mut self, group: usize) -> Self {
        self.group = group;
        self
    }

    /// The pattern source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for RegexUrlRule {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_URL_REGEX.clone(),
            group: 1,
        }
    }
}

impl fmt::Debug for RegexUrlRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegexUrlRule")
            .field("pattern", &self.pattern.as_str())
            .field("group", &self.group)
            .finish()
    }
}

impl UrlRule for RegexUrlRule {
    fn name(&self) -> &'static str {
        "regex"
    }

    fn find_urls(&self, text: &str) -> Vec<UrlMatch> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let url = caps.get(self.group).unwrap_or(whole);
                (!url.is_empty()).then(|| UrlMatch {
                    matched: whole.range(),
                    url: url.range(),
                })
            })
            .collect()
    }
}
