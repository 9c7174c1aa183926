//! Core `SiftBuilder` structure and selector collection

use std::fmt;
use std::marker::PhantomData;

use xmlsift_engine::{ExtractorConfig, PathExpression, PatternSet, SiftError};

use super::output::{AsMarkup, AsText, AsTree};

/// Fluent builder for one extraction
///
/// Type parameter `K` fixes the output kind:
/// - `AsText`: concatenated character content as `String`
/// - `AsMarkup`: standalone markup as `String`
/// - `AsTree`: owned [`xmlsift_engine::XmlNode`]
///
/// A rejected selector does not break the chain; the first error is kept and
/// returned by the terminal method, so a bad selector never turns into an
/// empty result.
pub struct SiftBuilder<K = AsText> {
    pub(crate) patterns: PatternSet,
    pub(crate) config: ExtractorConfig,
    pub(crate) error: Option<SiftError>,
    pub(crate) debug_enabled: bool,
    pub(crate) kind: PhantomData<K>,
}

impl SiftBuilder<AsText> {
    /// Builder yielding concatenated text
    #[must_use]
    pub fn text() -> Self {
        Self::empty()
    }
}

impl SiftBuilder<AsMarkup> {
    /// Builder yielding standalone markup
    #[must_use]
    pub fn markup() -> Self {
        Self::empty()
    }
}

impl SiftBuilder<AsTree> {
    /// Builder yielding owned trees
    #[must_use]
    pub fn tree() -> Self {
        Self::empty()
    }
}

impl<K> SiftBuilder<K> {
    fn empty() -> Self {
        Self {
            patterns: PatternSet::new(),
            config: ExtractorConfig::default(),
            error: None,
            debug_enabled: false,
            kind: PhantomData,
        }
    }

    /// Add a selector
    ///
    /// # Examples
    /// ```
    /// use xmlsift::Sift;
    ///
    /// let values = Sift::text()
    ///     .select("//order/id")
    ///     .select("/order/customer@ref")
    ///     .from_str(r#"<order><id>7</id><customer ref="c-1"/></order>"#)?;
    ///
    /// assert_eq!(values.get("//order/id").map(String::as_str), Some("7"));
    /// assert_eq!(values.get("/order/customer@ref").map(String::as_str), Some("c-1"));
    /// # Ok::<(), xmlsift::SiftError>(())
    /// ```
    #[must_use]
    pub fn select(mut self, selector: &str) -> Self {
        match PathExpression::new(selector) {
            Ok(pattern) => {
                if !self.patterns.insert(pattern) {
                    log::debug!("Duplicate selector '{selector}' ignored");
                }
            }
            Err(e) => {
                log::warn!("Rejected selector '{selector}': {e}");
                self.error.get_or_insert(e);
            }
        }
        self
    }

    /// Add several selectors
    #[must_use]
    pub fn select_all<I, S>(self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        selectors
            .into_iter()
            .fold(self, |builder, selector| builder.select(selector.as_ref()))
    }

    /// Add an already parsed expression
    #[must_use]
    pub fn pattern(mut self, pattern: PathExpression) -> Self {
        self.patterns.insert(pattern);
        self
    }

    /// Switch to text output, keeping selectors and settings
    #[must_use]
    pub fn as_text(self) -> SiftBuilder<AsText> {
        self.retype()
    }

    /// Switch to markup output, keeping selectors and settings
    #[must_use]
    pub fn as_markup(self) -> SiftBuilder<AsMarkup> {
        self.retype()
    }

    /// Switch to tree output, keeping selectors and settings
    #[must_use]
    pub fn as_tree(self) -> SiftBuilder<AsTree> {
        self.retype()
    }

    /// Log selectors and scan summaries for this extraction
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    fn retype<T>(self) -> SiftBuilder<T> {
        SiftBuilder {
            patterns: self.patterns,
            config: self.config,
            error: self.error,
            debug_enabled: self.debug_enabled,
            kind: PhantomData,
        }
    }
}

impl<K> fmt::Debug for SiftBuilder<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiftBuilder")
            .field("kind", &std::any::type_name::<K>())
            .field("patterns", &self.patterns)
            .field("config", &self.config)
            .field("error", &self.error)
            .field("debug_enabled", &self.debug_enabled)
            .finish()
    }
}
