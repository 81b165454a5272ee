use std::collections::HashSet;

/// Error type resolvers may fail with.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Resolves hashtags to the pages they should link to.
///
/// Called at most once per hashtag per render pass. An empty destination
/// leaves the tag unlinked; an error aborts rendering of the document.
pub trait Resolver: Send + Sync {
    fn resolve(&self, tag: &str) -> Result<String, BoxError>;
}

impl<F> Resolver for F
where
    F: Fn(&str) -> Result<String, BoxError> + Send + Sync,
{
    fn resolve(&self, tag: &str) -> Result<String, BoxError> {
        self(tag)
    }
}

/// Links every tag to `prefix` + tag, except the tags listed as unlinked.
#[derive(Debug, Clone, Default)]
pub struct PrefixResolver {
    prefix: String,
    unlinked: HashSet<String>,
}

impl PrefixResolver {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            unlinked: HashSet::new(),
        }
    }

    /// Leaves these tags as plain spans.
    pub fn with_unlinked<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unlinked.extend(tags.into_iter().map(Into::into));
        self
    }
}

impl Resolver for PrefixResolver {
    fn resolve(&self, tag: &str) -> Result<String, BoxError> {
        if self.unlinked.contains(tag) {
            return Ok(String::new());
        }
        Ok(format!("{}{tag}", self.prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_resolver_links_tags() {
        let r = PrefixResolver::new("/tag/");
        assert_eq!(r.resolve("foo").unwrap(), "/tag/foo");
    }

    #[test]
    fn prefix_resolver_skips_unlinked() {
        let r = PrefixResolver::new("/tag/").with_unlinked(["unknown"]);
        assert_eq!(r.resolve("unknown").unwrap(), "");
        assert_eq!(r.resolve("known").unwrap(), "/tag/known");
    }

    #[test]
    fn closures_are_resolvers() {
        let r = |tag: &str| -> Result<String, BoxError> {
            if tag == "bad" {
                Err("no page".into())
            } else {
                Ok(format!("#{tag}"))
            }
        };
        assert_eq!(r.resolve("ok").unwrap(), "#ok");
        assert_eq!(r.resolve("bad").unwrap_err().to_string(), "no page");
    }
}
