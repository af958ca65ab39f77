//! Registry of recognized policy directive names.

use std::collections::HashSet;

/// The fetch and worker directives accepted out of the box, per the
/// current CSP standard.
const DEFAULT_DIRECTIVES: &[&str] = &[
    "child-src",
    "connect-src",
    "default-src",
    "fenced-frame-src",
    "font-src",
    "frame-src",
    "img-src",
    "manifest-src",
    "media-src",
    "object-src",
    "prefetch-src",
    "script-src",
    "script-src-elem",
    "script-src-attr",
    "style-src",
    "style-src-elem",
    "style-src-attr",
    "worker-src",
];

/// The set of directive names the parser treats as valid.
///
/// Names are stored lowercase and the registry only grows; there is no
/// removal operation. Each instance is an independent value: extending
/// one has no effect on other instances or on already-completed parses.
/// The registry has no interior locking: callers that share an instance
/// across threads must wrap it (e.g. in an `RwLock`) themselves.
#[derive(Debug, Clone)]
pub struct DirectiveRegistry {
    directives: HashSet<String>,
}

impl DirectiveRegistry {
    /// Creates a registry seeded with the standard fetch and worker
    /// directives.
    pub fn new() -> Self {
        Self {
            directives: DEFAULT_DIRECTIVES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Case-sensitive membership test. `name` must already be lowercase.
    pub fn contains(&self, name: &str) -> bool {
        self.directives.contains(name)
    }

    /// Registers additional directive names. Input is converted to
    /// lowercase; names already present are ignored.
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.directives
            .extend(names.into_iter().map(|s| s.as_ref().to_ascii_lowercase()));
    }
}

impl Default for DirectiveRegistry {
    fn default() -> Self {
        Self::new()
    }
}
