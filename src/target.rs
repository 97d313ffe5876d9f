//! The configuration model: one [`GenerationTarget`] per requesting declaration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Printable ASCII, `' '` (0x20) through `'~'` (0x7E), in code-point order.
///
/// Substituted whenever a declaration leaves `OptimizeFor` unset or empty.
pub const DEFAULT_OPTIMIZE_FOR: &str = " !\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

/// Declared accessibility of the requesting declaration.
///
/// Rendered verbatim on the private artifact's partial declaration, so it must
/// match what the host declared or the partial parts will not merge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    #[default]
    Public,
    Internal,
    Private,
    Protected,
    ProtectedInternal,
    PrivateProtected,
}

impl Visibility {
    /// Returns the C# modifier keywords for this accessibility.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use char_generators::Visibility;
    ///
    /// assert_eq!(Visibility::Internal.as_str(), "internal");
    /// assert_eq!(Visibility::ProtectedInternal.as_str(), "protected internal");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Internal => "internal",
            Visibility::Private => "private",
            Visibility::Protected => "protected",
            Visibility::ProtectedInternal => "protected internal",
            Visibility::PrivateProtected => "private protected",
        }
    }

    /// Returns `true` for the accessibilities C# allows on a type declared
    /// directly in a namespace.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use char_generators::Visibility;
    ///
    /// assert!(Visibility::Internal.is_namespace_level());
    /// assert!(!Visibility::Protected.is_namespace_level());
    /// ```
    #[must_use]
    pub const fn is_namespace_level(&self) -> bool {
        matches!(self, Visibility::Public | Visibility::Internal)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to render one artifact.
///
/// Built by the discovery pass (or directly by a host that has its own
/// configuration source) and consumed once by a renderer.
///
/// # Examples
///
/// ```rust
/// use char_generators::{GenerationTarget, Visibility};
///
/// let target = GenerationTarget::new("Bar", "NS")
///     .with_visibility(Visibility::Internal)
///     .with_optimize_for("abc");
///
/// assert_eq!(target.fully_qualified_name, "NS.Bar");
/// assert_eq!(target.optimize_for, vec!['a', 'b', 'c']);
/// assert!(!target.global);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerationTarget {
    pub name: String,
    pub fully_qualified_name: String,
    pub scope_path: String,
    pub visibility: Visibility,
    pub optimize_for: Vec<char>,
    pub global: bool,
}

impl GenerationTarget {
    /// Creates a public, private-helper target for `name` in `scope_path` using
    /// the default character set.
    pub fn new(name: &str, scope_path: &str) -> Self {
        let fully_qualified_name = if scope_path.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", scope_path, name)
        };
        GenerationTarget {
            name: name.to_string(),
            fully_qualified_name,
            scope_path: scope_path.to_string(),
            visibility: Visibility::default(),
            optimize_for: effective_optimize_for(None),
            global: false,
        }
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Sets the characters to special-case; an empty string selects the default set.
    #[must_use]
    pub fn with_optimize_for(mut self, optimize_for: &str) -> Self {
        self.optimize_for = effective_optimize_for(Some(optimize_for));
        self
    }

    #[must_use]
    pub fn with_global(mut self, global: bool) -> Self {
        self.global = global;
        self
    }
}

/// Resolves the characters to special-case, substituting [`DEFAULT_OPTIMIZE_FOR`]
/// when the configured value is absent or empty.
///
/// # Examples
///
/// ```rust
/// use char_generators::target::effective_optimize_for;
///
/// assert_eq!(effective_optimize_for(Some("xy")), vec!['x', 'y']);
/// assert_eq!(effective_optimize_for(None).len(), 95);
/// ```
pub fn effective_optimize_for(configured: Option<&str>) -> Vec<char> {
    match configured {
        Some(chars) if !chars.is_empty() => chars.chars().collect(),
        _ => DEFAULT_OPTIMIZE_FOR.chars().collect(),
    }
}
