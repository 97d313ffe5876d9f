//! Configuration options for artifact generation.
//!
//! [`GeneratorOptions`] controls which marker the discovery pass looks for and
//! how emitted artifacts are named and laid out.
//!
//! ## Examples
//!
//! ```rust
//! use char_generators::GeneratorOptions;
//!
//! let options = GeneratorOptions::new()
//!     .with_indent(2)
//!     .with_embed_attribute(false);
//!
//! assert_eq!(options.indent, 2);
//! assert_eq!(options.artifact_name, "CharExtensions");
//! ```

use serde::{Deserialize, Serialize};

/// Fully qualified name of the marker attribute.
pub const DEFAULT_MARKER: &str = "CharGenerators.CharExtensionsAttribute";

/// Name of the global construct and suffix of every artifact hint name.
pub const DEFAULT_ARTIFACT_NAME: &str = "CharExtensions";

/// Configuration options for a generation pass.
///
/// Options can be built in code or loaded from a host configuration file; every
/// field is optional when deserializing.
///
/// # Examples
///
/// ```rust
/// use char_generators::GeneratorOptions;
///
/// let options: GeneratorOptions = serde_json::from_str(r#"{ "indent": 2 }"#).unwrap();
/// assert_eq!(options.indent, 2);
/// assert_eq!(options.extension, "cs");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    pub marker: String,
    pub artifact_name: String,
    pub extension: String,
    pub indent: usize,
    pub embed_attribute: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptions {
            marker: DEFAULT_MARKER.to_string(),
            artifact_name: DEFAULT_ARTIFACT_NAME.to_string(),
            extension: "cs".to_string(),
            indent: 4,
            embed_attribute: true,
        }
    }
}

impl GeneratorOptions {
    /// Creates default options (`CharGenerators.CharExtensionsAttribute` marker,
    /// `.cs` artifacts, 4-space indent, marker definition embedded).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use char_generators::GeneratorOptions;
    ///
    /// let options = GeneratorOptions::new();
    /// assert_eq!(options.indent, 4);
    /// assert!(options.embed_attribute);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fully qualified marker name the discovery pass matches.
    #[must_use]
    pub fn with_marker(mut self, marker: &str) -> Self {
        self.marker = marker.to_string();
        self
    }

    /// Sets the global construct name, also used to build artifact hint names.
    #[must_use]
    pub fn with_artifact_name(mut self, name: &str) -> Self {
        self.artifact_name = name.to_string();
        self
    }

    /// Sets the file extension of emitted artifacts (without the leading dot).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use char_generators::GeneratorOptions;
    ///
    /// let options = GeneratorOptions::new().with_extension("g");
    /// assert_eq!(options.hint_name(None, ""), "CharExtensions.g.g");
    /// ```
    #[must_use]
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Sets the indentation size (number of spaces per nesting level).
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Controls whether [`generate`](crate::generate) also emits the marker definition.
    #[must_use]
    pub fn with_embed_attribute(mut self, embed: bool) -> Self {
        self.embed_attribute = embed;
        self
    }

    /// Short name of the marker (`CharExtensionsAttribute`).
    pub fn marker_short_name(&self) -> &str {
        self.marker.rsplit('.').next().unwrap_or(&self.marker)
    }

    /// Namespace the marker lives in, empty for a top-level marker.
    pub fn marker_namespace(&self) -> &str {
        match self.marker.rfind('.') {
            Some(idx) => &self.marker[..idx],
            None => "",
        }
    }

    /// Builds an artifact hint name.
    ///
    /// `declaration` is the requesting declaration for private artifacts and
    /// `None` for the scope-wide global artifact. A non-empty scope prefixes the
    /// name so that equally named declarations in different namespaces never
    /// collide.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use char_generators::GeneratorOptions;
    ///
    /// let options = GeneratorOptions::new();
    /// assert_eq!(options.hint_name(None, ""), "CharExtensions.g.cs");
    /// assert_eq!(options.hint_name(None, "App.Text"), "App.Text.CharExtensions.g.cs");
    /// assert_eq!(options.hint_name(Some("Bar"), "NS"), "NS.BarCharExtensions.g.cs");
    /// ```
    pub fn hint_name(&self, declaration: Option<&str>, scope_path: &str) -> String {
        let mut name = String::new();
        if !scope_path.is_empty() {
            name.push_str(scope_path);
            name.push('.');
        }
        if let Some(declaration) = declaration {
            name.push_str(declaration);
        }
        name.push_str(&self.artifact_name);
        name.push_str(".g.");
        name.push_str(&self.extension);
        name
    }

    pub(crate) fn indentation(&self, level: usize) -> String {
        " ".repeat(level * self.indent)
    }
}
