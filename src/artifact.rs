//! Emitted artifacts and their registration.
//!
//! [`ArtifactSet`] plays the part of the host's output registration: artifacts
//! are keyed by hint name in insertion order. Registering the same hint name
//! twice with identical text is a no-op, which is how several global targets
//! in one scope collapse into a single `CharExtensions` class. Different text
//! under one hint name is rejected.

use crate::template::{render_attribute_artifact, render_target};
use crate::{Error, GenerationTarget, GeneratorOptions, Result};
use indexmap::map::Entry;
use indexmap::IndexMap;

/// One generated source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub hint_name: String,
    pub source: String,
}

impl Artifact {
    /// Renders the artifact requested by `target`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use char_generators::{Artifact, GenerationTarget, GeneratorOptions};
    ///
    /// let target = GenerationTarget::new("Foo", "").with_optimize_for("01");
    /// let artifact = Artifact::for_target(&target, &GeneratorOptions::default());
    /// assert_eq!(artifact.hint_name, "FooCharExtensions.g.cs");
    ///
    /// let global = Artifact::for_target(&target.with_global(true), &GeneratorOptions::default());
    /// assert_eq!(global.hint_name, "CharExtensions.g.cs");
    /// ```
    pub fn for_target(target: &GenerationTarget, options: &GeneratorOptions) -> Self {
        let declaration = if target.global {
            None
        } else {
            Some(target.name.as_str())
        };
        Artifact {
            hint_name: options.hint_name(declaration, &target.scope_path),
            source: render_target(target, options),
        }
    }

    /// The marker definition, named `<MarkerShortName>.g.<ext>`.
    pub fn attribute(options: &GeneratorOptions) -> Self {
        Artifact {
            hint_name: format!("{}.g.{}", options.marker_short_name(), options.extension),
            source: render_attribute_artifact(options),
        }
    }
}

/// Artifacts keyed by hint name, in registration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArtifactSet(IndexMap<String, String>);

impl ArtifactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `artifact`.
    ///
    /// Returns `Ok(true)` when the hint name was new and `Ok(false)` when an
    /// identical artifact was already present.
    ///
    /// # Errors
    ///
    /// [`Error::ConflictingArtifact`] when the hint name is taken by different
    /// text; the set is left unchanged.
    pub fn add(&mut self, artifact: Artifact) -> Result<bool> {
        match self.0.entry(artifact.hint_name) {
            Entry::Vacant(entry) => {
                entry.insert(artifact.source);
                Ok(true)
            }
            Entry::Occupied(entry) if *entry.get() == artifact.source => Ok(false),
            Entry::Occupied(entry) => Err(Error::conflicting_artifact(entry.key())),
        }
    }

    pub fn get(&self, hint_name: &str) -> Option<&str> {
        self.0.get(hint_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn hint_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_artifacts(self) -> Vec<Artifact> {
        self.0
            .into_iter()
            .map(|(hint_name, source)| Artifact { hint_name, source })
            .collect()
    }
}

impl IntoIterator for ArtifactSet {
    type Item = Artifact;
    type IntoIter = std::vec::IntoIter<Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_artifacts().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_global_artifacts_merge() {
        let options = GeneratorOptions::default();
        let a = GenerationTarget::new("A", "NS").with_optimize_for("01").with_global(true);
        let b = GenerationTarget::new("B", "NS").with_optimize_for("01").with_global(true);

        let mut set = ArtifactSet::new();
        assert_eq!(set.add(Artifact::for_target(&a, &options)), Ok(true));
        assert_eq!(set.add(Artifact::for_target(&b, &options)), Ok(false));
        assert_eq!(set.len(), 1);
        assert!(set.get("NS.CharExtensions.g.cs").is_some());
    }

    #[test]
    fn test_conflicting_global_artifacts_rejected() {
        let options = GeneratorOptions::default();
        let a = GenerationTarget::new("A", "").with_optimize_for("01").with_global(true);
        let b = GenerationTarget::new("B", "").with_optimize_for("ab").with_global(true);

        let mut set = ArtifactSet::new();
        set.add(Artifact::for_target(&a, &options)).unwrap();
        assert_eq!(
            set.add(Artifact::for_target(&b, &options)),
            Err(Error::conflicting_artifact("CharExtensions.g.cs"))
        );
        assert!(set.get("CharExtensions.g.cs").unwrap().contains("'0' => \"0\""));
    }

    #[test]
    fn test_private_artifacts_in_different_scopes_do_not_collide() {
        let options = GeneratorOptions::default();
        let a = GenerationTarget::new("Parser", "App.Json");
        let b = GenerationTarget::new("Parser", "App.Xml");

        let mut set = ArtifactSet::new();
        set.add(Artifact::for_target(&a, &options)).unwrap();
        set.add(Artifact::for_target(&b, &options)).unwrap();
        assert_eq!(
            set.hint_names().collect::<Vec<_>>(),
            vec!["App.Json.ParserCharExtensions.g.cs", "App.Xml.ParserCharExtensions.g.cs"]
        );
    }

    #[test]
    fn test_attribute_artifact_name() {
        let artifact = Artifact::attribute(&GeneratorOptions::default());
        assert_eq!(artifact.hint_name, "CharExtensionsAttribute.g.cs");
    }
}
