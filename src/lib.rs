//! # char_generators
//!
//! A code generator that emits allocation-free `char` to `string` conversions for
//! C# declarations marked with `[CharExtensions]`.
//!
//! ## What does it generate?
//!
//! `char.ToString()` allocates a new string on every call. For a known set of
//! hot characters the generator emits a `switch` expression returning interned
//! string literals instead, falling back to `value.ToString()` for anything else:
//!
//! ```text
//! public static partial class CharExtensions
//! {
//!     public static string ToStringFast(this char value)
//!         => value switch
//!         {
//!             '0' => "0",
//!             '1' => "1",
//!             _ => value.ToString()
//!         };
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Two shapes**: a shared `CharExtensions.ToStringFast` extension method
//!   (`Global = true`) or a `private CharToStringFast` helper on the declaration itself
//! - **Correct escaping** of `'`, `"`, `\` and control characters
//! - **Deterministic**: equal inputs always render byte-identical text
//! - **Host-agnostic**: discovery talks to a [`DeclarationSource`] trait, so any
//!   compiler integration can drive it
//!
//! ## Quick Start
//!
//! ```rust
//! use char_generators::{generate, CancellationToken, DeclarationEntry, DeclarationSet, DEFAULT_MARKER};
//!
//! let declarations = DeclarationSet::new().with_declaration(
//!     DeclarationEntry::new("Tokenizer")
//!         .in_scope("App.Text")
//!         .with_attribute(DEFAULT_MARKER, [("OptimizeFor", "0123456789".into())]),
//! );
//!
//! let generation = generate(&declarations, &CancellationToken::new()).unwrap();
//! assert!(generation.diagnostics.is_empty());
//!
//! let artifact = generation.artifacts.get("App.Text.TokenizerCharExtensions.g.cs").unwrap();
//! assert!(artifact.contains("public partial class Tokenizer"));
//! assert!(artifact.contains("'7' => \"7\","));
//! ```
//!
//! ## Rendering without discovery
//!
//! Hosts that already know their configuration can render directly:
//!
//! ```rust
//! use char_generators::{render_private_artifact, GenerationTarget};
//!
//! let target = GenerationTarget::new("Bar", "NS");
//! let source = render_private_artifact(&target);
//! assert!(source.contains("' ' => \" \","));
//! assert!(source.contains("'~' => \"~\","));
//! ```
//!
//! ## Logging
//!
//! The discovery and generation passes report through [`tracing`]; install any
//! subscriber to see them.

pub mod artifact;
pub mod discover;
pub mod error;
pub mod options;
pub mod render;
pub mod source;
pub mod target;
pub mod template;

pub use artifact::{Artifact, ArtifactSet};
pub use discover::{discover, discover_with_options, CancellationToken, Diagnostic, Discovery};
pub use error::{Error, Result};
pub use options::{GeneratorOptions, DEFAULT_ARTIFACT_NAME, DEFAULT_MARKER};
pub use render::render_dispatch_body;
pub use source::{
    ArgumentValue, AttributeEntry, DeclarationEntry, DeclarationSet, DeclarationSource,
    ResolvedDeclaration,
};
pub use target::{GenerationTarget, Visibility, DEFAULT_OPTIMIZE_FOR};
pub use template::{
    render_attribute_artifact, render_global_artifact, render_global_artifact_with_options,
    render_private_artifact, render_private_artifact_with_options,
};

use tracing::{info, warn};

/// Result of a full generation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Generation {
    pub artifacts: ArtifactSet,
    pub diagnostics: Vec<Diagnostic>,
}

/// Discovers every marked declaration and renders its artifact, using default options.
///
/// # Errors
///
/// Returns [`Error::Cancelled`] if `cancel` fires during discovery. Per-declaration
/// problems are reported in [`Generation::diagnostics`] instead.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn generate<S>(source: &S, cancel: &CancellationToken) -> Result<Generation>
where
    S: DeclarationSource + ?Sized,
{
    generate_with_options(source, &GeneratorOptions::default(), cancel)
}

/// Discovers every marked declaration and renders its artifact.
///
/// The marker definition is emitted first when `options.embed_attribute` is set.
/// Nothing is rendered until discovery has completed, so a cancelled pass never
/// produces partial output.
///
/// # Examples
///
/// ```rust
/// use char_generators::{
///     generate_with_options, CancellationToken, DeclarationEntry, DeclarationSet, GeneratorOptions,
///     DEFAULT_MARKER,
/// };
///
/// let declarations = DeclarationSet::new().with_declaration(
///     DeclarationEntry::new("Foo").with_attribute(DEFAULT_MARKER, [("Global", true.into())]),
/// );
/// let options = GeneratorOptions::new().with_embed_attribute(true);
///
/// let generation = generate_with_options(&declarations, &options, &CancellationToken::new()).unwrap();
/// let names: Vec<_> = generation.artifacts.hint_names().collect();
/// assert_eq!(names, vec!["CharExtensionsAttribute.g.cs", "CharExtensions.g.cs"]);
/// ```
///
/// # Errors
///
/// Returns [`Error::Cancelled`] if `cancel` fires during discovery.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn generate_with_options<S>(
    source: &S,
    options: &GeneratorOptions,
    cancel: &CancellationToken,
) -> Result<Generation>
where
    S: DeclarationSource + ?Sized,
{
    let discovery = discover_with_options(source, options, cancel)?;
    let mut generation = Generation {
        artifacts: ArtifactSet::new(),
        diagnostics: discovery.diagnostics,
    };
    if !discovery.marker_resolved {
        return Ok(generation);
    }

    if options.embed_attribute {
        generation.artifacts.add(Artifact::attribute(options))?;
    }

    for target in &discovery.targets {
        if let Err(error) = generation.artifacts.add(Artifact::for_target(target, options)) {
            warn!(declaration = %target.fully_qualified_name, "{}", error);
            generation.diagnostics.push(Diagnostic {
                declaration: target.fully_qualified_name.clone(),
                error,
            });
        }
    }

    info!(
        artifacts = generation.artifacts.len(),
        diagnostics = generation.diagnostics.len(),
        "generation finished"
    );
    Ok(generation)
}
