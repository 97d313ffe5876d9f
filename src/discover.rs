//! Discovery and extraction of generation targets.
//!
//! The pass walks every declaration the host reports as carrying the marker,
//! reads `OptimizeFor` and `Global`, validates the character set and produces
//! one [`GenerationTarget`] per distinct declaration.
//!
//! ## Failure policy
//!
//! - marker type missing from the host: no targets, no diagnostics
//! - declaration without a semantic symbol: skipped silently
//! - malformed `OptimizeFor`: declaration dropped, [`Diagnostic`] recorded
//! - private helper requested on an accessibility only nested types may have
//!   (anything but `public` and `internal`): declaration dropped, [`Diagnostic`]
//!   recorded. Only namespace-level declarations are modelled.
//! - cancellation: the whole pass returns [`Error::Cancelled`]

use crate::source::{ArgumentValue, DeclarationSource, ResolvedDeclaration};
use crate::target::effective_optimize_for;
use crate::{Error, GenerationTarget, GeneratorOptions, Result};
use indexmap::IndexSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// Named argument holding the characters to special-case.
pub const OPTIMIZE_FOR_ARGUMENT: &str = "OptimizeFor";

/// Named argument selecting the global artifact.
pub const GLOBAL_ARGUMENT: &str = "Global";

/// Cooperative cancellation flag shared between a host and a running pass.
///
/// Clones observe the same flag.
///
/// # Examples
///
/// ```rust
/// use char_generators::CancellationToken;
///
/// let token = CancellationToken::new();
/// let handle = token.clone();
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Returns [`Error::Cancelled`] once cancellation has been requested.
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(Error::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// A problem attributed to one declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Fully qualified name of the offending declaration.
    pub declaration: String,
    pub error: Error,
}

/// Outcome of a discovery pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Discovery {
    /// `false` when the host has no marker type; nothing is generated then.
    pub marker_resolved: bool,
    pub targets: Vec<GenerationTarget>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Discovers targets with the default marker.
///
/// # Examples
///
/// ```rust
/// use char_generators::{discover, CancellationToken, DeclarationEntry, DeclarationSet, DEFAULT_MARKER};
///
/// let set = DeclarationSet::new().with_declaration(
///     DeclarationEntry::new("Foo").with_attribute(DEFAULT_MARKER, [("OptimizeFor", "01".into())]),
/// );
///
/// let discovery = discover(&set, &CancellationToken::new()).unwrap();
/// assert_eq!(discovery.targets[0].optimize_for, vec!['0', '1']);
/// ```
///
/// # Errors
///
/// Returns [`Error::Cancelled`] if `cancel` fires before the pass completes.
pub fn discover<S>(source: &S, cancel: &CancellationToken) -> Result<Discovery>
where
    S: DeclarationSource + ?Sized,
{
    discover_with_options(source, &GeneratorOptions::default(), cancel)
}

/// Discovers targets carrying `options.marker`.
///
/// # Errors
///
/// Returns [`Error::Cancelled`] if `cancel` fires before the pass completes.
/// No partial result is returned in that case.
pub fn discover_with_options<S>(
    source: &S,
    options: &GeneratorOptions,
    cancel: &CancellationToken,
) -> Result<Discovery>
where
    S: DeclarationSource + ?Sized,
{
    let mut discovery = Discovery::default();

    if !source.resolve_marker(&options.marker) {
        debug!(marker = %options.marker, "marker type not found, nothing to generate");
        return Ok(discovery);
    }
    discovery.marker_resolved = true;

    let mut seen = IndexSet::new();
    for id in source.annotated(&options.marker) {
        cancel.check()?;

        if !seen.insert(id.clone()) {
            trace!("declaration visited twice, skipping");
            continue;
        }

        let Some(declaration) = source.resolve(&id) else {
            trace!("declaration has no semantic symbol, skipping");
            continue;
        };

        match extract_target(source, &id, declaration, &options.marker) {
            Ok(target) => {
                debug!(
                    target = %target.fully_qualified_name,
                    global = target.global,
                    characters = target.optimize_for.len(),
                    "extracted generation target"
                );
                discovery.targets.push(target);
            }
            Err(diagnostic) => {
                warn!(declaration = %diagnostic.declaration, "{}", diagnostic.error);
                discovery.diagnostics.push(diagnostic);
            }
        }
    }

    info!(
        targets = discovery.targets.len(),
        diagnostics = discovery.diagnostics.len(),
        "discovery finished"
    );
    Ok(discovery)
}

fn extract_target<S>(
    source: &S,
    id: &S::Id,
    declaration: ResolvedDeclaration,
    marker: &str,
) -> std::result::Result<GenerationTarget, Diagnostic>
where
    S: DeclarationSource + ?Sized,
{
    let configured = source.named_argument(id, marker, OPTIMIZE_FOR_ARGUMENT);
    let optimize_for = effective_optimize_for(configured.as_ref().and_then(ArgumentValue::as_str));
    let global = source
        .named_argument(id, marker, GLOBAL_ARGUMENT)
        .and_then(|v| v.as_bool())
        .unwrap_or(false);

    if let Err(error) = validate_optimize_for(&declaration.fully_qualified_name, &optimize_for) {
        return Err(Diagnostic {
            declaration: declaration.fully_qualified_name,
            error,
        });
    }

    // the private helper is a partial part of the declaration itself, emitted
    // directly in its namespace
    if !global && !declaration.visibility.is_namespace_level() {
        let error = Error::nested_visibility(&declaration.fully_qualified_name, declaration.visibility);
        return Err(Diagnostic {
            declaration: declaration.fully_qualified_name,
            error,
        });
    }

    Ok(GenerationTarget {
        name: declaration.name,
        fully_qualified_name: declaration.fully_qualified_name,
        scope_path: declaration.scope_path,
        visibility: declaration.visibility,
        optimize_for,
        global,
    })
}

/// Checks that every character is listed once and fits in one UTF-16 code unit.
///
/// # Examples
///
/// ```rust
/// use char_generators::discover::validate_optimize_for;
/// use char_generators::Error;
///
/// assert!(validate_optimize_for("Foo", &['a', 'b']).is_ok());
/// assert_eq!(
///     validate_optimize_for("Foo", &['a', 'b', 'a']),
///     Err(Error::duplicate_character("Foo", 'a'))
/// );
/// ```
///
/// # Errors
///
/// Reports the first offending character.
pub fn validate_optimize_for(declaration: &str, characters: &[char]) -> Result<()> {
    let mut seen = IndexSet::with_capacity(characters.len());
    for &ch in characters {
        if ch.len_utf16() > 1 {
            return Err(Error::unrepresentable_character(declaration, ch));
        }
        if !seen.insert(ch) {
            return Err(Error::duplicate_character(declaration, ch));
        }
    }
    Ok(())
}
