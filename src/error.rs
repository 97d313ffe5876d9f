//! Error types for configuration extraction and artifact registration.
//!
//! Rendering itself never fails: once a [`GenerationTarget`](crate::GenerationTarget)
//! exists, turning it into source text is a total function. Errors only arise
//! while reading a declaration's configuration or while registering output.
//!
//! ## Error Categories
//!
//! - **Malformed configuration**: a character listed twice in `OptimizeFor`, or a
//!   character that has no C# `char` literal
//! - **Unsupported declarations**: a private helper requested on a type whose
//!   accessibility is only legal for nested types
//! - **Cancellation**: the host asked the pass to stop
//! - **Artifact conflicts**: two different texts registered under one hint name
//!
//! ## Examples
//!
//! ```rust
//! use char_generators::Error;
//!
//! let err = Error::duplicate_character("Demo.Parser", 'x');
//! assert!(err.to_string().contains("'x'"));
//! assert!(err.to_string().contains("Demo.Parser"));
//! ```

use crate::Visibility;
use thiserror::Error;

/// Represents all possible errors raised while extracting or emitting artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The same character appears more than once in `OptimizeFor`
    #[error("'{declaration}': character {character:?} appears more than once in OptimizeFor\nHelp: every character may be listed only once")]
    DuplicateCharacter { declaration: String, character: char },

    /// A character outside the Basic Multilingual Plane cannot be a C# `char`
    #[error("'{declaration}': character {character:?} lies outside the Basic Multilingual Plane and has no C# char literal")]
    UnrepresentableCharacter { declaration: String, character: char },

    /// Two different texts were registered under the same artifact hint name
    #[error("Conflicting artifact '{hint_name}': a different source was already registered under this name")]
    ConflictingArtifact { hint_name: String },

    /// The host cancelled the generation pass
    #[error("Generation cancelled")]
    Cancelled,

    /// A non-namespace-level accessibility on a declaration that needs a private helper
    #[error("'{declaration}': '{visibility}' is only valid on nested types, which cannot receive a private helper\nHelp: declare the type public or internal, or set Global = true")]
    NestedVisibility {
        declaration: String,
        visibility: Visibility,
    },
}

impl Error {
    /// Creates an error for a character listed twice on one declaration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use char_generators::Error;
    ///
    /// let err = Error::duplicate_character("Foo", '0');
    /// assert!(err.to_string().contains("more than once"));
    /// ```
    pub fn duplicate_character(declaration: &str, character: char) -> Self {
        Error::DuplicateCharacter {
            declaration: declaration.to_string(),
            character,
        }
    }

    /// Creates an error for a character that needs a surrogate pair in UTF-16.
    pub fn unrepresentable_character(declaration: &str, character: char) -> Self {
        Error::UnrepresentableCharacter {
            declaration: declaration.to_string(),
            character,
        }
    }

    /// Creates an error for a hint name registered twice with different text.
    pub fn conflicting_artifact(hint_name: &str) -> Self {
        Error::ConflictingArtifact {
            hint_name: hint_name.to_string(),
        }
    }

    /// Creates an error for a private helper requested on a nested-only accessibility.
    pub fn nested_visibility(declaration: &str, visibility: Visibility) -> Self {
        Error::NestedVisibility {
            declaration: declaration.to_string(),
            visibility,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
