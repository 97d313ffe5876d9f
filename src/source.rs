//! Host abstraction over the declaration universe.
//!
//! A host (compiler plugin, build script, editor integration) implements
//! [`DeclarationSource`] on top of its own syntax and semantic model. The
//! discovery pass only ever talks to this trait.
//!
//! [`DeclarationSet`] is an in-memory implementation for hosts that extract
//! declarations ahead of time, for example into JSON:
//!
//! ```rust
//! use char_generators::{DeclarationSet, DeclarationSource, DEFAULT_MARKER};
//!
//! let set: DeclarationSet = serde_json::from_str(r#"{
//!     "declarations": [{
//!         "id": "src/Parser.cs#Parser",
//!         "name": "Parser",
//!         "scope_path": "App",
//!         "visibility": "internal",
//!         "attributes": [{
//!             "name": "CharGenerators.CharExtensionsAttribute",
//!             "arguments": { "OptimizeFor": "0123456789", "Global": true }
//!         }]
//!     }]
//! }"#).unwrap();
//!
//! assert!(set.resolve_marker(DEFAULT_MARKER));
//! assert_eq!(set.annotated(DEFAULT_MARKER), vec!["src/Parser.cs#Parser".to_string()]);
//! ```

use crate::Visibility;
use indexmap::IndexMap;
use serde::de::{self, IgnoredAny, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::hash::Hash;

/// A named argument value as read from the marker.
///
/// Values of any other kind (numbers, arrays, objects) deserialize to
/// [`ArgumentValue::Other`] and read as absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ArgumentValue {
    Null,
    Bool(bool),
    Str(String),
    Other,
}

impl<'de> Deserialize<'de> for ArgumentValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ArgumentValueVisitor;

        impl<'de> Visitor<'de> for ArgumentValueVisitor {
            type Value = ArgumentValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an attribute argument value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(ArgumentValue::Bool(value))
            }

            fn visit_i64<E>(self, _value: i64) -> Result<Self::Value, E> {
                Ok(ArgumentValue::Other)
            }

            fn visit_u64<E>(self, _value: u64) -> Result<Self::Value, E> {
                Ok(ArgumentValue::Other)
            }

            fn visit_f64<E>(self, _value: f64) -> Result<Self::Value, E> {
                Ok(ArgumentValue::Other)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(ArgumentValue::Str(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(ArgumentValue::Str(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(ArgumentValue::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(ArgumentValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(ArgumentValue::Other)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(ArgumentValue::Other)
            }
        }

        deserializer.deserialize_any(ArgumentValueVisitor)
    }
}

impl ArgumentValue {
    /// Returns the string payload, `None` for other kinds.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgumentValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean payload, `None` for other kinds.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ArgumentValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for ArgumentValue {
    fn from(s: &str) -> Self {
        ArgumentValue::Str(s.to_string())
    }
}

impl From<bool> for ArgumentValue {
    fn from(b: bool) -> Self {
        ArgumentValue::Bool(b)
    }
}

/// Semantic facts about a declaration the host could resolve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDeclaration {
    pub name: String,
    pub fully_qualified_name: String,
    /// Dotted enclosing namespace; empty for the global namespace.
    pub scope_path: String,
    pub visibility: Visibility,
}

/// The host's declaration universe, as seen by the discovery pass.
pub trait DeclarationSource {
    /// Identity of a declaration; the same declaration always yields an equal id.
    type Id: Clone + Eq + Hash;

    /// Whether the marker type exists in the host's type universe at all.
    fn resolve_marker(&self, marker: &str) -> bool;

    /// Declarations carrying `marker`, in traversal order. The same id may be
    /// returned more than once.
    fn annotated(&self, marker: &str) -> Vec<Self::Id>;

    /// Resolves name, scope and accessibility; `None` when the host has no
    /// semantic symbol for the declaration.
    fn resolve(&self, id: &Self::Id) -> Option<ResolvedDeclaration>;

    /// Reads the named argument `key` of `marker` on the declaration.
    fn named_argument(&self, id: &Self::Id, marker: &str, key: &str) -> Option<ArgumentValue>;
}

/// One attribute application on a declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeEntry {
    pub name: String,
    #[serde(default)]
    pub arguments: IndexMap<String, ArgumentValue>,
}

/// A declaration as recorded in a [`DeclarationSet`].
///
/// A missing `name` models a declaration the host could not bind to a symbol.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationEntry {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub scope_path: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub attributes: Vec<AttributeEntry>,
}

impl DeclarationEntry {
    /// Creates a public, top-level declaration named `name` whose id is its name.
    pub fn new(name: &str) -> Self {
        DeclarationEntry {
            id: name.to_string(),
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    #[must_use]
    pub fn in_scope(mut self, scope_path: &str) -> Self {
        self.scope_path = scope_path.to_string();
        self
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Drops the symbol, as if the host failed to bind the declaration.
    #[must_use]
    pub fn unresolved(mut self) -> Self {
        self.name = None;
        self
    }

    /// Applies an attribute with the given named arguments.
    #[must_use]
    pub fn with_attribute<I, K>(mut self, name: &str, arguments: I) -> Self
    where
        I: IntoIterator<Item = (K, ArgumentValue)>,
        K: Into<String>,
    {
        self.attributes.push(AttributeEntry {
            name: name.to_string(),
            arguments: arguments.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        });
        self
    }

    fn attribute(&self, marker: &str) -> Option<&AttributeEntry> {
        self.attributes.iter().find(|a| a.name == marker)
    }
}

fn default_true() -> bool {
    true
}

/// In-memory declaration universe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationSet {
    /// Whether the marker type is available to the compilation.
    #[serde(default = "default_true")]
    pub marker_available: bool,
    #[serde(default)]
    pub declarations: Vec<DeclarationEntry>,
}

impl Default for DeclarationSet {
    fn default() -> Self {
        DeclarationSet {
            marker_available: true,
            declarations: Vec::new(),
        }
    }
}

impl DeclarationSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_declaration(mut self, declaration: DeclarationEntry) -> Self {
        self.declarations.push(declaration);
        self
    }

    #[must_use]
    pub fn without_marker(mut self) -> Self {
        self.marker_available = false;
        self
    }

    fn entry(&self, id: &str) -> Option<&DeclarationEntry> {
        self.declarations.iter().find(|d| d.id == id)
    }
}

impl DeclarationSource for DeclarationSet {
    type Id = String;

    fn resolve_marker(&self, _marker: &str) -> bool {
        self.marker_available
    }

    fn annotated(&self, marker: &str) -> Vec<String> {
        self.declarations
            .iter()
            .filter(|d| d.attribute(marker).is_some())
            .map(|d| d.id.clone())
            .collect()
    }

    fn resolve(&self, id: &String) -> Option<ResolvedDeclaration> {
        let entry = self.entry(id)?;
        let name = entry.name.clone()?;
        let fully_qualified_name = if entry.scope_path.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", entry.scope_path, name)
        };
        Some(ResolvedDeclaration {
            name,
            fully_qualified_name,
            scope_path: entry.scope_path.clone(),
            visibility: entry.visibility,
        })
    }

    fn named_argument(&self, id: &String, marker: &str, key: &str) -> Option<ArgumentValue> {
        self.entry(id)?.attribute(marker)?.arguments.get(key).cloned()
    }
}
