//! The named-value tree handed over by an argument-population layer.
//!
//! A populated argument set is an [`ArgGroup`]: an insertion-ordered list of
//! `(name, ArgValue)` entries. A value is either a printable leaf, a nested
//! group (a chosen sub-command), or [`ArgValue::Missing`] when nothing was
//! supplied and no default exists. The tree is built once by the declaring
//! layer and consumed read-only by the display engine; ownership makes it
//! acyclic by construction.

use serde::Serialize;
use serde_json::Value;

/// A single named slot in an [`ArgGroup`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum ArgValue {
    /// No value was supplied and no default exists.
    Missing,
    /// A plain printable value.
    Leaf(Value),
    /// A nested group of values.
    Group(ArgGroup),
}

impl ArgValue {
    /// Wraps a printable value, normalizing JSON null to [`ArgValue::Missing`].
    pub fn leaf(value: impl Into<Value>) -> Self {
        match value.into() {
            Value::Null => ArgValue::Missing,
            v => ArgValue::Leaf(v),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, ArgValue::Missing)
    }

    pub fn as_leaf(&self) -> Option<&Value> {
        match self {
            ArgValue::Leaf(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&ArgGroup> {
        match self {
            ArgValue::Group(g) => Some(g),
            _ => None,
        }
    }
}

impl From<Value> for ArgValue {
    fn from(value: Value) -> Self {
        ArgValue::leaf(value)
    }
}

/// An ordered collection of named argument values.
///
/// # Example
///
/// ```rust
/// use argview_render::ArgGroup;
///
/// let export = ArgGroup::new("Export").leaf("path", "out.json");
/// let args = ArgGroup::new("Args")
///     .leaf("epochs", 20)
///     .missing("resume")
///     .group("export", export);
///
/// assert_eq!(args.len(), 3);
/// assert!(args.get("resume").unwrap().is_missing());
/// assert!(args.get("export").unwrap().as_group().is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArgGroup {
    type_name: String,
    entries: Vec<(String, ArgValue)>,
}

impl ArgGroup {
    /// Creates an empty group with the display name used in inline output.
    pub fn new(type_name: impl Into<String>) -> Self {
        ArgGroup {
            type_name: type_name.into(),
            entries: Vec::new(),
        }
    }

    /// Appends a leaf value.
    pub fn leaf(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(key, ArgValue::leaf(value));
        self
    }

    /// Appends a missing value.
    pub fn missing(mut self, key: impl Into<String>) -> Self {
        self.push(key, ArgValue::Missing);
        self
    }

    /// Appends a nested group.
    pub fn group(mut self, key: impl Into<String>, group: ArgGroup) -> Self {
        self.push(key, ArgValue::Group(group));
        self
    }

    /// Appends an entry, preserving insertion order.
    pub fn push(&mut self, key: impl Into<String>, value: ArgValue) {
        self.entries.push((key.into(), value));
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn entries(&self) -> &[(String, ArgValue)] {
        &self.entries
    }

    /// Looks up an entry by name.
    pub fn get(&self, key: &str) -> Option<&ArgValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Converts the tree to a JSON object; missing values become null.
    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::new();
        for (key, value) in &self.entries {
            let v = match value {
                ArgValue::Missing => Value::Null,
                ArgValue::Leaf(v) => v.clone(),
                ArgValue::Group(g) => g.to_json(),
            };
            map.insert(key.clone(), v);
        }
        Value::Object(map)
    }
}
