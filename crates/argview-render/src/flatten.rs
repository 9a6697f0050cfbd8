//! Flattening a nested value tree into an ordered row sequence.

use serde::Serialize;
use serde_json::Value;

use crate::value::{ArgGroup, ArgValue};

/// Separator used when displaying a qualified key (`export__path`).
///
/// Display only: grouping is decided by [`FlatRow::path`], never by parsing
/// this separator back out of the key, so a field name that happens to
/// contain `__` cannot corrupt grouping.
pub const GROUP_SEPARATOR: &str = "__";

/// One flattened `(key, value)` pair with its structural group path.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FlatRow {
    /// Names of the enclosing groups, outermost first. Empty for top-level
    /// rows.
    pub path: Vec<String>,
    /// The leaf name within its group.
    pub key: String,
    /// The leaf value; `None` renders as the missing marker.
    pub value: Option<Value>,
}

impl FlatRow {
    /// The path-qualified display name, e.g. `export__path`.
    pub fn qualified(&self) -> String {
        if self.path.is_empty() {
            self.key.clone()
        } else {
            format!(
                "{}{}{}",
                self.path.join(GROUP_SEPARATOR),
                GROUP_SEPARATOR,
                self.key
            )
        }
    }
}

/// Walks the tree in declaration order and returns one row per leaf or
/// missing entry. Nested groups contribute their rows in place, so a
/// sub-command's rows are contiguous and first-seen group order is the
/// declaration order.
///
/// # Example
///
/// ```rust
/// use argview_render::{flatten, ArgGroup};
///
/// let args = ArgGroup::new("Args")
///     .leaf("a", 1)
///     .group("sub", ArgGroup::new("Sub").leaf("x", 2).missing("y"));
///
/// let rows = flatten(&args);
/// let keys: Vec<String> = rows.iter().map(|r| r.qualified()).collect();
/// assert_eq!(keys, vec!["a", "sub__x", "sub__y"]);
/// ```
pub fn flatten(group: &ArgGroup) -> Vec<FlatRow> {
    let mut rows = Vec::new();
    collect(group, &mut Vec::new(), &mut rows);
    rows
}

fn collect(group: &ArgGroup, path: &mut Vec<String>, out: &mut Vec<FlatRow>) {
    for (key, value) in group.entries() {
        match value {
            ArgValue::Group(sub) => {
                path.push(key.clone());
                collect(sub, path, out);
                path.pop();
            }
            ArgValue::Leaf(v) => out.push(FlatRow {
                path: path.clone(),
                key: key.clone(),
                value: Some(v.clone()),
            }),
            ArgValue::Missing => out.push(FlatRow {
                path: path.clone(),
                key: key.clone(),
                value: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_group() {
        let group = ArgGroup::new("Args").leaf("a", 1).missing("b");
        let rows = flatten(&group);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].qualified(), "a");
        assert!(rows[0].path.is_empty());
        assert_eq!(rows[1].value, None);
    }

    #[test]
    fn test_multi_level_nesting() {
        let inner = ArgGroup::new("Inner").leaf("z", 3);
        let mid = ArgGroup::new("Mid").leaf("y", 2).group("inner", inner);
        let group = ArgGroup::new("Args").leaf("x", 1).group("mid", mid);

        let rows = flatten(&group);
        let keys: Vec<String> = rows.iter().map(|r| r.qualified()).collect();
        assert_eq!(keys, vec!["x", "mid__y", "mid__inner__z"]);
        assert_eq!(rows[2].path, vec!["mid", "inner"]);
    }

    #[test]
    fn test_empty_group() {
        assert!(flatten(&ArgGroup::new("Args")).is_empty());
    }

    #[test]
    fn test_group_rows_are_contiguous() {
        let group = ArgGroup::new("Args")
            .leaf("a", 1)
            .group("s1", ArgGroup::new("S1").leaf("p", 1).leaf("q", 2))
            .leaf("b", 2);
        let rows = flatten(&group);
        let paths: Vec<&[String]> = rows.iter().map(|r| r.path.as_slice()).collect();
        assert_eq!(paths.len(), 4);
        assert!(paths[0].is_empty());
        assert_eq!(paths[1], ["s1".to_string()]);
        assert_eq!(paths[2], ["s1".to_string()]);
        assert!(paths[3].is_empty());
    }
}
