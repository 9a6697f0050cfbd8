//! Declarative argument descriptors.
//!
//! An [`Opt`] describes one flag, option, or positional argument: its
//! destination name, value kind, default, aliases, and help text. The
//! descriptor is pure data; translation into the parsing engine happens
//! separately, and the populated result is handed to the display layer as
//! a named-value tree.

use std::fmt;

use serde_json::Value;

/// The type of value an argument carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    Str,
    /// Zero or more values of the inner kind.
    List(Box<ValueKind>),
}

impl ValueKind {
    /// Infers a kind from a default value.
    pub(crate) fn infer(value: &Value) -> ValueKind {
        match value {
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(n) if n.is_i64() || n.is_u64() => ValueKind::Int,
            Value::Number(_) => ValueKind::Float,
            Value::Array(items) => ValueKind::List(Box::new(
                items.first().map(ValueKind::infer).unwrap_or(ValueKind::Str),
            )),
            _ => ValueKind::Str,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Bool => f.write_str("bool"),
            ValueKind::Int => f.write_str("int"),
            ValueKind::Float => f.write_str("float"),
            ValueKind::Str => f.write_str("str"),
            ValueKind::List(inner) => write!(f, "List[{inner}]"),
        }
    }
}

/// One declared argument.
///
/// # Example
///
/// ```rust
/// use argview::Opt;
///
/// let epochs = Opt::new("epochs").int().default(10).help("Training epochs");
/// assert_eq!(epochs.to_string(), "Opt(epochs, kind=int, default=10)");
/// ```
#[derive(Clone, Debug)]
pub struct Opt {
    pub(crate) name: String,
    pub(crate) kind: ValueKind,
    kind_explicit: bool,
    pub(crate) default: Option<Value>,
    pub(crate) aliases: Vec<String>,
    pub(crate) help: Option<String>,
    pub(crate) metavar: Option<String>,
    /// Boolean options expand to a `--flag` / `--no-flag` pair instead of
    /// taking a value.
    pub(crate) bool_flag: bool,
    pub(crate) positional: bool,
    pub(crate) required: bool,
}

impl Opt {
    /// A dashed option with the given destination name.
    pub fn new(name: impl Into<String>) -> Self {
        Opt {
            name: name.into(),
            kind: ValueKind::Str,
            kind_explicit: false,
            default: None,
            aliases: Vec::new(),
            help: None,
            metavar: None,
            bool_flag: true,
            positional: false,
            required: false,
        }
    }

    /// A positional argument. Positionals never use the flag-pair
    /// convention.
    pub fn positional(name: impl Into<String>) -> Self {
        Opt {
            positional: true,
            bool_flag: false,
            ..Self::new(name)
        }
    }

    /// Sets the value kind explicitly.
    pub fn kind(mut self, kind: ValueKind) -> Self {
        self.kind = kind;
        self.kind_explicit = true;
        self
    }

    pub fn int(self) -> Self {
        self.kind(ValueKind::Int)
    }

    pub fn float(self) -> Self {
        self.kind(ValueKind::Float)
    }

    pub fn text(self) -> Self {
        self.kind(ValueKind::Str)
    }

    /// A boolean argument (a `--flag` / `--no-flag` pair by default).
    pub fn flag(self) -> Self {
        self.kind(ValueKind::Bool)
    }

    pub fn list(self, inner: ValueKind) -> Self {
        self.kind(ValueKind::List(Box::new(inner)))
    }

    /// Sets the default. Unless a kind was set explicitly, the kind is
    /// inferred from the default's type; a null default is the same as no
    /// default.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        let value = value.into();
        if value.is_null() {
            self.default = None;
            return self;
        }
        if !self.kind_explicit {
            self.kind = ValueKind::infer(&value);
        }
        self.default = Some(value);
        self
    }

    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help = Some(text.into());
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn metavar(mut self, metavar: impl Into<String>) -> Self {
        self.metavar = Some(metavar.into());
        self
    }

    /// Disables the `--flag` / `--no-flag` pair; the option takes an
    /// explicit truthy/falsy value instead (`--arg yes`, `--arg 0`).
    pub fn value_flag(mut self) -> Self {
        self.bool_flag = false;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Opt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opt({}, kind={}", self.name, self.kind)?;
        match &self.default {
            Some(v) => write!(f, ", default={v})"),
            None => write!(f, ", default=-)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_inference_from_default() {
        assert_eq!(Opt::new("a").default(1).kind, ValueKind::Int);
        assert_eq!(Opt::new("a").default(1.5).kind, ValueKind::Float);
        assert_eq!(Opt::new("a").default(true).kind, ValueKind::Bool);
        assert_eq!(Opt::new("a").default("x").kind, ValueKind::Str);
        assert_eq!(
            Opt::new("a").default(json!([1, 2])).kind,
            ValueKind::List(Box::new(ValueKind::Int))
        );
    }

    #[test]
    fn test_explicit_kind_wins_over_inference() {
        let opt = Opt::new("a").float().default(1);
        assert_eq!(opt.kind, ValueKind::Float);
    }

    #[test]
    fn test_null_default_means_no_default() {
        let opt = Opt::new("a").default(Value::Null);
        assert!(opt.default.is_none());
    }

    #[test]
    fn test_positional_disables_flag_pair() {
        let opt = Opt::positional("data").flag();
        assert!(opt.positional);
        assert!(!opt.bool_flag);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ValueKind::List(Box::new(ValueKind::Int)).to_string(), "List[int]");
        assert_eq!(ValueKind::Bool.to_string(), "bool");
    }
}
