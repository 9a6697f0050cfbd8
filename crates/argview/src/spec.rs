//! The declared command tree.

use crate::field::Opt;

/// One declared entry: an argument or a nested sub-command.
#[derive(Clone, Debug)]
pub(crate) enum SpecEntry {
    Opt(Opt),
    Sub(String, ArgSpec),
}

/// An ordered set of declared arguments, possibly with sub-commands.
///
/// Declaration order is preserved all the way to display: arguments are
/// shown in the order they were added, and a sub-command's arguments stay
/// together.
///
/// # Example
///
/// ```rust
/// use argview::{ArgSpec, Opt};
///
/// let export = ArgSpec::new("Export")
///     .opt(Opt::new("path").default("out.json"));
///
/// let spec = ArgSpec::new("TrainArgs")
///     .opt(Opt::new("epochs").int().default(10))
///     .opt(Opt::new("verbose").default(false))
///     .sub("export", export);
/// ```
#[derive(Clone, Debug)]
pub struct ArgSpec {
    pub(crate) name: String,
    pub(crate) about: Option<String>,
    pub(crate) entries: Vec<SpecEntry>,
}

impl ArgSpec {
    /// Creates an empty spec. The name doubles as the display type name
    /// for inline output and as the program name in help text.
    pub fn new(name: impl Into<String>) -> Self {
        ArgSpec {
            name: name.into(),
            about: None,
            entries: Vec::new(),
        }
    }

    pub fn about(mut self, text: impl Into<String>) -> Self {
        self.about = Some(text.into());
        self
    }

    /// Appends an argument.
    pub fn opt(mut self, opt: Opt) -> Self {
        self.entries.push(SpecEntry::Opt(opt));
        self
    }

    /// Appends a sub-command under the given field name. The field name is
    /// what the user types; the sub-spec's own name is its display name.
    pub fn sub(mut self, field: impl Into<String>, spec: ArgSpec) -> Self {
        self.entries.push(SpecEntry::Sub(field.into(), spec));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn opts(&self) -> impl Iterator<Item = &Opt> {
        self.entries.iter().filter_map(|e| match e {
            SpecEntry::Opt(opt) => Some(opt),
            SpecEntry::Sub(..) => None,
        })
    }
}
