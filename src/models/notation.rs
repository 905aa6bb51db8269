/// A node parsed from the folder notation.
///
/// Directory names end with `/`. Only directories ever have children.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Entry {
    pub name: String,
    pub children: Vec<Entry>,
}

/// Top-level entries of a parsed notation. There is no single root.
pub type Forest = Vec<Entry>;

impl Entry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn dir(name: impl Into<String>, children: Vec<Entry>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.name.ends_with('/')
    }

    /// The name without its directory marker.
    pub fn bare_name(&self) -> &str {
        self.name.strip_suffix('/').unwrap_or(&self.name)
    }
}

/// A notation line split into its depth marker length and name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepthLine {
    /// 1-based line number in the source text.
    pub line: usize,
    pub depth: usize,
    pub name: String,
}
