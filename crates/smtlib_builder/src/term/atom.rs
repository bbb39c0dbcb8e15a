use std::{borrow::Cow, fmt};

use itertools::Itertools;

use super::Term;

/// A terminal symbol or numeral, printed as is
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Atom(Cow<'static, str>);

impl Atom {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Cow::Owned(value.into()))
    }

    /// Build an atom in `const` context, see [crate::sort]
    pub const fn from_static(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn serialize(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A string literal. The content is quoted but *not* escaped.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StringAtom(String);

impl StringAtom {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn serialize(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

/// A parenthesized list, e.g. the parameter sorts of a `declare-fun`
///
/// It never breaks over several lines by itself.
#[derive(Debug, Clone)]
pub struct ListAtom(Vec<Term>);

impl ListAtom {
    pub fn new<T: Into<Term>>(items: impl IntoIterator<Item = T>) -> Self {
        Self(items.into_iter().map_into().collect())
    }

    pub fn items(&self) -> &[Term] {
        &self.0
    }

    pub fn serialize(&self) -> crate::Result<String> {
        let items = self
            .0
            .iter()
            .map(|item| item.serialize(0, None))
            .collect::<crate::Result<Vec<_>>>()?;
        Ok(format!("({})", items.iter().join(" ")))
    }
}

/// A `;` comment, possibly spanning several lines
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommentAtom {
    value: String,
    spaced: bool,
}

impl CommentAtom {
    /// A comment surrounded by blank lines
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            spaced: true,
        }
    }

    /// A comment without the surrounding blank lines
    pub fn inline(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            spaced: false,
        }
    }

    pub fn is_spaced(&self) -> bool {
        self.spaced
    }

    pub fn serialize(&self, depth: usize) -> String {
        let width = depth.saturating_sub(1) * 2;
        // only the first line is indented
        let block = format!(
            "{}{}",
            " ".repeat(width),
            self.value.split('\n').map(|line| format!("; {line}")).join("\n")
        );

        if self.spaced {
            // the trailing pad is one short of the indentation, down to nothing
            format!("\n{block}\n{}", " ".repeat(width.saturating_sub(1)))
        } else {
            block
        }
    }
}
