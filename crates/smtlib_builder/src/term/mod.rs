//! The term tree of an SMT-LIB script
//!
//! Every node is a [Term]. Leaves ([Atom], [StringAtom], [ListAtom],
//! [CommentAtom]) are immutable and cheap to clone. [Form] and [Expression]
//! are shared handles on append-only nodes: cloning one aliases the node, so
//! a form returned by a builder call can be extended later and the change is
//! seen by every tree it has been put in.

mod atom;
mod expression;
mod form;

pub use atom::{Atom, CommentAtom, ListAtom, StringAtom};
pub use expression::Expression;
pub use form::{Form, MAX_LINE_WIDTH};

#[derive(Debug, Clone)]
pub enum Term {
    Atom(Atom),
    String(StringAtom),
    List(ListAtom),
    Comment(CommentAtom),
    Form(Form),
    Expression(Expression),
}

impl Term {
    /// Renders the term as it would appear `depth` levels deep in a script.
    ///
    /// `spaced` only matters to [Form]s: `Some(true)` forces one child per
    /// line, `Some(false)` forces a single line and `None` lets the form
    /// decide based on [MAX_LINE_WIDTH].
    pub fn serialize(&self, depth: usize, spaced: Option<bool>) -> crate::Result<String> {
        match self {
            Term::Atom(a) => Ok(a.serialize()),
            Term::String(s) => Ok(s.serialize()),
            Term::List(l) => l.serialize(),
            Term::Comment(c) => Ok(c.serialize(depth)),
            Term::Form(f) => f.serialize(depth, spaced),
            Term::Expression(e) => e.serialize(depth),
        }
    }

    /// Returns `true` if the term is a [Form] called `name`
    pub fn is_form_named(&self, name: &str) -> bool {
        matches!(self, Term::Form(f) if f.has_name(name))
    }
}

/// Anything that can be printed as an SMT-LIB numeral or decimal
pub trait Numeral: std::fmt::Display {}

macro_rules! from_term {
    ($($variant:ident($t:ty)),* $(,)?) => {
        $(
            impl From<$t> for Term {
                fn from(value: $t) -> Self {
                    Term::$variant(value)
                }
            }

            impl<'a> From<&'a $t> for Term {
                fn from(value: &'a $t) -> Self {
                    Term::$variant(value.clone())
                }
            }
        )*
    };
}

from_term!(
    Atom(Atom),
    String(StringAtom),
    List(ListAtom),
    Comment(CommentAtom),
    Form(Form),
    Expression(Expression),
);

macro_rules! numerals {
    ($($t:ty),*) => {
        $(
            impl Numeral for $t {}

            impl From<$t> for Atom {
                fn from(value: $t) -> Self {
                    Atom::new(value.to_string())
                }
            }

            impl From<$t> for Term {
                fn from(value: $t) -> Self {
                    Term::Atom(value.into())
                }
            }
        )*
    };
}

numerals!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<'a> From<&'a str> for Atom {
    fn from(value: &'a str) -> Self {
        Atom::new(value)
    }
}

impl From<String> for Atom {
    fn from(value: String) -> Self {
        Atom::new(value)
    }
}

impl<'a> From<&'a str> for Term {
    fn from(value: &'a str) -> Self {
        Term::Atom(value.into())
    }
}

impl From<String> for Term {
    fn from(value: String) -> Self {
        Term::Atom(value.into())
    }
}
