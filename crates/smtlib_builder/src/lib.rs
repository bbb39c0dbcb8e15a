//! Build SMT-LIB v2 scripts programmatically.
//!
//! Terms are assembled with the fluent [LogicForm] constructors, attached to
//! a [Stack] of top-level commands and serialized into SMT-LIB v2 text:
//!
//! ```
//! use smtlib_builder::{expression, sort, stack, logic::LogicForm, terms};
//!
//! let mut stack = stack();
//! let p = stack.declare_const("p", sort::BOOL);
//! let expr = expression();
//! expr.and(terms![p.clone()]).unwrap().not(p);
//! stack.assert(expr);
//! stack.check_sat();
//! stack.get_model();
//!
//! assert_eq!(
//!     stack.serialize().unwrap(),
//!     "(declare-const p Bool)\n(assert (and p (not p)))\n(check-sat)\n(get-model)\n"
//! );
//! ```
//!
//! Feeding the result to a solver is left to the [runner] module.

pub mod error;
pub mod logic;
pub mod runner;
pub mod sort;
pub mod stack;
pub mod term;

mod macros;

pub use error::{Error, Result};
pub use logic::LogicForm;
pub use stack::{Declared, FunSymbol, Stack};
pub use term::{Atom, CommentAtom, Expression, Form, ListAtom, Numeral, StringAtom, Term};


/// A symbol, e.g. the name of a constant or a logic
pub fn symbol(value: impl Into<String>) -> Atom {
    Atom::new(value)
}

/// A numeral or decimal, printed as rust prints it
pub fn num(value: impl Numeral) -> Atom {
    Atom::new(value.to_string())
}

/// A string literal, see [StringAtom] about escaping
pub fn string(value: impl Into<String>) -> StringAtom {
    StringAtom::new(value)
}

/// A fresh nameless root to build a connective from
///
/// The root itself is meant to be dropped: keep what its constructors
/// return.
///
/// ```
/// # use smtlib_builder::{logic, LogicForm, terms};
/// let sum = logic().plus(terms![1, 2]);
/// assert_eq!(sum.serialize(0, None).unwrap(), "(+ 1 2)");
/// ```
pub fn logic() -> Form {
    Form::stub()
}

/// An empty single-term container, for [Stack::assert] and
/// [Stack::maximize]
pub fn expression() -> Expression {
    Expression::new()
}

pub fn stack() -> Stack {
    Stack::new()
}

use std::io::Write;
/// Installs an `env_logger` reading `RUST_LOG`, e.g. `RUST_LOG=smtlib_builder=trace`
/// to follow what gets pushed on a [Stack] and how the solver is run.
///
/// Fails if a logger was already installed.
pub fn init_logger() -> std::result::Result<(), log::SetLoggerError> {
    env_logger::Builder::new()
        .format(|buf, record| {
            let msg = record.args().to_string().replace('\n', "\n\t");
            writeln!(
                buf,
                "[{} {}] {}:{}\n\t{}",
                record.level(),
                record.target(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                msg
            )
        })
        .parse_default_env()
        .try_init()
}
