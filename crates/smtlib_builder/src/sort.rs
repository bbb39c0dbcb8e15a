//! The sorts every SMT-LIB solver knows about

use crate::term::Atom;

pub const INT: Atom = Atom::from_static("Int");
pub const BOOL: Atom = Atom::from_static("Bool");
pub const STRING: Atom = Atom::from_static("String");
pub const REAL: Atom = Atom::from_static("Real");

pub const BUILT_IN_SORTS: [Atom; 4] = [INT, BOOL, STRING, REAL];
