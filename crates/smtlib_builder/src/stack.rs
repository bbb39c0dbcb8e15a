use std::io::Write;

use itertools::Itertools;
use log::trace;

use crate::{
    term::{Atom, CommentAtom, Form, ListAtom, Term},
    Error,
};

const SET_LOGIC: &str = "set-logic";

/// A declared function symbol of non-zero arity
///
/// Returned by [Stack::declare_fun], it builds applications of the
/// function and rejects the wrong number of arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunSymbol {
    name: String,
    arity: usize,
}

impl FunSymbol {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// `(name args...)`
    pub fn apply<T: Into<Term>>(&self, args: impl IntoIterator<Item = T>) -> crate::Result<Form> {
        let args = args.into_iter().map_into::<Term>().collect_vec();
        if args.len() != self.arity {
            return Err(Error::arity(&self.name, self.arity, args.len()));
        }
        Ok(Form::new(self.name.clone(), args))
    }
}

/// What [Stack::declare_fun] hands back
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Declared {
    /// A nullary function, used like a constant
    Const(Atom),
    Fun(FunSymbol),
}

impl Declared {
    pub fn name(&self) -> &str {
        match self {
            Declared::Const(a) => a.value(),
            Declared::Fun(f) => f.name(),
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Declared::Const(_) => 0,
            Declared::Fun(f) => f.arity(),
        }
    }

    /// Builds a term referring to the declared symbol
    ///
    /// A constant only accepts an empty argument list and yields itself.
    pub fn apply<T: Into<Term>>(&self, args: impl IntoIterator<Item = T>) -> crate::Result<Term> {
        match self {
            Declared::Const(a) => {
                let got = args.into_iter().count();
                if got != 0 {
                    return Err(Error::arity(a.value(), 0, got));
                }
                Ok(a.clone().into())
            }
            Declared::Fun(f) => f.apply(args).map(Term::from),
        }
    }

    pub fn as_const(&self) -> Option<&Atom> {
        match self {
            Declared::Const(a) => Some(a),
            Declared::Fun(_) => None,
        }
    }

    pub fn as_fun(&self) -> Option<&FunSymbol> {
        match self {
            Declared::Fun(f) => Some(f),
            Declared::Const(_) => None,
        }
    }
}

/// An SMT-LIB script: the ordered list of its top-level commands
///
/// Commands can only be appended. The serialization puts each command on its
/// own line(s), in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct Stack {
    commands: Vec<Term>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, command: impl Into<Term>) {
        let command = command.into();
        trace!("pushing {command:?}");
        self.commands.push(command)
    }

    fn push_form(&mut self, name: &str, args: impl IntoIterator<Item = Term>) {
        self.push(Form::new(name, args))
    }

    /// `(set-logic logic)`, which can only happen once per script
    pub fn set_logic(&mut self, logic: impl Into<Term>) -> crate::Result<()> {
        if self.commands.iter().any(|c| c.is_form_named(SET_LOGIC)) {
            return Err(Error::DuplicateLogic);
        }
        self.push_form(SET_LOGIC, [logic.into()]);
        Ok(())
    }

    pub fn check_sat(&mut self) {
        self.push_form("check-sat", [])
    }

    pub fn get_model(&mut self) {
        self.push_form("get-model", [])
    }

    pub fn exit(&mut self) {
        self.push_form("exit", [])
    }

    pub fn assert(&mut self, term: impl Into<Term>) {
        self.push_form("assert", [term.into()])
    }

    pub fn maximize(&mut self, term: impl Into<Term>) {
        self.push_form("maximize", [term.into()])
    }

    /// `(declare-const name sort)`, returns the constant to use in terms
    pub fn declare_const(&mut self, name: impl Into<String>, sort: impl Into<Term>) -> Atom {
        let name = Atom::new(name);
        self.push_form("declare-const", [name.clone().into(), sort.into()]);
        name
    }

    /// `(declare-fun name (params...) ret)`
    ///
    /// Without parameters the function is returned as a constant
    /// ([Declared::Const]), otherwise as a [FunSymbol] expecting exactly as
    /// many arguments as there are `params`.
    pub fn declare_fun<T: Into<Term>>(
        &mut self,
        name: impl Into<String>,
        params: impl IntoIterator<Item = T>,
        ret: impl Into<Term>,
    ) -> Declared {
        let name = name.into();
        let params = ListAtom::new(params);
        let arity = params.items().len();
        self.push_form(
            "declare-fun",
            [Atom::new(name.clone()).into(), params.into(), ret.into()],
        );

        if arity == 0 {
            Declared::Const(Atom::new(name))
        } else {
            Declared::Fun(FunSymbol { name, arity })
        }
    }

    /// A `;` comment between two commands
    pub fn comment(&mut self, text: impl Into<String>) {
        self.push(CommentAtom::inline(text))
    }

    pub fn commands(&self) -> &[Term] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn serialize(&self) -> crate::Result<String> {
        trace!("serializing {} commands", self.len());
        let mut result = String::new();
        for command in &self.commands {
            result.push_str(&command.serialize(0, None)?);
            result.push('\n');
        }
        Ok(result)
    }

    /// Serializes the script into `out`
    ///
    /// The whole script is serialized before anything is written, so `out`
    /// is untouched if serialization fails.
    pub fn write_to<W: Write>(&self, out: &mut W) -> crate::Result<()> {
        out.write_all(self.serialize()?.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        logic::LogicForm,
        sort::{BOOL, INT},
        term::Expression,
        terms,
    };

    #[test]
    fn empty_stack() {
        let stack = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.serialize().unwrap(), "");
    }

    #[test]
    fn directives() {
        let mut stack = Stack::new();
        stack.set_logic("QF_LIA").unwrap();
        stack.check_sat();
        stack.get_model();
        stack.exit();
        assert_eq!(
            stack.serialize().unwrap(),
            "(set-logic QF_LIA)\n(check-sat)\n(get-model)\n(exit)\n"
        );
    }

    #[test]
    fn set_logic_twice_fails() {
        let mut stack = Stack::new();
        stack.set_logic("QF_LIA").unwrap();
        stack.check_sat();
        assert!(matches!(stack.set_logic("QF_BV"), Err(Error::DuplicateLogic)));
        assert!(matches!(stack.set_logic("QF_LIA"), Err(Error::DuplicateLogic)));
        // nothing was appended by the failed calls
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn declare_const_returns_the_symbol() {
        let mut stack = Stack::new();
        let x = stack.declare_const("x", INT);
        assert_eq!(x.value(), "x");
        assert_eq!(stack.serialize().unwrap(), "(declare-const x Int)\n");
    }

    #[test]
    fn nullary_fun_is_a_constant() {
        let mut stack = Stack::new();
        let c = stack.declare_fun("c", Vec::<Term>::new(), BOOL);
        assert_eq!(c, Declared::Const(Atom::new("c")));
        assert_eq!(c.as_const().map(Atom::value), Some("c"));
        assert!(c.as_fun().is_none());
        assert_eq!(c.arity(), 0);
        assert!(c.apply(Vec::<Term>::new()).is_ok());
        assert!(matches!(
            c.apply(terms![1]),
            Err(Error::Arity { expected: 0, got: 1, .. })
        ));
        assert_eq!(stack.serialize().unwrap(), "(declare-fun c () Bool)\n");
    }

    #[test]
    fn fun_checks_its_arity() {
        let mut stack = Stack::new();
        let g = stack.declare_fun("g", [INT, INT], BOOL);
        assert!(g.as_const().is_none());
        let g = g.as_fun().unwrap();
        assert_eq!(g.arity(), 2);
        assert_eq!(
            g.apply(terms![1, "x"]).unwrap().serialize(0, None).unwrap(),
            "(g 1 x)"
        );
        for args in [terms![], terms![1], terms![1, 2, 3]] {
            let got = args.len();
            assert!(matches!(
                g.apply(args),
                Err(Error::Arity { expected: 2, got: n, ref name }) if n == got && name == "g"
            ));
        }
        assert_eq!(stack.serialize().unwrap(), "(declare-fun g (Int Int) Bool)\n");
    }

    #[test]
    fn handles_can_be_reused() {
        let mut stack = Stack::new();
        let f = stack.declare_fun("f", [INT], INT);
        let a = Expression::new();
        a.gt(f.apply(terms![1]).unwrap(), 0).unwrap();
        let b = Expression::new();
        b.lt(f.apply(terms![1]).unwrap(), 5).unwrap();
        stack.assert(a);
        stack.maximize(b);
        assert_eq!(
            stack.serialize().unwrap(),
            "(declare-fun f (Int) Int)\n(assert (> (f 1) 0))\n(maximize (< (f 1) 5))\n"
        );
    }

    #[test]
    fn inline_comments_between_commands() {
        let mut stack = Stack::new();
        stack.comment("setup");
        stack.set_logic("QF_LIA").unwrap();
        stack.comment("two\nlines");
        stack.check_sat();
        assert_eq!(
            stack.serialize().unwrap(),
            "; setup\n(set-logic QF_LIA)\n; two\n; lines\n(check-sat)\n"
        );
    }

    #[test]
    fn failing_serialization_keeps_the_stack() {
        let mut stack = Stack::new();
        stack.check_sat();
        stack.assert(Expression::new());
        assert!(matches!(stack.serialize(), Err(Error::EmptyExpression)));
        let mut out = Vec::new();
        assert!(stack.write_to(&mut out).is_err());
        assert!(out.is_empty());
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn write_to_matches_serialize() {
        let mut stack = Stack::new();
        let p = stack.declare_const("p", BOOL);
        stack.assert(p);
        stack.check_sat();
        let mut out = Vec::new();
        stack.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), stack.serialize().unwrap());
    }
}
