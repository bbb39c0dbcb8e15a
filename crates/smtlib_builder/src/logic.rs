//! Fluent constructors for logical and arithmetic connectives
//!
//! Every constructor builds a new [Form], appends it to the receiver and
//! hands the new form back, so it can itself receive children later on:
//!
//! ```
//! # use smtlib_builder::{logic::LogicForm, terms, Form};
//! let root = Form::new("assert", Vec::<smtlib_builder::Term>::new());
//! let and = root.and(terms!["p"]);
//! and.not("q");
//! assert_eq!(root.serialize(0, None).unwrap(), "(assert (and p (not q)))");
//! ```
//!
//! Arity is not checked: binary constructors take two arguments for
//! convenience, but more can be appended with [Form::add_child] and
//! [LogicForm::fun] takes any number.
//!
//! To build a connective without a parent, hang it from a throw-away stub
//! ([crate::logic()]).

use crate::term::{CommentAtom, Expression, Form, Term};

fn pair(a: impl Into<Term>, b: impl Into<Term>) -> [Term; 2] {
    [a.into(), b.into()]
}

pub trait LogicForm {
    /// What attaching a child yields, `T` itself or a `Result<T>`
    type Attached<T>;

    /// Appends `child` and returns it
    fn attach<T>(&self, child: T) -> Self::Attached<T>
    where
        T: Into<Term> + Clone;

    fn fun<T: Into<Term>>(
        &self,
        name: impl Into<String>,
        args: impl IntoIterator<Item = T>,
    ) -> Self::Attached<Form> {
        self.attach(Form::new(name, args))
    }

    fn and<T: Into<Term>>(&self, args: impl IntoIterator<Item = T>) -> Self::Attached<Form> {
        self.fun("and", args)
    }

    fn or<T: Into<Term>>(&self, args: impl IntoIterator<Item = T>) -> Self::Attached<Form> {
        self.fun("or", args)
    }

    fn not(&self, a: impl Into<Term>) -> Self::Attached<Form> {
        self.fun("not", std::iter::once::<Term>(a.into()))
    }

    fn implies(&self, a: impl Into<Term>, b: impl Into<Term>) -> Self::Attached<Form> {
        self.fun("implies", pair(a, b))
    }

    /// `(+ ...)`
    fn plus<T: Into<Term>>(&self, args: impl IntoIterator<Item = T>) -> Self::Attached<Form> {
        self.fun("+", args)
    }

    /// `(* a b)`
    fn times(&self, a: impl Into<Term>, b: impl Into<Term>) -> Self::Attached<Form> {
        self.fun("*", pair(a, b))
    }

    /// `(- a b)`
    fn minus(&self, a: impl Into<Term>, b: impl Into<Term>) -> Self::Attached<Form> {
        self.fun("-", pair(a, b))
    }

    /// `(> a b)`
    fn gt(&self, a: impl Into<Term>, b: impl Into<Term>) -> Self::Attached<Form> {
        self.fun(">", pair(a, b))
    }

    /// `(>= a b)`
    fn ge(&self, a: impl Into<Term>, b: impl Into<Term>) -> Self::Attached<Form> {
        self.fun(">=", pair(a, b))
    }

    /// `(= a b)`
    fn equals(&self, a: impl Into<Term>, b: impl Into<Term>) -> Self::Attached<Form> {
        self.fun("=", pair(a, b))
    }

    /// `(< a b)`
    fn lt(&self, a: impl Into<Term>, b: impl Into<Term>) -> Self::Attached<Form> {
        self.fun("<", pair(a, b))
    }

    /// `(<= a b)`
    fn le(&self, a: impl Into<Term>, b: impl Into<Term>) -> Self::Attached<Form> {
        self.fun("<=", pair(a, b))
    }

    /// Attaches a comment set apart by blank lines
    fn comment(&self, text: impl Into<String>) -> Self::Attached<CommentAtom> {
        self.attach(CommentAtom::new(text))
    }
}

impl LogicForm for Form {
    type Attached<T> = T;

    fn attach<T>(&self, child: T) -> T
    where
        T: Into<Term> + Clone,
    {
        self.add_child(child.clone());
        child
    }
}

/// On an [Expression] only the first constructor call succeeds
impl LogicForm for Expression {
    type Attached<T> = crate::Result<T>;

    fn attach<T>(&self, child: T) -> crate::Result<T>
    where
        T: Into<Term> + Clone,
    {
        self.add_child(child.clone())?;
        Ok(child)
    }
}
