/// Builds a `Vec<Term>` out of anything convertible into a [Term]
///
/// Arguments of different types can be mixed, which arrays can't do.
///
/// # Example
/// ```
/// # use smtlib_builder::{terms, Form};
/// let f = Form::new("+", terms![1, "x", Form::new("*", terms![2, "y"])]);
/// assert_eq!(f.serialize(0, None).unwrap(), "(+ 1 x (* 2 y))");
/// ```
///
/// [Term]: crate::Term
#[macro_export]
macro_rules! terms {
    ($($arg:expr),* $(,)?) => {{
        let terms: ::std::vec::Vec<$crate::Term> = ::std::vec![$($crate::Term::from($arg)),*];
        terms
    }};
}
