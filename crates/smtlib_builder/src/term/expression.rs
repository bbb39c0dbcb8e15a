use std::{cell::RefCell, rc::Rc};

use crate::Error;

use super::Term;

/// A single-slot container for one top-level term (an assertion, an
/// objective...)
///
/// It adds nothing around its child when serialized, it only shifts the
/// child one level deeper.
#[derive(Debug, Clone, Default)]
pub struct Expression(Rc<RefCell<Option<Term>>>);

impl Expression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_child(&self, child: impl Into<Term>) -> crate::Result<()> {
        let mut slot = self.0.borrow_mut();
        if slot.is_some() {
            return Err(Error::OverfullExpression);
        }
        *slot = Some(child.into());
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_none()
    }

    pub fn serialize(&self, depth: usize) -> crate::Result<String> {
        self.0
            .borrow()
            .as_ref()
            .ok_or(Error::EmptyExpression)?
            .serialize(depth + 1, None)
    }
}
