use std::{cell::RefCell, rc::Rc};

use itertools::Itertools;

use crate::Error;

use super::Term;

/// Past this many characters a form with several children is laid out one
/// child per line
pub const MAX_LINE_WIDTH: usize = 80;

/// An application `(name child1 child2 ...)`
///
/// This is a handle: clones share the same node. Children can only be
/// appended, never removed or reordered.
#[derive(Debug, Clone, Default)]
pub struct Form(Rc<RefCell<InnerForm>>);

#[derive(Debug, Default)]
struct InnerForm {
    name: Option<String>,
    children: Vec<Term>,
}

impl Form {
    pub fn new<T: Into<Term>>(name: impl Into<String>, children: impl IntoIterator<Item = T>) -> Self {
        Self(Rc::new(RefCell::new(InnerForm {
            name: Some(name.into()),
            children: children.into_iter().map_into().collect(),
        })))
    }

    /// An unnamed form, only meant to hang builder calls from
    ///
    /// It can't be serialized, see [crate::logic].
    pub fn stub() -> Self {
        Self::default()
    }

    pub fn add_child(&self, child: impl Into<Term>) {
        self.0.borrow_mut().children.push(child.into())
    }

    pub fn name(&self) -> Option<String> {
        self.0.borrow().name.clone()
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.0.borrow().name.as_deref() == Some(name)
    }

    pub fn len(&self) -> usize {
        self.0.borrow().children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().children.is_empty()
    }

    /// `true` if both handles point to the same node
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn serialize(&self, depth: usize, spaced: Option<bool>) -> crate::Result<String> {
        let inner = self.0.borrow();
        let name = inner.name.as_deref().ok_or(Error::UnnamedForm)?;

        match inner.children.as_slice() {
            [] => Ok(format!("({name})")),
            [child] => Ok(format!("({name} {})", child.serialize(depth + 1, None)?)),
            children if spaced == Some(true) => {
                let indent = " ".repeat(depth * 2);
                let mut result = format!("({name}\n");
                for child in children {
                    result.push_str(&indent);
                    result.push_str(&child.serialize(depth + 1, None)?);
                    result.push('\n');
                }
                result.push(')');
                Ok(result)
            }
            children => {
                let children = children
                    .iter()
                    .map(|child| child.serialize(depth + 1, None))
                    .collect::<crate::Result<Vec<_>>>()?;
                let result = format!("({name} {})", children.iter().join(" "));

                // a child already spanning several lines keeps the parent as it is
                if spaced.is_none()
                    && !result.contains('\n')
                    && result.chars().count() > MAX_LINE_WIDTH
                {
                    self.serialize(depth, Some(true))
                } else {
                    Ok(result)
                }
            }
        }
    }
}
