use std::fmt;

use crate::models::Status;

/// Projects an enum onto the payload of one of its cases and back.
pub struct CasePath<Root, Value> {
    extract: fn(&Root) -> Option<Value>,
    embed: fn(Value) -> Root,
}

impl<Root, Value> Clone for CasePath<Root, Value> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Root, Value> Copy for CasePath<Root, Value> {}

impl<Root, Value> fmt::Debug for CasePath<Root, Value> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CasePath").finish_non_exhaustive()
    }
}

impl<Root, Value> CasePath<Root, Value> {
    pub const fn new(extract: fn(&Root) -> Option<Value>, embed: fn(Value) -> Root) -> Self {
        Self { extract, embed }
    }

    pub fn extract(&self, root: &Root) -> Option<Value> {
        (self.extract)(root)
    }

    pub fn embed(&self, value: Value) -> Root {
        (self.embed)(value)
    }

    pub fn embedder(&self) -> fn(Value) -> Root {
        self.embed
    }

    pub fn matches(&self, root: &Root) -> bool {
        self.extract(root).is_some()
    }

    /// Edits the payload in place. Leaves `root` untouched and returns false
    /// when a different case is active.
    pub fn modify(&self, root: &mut Root, f: impl FnOnce(&mut Value)) -> bool {
        match self.extract(root) {
            Some(mut value) => {
                f(&mut value);
                *root = self.embed(value);
                true
            }
            None => false,
        }
    }
}

impl Status {
    pub const IN_STOCK: CasePath<Status, u32> = CasePath::new(
        |status| match status {
            Status::InStock { quantity } => Some(*quantity),
            _ => None,
        },
        |quantity| Status::InStock { quantity },
    );

    pub const OUT_OF_STOCK: CasePath<Status, bool> = CasePath::new(
        |status| match status {
            Status::OutOfStock { is_on_back_order } => Some(*is_on_back_order),
            _ => None,
        },
        |is_on_back_order| Status::OutOfStock { is_on_back_order },
    );
}
