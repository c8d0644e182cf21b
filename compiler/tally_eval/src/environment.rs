//! Lexically scoped environments.
//!
//! An [`Environment`] is one frame of bindings plus a shared link to the
//! frame it was created in. Function calls create a frame enclosed by the
//! callee's captured environment, so closures see the bindings visible where
//! they were defined, not where they are called.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::Value;

/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// All frame allocations go through [`LocalScope::new`]. The `Rc` makes every
/// environment `!Send`, which keeps a session on one thread.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

/// One frame of bindings.
pub struct Scope {
    bindings: FxHashMap<Rc<str>, Value>,
    outer: Option<Environment>,
}

impl Scope {
    fn new(outer: Option<Environment>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            outer,
        }
    }
}

// Bindings may hold closures over this very scope; list names only.
impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.bindings.keys().map(|name| &**name).collect();
        names.sort_unstable();
        f.debug_struct("Scope")
            .field("names", &names)
            .field("enclosed", &self.outer.is_some())
            .finish()
    }
}

/// Shared handle to a frame. Cloning shares the frame.
#[derive(Clone)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// A new top-level frame.
    pub fn new() -> Self {
        Environment(LocalScope::new(Scope::new(None)))
    }

    /// A new frame whose lookups fall back to `outer`.
    pub fn new_enclosed(outer: &Environment) -> Self {
        Environment(LocalScope::new(Scope::new(Some(outer.clone()))))
    }

    /// Look `name` up in this frame, then outward.
    pub fn get(&self, name: &str) -> Option<Value> {
        let mut frame = self.clone();
        loop {
            let outer = {
                let scope = frame.0.borrow();
                if let Some(value) = scope.bindings.get(name) {
                    return Some(value.clone());
                }
                scope.outer.clone()?
            };
            frame = outer;
        }
    }

    /// Bind `name` in this frame, shadowing any outer binding. Returns the
    /// stored value.
    pub fn set(&self, name: Rc<str>, value: Value) -> Value {
        self.0.borrow_mut().bindings.insert(name, value.clone());
        value
    }

    /// Whether both handles refer to the same frame.
    #[inline]
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment({:?})", &*self.0.borrow())
    }
}
