//! A module for handling diagnostics emitted while scanning.

use std::cell::{Ref, RefCell};

/// Represents a trait responsible for handling diagnostics in the toolchain.
pub trait Handler<T> {
    /// Receives an error and handles it.
    fn receive(&self, error: T);
}

/// Is a struct that implements [`Handler`] trait by storing all errors in a vector.
///
/// Errors are kept in the order they were received. Nothing is deduplicated or dropped.
#[derive(Debug)]
pub struct Storage<T> {
    errors: RefCell<Vec<T>>,
}

impl<T> Storage<T> {
    /// Creates a new empty [`Storage`]
    #[must_use]
    pub fn new() -> Self {
        Self {
            errors: RefCell::new(Vec::new()),
        }
    }

    /// Consumes the [`Storage`] and returns the underlying vector of errors.
    pub fn into_vec(self) -> Vec<T> { self.errors.into_inner() }

    /// Returns a reference to the underlying vector of errors.
    pub fn as_vec(&self) -> Ref<Vec<T>> { self.errors.borrow() }

    /// Returns the number of errors received so far.
    pub fn len(&self) -> usize { self.errors.borrow().len() }

    /// Checks whether no error has been received.
    pub fn is_empty(&self) -> bool { self.errors.borrow().is_empty() }
}

impl<T> Default for Storage<T> {
    fn default() -> Self { Self::new() }
}

impl<T, U> Handler<U> for Storage<T>
where
    U: Into<T>,
{
    fn receive(&self, error: U) { self.errors.borrow_mut().push(error.into()); }
}

#[cfg(test)]
mod tests;
