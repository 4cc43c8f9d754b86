use crate::error::{Error, Result};

use log::{debug, trace};

/// A last-in-first-out container.
pub trait Stack<T> {
    /// Place `value` on top of the stack.
    fn push(&mut self, value: T) -> Result<()>;

    /// Remove and return the top value.
    fn pop(&mut self) -> Result<T>;

    /// Borrow the top value without removing it.
    fn peek(&self) -> Result<&T>;

    fn capacity(&self) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }
}

/// Stack holding at most `capacity` values, fixed when it is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedStack<T> {
    store: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::invalid("stack capacity must be greater than zero"));
        }

        debug!("new bounded stack, capacity {}", capacity);

        Ok(Self {
            store: Vec::with_capacity(capacity),
            capacity,
        })
    }

    /// Build a stack from a signed capacity, as read from the command line.
    pub fn with_signed_capacity(capacity: i64) -> Result<Self> {
        let capacity = usize::try_from(capacity).map_err(|_| {
            Error::invalid(format!(
                "stack capacity must be greater than zero, got {}",
                capacity
            ))
        })?;

        Self::new(capacity)
    }
}

impl<T> Stack<T> for BoundedStack<T> {
    fn push(&mut self, value: T) -> Result<()> {
        if self.store.len() >= self.capacity {
            trace!("push rejected: stack full at {}", self.capacity);
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.store.push(value);

        Ok(())
    }

    fn pop(&mut self) -> Result<T> {
        self.store.pop().ok_or(Error::EmptyContainer)
    }

    fn peek(&self) -> Result<&T> {
        self.store.last().ok_or(Error::EmptyContainer)
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.store.len()
    }
}
