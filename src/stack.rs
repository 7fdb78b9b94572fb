use std::fmt;
use std::ptr::NonNull;

use log::trace;

use crate::error::EmptyContainerError;

struct Node<T> {
    value: T,
    // Owns every node pushed before this one.
    previous: Option<Box<Node<T>>>,
    // Back-link to the node pushed right after this one. Compared, never dereferenced.
    next: Option<NonNull<Node<T>>>,
}

/// A last-in-first-out stack over a doubly-linked chain of boxed nodes.
///
/// The stack owns its top node, and each node owns the one pushed before it,
/// so dropping the stack releases the whole chain. `pop` and `top` return
/// [`EmptyContainerError`] instead of a sentinel when there is nothing to
/// return.
///
/// ```
/// use lifo_stack::{EmptyContainerError, Stack};
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.top(), Ok(&2));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// assert_eq!(stack.pop(), Err(EmptyContainerError::Pop));
/// ```
pub struct Stack<T> {
    top_node: Option<Box<Node<T>>>,
    length: usize,
}

// SAFETY: `next` pointers only ever point into the chain owned by the same
// stack and are never dereferenced, so the stack is as thread-safe as a
// `Box<T>` chain.
unsafe impl<T: Send> Send for Stack<T> {}
unsafe impl<T: Sync> Sync for Stack<T> {}

impl<T> Stack<T> {
    pub const fn new() -> Self {
        Stack {
            top_node: None,
            length: 0,
        }
    }

    pub fn push(&mut self, value: T) {
        let mut node = Box::new(Node {
            value,
            previous: self.top_node.take(),
            next: None,
        });

        // The boxed node keeps its address when the box itself moves.
        let link = NonNull::from(&mut *node);
        if let Some(previous) = node.previous.as_mut() {
            previous.next = Some(link);
        }

        self.top_node = Some(node);
        self.length += 1;
        trace!("push: length is now {}", self.length);
    }

    pub fn pop(&mut self) -> Result<T, EmptyContainerError> {
        let node = self.top_node.take().ok_or(EmptyContainerError::Pop)?;
        let Node {
            value,
            mut previous,
            ..
        } = *node;

        if let Some(new_top) = previous.as_mut() {
            new_top.next = None;
        }

        self.top_node = previous;
        self.length -= 1;
        trace!("pop: length is now {}", self.length);
        Ok(value)
    }

    pub fn top(&self) -> Result<&T, EmptyContainerError> {
        self.top_node
            .as_deref()
            .map(|node| &node.value)
            .ok_or(EmptyContainerError::Top)
    }

    pub fn top_mut(&mut self) -> Result<&mut T, EmptyContainerError> {
        self.top_node
            .as_deref_mut()
            .map(|node| &mut node.value)
            .ok_or(EmptyContainerError::Top)
    }

    /// Number of elements currently on the stack, in O(1).
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.top_node.is_none()
    }

    /// Counts the nodes by walking the `previous` chain from the top.
    ///
    /// Always equal to [`Stack::length`]; in debug builds the walk also
    /// asserts that every node's back-link points at the node above it.
    pub fn count_nodes(&self) -> usize {
        let mut count = 0;
        let mut above: Option<NonNull<Node<T>>> = None;
        let mut current = self.top_node.as_deref();

        while let Some(node) = current {
            debug_assert_eq!(node.next, above, "broken back-link at depth {}", count);
            above = Some(NonNull::from(node));
            count += 1;
            current = node.previous.as_deref();
        }

        count
    }

    /// Drops every element, leaving the stack empty.
    pub fn clear(&mut self) {
        // Unlink one node at a time so a long chain is not dropped recursively.
        let mut current = self.top_node.take();
        while let Some(mut node) = current {
            current = node.previous.take();
        }
        self.length = 0;
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn new_stack_is_empty() {
        let mut stack: Stack<i32> = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.length(), 0);
        assert_eq!(stack.count_nodes(), 0);
        assert_eq!(stack.top(), Err(EmptyContainerError::Top));
        assert_eq!(stack.pop(), Err(EmptyContainerError::Pop));
        assert_eq!(stack.length(), 0);
    }

    #[test]
    fn links_stay_consistent() {
        let mut stack = Stack::new();
        for i in 0..10 {
            stack.push(i);
            assert_eq!(stack.count_nodes(), stack.length());
        }
        for _ in 0..4 {
            stack.pop().unwrap();
            assert_eq!(stack.count_nodes(), stack.length());
        }
        stack.push(42);
        assert_eq!(stack.count_nodes(), 7);
        assert_eq!(stack.length(), 7);
    }

    #[test]
    fn top_node_back_link_cleared_on_pop() {
        let mut stack = Stack::new();
        stack.push("a");
        stack.push("b");
        stack.pop().unwrap();

        let top = stack.top_node.as_deref().unwrap();
        assert!(top.next.is_none());
        assert!(top.previous.is_none());
    }

    #[test]
    fn top_mut_edits_in_place() {
        let mut stack = Stack::new();
        assert_eq!(stack.top_mut(), Err(EmptyContainerError::Top));

        stack.push(String::from("a"));
        stack.top_mut().unwrap().push('b');
        assert_eq!(stack.top().map(String::as_str), Ok("ab"));
        assert_eq!(stack.length(), 1);
    }

    #[test]
    fn clear_resets_and_allows_reuse() {
        let mut stack = Stack::new();
        stack.extend(0..100);
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.length(), 0);
        assert_eq!(stack.pop(), Err(EmptyContainerError::Pop));

        stack.push(7);
        assert_eq!(stack.pop(), Ok(7));
    }

    #[test]
    fn every_value_released_once() {
        let tracker = Rc::new(());
        let mut stack = Stack::new();
        for _ in 0..50 {
            stack.push(Rc::clone(&tracker));
        }
        assert_eq!(Rc::strong_count(&tracker), 51);

        drop(stack.pop().unwrap());
        assert_eq!(Rc::strong_count(&tracker), 50);

        drop(stack);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn debug_shows_length_only() {
        let mut stack = Stack::new();
        stack.extend([1, 2, 3]);
        assert_eq!(format!("{:?}", stack), "Stack { length: 3, .. }");
    }
}
