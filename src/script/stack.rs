//! The data stack of a running script

use super::num;
use super::ScriptError;

/// LIFO of immutable byte-arrays
///
/// Items are boxed slices that are never mutated after being pushed;
/// duplicating an item copies it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Stack(Vec<Box<[u8]>>);

impl Stack {
    pub fn new() -> Stack {
        Stack(Vec::new())
    }

    /// Pops the top byte-array from the stack
    ///
    /// Returns a StackUnderflow if no items are available
    pub fn pop(&mut self) -> Result<Box<[u8]>, ScriptError> {
        self.0.pop().ok_or(ScriptError::StackUnderflow)
    }

    /// Pushes the given byte-array on the stack
    ///
    /// The stack has no size limit
    pub fn push(&mut self, data: Box<[u8]>) {
        self.0.push(data);
    }

    /// Pushes `n` in the single byte small-int encoding
    pub fn push_int(&mut self, n: i64) {
        self.push(num::encode_int(n));
    }

    pub fn push_bool(&mut self, value: bool) {
        self.push(num::encode_bool(value));
    }

    /// Returns the top item without popping it
    pub fn top(&self) -> Option<&[u8]> {
        self.0.last().map(|item| &item[..])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the items from bottom to top
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.0.iter().map(|item| &item[..])
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::script::ScriptError;

    #[test]
    fn test_push() {
        let mut stack = Stack::new();
        stack.push(Vec::new().into_boxed_slice());

        assert_eq!(1, stack.len());
        assert_eq!(Some(&[0u8; 0][..]), stack.top());
    }

    #[test]
    fn test_pop_order() {
        let mut stack = Stack::new();
        stack.push_int(1);
        stack.push(b"two".to_vec().into_boxed_slice());
        stack.push_bool(false);

        assert_eq!(&[0u8][..], &stack.pop().unwrap()[..]);
        assert_eq!(&b"two"[..], &stack.pop().unwrap()[..]);
        assert_eq!(&[1u8][..], &stack.pop().unwrap()[..]);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_empty() {
        let mut stack = Stack::new();
        assert_eq!(Err(ScriptError::StackUnderflow), stack.pop());

        stack.push_int(3);
        stack.pop().unwrap();
        assert_eq!(Err(ScriptError::StackUnderflow), stack.pop());
    }

    #[test]
    fn test_iter_bottom_to_top() {
        let mut stack = Stack::new();
        stack.push_int(1);
        stack.push_int(2);

        let items: Vec<&[u8]> = stack.iter().collect();
        assert_eq!(vec![&[1u8][..], &[2u8][..]], items);
        assert_eq!(Some(&[2u8][..]), stack.top());
    }
}
