// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Errors returned by [`BoundedStack`][BoundedStack] operations.
///
/// None of these indicate a corrupted stack: the operation that returned
/// the error left the stack exactly as it found it, so it's always safe to
/// try again once the condition has changed.
///
/// [BoundedStack]: struct.BoundedStack.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum StackError {
    /// A push was attempted on a stack with no free slots.
    #[error("stack is full, cannot push element")]
    Overflow,
    /// A pop or a peek was attempted on a stack with no elements.
    #[error("stack is empty, cannot pop or peek")]
    Underflow,
    /// The requested capacity was negative or too large to allocate.
    #[error("stack capacity must be a non-negative integer small enough to allocate")]
    InvalidCapacity,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            "stack is full, cannot push element",
            StackError::Overflow.to_string()
        );
        assert_eq!(
            "stack is empty, cannot pop or peek",
            StackError::Underflow.to_string()
        );
        assert!(StackError::InvalidCapacity
            .to_string()
            .starts_with("stack capacity"));
    }

    #[test]
    fn is_a_std_error() {
        fn boxed(err: StackError) -> Box<dyn std::error::Error + Send + Sync> {
            Box::new(err)
        }
        assert_eq!(
            StackError::Overflow.to_string(),
            boxed(StackError::Overflow).to_string()
        );
    }
}
