// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::convert::TryInto;
use std::fmt::{Debug, Display, Error, Formatter};
use std::mem::MaybeUninit;

use log::{debug, trace};

use crate::error::StackError;

/// A last-in-first-out stack which can never hold more than a fixed number
/// of elements.
///
/// The backing store is allocated once, at construction, and never grows or
/// shrinks. Pushing onto a full stack fails with
/// [`StackError::Overflow`][StackError::Overflow], and popping or peeking an
/// empty stack fails with [`StackError::Underflow`][StackError::Underflow].
/// Neither failure changes the stack.
///
/// # Example
///
/// ```rust
/// # use fixstack::{BoundedStack, StackError};
/// let mut stack = BoundedStack::new(3);
/// stack.push(10)?;
/// stack.push(20)?;
/// stack.push(30)?;
/// assert_eq!(Err(StackError::Overflow), stack.push(40));
/// assert_eq!(Ok(30), stack.pop());
/// stack.push(40)?;
/// assert_eq!("{10, 20, 40}", stack.display());
/// # Ok::<(), StackError>(())
/// ```
///
/// [StackError::Overflow]: enum.StackError.html#variant.Overflow
/// [StackError::Underflow]: enum.StackError.html#variant.Underflow
pub struct BoundedStack<A> {
    len: usize,
    data: Box<[MaybeUninit<A>]>,
}

impl<A> BoundedStack<A> {
    /// Construct an empty stack which can hold up to `capacity` elements.
    ///
    /// A capacity of `0` is allowed. The resulting stack is permanently both
    /// empty and full: every push overflows and every pop underflows.
    ///
    /// # Panics
    ///
    /// Panics if the backing store can't be allocated, either because
    /// `capacity` elements of `A` would exceed `isize::MAX` bytes or because
    /// the allocator fails. Use [`try_new()`][try_new] to get an error
    /// instead.
    ///
    /// [try_new]: #method.try_new
    pub fn new(capacity: usize) -> Self {
        Self {
            len: 0,
            data: std::iter::repeat_with(MaybeUninit::uninit)
                .take(capacity)
                .collect(),
        }
    }

    /// Construct an empty stack from a capacity of any integer type.
    ///
    /// Fails with [`StackError::InvalidCapacity`][InvalidCapacity] if
    /// `capacity` is negative, can't be represented as a `usize`, or is too
    /// large for the backing store to be allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fixstack::{BoundedStack, StackError};
    /// let stack: BoundedStack<u8> = BoundedStack::try_new(16i32)?;
    /// assert_eq!(16, stack.capacity());
    ///
    /// let invalid = BoundedStack::<u8>::try_new(-1i32);
    /// assert_eq!(Some(StackError::InvalidCapacity), invalid.err());
    ///
    /// let huge = BoundedStack::<u64>::try_new(usize::MAX);
    /// assert_eq!(Some(StackError::InvalidCapacity), huge.err());
    /// # Ok::<(), StackError>(())
    /// ```
    ///
    /// [InvalidCapacity]: enum.StackError.html#variant.InvalidCapacity
    pub fn try_new<C>(capacity: C) -> Result<Self, StackError>
    where
        C: TryInto<usize>,
    {
        let capacity = match TryInto::<usize>::try_into(capacity) {
            Ok(capacity) => capacity,
            Err(_) => {
                debug!("rejecting stack capacity which does not fit in usize");
                return Err(StackError::InvalidCapacity);
            }
        };
        let mut data: Vec<MaybeUninit<A>> = Vec::new();
        if data.try_reserve_exact(capacity).is_err() {
            debug!("rejecting stack capacity {}, allocation failed", capacity);
            return Err(StackError::InvalidCapacity);
        }
        data.resize_with(capacity, MaybeUninit::uninit);
        Ok(Self {
            len: 0,
            data: data.into_boxed_slice(),
        })
    }

    /// Get the maximum number of elements the stack can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Get the number of elements currently on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Test if the stack holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Test if the stack has no free slots left.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Get the index of the top element, counting from the bottom of the
    /// stack, or `None` if the stack is empty.
    #[inline]
    pub fn top_index(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    /// Push a value onto the top of the stack.
    ///
    /// If the stack is full, the value is dropped and
    /// [`StackError::Overflow`][Overflow] is returned. Use
    /// [`try_push()`][try_push] if you need the value back.
    ///
    /// [Overflow]: enum.StackError.html#variant.Overflow
    /// [try_push]: #method.try_push
    pub fn push(&mut self, value: A) -> Result<(), StackError> {
        self.try_push(value).map_err(|_| StackError::Overflow)
    }

    /// Push a value onto the top of the stack, handing it back if the stack
    /// is full.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fixstack::BoundedStack;
    /// let mut stack = BoundedStack::new(1);
    /// assert_eq!(Ok(()), stack.try_push("first".to_string()));
    /// assert_eq!(Err("second".to_string()), stack.try_push("second".to_string()));
    /// ```
    pub fn try_push(&mut self, value: A) -> Result<(), A> {
        if self.is_full() {
            trace!(
                "push rejected, stack is full ({}/{})",
                self.len,
                self.capacity()
            );
            return Err(value);
        }
        self.data[self.len] = MaybeUninit::new(value);
        self.len += 1;
        Ok(())
    }

    /// Remove the top element from the stack and return it.
    ///
    /// Returns [`StackError::Underflow`][Underflow] if the stack is empty.
    ///
    /// [Underflow]: enum.StackError.html#variant.Underflow
    pub fn pop(&mut self) -> Result<A, StackError> {
        if self.is_empty() {
            trace!("pop rejected, stack is empty (0/{})", self.capacity());
            return Err(StackError::Underflow);
        }
        self.len -= 1;
        // The slot at the old top was initialised by `try_push`, and
        // decrementing `len` first means it will never be read again.
        Ok(unsafe { self.data[self.len].as_ptr().read() })
    }

    /// Get a reference to the top element without removing it.
    ///
    /// Returns [`StackError::Underflow`][Underflow] if the stack is empty.
    ///
    /// [Underflow]: enum.StackError.html#variant.Underflow
    pub fn peek(&self) -> Result<&A, StackError> {
        match self.occupied().last() {
            Some(top) => Ok(top),
            None => {
                trace!("peek rejected, stack is empty (0/{})", self.capacity());
                Err(StackError::Underflow)
            }
        }
    }

    /// Find the lowest index, counting from the bottom of the stack, holding
    /// a value equal to `value`.
    ///
    /// Equality is value equality as defined by `A`'s
    /// [`PartialEq`][PartialEq] implementation, not identity. Returns `None`
    /// if no element matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fixstack::BoundedStack;
    /// let mut stack = BoundedStack::new(4);
    /// for word in &["bottom", "middle", "bottom", "top"] {
    ///     stack.push(word.to_string()).unwrap();
    /// }
    /// assert_eq!(Some(0), stack.linear_search(&"bottom".to_string()));
    /// assert_eq!(Some(3), stack.linear_search(&"top".to_string()));
    /// assert_eq!(None, stack.linear_search(&"nowhere".to_string()));
    /// ```
    ///
    /// [PartialEq]: https://doc.rust-lang.org/std/cmp/trait.PartialEq.html
    pub fn linear_search(&self, value: &A) -> Option<usize>
    where
        A: PartialEq,
    {
        self.occupied().iter().position(|item| item == value)
    }

    /// Render the stack's elements from bottom to top, as `{1, 2, 3}`.
    ///
    /// An empty stack renders as `{}`. This is the same text as the
    /// stack's [`Display`][Display] implementation produces.
    ///
    /// [Display]: https://doc.rust-lang.org/std/fmt/trait.Display.html
    pub fn display(&self) -> String
    where
        A: Display,
    {
        self.to_string()
    }

    fn occupied(&self) -> &[A] {
        // Every slot below `len` has been written by `try_push` and not yet
        // moved out by `pop`.
        unsafe { std::slice::from_raw_parts(self.data.as_ptr().cast::<A>(), self.len) }
    }
}

impl<A> Drop for BoundedStack<A> {
    fn drop(&mut self) {
        if std::mem::needs_drop::<A>() {
            let len = self.len;
            let data = self.data.as_mut_ptr().cast::<A>();
            unsafe {
                std::ptr::drop_in_place(std::slice::from_raw_parts_mut(data, len));
            }
        }
    }
}

impl<A: Display> Display for BoundedStack<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{{")?;
        for (index, item) in self.occupied().iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "}}")
    }
}

impl<A: Debug> Debug for BoundedStack<A> {
    /// Debug implementation for `BoundedStack`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fixstack::BoundedStack;
    /// let mut stack = BoundedStack::new(4);
    /// stack.push(1).unwrap();
    /// stack.push(2).unwrap();
    /// assert_eq!("BoundedStack[2/4][1, 2]", format!("{:?}", stack));
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "BoundedStack[{}/{}]", self.len, self.capacity())?;
        f.debug_list().entries(self.occupied()).finish()
    }
}
