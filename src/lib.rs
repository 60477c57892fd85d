// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A last-in-first-out stack with a capacity fixed at construction time.
//!
//! [`BoundedStack`][BoundedStack] allocates room for exactly as many
//! elements as you ask for, once, and never reallocates. Running out of room
//! isn't a panic and isn't a silent drop: [`push()`][push] returns
//! [`StackError::Overflow`][Overflow], and likewise [`pop()`][pop] and
//! [`peek()`][peek] return [`StackError::Underflow`][Underflow] when there's
//! nothing to take. A failed operation never changes the stack.
//!
//! # Usage
//!
//! ```rust
//! # use fixstack::{BoundedStack, StackError};
//! let mut stack = BoundedStack::new(2);
//! stack.push('a')?;
//! stack.push('b')?;
//! assert!(stack.is_full());
//! assert_eq!(Err(StackError::Overflow), stack.push('c'));
//!
//! assert_eq!(Ok(&'b'), stack.peek());
//! assert_eq!(Some(0), stack.linear_search(&'a'));
//! assert_eq!("{a, b}", stack.display());
//!
//! assert_eq!(Ok('b'), stack.pop());
//! assert_eq!(Ok('a'), stack.pop());
//! assert_eq!(Err(StackError::Underflow), stack.pop());
//! # Ok::<(), StackError>(())
//! ```
//!
//! # Capacity
//!
//! Capacities are `usize`, so [`BoundedStack::new()`][new] can't be handed a
//! negative one. If your capacity comes from a signed integer, use
//! [`BoundedStack::try_new()`][try_new], which returns
//! [`StackError::InvalidCapacity`][InvalidCapacity] for values that don't
//! fit. A capacity of zero is valid, and gives you a stack which is always
//! both empty and full.
//!
//! # Equality
//!
//! [`linear_search()`][linear_search] compares elements by value, using
//! their [`PartialEq`][PartialEq] implementation, and reports the match
//! closest to the bottom of the stack.
//!
//! # Thread Safety
//!
//! `BoundedStack` does no locking of its own. It's [`Send`][Send] and
//! [`Sync`][Sync] whenever its element type is, so you can move it between
//! threads or wrap it in a [`Mutex`][Mutex], but mutating it from several
//! threads at once is up to you to coordinate.
//!
//! # Logging
//!
//! Rejected operations are reported at `trace` level, and rejected
//! capacities at `debug` level, through the [`log`][log] facade. Nothing is
//! logged unless your program installs a logger.
//!
//! [BoundedStack]: struct.BoundedStack.html
//! [new]: struct.BoundedStack.html#method.new
//! [try_new]: struct.BoundedStack.html#method.try_new
//! [push]: struct.BoundedStack.html#method.push
//! [pop]: struct.BoundedStack.html#method.pop
//! [peek]: struct.BoundedStack.html#method.peek
//! [linear_search]: struct.BoundedStack.html#method.linear_search
//! [Overflow]: enum.StackError.html#variant.Overflow
//! [Underflow]: enum.StackError.html#variant.Underflow
//! [InvalidCapacity]: enum.StackError.html#variant.InvalidCapacity
//! [PartialEq]: https://doc.rust-lang.org/std/cmp/trait.PartialEq.html
//! [Send]: https://doc.rust-lang.org/std/marker/trait.Send.html
//! [Sync]: https://doc.rust-lang.org/std/marker/trait.Sync.html
//! [Mutex]: https://doc.rust-lang.org/std/sync/struct.Mutex.html
//! [log]: https://docs.rs/log

#![forbid(rust_2018_idioms)]
#![deny(nonstandard_style)]
#![warn(unreachable_pub, missing_docs, missing_debug_implementations)]

mod error;
mod stack;

pub use self::error::StackError;
pub use self::stack::BoundedStack;

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct DropTest<'a> {
        counter: &'a AtomicUsize,
    }

    impl<'a> DropTest<'a> {
        fn new(counter: &'a AtomicUsize) -> Self {
            counter.fetch_add(1, Ordering::Relaxed);
            DropTest { counter }
        }
    }

    impl<'a> Drop for DropTest<'a> {
        fn drop(&mut self) {
            self.counter.fetch_sub(1, Ordering::Relaxed);
        }
    }

    fn fill_drop(capacity: usize, push_count: usize) {
        let counter = AtomicUsize::new(0);
        {
            let mut stack: BoundedStack<DropTest<'_>> = BoundedStack::new(capacity);
            for _ in 0..push_count {
                let _ = stack.push(DropTest::new(&counter));
            }
            assert_eq!(push_count.min(capacity), counter.load(Ordering::SeqCst));
        }
        assert_eq!(0, counter.load(Ordering::SeqCst));
    }

    #[test]
    fn dropping_full() {
        fill_drop(1024, 1024);
    }

    #[test]
    fn dropping_partial() {
        fill_drop(1024, 100);
    }

    #[test]
    fn dropping_overflowed() {
        fill_drop(16, 2048);
    }

    #[test]
    fn dropping_null() {
        fill_drop(0, 128);
    }

    #[test]
    fn popped_values_belong_to_caller() {
        let counter = AtomicUsize::new(0);
        let mut stack = BoundedStack::new(8);
        for _ in 0..8 {
            stack.push(DropTest::new(&counter)).unwrap();
        }
        let mut popped = Vec::new();
        for _ in 0..5 {
            popped.push(stack.pop().unwrap());
        }
        assert_eq!(8, counter.load(Ordering::SeqCst));
        drop(stack);
        assert_eq!(5, counter.load(Ordering::SeqCst));
        popped.clear();
        assert_eq!(0, counter.load(Ordering::SeqCst));
    }

    #[test]
    fn try_push_hands_back_without_dropping() {
        let counter = AtomicUsize::new(0);
        let mut stack = BoundedStack::new(1);
        stack.push(DropTest::new(&counter)).unwrap();
        let rejected = match stack.try_push(DropTest::new(&counter)) {
            Err(rejected) => rejected,
            Ok(()) => panic!("push onto a full stack succeeded"),
        };
        assert_eq!(2, counter.load(Ordering::SeqCst));
        drop(rejected);
        assert_eq!(1, counter.load(Ordering::SeqCst));
    }

    #[test]
    fn stack_is_send_and_sync_for_send_and_sync_elements() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BoundedStack<usize>>();
        assert_send_sync::<BoundedStack<String>>();
    }
}
