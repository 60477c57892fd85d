#![no_main]
use arbitrary::Arbitrary;
use fixstack::{BoundedStack, StackError};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Action {
    Push(String),
    TryPush(String),
    Pop,
    Peek,
    Search(usize),
    Display,
}

use self::Action::*;

fuzz_target!(|input: (u8, Vec<Action>)| {
    let capacity = input.0 as usize;
    let actions = input.1;
    let mut stack = BoundedStack::new(capacity);
    let mut model: Vec<String> = Vec::new();
    for action in actions {
        match action {
            Push(data) => {
                if model.len() < capacity {
                    model.push(data.clone());
                    assert_eq!(Ok(()), stack.push(data));
                } else {
                    assert_eq!(Err(StackError::Overflow), stack.push(data));
                }
            }
            TryPush(data) => {
                if model.len() < capacity {
                    model.push(data.clone());
                    assert_eq!(Ok(()), stack.try_push(data));
                } else {
                    assert_eq!(Err(data.clone()), stack.try_push(data));
                }
            }
            Pop => match model.pop() {
                Some(data) => assert_eq!(Ok(data), stack.pop()),
                None => assert_eq!(Err(StackError::Underflow), stack.pop()),
            },
            Peek => match model.last() {
                Some(data) => assert_eq!(Ok(data), stack.peek()),
                None => assert_eq!(Err(StackError::Underflow), stack.peek()),
            },
            Search(index) => {
                if !model.is_empty() {
                    let needle = &model[index % model.len()];
                    let expected = model.iter().position(|data| data == needle);
                    assert_eq!(expected, stack.linear_search(needle));
                }
            }
            Display => {
                assert_eq!(format!("{{{}}}", model.join(", ")), stack.display());
            }
        }
        assert_eq!(model.len(), stack.len());
        assert_eq!(model.len() == capacity, stack.is_full());
    }
});
