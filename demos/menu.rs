// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Numbered command menu for poking at a `BoundedStack<i64>`.
//!
//! Run with `cargo run --example menu`, and set
//! `RUST_LOG=fixstack=trace` to see rejected operations logged.

use std::io::{self, BufRead, Write};

use fixstack::BoundedStack;

const COMMANDS: &str = "[COMMANDS]
0 - help
1 - new <capacity>
2 - display
3 - size
4 - isempty
5 - push <element>
6 - pop
7 - peek
8 - search <element>
9 - isfull
q - quit";

const MISSING_STACK: &str = "Stack cannot be found. Create one with `1 <capacity>`.";

struct Menu {
    stack: Option<BoundedStack<i64>>,
}

impl Menu {
    fn new() -> Self {
        Menu { stack: None }
    }

    /// Run one command line, returning `false` when the user asked to quit.
    fn eval(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let mut words = line.split_whitespace();
        let command = match words.next() {
            Some(command) => command,
            None => return Ok(true),
        };
        let argument = words.next();

        match command {
            "q" | "quit" => return Ok(false),
            "0" => writeln!(out, "{}", COMMANDS)?,
            "1" => match argument.map(str::parse::<i64>) {
                Some(Ok(capacity)) => match BoundedStack::try_new(capacity) {
                    Ok(stack) => {
                        writeln!(
                            out,
                            "Successfully created stack with the size of [{}].",
                            capacity
                        )?;
                        self.stack = Some(stack);
                    }
                    Err(err) => writeln!(out, "Invalid input: {}.", err)?,
                },
                _ => writeln!(out, "Invalid input: Expected an integer capacity.")?,
            },
            "5" | "8" => match argument.map(str::parse::<i64>) {
                Some(Ok(element)) => self.with_element(command, element, out)?,
                _ => writeln!(out, "Invalid input: Expected an integer.")?,
            },
            "2" | "3" | "4" | "6" | "7" | "9" => self.inspect(command, out)?,
            _ => writeln!(out, "Command not found.")?,
        }
        Ok(true)
    }

    fn with_element(
        &mut self,
        command: &str,
        element: i64,
        out: &mut impl Write,
    ) -> io::Result<()> {
        let stack = match self.stack.as_mut() {
            Some(stack) => stack,
            None => return writeln!(out, "{}", MISSING_STACK),
        };
        if command == "5" {
            match stack.push(element) {
                Ok(()) => writeln!(out, "Successfully added element [{}] to stack.", element),
                Err(err) => writeln!(out, "Failed to push element: {}.", err),
            }
        } else {
            match stack.linear_search(&element) {
                Some(index) => writeln!(
                    out,
                    "Element [{}] was found at index [{}].",
                    element, index
                ),
                None => writeln!(out, "Element [{}] was not found.", element),
            }
        }
    }

    fn inspect(&mut self, command: &str, out: &mut impl Write) -> io::Result<()> {
        let stack = match self.stack.as_mut() {
            Some(stack) => stack,
            None => return writeln!(out, "{}", MISSING_STACK),
        };
        match command {
            "2" => writeln!(out, "{}", stack.display()),
            "3" => writeln!(out, "{}", stack.capacity()),
            "4" => writeln!(out, "{}", stack.is_empty()),
            "9" => writeln!(out, "{}", stack.is_full()),
            "6" => match stack.pop() {
                Ok(element) => writeln!(out, "Popped element: {}", element),
                Err(err) => writeln!(out, "Failed to pop an element: {}.", err),
            },
            _ => match stack.peek() {
                Ok(element) => writeln!(out, "Peeked element: {}", element),
                Err(err) => writeln!(out, "Failed to peek an element: {}.", err),
            },
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut menu = Menu::new();

    writeln!(out, "{}", COMMANDS)?;
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if !menu.eval(&line, &mut out)? {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn run(script: &[&str]) -> String {
        let mut menu = Menu::new();
        let mut out = Vec::new();
        for line in script {
            menu.eval(line, &mut out).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn overflow_scenario() {
        let output = run(&["1 3", "5 10", "5 20", "5 30", "5 40", "6", "5 40", "2"]);
        assert!(output.contains("Failed to push element: stack is full"));
        assert!(output.contains("Popped element: 30"));
        assert!(output.ends_with("{10, 20, 40}\n"));
    }

    #[test]
    fn rejects_negative_capacity() {
        let output = run(&["1 -4", "2"]);
        assert!(output.starts_with("Invalid input: stack capacity"));
        assert!(output.contains("Stack cannot be found"));
    }

    #[test]
    fn rejects_unallocatable_capacity() {
        let output = run(&["1 9223372036854775807", "3"]);
        assert!(output.starts_with("Invalid input: stack capacity"));
        assert!(output.contains("Stack cannot be found"));
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut menu = Menu::new();
        let mut out = Vec::new();
        assert!(menu.eval("", &mut out).unwrap());
        assert!(!menu.eval("q", &mut out).unwrap());
    }
}
