//! Navigation surface used by route guards.
//!
//! The router-backed implementation lives next to the guard component;
//! `MemoryHistory` is a self-contained back stack with browser-like
//! push/replace/back semantics.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::sync::{Mutex, MutexGuard, PoisonError};

pub trait Navigator {
    /// Path of the currently matched location.
    fn current_path(&self) -> String;

    /// Go to `path`, replacing the current history entry.
    fn redirect(&self, path: &str);
}

#[derive(Debug)]
struct Stack {
    entries: Vec<String>,
    cursor: usize,
}

/// In-memory browser history.
#[derive(Debug)]
pub struct MemoryHistory {
    stack: Mutex<Stack>,
}

impl MemoryHistory {
    pub fn new(initial: &str) -> Self {
        Self { stack: Mutex::new(Stack { entries: vec![initial.to_owned()], cursor: 0 }) }
    }

    /// Add a new entry after the current one, discarding any forward entries.
    pub fn push(&self, path: &str) {
        let mut stack = self.stack();
        let keep = stack.cursor + 1;
        stack.entries.truncate(keep);
        stack.entries.push(path.to_owned());
        stack.cursor = keep;
    }

    pub fn replace(&self, path: &str) {
        let mut stack = self.stack();
        let cursor = stack.cursor;
        stack.entries[cursor] = path.to_owned();
    }

    /// Step back one entry; `None` at the start of history.
    pub fn back(&self) -> Option<String> {
        let mut stack = self.stack();
        if stack.cursor == 0 {
            return None;
        }
        stack.cursor -= 1;
        Some(stack.entries[stack.cursor].clone())
    }

    /// Every entry, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.stack().entries.clone()
    }

    fn stack(&self) -> MutexGuard<'_, Stack> {
        self.stack.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Navigator for MemoryHistory {
    fn current_path(&self) -> String {
        let stack = self.stack();
        stack.entries[stack.cursor].clone()
    }

    fn redirect(&self, path: &str) {
        self.replace(path);
    }
}
