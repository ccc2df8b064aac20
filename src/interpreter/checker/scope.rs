use std::collections::HashMap;

use tracing::trace;

use crate::interpreter::checker::types::Type;

/// One lexical level of the checker's symbol table.
///
/// A variable maps to `None` when its type could not be determined; reads of
/// such a variable stay silent so one mistake is reported once.
#[derive(Debug, Default)]
struct Frame {
    symbols: HashMap<String, Option<Type>>,
    in_loop: bool,
}

/// A chain of frames, innermost last.
#[derive(Debug)]
pub struct Scope {
    frames: Vec<Frame>,
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Scope {
    /// Creates a scope holding only the global frame.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: vec![Frame::default()] }
    }

    /// Looks a variable up from the innermost frame outwards.
    ///
    /// The outer `Option` tells whether the name is declared at all, the
    /// inner one whether its type is known.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Option<Type>> {
        self.frames.iter().rev().find_map(|frame| frame.symbols.get(name))
    }

    /// Declares `name` in the innermost frame.
    pub fn declare(&mut self, name: &str, ty: Option<Type>) {
        if let Some(frame) = self.frames.last_mut() {
            frame.symbols.insert(name.to_string(), ty);
        }
    }

    /// Fills in the type of an already declared variable whose type was
    /// unknown. Declares it in the innermost frame if no frame has it.
    pub fn refine(&mut self, name: &str, ty: Option<Type>) {
        if let Some(slot) = self.frames
                                .iter_mut()
                                .rev()
                                .find_map(|frame| frame.symbols.get_mut(name))
        {
            if slot.is_none() {
                *slot = ty;
            }
        } else {
            self.declare(name, ty);
        }
    }

    /// Whether the innermost frame lies inside a loop body.
    #[must_use]
    pub fn in_loop(&self) -> bool {
        self.frames.last().is_some_and(|frame| frame.in_loop)
    }

    /// Forks a child frame. The child is a loop frame if `in_loop` is set or
    /// the current frame already is one.
    pub fn push(&mut self, in_loop: bool) {
        let in_loop = in_loop || self.in_loop();
        trace!(depth = self.frames.len(), in_loop, "checker: push frame");
        self.frames.push(Frame { symbols: HashMap::new(),
                                 in_loop });
    }

    /// Drops the innermost frame. The global frame is never removed.
    pub fn pop(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
            trace!(depth = self.frames.len(), "checker: pop frame");
        }
    }
}
