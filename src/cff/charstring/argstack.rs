// This file is derived from ttf-parser, licenced under Apache-2.0.
// https://github.com/RazrFalcon/ttf-parser/blob/439aaaebd50eb8aed66302e3c1b51fae047f85b2/src/tables/cff/argstack.rs

use std::fmt;

use super::{GlyphError, MAX_ARGUMENTS_STACK_LEN};

/// Storage for the operands of a charstring operator.
///
/// Operators consume their operands in the order they were pushed, so values are taken from the
/// front with `shift`. Only subroutine calls take their operand from the back with `pop`.
#[derive(Clone)]
pub struct ArgumentsStack {
    data: [f32; MAX_ARGUMENTS_STACK_LEN],
    start: usize,
    end: usize,
}

impl ArgumentsStack {
    pub fn new() -> Self {
        ArgumentsStack {
            data: [0.0; MAX_ARGUMENTS_STACK_LEN],
            start: 0,
            end: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn push(&mut self, n: f32) -> Result<(), GlyphError> {
        if self.len() == MAX_ARGUMENTS_STACK_LEN {
            return Err(GlyphError::ArgumentsStackLimitReached);
        }

        if self.end == MAX_ARGUMENTS_STACK_LEN {
            self.data.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
        }
        self.data[self.end] = n;
        self.end += 1;
        Ok(())
    }

    /// Returns the operand at `index`, counting from the oldest.
    ///
    /// Callers check the length of the stack before indexing.
    pub fn at(&self, index: usize) -> f32 {
        self.all()[index]
    }

    /// Remove the oldest operand.
    pub fn shift(&mut self) -> Result<f32, GlyphError> {
        if self.is_empty() {
            return Err(GlyphError::StackUnderflow);
        }

        let n = self.data[self.start];
        self.start += 1;
        Ok(n)
    }

    /// Remove the most recently pushed operand.
    pub fn pop(&mut self) -> Result<f32, GlyphError> {
        if self.is_empty() {
            return Err(GlyphError::StackUnderflow);
        }

        self.end -= 1;
        Ok(self.data[self.end])
    }

    pub fn all(&self) -> &[f32] {
        &self.data[self.start..self.end]
    }

    pub fn clear(&mut self) {
        self.start = 0;
        self.end = 0;
    }
}

impl Default for ArgumentsStack {
    fn default() -> Self {
        ArgumentsStack::new()
    }
}

impl fmt::Debug for ArgumentsStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.all()).finish()
    }
}
