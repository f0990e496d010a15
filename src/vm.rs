use thiserror::Error;

use crate::{bytecode::Program, instructions::Instruction};

/// Failure of a program that needs more operands than the
/// stack holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
  #[error("Stack underflow: tried to pop from empty stack")]
  StackUnderflow,
}

pub struct Vm<'a> {
  program: &'a Program,
  stack: Vec<i64>,
  debug_output: bool,
}

impl<'a> Vm<'a> {
  pub fn new(program: &'a Program, debug_output: bool) -> Self {
    Self {
      program,
      stack: vec![],
      debug_output,
    }
  }

  fn pop(&mut self) -> Result<i64, EvalError> {
    self.stack.pop().ok_or(EvalError::StackUnderflow)
  }

  /// Run the program once, in order, and pop the result.
  /// Values left below the result are dropped.
  pub fn eval(mut self) -> Result<i64, EvalError> {
    for (ip, instruction) in
      self.program.instructions().iter().enumerate()
    {
      if self.debug_output {
        println!(
          "eval[{ip}]: {instruction:?} stack: {:?}",
          self.stack
        );
      }

      match instruction {
        Instruction::Const(value) => self.stack.push(*value),
        Instruction::Add => {
          // The first pop binds to the left operand.
          let lhs = self.pop()?;
          let rhs = self.pop()?;
          self.stack.push(lhs + rhs);
        }
        Instruction::Mul => {
          let lhs = self.pop()?;
          let rhs = self.pop()?;
          self.stack.push(lhs * rhs);
        }
        Instruction::Neg => {
          let value = self.pop()?;
          self.stack.push(-value);
        }
      }
    }

    self.pop()
  }
}

/// Evaluate a program on a fresh operand stack.
pub fn eval(program: &Program) -> Result<i64, EvalError> {
  Vm::new(program, false).eval()
}
