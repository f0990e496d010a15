use crate::{
  ast::Expr, bytecode::Program, instructions::Instruction,
};

pub struct Compiler {
  instructions: Vec<Instruction>,
}

impl Compiler {
  pub fn new() -> Self {
    Self {
      instructions: vec![],
    }
  }

  fn add_inst(&mut self, inst: Instruction) {
    self.instructions.push(inst);
  }

  /// Emit code for the subtree in post order: operands first,
  /// then the operator that consumes them.
  pub fn compile_expr(&mut self, ex: &Expr) {
    match ex {
      Expr::NumLiteral(value) => {
        self.add_inst(Instruction::Const(*value));
      }
      Expr::Add(lhs, rhs) => {
        self.compile_expr(lhs);
        self.compile_expr(rhs);
        self.add_inst(Instruction::Add);
      }
      Expr::Mul(lhs, rhs) => {
        self.compile_expr(lhs);
        self.compile_expr(rhs);
        self.add_inst(Instruction::Mul);
      }
      Expr::Neg(ex) => {
        self.compile_expr(ex);
        self.add_inst(Instruction::Neg);
      }
    }
  }

  pub fn into_program(self) -> Program {
    Program::from(self.instructions)
  }
}

/// Compile the whole tree into a program that leaves exactly
/// one value on the operand stack.
pub fn compile(expr: &Expr) -> Program {
  let mut compiler = Compiler::new();
  compiler.compile_expr(expr);
  compiler.into_program()
}

#[cfg(test)]
mod test {
  use super::*;
  use Instruction::*;

  fn example_expr() -> Expr {
    Expr::Add(
      Box::new(Expr::NumLiteral(1)),
      Box::new(Expr::Mul(
        Box::new(Expr::NumLiteral(2)),
        Box::new(Expr::Neg(Box::new(Expr::NumLiteral(4)))),
      )),
    )
  }

  #[test]
  fn test_compile_literal() {
    let program = compile(&Expr::NumLiteral(42));
    assert_eq!(program.instructions(), &[Const(42)]);
  }

  #[test]
  fn test_compile_expr() {
    let program = compile(&example_expr());
    assert_eq!(
      program.instructions(),
      &[Const(1), Const(2), Const(4), Neg, Mul, Add]
    );
  }

  #[test]
  fn test_stack_depth() {
    let program = compile(&example_expr());
    let mut depth = 0usize;
    for inst in program.instructions() {
      match inst {
        Const(_) => depth += 1,
        Add | Mul => {
          assert!(2 <= depth);
          depth -= 1;
        }
        Neg => assert!(1 <= depth),
      }
    }
    assert_eq!(depth, 1);
  }
}
