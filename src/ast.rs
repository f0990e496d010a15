use std::fmt::Display;

#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
  NumLiteral(i64),
  Add(Box<Expr>, Box<Expr>),
  Mul(Box<Expr>, Box<Expr>),
  Neg(Box<Expr>),
}

impl Expr {
  /// Evaluate the tree directly, without compiling it.
  pub fn eval(&self) -> i64 {
    match self {
      Self::NumLiteral(value) => *value,
      Self::Add(lhs, rhs) => lhs.eval() + rhs.eval(),
      Self::Mul(lhs, rhs) => lhs.eval() * rhs.eval(),
      Self::Neg(ex) => -ex.eval(),
    }
  }
}

impl Display for Expr {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    match self {
      Self::NumLiteral(value) => write!(f, "{value}"),
      Self::Add(lhs, rhs) => write!(f, "({lhs} + {rhs})"),
      Self::Mul(lhs, rhs) => write!(f, "({lhs} * {rhs})"),
      Self::Neg(ex) => write!(f, "-{ex}"),
    }
  }
}

#[cfg(test)]
mod test {
  use super::*;

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
  fn test_eval() {
    assert_eq!(Expr::NumLiteral(0).eval(), 0);
    assert_eq!(Expr::NumLiteral(-42).eval(), -42);
    assert_eq!(example_expr().eval(), -7);
  }

  #[test]
  fn test_display() {
    assert_eq!(example_expr().to_string(), "(1 + (2 * -4))");
  }
}
