use std::io::BufWriter;

use stackcalc::{
  ast::Expr,
  bytecode::Program,
  compiler::compile,
  file_io::write_program,
  instructions::Instruction,
  vm::eval,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
  let expr = Expr::Add(
    Box::new(Expr::NumLiteral(1)),
    Box::new(Expr::Mul(
      Box::new(Expr::NumLiteral(2)),
      Box::new(Expr::Neg(Box::new(Expr::NumLiteral(4)))),
    )),
  );
  println!("expr: {expr}");

  let program = compile(&expr);
  program.disasm(&mut std::io::stdout())?;
  println!("result: {}", eval(&program)?);

  let writer = std::fs::File::create("bytecode.bin")?;
  let mut writer = BufWriter::new(writer);
  write_program(&expr, &mut writer, false)?;

  // One Add too many for the operands pushed above it.
  let faulty = Program::from(vec![
    Instruction::Const(1),
    Instruction::Const(2),
    Instruction::Const(4),
    Instruction::Neg,
    Instruction::Mul,
    Instruction::Add,
    Instruction::Add,
  ]);
  match eval(&faulty) {
    Ok(value) => println!("faulty result: {value}"),
    Err(e) => eprintln!("Runtime error: {e}"),
  }
  Ok(())
}
