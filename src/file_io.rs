use std::io::{Read, Write};

use crate::{
  ast::Expr, bytecode::Program, compiler::compile,
};

pub fn write_program(
  expr: &Expr,
  writer: &mut impl Write,
  disasm: bool,
) -> std::io::Result<()> {
  let program = compile(expr);

  if disasm {
    program.disasm(&mut std::io::stdout())?;
  }

  program.serialize(writer)
}

pub fn read_program(
  reader: &mut impl Read,
) -> std::io::Result<Program> {
  Program::deserialize(reader)
}
