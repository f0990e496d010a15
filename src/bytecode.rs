use std::io::{Read, Write};

use crate::instructions::Instruction;

/// An ordered instruction sequence. Instruction order is the
/// evaluation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
  instructions: Vec<Instruction>,
}

impl Default for Program {
  fn default() -> Self {
    Self::new()
  }
}

impl From<Vec<Instruction>> for Program {
  fn from(instructions: Vec<Instruction>) -> Self {
    Self { instructions }
  }
}

impl Program {
  pub fn new() -> Self {
    Self {
      instructions: vec![],
    }
  }

  pub fn instructions(&self) -> &[Instruction] {
    &self.instructions
  }

  pub fn serialize(
    &self,
    writer: &mut impl Write,
  ) -> std::io::Result<()> {
    serialize_size(self.instructions.len(), writer)?;
    for instruction in &self.instructions {
      instruction.serialize(writer)?;
    }
    Ok(())
  }

  pub fn deserialize(
    reader: &mut impl Read,
  ) -> std::io::Result<Self> {
    let num_instructions = deserialize_size(reader)?;
    let mut instructions =
      Vec::with_capacity(num_instructions);
    for _ in 0..num_instructions {
      instructions.push(Instruction::deserialize(reader)?);
    }
    Ok(Self { instructions })
  }

  pub fn disasm(
    &self,
    writer: &mut impl Write,
  ) -> std::io::Result<()> {
    writeln!(
      writer,
      "Instructions [{}]",
      self.instructions.len()
    )?;
    for (i, inst) in self.instructions.iter().enumerate() {
      match inst {
        Instruction::Const(value) => {
          writeln!(writer, "  [{i}] Const {value}")?
        }
        Instruction::Add
        | Instruction::Mul
        | Instruction::Neg => {
          writeln!(writer, "  [{i}] {inst:?}")?
        }
      }
    }
    Ok(())
  }
}

pub(crate) fn serialize_size(
  sz: usize,
  writer: &mut impl Write,
) -> std::io::Result<()> {
  writer.write_all(&(sz as u32).to_le_bytes())
}

pub(crate) fn deserialize_size(
  reader: &mut impl Read,
) -> std::io::Result<usize> {
  let mut buf = [0u8; std::mem::size_of::<u32>()];
  reader.read_exact(&mut buf)?;
  Ok(u32::from_le_bytes(buf) as usize)
}

#[cfg(test)]
mod test {
  use super::*;
  use Instruction::*;

  #[test]
  fn test_serialize() {
    let program =
      Program::from(vec![Const(1), Const(-2), Add, Neg]);
    let mut buf: Vec<u8> = vec![];
    program.serialize(&mut buf).unwrap();
    let copy =
      Program::deserialize(&mut buf.as_slice()).unwrap();
    assert_eq!(copy, program);
  }

  #[test]
  fn test_disasm() {
    let mut out: Vec<u8> = vec![];
    Program::from(vec![Const(5), Neg])
      .disasm(&mut out)
      .unwrap();
    assert_eq!(
      String::from_utf8(out).unwrap(),
      "Instructions [2]\n  [0] Const 5\n  [1] Neg\n"
    );
  }
}
