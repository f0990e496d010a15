use std::io::{Read, Write};

#[derive(Debug, Clone, Copy)]
#[repr(u8)]
pub enum OpCode {
  Const,
  Add,
  Mul,
  Neg,
}

macro_rules! impl_op_from {
    ($($op:ident),*) => {
      impl From<u8> for OpCode {
        #[allow(non_upper_case_globals)]
        fn from(o: u8) -> Self {
          $(const $op: u8 = OpCode::$op as u8;)*

          match o {
            $($op => Self::$op,)*
            _ => panic!("Opcode \"{:02X}\" unrecognized!", o),
          }
        }
      }
    }
  }

impl_op_from!(Const, Add, Mul, Neg);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
  /// Push the literal onto the operand stack.
  Const(i64),
  Add,
  Mul,
  Neg,
}

impl Instruction {
  fn op(&self) -> OpCode {
    match self {
      Self::Const(_) => OpCode::Const,
      Self::Add => OpCode::Add,
      Self::Mul => OpCode::Mul,
      Self::Neg => OpCode::Neg,
    }
  }

  pub(crate) fn serialize(
    &self,
    writer: &mut impl Write,
  ) -> Result<(), std::io::Error> {
    writer.write_all(&[self.op() as u8])?;
    if let Self::Const(value) = self {
      writer.write_all(&value.to_le_bytes())?;
    }
    Ok(())
  }

  pub(crate) fn deserialize(
    reader: &mut impl Read,
  ) -> Result<Self, std::io::Error> {
    let mut op = [0u8; 1];
    reader.read_exact(&mut op)?;
    Ok(match OpCode::from(op[0]) {
      OpCode::Const => {
        let mut buf = [0u8; std::mem::size_of::<i64>()];
        reader.read_exact(&mut buf)?;
        Self::Const(i64::from_le_bytes(buf))
      }
      OpCode::Add => Self::Add,
      OpCode::Mul => Self::Mul,
      OpCode::Neg => Self::Neg,
    })
  }
}
