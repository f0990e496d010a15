pub mod ast;
pub mod bytecode;
pub mod compiler;
pub mod file_io;
pub mod instructions;
pub mod vm;

pub struct Args {
  pub bytecode: Option<String>,
  pub disasm: bool,
  pub debug_output: bool,
}

pub fn parse_args() -> Option<Args> {
  let mut bytecode = None;
  let mut disasm = false;
  let mut debug_output = false;
  let mut show_help = false;
  let mut args_is_empty = true;

  let mut args = std::env::args();
  let exe = args.next();
  let mut next_arg = args.next();
  while let Some(arg) = next_arg {
    match &arg as &str {
      "-h" => show_help = true,
      "-d" => disasm = true,
      "-D" => debug_output = true,
      _ => {
        if bytecode.is_none() {
          bytecode = Some(arg);
        } else {
          println!("More than 1 file name is specified");
          return None;
        }
      }
    }
    args_is_empty = false;
    next_arg = args.next();
  }

  if show_help || args_is_empty {
    println!(
      r#"Usage: {} [options] [bytecode.bin]

Options:
    -d       Disassemble the program before running
    -D       Print each instruction and the stack as it runs
    -h       Display help
"#,
      exe.unwrap_or_else(|| "stackcalc".to_string())
    );
    return None;
  }

  Some(Args {
    bytecode,
    disasm,
    debug_output,
  })
}
