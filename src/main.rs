use std::io::BufReader;

use stackcalc::{file_io::read_program, parse_args, vm::Vm};

fn main() -> Result<(), Box<dyn std::error::Error>> {
  let Some(args) = parse_args() else {
    return Ok(());
  };

  let Some(bytecode) = args.bytecode else {
    println!("Please specify a bytecode file to run");
    return Ok(());
  };

  let reader = std::fs::File::open(&bytecode)?;
  let mut reader = BufReader::new(reader);
  let program = read_program(&mut reader)?;

  if args.disasm {
    program.disasm(&mut std::io::stdout())?;
  }

  match Vm::new(&program, args.debug_output).eval() {
    Ok(value) => println!("result: {value}"),
    Err(e) => eprintln!("Runtime error: {e}"),
  }
  Ok(())
}
