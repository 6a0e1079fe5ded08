use std::fs::File;
use std::io::Seek;

use crate::command::Cli;
use crate::decoder::decode;
use crate::error::{DisasmError, Result};
use crate::executor::execute;
use crate::machine::Machine;
use crate::printer::{print_registers_binary, print_registers_hex};

/// Runs the decode-then-execute-then-advance loop of §2/§5 against the file
/// named by `cli.input`, honoring `--decode`, `--binary`, and `--dump`.
pub fn execute_run(cli: &Cli) -> Result<()> {
    let file = File::open(&cli.input)?;
    let mut machine = Machine::new(file);

    println!("────────────────────────── EXECUTION ───────────────────────────");

    loop {
        let offset = machine.source().stream_position()?;
        let instruction = match decode(machine.source(), offset) {
            Ok(instruction) => instruction,
            Err(DisasmError::EndOfStream) => {
                machine.halt();
                break;
            }
            Err(e) => return Err(e),
        };

        if cli.decode {
            println!("{instruction}");
            continue;
        }

        print!("{instruction:<12} ");
        machine.advance(instruction.size);
        execute(&mut machine, &instruction)?;
        println!();
    }

    if cli.decode {
        return Ok(());
    }

    println!("\n───────────────────────── FINAL STATE ──────────────────────────");
    if cli.binary {
        print_registers_binary(&machine);
    } else {
        print_registers_hex(&machine);
    }

    if cli.dump {
        write_memory_dump(&machine)?;
    }

    Ok(())
}

fn write_memory_dump<R: std::io::Read + std::io::Seek>(machine: &Machine<R>) -> Result<()> {
    use std::io::Write;

    let mut file = open_dump_file()?;
    file.write_all(machine.memory_image())?;
    Ok(())
}

#[cfg(unix)]
fn open_dump_file() -> Result<File> {
    use std::os::unix::fs::OpenOptionsExt;
    Ok(std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o644)
        .open("memory.data")?)
}

#[cfg(not(unix))]
fn open_dump_file() -> Result<File> {
    Ok(std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open("memory.data")?)
}
