//! Driver: load a flat RV64 binary image, run it, dump final state.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use rv64emu::error::LoadImageError;
use rv64emu::Cpu;

/// Run a flat RV64I binary image to completion.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a raw RV64 machine code image, loaded at guest address MEM_BASE.
    binary: PathBuf,
}

fn load_image(path: &PathBuf) -> Result<Vec<u8>, LoadImageError> {
    std::fs::read(path).map_err(|source| LoadImageError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn main() -> ExitCode {
    let args = Args::parse();

    let image = match load_image(&args.binary) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut cpu = match Cpu::new(&image) {
        Ok(cpu) => cpu,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    loop {
        if cpu.pc == 0 {
            break;
        }
        let inst = match cpu.fetch() {
            Ok(inst) => inst,
            Err(e) => {
                eprintln!("{e}");
                println!("{}", cpu.dump_registers());
                println!("{}", cpu.dump_csrs());
                return ExitCode::FAILURE;
            }
        };
        if inst == 0 {
            break;
        }
        if let Err(e) = cpu.execute(inst) {
            eprintln!("{e}");
            println!("{}", cpu.dump_registers());
            println!("{}", cpu.dump_csrs());
            return ExitCode::FAILURE;
        }
    }

    println!("{}", cpu.dump_registers());
    println!("{}", cpu.dump_csrs());
    ExitCode::SUCCESS
}
