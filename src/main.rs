extern crate clap;

use std::{
    fs,
    io::{self},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::{Parser, Subcommand};
use colored::Colorize;
use tinyvm::{
    assemble_bytes, bytecode::bytecode::disassemble, exit_code, ByteCodeInterpreter, Runtime,
};

/// Assembler and interpreter for a tiny four instruction stack machine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Report each phase and how long it took (on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assemble a source file into a bytecode file
    Assemble {
        /// One mnemonic per line, `#` starts a comment line
        source: PathBuf,
        /// Where to write the raw bytecode
        output: PathBuf,
    },
    /// Run a bytecode file against stdin/stdout
    Run {
        bytecode: PathBuf,
    },
    /// List the instructions in a bytecode file
    Disassemble {
        bytecode: PathBuf,
    },
    /// Assemble a source file in memory and run it straight away
    Exec {
        source: PathBuf,
    },
}

/// Collects phase timings, only printed when verbose
struct Reporter {
    verbose: bool,
    now: Instant,
}

impl Reporter {
    fn start(&mut self, phase: &str) {
        self.now = Instant::now();
        if self.verbose {
            eprintln!("{}", format!("Starting {}", phase).blue());
        }
    }

    fn finish(&self, phase: &str) {
        if self.verbose {
            eprintln!(
                "{} {:.2?}",
                format!("Finished {} in", phase).green(),
                self.now.elapsed()
            );
        }
    }
}

fn report_error(message: impl std::fmt::Display) {
    eprintln!("{0:}: {1:}", "Error".red(), message);
}

/// Source and bytecode files are both read as raw bytes
fn read_file(path: &Path) -> Result<Vec<u8>, ExitCode> {
    fs::read(path).map_err(|e| {
        report_error(format!("can't read '{}': {}", path.display(), e));
        ExitCode::from(1)
    })
}

fn assemble(reporter: &mut Reporter, source: &[u8]) -> Result<Vec<u8>, ExitCode> {
    reporter.start("assembling");
    let code = assemble_bytes(source).map_err(|e| {
        report_error(&e);
        ExitCode::from(e.exit_code())
    })?;
    reporter.finish("assembling");
    Ok(code)
}

fn run(reporter: &mut Reporter, code: &[u8]) -> ExitCode {
    let stdin = io::stdin();
    let stdout = io::stdout();

    reporter.start("bytecode-interpreter");
    let mut runtime = Runtime::new(stdin.lock(), stdout.lock());
    let mut interpreter = ByteCodeInterpreter::new();
    let result = interpreter.run(&mut runtime, code);

    match &result {
        Ok(_) => reporter.finish("bytecode-interpreter"),
        // the faulting instruction is the one just before ip
        Err(e) => eprintln!(
            "{} {} (at {:04x})",
            "[VM]".red(),
            e,
            interpreter.ip().saturating_sub(1)
        ),
    }
    ExitCode::from(exit_code(&result))
}

fn dispatch(args: Args) -> Result<ExitCode, ExitCode> {
    let mut reporter = Reporter {
        verbose: args.verbose,
        now: Instant::now(),
    };

    match args.command {
        Commands::Assemble { source, output } => {
            let text = read_file(&source)?;
            let code = assemble(&mut reporter, &text)?;
            fs::write(&output, &code).map_err(|e| {
                report_error(format!("can't write '{}': {}", output.display(), e));
                ExitCode::from(1)
            })?;
            eprintln!(
                "{} {} ({} bytes)",
                "OK: wrote".green(),
                output.display(),
                code.len()
            );
            Ok(ExitCode::SUCCESS)
        }
        Commands::Run { bytecode } => {
            let code = read_file(&bytecode)?;
            Ok(run(&mut reporter, &code))
        }
        Commands::Disassemble { bytecode } => {
            let code = read_file(&bytecode)?;
            for entry in disassemble(&code) {
                println!("{}", entry);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Exec { source } => {
            let text = read_file(&source)?;
            let code = assemble(&mut reporter, &text)?;
            Ok(run(&mut reporter, &code))
        }
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // status 2 belongs to stack underflow, so usage errors exit with 1
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    match dispatch(args) {
        Ok(code) | Err(code) => code,
    }
}
