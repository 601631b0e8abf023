//! Intcode virtual machine CLI.
//!
//! This binary provides a single entry point for the machine. It performs:
//! 1. **Run:** Execute a program file with a fixed input list and print its outputs.
//! 2. **Disassemble:** Print a listing of a program file.
//! 3. **Amplify:** Run a program as a linear or feedback pipeline, for one phase
//!    ordering or a search over every ordering.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use intcode_vm::config::Config;
use intcode_vm::core::Cpu;
use intcode_vm::isa::disasm::disassemble_program;
use intcode_vm::port::InputQueue;
use intcode_vm::sim::{Pipeline, Program, Topology};
use intcode_vm::stats::STATS_SECTIONS;

#[derive(Parser, Debug)]
#[command(
    name = "intcode",
    author,
    version,
    about = "Intcode virtual machine",
    long_about = "Run, disassemble, or chain intcode programs.\n\nExamples:\n  intcode run prog.txt --input 1\n  intcode disasm prog.txt\n  intcode amplify prog.txt --phases 5,6,7,8,9 --feedback --search"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON configuration file; defaults apply to omitted fields.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program to completion and print each output on its own line.
    Run {
        /// Program file (comma-separated integers).
        file: PathBuf,

        /// Input values consumed in order by the Input instruction.
        #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
        input: Vec<i64>,

        /// Print execution statistics after the run; optionally limit to sections.
        #[arg(long, value_delimiter = ',', num_args = 0.., value_parser = clap::builder::PossibleValuesParser::new(STATS_SECTIONS))]
        stats: Option<Vec<String>>,

        /// Print the machine state after the run.
        #[arg(long)]
        dump: bool,
    },

    /// Print a disassembly listing of a program.
    Disasm {
        /// Program file (comma-separated integers).
        file: PathBuf,
    },

    /// Run a program as a chain of machines seeded with phase settings.
    Amplify {
        /// Program file (comma-separated integers).
        file: PathBuf,

        /// Phase settings, one per machine.
        #[arg(short, long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
        phases: Vec<i64>,

        /// Wire the last machine back into the first.
        #[arg(long)]
        feedback: bool,

        /// Try every ordering of the phases and report the best.
        #[arg(long)]
        search: bool,

        /// Initial input signal for the first machine.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        input: i64,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = dispatch(cli) {
        eprintln!("error: {e}");
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        process::exit(1);
    }
}

/// Installs the fmt subscriber on stderr. `RUST_LOG` wins over `-v` when set.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn dispatch(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    if cli.verbose >= 2 {
        config.general.trace_instructions = true;
    }

    match cli.command {
        Commands::Run {
            file,
            input,
            stats,
            dump,
        } => cmd_run(&file, &input, &config, stats.as_deref(), dump),
        Commands::Disasm { file } => cmd_disasm(&file),
        Commands::Amplify {
            file,
            phases,
            feedback,
            search,
            input,
        } => cmd_amplify(&file, &phases, feedback, search, input, config),
    }
}

/// Runs one machine and prints its outputs, one per line.
///
/// Outputs produced before a failure are still printed; the machine state is dumped
/// to stderr when the run fails.
fn cmd_run(
    file: &Path,
    inputs: &[i64],
    config: &Config,
    stats: Option<&[String]>,
    dump: bool,
) -> Result<(), Box<dyn Error>> {
    let program = Program::from_file(file)?;
    tracing::info!(path = %file.display(), words = program.len(), "program loaded");

    let mut cpu = Cpu::new(&program, config);
    let mut input = InputQueue::new(inputs);
    let mut output = Vec::new();
    let result = cpu.run(&mut input, &mut output);

    for value in &output {
        println!("{value}");
    }
    if dump || result.is_err() {
        eprintln!("{cpu}");
    }
    if let Some(sections) = stats {
        cpu.stats.print_sections(sections);
    }
    result.map_err(Into::into)
}

fn cmd_disasm(file: &Path) -> Result<(), Box<dyn Error>> {
    let program = Program::from_file(file)?;
    for line in disassemble_program(program.words()) {
        println!("{line}");
    }
    Ok(())
}

fn cmd_amplify(
    file: &Path,
    phases: &[i64],
    feedback: bool,
    search: bool,
    input: i64,
    config: Config,
) -> Result<(), Box<dyn Error>> {
    let program = Program::from_file(file)?;
    let topology = if feedback {
        Topology::Feedback
    } else {
        Topology::Linear
    };
    let pipeline = Pipeline::new(program, config);

    if search {
        let (signal, ordering) = pipeline.max_signal(phases, input, topology)?;
        let ordering: Vec<String> = ordering.iter().map(ToString::to_string).collect();
        println!("{signal} (phases {})", ordering.join(","));
    } else {
        println!("{}", pipeline.run(phases, input, topology)?);
    }
    Ok(())
}
