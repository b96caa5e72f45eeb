use clap::{Parser, Subcommand};
use std::path::PathBuf;

use shapegen::{SchemaError, Target};
use shapegen_cli::{default_output, parse_target, run_compile, run_gen};

#[derive(Parser)]
#[command(name = "shapegen", version)]
#[command(about = "Translate shape declarations into JSON Schema or Ajv/Zod/Joi validators", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a `.shape` declaration to a draft-07 JSON Schema
    Compile {
        /// Input `.shape` file
        #[arg(short, long)]
        input: PathBuf,

        /// Output `.json` file (if omitted, prints to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate validator source for one library from a `.shape` declaration
    Gen {
        /// Input `.shape` file
        #[arg(short, long)]
        input: PathBuf,

        /// Output `.js` file (if omitted, prints to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write next to the input as `<name>.<target>.js` instead of `--output`
        #[arg(long, conflicts_with = "output")]
        beside_input: bool,

        /// Target library: ajv, zod or joi
        #[arg(short, long, value_parser = parse_target)]
        target: Target,
    },
}

fn main() -> Result<(), SchemaError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Compile { input, output } => {
            run_compile(input, output.as_deref())?;
            if let Some(out_path) = output {
                println!("Compiled {} → {}", input.display(), out_path.display());
            }
            Ok(())
        }

        Commands::Gen { input, output, beside_input, target } => {
            let output = if *beside_input {
                Some(default_output(input, &format!("{}.js", target)))
            } else {
                output.clone()
            };
            run_gen(input, output.as_deref(), *target)?;
            if let Some(out_path) = output {
                println!("Wrote {} validator to {}", target, out_path.display());
            }
            Ok(())
        }
    }
}
