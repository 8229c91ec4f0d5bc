use clap::{Parser as ClapParser, Subcommand};
use rivulet_lang::cli::{self, CliError, RenderOptions};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "rivulet")]
#[command(about = "Rivulet - a data-flow expression parser and pretty-printer")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an expression and print it re-rendered
    Render {
        /// Expression text (reads from stdin if not provided)
        expr: Option<String>,

        /// Multi-line output with nested indentation
        #[arg(short, long)]
        indent: bool,
    },

    /// Print the parse tree as JSON
    Ast {
        /// Expression text (reads from stdin if not provided)
        expr: Option<String>,
    },

    /// Print the token stream
    Tokens {
        /// Expression text (reads from stdin if not provided)
        expr: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Render { expr, indent } => {
            let source = read_source(expr)?;
            let options = RenderOptions {
                source,
                indented: indent,
            };
            println!("{}", cli::execute_render(&options)?);
        }
        Commands::Ast { expr } => {
            let source = read_source(expr)?;
            println!("{}", cli::execute_ast(&source)?);
        }
        Commands::Tokens { expr } => {
            let source = read_source(expr)?;
            print!("{}", cli::execute_tokens(&source)?);
        }
    }
    Ok(())
}

fn read_source(expr: Option<String>) -> Result<String, CliError> {
    match expr {
        Some(s) => Ok(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::Io)?;
            Ok(buffer)
        }
        None => Err(CliError::NoInput),
    }
}
