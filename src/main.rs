use clap::Parser;
use miette::Result;
use lvlgen::cli::{Cli, Commands};
use lvlgen::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => lvlgen::cli::build::run(args, &printer)?,
        Commands::List(args) => lvlgen::cli::list::run(args, &printer)?,
        Commands::Init(args) => lvlgen::cli::init::run(args, &printer)?,
        Commands::Watch(args) => lvlgen::cli::watch::run(args, &printer)?,
        Commands::Completions(args) => lvlgen::cli::completions::run(args)?,
    }

    Ok(())
}
