mod assign;
mod find;
mod messages;
mod walk;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Push readings through the base interface and walk them with a cursor.
    Walk(walk::Walk),
    /// Find the first reading with a given value.
    Find(find::Find),
    /// Copy a sequence into a sequence of readings.
    ///
    /// Copying from readings takes the direct path; copying from alerts is
    /// checked element by element and rejected.
    Assign(assign::Assign),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Walk(walk) => {
            walk.run()?;
        }
        Commands::Find(find) => {
            find.run()?;
        }
        Commands::Assign(assign) => {
            assign.run()?;
        }
    }
    Ok(())
}
