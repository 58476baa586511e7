mod commands;
mod terminal;

use commands::{CommandLine, Commands, key, sort};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    terminal::logging::init();

    match commands.command {
        Commands::Sort {
            keys,
            delimiter,
            header,
            reverse,
            file,
        } => sort::sort(file.as_deref(), &keys, delimiter, header, reverse),
        Commands::Key { kind, values } => {
            key::key(&kind, &values);
            Ok(())
        }
    }
}
