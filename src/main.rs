use std::{io, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use phonebook::{
    cli::{args::Cli, commands::execute, display},
    database::{database::Database, options::DatabaseOptions},
};

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let args = Cli::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Nothing left to report to if stderr is gone
            let _ = display::write_error(&mut io::stderr().lock(), &err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> anyhow::Result<()> {
    log::debug!("Arguments: {:?}", args);

    let options = DatabaseOptions::default()
        .set_data_file(args.file.clone())
        .set_page_size(args.page_size.get());

    let mut database = Database::open(options)
        .with_context(|| format!("Unable to open phonebook [{}]", args.file.display()))?;

    let stdin = io::stdin();
    let stdout = io::stdout();

    execute(args.command, &mut database, &mut stdin.lock(), &mut stdout.lock())
}
