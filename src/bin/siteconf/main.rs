mod args;
mod error;
mod purge;
mod site;
mod theme;

use clap::Parser as _;
use proc_exit::prelude::*;

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = args::Cli::parse();

    cli.color.write_global();
    let colored_stderr = !matches!(
        anstream::AutoStream::choice(&std::io::stderr()),
        anstream::ColorChoice::Never
    );
    args::init_logging(cli.verbose.clone(), colored_stderr);

    cli.command.run().with_code(proc_exit::Code::FAILURE)?;

    Ok(())
}
