use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use bugsift::cli::{self, Cli};
use bugsift::ui::output::{self, Verbosity};

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Err(err) = init_tracing(Verbosity::from_flags(cli.quiet, cli.debug)) {
        output::error(format!("{:#}", err));
        return ExitCode::FAILURE;
    }

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbosity: Verbosity) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env().add_directive(verbosity.log_directive().parse()?))
        .init();
    Ok(())
}
