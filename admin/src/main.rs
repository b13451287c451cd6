use std::process::ExitCode;

use clap::Parser;
use employee_admin::{Admin, Cli, UreqTransport};
use employee_core::EmployeeClient;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let admin = Admin::new(EmployeeClient::new(&cli.base_url), UreqTransport::new());
    let mut out = std::io::stdout().lock();
    if admin.run(cli.command, &mut out)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
