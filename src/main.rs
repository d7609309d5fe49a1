//! CLI entry point for the sample grid report generator

use clap::Parser;
use plantgrid::io::cli::{Cli, ReportProcessor};
use plantgrid::io::logging::{LogConfig, init_logging};

fn main() -> plantgrid::Result<()> {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_flags(cli.quiet, cli.verbose))?;
    let processor = ReportProcessor::new(cli);
    processor.process()
}
