//! CLI entry point for the Koch snowflake renderer

use clap::Parser;
use kochflake::io::cli::{Cli, SnowflakeRenderer};

fn main() -> kochflake::Result<()> {
    let cli = Cli::parse();
    let renderer = SnowflakeRenderer::new(cli);
    renderer.process()
}
