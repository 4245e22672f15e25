//! MenuMaker demo - nested console menus
//!
//! Usage: menumaker-demo [OPTIONS]
//!
//! Builds a sample record management menu and runs it on stdin/stdout.
//! Enter an entry number to select it, `0` to go back or exit.

mod cli;
mod demo;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    cli::Cli::parse().run()
}
