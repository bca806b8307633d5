//! `mountfix version` command.

use clap::Args;

#[derive(Args)]
pub struct VersionArgs;

pub fn execute(_args: VersionArgs) -> Result<(), Box<dyn std::error::Error>> {
    println!("mountfix version {}", mountfix_core::VERSION);
    Ok(())
}
