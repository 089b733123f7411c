//! Check command implementation
//!
//! Prints the resolved configuration and the worker pool size.

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    println!("vanilla {}", env!("CARGO_PKG_VERSION"));
    println!("Worker threads: {}", rayon::current_num_threads());
    println!();
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
