mod context;
mod flags;
pub mod prompts;

use clap::Parser;

pub use context::run_stdout;
pub use flags::CliFlags;

use crate::error::Result;

/// Parse `args` and generate without the form.
///
/// Help, version and usage errors are reported by clap, which exits.
pub fn run(args: Vec<String>) -> Result<()> {
    let flags = CliFlags::try_parse_from(args).unwrap_or_else(|e| e.exit());
    log::debug!("cli flags {flags:?}");
    run_stdout(flags)
}
