pub mod emit;
pub mod pipeline;

use std::io::Write;

use crate::{
    allowlist::EntryReader,
    cli::{OutputMode, RunSettings},
    diagnostics::Diagnostics,
    error::AllowedIpsError,
    net::resolver::DnsResolver,
};

pub use pipeline::collect_addresses;

/// Run the whole pipeline and write the result to `out`
///
/// Nothing is written to `out` unless every fatal check has passed.
pub fn execute<S, D, W>(
    settings: &RunSettings,
    resolver: &S,
    diagnostics: &mut D,
    out: &mut W,
) -> Result<(), AllowedIpsError>
where
    S: DnsResolver + ?Sized,
    D: Diagnostics + ?Sized,
    W: Write + ?Sized,
{
    let entries = EntryReader::open(&settings.allowed_file)?;
    let addrs = collect_addresses(entries, resolver, diagnostics)?;
    let joined = addrs.joined();
    log::info!("Collected {} unique address(es)", addrs.len());

    match &settings.mode {
        OutputMode::List => emit::write_list(out, &joined)?,
        OutputMode::Substitute(path) => {
            let rendered = emit::substitute_file(path, &settings.config.template.field, &joined)?;
            out.write_all(&rendered).map_err(AllowedIpsError::Output)?;
        }
    }

    out.flush().map_err(AllowedIpsError::Output)
}
