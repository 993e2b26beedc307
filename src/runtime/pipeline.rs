use std::io::BufRead;

use crate::{
    allowlist::EntryReader,
    diagnostics::{Diagnostics, Warning},
    error::AllowedIpsError,
    net::{
        aggregate::AddressSet,
        parser::{Classification, classify},
        resolver::DnsResolver,
    },
};

/// Classify every entry, resolve hostnames, and collect the addresses
///
/// Literal addresses are taken as-is. Hostnames go through `resolver`; a
/// failed or empty lookup is reported to `diagnostics` and the run moves on.
/// The first invalid entry or read error aborts and discards everything
/// collected so far.
pub fn collect_addresses<R, S, D>(
    entries: EntryReader<R>,
    resolver: &S,
    diagnostics: &mut D,
) -> Result<AddressSet, AllowedIpsError>
where
    R: BufRead,
    S: DnsResolver + ?Sized,
    D: Diagnostics + ?Sized,
{
    let mut addrs = AddressSet::new();

    for entry in entries {
        let entry = entry?;

        match classify(&entry.text) {
            Classification::LiteralAddress(addr) => addrs.insert(addr),
            Classification::DomainName => match resolver.resolve(&entry.text) {
                Ok(resolved) if resolved.is_empty() => diagnostics.warn(Warning::NoResults {
                    line: entry.line,
                    domain: entry.text,
                }),
                Ok(resolved) => {
                    log::debug!(
                        "Line {}: {} -> {} address(es)",
                        entry.line,
                        entry.text,
                        resolved.len()
                    );
                    addrs.extend(resolved);
                }
                Err(source) => diagnostics.warn(Warning::ResolutionFailed {
                    line: entry.line,
                    domain: entry.text,
                    source,
                }),
            },
            Classification::Invalid => {
                return Err(AllowedIpsError::InvalidEntry {
                    line: entry.line,
                    entry: entry.text,
                });
            }
        }
    }

    Ok(addrs)
}
