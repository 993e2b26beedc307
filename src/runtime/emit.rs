use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use crate::error::AllowedIpsError;

/// Write the joined list followed by a newline, or nothing when it is empty
pub fn write_list<W: Write + ?Sized>(out: &mut W, joined: &str) -> Result<(), AllowedIpsError> {
    if joined.is_empty() {
        return Ok(());
    }
    writeln!(out, "{joined}").map_err(AllowedIpsError::Output)
}

/// Read a WireGuard config and render it with every `field` line replaced
pub fn substitute_file(
    path: &Path,
    field: &str,
    value: &str,
) -> Result<Vec<u8>, AllowedIpsError> {
    let file = File::open(path).map_err(|source| AllowedIpsError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    substitute(BufReader::new(file), field, value).map_err(|source| AllowedIpsError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Render `template` with each matching line replaced by `<field> = <value>`
///
/// A line matches when its trimmed text starts with `field`. This is a raw
/// prefix test, so with `AllowedIPs` a line such as `AllowedIPsX = 1.2.3.4`
/// is replaced as well. Lines are handled as bytes: non-matching lines are
/// copied untrimmed whatever their encoding, only the `\n` / `\r\n`
/// terminator is normalized to `\n`. The whole template is rendered before
/// anything is returned, so a read failure leaves no partial output behind.
pub fn substitute<R: BufRead>(
    mut template: R,
    field: &str,
    value: &str,
) -> std::io::Result<Vec<u8>> {
    let mut rendered = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if template.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = strip_terminator(&buf);
        if line.trim_ascii().starts_with(field.as_bytes()) {
            write!(rendered, "{field} = {value}")?;
        } else {
            rendered.extend_from_slice(line);
        }
        rendered.push(b'\n');
    }

    Ok(rendered)
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
