//! Resolves the source of a request body: a named file, or data piped to
//! the command.

use crate::errors::CliError;
use std::io::{IsTerminal, Read};
use std::path::Path;

/// Returns the request body from the given file or, if none is given, from
/// piped stdin. Fails with `NoContent` when stdin is an interactive terminal
/// or carries no data.
pub fn read_body(src: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    match src {
        Some(path) => Ok(std::fs::read(path)?),
        None => read_piped(),
    }
}

fn read_piped() -> anyhow::Result<Vec<u8>> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(CliError::NoContent.into());
    }
    let mut buf = Vec::new();
    stdin.read_to_end(&mut buf)?;
    if buf.is_empty() {
        return Err(CliError::NoContent.into());
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_body_from_a_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"{\"aField\":\"aValue\"}").unwrap();
        let body = read_body(Some(f.path())).unwrap();
        assert_eq!(body, b"{\"aField\":\"aValue\"}");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_body(Some(Path::new("/no/such/file.json"))).is_err());
    }
}
