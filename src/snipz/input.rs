//! Reading a snippet body from a line-oriented source.
//!
//! Lines are collected until the first empty line, which terminates the body and
//! is not part of it. End of input terminates the body as well. Lines are joined
//! with a single `\n`, so the stored body never carries a trailing newline.

use crate::error::Result;
use std::io::BufRead;

pub fn read_body<R: BufRead>(reader: R) -> Result<String> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line).to_string();
        if line.is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}
