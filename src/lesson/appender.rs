//! File appender: writes a validated playground block to the end of a lesson.

use crate::error::PlaygenError;
use crate::generation::PlaygroundBlock;
use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Append `block` to the lesson at `path`, separated by one blank line.
///
/// The file is opened in append mode and never truncated; the existing
/// content is left untouched.
pub fn append_block(path: &Path, block: &PlaygroundBlock) -> Result<(), PlaygenError> {
    let mut file = OpenOptions::new().read(true).append(true).open(path)?;

    let separator = if at_line_start(&mut file)? {
        "\n"
    } else {
        "\n\n"
    };

    let mut text = String::with_capacity(separator.len() + block.as_str().len() + 1);
    text.push_str(separator);
    text.push_str(block.as_str());
    text.push('\n');

    file.write_all(text.as_bytes())?;
    file.flush()?;
    Ok(())
}

/// True for an empty file or one whose last byte is a newline.
fn at_line_start(file: &mut std::fs::File) -> Result<bool, PlaygenError> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
