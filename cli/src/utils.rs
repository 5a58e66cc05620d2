use std::io::Read;

use crate::error::{Error, Result};

/// Read the whole input into memory.
pub(crate) fn read_input<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer).map_err(Error::Read)?;
    Ok(buffer)
}
