//! Writing and reading export files

use std::fs;
use std::path::Path;

use crate::algorithm::generator::MazeGenerator;
use crate::io::codec::MazeDocument;
use crate::io::error::{MazeError, Result, invalid_parameter};

/// Write a rendered document to `path`
///
/// # Errors
///
/// Returns [`MazeError::FileSystem`] if the file cannot be written
pub fn write_document(document: &MazeDocument, path: &Path) -> Result<()> {
    fs::write(path, document.render()).map_err(|source| MazeError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source,
    })
}

/// Read and parse a document from `path`
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents are malformed
pub fn read_document(path: &Path) -> Result<MazeDocument> {
    let text = fs::read_to_string(path).map_err(|source| MazeError::FileSystem {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })?;
    MazeDocument::parse(&text)
}

/// Export a generator's maze and path to its output file
///
/// # Errors
///
/// Returns an error if:
/// - No maze has been carved yet
/// - The output file cannot be written
pub fn write_output(generator: &MazeGenerator) -> Result<()> {
    let document = generator.to_document().ok_or_else(|| {
        invalid_parameter(
            "maze",
            &"uncarved",
            &"a maze must be carved before it can be exported",
        )
    })?;
    let path = Path::new(generator.output_file());
    write_document(&document, path)?;
    tracing::info!(path = %path.display(), "maze written");
    Ok(())
}
