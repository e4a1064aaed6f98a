use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::dictionary::TextDictionary;

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Reads a dictionary document (a JSON object of strings, string lists and
/// string tuples) from a file or stdin.
pub struct DictionaryReader;

impl DictionaryReader {
    pub fn read(file_path: Option<&Path>) -> Result<TextDictionary> {
        let (contents, origin) = match file_path {
            Some(path) => (Self::read_file(path)?, path.display().to_string()),
            None => (Self::read_stdin()?, "stdin".to_string()),
        };
        Self::parse(&contents).with_context(|| format!("Invalid dictionary document in {origin}"))
    }

    pub fn parse(contents: &str) -> Result<TextDictionary> {
        if contents.trim().is_empty() {
            bail!("Input is empty; expected a JSON object");
        }
        Ok(serde_json::from_str(contents)?)
    }

    fn read_file(path: &Path) -> Result<String> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to access file: {}", path.display()))?;

        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > MAX_INPUT_SIZE {
            bail!(too_large(size));
        }

        fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .context("Failed to read from stdin")?;
            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);
            if buffer.len() > MAX_INPUT_SIZE {
                bail!(too_large(buffer.len()));
            }
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

#[allow(clippy::cast_precision_loss)]
fn too_large(size: usize) -> String {
    format!(
        "Input size ({:.1} MB) exceeds maximum allowed size (1 MB)",
        size as f64 / 1024.0 / 1024.0
    )
}
