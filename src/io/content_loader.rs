//! Content file loading.
//!
//! Reads plain text or HTML from disk, optionally brotli-compressed
//! (`page.html.br`). The markup flag is taken from the extension left after
//! stripping `.br`.

use anyhow::{Context, Result};
use brotli::Decompressor;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// File extensions offered in the open dialog.
pub const CONTENT_EXTENSIONS: &[&str] = &["txt", "html", "htm", "br"];

/// Text read from a content file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedContent {
    pub path: PathBuf,
    pub text: String,
    pub is_html: bool,
}

/// Reads a content file, decompressing `.br` files on the fly.
///
/// # Arguments
/// * `path` - File to read
///
/// # Returns
/// The decoded text and whether it should be treated as HTML
pub fn load_content(path: &Path) -> Result<LoadedContent> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;

    let compressed = has_extension(path, "br");
    let mut reader: Box<dyn Read> = if compressed {
        Box::new(Decompressor::new(file, 4096))
    } else {
        Box::new(BufReader::new(file))
    };

    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let text = String::from_utf8(bytes)
        .with_context(|| format!("File is not valid UTF-8: {}", path.display()))?;

    let inner = if compressed {
        path.file_stem().map(Path::new).unwrap_or(path)
    } else {
        path
    };
    let is_html = has_extension(inner, "html") || has_extension(inner, "htm");

    log::info!(
        "loaded {} ({} bytes, html={})",
        path.display(),
        text.len(),
        is_html
    );

    Ok(LoadedContent {
        path: path.to_path_buf(),
        text,
        is_html,
    })
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}
