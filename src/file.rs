// src/file.rs

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

/// Create `dir` (and parents) unless it already exists as a directory.
pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Write `bytes` to a temp file next to `path`, then rename it over `path`
/// only if `keep()` still says so. Returns whether the file was persisted.
/// Readers never observe a half-written file.
pub fn write_atomic_if<F>(path: &Path, bytes: &[u8], keep: F) -> io::Result<bool>
where
    F: FnOnce() -> bool,
{
    let dir = parent_dir(path);
    ensure_directory(&dir)?;

    let mut tmp = NamedTempFile::new_in(&dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;

    if !keep() {
        // dropping the handle removes the temp file
        return Ok(false);
    }
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(true)
}

pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    write_atomic_if(path, bytes, || true).map(|_| ())
}

/// File-name-safe stem: ASCII alphanumerics, `-`, `_`; whitespace runs → `_`.
/// Falls back to `export` when nothing survives.
pub fn sanitize_file_stem(name: &str) -> String {
    let name = name.trim();
    let name = name.strip_suffix(".pdf").unwrap_or(name);

    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch=='-' || ch=='_' { if !(last_us && ch=='_') { out.push(ch); } last_us = ch=='_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!("export") } else { out }
}

/// Default export stem: `<page>_<YYYY-MM-DD>`.
pub fn default_export_stem(page: &str) -> String {
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    sanitize_file_stem(&join!(page, "_", &date))
}
