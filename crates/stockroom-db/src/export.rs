//! # CSV Export
//!
//! Writes the product table to a comma-delimited UTF-8 file.
//!
//! ## All-or-nothing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      write_csv(destination, rows)                       │
//! │                                                                         │
//! │  destination ──► resolve symlinks ──► target                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  temp file in target's dir  (mode: target's, or 0666 minus umask)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  header + rows ──► flush ──► fsync                                     │
//! │       │                                                                 │
//! │       ├── any error? ──► temp file removed, destination untouched      │
//! │       ▼                                                                 │
//! │  persist(target)  (atomic rename over the old file)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A symlinked destination is written through: the link stays, its target
//! gets the new content. An existing file keeps its permission bits.
//!
//! Fields holding the delimiter, quotes or line breaks are quoted per
//! RFC 4180. Records end in CRLF.

use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};
use tracing::debug;

use crate::error::{DbError, DbResult};
use stockroom_core::{Product, PRODUCT_COLUMNS};

/// One exported line, in on-disk column order.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    id: i64,
    name: &'a str,
    price: f64,
    quantity: i64,
    units: &'a str,
    description: &'a str,
}

impl<'a> From<&'a Product> for ExportRow<'a> {
    fn from(p: &'a Product) -> Self {
        ExportRow {
            id: p.id,
            name: &p.name,
            price: p.price,
            quantity: p.quantity,
            units: &p.units,
            description: &p.description,
        }
    }
}

/// Writes `products` (already in id order) to `destination`.
///
/// ## Returns
/// * `Ok(n)` - header plus `n` rows written, file in place
/// * `Err(DbError::ExportFailed)` - nothing at `destination` changed
pub fn write_csv(destination: &Path, products: &[Product]) -> DbResult<u64> {
    let shown = destination.display().to_string();
    let fail = |reason: &dyn std::fmt::Display| DbError::export(shown.clone(), reason);

    let target = resolve_target(destination).map_err(|e| fail(&e))?;
    let existing = fs::metadata(&target)
        .ok()
        .filter(|m| m.is_file())
        .map(|m| m.permissions());

    let mut tmp = temp_file_beside(&target).map_err(|e| fail(&e))?;
    debug!(
        temp = %tmp.path().display(),
        target = %target.display(),
        "Writing export to temp file"
    );

    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(tmp.as_file_mut());

        writer.write_record(PRODUCT_COLUMNS).map_err(|e| fail(&e))?;
        for product in products {
            writer
                .serialize(ExportRow::from(product))
                .map_err(|e| fail(&e))?;
        }
        writer.flush().map_err(|e| fail(&e))?;
    }

    if let Some(permissions) = existing {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| fail(&e))?;
    }

    tmp.as_file().sync_all().map_err(|e| fail(&e))?;
    tmp.persist(&target).map_err(|e| fail(&e.error))?;

    Ok(products.len() as u64)
}

/// Follows symlinks so the final rename replaces the file, not the link.
///
/// A missing destination is returned as given. A dangling link resolves
/// one level, to the path it points at.
fn resolve_target(destination: &Path) -> io::Result<PathBuf> {
    match fs::canonicalize(destination) {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let is_link = fs::symlink_metadata(destination)
                .map(|m| m.file_type().is_symlink())
                .unwrap_or(false);
            if !is_link {
                return Ok(destination.to_path_buf());
            }
            let link = fs::read_link(destination)?;
            Ok(parent_dir(destination).join(link))
        }
        Err(e) => Err(e),
    }
}

/// Creates the temp file next to `target` (the rename must not cross
/// filesystems).
fn temp_file_beside(target: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".stockroom-export");

    // Same default mode as a plain create, so the umask decides
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    builder.tempfile_in(parent_dir(target))
}

fn parent_dir(path: &Path) -> &Path {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

// =============================================================================
// Unit Tests
// =============================================================================
