use crate::db::log::audit_quietly;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, or zip it next to it
    /// (same name, `.zip` extension) when `compress` is set.
    /// Returns the path actually written, or `None` when the user declined
    /// to overwrite an existing file.
    pub fn backup(
        pool: &DbPool,
        db_path: &str,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = Path::new(db_path);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        // copying a file onto itself truncates it
        if target.exists() && fs::canonicalize(src)? == fs::canonicalize(&target)? {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!(
                    "Backup destination is the database itself: {}",
                    target.display()
                ),
            )
            .into());
        }

        if target.exists()
            && !force
            && !confirm(&format!("The file '{}' already exists. Overwrite?", target.display()))?
        {
            info("Backup cancelled.");
            return Ok(None);
        }

        let final_path = if compress {
            compress_backup(src, &target)?
        } else {
            fs::copy(src, &target)?;
            target
        };

        success(format!("Backup created: {}", final_path.display()));

        audit_quietly(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(final_path))
    }
}

/// Write the database file into a single-entry .zip archive.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<PathBuf> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "rticket.sqlite".to_string());

    let mut f = fs::File::open(src)?;
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(zip_path.to_path_buf())
}
