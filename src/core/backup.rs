use crate::db::BirthdayStore;
use crate::db::log::{Operation, ttlog};
use crate::errors::AppResult;
use crate::export::ensure_writable;
use crate::ui::messages::success;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, or into a `.zip` archive
    /// next to it when `compress` is set. Returns the path written.
    pub fn backup(
        store: &BirthdayStore,
        db_path: &str,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<PathBuf> {
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

        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        if same_file(src, &final_target) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!(
                    "Backup target {} is the database itself",
                    final_target.display()
                ),
            )
            .into());
        }
        ensure_writable(&final_target, force)?;

        let final_path = if compress {
            compress_backup(src, &final_target)?
        } else {
            fs::copy(src, dest)?;
            success(format!("Backup created: {}", dest.display()));
            final_target
        };

        ttlog(
            store.conn(),
            Operation::Backup,
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        )?;

        Ok(final_path)
    }
}

/// True when both paths name the same existing file.
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Write the database into a .zip archive at `zip_path`.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<PathBuf> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "babybirthdays.sqlite".to_string());

    let mut f = fs::File::open(src)?;
    zip.start_file(entry_name, options)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish()?;

    success(format!("📦 Backup created and compressed: {}", zip_path.display()));

    Ok(zip_path.to_path_buf())
}
