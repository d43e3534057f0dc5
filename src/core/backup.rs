use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::errors::AppResult;
use crate::ui::confirm::ask_confirmation;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;
use rusqlite::Connection;
use std::fs::{self, File};
use std::io;
use std::path::Path;
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database to `dest_file`, zipped when `compress` is set.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool) -> AppResult<()> {
        let src = Path::new(&cfg.database);
        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        let dest = expand_tilde(dest_file);
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let target = if compress {
            dest.with_extension("zip")
        } else {
            dest.clone()
        };
        if target.exists()
            && !ask_confirmation(&format!("'{}' already exists. Overwrite it?", target.display()))
        {
            info("Backup cancelled.");
            return Ok(());
        }

        if compress {
            zip_database(src, &dest, &target)?;
            success(format!("Compressed backup created: {}", target.display()));
        } else {
            fs::copy(src, &target)?;
            success(format!("Backup created: {}", target.display()));
        }

        match Connection::open(src) {
            Ok(conn) => ttlog_soft(
                &conn,
                "backup",
                &target.to_string_lossy(),
                if compress { "Compressed backup" } else { "Plain copy" },
            ),
            Err(e) => warning(format!("Backup not recorded in the log: {}", e)),
        }

        Ok(())
    }
}

/// Write `src` into the archive `zip_path`, stored under the file name of `dest`.
fn zip_database(src: &Path, dest: &Path, zip_path: &Path) -> AppResult<()> {
    let mut zip = ZipWriter::new(File::create(zip_path)?);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let inner_name = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "rtimetracker.sqlite".to_string());

    zip.start_file(inner_name, options).map_err(io::Error::other)?;
    io::copy(&mut File::open(src)?, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    Ok(())
}
