use crate::core::session::SessionController;
use crate::core::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::settings::Settings;
use crate::models::work_record::{Timestamp, WorkRecord};
use crate::ui::messages::{info, success, warning};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub const SNAPSHOT_VERSION: &str = "1.0.0";
const SNAPSHOT_ENTRY: &str = "rworklog-backup.json";
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Everything needed to rebuild a store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupSnapshot {
    pub records: Vec<WorkRecord>,
    pub settings: Settings,
    pub timestamp: Timestamp,
    pub version: String,
}

pub struct BackupLogic;

impl BackupLogic {
    pub fn snapshot<S: RecordStore>(store: &S, now: Timestamp) -> AppResult<BackupSnapshot> {
        Ok(BackupSnapshot {
            records: store.all()?,
            settings: store.get_settings()?,
            timestamp: now,
            version: SNAPSHOT_VERSION.to_string(),
        })
    }

    /// Write a JSON snapshot to `dest`, optionally zipped. Returns the final file path.
    pub fn backup<S: RecordStore>(
        store: &mut S,
        dest: &Path,
        compress: bool,
        now: Timestamp,
    ) -> AppResult<PathBuf> {
        // 1️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 2️⃣ Write snapshot
        let snapshot = Self::snapshot(store, now)?;
        fs::write(dest, serde_json::to_string_pretty(&snapshot)?)?;
        success(format!(
            "Backup created: {} ({} records)",
            dest.display(),
            snapshot.records.len()
        ));

        // 3️⃣ Optional compression
        let final_path = if compress {
            let compressed = compress_backup(dest)?;

            if compressed != dest {
                if let Err(e) = fs::remove_file(dest) {
                    warning(format!("Failed to remove uncompressed backup: {}", e));
                } else {
                    info(format!("Removed uncompressed backup: {}", dest.display()));
                }
            }

            compressed
        } else {
            dest.to_path_buf()
        };

        // 4️⃣ Log
        if let Err(e) = store.audit(
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(final_path)
    }

    /// Read a snapshot written by [`BackupLogic::backup`], zipped or plain.
    pub fn read_snapshot(path: &Path) -> AppResult<BackupSnapshot> {
        let bytes = fs::read(path)?;

        let json = if bytes.starts_with(ZIP_MAGIC) {
            let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes))?;
            if archive.is_empty() {
                return Err(AppError::Backup(format!(
                    "{} contains no files",
                    path.display()
                )));
            }
            let mut entry = archive.by_index(0)?;
            let mut s = String::new();
            entry.read_to_string(&mut s)?;
            s
        } else {
            String::from_utf8(bytes).map_err(|e| {
                AppError::Backup(format!("{} is not a text file: {}", path.display(), e))
            })?
        };

        Ok(serde_json::from_str(&json)?)
    }

    /// Load a snapshot into `store`. Records are matched by id (last write wins);
    /// derived values are recomputed with the snapshot's settings.
    pub fn restore<S: RecordStore>(
        store: &mut S,
        path: &Path,
        now: Timestamp,
    ) -> AppResult<usize> {
        let snapshot = Self::read_snapshot(path)?;

        store.save_settings(&snapshot.settings)?;

        for record in &snapshot.records {
            let mut r = record.clone();
            SessionController::refresh_derived(&mut r, now, &snapshot.settings);
            store.save(&r)?;
        }

        let count = snapshot.records.len();
        if let Err(e) = store.audit(
            "restore",
            &path.to_string_lossy(),
            &format!(
                "Restored {} records from snapshot {} (v{})",
                count,
                snapshot.timestamp.to_rfc3339(),
                snapshot.version
            ),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(count)
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let content = fs::read(path)?;
    zip.start_file(SNAPSHOT_ENTRY, options)?;
    zip.write_all(&content)?;
    zip.finish()?;

    info(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
