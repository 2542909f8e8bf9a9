//! Receipt file export for tuneform.
//!
//! Each run writes one text file named by the record's storage identifier,
//! containing the client copy, a blank line, then the shop copy.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Write both receipt variants to a single file under `dir`.
///
/// The file is named `form_NNNNN.txt` with the identifier zero-padded to
/// five digits. An existing file of the same name is overwritten silently;
/// identifiers are unique so this does not normally happen.
///
/// # Errors
///
/// Returns an error if the export directory cannot be created or the file
/// cannot be written.
pub fn export(dir: &Path, id: i64, client_text: &str, shop_text: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|source| Error::DirectoryCreate {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(format!("form_{id:05}.txt"));
    let contents = format!("{client_text}\n\n{shop_text}");
    std::fs::write(&path, contents).map_err(|source| Error::ExportWrite {
        path: path.clone(),
        source,
    })?;

    debug!("Exported receipts to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PromptDefaults, ShopConfig};
    use crate::order::{FormRecord, Stamp, Variant};
    use crate::receipt::render;
    use crate::sequence::next_form_base;
    use crate::storage::Storage;
    use crate::Collector;
    use std::io::Cursor;

    fn temp_export_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tuneform_export_{tag}_{}", std::process::id()))
    }

    #[test]
    fn test_export_writes_padded_filename() {
        let dir = temp_export_dir("pad");
        let path = export(&dir, 1, "CLIENT", "SHOP").unwrap();

        assert_eq!(path.file_name().unwrap(), "form_00001.txt");
        assert!(path.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_export_contents_join_both_copies() {
        let dir = temp_export_dir("join");
        let path = export(&dir, 7, "CLIENT TEXT", "SHOP TEXT").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "CLIENT TEXT\n\nSHOP TEXT");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_export_creates_missing_directory() {
        let dir = temp_export_dir("mkdir").join("nested");
        assert!(!dir.exists());

        export(&dir, 1, "C", "S").unwrap();
        assert!(dir.exists());

        let _ = std::fs::remove_dir_all(dir.parent().unwrap());
    }

    #[test]
    fn test_export_overwrites_silently() {
        let dir = temp_export_dir("overwrite");
        export(&dir, 3, "OLD", "OLD").unwrap();
        let path = export(&dir, 3, "NEW CLIENT", "NEW SHOP").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "NEW CLIENT\n\nNEW SHOP");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_export_unwritable_directory_fails() {
        // A path under an existing file can't be created as a directory
        let dir = temp_export_dir("unwritable");
        std::fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("blocker");
        std::fs::write(&blocker, "x").unwrap();

        let result = export(&blocker.join("sub"), 1, "C", "S");
        assert!(matches!(result, Err(Error::DirectoryCreate { .. })));

        let _ = std::fs::remove_dir_all(&dir);
    }

    /// Two full record cycles: sequence, collection, persistence, rendering,
    /// export. Exported file names follow the storage identifiers and each
    /// file holds that record's own two copies.
    #[test]
    fn test_two_record_cycles_end_to_end() {
        let dir = temp_export_dir("cycle");
        let storage = Storage::open_in_memory().unwrap();
        let shop = ShopConfig::default();
        let fallbacks = PromptDefaults::default();

        let mut exported = Vec::new();
        for _ in 0..2 {
            let previous = storage.latest().unwrap();
            let form_base =
                next_form_base(previous.as_ref().map(|r| r.form_base.as_str()));
            let started = FormRecord::started(
                form_base,
                Stamp {
                    date_iso: "Fri 10-03-2025".to_string(),
                    time: "09:15:00".to_string(),
                    client_suffix: "10-03-25".to_string(),
                },
            );

            let mut out = Vec::new();
            let mut collector = Collector::new(Cursor::new("\n".repeat(13)), &mut out);
            let record = collector.collect(started, previous.as_ref(), &fallbacks).unwrap();

            let id = storage.insert(&record).unwrap();
            let client_text = render(&record, Variant::Client, &shop);
            let shop_text = render(&record, Variant::Shop, &shop);
            let path = export(&dir, id, &client_text, &shop_text).unwrap();
            exported.push((path, client_text, shop_text, record));
        }

        assert_eq!(exported[0].0.file_name().unwrap(), "form_00001.txt");
        assert_eq!(exported[1].0.file_name().unwrap(), "form_00002.txt");
        assert_eq!(exported[0].3.form_base, "005-A");
        assert_eq!(exported[1].3.form_base, "006-A");

        for (path, client_text, shop_text, _) in &exported {
            let contents = std::fs::read_to_string(path).unwrap();
            assert_eq!(contents, format!("{client_text}\n\n{shop_text}"));
        }

        let _ = std::fs::remove_dir_all(&dir);
    }
}
