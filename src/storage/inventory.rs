//! Inventory store backed by a flat text file
//!
//! Each non-blank line of the file is one spool record in the form
//! `TYPE,COLOR,GRAMS,`. Every operation reads the whole file; mutations
//! rewrite the whole file atomically. Nothing is cached between calls.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::FilamentResult;
use crate::models::{Adjustment, SpoolRecord, UpdatedRecord};

use super::file_io::{append_text, read_text, write_text_atomic};

/// A parsed line together with its original text
struct InventoryLine<'a> {
    text: &'a str,
    record: SpoolRecord,
}

/// Parse the full contents of an inventory file
///
/// Accepts `\n`, `\r\n` and bare `\r` line endings and skips blank lines. Any
/// other line that does not parse is an error; nothing is dropped silently.
pub fn parse_inventory(contents: &str) -> FilamentResult<Vec<SpoolRecord>> {
    Ok(parse_lines(contents)?
        .into_iter()
        .map(|line| line.record)
        .collect())
}

fn parse_lines(contents: &str) -> FilamentResult<Vec<InventoryLine<'_>>> {
    let mut lines = Vec::new();

    for (index, text) in split_lines(contents).enumerate() {
        if text.trim().is_empty() {
            continue;
        }
        let record = SpoolRecord::parse_line(text, index + 1)?;
        lines.push(InventoryLine { text, record });
    }

    Ok(lines)
}

/// Split on `\n`, `\r\n` or a lone `\r`
fn split_lines(contents: &str) -> impl Iterator<Item = &str> {
    contents
        .split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

/// Join lines back into file contents, one `\n` after each
fn render<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
    let mut contents = String::new();
    for line in lines {
        contents.push_str(line);
        contents.push('\n');
    }
    contents
}

/// Repository for the spool inventory file
pub struct InventoryStore {
    path: PathBuf,
}

impl InventoryStore {
    /// Create a new inventory store
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file with the seed record if it does not exist
    ///
    /// Returns `true` if the file was created.
    pub fn ensure_initialized(&self) -> FilamentResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        let seed = SpoolRecord::seed();
        write_text_atomic(&self.path, &render([seed.to_line().as_str()]))?;
        info!(path = %self.path.display(), record = %seed, "created inventory file");
        Ok(true)
    }

    fn read_contents(&self) -> FilamentResult<String> {
        self.ensure_initialized()?;
        read_text(&self.path)
    }

    /// Load every record in file order
    pub fn load_all(&self) -> FilamentResult<Vec<SpoolRecord>> {
        let contents = self.read_contents()?;
        let records = parse_inventory(&contents)?;
        debug!(count = records.len(), "loaded inventory");
        Ok(records)
    }

    /// Append a new record to the end of the file
    ///
    /// Existing lines are not read or rewritten, and no attempt is made to
    /// merge with an existing record of the same key.
    pub fn append(&self, material_type: &str, color: &str, quantity_grams: i64) -> FilamentResult<()> {
        let record = SpoolRecord::new(material_type, color, quantity_grams);
        record.validate()?;

        self.ensure_initialized()?;
        append_text(&self.path, &render([record.to_line().as_str()]))?;
        info!(record = %record, "appended record");
        Ok(())
    }

    /// Adjust the quantity of the first record matching the key
    ///
    /// Returns whether a record was found.
    pub fn find_and_update(
        &self,
        material_type: &str,
        color: &str,
        adjustment: Adjustment,
    ) -> FilamentResult<bool> {
        Ok(self
            .update_first(material_type, color, adjustment)?
            .is_some())
    }

    /// Adjust the quantity of the first record matching the key
    ///
    /// All other lines are written back unchanged and in order. When nothing
    /// matches, the file is left untouched.
    pub fn update_first(
        &self,
        material_type: &str,
        color: &str,
        adjustment: Adjustment,
    ) -> FilamentResult<Option<UpdatedRecord>> {
        adjustment.validate()?;

        let contents = self.read_contents()?;
        let lines = parse_lines(&contents)?;

        let Some(index) = lines
            .iter()
            .position(|line| line.record.matches(material_type, color))
        else {
            debug!(material_type, color, "no record to update");
            return Ok(None);
        };

        let before = lines[index].record.clone();
        let after = SpoolRecord::new(material_type, color, adjustment.apply(before.quantity_grams));
        let replacement = after.to_line();

        let new_contents = render(lines.iter().enumerate().map(|(i, line)| {
            if i == index {
                replacement.as_str()
            } else {
                line.text
            }
        }));
        write_text_atomic(&self.path, &new_contents)?;

        info!(
            key = %after.key(),
            %adjustment,
            before = before.quantity_grams,
            after = after.quantity_grams,
            "updated record"
        );
        Ok(Some(UpdatedRecord { before, after }))
    }

    /// Remove the first record matching the key
    ///
    /// Returns whether a record was removed.
    pub fn find_and_delete(&self, material_type: &str, color: &str) -> FilamentResult<bool> {
        Ok(self.remove_first(material_type, color)?.is_some())
    }

    /// Remove the first record matching the key, returning it
    pub fn remove_first(&self, material_type: &str, color: &str) -> FilamentResult<Option<SpoolRecord>> {
        let contents = self.read_contents()?;
        let lines = parse_lines(&contents)?;

        let Some(index) = lines
            .iter()
            .position(|line| line.record.matches(material_type, color))
        else {
            debug!(material_type, color, "no record to remove");
            return Ok(None);
        };

        let new_contents = render(
            lines
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, line)| line.text),
        );
        write_text_atomic(&self.path, &new_contents)?;

        let removed = lines[index].record.clone();
        info!(record = %removed, "removed record");
        Ok(Some(removed))
    }

    /// Records at or below the given threshold, in file order
    pub fn low_stock(&self, threshold_grams: i64) -> FilamentResult<Vec<SpoolRecord>> {
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|record| record.is_low_stock(threshold_grams))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilamentError;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, InventoryStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Data").join("Inventory.txt");
        let store = InventoryStore::new(path);
        (temp_dir, store)
    }

    fn write_raw(store: &InventoryStore, contents: &str) {
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), contents).unwrap();
    }

    fn raw(store: &InventoryStore) -> String {
        fs::read_to_string(store.path()).unwrap()
    }

    #[test]
    fn test_first_access_seeds_file() {
        let (_temp_dir, store) = create_test_store();

        let records = store.load_all().unwrap();

        assert_eq!(records, vec![SpoolRecord::new("PLA", "WHITE", 1000)]);
        assert_eq!(raw(&store), "PLA,WHITE,1000,\n");
    }

    #[test]
    fn test_existing_file_is_not_seeded() {
        let (_temp_dir, store) = create_test_store();
        write_raw(&store, "");

        assert!(!store.ensure_initialized().unwrap());
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_then_load() {
        let (_temp_dir, store) = create_test_store();

        store.append("PETG", "BLACK", 500).unwrap();

        let records = store.load_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records.last().unwrap(), &SpoolRecord::new("PETG", "BLACK", 500));
        assert_eq!(raw(&store), "PLA,WHITE,1000,\nPETG,BLACK,500,\n");
    }

    #[test]
    fn test_append_rejects_negative_quantity() {
        let (_temp_dir, store) = create_test_store();

        let err = store.append("PLA", "RED", -5).unwrap_err();

        assert!(err.is_validation());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_append_allows_duplicates() {
        let (_temp_dir, store) = create_test_store();

        store.append("PLA", "WHITE", 250).unwrap();

        let records = store.load_all().unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.matches("PLA", "WHITE")));
    }

    #[test]
    fn test_parse_crlf_and_blank_lines() {
        let (_temp_dir, store) = create_test_store();
        write_raw(&store, "PLA,WHITE,1000,\r\n\r\nPETG,BLACK,500,\r\n\n\n");

        let records = store.load_all().unwrap();

        assert_eq!(
            records,
            vec![
                SpoolRecord::new("PLA", "WHITE", 1000),
                SpoolRecord::new("PETG", "BLACK", 500),
            ]
        );
    }

    #[test]
    fn test_malformed_line_is_rejected() {
        let (_temp_dir, store) = create_test_store();
        write_raw(&store, "PLA,WHITE,1000,\n\nPETG,BLACK\n");

        let err = store.load_all().unwrap_err();

        match err {
            FilamentError::MalformedRecord { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_line_blocks_rewrite() {
        let (_temp_dir, store) = create_test_store();
        let contents = "PLA,WHITE,1000,\nPETG,BLACK,heavy,\n";
        write_raw(&store, contents);

        assert!(store.find_and_delete("PLA", "WHITE").is_err());
        assert_eq!(raw(&store), contents);
    }

    #[test]
    fn test_update_subtract() {
        let (_temp_dir, store) = create_test_store();
        store.append("PETG", "BLACK", 500).unwrap();

        let found = store
            .find_and_update("PETG", "BLACK", Adjustment::Subtract(200))
            .unwrap();

        assert!(found);
        assert_eq!(raw(&store), "PLA,WHITE,1000,\nPETG,BLACK,300,\n");
    }

    #[test]
    fn test_update_add_returns_before_and_after() {
        let (_temp_dir, store) = create_test_store();

        let updated = store
            .update_first("PLA", "WHITE", Adjustment::Add(250))
            .unwrap()
            .unwrap();

        assert_eq!(updated.before.quantity_grams, 1000);
        assert_eq!(updated.after.quantity_grams, 1250);
    }

    #[test]
    fn test_update_clamps_to_zero() {
        let (_temp_dir, store) = create_test_store();

        store
            .find_and_update("PLA", "WHITE", Adjustment::Subtract(5000))
            .unwrap();

        assert_eq!(store.load_all().unwrap()[0].quantity_grams, 0);
    }

    #[test]
    fn test_update_rejects_negative_delta() {
        let (_temp_dir, store) = create_test_store();

        let err = store
            .find_and_update("PLA", "WHITE", Adjustment::Add(-10))
            .unwrap_err();

        assert!(err.is_validation());
    }

    #[test]
    fn test_update_missing_key_leaves_file_identical() {
        let (_temp_dir, store) = create_test_store();
        let contents = "PLA,WHITE,1000,\r\n\r\nPETG,BLACK,500,\r\n";
        write_raw(&store, contents);

        let found = store
            .find_and_update("ABS", "RED", Adjustment::Add(1))
            .unwrap();

        assert!(!found);
        assert_eq!(raw(&store), contents);
    }

    #[test]
    fn test_update_first_match_only() {
        let (_temp_dir, store) = create_test_store();
        write_raw(&store, "PLA,RED,100,\nABS,BLUE,50,\nPLA,RED,100,\n");

        store
            .find_and_update("PLA", "RED", Adjustment::Add(900))
            .unwrap();

        assert_eq!(raw(&store), "PLA,RED,1000,\nABS,BLUE,50,\nPLA,RED,100,\n");
    }

    #[test]
    fn test_update_does_not_match_substrings() {
        let (_temp_dir, store) = create_test_store();
        write_raw(&store, "REDWOOD,RED,100,\nPLA,REDDISH,100,\n");

        let found = store
            .find_and_update("PLA", "RED", Adjustment::Add(1))
            .unwrap();

        assert!(!found);
    }

    #[test]
    fn test_update_drops_blank_lines_and_keeps_others() {
        let (_temp_dir, store) = create_test_store();
        write_raw(&store, "ABS, BLUE ,50\n\nPLA,RED,100,\n\n");

        store
            .find_and_update("PLA", "RED", Adjustment::Subtract(10))
            .unwrap();

        assert_eq!(raw(&store), "ABS, BLUE ,50\nPLA,RED,90,\n");
    }

    #[test]
    fn test_bare_carriage_return_separates_lines() {
        let records = parse_inventory("PLA,WHITE,1000,\rPETG,BLACK,500,\r").unwrap();

        assert_eq!(
            records,
            vec![
                SpoolRecord::new("PLA", "WHITE", 1000),
                SpoolRecord::new("PETG", "BLACK", 500),
            ]
        );
    }

    #[test]
    fn test_bare_carriage_return_line_numbers() {
        let err = parse_inventory("PLA,WHITE,1000,\r\nPETG,BLACK,500,\rABS,RED\n").unwrap_err();

        match err {
            FilamentError::MalformedRecord { line, content, .. } => {
                assert_eq!(line, 3);
                assert_eq!(content, "ABS,RED");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_update_rewrites_bare_carriage_returns() {
        let (_temp_dir, store) = create_test_store();
        write_raw(&store, "PLA,WHITE,1000,\rPETG,BLACK,500,\r");

        assert!(store
            .find_and_update("PETG", "BLACK", Adjustment::Subtract(100))
            .unwrap());

        assert_eq!(raw(&store), "PLA,WHITE,1000,\nPETG,BLACK,400,\n");
    }

    #[test]
    fn test_padded_key_fields_match() {
        let (_temp_dir, store) = create_test_store();
        write_raw(&store, "PLA, WHITE,1000,\n");

        assert!(store
            .find_and_update("PLA", "WHITE", Adjustment::Add(5))
            .unwrap());

        assert_eq!(raw(&store), "PLA,WHITE,1005,\n");
    }

    #[test]
    fn test_delete_preserves_order() {
        let (_temp_dir, store) = create_test_store();
        write_raw(&store, "A,1,1,\nB,2,2,\nC,3,3,\nD,4,4,\n");

        assert!(store.find_and_delete("B", "2").unwrap());

        let keys: Vec<_> = store
            .load_all()
            .unwrap()
            .iter()
            .map(|r| r.material_type.clone())
            .collect();
        assert_eq!(keys, vec!["A", "C", "D"]);
    }

    #[test]
    fn test_delete_first_match_only() {
        let (_temp_dir, store) = create_test_store();
        write_raw(&store, "PLA,RED,1,\nPLA,RED,2,\n");

        let removed = store.remove_first("PLA", "RED").unwrap().unwrap();

        assert_eq!(removed.quantity_grams, 1);
        assert_eq!(raw(&store), "PLA,RED,2,\n");
    }

    #[test]
    fn test_delete_missing_key_leaves_file_identical() {
        let (_temp_dir, store) = create_test_store();
        let contents = "PLA,WHITE,1000,\n\n";
        write_raw(&store, contents);

        assert!(!store.find_and_delete("PLA", "BLACK").unwrap());
        assert_eq!(raw(&store), contents);
    }

    #[test]
    fn test_low_stock_filter() {
        let (_temp_dir, store) = create_test_store();
        write_raw(&store, "A,1,500,\nB,2,250,\nC,3,100,\nD,4,251,\n");

        let low: Vec<_> = store
            .low_stock(250)
            .unwrap()
            .into_iter()
            .map(|r| r.material_type)
            .collect();
        assert_eq!(low, vec!["B", "C"]);

        assert!(store.low_stock(50).unwrap().is_empty());
    }

    #[test]
    fn test_full_scenario() {
        let (_temp_dir, store) = create_test_store();

        assert_eq!(store.load_all().unwrap(), vec![SpoolRecord::new("PLA", "WHITE", 1000)]);

        store.append("PETG", "BLACK", 500).unwrap();
        assert_eq!(
            store.load_all().unwrap(),
            vec![
                SpoolRecord::new("PLA", "WHITE", 1000),
                SpoolRecord::new("PETG", "BLACK", 500),
            ]
        );

        assert!(store
            .find_and_update("PETG", "BLACK", Adjustment::new(200, false))
            .unwrap());
        assert_eq!(store.load_all().unwrap()[1], SpoolRecord::new("PETG", "BLACK", 300));

        let before = raw(&store);
        assert!(!store
            .find_and_update("ABS", "RED", Adjustment::new(1, true))
            .unwrap());
        assert_eq!(raw(&store), before);

        assert!(store.find_and_delete("PLA", "WHITE").unwrap());
        assert_eq!(store.load_all().unwrap(), vec![SpoolRecord::new("PETG", "BLACK", 300)]);

        assert_eq!(store.low_stock(400).unwrap(), vec![SpoolRecord::new("PETG", "BLACK", 300)]);
    }
}
