//! Inventory service
//!
//! Business logic on top of the inventory store: input normalization,
//! validation, audit logging, and summaries.

use tracing::{debug, warn};

use crate::audit::AuditEntry;
use crate::config::settings::Settings;
use crate::error::{FilamentError, FilamentResult};
use crate::models::{validate_key_field, Adjustment, SpoolRecord, UpdatedRecord};
use crate::storage::Storage;

/// Service for inventory management
pub struct InventoryService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

/// Totals across the whole inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySummary {
    /// Number of records in the inventory
    pub spool_count: usize,
    /// Sum of grams across all records
    pub total_grams: i64,
    /// Records at or below the warning level
    pub low_stock_count: usize,
    /// Current warning level in grams
    pub warning_level: i64,
}

impl InventorySummary {
    /// Compute totals for a set of records
    ///
    /// The gram total saturates at `i64::MAX`.
    pub fn from_records(records: &[SpoolRecord], warning_level: i64) -> Self {
        Self {
            spool_count: records.len(),
            total_grams: records
                .iter()
                .fold(0i64, |total, r| total.saturating_add(r.quantity_grams)),
            low_stock_count: records.iter().filter(|r| r.is_low_stock(warning_level)).count(),
            warning_level,
        }
    }
}

impl<'a> InventoryService<'a> {
    /// Create a new inventory service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Trim, validate, and (optionally) upper-case a key
    pub fn normalize_key(&self, material_type: &str, color: &str) -> FilamentResult<(String, String)> {
        let material_type = self.normalize_field(material_type);
        let color = self.normalize_field(color);

        validate_key_field("Material type", &material_type)?;
        validate_key_field("Color", &color)?;

        Ok((material_type, color))
    }

    fn normalize_field(&self, value: &str) -> String {
        let value = value.trim();
        if self.settings.uppercase_input {
            value.to_uppercase()
        } else {
            value.to_string()
        }
    }

    /// List every record in file order
    pub fn list(&self) -> FilamentResult<Vec<SpoolRecord>> {
        self.storage.inventory.load_all()
    }

    /// Find the first record with the given key
    pub fn find(&self, material_type: &str, color: &str) -> FilamentResult<Option<SpoolRecord>> {
        let (material_type, color) = self.normalize_key(material_type, color)?;
        Ok(self
            .list()?
            .into_iter()
            .find(|record| record.matches(&material_type, &color)))
    }

    /// Add a new spool to the inventory
    pub fn add(&self, material_type: &str, color: &str, quantity_grams: i64) -> FilamentResult<SpoolRecord> {
        let (material_type, color) = self.normalize_key(material_type, color)?;

        let record = SpoolRecord::new(material_type, color, quantity_grams);
        record.validate()?;

        self.storage
            .inventory
            .append(&record.material_type, &record.color, record.quantity_grams)?;

        self.audit(AuditEntry::spool_added(&record));

        Ok(record)
    }

    /// Add or subtract grams from the first matching spool
    ///
    /// Returns `None` when no spool has the key.
    pub fn adjust(
        &self,
        material_type: &str,
        color: &str,
        adjustment: Adjustment,
    ) -> FilamentResult<Option<UpdatedRecord>> {
        let (material_type, color) = self.normalize_key(material_type, color)?;

        let updated = self
            .storage
            .inventory
            .update_first(&material_type, &color, adjustment)?;

        if let Some(ref updated) = updated {
            self.audit(AuditEntry::spool_adjusted(updated));
        }

        Ok(updated)
    }

    /// Remove the first matching spool
    ///
    /// Returns `None` when no spool has the key.
    pub fn remove(&self, material_type: &str, color: &str) -> FilamentResult<Option<SpoolRecord>> {
        let (material_type, color) = self.normalize_key(material_type, color)?;

        let removed = self.storage.inventory.remove_first(&material_type, &color)?;

        if let Some(ref record) = removed {
            self.audit(AuditEntry::spool_removed(record));
        }

        Ok(removed)
    }

    /// Spools at or below the current warning level
    pub fn low_stock(&self) -> FilamentResult<Vec<SpoolRecord>> {
        let level = self.warning_level()?;
        self.low_stock_at(level)
    }

    /// Spools at or below an explicit threshold
    pub fn low_stock_at(&self, threshold_grams: i64) -> FilamentResult<Vec<SpoolRecord>> {
        self.storage.inventory.low_stock(threshold_grams)
    }

    /// Current warning level
    pub fn warning_level(&self) -> FilamentResult<i64> {
        self.storage.threshold.get()
    }

    /// Change the warning level, returning the previous value
    ///
    /// A stored value that does not parse is replaced; the previous value is
    /// then `None`.
    pub fn set_warning_level(&self, value: i64) -> FilamentResult<Option<i64>> {
        let previous = match self.warning_level() {
            Ok(level) => Some(level),
            Err(FilamentError::InvalidThreshold(stored)) => {
                warn!(stored = %stored, "replacing invalid warning level");
                None
            }
            Err(err) => return Err(err),
        };
        self.storage.threshold.set(value)?;

        if previous != Some(value) {
            self.audit(AuditEntry::warning_level_changed(previous, value));
        }

        Ok(previous)
    }

    /// Totals for the status bar and `config` output
    pub fn summary(&self) -> FilamentResult<InventorySummary> {
        let records = self.list()?;
        let warning_level = self.warning_level()?;
        Ok(InventorySummary::from_records(&records, warning_level))
    }

    /// Record a completed change
    ///
    /// The change is already saved, so a failed audit write is logged and
    /// not returned.
    fn audit(&self, entry: AuditEntry) {
        if !self.settings.audit_enabled {
            debug!(operation = %entry.operation(), "history disabled, skipping entry");
            return;
        }
        if let Err(err) = self.storage.audit.log(&entry) {
            warn!(
                error = %err,
                operation = %entry.operation(),
                subject = %entry.change.subject(),
                "failed to write history entry"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{Change, Operation};
    use crate::config::paths::FilamentPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FilamentPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_normalizes_case() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = InventoryService::new(&storage, &settings);

        let record = service.add(" petg ", "black", 500).unwrap();

        assert_eq!(record, SpoolRecord::new("PETG", "BLACK", 500));
        assert_eq!(service.list().unwrap().last().unwrap(), &record);
    }

    #[test]
    fn test_add_without_uppercase() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings {
            uppercase_input: false,
            ..Settings::default()
        };
        let service = InventoryService::new(&storage, &settings);

        let record = service.add("Silk PLA", "Gold", 750).unwrap();

        assert_eq!(record.material_type, "Silk PLA");
        assert!(service.find("SILK PLA", "GOLD").unwrap().is_none());
        assert!(service.find("Silk PLA", "Gold").unwrap().is_some());
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = InventoryService::new(&storage, &settings);

        assert!(service.add("", "BLACK", 10).unwrap_err().is_validation());
        assert!(service.add("PLA", "BLACK", -10).unwrap_err().is_validation());
        assert!(service.add("PLA", "BLACK,RED", 10).unwrap_err().is_validation());
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_adjust_lowercase_key_matches() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = InventoryService::new(&storage, &settings);

        let updated = service
            .adjust("pla", "white", Adjustment::Subtract(400))
            .unwrap()
            .unwrap();

        assert_eq!(updated.before.quantity_grams, 1000);
        assert_eq!(updated.after.quantity_grams, 600);
    }

    #[test]
    fn test_adjust_missing_returns_none() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = InventoryService::new(&storage, &settings);

        assert!(service
            .adjust("ABS", "RED", Adjustment::Add(1))
            .unwrap()
            .is_none());
        assert!(storage.audit.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_mutations_are_audited() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = InventoryService::new(&storage, &settings);

        service.add("PETG", "BLACK", 500).unwrap();
        service.adjust("PETG", "BLACK", Adjustment::Subtract(200)).unwrap();
        service.remove("PLA", "WHITE").unwrap();
        service.set_warning_level(400).unwrap();

        let entries = storage.audit.read_all().unwrap();
        let operations: Vec<_> = entries.iter().map(|e| e.operation()).collect();
        assert_eq!(
            operations,
            vec![
                Operation::Create,
                Operation::Update,
                Operation::Delete,
                Operation::Update
            ]
        );
        assert_eq!(entries[1].change.details(), "500 g -> 300 g");
        assert_eq!(
            entries[3].change,
            Change::WarningLevelChanged {
                previous: Some(250),
                current: 400
            }
        );
    }

    #[test]
    fn test_audit_disabled() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings {
            audit_enabled: false,
            ..Settings::default()
        };
        let service = InventoryService::new(&storage, &settings);

        service.add("PETG", "BLACK", 500).unwrap();

        assert!(!storage.audit.path().exists());
    }

    #[test]
    fn test_audit_failure_does_not_fail_mutation() {
        let (temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = InventoryService::new(&storage, &settings);
        std::fs::create_dir_all(temp_dir.path().join("audit.log")).unwrap();

        let record = service.add("PETG", "BLACK", 500).unwrap();
        assert!(service
            .adjust("PETG", "BLACK", Adjustment::Subtract(100))
            .unwrap()
            .is_some());
        assert_eq!(service.set_warning_level(300).unwrap(), Some(250));

        assert_eq!(record, SpoolRecord::new("PETG", "BLACK", 500));
        assert_eq!(
            service.list().unwrap(),
            vec![
                SpoolRecord::new("PLA", "WHITE", 1000),
                SpoolRecord::new("PETG", "BLACK", 400),
            ]
        );
        assert_eq!(service.remove("PLA", "WHITE").unwrap().unwrap().quantity_grams, 1000);
        assert_eq!(service.warning_level().unwrap(), 300);
    }

    #[test]
    fn test_low_stock_uses_warning_level() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = InventoryService::new(&storage, &settings);

        service.add("PETG", "BLACK", 250).unwrap();
        service.add("ABS", "RED", 251).unwrap();

        let low = service.low_stock().unwrap();
        assert_eq!(low, vec![SpoolRecord::new("PETG", "BLACK", 250)]);

        service.set_warning_level(2000).unwrap();
        assert_eq!(service.low_stock().unwrap().len(), 3);
    }

    #[test]
    fn test_set_warning_level_returns_previous() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = InventoryService::new(&storage, &settings);

        assert_eq!(service.set_warning_level(100).unwrap(), Some(250));
        assert_eq!(service.set_warning_level(100).unwrap(), Some(100));
        assert!(service.set_warning_level(-5).unwrap_err().is_validation());
        assert_eq!(service.warning_level().unwrap(), 100);
    }

    #[test]
    fn test_summary() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = InventoryService::new(&storage, &settings);

        service.add("PETG", "BLACK", 200).unwrap();

        let summary = service.summary().unwrap();
        assert_eq!(
            summary,
            InventorySummary {
                spool_count: 2,
                total_grams: 1200,
                low_stock_count: 1,
                warning_level: 250,
            }
        );
    }

    #[test]
    fn test_summary_total_saturates() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = InventoryService::new(&storage, &settings);

        storage.inventory.append("PLA", "WHITE", i64::MAX - 500).unwrap();

        let summary = service.summary().unwrap();
        assert_eq!(summary.spool_count, 2);
        assert_eq!(summary.total_grams, i64::MAX);
    }

    #[test]
    fn test_set_warning_level_replaces_invalid_value() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = InventoryService::new(&storage, &settings);
        std::fs::write(storage.threshold.path(), "lots").unwrap();

        assert!(service.warning_level().is_err());
        assert_eq!(service.set_warning_level(500).unwrap(), None);
        assert_eq!(service.warning_level().unwrap(), 500);

        let entries = storage.audit.read_all().unwrap();
        assert_eq!(
            entries.last().unwrap().change,
            Change::WarningLevelChanged {
                previous: None,
                current: 500
            }
        );
    }
}
