//! File-based implementation of BankingRepository

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use chrono::Utc;

use fueleu_domain::model::BankEntry;
use fueleu_domain::repository::BankingRepository;
use fueleu_types::{Error, Result};

use super::json_document;

/// Stores the bank ledger in `bank_entries.json` under the store directory.
pub struct FileBankRepository {
    store_path: PathBuf,
    entries: RefCell<Vec<BankEntry>>,
}

impl FileBankRepository {
    /// Create or load a bank repository
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("bank_entries.json");
        let entries = json_document::load(&store_path)?;

        Ok(Self {
            store_path,
            entries: RefCell::new(entries),
        })
    }

    fn persist(&self) -> Result<()> {
        json_document::persist(&self.store_path, &*self.entries.borrow())
    }
}

impl BankingRepository for FileBankRepository {
    fn insert_entry(&self, ship_id: &str, year: i32, amount_t: f64) -> std::result::Result<BankEntry, Error> {
        let mut entries = self.entries.borrow_mut();
        let entry = BankEntry {
            id: entries.iter().map(|e| e.id).max().unwrap_or(0) + 1,
            ship_id: ship_id.to_string(),
            year,
            amount_t,
            created_at: Utc::now(),
        };
        entries.push(entry.clone());
        drop(entries);
        self.persist()?;
        Ok(entry)
    }

    fn find_entries(&self, ship_id: Option<&str>, year: Option<i32>) -> std::result::Result<Vec<BankEntry>, Error> {
        let mut found: Vec<BankEntry> = self
            .entries
            .borrow()
            .iter()
            .filter(|e| ship_id.map_or(true, |s| e.ship_id == s))
            .filter(|e| year.map_or(true, |y| e.year == y))
            .cloned()
            .collect();
        // newest first; id breaks ties within the same timestamp
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(found)
    }

    fn available(&self, ship_id: &str, year: i32) -> std::result::Result<f64, Error> {
        Ok(self
            .entries
            .borrow()
            .iter()
            .filter(|e| e.ship_id == ship_id && e.year == year)
            .map(|e| e.amount_t)
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_available_sums_entries() {
        let dir = tempdir().unwrap();
        let repo = FileBankRepository::open(dir.path().to_path_buf()).unwrap();
        repo.insert_entry("R001", 2024, 10.0).unwrap();
        repo.insert_entry("R001", 2024, 5.5).unwrap();
        repo.insert_entry("R001", 2024, -3.0).unwrap();
        repo.insert_entry("R001", 2025, 100.0).unwrap();
        repo.insert_entry("R002", 2024, 7.0).unwrap();

        assert!((repo.available("R001", 2024).unwrap() - 12.5).abs() < 1e-9);
        assert_eq!(repo.available("R003", 2024).unwrap(), 0.0);
    }

    #[test]
    fn test_find_entries_filters_newest_first() {
        let dir = tempdir().unwrap();
        let repo = FileBankRepository::open(dir.path().to_path_buf()).unwrap();
        repo.insert_entry("R001", 2024, 1.0).unwrap();
        repo.insert_entry("R002", 2024, 2.0).unwrap();
        repo.insert_entry("R001", 2024, 3.0).unwrap();

        let r001 = repo.find_entries(Some("R001"), None).unwrap();
        assert_eq!(r001.len(), 2);
        assert_eq!(r001[0].amount_t, 3.0);
        assert_eq!(r001[1].amount_t, 1.0);

        assert_eq!(repo.find_entries(None, Some(2024)).unwrap().len(), 3);
        assert!(repo.find_entries(None, Some(2030)).unwrap().is_empty());
    }

    #[test]
    fn test_entries_survive_reopen() {
        let dir = tempdir().unwrap();
        {
            let repo = FileBankRepository::open(dir.path().to_path_buf()).unwrap();
            let entry = repo.insert_entry("R001", 2024, 4.0).unwrap();
            assert_eq!(entry.id, 1);
        }
        let repo = FileBankRepository::open(dir.path().to_path_buf()).unwrap();
        let entry = repo.insert_entry("R001", 2024, 1.0).unwrap();
        assert_eq!(entry.id, 2);
        assert!((repo.available("R001", 2024).unwrap() - 5.0).abs() < 1e-9);
    }
}
