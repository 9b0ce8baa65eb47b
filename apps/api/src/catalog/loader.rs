//! Catalog loading: the whole CSV source is read once per request.
//!
//! Source-level failures (missing file, unreadable file, oversized file)
//! abort the load. Row-level failures are skipped, counted, and logged,
//! so a bad row never takes the catalog down and data loss is never
//! silent.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use tracing::warn;

use crate::catalog::parser::{parse_row, RowError};
use crate::errors::AppError;
use crate::matching::normalize::SkillNormalizer;
use crate::models::job::JobRecord;

/// A fully parsed catalog plus the bookkeeping of what was dropped.
///
/// Immutable once loaded; every request loads its own copy, so there is
/// no shared state between concurrent requests.
#[derive(Debug)]
pub struct Catalog {
    records: Vec<JobRecord>,
    index: HashMap<String, usize>,
    skipped_rows: usize,
}

impl Catalog {
    /// Records in source order.
    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    /// Looks a record up by identifier.
    pub fn get(&self, id: &str) -> Option<&JobRecord> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    /// How many source rows were rejected during the load.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}

/// Reads and parses the catalog at `path`.
///
/// The source itself is all-or-nothing; individual bad rows (missing
/// identifier, duplicate identifier, malformed CSV) are skipped and
/// counted instead of failing the load.
pub fn load_catalog(
    path: &Path,
    normalizer: &dyn SkillNormalizer,
    max_bytes: u64,
) -> Result<Catalog, AppError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| AppError::CatalogUnavailable(format!("{}: {e}", path.display())))?;
    if metadata.len() > max_bytes {
        return Err(AppError::CatalogUnavailable(format!(
            "{} is {} bytes, over the {max_bytes} byte limit",
            path.display(),
            metadata.len(),
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| AppError::CatalogUnavailable(format!("{}: {e}", path.display())))?;

    let mut records: Vec<JobRecord> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut skipped_rows = 0usize;

    for (row_number, result) in reader.deserialize::<BTreeMap<String, String>>().enumerate() {
        let outcome = result
            .map_err(RowError::from)
            .and_then(|row| parse_row(&row, normalizer))
            .and_then(|record| {
                if index.contains_key(&record.id) {
                    Err(RowError::DuplicateId(record.id))
                } else {
                    Ok(record)
                }
            });

        match outcome {
            Ok(record) => {
                index.insert(record.id.clone(), records.len());
                records.push(record);
            }
            Err(err) => {
                skipped_rows += 1;
                // The header occupies line 1.
                warn!(line = row_number + 2, %err, "skipping catalog row");
            }
        }
    }

    if skipped_rows > 0 {
        warn!(skipped_rows, loaded = records.len(), "catalog loaded with skipped rows");
    }

    Ok(Catalog {
        records,
        index,
        skipped_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::normalize::SimpleSplitNormalizer;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn catalog_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn load(contents: &str) -> Result<Catalog, AppError> {
        let file = catalog_file(contents);
        load_catalog(file.path(), &SimpleSplitNormalizer, 1024 * 1024)
    }

    const WELL_FORMED: &str = "\
_id,skills,location,experience,title
1,\"[\"\"python\"\",\"\"sql\"\"]\",\"New York, NY\",fresher,Data Engineer
2,\"[\"\"python\"\",\"\"java\"\"]\",New York,,Backend Engineer
";

    #[test]
    fn test_loads_all_rows() {
        let catalog = load(WELL_FORMED).unwrap();
        assert_eq!(catalog.records().len(), 2);
        assert_eq!(catalog.skipped_rows(), 0);
        let first = &catalog.records()[0];
        assert_eq!(first.id, "1");
        assert!(first.skills.contains("python"));
        assert_eq!(first.location.as_deref(), Some("New York"));
        assert_eq!(
            first.extra.get("title").map(String::as_str),
            Some("Data Engineer")
        );
    }

    #[test]
    fn test_index_lookup() {
        let catalog = load(WELL_FORMED).unwrap();
        assert_eq!(catalog.get("2").unwrap().id, "2");
        assert!(catalog.get("99").is_none());
    }

    #[test]
    fn test_row_without_id_is_skipped_and_counted() {
        let catalog = load(
            "_id,skills\n1,\"[\"\"python\"\"]\"\n,\"[\"\"sql\"\"]\"\n2,\"[\"\"java\"\"]\"\n",
        )
        .unwrap();
        assert_eq!(catalog.records().len(), 2);
        assert_eq!(catalog.skipped_rows(), 1);
    }

    #[test]
    fn test_duplicate_id_keeps_first_row() {
        let catalog = load(
            "_id,skills\n1,\"[\"\"python\"\"]\"\n1,\"[\"\"sql\"\"]\"\n",
        )
        .unwrap();
        assert_eq!(catalog.records().len(), 1);
        assert_eq!(catalog.skipped_rows(), 1);
        assert!(catalog.get("1").unwrap().skills.contains("python"));
    }

    #[test]
    fn test_ragged_row_is_skipped() {
        let catalog = load("_id,skills,location\n1,\"[\"\"python\"\"]\"\n").unwrap();
        assert_eq!(catalog.records().len(), 0);
        assert_eq!(catalog.skipped_rows(), 1);
    }

    #[test]
    fn test_missing_file_is_catalog_unavailable() {
        let err = load_catalog(
            Path::new("/nonexistent/jobs.csv"),
            &SimpleSplitNormalizer,
            1024,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::CatalogUnavailable(_)));
    }

    #[test]
    fn test_oversized_file_is_catalog_unavailable() {
        let file = catalog_file(WELL_FORMED);
        let err = load_catalog(file.path(), &SimpleSplitNormalizer, 16).unwrap_err();
        assert!(matches!(err, AppError::CatalogUnavailable(_)));
    }

    #[test]
    fn test_empty_catalog_is_not_an_error() {
        let catalog = load("_id,skills\n").unwrap();
        assert!(catalog.records().is_empty());
        assert_eq!(catalog.skipped_rows(), 0);
    }
}
