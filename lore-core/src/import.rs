use serde::Serialize;

use crate::errors::ImportError;

/// Outcome of an `import_*` call.
///
/// Malformed records are skipped individually; the import itself always
/// completes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportReport {
    /// Records applied to the tracker state.
    pub imported: usize,
    /// Records skipped as malformed.
    pub skipped: usize,
    #[serde(skip)]
    pub errors: Vec<ImportError>,
}

impl ImportReport {
    pub fn record_imported(&mut self) {
        self.imported += 1;
    }

    pub fn record_skipped(&mut self, error: ImportError) {
        self.skipped += 1;
        self.errors.push(error);
    }

    /// True if every record was applied.
    pub fn is_clean(&self) -> bool {
        self.skipped == 0
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: ImportReport) {
        self.imported += other.imported;
        self.skipped += other.skipped;
        self.errors.extend(other.errors);
    }
}
