use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use clinica_scheduling::ScheduleData;

use super::{SCHEDULE_KEY, ScheduleRepository, StoreError};

/// One JSON file holding the whole aggregate, rewritten on every save.
///
/// There is no write-ahead step: a crash between the in-memory change and
/// this flush loses the change (documented in DESIGN.md).
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<platform data dir>/clinica/scheduleData.json`, or `None` when the
    /// platform has no data directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("clinica").join(format!("{SCHEDULE_KEY}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScheduleRepository for JsonFileRepository {
    fn load(&self) -> Result<Option<ScheduleData>, StoreError> {
        let blob = match fs::read_to_string(&self.path) {
            Ok(blob) => blob,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&blob)?))
    }

    fn save(&self, data: &ScheduleData) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(data)?)?;
        Ok(())
    }
}
