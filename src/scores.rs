use std::{fs, io, path::PathBuf};
#[cfg(test)]
use std::path::Path;

use log::{debug, info, warn};
use thiserror::Error;

pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("could not access score file {path}")]
    Io { path: PathBuf, #[source] source: io::Error },
}

/// High-score table kept as one integer per line, best first.
pub struct ScoreStore {
    path: PathBuf,
    capacity: usize,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_capacity(path, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(path: impl Into<PathBuf>, capacity: usize) -> Self {
        ScoreStore { path: path.into(), capacity }
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file just means nobody has played yet.
    pub fn load(&self) -> Result<Vec<u32>, ScoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no score file at {}", self.path.display());
                return Ok(vec![]);
            }
            Err(source) => return Err(ScoreError::Io { path: self.path.clone(), source }),
        };

        // Lines that aren't scores are dropped, the next save rewrites the file without them
        let mut scores: Vec<u32> = contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(i, line)| match line.trim().parse::<u32>() {
                Ok(score) => Some(score),
                Err(e) => {
                    warn!("skipping line {} of {}: {:?} ({})", i + 1, self.path.display(), line, e);
                    None
                }
            })
            .collect();

        self.rank(&mut scores);
        Ok(scores)
    }

    /// Adds `score` to the table and rewrites the file. Returns the new table.
    pub fn save(&self, score: u32) -> Result<Vec<u32>, ScoreError> {
        let mut scores = self.load()?;
        scores.push(score);
        self.rank(&mut scores);

        let contents: String = scores.iter().map(|s| format!("{}\n", s)).collect();
        fs::write(&self.path, contents)
            .map_err(|source| ScoreError::Io { path: self.path.clone(), source })?;

        info!("saved score {} to {}", score, self.path.display());
        Ok(scores)
    }

    pub fn top_n(&self, n: usize) -> Result<Vec<u32>, ScoreError> {
        let mut scores = self.load()?;
        scores.truncate(n);
        Ok(scores)
    }

    fn rank(&self, scores: &mut Vec<u32>) {
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores.truncate(self.capacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ScoreStore {
        ScoreStore::new(dir.path().join("scores.txt"))
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store_in(&dir).load().unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn first_save_creates_the_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.save(7).unwrap(), vec![7]);
        assert_eq!(store.load().unwrap(), vec![7]);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "7\n");
    }

    #[test]
    fn keeps_the_ten_best_in_descending_order() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        for s in &[5, 12, 3, 12, 7, 9, 1, 8, 6, 4, 11] {
            store.save(*s).unwrap();
        }

        assert_eq!(store.load().unwrap(), vec![12, 12, 11, 9, 8, 7, 6, 5, 4, 3]);
        let file = fs::read_to_string(store.path()).unwrap();
        assert_eq!(file.lines().count(), 10);
        assert_eq!(file, "12\n12\n11\n9\n8\n7\n6\n5\n4\n3\n");
    }

    #[test]
    fn top_n_is_a_prefix() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        for s in &[2, 9, 4] {
            store.save(*s).unwrap();
        }
        assert_eq!(store.top_n(2).unwrap(), vec![9, 4]);
        assert_eq!(store.top_n(50).unwrap(), vec![9, 4, 2]);
    }

    #[test]
    fn tolerates_unsorted_files_and_blank_lines() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "3\n\n10\n 4 \n").unwrap();
        assert_eq!(store.load().unwrap(), vec![10, 4, 3]);
    }

    #[test]
    fn malformed_lines_are_skipped_and_dropped_on_save() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "5\n-1\nabc\n").unwrap();
        assert_eq!(store.load().unwrap(), vec![5]);

        assert_eq!(store.save(9).unwrap(), vec![9, 5]);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "9\n5\n");
    }

    #[test]
    fn unreadable_store_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be
        let store = ScoreStore::new(dir.path());
        assert!(matches!(store.load(), Err(ScoreError::Io { .. })));
        assert!(matches!(store.save(3), Err(ScoreError::Io { .. })));
    }

    #[test]
    fn smaller_capacity() {
        let dir = TempDir::new().unwrap();
        let store = ScoreStore::with_capacity(dir.path().join("s"), 2);
        store.save(1).unwrap();
        store.save(3).unwrap();
        assert_eq!(store.save(2).unwrap(), vec![3, 2]);
    }
}
