//! Concurrent line counting over a set of files.
//!
//! Each file is counted by its own tokio task; a semaphore caps how many run
//! at once. Results come back in completion order. A failing file is logged
//! and reported on its own without cancelling the others.

use std::path::{Path, PathBuf};

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{error, info};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error_handling::TaskError;
use crate::initialization::init_semaphore;

/// Line count (or failure) for one file.
#[derive(Debug)]
pub struct LineCount {
    /// File that was counted
    pub path: PathBuf,
    /// Number of lines, or why counting failed
    pub result: Result<usize, TaskError>,
}

/// Counts every line of `path`, empty ones included.
///
/// A final line without a trailing newline still counts. The file is read
/// through a buffer; lines are never held in memory.
///
/// # Errors
///
/// Returns [`TaskError::NotFound`] or [`TaskError::Io`] if the file can't be
/// opened or read.
pub async fn count_lines(path: &Path) -> Result<usize, TaskError> {
    let file = File::open(path)
        .await
        .map_err(|e| TaskError::from_io(path.to_path_buf(), e))?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    let mut count = 0usize;
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .await
            .map_err(|e| TaskError::from_io(path.to_path_buf(), e))?;
        if read == 0 {
            break;
        }
        count += 1;
    }
    Ok(count)
}

/// Counts lines in every file of `paths` with at most `workers` files open
/// at once.
///
/// Returns one [`LineCount`] per path, in the order the tasks finished.
/// Successes are logged at info, failures at error.
pub async fn count_lines_parallel<I, P>(paths: I, workers: usize) -> Vec<LineCount>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let semaphore = init_semaphore(workers);
    let mut tasks = FuturesUnordered::new();

    for path in paths {
        let path = path.as_ref().to_path_buf();
        let semaphore = semaphore.clone();
        let task_path = path.clone();
        let handle = tokio::spawn(async move {
            let _permit = semaphore.acquire_owned().await.map_err(|e| TaskError::Panicked {
                path: task_path.clone(),
                reason: e.to_string(),
            })?;
            count_lines(&task_path).await
        });
        tasks.push(async move {
            let result = match handle.await {
                Ok(result) => result,
                Err(join_error) => Err(TaskError::Panicked {
                    path: path.clone(),
                    reason: join_error.to_string(),
                }),
            };
            LineCount { path, result }
        });
    }

    let mut results = Vec::with_capacity(tasks.len());
    while let Some(count) = tasks.next().await {
        match &count.result {
            Ok(lines) => info!("File {} has {} lines", count.path.display(), lines),
            Err(e) => error!("Error processing {}: {}", count.path.display(), e),
        }
        results.push(count);
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("Failed to create file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write file");
        path
    }

    #[tokio::test]
    async fn test_count_lines_includes_empty_lines() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "a.txt", "one\n\nthree\n");
        assert_eq!(count_lines(&path).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_count_lines_without_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "a.txt", "one\ntwo");
        assert_eq!(count_lines(&path).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_count_lines_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "empty.txt", "");
        assert_eq!(count_lines(&path).await.unwrap(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_parallel_counts_match_each_file() {
        let dir = TempDir::new().unwrap();
        let three = write_file(&dir, "three.txt", "a\nb\nc\n");
        let zero = write_file(&dir, "zero.txt", "");
        let five = write_file(&dir, "five.txt", "1\n2\n3\n4\n5\n");

        let results = count_lines_parallel([&three, &zero, &five], 4).await;
        assert_eq!(results.len(), 3);

        let counts: HashMap<PathBuf, usize> = results
            .into_iter()
            .map(|c| (c.path, c.result.unwrap()))
            .collect();
        assert_eq!(counts[&three], 3);
        assert_eq!(counts[&zero], 0);
        assert_eq!(counts[&five], 5);
    }

    #[tokio::test]
    async fn test_parallel_failure_does_not_cancel_siblings() {
        let dir = TempDir::new().unwrap();
        let good = write_file(&dir, "good.txt", "x\ny\n");
        let missing = dir.path().join("missing.txt");

        let results = count_lines_parallel(vec![missing.clone(), good.clone()], 2).await;
        assert_eq!(results.len(), 2);

        for count in results {
            if count.path == good {
                assert_eq!(count.result.unwrap(), 2);
            } else {
                assert_eq!(count.path, missing);
                assert!(matches!(count.result, Err(TaskError::NotFound { .. })));
            }
        }
    }

    #[tokio::test]
    async fn test_single_worker_still_counts_everything() {
        let dir = TempDir::new().unwrap();
        let paths: Vec<PathBuf> = (0..6)
            .map(|i| write_file(&dir, &format!("f{i}.txt"), &"line\n".repeat(i)))
            .collect();

        let results = count_lines_parallel(&paths, 1).await;
        let total: usize = results.into_iter().map(|c| c.result.unwrap()).sum();
        assert_eq!(total, 1 + 2 + 3 + 4 + 5);
    }

    #[tokio::test]
    async fn test_no_paths() {
        let results = count_lines_parallel(Vec::<PathBuf>::new(), 4).await;
        assert!(results.is_empty());
    }
}
