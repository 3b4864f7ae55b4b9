//! CSV readers for the raw movie dataset.
//!
//! Both files are plain quoted CSV with a header row. The structured
//! columns (genres, cast, crew, ...) contain embedded JSON array strings;
//! they are carried through verbatim here and parsed by the feature
//! extraction stage, which owns the recover-to-empty policy for malformed
//! entries. A malformed CSV *record*, by contrast, is a hard error: it
//! means the file itself is damaged, not just one attribute field.

use crate::error::{DataLoadError, Result};
use crate::types::{RawCreditsRecord, RawMovieRecord};
use std::path::Path;
use tracing::info;

/// Read `movies.csv` into raw records, in file order.
pub fn read_movies(path: &Path) -> Result<Vec<RawMovieRecord>> {
    let records = read_csv(path)?;
    info!("Loaded {} movie records from {}", records.len(), path.display());
    Ok(records)
}

/// Read `credits.csv` into raw records, in file order.
pub fn read_credits(path: &Path) -> Result<Vec<RawCreditsRecord>> {
    let records = read_csv(path)?;
    info!("Loaded {} credit records from {}", records.len(), path.display());
    Ok(records)
}

/// Shared reader: deserialize every row of a headered CSV file.
fn read_csv<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.is_file() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mut reader = csv::Reader::from_path(path).map_err(|source| DataLoadError::DecodeError {
        file: file_name.clone(),
        source,
    })?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: T = row.map_err(|source| DataLoadError::DecodeError {
            file: file_name.clone(),
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_read_movies_parses_quoted_json_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "movies.csv",
            concat!(
                "id,title,overview,genres,keywords,release_date,runtime,vote_average,vote_count,popularity\n",
                "19995,Avatar,A marine on an alien world.,\"[{\"\"id\"\": 28, \"\"name\"\": \"\"Action\"\"}]\",\"[]\",2009-12-10,162.0,7.2,11800,150.4\n",
            ),
        );

        let movies = read_movies(&path).unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].id, 19995);
        assert_eq!(movies[0].title, "Avatar");
        assert_eq!(movies[0].genres, r#"[{"id": 28, "name": "Action"}]"#);
        assert_eq!(movies[0].release_date.as_deref(), Some("2009-12-10"));
        assert_eq!(movies[0].vote_count, Some(11800));
    }

    #[test]
    fn test_read_movies_empty_optionals_become_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "movies.csv",
            concat!(
                "id,title,overview,genres,keywords,release_date,runtime,vote_average,vote_count,popularity\n",
                "42,No Data,,[],[],,,,,\n",
            ),
        );

        let movies = read_movies(&path).unwrap();
        assert_eq!(movies.len(), 1);
        assert!(movies[0].overview.as_deref().unwrap_or("").is_empty());
        assert_eq!(movies[0].release_date.as_deref().unwrap_or(""), "");
        assert_eq!(movies[0].runtime, None);
        assert_eq!(movies[0].vote_count, None);
    }

    #[test]
    fn test_read_credits() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "credits.csv",
            concat!(
                "movie_id,title,cast,crew\n",
                "19995,Avatar,\"[{\"\"name\"\": \"\"Sam Worthington\"\"}]\",\"[{\"\"job\"\": \"\"Director\"\", \"\"name\"\": \"\"James Cameron\"\"}]\"\n",
            ),
        );

        let credits = read_credits(&path).unwrap();
        assert_eq!(credits.len(), 1);
        assert_eq!(credits[0].movie_id, 19995);
        assert!(credits[0].crew.contains("James Cameron"));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_movies(&dir.path().join("nope.csv"));
        assert!(matches!(result, Err(DataLoadError::FileNotFound { .. })));
    }

    #[test]
    fn test_damaged_record_is_a_hard_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "movies.csv",
            concat!(
                "id,title,overview,genres,keywords,release_date,runtime,vote_average,vote_count,popularity\n",
                "not-a-number,Broken,text,[],[],2000-01-01,100.0,5.0,10,1.0\n",
            ),
        );

        let result = read_movies(&path);
        assert!(matches!(result, Err(DataLoadError::DecodeError { .. })));
    }
}
