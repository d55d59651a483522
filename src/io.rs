//! File formats for matrices, lows, and intervals
//!
//! # Formats
//!
//! - **Input sparse matrix** (text): a header line `n nnz`, then `nnz` lines
//!   `row col` with 0-based decimal indices.
//! - **Lows**: `n` lines, one signed decimal per line; `-1` means the column
//!   is empty.
//! - **Dense matrix**: `n` lines of `n` space-separated `0`/`1` digits.
//! - **Intervals**: one `birth death` line per interval; `death = -1` marks
//!   an essential class.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::intervals::PersistenceInterval;
use crate::matrix::BoundaryMatrix;

/// Read a sparse matrix file into coordinate arrays
///
/// Returns `(col_idxs, row_idxs, n)` suitable for
/// [`BoundaryMatrix::from_coo`]. Index validation is the constructor's job;
/// this reader only checks the file's shape.
///
/// # Errors
///
/// Returns [`Error::Io`] on filesystem failures and [`Error::ParseInput`] if
/// the header or an entry line is malformed or the entry count disagrees with
/// the header.
pub fn read_sparse_matrix(path: &Path) -> Result<(Vec<i32>, Vec<i32>, usize)> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = reader.lines();

    let header = lines
        .next()
        .ok_or_else(|| Error::parse_input(1, "missing `n nnz` header"))??;
    let mut fields = header.split_whitespace();
    let n: usize = parse_field(fields.next(), 1, "matrix size `n`")?;
    let nnz: usize = parse_field(fields.next(), 1, "entry count `nnz`")?;
    if fields.next().is_some() {
        return Err(Error::parse_input(1, "expected exactly `n nnz`"));
    }

    let mut col_idxs = Vec::with_capacity(nnz);
    let mut row_idxs = Vec::with_capacity(nnz);
    for (idx, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let lineno = idx + 2;
        let mut fields = line.split_whitespace();
        let row: i32 = parse_field(fields.next(), lineno, "row index")?;
        let col: i32 = parse_field(fields.next(), lineno, "column index")?;
        if fields.next().is_some() {
            return Err(Error::parse_input(lineno, "expected exactly `row col`"));
        }
        row_idxs.push(row);
        col_idxs.push(col);
    }

    if col_idxs.len() != nnz {
        return Err(Error::parse_input(
            1,
            format!("header declares {} entries, file has {}", nnz, col_idxs.len()),
        ));
    }

    Ok((col_idxs, row_idxs, n))
}

fn parse_field<T: std::str::FromStr>(
    field: Option<&str>,
    line: usize,
    what: &str,
) -> Result<T> {
    let text = field.ok_or_else(|| Error::parse_input(line, format!("missing {what}")))?;
    text.parse()
        .map_err(|_| Error::parse_input(line, format!("invalid {what}: `{text}`")))
}

/// Write a lows array, one value per line, `-1` for undefined
pub fn write_lows(path: &Path, lows: &[Option<u32>]) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for low in lows {
        match low {
            Some(r) => writeln!(out, "{r}")?,
            None => writeln!(out, "-1")?,
        }
    }
    out.flush()?;
    Ok(())
}

/// Write the dense 0/1 form of a state, one matrix row per line
pub fn write_dense_matrix(path: &Path, state: &BoundaryMatrix) -> Result<()> {
    let n = state.n();
    let dense = state.to_dense()?;
    let mut out = BufWriter::new(File::create(path)?);
    for i in 0..n {
        let row = &dense[i * n..(i + 1) * n];
        let mut sep = "";
        for v in row {
            write!(out, "{sep}{v}")?;
            sep = " ";
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// Write persistence intervals, one `birth death` pair per line
pub fn write_intervals(path: &Path, intervals: &[PersistenceInterval]) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for iv in intervals {
        match iv.death {
            Some(d) => writeln!(out, "{} {}", iv.birth, d)?,
            None => writeln!(out, "{} -1", iv.birth)?,
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_sparse_matrix() {
        let file = write_temp("3 3\n0 1\n0 2\n1 2\n");
        let (cols, rows, n) = read_sparse_matrix(file.path()).unwrap();
        assert_eq!(n, 3);
        assert_eq!(cols, vec![1, 2, 2]);
        assert_eq!(rows, vec![0, 0, 1]);
    }

    #[test]
    fn test_read_skips_blank_lines() {
        let file = write_temp("2 1\n\n0 1\n\n");
        let (cols, rows, n) = read_sparse_matrix(file.path()).unwrap();
        assert_eq!((cols, rows, n), (vec![1], vec![0], 2));
    }

    #[test]
    fn test_read_rejects_bad_header() {
        let file = write_temp("3\n");
        assert!(matches!(
            read_sparse_matrix(file.path()).unwrap_err(),
            Error::ParseInput { line: 1, .. }
        ));
    }

    #[test]
    fn test_read_rejects_entry_count_mismatch() {
        let file = write_temp("3 2\n0 1\n");
        assert!(matches!(
            read_sparse_matrix(file.path()).unwrap_err(),
            Error::ParseInput { .. }
        ));
    }

    #[test]
    fn test_read_rejects_garbage_entry() {
        let file = write_temp("3 1\n0 x\n");
        assert!(matches!(
            read_sparse_matrix(file.path()).unwrap_err(),
            Error::ParseInput { line: 2, .. }
        ));
    }

    #[test]
    fn test_write_lows_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lows.txt");
        write_lows(&path, &[None, Some(0), Some(1)]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "-1\n0\n1\n");
    }

    #[test]
    fn test_write_dense_matrix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dense.txt");
        let m = BoundaryMatrix::from_coo(&[1, 2, 2], &[0, 0, 1], 3).unwrap();
        write_dense_matrix(&path, &m).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "0 1 1\n0 0 1\n0 0 0\n"
        );
    }

    #[test]
    fn test_write_intervals_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intervals.txt");
        let intervals = vec![
            PersistenceInterval {
                birth: 0,
                death: None,
            },
            PersistenceInterval {
                birth: 1,
                death: Some(2),
            },
        ];
        write_intervals(&path, &intervals).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "0 -1\n1 2\n");
    }

    #[test]
    fn test_file_round_trip() {
        let file = write_temp("4 3\n0 2\n1 2\n2 3\n");
        let (cols, rows, n) = read_sparse_matrix(file.path()).unwrap();
        let m = BoundaryMatrix::from_coo(&cols, &rows, n).unwrap();
        let (cols2, rows2) = m.to_coo();
        let back = BoundaryMatrix::from_coo(&cols2, &rows2, n).unwrap();
        assert_eq!(back, m);
    }
}
