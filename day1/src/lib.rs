use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    InvalidValueText(String),
    NotEnoughGroups(usize, usize),
    InvalidPartNumber(u8),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidValueText(s) => {
                write!(f, "Invalid text({}) for value in group.", s)
            }
            Error::NotEnoughGroups(expect_n, this_n) => write!(
                f,
                "Expect at least {} group(s) in given input, given {}.",
                expect_n, this_n
            ),
            Error::InvalidPartNumber(n) => {
                write!(f, "Part number must be 1 or 2, given {}.", n)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub part_number: u8,
    pub input_path: PathBuf,
}

pub fn sum_of_largest(totals: &[usize], count: usize) -> Result<usize, Error> {
    if totals.len() < count {
        return Err(Error::NotEnoughGroups(count, totals.len()));
    }

    let mut sorted = totals.to_vec();
    sorted.sort_unstable_by(|l, r| r.cmp(l));

    Ok(sorted[..count].iter().sum())
}

#[test]
fn test_sum_of_largest() {
    let totals = [3, 7, 2, 9, 4];
    assert!(sum_of_largest(&totals, 1).unwrap() == 9);
    assert!(sum_of_largest(&totals, 3).unwrap() == 20);
}

#[test]
fn test_sum_of_largest_rejects_short_input() {
    let totals = [5, 6];
    assert!(sum_of_largest(&totals, 3).is_err());
    assert!(sum_of_largest(&[], 1).is_err());
}

#[test]
fn test_read_group_totals() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "1000\n2000\n3000\n\n4000\n\n5000\n6000\n\n7000\n8000\n9000\n\n10000\n"
    )
    .unwrap();
    let totals = read_group_totals(file.path()).unwrap();
    assert!(totals == vec![6000, 4000, 11000, 24000, 10000]);
}

#[test]
fn test_read_group_totals_keeps_empty_groups() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "1\n\n\n2\n").unwrap();
    let totals = read_group_totals(file.path()).unwrap();
    assert!(totals == vec![1, 0, 2]);
}

#[test]
fn test_read_group_totals_rejects_invalid_value() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "1000\n12a4\n\n").unwrap();
    assert!(read_group_totals(file.path()).is_err());

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "-5\n\n").unwrap();
    assert!(read_group_totals(file.path()).is_err());
}

pub fn read_group_totals<P: AsRef<Path>>(path: P) -> Result<Vec<usize>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut totals = Vec::new();
    let mut cur_total: Option<usize> = None;
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.is_empty() {
            totals.push(cur_total.take().unwrap_or(0));
            continue;
        }

        let value = line
            .parse::<usize>()
            .map_err(|_| Error::InvalidValueText(line.to_string()))
            .with_context(|| format!("Failed to parse group value from line {}.", ind + 1))?;
        *cur_total.get_or_insert(0) += value;
    }

    // A trailing group without a closing blank line still counts.
    if let Some(total) = cur_total.take() {
        totals.push(total);
    }

    Ok(totals)
}
