//! Readers for whitespace-delimited integer input.
//!
//! A site sequence is a grid size followed by (row, column) pairs; an arc
//! list is a sequence of (source, target) pairs. Tokens may be separated by
//! any whitespace, including newlines.

use crate::algo::percolation::{Percolation, PercolationError};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading integer input.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("I/O error")]
    Io(#[from] io::Error),
    /// The input does not start with a grid size.
    #[error("missing grid size")]
    MissingSize,
    /// A token is not a nonnegative integer.
    #[error("invalid token {token:?} at position {position}")]
    InvalidToken { token: String, position: usize },
    /// The number of coordinates is odd.
    #[error("the last pair is missing its second coordinate")]
    DanglingCoordinate,
}

/// Reads all whitespace-delimited integers of a reader.
///
/// Positions in errors are 0-based token indices.
fn read_integers(reader: impl BufRead) -> Result<Vec<usize>, InputError> {
    let mut values = Vec::new();
    for line in reader.lines() {
        for token in line?.split_whitespace() {
            let value = token.parse().map_err(|_| InputError::InvalidToken {
                token: token.to_owned(),
                position: values.len(),
            })?;
            values.push(value);
        }
    }
    Ok(values)
}

fn into_pairs(values: &[usize]) -> Result<Vec<(usize, usize)>, InputError> {
    if values.len() % 2 != 0 {
        return Err(InputError::DanglingCoordinate);
    }
    Ok(values.chunks_exact(2).map(|p| (p[0], p[1])).collect())
}

/// A grid size and a sequence of sites to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSequence {
    /// The side of the grid.
    pub n: usize,
    /// The 1-based (row, column) sites, in opening order.
    pub sites: Vec<(usize, usize)>,
}

impl SiteSequence {
    /// Reads a site sequence.
    ///
    /// Sites are not validated against the grid size: out-of-range sites
    /// are reported when the sequence is [replayed](Self::replay).
    pub fn from_reader(reader: impl BufRead) -> Result<Self, InputError> {
        let values = read_integers(reader)?;
        let (&n, rest) = values.split_first().ok_or(InputError::MissingSize)?;
        Ok(Self {
            n,
            sites: into_pairs(rest)?,
        })
    }

    /// Reads a site sequence from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InputError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Creates a grid and opens all sites in order.
    pub fn replay(&self) -> Result<Percolation, PercolationError> {
        let mut perc = Percolation::new(self.n)?;
        for &(row, col) in &self.sites {
            perc.open(row, col)?;
        }
        Ok(perc)
    }
}

/// Reads a list of arcs, given as pairs of node indices.
pub fn read_arcs(reader: impl BufRead) -> Result<Vec<(usize, usize)>, InputError> {
    into_pairs(&read_integers(reader)?)
}
