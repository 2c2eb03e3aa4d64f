use crate::utils::UnionFind;
use std::fmt;
use sux::bits::BitVec;
use thiserror::Error;

/// Errors raised by [`Percolation`].
///
/// Errors are always raised before the grid is modified.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercolationError {
    /// The grid size is zero, or too large to index its sites.
    #[error("invalid grid size {0}")]
    InvalidArgument(usize),
    /// A row or column is outside `[1..n]`.
    #[error("site ({row}, {col}) is outside of a {n}x{n} grid")]
    IndexOutOfRange { row: usize, col: usize, n: usize },
}

/// Returns the number of sites of an *n*×*n* grid.
///
/// # Errors
///
/// [`PercolationError::InvalidArgument`] if `n` is zero or if *n*² + 2
/// does not fit a `usize`, that is, if [`Percolation::new`] would fail.
pub fn num_sites(n: usize) -> Result<usize, PercolationError> {
    n.checked_mul(n)
        .filter(|&sites| sites != 0 && sites.checked_add(2).is_some())
        .ok_or(PercolationError::InvalidArgument(n))
}

/// An *n*×*n* percolation system.
///
/// Sites are identified by their 1-based row and column, with `(1, 1)` in the
/// upper-left corner. Sites start blocked and can only be opened. The system
/// percolates if there is a path of edge-adjacent open sites from the top row
/// to the bottom row.
///
/// Connectivity is tracked by two [union-find](UnionFind) structures. Site
/// `(r, c)` is element `(r - 1) * n + (c - 1)` in both; element *n*² is a
/// virtual top node, joined to every open site of the first row. The
/// percolation structure has a further virtual bottom node, element *n*² + 1,
/// joined to every open site of the last row: the system percolates when the
/// two virtual nodes are connected. The fullness structure has no virtual
/// bottom node, as otherwise every open site of the last row would look full
/// as soon as the system percolates (the *backwash* problem).
///
/// # Examples
///
/// ```
/// use percolation_algo::algo::percolation::Percolation;
///
/// let mut perc = Percolation::new(2)?;
/// perc.open(1, 1)?;
/// assert!(!perc.percolates());
/// perc.open(2, 1)?;
/// assert!(perc.percolates());
/// assert!(perc.is_full(2, 1)?);
/// assert!(!perc.is_open(1, 2)?);
/// # Ok::<(), percolation_algo::algo::percolation::PercolationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Percolation {
    n: usize,
    open: BitVec,
    num_open: usize,
    /// Sites plus virtual top and virtual bottom.
    percolation: UnionFind,
    /// Sites plus virtual top.
    fullness: UnionFind,
}

impl Percolation {
    /// Creates an *n*×*n* grid with all sites blocked.
    ///
    /// # Errors
    ///
    /// [`PercolationError::InvalidArgument`] if `n` is zero or if *n*² + 2
    /// does not fit a `usize`.
    pub fn new(n: usize) -> Result<Self, PercolationError> {
        let num_sites = num_sites(n)?;
        Ok(Self {
            n,
            open: BitVec::new(num_sites),
            num_open: 0,
            percolation: UnionFind::new(num_sites + 2),
            fullness: UnionFind::new(num_sites + 1),
        })
    }

    /// Returns the side of the grid.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Returns the number of open sites.
    pub fn num_open_sites(&self) -> usize {
        self.num_open
    }

    #[inline(always)]
    fn top(&self) -> usize {
        self.n * self.n
    }

    #[inline(always)]
    fn bottom(&self) -> usize {
        self.n * self.n + 1
    }

    /// Returns the element associated with a site, checking bounds.
    fn index(&self, row: usize, col: usize) -> Result<usize, PercolationError> {
        if row == 0 || row > self.n || col == 0 || col > self.n {
            return Err(PercolationError::IndexOutOfRange {
                row,
                col,
                n: self.n,
            });
        }
        Ok((row - 1) * self.n + (col - 1))
    }

    /// Opens a site, if it is not open already.
    ///
    /// The site is joined with its open neighbors and, if it lies on the
    /// first or last row, with the corresponding virtual nodes.
    ///
    /// # Errors
    ///
    /// [`PercolationError::IndexOutOfRange`] if `row` or `col` are not in
    /// `[1..n]`.
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), PercolationError> {
        let site = self.index(row, col)?;
        if self.open.get(site) {
            return Ok(());
        }
        self.open.set(site, true);
        self.num_open += 1;

        let n = self.n;
        if row == 1 {
            let top = self.top();
            self.percolation.union(site, top);
            self.fullness.union(site, top);
        }
        // Not an else: with n = 1 the only site touches both virtual nodes
        if row == n {
            let bottom = self.bottom();
            self.percolation.union(site, bottom);
        }

        if row > 1 {
            self.join_if_open(site, site - n);
        }
        if row < n {
            self.join_if_open(site, site + n);
        }
        if col > 1 {
            self.join_if_open(site, site - 1);
        }
        if col < n {
            self.join_if_open(site, site + 1);
        }

        Ok(())
    }

    fn join_if_open(&mut self, site: usize, neighbor: usize) {
        if self.open.get(neighbor) {
            self.percolation.union(site, neighbor);
            self.fullness.union(site, neighbor);
        }
    }

    /// Returns whether a site is open.
    ///
    /// # Errors
    ///
    /// [`PercolationError::IndexOutOfRange`] if `row` or `col` are not in
    /// `[1..n]`.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
        Ok(self.open.get(self.index(row, col)?))
    }

    /// Returns whether a site is full, that is, open and connected to the
    /// top row through open sites.
    ///
    /// # Errors
    ///
    /// [`PercolationError::IndexOutOfRange`] if `row` or `col` are not in
    /// `[1..n]`.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
        let site = self.index(row, col)?;
        Ok(self.open.get(site) && self.fullness.connected(site, self.top()))
    }

    /// Returns whether the system percolates.
    pub fn percolates(&self) -> bool {
        self.percolation.connected(self.top(), self.bottom())
    }
}

/// Renders the grid one row per line: `#` for blocked sites, `.` for open
/// sites and `*` for full sites.
impl fmt::Display for Percolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top = self.top();
        for row in 0..self.n {
            for col in 0..self.n {
                let site = row * self.n + col;
                let c = if !self.open.get(site) {
                    '#'
                } else if self.fullness.connected(site, top) {
                    '*'
                } else {
                    '.'
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
