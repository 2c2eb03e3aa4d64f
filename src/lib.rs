/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

pub mod algo;
pub mod utils;

/// Use `use percolation_algo::prelude::*;` to import common utilities and
/// modules.
pub mod prelude {
    use super::*;
    pub use algo::percolation::{Percolation, PercolationError};
    pub use algo::trials::{run_trial, TrialOutcome, TrialStats, Trials};
    pub use algo::{depth_first_order, DepthFirstOrder};
    pub use utils::input::{read_arcs, InputError, SiteSequence};
    pub use utils::{Threads, UnionFind};
}
