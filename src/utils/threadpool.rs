use anyhow::{Context, Result};

/// The number of threads of a [`rayon::ThreadPool`] running independent
/// trials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Threads {
    /// As many threads as rayon's default.
    #[default]
    Default,
    NumThreads(usize),
}

impl Threads {
    pub fn build(self) -> Result<rayon::ThreadPool> {
        match self {
            Self::Default => rayon::ThreadPoolBuilder::new()
                .build()
                .context("Could not build default threadpool"),
            Self::NumThreads(num_threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()
                .with_context(|| {
                    format!("Could not build threadpool with {} threads", num_threads)
                }),
        }
    }
}

impl From<Option<usize>> for Threads {
    fn from(num_threads: Option<usize>) -> Self {
        match num_threads {
            Some(num_threads) => Self::NumThreads(num_threads),
            None => Self::Default,
        }
    }
}
