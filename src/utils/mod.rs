mod union_find;
pub use union_find::UnionFind;

mod threadpool;
pub use threadpool::Threads;

pub mod input;
