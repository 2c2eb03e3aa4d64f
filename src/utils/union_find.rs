/// A disjoint-set forest using union by size and path compression.
///
/// Elements are the integers in `0..len()`. Queries ([`find`](Self::find),
/// [`connected`](Self::connected)) take a shared reference and do not
/// compress paths; since trees are merged by size their height is
/// logarithmic, so a query costs *O*(log *n*). Paths are compressed
/// during [`union`](Self::union).
///
/// # Examples
///
/// ```
/// use percolation_algo::utils::UnionFind;
///
/// let mut uf = UnionFind::new(4);
/// assert!(uf.union(0, 1));
/// assert!(!uf.union(1, 0));
/// assert!(uf.connected(0, 1));
/// assert!(!uf.connected(0, 2));
/// assert_eq!(uf.count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    /// The parent of each element; roots are their own parent.
    parent: Box<[usize]>,
    /// The size of the tree rooted at each element (meaningful only
    /// for roots).
    size: Box<[usize]>,
    /// The number of components.
    count: usize,
}

impl UnionFind {
    /// Creates a new forest of `n` singleton components.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n].into_boxed_slice(),
            count: n,
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the representative of the component of `x`.
    pub fn find(&self, mut x: usize) -> usize {
        debug_assert!(x < self.len());
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    /// Finds the root of `x`, pointing every node on the path directly to it.
    fn find_compress(&mut self, x: usize) -> usize {
        let root = self.find(x);
        let mut x = x;
        while self.parent[x] != root {
            let next = self.parent[x];
            self.parent[x] = root;
            x = next;
        }
        root
    }

    /// Returns true if `a` and `b` are in the same component.
    pub fn connected(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Merges the components of `a` and `b`.
    ///
    /// Returns true if the two elements were in different components.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        debug_assert!(a < self.len());
        debug_assert!(b < self.len());
        let a = self.find_compress(a);
        let b = self.find_compress(b);
        if a == b {
            return false;
        }
        // The smaller tree goes below the larger one
        let (small, large) = if self.size[a] < self.size[b] {
            (a, b)
        } else {
            (b, a)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        self.count -= 1;
        true
    }
}
