use percolation_algo::utils::UnionFind;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_singletons() {
    let uf = UnionFind::new(5);
    assert_eq!(uf.len(), 5);
    assert_eq!(uf.count(), 5);
    for x in 0..5 {
        assert_eq!(uf.find(x), x);
    }
    assert!(UnionFind::new(0).is_empty());
}

#[test]
fn test_union() {
    let mut uf = UnionFind::new(10);
    assert!(uf.union(4, 3));
    assert!(uf.union(3, 8));
    assert!(uf.union(6, 5));
    assert!(uf.union(9, 4));
    assert!(uf.union(2, 1));
    assert!(!uf.union(8, 9));
    assert!(uf.union(5, 0));
    assert!(uf.union(7, 2));
    assert!(uf.union(6, 1));
    assert_eq!(uf.count(), 2);

    assert!(uf.connected(0, 7));
    assert!(uf.connected(3, 9));
    assert!(!uf.connected(0, 9));
    assert_eq!(uf.find(8), uf.find(4));
}

#[test]
fn test_against_labels() {
    // Compare with a naive relabeling implementation
    let n = 200;
    let mut rng = StdRng::seed_from_u64(42);
    let mut uf = UnionFind::new(n);
    let mut label: Vec<usize> = (0..n).collect();

    for _ in 0..300 {
        let a = rng.random_range(0..n);
        let b = rng.random_range(0..n);
        let (la, lb) = (label[a], label[b]);
        assert_eq!(uf.union(a, b), la != lb);
        if la != lb {
            for l in label.iter_mut() {
                if *l == lb {
                    *l = la;
                }
            }
        }

        let x = rng.random_range(0..n);
        let y = rng.random_range(0..n);
        assert_eq!(uf.connected(x, y), label[x] == label[y]);
    }

    let mut distinct = label.clone();
    distinct.sort_unstable();
    distinct.dedup();
    assert_eq!(uf.count(), distinct.len());
}
