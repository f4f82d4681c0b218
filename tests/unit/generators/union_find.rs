use super::*;

#[test]
fn union_merges_and_detects_cycles() {
    let mut uf = UnionFind::new(4);
    assert_eq!(uf.sets(), 4);
    assert!(uf.union(0, 1));
    assert!(uf.union(2, 3));
    assert!(!uf.connected(1, 2));
    assert!(uf.union(1, 3));
    assert!(uf.connected(0, 2));
    assert!(!uf.union(0, 3));
    assert_eq!(uf.sets(), 1);
}

#[test]
fn find_compresses_paths() {
    let mut uf = UnionFind::new(5);
    for i in 0..4 {
        uf.union(i, i + 1);
    }
    let root = uf.find(4);
    for i in 0..5 {
        assert_eq!(uf.parent[i], root);
    }
}

#[test]
fn empty_forest() {
    let uf = UnionFind::new(0);
    assert!(uf.is_empty());
    assert_eq!(uf.len(), 0);
    assert_eq!(uf.sets(), 0);
}
