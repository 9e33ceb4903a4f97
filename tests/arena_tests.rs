use sokosolve::StateArena;

#[test]
fn alloc_shapes_records_and_links_parents() {
    let mut arena = StateArena::new(3);
    assert_eq!(arena.record_len(), 4);

    let root = arena.alloc(None);
    let child = arena.alloc(Some(root));

    assert_eq!(arena.get(root).cells.len(), 4);
    assert_eq!(arena.get(root).hash, 0, "fresh records carry no hash");
    assert_eq!(arena.get(root).prev, None);
    assert_eq!(arena.get(child).prev, Some(root));
}

#[test]
fn release_then_alloc_reuses_the_handle() {
    let mut arena = StateArena::new(1);
    let root = arena.alloc(None);
    let rejected = arena.alloc(Some(root));
    arena.get_mut(rejected).cells.copy_from_slice(&[9, 9]);
    arena.get_mut(rejected).hash = 1234;

    arena.release(rejected);
    assert_eq!(arena.free_count(), 1);

    let reused = arena.alloc(Some(root));
    assert_eq!(reused, rejected, "freed handle comes back first");
    assert_eq!(arena.free_count(), 0);
    assert_eq!(arena.len(), 2, "no new backing record was created");
    assert_eq!(arena.get(reused).hash, 0, "reused record is reset");
    assert_eq!(arena.get(reused).qnext, None);
}

#[test]
fn conservation_across_alloc_release_cycles() {
    let mut arena = StateArena::new(2);
    let ids: Vec<_> = (0..5).map(|_| arena.alloc(None)).collect();
    assert_eq!(arena.len(), 5);

    arena.release(ids[1]);
    arena.release(ids[3]);
    assert_eq!(arena.free_count(), 2);

    let _a = arena.alloc(None);
    let _b = arena.alloc(None);
    assert_eq!(arena.len(), 5, "freed records are reused, not leaked");
    assert_eq!(arena.free_count(), 0);
}
