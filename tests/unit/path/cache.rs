use super::*;

fn artifact(d: &str) -> Arc<PathArtifact> {
    Arc::new(PathArtifact::new(d).unwrap())
}

#[test]
fn get_put_clear() {
    let mut cache = PathCache::new();
    let c3 = Complexity::new(3).unwrap();
    assert!(cache.get(c3).is_none());

    let a = artifact("M0 0 L10 10");
    cache.put(c3, a.clone());
    assert!(Arc::ptr_eq(&cache.get(c3).unwrap(), &a));
    assert!(cache.contains(c3));
    assert_eq!(cache.len(), 1);

    cache.clear();
    assert!(cache.is_empty());
    assert!(cache.get(c3).is_none());
}

#[test]
fn entries_are_immutable_once_set() {
    let mut cache = PathCache::new();
    let c = Complexity::new(9).unwrap();
    let first = artifact("M0 0 L1 1");
    let kept = cache.put(c, first.clone());
    let again = cache.put(c, artifact("M5 5 L6 6"));
    assert!(Arc::ptr_eq(&kept, &first));
    assert!(Arc::ptr_eq(&again, &first));
}

#[test]
fn capped_at_ten_levels_and_sorted() {
    let mut cache = PathCache::new();
    for c in Complexity::all().rev() {
        cache.put(c, artifact("M0 0 L1 1"));
    }
    assert_eq!(cache.len(), 10);
    let levels: Vec<u8> = cache.complexities().map(Complexity::get).collect();
    assert_eq!(levels, (1..=10).collect::<Vec<u8>>());
}
