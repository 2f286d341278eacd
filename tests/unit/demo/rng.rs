use super::*;

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn below_stays_in_bounds() {
    let mut rng = Rng64::new(7);
    for _ in 0..1000 {
        assert!(rng.below(6) < 6);
    }
    assert_eq!(rng.below(0), 0);
}

#[test]
fn shuffle_is_a_permutation() {
    let mut rng = Rng64::new(99);
    let mut items: Vec<u32> = (0..50).collect();
    rng.shuffle(&mut items);
    let mut sorted = items.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    assert_ne!(items, sorted);
}

#[test]
fn subset_keeps_order_and_roughly_the_requested_share() {
    let mut rng = Rng64::new(5);
    let items: Vec<u32> = (0..1000).collect();
    let kept = rng.subset(&items, 35.0);
    assert!(kept.windows(2).all(|w| w[0] < w[1]));
    assert!(kept.len() > 250 && kept.len() < 450, "kept {}", kept.len());
    assert!(rng.subset(&items, 0.0).is_empty());
    assert_eq!(rng.subset(&items, 100.0).len(), 1000);
}
