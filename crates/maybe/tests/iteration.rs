use maybe::Maybe;

#[test]
fn spreads_zero_or_one_element() {
    let five = Maybe::Some(5);
    assert_eq!(five.into_iter().collect::<Vec<_>>(), vec![5]);

    let empty: Maybe<i32> = Maybe::None;
    assert_eq!(empty.into_iter().collect::<Vec<_>>(), Vec::<i32>::new());
}

#[test]
fn reiterating_yields_again() {
    let five = Maybe::Some(5);
    let first: Vec<i32> = five.iter().copied().collect();
    let second: Vec<i32> = five.iter().copied().collect();
    assert_eq!(first, vec![5]);
    assert_eq!(second, vec![5]);
}

#[test]
fn works_with_for_loops_and_extend() {
    let mut seen = Vec::new();
    for n in &Maybe::Some(1) {
        seen.push(*n);
    }
    for n in &Maybe::<i32>::None {
        seen.push(*n);
    }
    seen.extend(Maybe::Some(2));
    seen.extend(Maybe::<i32>::None);
    assert_eq!(seen, vec![1, 2]);
}

#[test]
fn flattens_with_iterator_adaptors() {
    let values = vec![Maybe::Some(1), Maybe::None, Maybe::Some(3)];
    let present: Vec<i32> = values.into_iter().flatten().collect();
    assert_eq!(present, vec![1, 3]);
}
