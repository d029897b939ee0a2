use maybe::Maybe;

const SAMPLES: [i32; 5] = [i32::MIN, -7, 0, 3, 42];

fn double(n: i32) -> i32 {
    n.wrapping_mul(2)
}

fn describe(n: i32) -> String {
    format!("n={}", n)
}

fn half(n: i32) -> Maybe<i32> {
    if n % 2 == 0 { Maybe::Some(n / 2) } else { Maybe::None }
}

#[test]
fn functor_identity() {
    for x in SAMPLES {
        assert_eq!(Maybe::Some(x).map(|v| v), Maybe::Some(x));
    }
    assert_eq!(Maybe::<i32>::None.map(|v| v), Maybe::None);
}

#[test]
fn functor_composition() {
    for x in SAMPLES {
        assert_eq!(
            Maybe::Some(x).map(double).map(describe),
            Maybe::Some(x).map(|v| describe(double(v)))
        );
    }
}

#[test]
fn monad_left_identity() {
    for x in SAMPLES {
        assert_eq!(Maybe::Some(x).flat_map(half), half(x));
    }
}

#[test]
fn monad_right_identity() {
    for x in SAMPLES {
        assert_eq!(Maybe::Some(x).flat_map(Maybe::Some), Maybe::Some(x));
    }
    assert_eq!(Maybe::<i32>::None.flat_map(Maybe::Some), Maybe::None);
}

#[test]
fn filter_and_filter_not_are_complementary() {
    let predicates: [fn(&i32) -> bool; 3] = [|n| *n > 0, |n| n % 2 == 0, |_| true];
    for x in SAMPLES {
        for p in predicates {
            let kept = Maybe::Some(x).filter(p);
            let dropped = Maybe::Some(x).filter_not(p);
            assert_ne!(kept.is_defined(), dropped.is_defined());
            assert_eq!(kept.or_else(dropped), Maybe::Some(x));
        }
    }
}

#[test]
fn empty_quantifiers() {
    let predicates: [fn(&i32) -> bool; 2] = [|_| true, |_| false];
    for p in predicates {
        assert!(Maybe::<i32>::None.for_all(p));
        assert!(!Maybe::<i32>::None.exists(p));
    }
}

#[test]
fn unzip_inverts_zip() {
    for x in SAMPLES {
        let a = Maybe::Some(x);
        let b = Maybe::Some(describe(x));
        assert_eq!(a.clone().zip(b.clone()).unzip(), (a, b));
    }
}
