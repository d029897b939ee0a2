use maybe::{Maybe, NoValueError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LawGroup {
    Discriminant,
    Extraction,
    Functor,
    Monad,
    Filtering,
    Quantifier,
    Pairing,
    Sequence,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LawFailure {
    pub sample: i64,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LawOutcome {
    pub name: String,
    pub group: LawGroup,
    pub samples_checked: usize,
    pub failures: Vec<LawFailure>,
}

impl LawOutcome {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

type Check = fn(i64) -> Result<(), String>;

struct Law {
    name: &'static str,
    group: LawGroup,
    check: Check,
}

/// Compares two values and reports both sides on mismatch
fn expect_eq<T: PartialEq + std::fmt::Debug>(left: T, right: T) -> Result<(), String> {
    if left == right {
        Ok(())
    } else {
        Err(format!("{:?} != {:?}", left, right))
    }
}

fn double(n: i64) -> i64 {
    n.wrapping_mul(2)
}

fn half(n: i64) -> Maybe<i64> {
    if n % 2 == 0 { Maybe::Some(n / 2) } else { Maybe::None }
}

fn positive(n: &i64) -> bool {
    *n > 0
}

fn laws() -> Vec<Law> {
    vec![
        Law {
            name: "Some(x) is defined and None is empty",
            group: LawGroup::Discriminant,
            check: |x| {
                let some = Maybe::Some(x);
                let none = Maybe::<i64>::None;
                expect_eq(
                    (some.is_defined(), some.is_empty(), some.non_empty()),
                    (true, false, true),
                )?;
                expect_eq(
                    (none.is_defined(), none.is_empty(), none.non_empty()),
                    (false, true, false),
                )
            },
        },
        Law {
            name: "get unwraps Some and fails on None",
            group: LawGroup::Extraction,
            check: |x| {
                expect_eq(Maybe::Some(x).get(), Ok(x))?;
                expect_eq(Maybe::<i64>::None.get(), Err(NoValueError))
            },
        },
        Law {
            name: "or_else / get_or_else / fold pick the right side",
            group: LawGroup::Extraction,
            check: |x| {
                expect_eq(Maybe::Some(x).or_else(Maybe::Some(-1)), Maybe::Some(x))?;
                expect_eq(Maybe::None.or_else(Maybe::Some(x)), Maybe::Some(x))?;
                expect_eq(Maybe::Some(x).get_or_else(-1), x)?;
                expect_eq(Maybe::None.get_or_else(x), x)?;
                expect_eq(Maybe::Some(x).fold(-1, double), double(x))?;
                expect_eq(Maybe::None.fold(x, double), x)
            },
        },
        Law {
            name: "map(id) == id",
            group: LawGroup::Functor,
            check: |x| {
                expect_eq(Maybe::Some(x).map(|v| v), Maybe::Some(x))?;
                expect_eq(Maybe::<i64>::None.map(|v| v), Maybe::None)
            },
        },
        Law {
            name: "map(f).map(g) == map(g . f)",
            group: LawGroup::Functor,
            check: |x| {
                expect_eq(
                    Maybe::Some(x).map(double).map(|v| v.to_string()),
                    Maybe::Some(x).map(|v| double(v).to_string()),
                )
            },
        },
        Law {
            name: "Some(x).flat_map(f) == f(x)",
            group: LawGroup::Monad,
            check: |x| expect_eq(Maybe::Some(x).flat_map(half), half(x)),
        },
        Law {
            name: "m.flat_map(Some) == m and None absorbs",
            group: LawGroup::Monad,
            check: |x| {
                expect_eq(Maybe::Some(x).flat_map(Maybe::Some), Maybe::Some(x))?;
                expect_eq(Maybe::<i64>::None.flat_map(half), Maybe::None)
            },
        },
        Law {
            name: "filter and filter_not are complementary",
            group: LawGroup::Filtering,
            check: |x| {
                let kept = Maybe::Some(x).filter(positive);
                let dropped = Maybe::Some(x).filter_not(positive);
                if kept.is_defined() == dropped.is_defined() {
                    return Err(format!("filter gave {:?}, filter_not gave {:?}", kept, dropped));
                }
                expect_eq(kept.or_else(dropped), Maybe::Some(x))
            },
        },
        Law {
            name: "collect drops absent results only",
            group: LawGroup::Filtering,
            check: |x| {
                expect_eq(Maybe::Some(x).collect(|v| Some(double(v))), Maybe::Some(double(x)))?;
                expect_eq(Maybe::Some(x).collect(|_| None::<i64>), Maybe::None)?;
                expect_eq(Maybe::Some(x).collect(|_| Some(None::<i64>)), Maybe::Some(None))
            },
        },
        Law {
            name: "exists is false and for_all is true on None",
            group: LawGroup::Quantifier,
            check: |x| {
                expect_eq(Maybe::Some(x).exists(positive), positive(&x))?;
                expect_eq(Maybe::Some(x).for_all(positive), positive(&x))?;
                expect_eq(Maybe::<i64>::None.exists(|_| true), false)?;
                expect_eq(Maybe::<i64>::None.for_all(|_| false), true)
            },
        },
        Law {
            name: "contains matches only the held value",
            group: LawGroup::Quantifier,
            check: |x| {
                expect_eq(Maybe::Some(x).contains(&x), true)?;
                expect_eq(Maybe::Some(x).contains(&x.wrapping_add(1)), false)?;
                expect_eq(Maybe::<i64>::None.contains(&x), false)
            },
        },
        Law {
            name: "zip is defined iff both sides are",
            group: LawGroup::Pairing,
            check: |x| {
                let y = x.wrapping_neg();
                expect_eq(Maybe::Some(x).zip(Maybe::Some(y)), Maybe::Some((x, y)))?;
                expect_eq(Maybe::Some(x).zip(Maybe::<i64>::None), Maybe::None)?;
                expect_eq(Maybe::<i64>::None.zip(Maybe::Some(x)), Maybe::None)
            },
        },
        Law {
            name: "unzip and unzip3 invert pairing",
            group: LawGroup::Pairing,
            check: |x| {
                let pair = Maybe::Some(x).zip(Maybe::Some(double(x)));
                expect_eq(pair.unzip(), (Maybe::Some(x), Maybe::Some(double(x))))?;
                expect_eq(
                    Maybe::Some((x, x, x)).unzip3(),
                    (Maybe::Some(x), Maybe::Some(x), Maybe::Some(x)),
                )?;
                expect_eq(Maybe::<(i64, i64)>::None.unzip(), (Maybe::None, Maybe::None))
            },
        },
        Law {
            name: "to_list and iteration yield at most one element",
            group: LawGroup::Sequence,
            check: |x| {
                let some = Maybe::Some(x);
                expect_eq(some.to_list(), vec![x])?;
                expect_eq(some.iter().copied().collect::<Vec<_>>(), vec![x])?;
                expect_eq(some.iter().copied().collect::<Vec<_>>(), vec![x])?;
                expect_eq(Maybe::<i64>::None.to_list(), Vec::new())
            },
        },
    ]
}

/// Runs every law against every sample and collects the outcomes
pub fn check_laws(samples: &[i64]) -> Vec<LawOutcome> {
    laws()
        .iter()
        .map(|law| {
            let failures = samples
                .iter()
                .filter_map(|&sample| {
                    (law.check)(sample)
                        .err()
                        .map(|detail| LawFailure { sample, detail })
                })
                .collect();
            LawOutcome {
                name: law.name.to_string(),
                group: law.group,
                samples_checked: samples.len(),
                failures,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_laws_hold_for_edge_samples() {
        let outcomes = check_laws(&[i64::MIN, -1, 0, 1, i64::MAX]);
        assert_eq!(outcomes.len(), laws().len());
        for outcome in &outcomes {
            assert!(outcome.passed(), "{} failed: {:?}", outcome.name, outcome.failures);
            assert_eq!(outcome.samples_checked, 5);
        }
    }

    #[test]
    fn expect_eq_reports_both_sides() {
        assert_eq!(expect_eq(1, 2), Err(String::from("1 != 2")));
        assert!(expect_eq("a", "a").is_ok());
    }

    #[test]
    fn empty_corpus_checks_nothing() {
        let outcomes = check_laws(&[]);
        assert!(outcomes.iter().all(|o| o.passed() && o.samples_checked == 0));
    }
}
