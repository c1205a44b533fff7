// Copyright 2025 Cowboy AI, LLC.

//! Combining algebra over [`Record`] values.
//!
//! Records form a monoid under [`add`]: text fields concatenate left to
//! right, integer fields sum, and `Record::new("", "", 0)` is the identity.
//! The operation never touches its inputs; it always builds a new record.

use tracing::trace;

use crate::errors::{DomainError, DomainResult};
use crate::record::Record;

/// A stateless, associative binary operation with an identity element.
pub trait Combine<T> {
    /// Combine two values into a new one
    fn combine(&self, x: &T, y: &T) -> T;

    /// Neutral element for `combine`
    fn identity(&self) -> T;

    /// Fold any number of values, starting from the identity
    fn fold<'a, I>(&self, values: I) -> T
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        values
            .into_iter()
            .fold(self.identity(), |acc, next| self.combine(&acc, next))
    }
}

/// Stateless service holding the record algebra.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordAlgebra;

impl Combine<Record> for RecordAlgebra {
    fn combine(&self, x: &Record, y: &Record) -> Record {
        add(x, y)
    }

    fn identity(&self) -> Record {
        Record::new("", "", 0)
    }
}

/// Combine two records field by field: `a` and `b` concatenate (`x` first),
/// `c` is summed as `i64`.
///
/// # Panics
///
/// In debug builds, panics when `x.c() + y.c()` overflows `i64`; release
/// builds wrap. Use [`checked_add`] to get `IntegerOverflow` instead.
pub fn add(x: &Record, y: &Record) -> Record {
    trace!(left = x.c(), right = y.c(), "combining records");
    Record::new(
        concat(x.a(), y.a()),
        concat(x.b(), y.b()),
        x.c() + y.c(),
    )
}

/// Like [`add`], but reports `IntegerOverflow` instead of overflowing `c`.
pub fn checked_add(x: &Record, y: &Record) -> DomainResult<Record> {
    let c = x.c().checked_add(y.c()).ok_or(DomainError::IntegerOverflow {
        left: x.c(),
        right: y.c(),
    })?;
    trace!(left = x.c(), right = y.c(), "combining records (checked)");
    Ok(Record::new(concat(x.a(), y.a()), concat(x.b(), y.b()), c))
}

/// Sum every record in `records`; an empty input yields the identity.
pub fn sum<'a, I>(records: I) -> Record
where
    I: IntoIterator<Item = &'a Record>,
{
    RecordAlgebra.fold(records)
}

fn concat(left: &str, right: &str) -> String {
    let mut out = String::with_capacity(left.len() + right.len());
    out.push_str(left);
    out.push_str(right);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn add_concatenates_in_order() {
        let x = Record::new("left", "1", 5);
        let y = Record::new("right", "2", -2);
        assert_eq!(add(&x, &y), Record::new("leftright", "12", 3));
        assert_eq!(add(&y, &x), Record::new("rightleft", "21", 3));
    }

    #[test]
    fn identity_is_two_sided() {
        let algebra = RecordAlgebra;
        let r = Record::new("a", "b", 7);
        assert_eq!(algebra.combine(&algebra.identity(), &r), r);
        assert_eq!(algebra.combine(&r, &algebra.identity()), r);
    }

    #[test]
    fn checked_add_detects_overflow() {
        let x = Record::new("a", "b", i64::MAX);
        let y = Record::new("a", "b", 1);
        assert_eq!(
            checked_add(&x, &y),
            Err(DomainError::IntegerOverflow {
                left: i64::MAX,
                right: 1
            })
        );
        assert_eq!(
            checked_add(&x, &Record::new("", "", -1)),
            Ok(Record::new("a", "b", i64::MAX - 1))
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "overflow")]
    fn add_panics_on_overflow_in_debug() {
        let _ = add(&Record::new("", "", i64::MAX), &Record::new("", "", 1));
    }

    #[test]
    fn sum_of_nothing_is_identity() {
        assert_eq!(sum(std::iter::empty::<&Record>()), RecordAlgebra.identity());
    }

    #[test]
    fn sum_folds_left_to_right() {
        let records = vec![
            Record::new("a", "x", 1),
            Record::new("b", "y", 2),
            Record::new("c", "z", 3),
        ];
        assert_eq!(sum(&records), Record::new("abc", "xyz", 6));
    }
}
