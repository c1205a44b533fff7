// Copyright 2025 Cowboy AI, LLC.

//! # Record Algebra
//!
//! Immutable value records, an algebra that combines them, and type-test
//! matching that binds a record and checks a guard on its fields.
//!
//! - **Record**: a noun with two text fields and one integer, compared by value
//! - **RecordAlgebra**: the verbs, kept outside the record (`add`, `checked_add`, `sum`)
//! - **DomainValue**: a closed sum type matched with `DomainValue::Record(r) if ..`
//!
//! ```
//! use record_algebra::{add, DomainValue, Record};
//!
//! let total = add(&Record::new("a", "b", 0), &Record::new("a", "b", 2));
//! assert_eq!(total, Record::new("aa", "bb", 2));
//!
//! match DomainValue::from(total) {
//!     DomainValue::Record(r) if r.c() > 0 => assert_eq!(r.a(), "aa"),
//!     _ => unreachable!(),
//! }
//! ```

#![warn(missing_docs)]

pub mod algebra;
mod errors;
pub mod formal_domain;
pub mod matching;
mod record;

pub use algebra::{add, checked_add, sum, Combine, RecordAlgebra};
pub use errors::{DomainError, DomainResult};
pub use formal_domain::{Both, DomainConcept, Guard, Specification, ValueObject};
pub use matching::{downcast_record, downcast_record_where, CountAbove, DomainValue};
pub use record::{Record, RecordBuilder};
