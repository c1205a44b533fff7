// Copyright 2025 Cowboy AI, LLC.

//! The `Record` value aggregate.
//!
//! A `Record` is a noun: three immutable fields (`a`, `b` text and `c` an
//! `i64`), structural equality and hashing, and nothing else. Operations that
//! combine records live in [`crate::algebra`].

use std::fmt::{self, Display, Formatter};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::formal_domain::{DomainConcept, ValueObject};

/// Immutable triple of two text values and one integer.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub struct Record {
    a: String,
    b: String,
    c: i64,
}

impl Record {
    /// Create a record from its three field values
    pub fn new(a: impl Into<String>, b: impl Into<String>, c: i64) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            c,
        }
    }

    /// Start a builder for records assembled from optional parts
    pub fn builder() -> RecordBuilder {
        RecordBuilder::default()
    }

    /// First text field
    pub fn a(&self) -> &str {
        &self.a
    }

    /// Second text field
    pub fn b(&self) -> &str {
        &self.b
    }

    /// Integer field
    pub fn c(&self) -> i64 {
        self.c
    }

    /// Move the fields out as a tuple
    pub fn into_parts(self) -> (String, String, i64) {
        (self.a, self.b, self.c)
    }

    /// Serialize to a JSON object with keys `a`, `b`, `c`
    pub fn to_json(&self) -> DomainResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a record from its JSON object form
    pub fn from_json(json: &str) -> DomainResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Record[a={}, b={}, c={}]", self.a, self.b, self.c)
    }
}

impl DomainConcept for Record {}
impl ValueObject for Record {}

/// Collects record fields that may be absent.
///
/// `build` rejects the first missing field (checked in order `a`, `b`, `c`)
/// so an incomplete record never exists.
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    a: Option<String>,
    b: Option<String>,
    c: Option<i64>,
}

impl RecordBuilder {
    /// Set the first text field
    pub fn a(mut self, a: impl Into<String>) -> Self {
        self.a = Some(a.into());
        self
    }

    /// Set the second text field
    pub fn b(mut self, b: impl Into<String>) -> Self {
        self.b = Some(b.into());
        self
    }

    /// Set the integer field
    pub fn c(mut self, c: i64) -> Self {
        self.c = Some(c);
        self
    }

    /// Produce the record, or `InvalidAggregate` naming the missing field
    pub fn build(self) -> DomainResult<Record> {
        let a = self.a.ok_or(DomainError::InvalidAggregate { field: "a" })?;
        let b = self.b.ok_or(DomainError::InvalidAggregate { field: "b" })?;
        let c = self.c.ok_or(DomainError::InvalidAggregate { field: "c" })?;
        Ok(Record { a, b, c })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn record_display() {
        let record = Record::new("x", "y", -3);
        assert_eq!(record.to_string(), "Record[a=x, b=y, c=-3]");
    }

    #[test]
    fn equal_records_hash_once() {
        let mut set = HashSet::new();
        set.insert(Record::new("a", "b", 0));
        set.insert(Record::new("a", "b", 0));
        set.insert(Record::new("a", "b", 1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn ordering_is_field_wise() {
        assert!(Record::new("a", "z", 9) < Record::new("b", "a", 0));
        assert!(Record::new("a", "a", 9) < Record::new("a", "b", 0));
        assert!(Record::new("a", "b", 0) < Record::new("a", "b", 1));
    }

    #[test]
    fn builder_reports_first_missing_field() {
        let err = Record::builder().b("b").build().unwrap_err();
        assert_eq!(err, DomainError::InvalidAggregate { field: "a" });

        let err = Record::builder().a("a").c(1).build().unwrap_err();
        assert_eq!(err, DomainError::InvalidAggregate { field: "b" });

        let err = Record::builder().a("a").b("b").build().unwrap_err();
        assert_eq!(err, DomainError::InvalidAggregate { field: "c" });
    }

    #[test]
    fn builder_with_all_fields() {
        let record = Record::builder().c(4).b("b").a("a").build().unwrap();
        assert_eq!(record, Record::new("a", "b", 4));
    }
}
