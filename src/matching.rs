// Copyright 2025 Cowboy AI, LLC.

//! Type-test matching with a single binding and an optional guard.
//!
//! The closed case is [`DomainValue`], a sum type over the shapes a value can
//! take; a native `match` with `DomainValue::Record(r) if ..` is the primary
//! idiom, and the helpers here name the same test for call sites that want
//! an `Option`. For values whose type is not known ahead of time,
//! [`downcast_record`] falls back to a checked `Any` downcast.

use std::any::Any;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::formal_domain::{DomainConcept, Specification};
use crate::record::Record;

/// A value of one of the known shapes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "value")]
pub enum DomainValue {
    /// A record aggregate
    Record(Record),
    /// Bare text
    Text(String),
    /// Bare integer
    Integer(i64),
}

impl DomainValue {
    /// Whether this value is a record
    pub fn is_record(&self) -> bool {
        matches!(self, DomainValue::Record(_))
    }

    /// Bind the record if this value is one.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            DomainValue::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Bind the record, then keep it only if `guard` holds.
    ///
    /// The guard is not evaluated when the value is not a record.
    pub fn record_where<F>(&self, guard: F) -> Option<&Record>
    where
        F: FnOnce(&Record) -> bool,
    {
        self.as_record().filter(|&record| guard(record))
    }

    /// Same as [`DomainValue::record_where`] with a reusable specification as guard.
    pub fn record_satisfying<S>(&self, spec: &S) -> Option<&Record>
    where
        S: Specification<Record>,
    {
        self.record_where(|r| spec.is_satisfied_by(r))
    }

    /// Take the record out, handing the value back unchanged on a miss.
    pub fn into_record(self) -> Result<Record, DomainValue> {
        match self {
            DomainValue::Record(r) => Ok(r),
            other => Err(other),
        }
    }
}

impl From<Record> for DomainValue {
    fn from(record: Record) -> Self {
        DomainValue::Record(record)
    }
}

impl From<String> for DomainValue {
    fn from(text: String) -> Self {
        DomainValue::Text(text)
    }
}

impl From<&str> for DomainValue {
    fn from(text: &str) -> Self {
        DomainValue::Text(text.to_string())
    }
}

impl From<i64> for DomainValue {
    fn from(n: i64) -> Self {
        DomainValue::Integer(n)
    }
}

/// Guard holding when the record's `c` is strictly greater than the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountAbove(pub i64);

impl DomainConcept for CountAbove {}

impl Specification<Record> for CountAbove {
    fn is_satisfied_by(&self, record: &Record) -> bool {
        record.c() > self.0
    }
}

/// Bind `value` as a record if its runtime type is [`Record`].
pub fn downcast_record(value: &dyn Any) -> Option<&Record> {
    let bound = value.downcast_ref::<Record>();
    if bound.is_none() {
        debug!(type_id = ?value.type_id(), "value is not a record");
    }
    bound
}

/// Downcast, then keep the record only if `guard` holds.
pub fn downcast_record_where<F>(value: &dyn Any, guard: F) -> Option<&Record>
where
    F: FnOnce(&Record) -> bool,
{
    downcast_record(value).filter(|&record| guard(record))
}
