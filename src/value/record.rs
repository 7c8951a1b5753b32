//! Tagged records and datatype constructors.

use super::Value;
use std::rc::Rc;

/// An instance of a source-level datatype: a constructor tag plus an
/// ordered tuple of field values. Records are immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    kind: Rc<str>,
    tag: Rc<str>,
    values: Vec<Value>,
}

impl Record {
    /// Name of the datatype this record belongs to.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Name of the constructor that built this record.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn field(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn arity(&self) -> usize {
        self.values.len()
    }
}

/// Build a datatype constructor.
///
/// The returned closure packs its arguments into a record carrying the
/// constructor tag; the compiler emits one constructor per source-level
/// variant and dispatches on the tag when matching.
pub fn constructor(kind: &str, tag: &str) -> impl Fn(Vec<Value>) -> Value {
    let kind: Rc<str> = Rc::from(kind);
    let tag: Rc<str> = Rc::from(tag);
    move |values| {
        Value::Record(Rc::new(Record {
            kind: kind.clone(),
            tag: tag.clone(),
            values,
        }))
    }
}
