//! Value representation for the runtime.
//!
//! The compiler lowers a dynamically-typed source language onto this
//! universe: scalars, tagged records for datatypes, first-class cells,
//! host closures, and captured continuations. The host environment
//! supplies memory management, so values are reference-counted and
//! cheap to clone.

mod display;
mod record;

pub use record::{constructor, Record};

use crate::engine::{Control, Engine, Resumption};
use crate::region::Cell;
use std::fmt;
use std::rc::Rc;

/// A runtime value.
///
/// Equality is structural on scalars and records and identity on cells,
/// closures, and continuations.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Unit,
    Bool(bool),
    Int(i64),
    Double(f64),
    Str(Rc<str>),
    Record(Rc<Record>),
    Cell(Cell),
    Closure(Closure),
    Cont(Resumption),
}

impl Value {
    pub const UNIT: Value = Value::Unit;
    pub const TRUE: Value = Value::Bool(true);
    pub const FALSE: Value = Value::Bool(false);

    pub fn int(n: i64) -> Value {
        Value::Int(n)
    }

    pub fn string(s: &str) -> Value {
        Value::Str(Rc::from(s))
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_cell(&self) -> Option<&Cell> {
        match self {
            Value::Cell(cell) => Some(cell),
            _ => None,
        }
    }

    pub fn as_closure(&self) -> Option<&Closure> {
        match self {
            Value::Closure(closure) => Some(closure),
            _ => None,
        }
    }

    pub fn as_cont(&self) -> Option<&Resumption> {
        match self {
            Value::Cont(cont) => Some(cont),
            _ => None,
        }
    }

    /// Everything is truthy except `false`.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Unit => "unit",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Double(_) => "double",
            Value::Str(_) => "string",
            Value::Record(_) => "record",
            Value::Cell(_) => "cell",
            Value::Closure(_) => "closure",
            Value::Cont(_) => "continuation",
        }
    }
}

/// A host closure callable from compiled code.
///
/// Closures receive the engine so their bodies may suspend; calling one
/// therefore yields a [`Control`], not a bare value.
#[derive(Clone)]
pub struct Closure {
    func: Rc<dyn Fn(&mut Engine, &[Value]) -> Control>,
}

impl Closure {
    pub fn new(func: impl Fn(&mut Engine, &[Value]) -> Control + 'static) -> Self {
        Closure {
            func: Rc::new(func),
        }
    }

    pub fn call(&self, engine: &mut Engine, args: &[Value]) -> Control {
        (self.func)(engine, args)
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<closure>")
    }
}

impl PartialEq for Closure {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}
