//! Display implementations for values.

use super::{Record, Value};
use std::fmt;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "()"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Double(d) => write!(f, "{}", d),
            Value::Str(s) => write!(f, "{}", s),
            Value::Record(record) => write!(f, "{}", record),
            Value::Cell(cell) => write!(f, "#<cell {}>", cell.read()),
            Value::Closure(_) => write!(f, "#<closure>"),
            Value::Cont(cont) => write!(f, "#<continuation {}>", cont.depth()),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.values().is_empty() {
            return write!(f, "{}", self.tag());
        }
        write!(f, "{}(", self.tag())?;
        for (index, value) in self.values().iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, ")")
    }
}
