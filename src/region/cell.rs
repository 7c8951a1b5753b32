//! Mutable cells: the unit of region-managed storage.

use crate::value::Value;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Capability interface the code generator lowers variable access to.
///
/// Source-level reads and writes of a mutable binding compile to calls
/// through this trait rather than to field-name dispatch.
pub trait Mutable {
    /// Current value of the location.
    fn read(&self) -> Value;
    /// Replace the value, returning unit.
    fn write(&self, value: Value) -> Value;
}

/// A single mutable location owned by an arena.
///
/// Cells are cheap shared handles. User code may hold a cell across a
/// continuation capture; the handle stays valid after a restore because
/// restoring writes back into the same location instead of replacing it.
#[derive(Clone)]
pub struct Cell {
    slot: Rc<RefCell<Value>>,
}

impl Cell {
    pub(crate) fn new(init: Value) -> Self {
        Cell {
            slot: Rc::new(RefCell::new(init)),
        }
    }

    /// Current value of the cell.
    pub fn read(&self) -> Value {
        self.slot.borrow().clone()
    }

    /// Replace the cell's value, returning unit.
    pub fn write(&self, value: Value) -> Value {
        *self.slot.borrow_mut() = value;
        Value::Unit
    }

    /// Capture the current value into a restore thunk.
    ///
    /// The snapshot closes over the value at capture time; restoring
    /// writes that value back into this same cell and yields the cell.
    /// Snapshots of the same cell are independent of each other.
    pub fn snapshot(&self) -> CellSnapshot {
        CellSnapshot {
            cell: self.clone(),
            saved: self.read(),
        }
    }

    /// Do both handles name the same location?
    pub fn same(&self, other: &Cell) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl Mutable for Cell {
    fn read(&self) -> Value {
        Cell::read(self)
    }

    fn write(&self, value: Value) -> Value {
        Cell::write(self, value)
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.try_borrow() {
            Ok(value) => write!(f, "Cell({:?})", value),
            Err(_) => write!(f, "Cell(<borrowed>)"),
        }
    }
}

/// A restore thunk for one cell.
#[derive(Debug, Clone)]
pub struct CellSnapshot {
    cell: Cell,
    saved: Value,
}

impl CellSnapshot {
    /// Write the captured value back and yield the cell.
    pub fn restore(&self) -> Cell {
        self.cell.write(self.saved.clone());
        self.cell.clone()
    }
}
