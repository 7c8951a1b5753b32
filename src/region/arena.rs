//! Arenas: ordered collections of cells forming one region.

use super::cell::{Cell, CellSnapshot};
use crate::value::Value;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// An ordered collection of mutable cells whose contents travel with
/// captured continuations.
///
/// Arena handles are cheap clones sharing one backing store: the region
/// stack and any number of continuation segments may point at the same
/// arena. Cells keep their creation order, and a restore reinstates
/// exactly the cells (and values) present when the snapshot was taken.
#[derive(Clone)]
pub struct Arena {
    cells: Rc<RefCell<Vec<Cell>>>,
}

impl Arena {
    pub fn new() -> Self {
        Arena {
            cells: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Append a fresh cell holding `init` and return its handle.
    pub fn fresh(&self, init: Value) -> Cell {
        let cell = Cell::new(init);
        self.cells.borrow_mut().push(cell.clone());
        cell
    }

    /// Capture a restore thunk for every cell, in creation order.
    pub fn snapshot(&self) -> ArenaSnapshot {
        ArenaSnapshot {
            cells: self.cells.borrow().iter().map(Cell::snapshot).collect(),
        }
    }

    /// Rebuild the cell list from a snapshot.
    ///
    /// Each thunk writes its captured value back and yields its cell;
    /// the arena re-adopts exactly those cells. Cells created after the
    /// snapshot are dropped from the arena.
    pub fn restore(&self, snapshot: &ArenaSnapshot) {
        let restored: Vec<Cell> = snapshot.cells.iter().map(CellSnapshot::restore).collect();
        *self.cells.borrow_mut() = restored;
    }

    /// Number of cells currently in the arena.
    pub fn len(&self) -> usize {
        self.cells.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.borrow().is_empty()
    }

    /// Do both handles name the same arena?
    pub fn same(&self, other: &Arena) -> bool {
        Rc::ptr_eq(&self.cells, &other.cells)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Arena({} cells)", self.len())
    }
}

/// Restore thunks for an arena, one per cell, in creation order.
#[derive(Debug, Clone)]
pub struct ArenaSnapshot {
    cells: Vec<CellSnapshot>,
}

impl ArenaSnapshot {
    /// Number of cells recorded in the snapshot.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
