//! Control sum type: the result of any computation that may suspend.

use super::frame::Frame;
use super::suspension::Suspension;
use crate::value::Value;

/// Result of running a suspendable computation.
///
/// Instead of unwinding the host stack, every function that can suspend
/// returns one of these to its caller. Compiled code matches on the sum
/// and attaches its pending work to the `Suspended` case.
#[derive(Debug, Clone)]
pub enum Control {
    /// The computation ran to completion.
    Done(Value),
    /// A suspension is in flight toward its matching prompt.
    Suspended(Suspension),
    /// A tail call deferred to the trampoline.
    Step(Step),
}

impl Control {
    pub fn done(value: Value) -> Control {
        Control::Done(value)
    }

    /// Defer a tail call: `computation` will be applied to `kont` by
    /// the trampoline driver instead of by a native call.
    pub fn step(computation: Frame, kont: Value) -> Control {
        Control::Step(Step { computation, kont })
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Control::Done(_))
    }

    pub fn is_suspended(&self) -> bool {
        matches!(self, Control::Suspended(_))
    }

    pub fn is_step(&self) -> bool {
        matches!(self, Control::Step(_))
    }

    /// The completed value, if any.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Control::Done(value) => Some(value),
            _ => None,
        }
    }
}

/// A deferred tail call bounced through the trampoline.
#[derive(Debug, Clone)]
pub struct Step {
    pub(crate) computation: Frame,
    pub(crate) kont: Value,
}

impl Step {
    pub fn new(computation: Frame, kont: Value) -> Self {
        Step { computation, kont }
    }
}
