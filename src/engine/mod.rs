//! The control engine: prompts, suspension, capture, rewind, and the
//! trampoline.
//!
//! A computation is a direct-style sequence of operations returning
//! [`Control`]. `suspend` begins an unwind toward a prompt; `push`
//! attaches the pending work the unwind crosses; `handle` delimits a
//! computation with a prompt and either captures the continuation (on a
//! prompt match) or adds a segment for its boundary and keeps the
//! suspension moving outward. Resuming a captured continuation rewinds
//! it: each segment re-enters its region, restores the region's
//! snapshot, and replays its frames from the suspension site outward.

mod control;
mod frame;
mod segment;
mod suspension;

pub use control::{Control, Step};
pub use frame::{Body, Frame};
pub use segment::{Resumption, Segment};
pub use suspension::Suspension;

use crate::error::{RuntimeError, RuntimeResult};
use crate::region::{Arena, Cell, RegionStack};
use crate::value::Value;
use log::trace;
use smallvec::SmallVec;
use std::fmt;

/// A unique tag identifying one handler instance.
///
/// Prompts are compared, never inspected; allocation is monotone, so a
/// prompt value is never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prompt(u64);

impl Prompt {
    /// Region boundaries seal under this prompt; it never matches a
    /// handler, so dispatch at a sealed segment always forwards.
    pub(crate) const REGION: Prompt = Prompt(0);

    /// Reserved for the compiler's program top level.
    pub const TOP_LEVEL: Prompt = Prompt(1);
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// First prompt handed out by `fresh_prompt`; smaller values are
/// reserved for built-ins.
const FIRST_USER_PROMPT: u64 = 2;

/// Terminate the program at a compiler-inserted placeholder.
pub fn hole() -> ! {
    panic!("implementation missing")
}

/// The single-threaded execution context threaded through every runtime
/// primitive: the prompt source and the region stack.
pub struct Engine {
    regions: RegionStack,
    next_prompt: u64,
}

impl Engine {
    pub fn new() -> Self {
        Engine {
            regions: RegionStack::new(),
            next_prompt: FIRST_USER_PROMPT,
        }
    }

    /// Allocate a prompt no other handler has used.
    pub fn fresh_prompt(&mut self) -> Prompt {
        let prompt = Prompt(self.next_prompt);
        self.next_prompt += 1;
        trace!("minted prompt {}", prompt);
        prompt
    }

    /// Handle to the global arena.
    pub fn global(&self) -> Arena {
        self.regions.global().clone()
    }

    /// Allocate a cell in the current region.
    pub fn fresh(&mut self, init: Value) -> Cell {
        self.regions.fresh(init)
    }

    /// Create a new arena and make it current.
    pub fn fresh_region(&mut self) -> Arena {
        let region = Arena::new();
        self.regions.enter(region.clone());
        trace!("entered fresh region, depth {}", self.regions.depth());
        region
    }

    /// Push the current arena and make `region` current.
    pub fn enter_region(&mut self, region: Arena) -> Arena {
        self.regions.enter(region)
    }

    /// Pop the region stack, returning the arena just left.
    pub fn leave_region(&mut self) -> Arena {
        let left = self.regions.leave();
        trace!("left region, depth {}", self.regions.depth());
        left
    }

    /// Begin an unwind toward `prompt`, carrying `body`.
    ///
    /// No frames have been collected at the suspension site itself; the
    /// compiler pushes the surrounding work while the suspension is in
    /// flight.
    pub fn suspend(&mut self, prompt: Prompt, body: Body) -> Control {
        trace!("suspending toward prompt {}", prompt);
        Control::Suspended(Suspension::new(prompt, body))
    }

    /// Attach `frame` to an in-flight control.
    ///
    /// A completed computation applies the frame immediately; a
    /// suspended one records it for re-application during rewind.
    pub fn push(&mut self, control: Control, frame: Frame) -> Control {
        match self.settle(control) {
            Ok(value) => frame.apply(self, value),
            Err(suspension) => Control::Suspended(suspension.push(frame)),
        }
    }

    /// Run `thunk` delimited by `prompt`.
    ///
    /// A normal return is the result. A suspension targeting `prompt`
    /// captures the continuation and hands it to the suspension's body;
    /// any other suspension gains a segment for this boundary and keeps
    /// unwinding outward.
    pub fn handle(
        &mut self,
        prompt: Prompt,
        thunk: impl FnOnce(&mut Engine) -> Control,
    ) -> Control {
        let control = thunk(self);
        match self.settle(control) {
            Ok(value) => Control::Done(value),
            Err(suspension) => self.dispatch(prompt, suspension, &[]),
        }
    }

    /// Run `body` in a fresh region, pairing entry and exit on every
    /// control path.
    ///
    /// A suspension crossing this boundary seals the region into the
    /// captured continuation: the frames collected so far move into a
    /// segment carrying the region and its snapshot, so a rewind
    /// re-enters the region and restores its cells before replaying
    /// them.
    pub fn region(&mut self, body: impl FnOnce(&mut Engine, &Arena) -> Control) -> Control {
        let arena = self.fresh_region();
        let control = body(self, &arena);
        match self.settle(control) {
            Ok(value) => {
                self.leave_region();
                Control::Done(value)
            }
            Err(suspension) => {
                trace!("sealing region into continuation");
                let sealed = self.dispatch(Prompt::REGION, suspension, &[]);
                self.leave_region();
                sealed
            }
        }
    }

    /// Rewind a captured continuation with `value`.
    ///
    /// Invocation is non-destructive: the same continuation may be
    /// resumed any number of times, and every invocation restores the
    /// region contents captured with each segment.
    pub fn resume(&mut self, cont: &Resumption, value: Value) -> Control {
        match cont.head() {
            None => Control::Done(value),
            Some(segment) => {
                let segment = segment.clone();
                self.regions.enter(segment.region.clone());
                let control = self.rewind(&segment, value);
                self.leave_region();
                control
            }
        }
    }

    /// Replay one segment inside its re-entered region.
    fn rewind(&mut self, segment: &Segment, value: Value) -> Control {
        trace!("rewinding segment for prompt {}", segment.prompt);
        if let Some(backup) = &segment.backup {
            segment.region.restore(backup);
        }
        let inner = self.resume(&segment.tail, value);
        let mut curr = match self.settle(inner) {
            Ok(value) => value,
            Err(suspension) => return self.dispatch(segment.prompt, suspension, &segment.frames),
        };
        for (index, frame) in segment.frames.iter().enumerate() {
            let control = frame.apply(self, curr);
            curr = match self.settle(control) {
                Ok(value) => value,
                Err(suspension) => {
                    return self.dispatch(segment.prompt, suspension, &segment.frames[index + 1..])
                }
            };
        }
        Control::Done(curr)
    }

    /// Shared capture/forward path for every boundary.
    ///
    /// Builds the segment for this boundary out of the suspension's
    /// accumulated frames plus the boundary's own remaining frames,
    /// snapshots the current region (unless it is the global arena),
    /// and then either invokes the body with the completed continuation
    /// (prompt match) or re-raises the suspension with the segment
    /// chained on as its new tail.
    fn dispatch(&mut self, prompt: Prompt, suspension: Suspension, rest: &[Frame]) -> Control {
        let Suspension {
            prompt: target,
            body,
            mut frames,
            tail,
        } = suspension;
        frames.extend(rest.iter().cloned());

        let region = self.regions.current().clone();
        let backup = if region.same(self.regions.global()) {
            None
        } else {
            Some(region.snapshot())
        };
        let cont = Resumption::from_segment(Segment {
            frames,
            prompt,
            region,
            backup,
            tail,
        });

        if target == prompt {
            trace!("prompt {} caught suspension", prompt);
            let control = body.invoke(self, cont);
            self.trampoline(control)
        } else {
            trace!("boundary {} forwarding suspension for {}", prompt, target);
            Control::Suspended(Suspension {
                prompt: target,
                body,
                frames: SmallVec::new(),
                tail: cont,
            })
        }
    }

    /// Drive a control through pending tail-call steps.
    ///
    /// Each bounce applies the step's computation to its argument from
    /// this loop instead of from a native call, so a chain of bounces
    /// runs in constant native stack depth. Compilers call this as the
    /// driver around computations that step.
    pub fn trampoline(&mut self, control: Control) -> Control {
        match self.settle(control) {
            Ok(value) => Control::Done(value),
            Err(suspension) => Control::Suspended(suspension),
        }
    }

    /// Bounce steps until the control settles as done or suspended.
    fn settle(&mut self, mut control: Control) -> Result<Value, Suspension> {
        loop {
            match control {
                Control::Done(value) => return Ok(value),
                Control::Suspended(suspension) => return Err(suspension),
                Control::Step(step) => control = step.computation.apply(self, step.kont),
            }
        }
    }

    /// Top-level driver: run a computation all the way to a value.
    ///
    /// A suspension escaping every handler is reported as an unhandled
    /// prompt.
    pub fn run(&mut self, thunk: impl FnOnce(&mut Engine) -> Control) -> RuntimeResult<Value> {
        let control = thunk(self);
        self.settle(control)
            .map_err(|suspension| RuntimeError::UnhandledPrompt {
                prompt: suspension.prompt,
            })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
