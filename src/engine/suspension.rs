//! In-flight suspensions.

use super::frame::{Body, Frame};
use super::segment::Resumption;
use super::Prompt;
use smallvec::SmallVec;

/// The packet carried from a `suspend` toward its matching prompt.
///
/// Frames accumulate in application order as the unwind crosses the
/// pending work between the suspension site and the handler. `tail`
/// holds the continuation segments already captured by handler and
/// region boundaries the unwind has crossed. A suspension is transient:
/// it is consumed either by a matching handler or by a boundary that
/// repackages it.
#[derive(Debug, Clone)]
pub struct Suspension {
    pub(crate) prompt: Prompt,
    pub(crate) body: Body,
    pub(crate) frames: SmallVec<[Frame; 4]>,
    pub(crate) tail: Resumption,
}

impl Suspension {
    pub(crate) fn new(prompt: Prompt, body: Body) -> Self {
        Suspension {
            prompt,
            body,
            frames: SmallVec::new(),
            tail: Resumption::empty(),
        }
    }

    /// Extend the pending work recorded by this unwind with `frame`.
    pub fn push(mut self, frame: Frame) -> Suspension {
        self.frames.push(frame);
        self
    }

    /// The prompt this suspension is looking for.
    pub fn prompt(&self) -> Prompt {
        self.prompt
    }

    /// Number of frames accumulated so far.
    pub fn pending(&self) -> usize {
        self.frames.len()
    }
}
