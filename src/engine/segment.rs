//! Captured continuations: chains of segments.

use super::frame::Frame;
use super::Prompt;
use crate::region::{Arena, ArenaSnapshot};
use smallvec::SmallVec;
use std::fmt;
use std::rc::Rc;

/// One link of a captured continuation.
///
/// A segment records the pure frames of one stretch of unwound work (in
/// application order), the prompt of the boundary that captured it, the
/// region that was current there together with its snapshot, and the
/// next inner stretch. The chain is acyclic by construction: capture
/// only ever prepends.
pub struct Segment {
    pub(crate) frames: SmallVec<[Frame; 4]>,
    pub(crate) prompt: Prompt,
    pub(crate) region: Arena,
    /// `None` exactly when the region is the global arena, which is
    /// never captured.
    pub(crate) backup: Option<ArenaSnapshot>,
    pub(crate) tail: Resumption,
}

impl fmt::Debug for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segment")
            .field("frames", &self.frames.len())
            .field("prompt", &self.prompt)
            .field("region", &self.region)
            .field("tail", &self.tail)
            .finish()
    }
}

/// A captured, multi-shot continuation: empty, or a chain of segments
/// from the catching boundary (head) down to the suspension site.
///
/// Resumptions are cheap clones; rewinding one is non-destructive, so
/// the same resumption may be invoked any number of times.
#[derive(Clone, Default)]
pub struct Resumption {
    head: Option<Rc<Segment>>,
}

impl Resumption {
    /// The empty continuation: resuming it returns the value directly.
    pub fn empty() -> Self {
        Resumption { head: None }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub(crate) fn from_segment(segment: Segment) -> Self {
        Resumption {
            head: Some(Rc::new(segment)),
        }
    }

    pub(crate) fn head(&self) -> Option<&Rc<Segment>> {
        self.head.as_ref()
    }

    /// Number of segments in the chain.
    pub fn depth(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.head.as_ref();
        while let Some(segment) = cursor {
            count += 1;
            cursor = segment.tail.head.as_ref();
        }
        count
    }
}

impl PartialEq for Resumption {
    fn eq(&self, other: &Self) -> bool {
        match (&self.head, &other.head) {
            (None, None) => true,
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Resumption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<continuation {}>", self.depth())
    }
}
