//! Frame and body closures.

use super::control::Control;
use super::segment::Resumption;
use super::Engine;
use crate::value::Value;
use std::fmt;
use std::rc::Rc;

/// A pure frame: deferred continuation work between a suspension site
/// and its handler.
///
/// The compiler lifts each direct-style evaluation context above a
/// suspension point into one of these. Applied to a value, a frame may
/// complete, suspend again, or bounce a tail call.
#[derive(Clone)]
pub struct Frame {
    run: Rc<dyn Fn(&mut Engine, Value) -> Control>,
}

impl Frame {
    pub fn new(run: impl Fn(&mut Engine, Value) -> Control + 'static) -> Self {
        Frame { run: Rc::new(run) }
    }

    pub fn apply(&self, engine: &mut Engine, value: Value) -> Control {
        (self.run)(engine, value)
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<frame>")
    }
}

/// A handler body: receives the captured continuation when its prompt
/// catches a suspension.
#[derive(Clone)]
pub struct Body {
    run: Rc<dyn Fn(&mut Engine, Resumption) -> Control>,
}

impl Body {
    pub fn new(run: impl Fn(&mut Engine, Resumption) -> Control + 'static) -> Self {
        Body { run: Rc::new(run) }
    }

    pub fn invoke(&self, engine: &mut Engine, cont: Resumption) -> Control {
        (self.run)(engine, cont)
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<body>")
    }
}
