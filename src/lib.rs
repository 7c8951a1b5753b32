//! # delimcc - multi-prompt delimited control
//!
//! A runtime substrate for compilers of effect-typed languages:
//! first-class, multi-shot continuations delimited by prompts, plus
//! lexically scoped mutable regions whose contents are captured and
//! restored alongside each continuation. Source-level effect handlers,
//! generators, exceptions, and backtracking all lower onto the same
//! handful of primitives.
//!
//! ## Quick start
//!
//! ```
//! use delimcc::{Body, Control, Engine, Frame, Value};
//!
//! let mut engine = Engine::new();
//! let prompt = engine.fresh_prompt();
//! let result = engine.run(|engine| {
//!     engine.handle(prompt, |engine| {
//!         // 1 + suspend(prompt, k => k(2))
//!         let suspended = engine.suspend(
//!             prompt,
//!             Body::new(|engine, k| engine.resume(&k, Value::int(2))),
//!         );
//!         engine.push(
//!             suspended,
//!             Frame::new(|_, v| Control::done(Value::int(1 + v.as_int().unwrap()))),
//!         )
//!     })
//! });
//! assert_eq!(result.unwrap(), Value::int(3));
//! ```
//!
//! ## Architecture
//!
//! The runtime is built leaves-first:
//!
//! 1. **Cells** - single mutable locations with snapshot/restore
//! 2. **Arenas** - ordered cell collections forming one region
//! 3. **Region stack** - the active arenas, with a current arena
//! 4. **Segments** - captured continuations as chains of pure frames
//! 5. **Engine** - prompts, suspension, capture, rewind, trampoline
//!
//! Control flow is a sum type, not host-stack unwinding: everything
//! that can suspend returns a [`Control`], and the compiler-facing
//! primitives ([`Engine::suspend`], [`Engine::push`],
//! [`Engine::handle`]) assemble and consume it. Execution is
//! single-threaded and cooperative; the engine holds all mutable
//! runtime state and is passed explicitly through every primitive.

pub mod engine;
pub mod error;
pub mod region;
pub mod value;

pub use engine::{hole, Body, Control, Engine, Frame, Prompt, Resumption, Step, Suspension};
pub use error::{RuntimeError, RuntimeResult};
pub use region::{Arena, ArenaSnapshot, Cell, CellSnapshot, Mutable, RegionStack};
pub use value::{constructor, Closure, Record, Value};
