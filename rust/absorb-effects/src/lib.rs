//! Primitive effect families and the contract an effect runtime fulfils.
//!
//! This crate describes the runtime side of the bridge. A computation is a
//! [`Sem<Rt, A>`]: a deferred step that, given exclusive access to a runtime
//! `Rt`, yields an `A` or aborts with the runtime's [`Runtime::Abort`].
//! Runtimes announce which primitive effect families they handle by
//! implementing the handler traits:
//!
//! | Effect | Handler | Primitives |
//! |--------|---------|------------|
//! | [`ReaderEffect<E>`] | [`ReaderHandler<E>`](reader::ReaderHandler) | `ask`, `local` |
//! | [`WriterEffect<W>`] | [`WriterHandler<W>`](writer::WriterHandler) | `tell`, `listen`, `pass` |
//! | [`StateEffect<S>`] | [`StateHandler<S>`](state::StateHandler) | `get`, `put` |
//! | [`ErrorEffect<Err>`] | [`ErrorHandler<Err>`](error::ErrorHandler) | `throw`, `catch` |
//!
//! Every handler trait implies [`Handles`] for its effect, and a runtime
//! [`Supports`] an effect [row](row!) when it handles every member of it.
//!
//! # Example
//!
//! A runtime handling a reader of `i32` and a state of `i32`:
//!
//! ```
//! use absorb_effects::{reader, state, ReaderHandler, Runtime, Sem, StateHandler};
//! use std::convert::Infallible;
//!
//! struct Cell {
//!     ambient: i32,
//!     value: i32,
//! }
//!
//! impl Runtime for Cell {
//!     type Abort = Infallible;
//! }
//!
//! impl ReaderHandler<i32> for Cell {
//!     fn ask(&mut self) -> i32 {
//!         self.ambient
//!     }
//!
//!     fn local<A: 'static, F: FnOnce(i32) -> i32>(
//!         &mut self,
//!         f: F,
//!         body: Sem<Self, A>,
//!     ) -> Result<A, Infallible> {
//!         let outer = self.ambient;
//!         self.ambient = f(outer);
//!         let result = body.run(self);
//!         self.ambient = outer;
//!         result
//!     }
//! }
//!
//! impl StateHandler<i32> for Cell {
//!     fn get(&mut self) -> i32 {
//!         self.value
//!     }
//!
//!     fn put(&mut self, value: i32) {
//!         self.value = value;
//!     }
//! }
//!
//! let program: Sem<Cell, i32> = reader::ask::<i32, Cell>()
//!     .and_then(|e| state::put::<i32, Cell>(e * 2))
//!     .then(state::get::<i32, Cell>());
//!
//! let mut cell = Cell { ambient: 21, value: 0 };
//! assert_eq!(program.run(&mut cell), Ok(42));
//! ```
//!
//! The `helpers` feature provides a ready-made in-memory runtime,
//! `helpers::Machine`, handling all four families.

mod monoid;
pub use monoid::*;

mod row;
pub use row::*;

mod sem;
pub use sem::*;

mod effect;
pub use effect::*;

pub mod error;
pub mod reader;
pub mod state;
pub mod writer;

pub use error::{ErrorEffect, ErrorHandler};
pub use reader::{ReaderEffect, ReaderHandler};
pub use state::{StateEffect, StateHandler};
pub use writer::{WriterEffect, WriterHandler};

#[cfg(any(test, feature = "helpers"))]
pub mod helpers;
