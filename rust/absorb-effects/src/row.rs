//! Type-level rows.
//!
//! A row is an ordered list of types built from [`Nil`] and [`Cons`]. Rows
//! exist only in the type system: neither type can be constructed, and
//! every check over a row is resolved by the compiler.

use std::marker::PhantomData;

/// The empty row.
pub enum Nil {}

/// A row with `Head` in front of the row `Tail`.
pub struct Cons<Head, Tail>(Never, PhantomData<fn() -> (Head, Tail)>);

/// Makes [`Cons`] impossible to construct.
enum Never {}

/// Builds a row type from a list of types.
///
/// ```
/// use absorb_effects::{row, Cons, Nil, ReaderEffect, StateEffect};
///
/// type Row = row![ReaderEffect<i32>, StateEffect<String>];
/// type Spelled = Cons<ReaderEffect<i32>, Cons<StateEffect<String>, Nil>>;
///
/// fn same(row: std::marker::PhantomData<Row>) -> std::marker::PhantomData<Spelled> {
///     row
/// }
/// # let _ = same;
/// ```
#[macro_export]
macro_rules! row {
    () => { $crate::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::Cons<$head, $crate::row![$($tail),*]>
    };
}
