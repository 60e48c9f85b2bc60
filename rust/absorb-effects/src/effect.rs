use crate::{Cons, Nil, Runtime};

/// Marker for a primitive effect family a runtime may handle.
///
/// Effects carry no data. They name an operation family so that
/// requirements like "the runtime must handle `ReaderEffect<Config>`" can be
/// stated as trait bounds.
pub trait Effect: 'static {}

/// Declares that a runtime handles the effect `Fx`.
///
/// The standard handler traits provide this through blanket impls. A
/// runtime that handles a user-defined effect implements it directly:
///
/// ```
/// use absorb_effects::{Effect, Handles, Runtime};
/// use std::convert::Infallible;
///
/// struct Tick;
/// impl Effect for Tick {}
///
/// struct Clock(u64);
/// impl Runtime for Clock {
///     type Abort = Infallible;
/// }
/// impl Handles<Tick> for Clock {}
/// ```
#[diagnostic::on_unimplemented(
    message = "runtime `{Self}` does not handle the effect `{Fx}`",
    label = "this runtime is missing a handler",
    note = "implement the handler trait for `{Fx}` on `{Self}`, or choose a runtime that handles it"
)]
pub trait Handles<Fx: Effect>: Runtime {}

/// A type-level row whose members are all effects.
pub trait EffectRow: 'static {}

impl EffectRow for Nil {}

impl<Head: Effect, Tail: EffectRow> EffectRow for Cons<Head, Tail> {}

/// Declares that a runtime handles every effect of the row `Row`.
///
/// Holds automatically whenever the runtime [`Handles`] each member.
#[diagnostic::on_unimplemented(
    message = "runtime `{Self}` does not support every effect in `{Row}`",
    note = "each effect in the row needs a handler on the runtime"
)]
pub trait Supports<Row: EffectRow>: Runtime {}

impl<Rt: Runtime> Supports<Nil> for Rt {}

impl<Rt, Head, Tail> Supports<Cons<Head, Tail>> for Rt
where
    Rt: Handles<Head> + Supports<Tail>,
    Head: Effect,
    Tail: EffectRow,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::Machine;
    use crate::{ErrorEffect, ReaderEffect, StateEffect, WriterEffect, row};

    fn supported<Rt: Supports<Row>, Row: EffectRow>() -> bool {
        true
    }

    #[test]
    fn it_supports_the_empty_row_everywhere() {
        assert!(supported::<Machine, row![]>());
    }

    #[test]
    fn it_supports_rows_of_handled_effects_in_any_order() {
        type Rt = Machine<i32, String, u8, String>;

        assert!(supported::<Rt, row![ReaderEffect<i32>, StateEffect<u8>]>());
        assert!(supported::<
            Rt,
            row![
                ErrorEffect<String>,
                WriterEffect<String>,
                ReaderEffect<i32>,
                StateEffect<u8>
            ]
        >());
    }
}
