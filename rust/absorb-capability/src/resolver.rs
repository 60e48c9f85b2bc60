//! Lifts the registry over rows of capabilities.
//!
//! A capability set is written as a row, `row![AmbientRead<Config>,
//! MutableState<Cache>]`. Resolving it maps every member through the
//! registry, keeping the order, and gives the row of effects a runtime must
//! handle.

use absorb_effects::{Cons, EffectRow, Nil};

use crate::{Capability, Computation, EffectOf, Provides};

/// A row of registered capabilities.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a row of registered capabilities",
    note = "build capability rows with `row![...]` and register every member with `Capability`"
)]
pub trait CapabilityRow: 'static {
    /// The registered effects of the row, in the same order.
    type Effects: EffectRow;
}

impl CapabilityRow for Nil {
    type Effects = Nil;
}

impl<Head, Tail> CapabilityRow for Cons<Head, Tail>
where
    Head: Capability,
    Tail: CapabilityRow,
{
    type Effects = Cons<EffectOf<Head>, Tail::Effects>;
}

/// The effects a runtime needs to run computations requiring `Caps`.
pub type Resolved<Caps> = <Caps as CapabilityRow>::Effects;

/// Declares that the computation family implements every capability of the
/// row `Caps`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement every capability in `{Caps}`"
)]
pub trait ProvidesAll<Caps: CapabilityRow>: Computation {}

impl<M: Computation> ProvidesAll<Nil> for M {}

impl<M, Head, Tail> ProvidesAll<Cons<Head, Tail>> for M
where
    M: Provides<Head> + ProvidesAll<Tail>,
    Head: Capability,
    Tail: CapabilityRow,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AmbientRead, MutableState, OutputAccumulation, TypedError};
    use absorb_effects::{ErrorEffect, ReaderEffect, StateEffect, WriterEffect, row};
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(Resolved<row![]>, Nil);

    assert_type_eq_all!(
        Resolved<row![MutableState<u8>, AmbientRead<i32>]>,
        row![StateEffect<u8>, ReaderEffect<i32>]
    );

    assert_type_eq_all!(
        Resolved<
            row![
                AmbientRead<i32>,
                OutputAccumulation<String>,
                MutableState<u8>,
                TypedError<String>
            ]
        >,
        row![
            ReaderEffect<i32>,
            WriterEffect<String>,
            StateEffect<u8>,
            ErrorEffect<String>
        ]
    );
}
