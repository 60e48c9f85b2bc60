/// A family of computations: `Self::Of<A>` is a computation yielding `A`.
///
/// Capability traits ([`MonadReader`](crate::MonadReader) and friends) are
/// subtraits of `Computation`, so code generic over `M: MonadReader<E>` can
/// build, sequence and return `M::Of<_>` values without knowing what `M`
/// is. The family type itself is never constructed.
pub trait Computation: Sized + 'static {
    /// A computation of this family yielding `A`.
    type Of<A: 'static>: 'static;

    /// Computation that performs nothing and yields `value`.
    fn pure<A: 'static>(value: A) -> Self::Of<A>;

    /// Runs `m`, then the computation `next` builds from its result.
    fn and_then<A, B, F>(m: Self::Of<A>, next: F) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Self::Of<B> + 'static;

    /// Transforms the result of `m`.
    fn map<A, B, F>(m: Self::Of<A>, f: F) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        Self::and_then(m, move |value| Self::pure(f(value)))
    }

    /// Runs `m`, discards its result, then runs `next`.
    fn then<A, B>(m: Self::Of<A>, next: Self::Of<B>) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
    {
        Self::and_then(m, move |_| next)
    }
}

/// A computation written against capabilities rather than a concrete
/// computation family.
///
/// Implement it once, generically, for every family that has the
/// capabilities the program needs. The program then cannot tell which
/// family it is instantiated at:
///
/// ```
/// use absorb_capability::{Computation, MonadReader, Program};
///
/// struct Increment;
///
/// impl<M: MonadReader<i32>> Program<M> for Increment {
///     type Output = i32;
///
///     fn run(self) -> M::Of<i32> {
///         M::map(M::ask(), |value| value + 1)
///     }
/// }
/// ```
pub trait Program<M: Computation> {
    /// What the computation yields.
    type Output: 'static;

    /// Builds the computation in the family `M`.
    fn run(self) -> M::Of<Self::Output>;
}
