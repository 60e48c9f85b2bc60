/// An associative combine with an identity element.
///
/// Output accumulated through the writer effect must form a monoid:
/// `empty().combine(w) == w`, `w.combine(empty()) == w`, and `combine` is
/// associative. Accumulation is left to right, so `tell(a); tell(b)`
/// accumulates `a.combine(b)`.
pub trait Monoid: Sized + 'static {
    /// The identity element.
    fn empty() -> Self;

    /// Appends `other` after `self`.
    fn combine(self, other: Self) -> Self;
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }

    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T: 'static> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }

    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl Monoid for () {
    fn empty() -> Self {}

    fn combine(self, _other: Self) -> Self {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn it_keeps_string_combine_associative(a in ".*", b in ".*", c in ".*") {
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn it_treats_empty_vec_as_identity(items in proptest::collection::vec(any::<u8>(), 0..16)) {
            prop_assert_eq!(Vec::empty().combine(items.clone()), items.clone());
            prop_assert_eq!(items.clone().combine(Vec::empty()), items);
        }
    }

    #[test]
    fn it_combines_left_to_right() {
        assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
        assert_eq!("ab".to_string().combine("c".into()), "abc");
    }
}
