//! Entity trait and list helpers.
//!
//! Aggregate state here is held in plain `Vec`s that are rebuilt on every
//! mutation, so the one generic operation everything needs is "replace the
//! entry with this id".

/// Entity marker + minimal interface: identity that survives state changes.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Rebuilds a list with the matching entity transformed; other entries pass
/// through untouched. A missing id leaves the list unchanged (lookup misses
/// are silent no-ops throughout the domain).
pub fn replace_by_id<E, F>(list: Vec<E>, id: &E::Id, f: F) -> Vec<E>
where
    E: Entity,
    F: Fn(E) -> E,
{
    list.into_iter()
        .map(|item| if item.id() == id { f(item) } else { item })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Labeled {
        id: u32,
        label: &'static str,
    }

    impl Entity for Labeled {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    fn sample() -> Vec<Labeled> {
        vec![
            Labeled { id: 1, label: "a" },
            Labeled { id: 2, label: "b" },
        ]
    }

    #[test]
    fn replaces_only_the_matching_entry() {
        let out = replace_by_id(sample(), &2, |item| Labeled { label: "z", ..item });
        assert_eq!(out[0].label, "a");
        assert_eq!(out[1].label, "z");
    }

    #[test]
    fn missing_id_is_a_no_op() {
        let out = replace_by_id(sample(), &9, |item| Labeled { label: "z", ..item });
        assert_eq!(out, sample());
    }
}
