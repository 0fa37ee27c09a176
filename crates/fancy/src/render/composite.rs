//! Composite rules: tuples and pairs in `{}`, collections in `[]`.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

use crate::palette::Role;

use super::{Emitter, Render};

macro_rules! tuple {
    ($first:ident $(, $rest:ident)*) => {
        impl<$first: Render, $($rest: Render),*> Render for ($first, $($rest,)*) {
            #[allow(non_snake_case)]
            fn render(&self, out: &mut Emitter<'_>) {
                let ($first, $($rest,)*) = self;
                out.styled(Role::NestedBrace, '{');
                out.element($first);
                $(
                    out.separator();
                    out.element($rest);
                )*
                out.styled(Role::NestedBrace, '}');
            }
        }
    };
}

tuple!(A);
tuple!(A, B);
tuple!(A, B, C);
tuple!(A, B, C, D);
tuple!(A, B, C, D, E);
tuple!(A, B, C, D, E, F);
tuple!(A, B, C, D, E, F, G);
tuple!(A, B, C, D, E, F, G, H);
tuple!(A, B, C, D, E, F, G, H, I);
tuple!(A, B, C, D, E, F, G, H, I, J);
tuple!(A, B, C, D, E, F, G, H, I, J, K);
tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

impl<T: Render> Render for [T] {
    fn render(&self, out: &mut Emitter<'_>) {
        out.list(self);
    }
}

impl<T: Render, const N: usize> Render for [T; N] {
    fn render(&self, out: &mut Emitter<'_>) {
        out.list(self);
    }
}

macro_rules! sequence {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<T: Render> Render for $ty<T> {
                fn render(&self, out: &mut Emitter<'_>) {
                    out.list(self);
                }
            }
        )*
    };
}

sequence!(Vec, VecDeque, LinkedList, BTreeSet);

impl<T: Render, S> Render for HashSet<T, S> {
    fn render(&self, out: &mut Emitter<'_>) {
        out.list(self);
    }
}

/// Map entries are rendered as pairs: `[{"key", 'v'}, ...]`.
impl<K: Render, V: Render> Render for BTreeMap<K, V> {
    fn render(&self, out: &mut Emitter<'_>) {
        out.list(self);
    }
}

impl<K: Render, V: Render, S> Render for HashMap<K, V, S> {
    fn render(&self, out: &mut Emitter<'_>) {
        out.list(self);
    }
}
