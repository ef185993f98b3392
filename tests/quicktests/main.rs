//! Property tests that drive random operations against a `BTreeSet` model.

mod ops;
mod tree;

pub(crate) use ops::Op;
