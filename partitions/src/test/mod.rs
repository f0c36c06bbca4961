pub(crate) mod generics;
pub(crate) mod reference;
