pub(crate) mod clock;
pub(crate) mod interp;
pub(crate) mod spring;
