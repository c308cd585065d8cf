mod injection;
mod obstacles;
mod pointers;
pub(crate) mod sampling;
