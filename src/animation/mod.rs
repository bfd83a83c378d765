pub(crate) mod cohort;
pub(crate) mod scheduler;
