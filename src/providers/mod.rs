//! Backend provider implementations.
//!
//! One module per backend family: [`dimensional`] registers metrics as
//! name-plus-label-dimensions through the `metrics` facade, [`statsd`]
//! flattens everything into one hierarchical name via the formatter.

pub mod dimensional;
pub mod statsd;
