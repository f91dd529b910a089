//! Shape renderers.

mod common;

pub mod polyline;
