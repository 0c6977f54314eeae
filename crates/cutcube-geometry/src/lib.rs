//! Mesh construction for cutcube-rs.
//!
//! - [`build`] turns a cube size and a normalized cut position into a
//!   closed 9-vertex, 12-triangle [`Mesh`]
//! - [`topology`] holds the fixed corner order and triangle tables
//! - [`PreviewBox`] describes the indicator box drawn around the cut vertex

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod builder;
pub mod preview;
pub mod topology;

pub use builder::{build, build_from_parameters, build_unchecked, cut_point};
pub use cutcube_core::Mesh;
pub use preview::PreviewBox;
