//! Mesh selection and alignment tools for level editing.
//!
//! The edited mesh lives in a [`topology::MeshStore`]. Operations in
//! [`operations`] each follow the same shape: build with `new`, then
//! `execute` against the store. [`toolkit::Toolkit`] ties them to a menu
//! of commands and the single-key modals, talking to the surrounding
//! editor through the traits in [`host`].

pub mod error;
pub mod host;
pub mod interaction;
pub mod math;
pub mod operations;
pub mod toolkit;
pub mod topology;

pub use error::{QuickmapError, Result};
