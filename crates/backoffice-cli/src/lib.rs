//! Building blocks of the `backoffice` binary.

pub mod backend;
pub mod demo;
pub mod logging;
pub mod prompt;
pub mod render;
