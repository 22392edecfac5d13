//! Output module
//! Live interview rendering and the completion report

pub mod formatter;
pub mod view;
