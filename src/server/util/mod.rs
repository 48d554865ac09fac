//! Small helpers shared by the controller and data layers.

pub mod deadline;
pub mod json_body;
pub mod parse;
