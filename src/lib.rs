#![deny(clippy::print_stdout)]

pub mod command_line;
pub mod dataset;
pub mod publishing;
pub mod rest_api;
pub mod sanitize;
