pub mod publish;
pub mod rest_api_server;
pub mod sanitize;
pub mod standardize;

pub mod prelude {
    pub use clap::{Arg, ArgAction, ArgMatches, Command};
}
