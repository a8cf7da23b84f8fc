mod batch;
pub use batch::*;

mod compound_processing;
pub use compound_processing::*;

mod error;
pub use error::*;

mod outcome;
pub use outcome::*;
