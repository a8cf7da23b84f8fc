mod api_v1;
pub use api_v1::ApiV1;

mod response_types;
pub use response_types::*;

mod sanitize;
pub use sanitize::*;

mod standardize;
pub use standardize::*;
