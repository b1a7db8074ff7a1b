//! HTTP Request domain types

mod body;
mod header;
mod method;
mod query;
mod spec;

pub use body::{
    Blob, FORM_URLENCODED, FormDataEntry, FormDataValue, MULTIPART_FORM_DATA, RequestBody,
};
pub use header::{Header, ResolvedHeader};
pub use method::HttpMethod;
pub use query::{Param, ResolvedParam};
pub use spec::Request;
