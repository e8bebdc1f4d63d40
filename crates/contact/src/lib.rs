mod form;
mod http;
mod message;
mod sender;
mod status;
mod submit;
mod types;
mod validate;

pub use form::*;
pub use http::*;
pub use message::*;
pub use sender::*;
pub use status::*;
pub use submit::*;
pub use types::*;
pub use validate::{FieldErrors, validate};
