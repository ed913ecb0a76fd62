mod convert;
mod error;
mod number;
mod value;

pub use convert::FromValue;
pub use error::ProtoError;
pub use number::format_number;
pub use value::Value;
