#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown language `{0}`")]
    UnknownLanguage(String),

    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("invalid value `{value}` for field `{field}`")]
    InvalidValue { field: String, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! invalid_value {
    ($field:expr, $value:expr $(,)?) => {
        return Err($crate::Error::InvalidValue {
            field: $field.to_string(),
            value: $value.to_string(),
        })
    };
}
