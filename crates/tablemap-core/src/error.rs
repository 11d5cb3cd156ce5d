pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unsupported layout direction: {value} (expected TB or LR)")]
    UnsupportedDirection { value: String },
}
