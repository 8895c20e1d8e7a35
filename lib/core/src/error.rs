use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Record {0} has no populated text fields")]
    EmptyRecord(u64),

    #[error("Invalid vocabulary: {0}")]
    InvalidVocabulary(String),
}
