use relmeta_ident::Identifier;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("table already exists: {0}")]
    TableAlreadyExists(Identifier),
    #[error("table not exists: {0}")]
    TableNotExists(Identifier),
    #[error("view already exists: {0}")]
    ViewAlreadyExists(Identifier),
    #[error("view not exists: {0}")]
    ViewNotExists(Identifier),
    #[error("sequence already exists: {0}")]
    SequenceAlreadyExists(Identifier),
    #[error("sequence not exists: {0}")]
    SequenceNotExists(Identifier),
    #[error("synonym already exists: {0}")]
    SynonymAlreadyExists(Identifier),
    #[error("synonym not exists: {0}")]
    SynonymNotExists(Identifier),
    #[error("routine already exists: {0}")]
    RoutineAlreadyExists(Identifier),
    #[error("routine not exists: {0}")]
    RoutineNotExists(Identifier),
    #[error("{0}")]
    Invalid(#[from] relmeta_ident::error::Error),
}
