use crate::{entities::Category, repositories};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The tag [{tag}] of category [{category}] has no dictionary entry")]
    UnresolvedTag { category: Category, tag: String },
    #[error("There is no template for category [{0}]")]
    MissingTemplate(Category),
    #[error("Unable to read console input: {0}")]
    Prompt(#[from] io::Error),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
