pub mod dictionary;
pub mod gateways;
pub mod repositories;
pub mod samples;
pub mod tag;
pub mod text;
pub mod usecases;

pub mod entities {
    pub use bluprints_entities::{category::*, description::*, document::*, tag::*};
}
