use super::prelude::*;
use crate::{gateways::prompt::Prompt, repositories::Result as RepoResult};

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    io,
};

pub fn strings(tags: &[&str]) -> Vec<String> {
    tags.iter().map(ToString::to_string).collect()
}

pub fn empty_document() -> TagDocument {
    TagDocument {
        style: "Clip".into(),
        title: "Untitled".into(),
        category: CategoryInfo::default(),
        taglist: Taglist::default(),
        table: None,
        cover: None,
        collages: vec![],
        graph: None,
        poster: None,
        screens: vec![],
    }
}

pub struct MockDb {
    pub dictionary: RefCell<Dictionary>,
    pub document: RefCell<TagDocument>,
    pub dictionary_saves: Cell<usize>,
    pub document_saves: Cell<usize>,
}

impl Default for MockDb {
    fn default() -> Self {
        Self {
            dictionary: Default::default(),
            document: RefCell::new(empty_document()),
            dictionary_saves: Default::default(),
            document_saves: Default::default(),
        }
    }
}

impl DictionaryRepo for MockDb {
    fn load_dictionary(&self) -> RepoResult<Dictionary> {
        Ok(self.dictionary.borrow().clone())
    }

    fn save_dictionary(&self, dictionary: &Dictionary) -> RepoResult<()> {
        *self.dictionary.borrow_mut() = dictionary.clone();
        self.dictionary_saves.set(self.dictionary_saves.get() + 1);
        Ok(())
    }
}

impl TagDocumentRepo for MockDb {
    fn load_document(&self) -> RepoResult<TagDocument> {
        Ok(self.document.borrow().clone())
    }

    fn save_document(&self, document: &TagDocument) -> RepoResult<()> {
        *self.document.borrow_mut() = document.clone();
        self.document_saves.set(self.document_saves.get() + 1);
        Ok(())
    }
}

/// Replays prepared answers and records the questions.
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<String>>,
    questions: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(ToString::to_string).collect()),
            questions: Default::default(),
        }
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.borrow().clone()
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.borrow().is_empty()
    }
}

impl Prompt for ScriptedPrompt {
    fn read_line(&self, message: &str) -> io::Result<String> {
        self.questions.borrow_mut().push(message.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more answers"))
    }
}
