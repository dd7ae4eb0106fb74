//! Scripted collaborator doubles for command-flow tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::Result;
use crate::launcher::{EditorLauncher, WorkspaceDescriptor};
use crate::ui::Ui;

/// A `Ui` double fed with scripted responses. Queues drain front-first;
/// an exhausted queue answers as a cancellation.
#[derive(Default)]
pub struct FakeUi {
    inputs: RefCell<VecDeque<Option<String>>>,
    folders: RefCell<VecDeque<Option<String>>>,
    picks: RefCell<VecDeque<Option<usize>>>,
    confirms: RefCell<VecDeque<Option<bool>>>,
    pub notices: RefCell<Vec<String>>,
}

impl FakeUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(self, value: Option<&str>) -> Self {
        self.inputs
            .borrow_mut()
            .push_back(value.map(ToString::to_string));
        self
    }

    pub fn with_folder(self, value: Option<&str>) -> Self {
        self.folders
            .borrow_mut()
            .push_back(value.map(ToString::to_string));
        self
    }

    pub fn with_pick(self, value: Option<usize>) -> Self {
        self.picks.borrow_mut().push_back(value);
        self
    }

    pub fn with_confirm(self, value: Option<bool>) -> Self {
        self.confirms.borrow_mut().push_back(value);
        self
    }

    pub fn saw_notice(&self, needle: &str) -> bool {
        self.notices.borrow().iter().any(|n| n.contains(needle))
    }
}

impl Ui for FakeUi {
    fn input(&self, _prompt: &str, _initial: &str) -> Result<Option<String>> {
        Ok(self.inputs.borrow_mut().pop_front().flatten())
    }

    fn pick_folder(&self) -> Result<Option<String>> {
        Ok(self.folders.borrow_mut().pop_front().flatten())
    }

    fn pick(&self, _prompt: &str, labels: &[String]) -> Result<Option<usize>> {
        let choice = self.picks.borrow_mut().pop_front().flatten();
        if let Some(idx) = choice {
            assert!(idx < labels.len(), "scripted pick out of range");
        }
        Ok(choice)
    }

    fn confirm(&self, _prompt: &str) -> Result<Option<bool>> {
        Ok(self.confirms.borrow_mut().pop_front().flatten())
    }

    fn info(&self, message: &str) {
        self.notices.borrow_mut().push(format!("info: {message}"));
    }

    fn warn(&self, message: &str) {
        self.notices.borrow_mut().push(format!("warn: {message}"));
    }
}

/// An `EditorLauncher` double recording every open request.
#[derive(Default)]
pub struct FakeLauncher {
    pub opened: RefCell<Vec<WorkspaceDescriptor>>,
}

impl FakeLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened_folders(&self) -> Vec<Vec<String>> {
        self.opened
            .borrow()
            .iter()
            .map(|d| d.folders.iter().map(|f| f.path.clone()).collect())
            .collect()
    }
}

impl EditorLauncher for FakeLauncher {
    fn open_new_window(&self, descriptor: &WorkspaceDescriptor) -> Result<()> {
        self.opened.borrow_mut().push(descriptor.clone());
        Ok(())
    }
}
