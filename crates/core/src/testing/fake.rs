use std::cell::RefCell;
use std::collections::VecDeque;

use crate::{
    command::{CommandExecutor, LaunchCommand},
    error::Result,
};

/// Records every command and answers with scripted statuses (then 0).
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    statuses: RefCell<VecDeque<i32>>,
    calls: RefCell<Vec<LaunchCommand>>,
}

impl RecordingExecutor {
    pub fn with_statuses(statuses: impl IntoIterator<Item = i32>) -> Self {
        Self {
            statuses: RefCell::new(statuses.into_iter().collect()),
            calls: RefCell::default(),
        }
    }

    pub fn calls(&self) -> Vec<LaunchCommand> {
        self.calls.borrow().clone()
    }
}

impl CommandExecutor for RecordingExecutor {
    fn execute(&self, command: &LaunchCommand) -> Result<i32> {
        self.calls.borrow_mut().push(command.clone());
        Ok(self.statuses.borrow_mut().pop_front().unwrap_or(0))
    }
}
