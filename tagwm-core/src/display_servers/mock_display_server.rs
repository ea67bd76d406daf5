use super::DisplayServer;
use crate::display_action::DisplayAction;
use crate::models::Handle;

/// Records every action it is asked to execute.
#[derive(Debug, Clone)]
pub struct MockDisplayServer<H: Handle> {
    pub executed: Vec<DisplayAction<H>>,
}

impl<H: Handle> Default for MockDisplayServer<H> {
    fn default() -> Self {
        Self { executed: vec![] }
    }
}

impl<H: Handle> DisplayServer<H> for MockDisplayServer<H> {
    fn execute_action(&mut self, act: DisplayAction<H>) {
        self.executed.push(act);
    }
}
