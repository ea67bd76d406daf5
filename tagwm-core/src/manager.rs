use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::models::Handle;
use crate::state::State;

/// Ties the state model to a display server.
#[derive(Debug)]
pub struct Manager<H: Handle, SERVER> {
    pub state: State<H>,
    pub display_server: SERVER,
}

impl<H, SERVER> Manager<H, SERVER>
where
    H: Handle,
    SERVER: DisplayServer<H>,
{
    pub fn new(config: &impl Config, display_server: SERVER) -> Self {
        Self {
            state: State::new(config),
            display_server,
        }
    }

    /// Hands every queued action to the display server, oldest first, then flushes it.
    pub fn flush_actions(&mut self) {
        while let Some(act) = self.state.actions.pop_front() {
            self.display_server.execute_action(act);
        }
        self.display_server.flush();
    }
}

#[cfg(test)]
use crate::{display_servers::MockDisplayServer, models::MockHandle};

#[cfg(test)]
impl Manager<MockHandle, MockDisplayServer<MockHandle>> {
    pub fn new_test(tags: Vec<String>) -> Self {
        Self::new(
            &crate::config::TestConfig { tags },
            MockDisplayServer::default(),
        )
    }
}
