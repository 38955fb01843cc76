//! Application state for the READY surface.

use crate::gate::ApiKey;
use crate::notice::{self, Notice};

/// Application state.
///
/// Constructed only after the credential gate passes; holding an `App`
/// implies a present credential. The state never changes after
/// construction except for the quit flag.
pub struct App {
    key: ApiKey,
    notices: Vec<Notice>,
    should_quit: bool,
}

impl App {
    pub fn new(key: ApiKey) -> Self {
        Self {
            key,
            notices: notice::startup_notices(),
            should_quit: false,
        }
    }

    /// The credential the gate resolved. Reserved for the analysis
    /// pipeline; nothing in this snapshot sends it anywhere.
    pub fn api_key(&self) -> &ApiKey {
        &self.key
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }
}
