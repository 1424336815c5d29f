use tracing::debug;

/// The session's single subscription to direction input.
///
/// Attached when a session starts and detached when it ends. Attaching an
/// already attached listener does nothing, so restarts never stack up
/// subscriptions.
#[derive(Debug, Default)]
pub struct InputListener {
    attached: bool,
    attach_count: u64,
}

impl InputListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the listener was already attached
    pub fn attach(&mut self) -> bool {
        if self.attached {
            debug!("input listener already attached");
            return false;
        }
        self.attached = true;
        self.attach_count += 1;
        debug!(attach_count = self.attach_count, "input listener attached");
        true
    }

    /// Returns false if the listener was not attached
    pub fn detach(&mut self) -> bool {
        if !self.attached {
            return false;
        }
        self.attached = false;
        debug!("input listener detached");
        true
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// How many times the listener has been attached over its lifetime
    pub fn attach_count(&self) -> u64 {
        self.attach_count
    }
}
