//! Tracks the last saturation value sent to a client so a health update is
//! only sent when it changes. The host only syncs saturation once it hits
//! zero, so without this the client's value drifts.

/// Last saturation value sent to one player
#[derive(Clone, Debug, PartialEq)]
pub struct HealthSyncState {
    last_saturation: Option<f32>,
}

impl HealthSyncState {
    /// A fresh state assumes the client already shows zero saturation.
    pub const fn new() -> Self {
        Self {
            last_saturation: Some(0.0),
        }
    }

    /// Returns true if `saturation` differs from what was last sent.
    #[allow(clippy::float_cmp)]
    pub fn needs_update(&self, saturation: f32) -> bool {
        self.last_saturation != Some(saturation)
    }

    /// Records that we just observed, and if needed sent, `saturation`.
    pub fn record_sent(&mut self, saturation: f32) {
        self.last_saturation = Some(saturation);
    }

    /// Invalidates the state so the next tick will re-send, whatever the
    /// saturation is.
    pub fn invalidate(&mut self) {
        self.last_saturation = None;
    }
}

impl Default for HealthSyncState {
    fn default() -> Self {
        Self::new()
    }
}
