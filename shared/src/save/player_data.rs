use crate::save::document::Document;

/// The host's save data for one player.
///
/// `root` is written with the world and discarded on death. `persisted` is
/// carried over from the dead entity to the respawned one, so anything that
/// must survive death goes there.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerData {
    root: Document,
    persisted: Document,
}

impl PlayerData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &Document {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Document {
        &mut self.root
    }

    pub fn persisted(&self) -> &Document {
        &self.persisted
    }

    pub fn persisted_mut(&mut self) -> &mut Document {
        &mut self.persisted
    }

    /// Models the host tearing down a dead entity: world data is gone, the
    /// persisted section is handed to the new entity.
    pub fn clear_for_respawn(&mut self) {
        self.root = Document::new();
    }
}
