use log::warn;

use larder_shared::{MessageContext, MessageHandler, SyncMessage};

use crate::{events::ServerEvents, player::player_record::PlayerRecord, PlayerKey};

/// Applies messages a client is allowed to send to that client's record
pub(crate) struct ServerMessageHandler<'a> {
    player: &'a mut PlayerRecord,
    events: &'a mut ServerEvents,
}

impl<'a> ServerMessageHandler<'a> {
    pub(crate) fn new(player: &'a mut PlayerRecord, events: &'a mut ServerEvents) -> Self {
        Self { player, events }
    }
}

impl MessageHandler<PlayerKey> for ServerMessageHandler<'_> {
    fn handle(
        &mut self,
        context: &MessageContext<PlayerKey>,
        message: SyncMessage,
    ) -> Option<SyncMessage> {
        match message {
            SyncMessage::ToggleFoodContainer => {
                match self.player.container.as_mut() {
                    Some(container) => {
                        container.toggle();
                        self.events.push_toggle(&context.peer, container.clone());
                    }
                    None => {
                        warn!(
                            "Player {:?} toggled a food container but is not holding one",
                            context.peer
                        );
                    }
                }
                None
            }
            SyncMessage::ConfigSync(_)
            | SyncMessage::FoodHistorySync(_)
            | SyncMessage::FoodEatenAllTimeSync(_)
            | SyncMessage::FoodGroupSync(_)
            | SyncMessage::PlayerHealthSync(_) => {
                warn!(
                    "Server has no handler for {} from player {:?}",
                    message.kind(),
                    context.peer
                );
                None
            }
        }
    }
}
