//! Verbose advancement tracing for development builds.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::progression::events::{AdvancementAppliedEvent, AdvancementRejectedEvent};
use crate::progression::systems::PendingAdvancements;

pub(crate) fn trace_advancement_outcomes(
    mut applied_events: MessageReader<AdvancementAppliedEvent>,
    mut rejected_events: MessageReader<AdvancementRejectedEvent>,
    pending: Res<PendingAdvancements>,
) {
    for event in applied_events.read() {
        debug!(
            "[dev] {:?} applied {:?} from {:?}; {} offer(s) still open",
            event.hero,
            event.delta,
            event.trigger,
            pending.pending_count(event.hero)
        );
    }

    for event in rejected_events.read() {
        debug!(
            "[dev] {:?} rejected ({:?}); {} offer(s) still open",
            event.hero,
            event.reason,
            pending.pending_count(event.hero)
        );
    }
}
