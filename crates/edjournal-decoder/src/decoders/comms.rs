use edjournal_types::{EventPayload, MessageReceivedPayload, MessageSentPayload};

use crate::context::DecodeContext;
use crate::normalize::decorate_commander;
use crate::registry::DecoderRegistry;
use crate::Result;

pub(super) fn register(registry: &mut DecoderRegistry) {
    registry.register("ReceiveText", receive_text);
    registry.register("SendText", send_text);
}

fn receive_text(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    let from = ctx.fields.str("From")?;
    if !from.starts_with("$cmdr") {
        tracing::debug!(from, "NPC speech");
        return Ok(None);
    }

    Ok(Some(EventPayload::MessageReceived(MessageReceivedPayload {
        from: decorate_commander(from),
        player: true,
        channel: ctx.fields.opt_string("Channel")?,
        message: ctx.fields.opt_string("Message")?,
    })))
}

fn send_text(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::MessageSent(MessageSentPayload {
        to: ctx.fields.opt_str("To")?.map(decorate_commander),
        message: ctx.fields.opt_string("Message")?,
    })))
}
