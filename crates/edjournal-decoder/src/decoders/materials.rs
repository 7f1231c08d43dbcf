use edjournal_types::{
    EventPayload, MaterialAmount, MaterialCountPayload, MaterialDiscoveredPayload,
    SynthesisedPayload,
};

use crate::context::DecodeContext;
use crate::registry::DecoderRegistry;
use crate::resolvers::Resolve;
use crate::Result;

pub(super) fn register(registry: &mut DecoderRegistry) {
    registry.register("MaterialCollected", material_collected);
    registry.register("MaterialDiscarded", material_discarded);
    registry.register("MaterialDiscovered", material_discovered);
    registry.register("ScientificResearch", scientific_research);
    registry.register("Synthesis", synthesis);
}

fn material_count(ctx: &DecodeContext<'_>) -> Result<MaterialCountPayload> {
    Ok(MaterialCountPayload {
        material: ctx.material("Name")?,
        amount: ctx.fields.int("Count")?,
    })
}

fn material_collected(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::MaterialCollected(material_count(ctx)?)))
}

fn material_discarded(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::MaterialDiscarded(material_count(ctx)?)))
}

fn scientific_research(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::MaterialDonated(material_count(ctx)?)))
}

fn material_discovered(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::MaterialDiscovered(
        MaterialDiscoveredPayload {
            material: ctx.material("Name")?,
        },
    )))
}

// Materials consumed by the synthesis, keyed by journal code. Codes missing
// from the material table keep the code as the material name.
fn synthesis(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    let mut materials = Vec::new();
    if let Some(used) = ctx.fields.object("Materials")? {
        for code in used.keys() {
            let name = match ctx.resolvers.material.resolve(code) {
                Some(material) => material.name,
                None => code.to_string(),
            };
            materials.push(MaterialAmount::new(name, used.int(code)?));
        }
    }

    Ok(Some(EventPayload::Synthesised(SynthesisedPayload {
        synthesis: ctx.fields.opt_string("Name")?,
        materials,
    })))
}
