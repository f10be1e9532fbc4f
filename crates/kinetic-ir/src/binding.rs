use kinetic_core::{IdGenerator, KineticError, KineticResult, StyleValue};

use crate::document::InstanceId;
use crate::style::{StyleDecl, StyleSource, StyleSourceId, StyleTables};

/// Write `property: value` as a listed declaration on the instance's local
/// style source at the base breakpoint.
///
/// An instance without any style source selection gets a fresh local style
/// source on first use; later calls reuse it. Fails with
/// [`KineticError::Integrity`] and leaves `tables` untouched when no base
/// breakpoint is configured, or when the instance has a selection but no
/// local source in it.
pub fn set_listed_css_property(
    tables: &mut StyleTables,
    ids: &mut dyn IdGenerator,
    instance_id: &InstanceId,
    property: &str,
    value: StyleValue,
) -> KineticResult<()> {
    let breakpoint_id = tables.base_breakpoint()?.id.clone();
    let style_source_id = ensure_local_style_source(tables, ids, instance_id)?;

    tracing::debug!(
        "set {} on instance {} (source {}, breakpoint {})",
        property,
        instance_id,
        style_source_id,
        breakpoint_id
    );

    tables.set_decl(StyleDecl {
        breakpoint_id,
        property: property.to_string(),
        style_source_id,
        value,
        listed: true,
    });
    Ok(())
}

fn ensure_local_style_source(
    tables: &mut StyleTables,
    ids: &mut dyn IdGenerator,
    instance_id: &InstanceId,
) -> KineticResult<StyleSourceId> {
    if tables.style_source_selections.contains_key(instance_id) {
        return tables
            .local_style_source(instance_id)
            .cloned()
            .ok_or_else(|| KineticError::integrity("local style source not found"));
    }

    let id = StyleSourceId::new(ids.generate());
    tables.add_style_source(StyleSource::Local { id: id.clone() });
    tables.select(instance_id, id.clone());
    Ok(id)
}
