//! Read and write access to builder state, injected into controllers.

use std::collections::BTreeMap;

use kinetic_core::{IdGenerator, KineticResult, StyleValue};
use kinetic_ir::{
    set_listed_css_property, Breakpoint, BreakpointId, ComponentMeta, Document, Instance,
    InstanceId, StyleTables,
};

/// A read-only view of the builder document at the time of the call.
pub trait BuilderSnapshot {
    fn instances(&self) -> &BTreeMap<InstanceId, Instance>;
    fn component_metas(&self) -> &BTreeMap<String, ComponentMeta>;
    /// Selected instance followed by its ancestors, nearest first.
    fn selected_path(&self) -> Option<&[InstanceId]>;
    /// Computed value of `property` for the instance at the head of `path`.
    fn style_value(&self, property: &str, path: &[InstanceId]) -> StyleValue;
    fn breakpoints(&self) -> &BTreeMap<BreakpointId, Breakpoint>;
}

/// The shared style tables: read a snapshot, write a full replacement.
pub trait StyleStore {
    fn style_tables(&self) -> StyleTables;
    fn replace_style_tables(&mut self, tables: StyleTables);
}

impl BuilderSnapshot for Document {
    fn instances(&self) -> &BTreeMap<InstanceId, Instance> {
        &self.instances
    }

    fn component_metas(&self) -> &BTreeMap<String, ComponentMeta> {
        &self.component_metas
    }

    fn selected_path(&self) -> Option<&[InstanceId]> {
        self.selected_path.as_deref()
    }

    fn style_value(&self, property: &str, path: &[InstanceId]) -> StyleValue {
        self.computed_style(property, path)
    }

    fn breakpoints(&self) -> &BTreeMap<BreakpointId, Breakpoint> {
        &self.styles.breakpoints
    }
}

impl StyleStore for Document {
    fn style_tables(&self) -> StyleTables {
        self.styles.clone()
    }

    fn replace_style_tables(&mut self, tables: StyleTables) {
        self.styles = tables;
    }
}

/// Bind `property: value` on an instance through the store. The store is
/// only written when the binding succeeds.
pub fn bind_listed_property(
    store: &mut dyn StyleStore,
    ids: &mut dyn IdGenerator,
    instance_id: &InstanceId,
    property: &str,
    value: StyleValue,
) -> KineticResult<()> {
    let mut tables = store.style_tables();
    set_listed_css_property(&mut tables, ids, instance_id, property, value)?;
    store.replace_style_tables(tables);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinetic_core::SequentialIds;
    use kinetic_ir::Breakpoint;

    #[test]
    fn test_bind_through_document() {
        let mut doc = Document::new();
        doc.add_breakpoint(Breakpoint::base("base"));
        doc.add_instance(Instance::new("card", "Box"));
        let mut ids = SequentialIds::new("ss");
        let card = InstanceId::new("card");

        bind_listed_property(&mut doc, &mut ids, &card, "viewTimelineName", StyleValue::unparsed("--card"))
            .unwrap();

        assert_eq!(doc.style_value("viewTimelineName", &[card]).to_css(), "--card");
        assert_eq!(doc.breakpoints().len(), 1);
    }

    #[test]
    fn test_failed_bind_leaves_store_untouched() {
        let mut doc = Document::new();
        let before = doc.clone();
        let mut ids = SequentialIds::default();
        let result = bind_listed_property(
            &mut doc,
            &mut ids,
            &InstanceId::new("card"),
            "viewTimelineName",
            StyleValue::unparsed("--card"),
        );
        assert!(result.is_err());
        assert_eq!(doc, before);
    }
}
