//! The root handler for `DescriptorRecord` elements.

use crate::error::{MeshError, Result};
use crate::model::{DescriptorClass, MeshRecord, MeshRecordParts, NameUi};
use crate::schema;

use super::{
    AllowableQualifierHandler, Assemble, Attributes, ConceptHandler, DateHandler,
    ElementHandler, EntryCombinationHandler, ListHandler, NameUiHandler, OriginatorsHandler,
    StringElementHandler, TextElementHandler,
};

/// Builder for one complete `DescriptorRecord`.
///
/// This is the root of the handler tree: the driver hands it the record's
/// start tag, routes every nested event through it, and asks it to
/// assemble a [`MeshRecord`] when the record element closes. One instance
/// serves the whole document; `reset` runs between records.
#[derive(Debug)]
pub struct RecordHandler {
    descriptor_class: Option<DescriptorClass>,
    ui: TextElementHandler,
    name: StringElementHandler,
    date_created: DateHandler,
    date_revised: DateHandler,
    date_established: DateHandler,
    active_years: ListHandler<TextElementHandler>,
    allowable_qualifiers: ListHandler<AllowableQualifierHandler>,
    annotation: TextElementHandler,
    history_note: TextElementHandler,
    online_note: TextElementHandler,
    public_mesh_note: TextElementHandler,
    previous_indexing: ListHandler<TextElementHandler>,
    entry_combinations: ListHandler<EntryCombinationHandler>,
    see_related: ListHandler<NameUiHandler>,
    consider_also: TextElementHandler,
    pharmacological_actions: ListHandler<NameUiHandler>,
    running_head: TextElementHandler,
    tree_numbers: ListHandler<TextElementHandler>,
    originators: OriginatorsHandler,
    concepts: ListHandler<ConceptHandler>,
}

impl RecordHandler {
    /// Create a handler with empty state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            descriptor_class: None,
            ui: TextElementHandler::new(),
            name: StringElementHandler::new(),
            date_created: DateHandler::new(),
            date_revised: DateHandler::new(),
            date_established: DateHandler::new(),
            active_years: ListHandler::new(schema::YEAR, TextElementHandler::new()),
            allowable_qualifiers: ListHandler::new(
                schema::ALLOWABLE_QUALIFIER,
                AllowableQualifierHandler::new(),
            ),
            annotation: TextElementHandler::new(),
            history_note: TextElementHandler::new(),
            online_note: TextElementHandler::new(),
            public_mesh_note: TextElementHandler::new(),
            previous_indexing: ListHandler::new(
                schema::PREVIOUS_INDEXING,
                TextElementHandler::new(),
            ),
            entry_combinations: ListHandler::new(
                schema::ENTRY_COMBINATION,
                EntryCombinationHandler::new(),
            ),
            see_related: ListHandler::new(
                schema::DESCRIPTOR_REFERRED_TO,
                NameUiHandler::descriptor(),
            ),
            consider_also: TextElementHandler::new(),
            pharmacological_actions: ListHandler::new(
                schema::PHARMACOLOGICAL_ACTION,
                NameUiHandler::descriptor(),
            ),
            running_head: TextElementHandler::new(),
            tree_numbers: ListHandler::new(schema::TREE_NUMBER, TextElementHandler::new()),
            originators: OriginatorsHandler::new(),
            concepts: ListHandler::new(schema::CONCEPT, ConceptHandler::new()),
        }
    }

    /// Whatever identifying text has been accumulated so far, for error
    /// diagnostics on a record that fails mid-parse. The UI wins when
    /// present; the name is the fallback.
    #[must_use]
    pub fn descriptor_hint(&self) -> Option<String> {
        let ui = self.ui.value();
        if !ui.is_empty() {
            return Some(ui);
        }
        let name = self.name.value();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

impl Default for RecordHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementHandler for RecordHandler {
    fn reset(&mut self) {
        self.descriptor_class = None;
        self.ui.reset();
        self.name.reset();
        self.date_created.reset();
        self.date_revised.reset();
        self.date_established.reset();
        self.active_years.reset();
        self.allowable_qualifiers.reset();
        self.annotation.reset();
        self.history_note.reset();
        self.online_note.reset();
        self.public_mesh_note.reset();
        self.previous_indexing.reset();
        self.entry_combinations.reset();
        self.see_related.reset();
        self.consider_also.reset();
        self.pharmacological_actions.reset();
        self.running_head.reset();
        self.tree_numbers.reset();
        self.originators.reset();
        self.concepts.reset();
    }

    fn on_start(&mut self, name: &str, attrs: &Attributes) {
        if name == schema::DESCRIPTOR_RECORD {
            self.descriptor_class = Some(DescriptorClass::from_attribute(
                attrs.get(schema::DESCRIPTOR_CLASS_ATT),
            ));
        }
    }

    fn delegate_mut(&mut self, name: &str) -> Option<&mut dyn ElementHandler> {
        match name {
            schema::DESCRIPTOR_UI => Some(&mut self.ui),
            schema::DESCRIPTOR_NAME => Some(&mut self.name),
            schema::DATE_CREATED => Some(&mut self.date_created),
            schema::DATE_REVISED => Some(&mut self.date_revised),
            schema::DATE_ESTABLISHED => Some(&mut self.date_established),
            schema::ACTIVE_MESH_YEAR_LIST => Some(&mut self.active_years),
            schema::ALLOWABLE_QUALIFIERS_LIST => Some(&mut self.allowable_qualifiers),
            schema::ANNOTATION => Some(&mut self.annotation),
            schema::HISTORY_NOTE => Some(&mut self.history_note),
            schema::ONLINE_NOTE => Some(&mut self.online_note),
            schema::PUBLIC_MESH_NOTE => Some(&mut self.public_mesh_note),
            schema::PREVIOUS_INDEXING_LIST => Some(&mut self.previous_indexing),
            schema::ENTRY_COMBINATION_LIST => Some(&mut self.entry_combinations),
            schema::SEE_RELATED_LIST => Some(&mut self.see_related),
            schema::CONSIDER_ALSO => Some(&mut self.consider_also),
            schema::PHARMACOLOGICAL_ACTION_LIST => Some(&mut self.pharmacological_actions),
            schema::RUNNING_HEAD => Some(&mut self.running_head),
            schema::TREE_NUMBER_LIST => Some(&mut self.tree_numbers),
            schema::RECORD_ORIGINATORS_LIST => Some(&mut self.originators),
            schema::CONCEPT_LIST => Some(&mut self.concepts),
            _ => None,
        }
    }
}

impl Assemble for RecordHandler {
    type Output = MeshRecord;

    fn assemble(&self) -> Result<MeshRecord> {
        let descriptor =
            NameUi::from_parts(self.name.value(), self.ui.value()).ok_or_else(|| {
                MeshError::MalformedRecord {
                    record: self.descriptor_hint(),
                    reason: "record without descriptor name or identifier".to_string(),
                }
            })?;
        Ok(MeshRecord::from_parts(
            descriptor,
            MeshRecordParts {
                descriptor_class: self.descriptor_class,
                date_created: self.date_created.assemble()?,
                date_revised: self.date_revised.assemble()?,
                date_established: self.date_established.assemble()?,
                active_years: self.active_years.items(),
                allowable_qualifiers: self.allowable_qualifiers.items(),
                annotation: self.annotation.value_opt(),
                history_note: self.history_note.value_opt(),
                online_note: self.online_note.value_opt(),
                public_mesh_note: self.public_mesh_note.value_opt(),
                previous_indexing: self.previous_indexing.items(),
                entry_combinations: self.entry_combinations.items(),
                see_related: self.see_related.items(),
                consider_also: self.consider_also.value_opt(),
                pharmacological_actions: self.pharmacological_actions.items(),
                running_head: self.running_head.value_opt(),
                tree_numbers: self.tree_numbers.items(),
                originators: self.originators.assemble()?,
                concepts: self.concepts.items(),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn start_attrs(pairs: &[(&str, &str)]) -> Attributes {
        Attributes::new(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    fn feed_text(handler: &mut dyn ElementHandler, path: &[&str], text: &str) {
        let mut current = handler;
        for name in path {
            current = current.delegate_mut(name).expect("registered");
        }
        current.on_text(text);
    }

    fn close_item(handler: &mut dyn ElementHandler, list: &str, item: &str) {
        handler
            .delegate_mut(list)
            .expect("registered")
            .on_child_closed(item)
            .expect("assembles");
    }

    #[test]
    fn test_assembles_minimal_record() {
        let mut handler = RecordHandler::new();
        handler.on_start(schema::DESCRIPTOR_RECORD, &start_attrs(&[]));
        feed_text(&mut handler, &[schema::DESCRIPTOR_UI], "D000001");
        feed_text(
            &mut handler,
            &[schema::DESCRIPTOR_NAME, schema::STRING],
            "Calcimycin",
        );

        let record = handler.assemble().unwrap();
        assert_eq!(record.descriptor().ui(), "D000001");
        assert_eq!(record.descriptor().name(), "Calcimycin");
        assert_eq!(record.descriptor_class(), DescriptorClass::Topical);
        assert_eq!(record.date_created(), None);
        assert!(record.concepts().is_empty());
        assert_eq!(record.originators(), None);
    }

    #[test]
    fn test_descriptor_class_attribute_is_captured() {
        let mut handler = RecordHandler::new();
        handler.on_start(
            schema::DESCRIPTOR_RECORD,
            &start_attrs(&[(schema::DESCRIPTOR_CLASS_ATT, "3")]),
        );
        feed_text(&mut handler, &[schema::DESCRIPTOR_UI], "D008297");
        feed_text(&mut handler, &[schema::DESCRIPTOR_NAME, schema::STRING], "Male");
        assert_eq!(
            handler.assemble().unwrap().descriptor_class(),
            DescriptorClass::CheckTag
        );
    }

    #[test]
    fn test_record_lists_preserve_order() {
        let mut handler = RecordHandler::new();
        feed_text(&mut handler, &[schema::DESCRIPTOR_UI], "D000001");
        feed_text(&mut handler, &[schema::DESCRIPTOR_NAME, schema::STRING], "x");
        for tree in ["D03.438.221.173", "D03.633.100.221.173"] {
            feed_text(
                &mut handler,
                &[schema::TREE_NUMBER_LIST, schema::TREE_NUMBER],
                tree,
            );
            close_item(&mut handler, schema::TREE_NUMBER_LIST, schema::TREE_NUMBER);
        }
        for year in ["2012", "2013"] {
            feed_text(
                &mut handler,
                &[schema::ACTIVE_MESH_YEAR_LIST, schema::YEAR],
                year,
            );
            close_item(&mut handler, schema::ACTIVE_MESH_YEAR_LIST, schema::YEAR);
        }

        let record = handler.assemble().unwrap();
        assert_eq!(
            record.tree_numbers(),
            ["D03.438.221.173", "D03.633.100.221.173"]
        );
        assert_eq!(record.active_years(), ["2012", "2013"]);
    }

    #[test]
    fn test_missing_descriptor_is_malformed() {
        let handler = RecordHandler::new();
        assert!(matches!(
            handler.assemble().unwrap_err(),
            MeshError::MalformedRecord { .. }
        ));
    }

    #[test]
    fn test_descriptor_hint_prefers_ui() {
        let mut handler = RecordHandler::new();
        assert_eq!(handler.descriptor_hint(), None);
        feed_text(&mut handler, &[schema::DESCRIPTOR_NAME, schema::STRING], "Male");
        assert_eq!(handler.descriptor_hint().as_deref(), Some("Male"));
        feed_text(&mut handler, &[schema::DESCRIPTOR_UI], "D008297");
        assert_eq!(handler.descriptor_hint().as_deref(), Some("D008297"));
    }

    #[test]
    fn test_reset_is_idempotent_and_complete() {
        let mut handler = RecordHandler::new();
        handler.on_start(
            schema::DESCRIPTOR_RECORD,
            &start_attrs(&[(schema::DESCRIPTOR_CLASS_ATT, "2")]),
        );
        feed_text(&mut handler, &[schema::DESCRIPTOR_UI], "D016454");
        feed_text(&mut handler, &[schema::ANNOTATION], "note");
        handler.reset();
        handler.reset();
        assert_eq!(handler.descriptor_hint(), None);

        feed_text(&mut handler, &[schema::DESCRIPTOR_UI], "D000001");
        feed_text(&mut handler, &[schema::DESCRIPTOR_NAME, schema::STRING], "x");
        let record = handler.assemble().unwrap();
        assert_eq!(record.descriptor_class(), DescriptorClass::Topical);
        assert_eq!(record.annotation(), None);
    }
}
