use std::cell::RefCell;
use std::rc::Rc;

use kinetic_core::{PanelConfig, SequentialIds, StyleValue, UnitValue};
use kinetic_ir::catalog::{fade_in_scroll_animation, new_scroll_animation, scroll_presets};
use kinetic_ir::{
    ActionType, AnimationAction, AnyAnimation, Breakpoint, ComponentMeta, Document, Instance,
    InstanceId, RangeEdge, ScrollAction, ScrollRangeName, StyleTables, TimelineRange, ViewAction,
};
use kinetic_panel::{
    bind_listed_property, ActionSection, AnimationsList, EditHandle, EditOutcome, RangePanel,
    RecordingNotifier, StyleStore,
};
use serde_json::json;

/// Runs `edit` against a fresh handle and returns what it produced.
fn drive<T>(
    edit: impl FnOnce(&mut EditHandle<'_, T>) -> EditOutcome,
) -> (EditOutcome, Vec<T>, RecordingNotifier) {
    let mut notifier = RecordingNotifier::new();
    let mut committed = Vec::new();
    let mut on_change = |value: T| committed.push(value);
    let outcome = {
        let mut handle = EditHandle::<T>::new(&mut notifier, &mut on_change);
        edit(&mut handle)
    };
    (outcome, committed, notifier)
}

fn scroll_action() -> AnimationAction {
    AnimationAction::Scroll(ScrollAction {
        animations: scroll_presets(),
        ..ScrollAction::default()
    })
}

fn names(value: &AnimationAction) -> Vec<String> {
    value.labels().into_iter().map(str::to_string).collect()
}

// page > main > article > p
fn page() -> Document {
    let mut doc = Document::new();
    doc.add_breakpoint(Breakpoint::base("base"));
    doc.register_component("Box", ComponentMeta::default());
    doc.add_instance(Instance::new("page", "Box").with_label("Page"));
    doc.add_instance(Instance::new("main", "Box").with_label("Main"));
    doc.add_instance(Instance::new("article", "Box").with_label("Article"));
    doc.add_instance(Instance::new("p", "Box"));
    doc.select(
        ["p", "article", "main", "page"]
            .into_iter()
            .map(InstanceId::new)
            .collect(),
    );
    doc
}

#[test]
fn valid_edit_is_committed_once() {
    let value = scroll_action();
    let (outcome, committed, notifier) =
        drive(|handle| ActionSection::set_axis(&value, kinetic_ir::Axis::X, handle));

    assert_eq!(outcome, EditOutcome::Committed);
    assert_eq!(committed.len(), 1);
    assert_eq!(committed[0].axis(), Some(kinetic_ir::Axis::X));
    assert_eq!(committed[0].len(), 3);
    assert!(notifier.messages.is_empty());
}

#[test]
fn switching_type_clears_animations() {
    let (_, to_view, _) = drive(|handle| ActionSection::set_type(&scroll_action(), ActionType::View, handle));
    assert_eq!(to_view[0].action_type(), ActionType::View);
    assert!(to_view[0].is_empty());

    let view = AnimationAction::View(ViewAction {
        animations: kinetic_ir::catalog::view_presets(),
        ..ViewAction::default()
    });
    let (_, to_scroll, _) = drive(|handle| ActionSection::set_type(&view, ActionType::Scroll, handle));
    assert_eq!(to_scroll[0].action_type(), ActionType::Scroll);
    assert!(to_scroll[0].is_empty());
}

#[test]
fn source_on_view_action_is_rejected_with_one_warning() {
    let view = AnimationAction::View(ViewAction::default());
    let (outcome, committed, notifier) =
        drive(|handle| ActionSection::set_source(&view, kinetic_ir::ScrollSource::Root, handle));

    assert_eq!(outcome, EditOutcome::Rejected);
    assert!(committed.is_empty());
    assert_eq!(notifier.messages, vec!["Schemas are incompatible, try fix".to_string()]);
}

#[test]
fn reorder_is_a_permutation() {
    let list = AnimationsList::new();
    let before = scroll_action();
    for (new_index, old_index) in [(0, 2), (2, 0), (1, 1), (2, 1)] {
        let (_, committed, _) = drive(|handle| list.sort(&before, new_index, old_index, handle));
        let after = &committed[0];
        assert_eq!(after.len(), before.len());

        let mut sorted_before = names(&before);
        let mut sorted_after = names(after);
        sorted_before.sort();
        sorted_after.sort();
        assert_eq!(sorted_before, sorted_after);
        assert_eq!(names(after)[new_index], names(&before)[old_index]);
    }
}

#[test]
fn remove_shifts_remaining_rows() {
    let list = AnimationsList::new();
    let before = scroll_action();
    let (outcome, committed, _) = drive(|handle| list.remove(&before, 1, handle));
    assert!(outcome.is_committed());
    assert_eq!(names(&committed[0]), vec!["New Animation", "Fade Out"]);
}

#[test]
fn adding_fade_in_to_empty_scroll_action() {
    let mut list = AnimationsList::new();
    let empty = AnimationAction::default();
    let (outcome, committed, _) = drive(|handle| list.add(&empty, 1, handle));

    assert!(outcome.is_committed());
    assert_eq!(committed[0].len(), 1);
    assert_eq!(committed[0].labels(), vec!["Fade In"]);
    assert_eq!(
        committed[0].animation(0),
        Some(AnyAnimation::from(fade_in_scroll_animation()))
    );
}

#[test]
fn renaming_range_start_carries_the_unit() {
    let panel = RangePanel::new(&PanelConfig::default());
    let animation = AnyAnimation::from(new_scroll_animation());
    let (_, committed, _) = drive(|handle| panel.select(&animation, RangeEdge::Start, "end", handle));

    let json = serde_json::to_value(&committed[0]).unwrap();
    assert_eq!(
        json["timing"]["rangeStart"],
        json!(["end", {"type": "unit", "value": 0.0, "unit": "px"}])
    );
}

#[test]
fn renaming_absent_range_defaults_to_zero_percent() {
    let panel = RangePanel::new(&PanelConfig::default());
    let mut bare = new_scroll_animation();
    bare.timing.range_start = None;
    let animation = AnyAnimation::from(bare);
    let (_, committed, _) = drive(|handle| panel.select(&animation, RangeEdge::Start, "end", handle));

    let AnyAnimation::Scroll(next) = &committed[0] else {
        panic!("expected scroll animation");
    };
    assert_eq!(
        next.timing.range_start,
        Some(TimelineRange::new(ScrollRangeName::End, UnitValue::zero_percent()))
    );
}

/// Style store that records every replacement into a shared log.
struct LoggingStore {
    doc: Document,
    log: Rc<RefCell<Vec<String>>>,
}

impl StyleStore for LoggingStore {
    fn style_tables(&self) -> StyleTables {
        self.doc.style_tables()
    }

    fn replace_style_tables(&mut self, tables: StyleTables) {
        self.log.borrow_mut().push("bind".to_string());
        self.doc.replace_style_tables(tables);
    }
}

#[test]
fn new_subject_binds_once_before_commit() {
    let doc = page();
    let mut ids = SequentialIds::new("t");
    let section = ActionSection::mount(&doc, &mut ids, &PanelConfig::default());
    let article = section.subjects()[1].clone();
    assert_eq!(article.value, "--generated-timeline-t1");
    assert!(!article.timeline_exists);

    let log = Rc::new(RefCell::new(Vec::new()));
    let mut store = LoggingStore {
        doc,
        log: Rc::clone(&log),
    };
    let mut style_ids = SequentialIds::new("ss");
    let value = AnimationAction::View(ViewAction::default());

    let mut notifier = RecordingNotifier::new();
    let mut committed = Vec::new();
    let mut on_change = |next: AnimationAction| {
        log.borrow_mut().push("commit".to_string());
        committed.push(next);
    };
    let outcome = {
        let mut handle = EditHandle::<AnimationAction>::new(&mut notifier, &mut on_change);
        section
            .set_subject(&value, &article.value, &mut store, &mut style_ids, &mut handle)
            .unwrap()
    };

    assert_eq!(outcome, EditOutcome::Committed);
    assert_eq!(*log.borrow(), vec!["bind".to_string(), "commit".to_string()]);
    assert_eq!(committed[0].subject(), Some("--generated-timeline-t1"));
    assert_eq!(
        store
            .doc
            .computed_style("viewTimelineName", &[InstanceId::new("article")])
            .to_css(),
        "--generated-timeline-t1"
    );
}

#[test]
fn self_subject_is_stored_as_none_without_binding() {
    let mut doc = page();
    let before = doc.clone();
    let mut ids = SequentialIds::new("t");
    let section = ActionSection::mount(&doc, &mut ids, &PanelConfig::default());
    let value = AnimationAction::View(ViewAction {
        subject: Some("--generated-timeline-t2".into()),
        ..ViewAction::default()
    });

    let mut style_ids = SequentialIds::new("ss");
    let mut notifier = RecordingNotifier::new();
    let mut committed = Vec::new();
    let mut on_change = |next: AnimationAction| committed.push(next);
    {
        let mut handle = EditHandle::<AnimationAction>::new(&mut notifier, &mut on_change);
        section
            .set_subject(&value, "self", &mut doc, &mut style_ids, &mut handle)
            .unwrap();
    }

    assert_eq!(committed[0].subject(), None);
    assert_eq!(doc, before);
}

#[test]
fn stale_subject_is_reported_by_name() {
    let mut doc = page();
    let mut ids = SequentialIds::new("t");
    let section = ActionSection::mount(&doc, &mut ids, &PanelConfig::default());
    let mut style_ids = SequentialIds::new("ss");
    let value = AnimationAction::View(ViewAction::default());

    let (outcome, committed, notifier) = drive(|handle| {
        section
            .set_subject(&value, "--renamed", &mut doc, &mut style_ids, handle)
            .unwrap()
    });
    assert_eq!(outcome, EditOutcome::Rejected);
    assert!(committed.is_empty());
    assert_eq!(notifier.messages, vec!["Subject \"--renamed\" not found".to_string()]);
}

#[test]
fn binding_twice_reuses_local_source() {
    let mut doc = page();
    let mut ids = SequentialIds::new("ss");
    let article = InstanceId::new("article");

    bind_listed_property(&mut doc, &mut ids, &article, "viewTimelineName", StyleValue::unparsed("--a"))
        .unwrap();
    bind_listed_property(&mut doc, &mut ids, &article, "viewTimelineName", StyleValue::unparsed("--a"))
        .unwrap();

    assert_eq!(doc.styles.local_style_source_count(&article), 1);
    assert_eq!(doc.styles.style_sources.len(), 1);
    assert_eq!(doc.styles.styles.len(), 1);
    assert_eq!(
        doc.computed_style("viewTimelineName", &[article]).to_css(),
        "--a"
    );
}
