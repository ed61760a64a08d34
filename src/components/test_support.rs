use crate::models::{QueueEntry, QueueEntryId, Track};
use dioxus::core::{AttributeValue, ElementId, Mutation, Mutations};
use dioxus::prelude::*;
use dioxus_html::{
    set_event_converter, PlatformEventData, SerializedFormData, SerializedHtmlEventConverter,
    SerializedMouseData,
};
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub fn render(root: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

pub fn sample_track(id: &str, liked: bool) -> Track {
    Track {
        id: id.to_string(),
        name: format!("Track {id}"),
        artist: "Test Artist".to_string(),
        image: format!("/covers/{id}.jpg"),
        language: "English".to_string(),
        views: 12_345,
        likes: 42,
        is_liked: liked,
    }
}

pub fn sample_entry(entry_id: &str, track_id: &str) -> QueueEntry {
    QueueEntry {
        id: QueueEntryId::from(entry_id),
        track: sample_track(track_id, false),
    }
}

thread_local! {
    static CALLS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Records a handler call. Each test thread has its own log.
pub fn record(call: impl Into<String>) {
    CALLS.with(|calls| calls.borrow_mut().push(call.into()));
}

/// Drains the calls recorded so far on this thread.
pub fn take_calls() -> Vec<String> {
    CALLS.with(|calls| std::mem::take(&mut *calls.borrow_mut()))
}

/// Drives a component through real event dispatch.
///
/// Listeners are found through the mutations the dom emits. Elements are
/// addressed by a marker in their class list, so the marked element needs a
/// dynamic `class` attribute. Listeners of removed nodes are not forgotten;
/// check [`Interaction::html`] before clicking something that may be gone.
pub struct Interaction {
    dom: VirtualDom,
    classes: HashMap<ElementId, String>,
    listeners: Vec<(String, ElementId)>,
}

impl Interaction {
    pub fn mount(root: fn() -> Element) -> Self {
        set_event_converter(Box::new(SerializedHtmlEventConverter));
        take_calls();
        let mut dom = VirtualDom::new(root);
        let mutations = dom.rebuild_to_vec();
        let mut interaction = Self {
            dom,
            classes: HashMap::new(),
            listeners: Vec::new(),
        };
        interaction.apply(mutations);
        interaction
    }

    fn apply(&mut self, mutations: Mutations) {
        for edit in mutations.edits {
            match edit {
                Mutation::SetAttribute {
                    name: "class",
                    value: AttributeValue::Text(class),
                    id,
                    ..
                } => {
                    self.classes.insert(id, class);
                }
                Mutation::NewEventListener { name, id } => self.listeners.push((name, id)),
                _ => {}
            }
        }
    }

    /// Every element that registered a listener for `event`.
    pub fn targets(&self, event: &str) -> Vec<ElementId> {
        self.listeners
            .iter()
            .filter(|(name, _)| name == event)
            .map(|(_, id)| *id)
            .collect()
    }

    /// Current markup, for checks after an interaction re-rendered the tree.
    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    fn find(&self, event: &str, marker: &str) -> Option<ElementId> {
        self.targets(event).into_iter().find(|id| {
            self.classes
                .get(id)
                .is_some_and(|class| class.split_whitespace().any(|c| c == marker))
        })
    }

    fn target(&self, event: &str, marker: &str) -> ElementId {
        self.find(event, marker)
            .unwrap_or_else(|| panic!("no `{event}` listener on `.{marker}`"))
    }

    pub fn dispatch(&mut self, event: &str, target: ElementId, data: impl Any) {
        let data: Rc<dyn Any> = Rc::new(PlatformEventData::new(Box::new(data)));
        self.dom
            .runtime()
            .handle_event(event, Event::new(data, true), target);
        let mutations = self.dom.render_immediate_to_vec();
        self.apply(mutations);
    }

    pub fn mouse(&mut self, event: &str, marker: &str) {
        let target = self.target(event, marker);
        self.dispatch(event, target, SerializedMouseData::default());
    }

    pub fn click(&mut self, marker: &str) {
        self.mouse("click", marker);
    }

    pub fn form(&mut self, event: &str, marker: &str, value: &str) {
        let target = self.target(event, marker);
        self.dispatch(event, target, SerializedFormData::new(value.to_string(), Vec::new()));
    }
}
