use std::cell::{ Cell, RefCell };
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;
use crate::controller::{ PreferenceStore, SystemPreference, ThemeDocument, ThemeHost, Timer, ToggleButton };

fn set_class(classes: &RefCell<Vec<String>>, class: &str, present: bool) {
    let mut classes = classes.borrow_mut();
    if present {
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    } else {
        classes.retain(|c| c != class);
    }
}

#[derive(Default)]
pub struct MockStore {
    pub items: RefCell<HashMap<String, String>>,
    pub writes: Cell<usize>,
}

impl MockStore {
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.items.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MockStore {
    fn get(&self, key: &str) -> Option<String> {
        self.value(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.writes.set(self.writes.get() + 1);
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

#[derive(Default)]
pub struct MockSystem {
    pub dark: Cell<bool>,
    pub unsupported: bool,
    pub listeners: RefCell<Vec<Box<dyn FnMut(bool)>>>,
}

impl MockSystem {
    pub fn prefers(dark: bool) -> Self {
        Self { dark: Cell::new(dark), ..Self::default() }
    }

    /// Simulates the OS switching color scheme.
    pub fn change(&self, dark: bool) {
        self.dark.set(dark);
        for listener in self.listeners.borrow_mut().iter_mut() {
            listener(dark);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl SystemPreference for MockSystem {
    fn prefers_dark(&self) -> bool {
        self.dark.get()
    }

    fn subscribe(&self, callback: Box<dyn FnMut(bool)>) -> bool {
        if self.unsupported {
            return false;
        }
        self.listeners.borrow_mut().push(callback);
        true
    }
}

#[derive(Default)]
pub struct MockButton {
    pub classes: RefCell<Vec<String>>,
    /// `None` when the button has no indicator element.
    pub indicator: Option<RefCell<Vec<String>>>,
    pub click_handlers: RefCell<Vec<Box<dyn FnMut()>>>,
}

impl MockButton {
    pub fn with_indicator() -> Self {
        Self { indicator: Some(RefCell::new(Vec::new())), ..Self::default() }
    }

    pub fn click(&self) {
        for handler in self.click_handlers.borrow_mut().iter_mut() {
            handler();
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().iter().any(|c| c == class)
    }

    pub fn indicator_has_class(&self, class: &str) -> bool {
        self.indicator.as_ref().is_some_and(|i| i.borrow().iter().any(|c| c == class))
    }
}

impl ToggleButton for MockButton {
    fn set_class(&self, class: &str, present: bool) {
        set_class(&self.classes, class, present);
    }

    fn set_indicator_class(&self, class: &str, present: bool) -> bool {
        match &self.indicator {
            Some(indicator) => {
                set_class(indicator, class, present);
                true
            }
            None => false,
        }
    }

    fn on_click(&self, callback: Box<dyn FnMut()>) {
        self.click_handlers.borrow_mut().push(callback);
    }
}

#[derive(Default)]
pub struct MockDocument {
    pub button: Option<Rc<MockButton>>,
    pub root_classes: RefCell<Vec<String>>,
    pub body_classes: RefCell<Vec<String>>,
    pub style: RefCell<HashMap<String, String>>,
    pub mutations: Cell<usize>,
}

impl MockDocument {
    pub fn with_button(button: Rc<MockButton>) -> Self {
        Self { button: Some(button), ..Self::default() }
    }

    pub fn root_count(&self, class: &str) -> usize {
        self.root_classes.borrow().iter().filter(|c| *c == class).count()
    }

    pub fn body_count(&self, class: &str) -> usize {
        self.body_classes.borrow().iter().filter(|c| *c == class).count()
    }

    pub fn style_value(&self, name: &str) -> Option<String> {
        self.style.borrow().get(name).cloned()
    }
}

impl ThemeDocument for MockDocument {
    fn toggle_button(&self, id: &str, _indicator_selector: &str) -> Option<Rc<dyn ToggleButton>> {
        if id != "theme-toggle-button" {
            return None;
        }
        self.button.clone().map(|b| b as Rc<dyn ToggleButton>)
    }

    fn set_marker_class(&self, class: &str, present: bool) {
        self.mutations.set(self.mutations.get() + 1);
        set_class(&self.root_classes, class, present);
        set_class(&self.body_classes, class, present);
    }

    fn has_marker_class(&self, class: &str) -> bool {
        self.body_classes.borrow().iter().any(|c| c == class)
    }

    fn set_style_variable(&self, name: &str, value: &str) {
        self.mutations.set(self.mutations.get() + 1);
        self.style.borrow_mut().insert(name.to_string(), value.to_string());
    }
}

/// Collects scheduled tasks until the test fires them.
#[derive(Default)]
pub struct MockTimer {
    pub pending: RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>,
}

impl MockTimer {
    pub fn delays(&self) -> Vec<Duration> {
        self.pending.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    pub fn fire_all(&self) {
        let tasks: Vec<_> = self.pending.borrow_mut().drain(..).collect();
        for (_, task) in tasks {
            task();
        }
    }
}

impl Timer for MockTimer {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        self.pending.borrow_mut().push((delay, task));
    }
}

/// A page with its fakes kept around for assertions.
pub struct MockPage {
    pub document: Rc<MockDocument>,
    pub button: Rc<MockButton>,
    pub store: Rc<MockStore>,
    pub system: Rc<MockSystem>,
    pub timer: Rc<MockTimer>,
}

impl MockPage {
    pub fn new(store: MockStore, system: MockSystem) -> Self {
        let button = Rc::new(MockButton::with_indicator());
        Self {
            document: Rc::new(MockDocument::with_button(Rc::clone(&button))),
            button,
            store: Rc::new(store),
            system: Rc::new(system),
            timer: Rc::new(MockTimer::default()),
        }
    }

    pub fn without_button(store: MockStore, system: MockSystem) -> Self {
        let mut page = Self::new(store, system);
        page.document = Rc::new(MockDocument::default());
        page
    }

    pub fn host(&self) -> ThemeHost {
        ThemeHost {
            document: self.document.clone(),
            store: self.store.clone(),
            system: self.system.clone(),
            timer: self.timer.clone(),
        }
    }

    /// Same storage and system preference, fresh DOM: what a page reload looks like.
    pub fn reload(&self) -> Self {
        let button = Rc::new(MockButton::with_indicator());
        Self {
            document: Rc::new(MockDocument::with_button(Rc::clone(&button))),
            button,
            store: Rc::clone(&self.store),
            system: Rc::new(MockSystem::prefers(self.system.prefers_dark())),
            timer: Rc::new(MockTimer::default()),
        }
    }
}
