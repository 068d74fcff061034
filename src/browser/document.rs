use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ Document, Element, HtmlElement };
use crate::controller::{ ThemeDocument, ToggleButton };
use crate::error::ThemeError;

fn set_class(element: &Element, class: &str, present: bool) {
    let list = element.class_list();
    let result = if present { list.add_1(class) } else { list.remove_1(class) };
    if let Err(e) = result {
        log::warn!("Failed to update class {:?}: {:?}", class, e);
    }
}

pub struct WebDocument {
    document: Document,
    root: HtmlElement,
}

impl WebDocument {
    pub fn new(document: Document) -> Result<Self, ThemeError> {
        let root = document
            .document_element()
            .ok_or_else(|| ThemeError::Environment("document has no root element".to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| ThemeError::Environment("root element is not an HTML element".to_string()))?;
        Ok(Self { document, root })
    }

    fn class_summary(&self) -> String {
        format!(
            "html: {:?}, body: {:?}",
            self.root.class_name(),
            self.document.body().map(|b| b.class_name()).unwrap_or_default()
        )
    }
}

impl ThemeDocument for WebDocument {
    fn toggle_button(&self, id: &str, indicator_selector: &str) -> Option<Rc<dyn ToggleButton>> {
        let element = self.document.get_element_by_id(id)?;
        Some(Rc::new(WebToggleButton {
            element,
            indicator_selector: indicator_selector.to_string(),
        }))
    }

    fn set_marker_class(&self, class: &str, present: bool) {
        set_class(&self.root, class, present);
        if let Some(body) = self.document.body() {
            set_class(&body, class, present);
        }
        log::trace!("Marker classes now {}", self.class_summary());
    }

    fn has_marker_class(&self, class: &str) -> bool {
        match self.document.body() {
            Some(body) => body.class_list().contains(class),
            None => self.root.class_list().contains(class),
        }
    }

    fn set_style_variable(&self, name: &str, value: &str) {
        if let Err(e) = self.root.style().set_property(name, value) {
            log::warn!("Failed to set {}: {:?}", name, e);
        }
    }
}

pub struct WebToggleButton {
    element: Element,
    indicator_selector: String,
}

impl ToggleButton for WebToggleButton {
    fn set_class(&self, class: &str, present: bool) {
        set_class(&self.element, class, present);
    }

    fn set_indicator_class(&self, class: &str, present: bool) -> bool {
        match self.element.query_selector(&self.indicator_selector).ok().flatten() {
            Some(indicator) => {
                set_class(&indicator, class, present);
                true
            }
            None => false,
        }
    }

    fn on_click(&self, mut callback: Box<dyn FnMut()>) {
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            callback();
        }) as Box<dyn FnMut(_)>);
        if let Err(e) = self.element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref()) {
            log::error!("Failed to listen for toggle clicks: {:?}", e);
        }
        closure.forget();
    }
}
