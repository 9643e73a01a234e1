//! Browser renderer: draws cards, entries, the placeholder, and error
//! artifacts into the page's library and sandbox regions.

use std::collections::HashMap;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::catalog::Item;
use crate::consts::{
    BLOCK_ID_ATTRIBUTE, CARD_CLASS, CATEGORY_CLASS, DRAG_OVER_CLASS, DRAGGING_CLASS, ENDPOINT_ATTRIBUTE, ENTRY_CLASS,
    ERROR_CLASS, LIBRARY_ID, PLACEHOLDER_CLASS, PLACEHOLDER_ID, PLACEHOLDER_TEXT, REMOVE_LABEL, SANDBOX_ID,
};
use crate::error::ErrorNotice;
use crate::render::{NodeId, Renderer};

/// [`Renderer`] backed by live DOM elements.
pub struct DomRenderer {
    document: Document,
    library: Element,
    sandbox: Element,
    nodes: HashMap<NodeId, Element>,
    next_node: u64,
}

impl DomRenderer {
    /// Bind to the `#equipment-list` and `#sandbox-area` regions of `document`.
    ///
    /// # Errors
    ///
    /// Returns an error if either region is missing from the page.
    pub fn new(document: Document) -> Result<Self, JsValue> {
        let library = region(&document, LIBRARY_ID)?;
        let sandbox = region(&document, SANDBOX_ID)?;
        Ok(Self { document, library, sandbox, nodes: HashMap::new(), next_node: 0 })
    }

    /// The element behind `node`, if it is still attached.
    #[must_use]
    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(&node)
    }

    /// The drop zone.
    #[must_use]
    pub fn sandbox_region(&self) -> &Element {
        &self.sandbox
    }

    /// Catalog endpoint configured on the library element, if any.
    #[must_use]
    pub fn configured_endpoint(&self) -> Option<String> {
        self.library.get_attribute(ENDPOINT_ATTRIBUTE)
    }

    fn allocate(&mut self) -> NodeId {
        self.next_node += 1;
        NodeId(self.next_node)
    }

    fn register(&mut self, element: Result<Element, JsValue>, what: &str) -> NodeId {
        let id = self.allocate();
        match element {
            Ok(element) => {
                self.nodes.insert(id, element);
            }
            Err(e) => log::error!("failed to render {what}: {e:?}"),
        }
        id
    }

    fn text_element(&self, tag: &str, class: Option<&str>, text: &str) -> Result<Element, JsValue> {
        let element = self.document.create_element(tag)?;
        if let Some(class) = class {
            element.set_class_name(class);
        }
        element.set_text_content(Some(text));
        Ok(element)
    }

    fn build_card(&self, item: &Item) -> Result<Element, JsValue> {
        let card = self.document.create_element("article")?;
        card.set_class_name(CARD_CLASS);
        card.set_attribute(BLOCK_ID_ATTRIBUTE, &item.id)?;
        card.set_attribute("role", "listitem")?;
        card.set_attribute("tabindex", "0")?;
        card.set_attribute("draggable", "true")?;

        card.append_child(&self.text_element("span", Some(CATEGORY_CLASS), &item.category)?)?;
        card.append_child(&self.text_element("h3", None, &item.name)?)?;
        card.append_child(&self.text_element("p", None, &item.description)?)?;

        self.library.append_child(&card)?;
        Ok(card)
    }

    fn build_entry(&self, item: &Item) -> Result<Element, JsValue> {
        let entry = self.document.create_element("div")?;
        entry.set_class_name(ENTRY_CLASS);
        entry.set_attribute("role", "listitem")?;
        entry.set_attribute(BLOCK_ID_ATTRIBUTE, &item.id)?;

        entry.append_child(&self.text_element("strong", None, &item.name)?)?;
        entry.append_child(&self.text_element("p", None, &item.description)?)?;

        let remove = self.text_element("button", None, REMOVE_LABEL)?;
        remove.set_attribute("type", "button")?;
        remove.set_attribute("aria-label", &format!("{REMOVE_LABEL} {} from the sandbox", item.name))?;
        entry.append_child(&remove)?;

        self.sandbox.append_child(&entry)?;
        Ok(entry)
    }

    fn build_placeholder(&self) -> Result<(), JsValue> {
        if self.document.get_element_by_id(PLACEHOLDER_ID).is_some() {
            return Ok(());
        }
        let placeholder = self.text_element("p", Some(PLACEHOLDER_CLASS), PLACEHOLDER_TEXT)?;
        placeholder.set_id(PLACEHOLDER_ID);
        self.sandbox.append_child(&placeholder)?;
        Ok(())
    }

    fn build_error(&self, notice: &ErrorNotice) -> Result<(), JsValue> {
        let artifact = self.document.create_element("div")?;
        artifact.set_class_name(ERROR_CLASS);
        artifact.set_attribute("role", "alert")?;
        artifact.append_child(&self.text_element("h3", None, &notice.title)?)?;
        artifact.append_child(&self.text_element("p", None, &notice.message)?)?;
        artifact.append_child(&self.text_element("p", None, &notice.hint)?)?;
        self.library.append_child(&artifact)?;
        Ok(())
    }
}

fn region(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id} element")))
}

fn toggle_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        log::warn!("failed to toggle .{class}: {e:?}");
    }
}

impl Renderer for DomRenderer {
    fn create_library_card(&mut self, item: &Item) -> NodeId {
        let card = self.build_card(item);
        self.register(card, "library card")
    }

    fn create_sandbox_entry(&mut self, item: &Item) -> NodeId {
        let entry = self.build_entry(item);
        self.register(entry, "sandbox entry")
    }

    fn remove_node(&mut self, node: NodeId) {
        if let Some(element) = self.nodes.remove(&node) {
            element.remove();
        }
    }

    fn set_highlight(&mut self, active: bool) {
        toggle_class(&self.sandbox, DRAG_OVER_CLASS, active);
    }

    fn set_card_dragging(&mut self, node: NodeId, dragging: bool) {
        if let Some(card) = self.nodes.get(&node) {
            toggle_class(card, DRAGGING_CLASS, dragging);
        }
    }

    fn show_placeholder(&mut self) {
        if let Err(e) = self.build_placeholder() {
            log::error!("failed to show placeholder: {e:?}");
        }
    }

    fn hide_placeholder(&mut self) {
        if let Some(placeholder) = self.document.get_element_by_id(PLACEHOLDER_ID) {
            placeholder.remove();
        }
    }

    fn render_error(&mut self, notice: &ErrorNotice) {
        if let Err(e) = self.build_error(notice) {
            log::error!("failed to render error notice: {e:?}");
        }
    }
}
