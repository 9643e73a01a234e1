use crate::card::CardFactory;
use crate::catalog::{Catalog, Item};
use crate::dragdrop::DragDropCoordinator;
use crate::error::CatalogError;
use crate::input::{Action, Key, UiEvent};
use crate::provider::CatalogProvider;
use crate::render::Renderer;
use crate::sandbox::{EntryId, SandboxController};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core engine state: the catalog, library cards, sandbox, and drop zone,
/// wired to one renderer.
///
/// Holds no browser handles so it can be driven natively in tests with a
/// recording renderer.
pub struct EngineCore<R: Renderer> {
    pub catalog: Catalog,
    pub cards: CardFactory,
    pub sandbox: SandboxController,
    pub dragdrop: DragDropCoordinator,
    pub renderer: R,
}

impl<R: Renderer> EngineCore<R> {
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self {
            catalog: Catalog::new(),
            cards: CardFactory::new(),
            sandbox: SandboxController::new(),
            dragdrop: DragDropCoordinator::new(),
            renderer,
        }
    }

    // --- Bootstrap ---

    /// One-time interaction setup: start with the empty-state placeholder.
    pub fn setup(&mut self) {
        self.sandbox.show_empty_placeholder(&mut self.renderer);
    }

    /// Load the catalog and, if anything arrived, build the library.
    ///
    /// Returns the number of cards built.
    pub async fn load<P: CatalogProvider>(&mut self, provider: &P) -> usize {
        let count = self.catalog.load(provider, &mut self.renderer).await;
        self.build_library(count)
    }

    /// Complete a load whose request the host performed itself.
    pub fn finish_load(&mut self, result: Result<Vec<Item>, CatalogError>, endpoint: &str) -> usize {
        let count = self.catalog.install(result, endpoint, &mut self.renderer);
        self.build_library(count)
    }

    fn build_library(&mut self, count: usize) -> usize {
        if count == 0 || !self.cards.is_empty() {
            return self.cards.len();
        }
        for item in self.catalog.iter() {
            self.cards.build_library_card(item, &mut self.renderer);
        }
        self.cards.len()
    }

    // --- Input events ---

    /// Apply one UI event and return the host-side effects it requires.
    pub fn handle(&mut self, event: UiEvent) -> Vec<Action> {
        match event {
            UiEvent::CardClick { card } => self.on_card_click(card),
            UiEvent::CardKeyDown { card, key } => self.on_card_key_down(card, &key),
            UiEvent::CardDragStart { card } => self.on_card_drag_start(card),
            UiEvent::CardDragEnd { card } => self.on_card_drag_end(card),
            UiEvent::EntryRemove { entry } => self.on_entry_remove(entry),
            UiEvent::ResetClick => self.on_reset(),
            UiEvent::SandboxDragEnter => self.on_drag_enter(),
            UiEvent::SandboxDragOver => self.on_drag_over(),
            UiEvent::SandboxDragLeave => self.on_drag_leave(),
            UiEvent::SandboxDrop { payload } => self.on_drop(&payload),
        }
    }

    pub fn on_card_click(&mut self, card: usize) -> Vec<Action> {
        let Some(card) = self.cards.card(card) else {
            return Vec::new();
        };
        let entry = card.activate(&mut self.sandbox, &mut self.renderer);
        vec![Action::EntryAdded { entry }]
    }

    pub fn on_card_key_down(&mut self, card: usize, key: &Key) -> Vec<Action> {
        let Some(card) = self.cards.card(card) else {
            return Vec::new();
        };
        match card.key_down(key, &mut self.sandbox, &mut self.renderer) {
            Some(entry) => vec![Action::PreventDefault, Action::EntryAdded { entry }],
            None => Vec::new(),
        }
    }

    pub fn on_card_drag_start(&mut self, card: usize) -> Vec<Action> {
        let Some(card) = self.cards.card(card) else {
            return Vec::new();
        };
        let start = card.drag_start(&mut self.renderer);
        vec![
            Action::SetEffectAllowed(start.effect_allowed),
            Action::SetDragData { format: start.format, data: start.data },
        ]
    }

    pub fn on_card_drag_end(&mut self, card: usize) -> Vec<Action> {
        if let Some(card) = self.cards.card(card) {
            card.drag_end(&mut self.renderer);
        }
        Vec::new()
    }

    pub fn on_entry_remove(&mut self, entry: EntryId) -> Vec<Action> {
        self.sandbox.remove_entry(entry, &mut self.renderer);
        Vec::new()
    }

    pub fn on_reset(&mut self) -> Vec<Action> {
        self.sandbox.reset(&mut self.renderer);
        Vec::new()
    }

    pub fn on_drag_enter(&mut self) -> Vec<Action> {
        self.dragdrop.enter(&mut self.renderer);
        vec![Action::PreventDefault]
    }

    pub fn on_drag_over(&mut self) -> Vec<Action> {
        let effect = self.dragdrop.over();
        vec![Action::PreventDefault, Action::SetDropEffect(effect)]
    }

    pub fn on_drag_leave(&mut self) -> Vec<Action> {
        self.dragdrop.leave(&mut self.renderer);
        Vec::new()
    }

    pub fn on_drop(&mut self, payload: &str) -> Vec<Action> {
        let outcome = self
            .dragdrop
            .drop(payload, &self.catalog, &mut self.sandbox, &mut self.renderer);
        match outcome.entry() {
            Some(entry) => vec![Action::PreventDefault, Action::EntryAdded { entry }, Action::ClearDragData],
            None => vec![Action::PreventDefault],
        }
    }

    // --- Queries ---

    /// The renderer, for hosts that need the nodes it created.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
