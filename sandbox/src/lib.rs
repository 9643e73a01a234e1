//! Interaction core for the equipment sandbox.
//!
//! This crate is compiled to WebAssembly and runs in the browser, but all of
//! its state logic is plain Rust and is exercised natively in tests. It owns
//! the catalog of equipment items, the ordered set of entries the user has
//! placed in the sandbox, and the drag-and-drop hover state that drives the
//! drop-zone highlight. Everything visual goes through the [`render::Renderer`]
//! capability so the logic never touches the DOM directly.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Bootstrap and input adapter: [`engine::EngineCore`] |
//! | [`catalog`] | Equipment items and the read-only catalog |
//! | [`provider`] | Catalog retrieval (`reqwest`) |
//! | [`card`] | Library cards and their click / keyboard / drag behaviour |
//! | [`sandbox`] | Placed entries and the empty-state placeholder |
//! | [`dragdrop`] | Hover-depth state machine for the drop zone |
//! | [`input`] | UI event types and host actions |
//! | [`render`] | Renderer capability and a recording implementation |
//! | [`error`] | Catalog errors and their on-page presentation |
//! | [`consts`] | DOM ids, class names, and user-facing strings |
//! | `dom` | Browser renderer (feature `web`) |
//! | `host` | Wasm entry point and DOM event wiring (feature `web`) |

pub mod card;
pub mod catalog;
pub mod consts;
pub mod dragdrop;
pub mod engine;
pub mod error;
pub mod input;
pub mod provider;
pub mod render;
pub mod sandbox;

#[cfg(feature = "web")]
pub mod dom;
#[cfg(feature = "web")]
pub mod host;
