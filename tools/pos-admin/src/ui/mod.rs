//! UI module - TUI rendering components.
//!
//! - `layout.rs`: Main layout orchestration
//! - `left_panel.rs`: Section menu + session box
//! - `right_panel.rs`: Dispatches to section renderers
//! - `sections/`: One table renderer per dashboard section
//! - `widgets/`: Reusable UI components

mod layout;
mod left_panel;
mod right_panel;

pub mod sections;
pub mod widgets;

pub use layout::render;
