//! Interactive catalogue browser
//!
//! Two panes: a selectable entry list on the left (algorithms or patterns,
//! Tab switches), and the selected entry's detail on the right with its
//! snippet highlighted through the core token stream.

pub mod model;
pub mod snippetview;
pub mod ui;
#[allow(clippy::module_inception)]
pub mod viewer;

#[cfg(test)]
mod tests;
