//! Domain layer: the background renderer model, the page configuration and
//! the cross-cutting logging and error types. Nothing here touches the DOM.

pub mod background;
pub mod errors;
pub mod logging;
pub mod portfolio;
