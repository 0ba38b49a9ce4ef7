//! Eventing - Host to UI Events

pub mod app_event;
