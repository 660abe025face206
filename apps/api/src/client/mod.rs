// Client side of the analyzer: form state, clipboard access, and the HTTP
// client that submits a form to the analysis endpoint.

pub mod clipboard;
pub mod form;
pub mod http;
