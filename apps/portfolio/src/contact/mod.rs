// Contact form: draft state, validation, submission to the message store,
// and the HTTP handlers that drive it.

pub mod form;
pub mod handlers;
pub mod validation;
