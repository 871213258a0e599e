pub mod dom;
pub mod reset_input;
pub mod session;
pub mod viewport;
