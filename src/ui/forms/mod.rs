//! Form rendering module
//!
//! - `field_renderer`: text inputs, radio and checkbox rows with inline errors
//! - `signup_form`: the sign-up form layout

mod field_renderer;
mod signup_form;

pub use signup_form::{draw as draw_signup, FORM_HEIGHT, FORM_WIDTH};
