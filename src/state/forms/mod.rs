//! Form domain layer
//!
//! Type-safe values, the validation rule set and the sign-up form state.

mod field;
mod form_state;
mod validation;
mod values;

pub use field::FormField;
pub use form_state::{
    Form, FormRow, SignupForm, FORGOT_PASSWORD_BUTTON, SIGNUP_BUTTONS, SUBMIT_BUTTON,
};
pub use validation::*;
pub use values::{FieldName, FieldOfWork, FormValues, Gender};
