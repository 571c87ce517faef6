//! Submit boundary: what happens to the values once they validate

mod echo;
mod traits;

pub use echo::EchoSubmitHandler;
pub use traits::{SubmitHandler, SubmitOutcome};

#[cfg(test)]
pub use traits::MockSubmitHandler;
