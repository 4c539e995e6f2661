pub mod callbacks;
pub mod run;

pub use crate::domain::mailer::BasicMailer;
pub use crate::domain::ports::Mailer;
pub use crate::utils::error::Result;
