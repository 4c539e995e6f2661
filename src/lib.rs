pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{SampleConfig, DEFAULT_MESSAGE};
pub use core::callbacks::{
    async_global_callback, async_global_callback_work, global_callback, on_sent_should_be_ignored,
};
pub use core::run::{run, run_with};
pub use domain::{mailer::BasicMailer, ports::Mailer};
pub use utils::error::{Result, SampleError};
