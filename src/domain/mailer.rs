use crate::domain::ports::Mailer;

#[derive(Debug, Clone, Copy, Default)]
pub struct BasicMailer;

impl BasicMailer {
    pub fn new() -> Self {
        BasicMailer
    }
}

impl Mailer for BasicMailer {}
