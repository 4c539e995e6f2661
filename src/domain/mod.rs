// Domain layer: the mailer port and its default implementation.

pub mod mailer;
pub mod ports;
