/// Something that can send a welcome notification.
///
/// `send_welcome_message` is the public entry; it always goes through
/// `send_email`, which implementors override to do the actual delivery.
pub trait Mailer {
    fn send_welcome_message(&self) {
        tracing::debug!("Dispatching welcome message");
        self.send_email();
    }

    /// Base behaviour does nothing.
    fn send_email(&self) {}
}
