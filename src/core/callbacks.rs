use tokio::task::JoinHandle;

pub fn global_callback() {}

/// Named like a mailer hook but has nothing to do with [`Mailer`](crate::domain::ports::Mailer).
pub fn on_sent_should_be_ignored() {}

pub async fn async_global_callback_work() {}

/// 在 tokio runtime 上排程空工作並立即回傳 handle，不會阻塞呼叫端。
///
/// Must be called from inside a tokio runtime. If the handle is dropped the
/// task is detached and may not run before the process exits.
pub fn async_global_callback() -> JoinHandle<()> {
    tracing::debug!("Spawning async global callback");
    tokio::spawn(async_global_callback_work())
}
