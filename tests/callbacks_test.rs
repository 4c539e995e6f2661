use mailer_sample::{async_global_callback, global_callback, on_sent_should_be_ignored};
use std::time::Duration;

#[test]
fn test_noop_callbacks() {
    global_callback();
    on_sent_should_be_ignored();
}

#[test]
fn test_launcher_inside_block_on() {
    let result = tokio_test::block_on(async { async_global_callback().await });
    assert!(result.is_ok());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_launcher_handle_completes() -> anyhow::Result<()> {
    let handle = async_global_callback();
    tokio::time::timeout(Duration::from_secs(5), handle).await??;
    Ok(())
}

#[tokio::test]
async fn test_launcher_returns_unfinished_handle_on_current_thread() {
    // current_thread runtime: the task cannot run until we yield
    let handle = async_global_callback();
    assert!(!handle.is_finished());
    assert!(handle.await.is_ok());
}
