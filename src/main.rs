use mailer_sample::utils::{logger, validation::Validate};
use mailer_sample::SampleConfig;

#[tokio::main]
async fn main() {
    // 載入配置 (未設定環境變數時使用預設值)
    let loaded = SampleConfig::from_env().and_then(|config| {
        config.validate()?;
        Ok(config)
    });

    let config = match loaded {
        Ok(config) => {
            logger::init_logger(&config.logging);
            config
        }
        Err(e) => {
            let config = SampleConfig::default();
            logger::init_logger(&config.logging);
            tracing::warn!("⚠️ Ignoring configuration, using defaults: {}", e);
            config
        }
    };
    tracing::debug!("Config: {:?}", config);

    // 輸出失敗不影響結束狀態
    if let Err(e) = mailer_sample::run(&config) {
        tracing::warn!("⚠️ Failed to write notification: {}", e);
    }
}
