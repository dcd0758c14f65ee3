use clap::Parser;
use poetry_finder::core::ConfigProvider;
use poetry_finder::utils::{logger, validation::Validate};
use poetry_finder::{CliConfig, ConsolePresenter, HttpTransport, PoemFetcher, PoemFinder};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(config.verbose, config.log_format);

    tracing::debug!("Resolved config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let transport = HttpTransport::new(config.timeout())?;
    let fetcher = PoemFetcher::new(config.endpoint(), transport);
    let mut finder = PoemFinder::new(fetcher, ConsolePresenter::stdout());

    // 取不到詩也一樣正常結束，診斷訊息已由 fetcher 輸出
    match finder.run().await {
        Ok(Some(poem)) => tracing::debug!("Presented \"{}\"", poem.title),
        Ok(None) => tracing::debug!("No poem to present"),
        Err(e) => tracing::error!("❌ {}", e),
    }

    Ok(())
}
