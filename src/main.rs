//! storescan命令行入口
//! serve启动HTTP服务；detect/audit对单个URL做一次性评估并输出JSON

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use storescan::audit::evaluate_store;
use storescan::config::ConfigManager;
use storescan::detector::global_detector;
use storescan::fetcher::{PageFetcher, normalize_url};
use storescan::server;

#[derive(Parser)]
#[command(name = "storescan", version, about = "网页技术栈识别与电商体检工具")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// 抓取超时（秒）
    #[arg(long, global = true, default_value_t = 15)]
    timeout: u64,

    /// 输出调试日志
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// 启动HTTP服务
    Serve {
        /// 监听地址
        #[arg(long, default_value = "127.0.0.1:8080")]
        bind: String,
    },
    /// 对单个URL执行技术检测
    Detect { url: String },
    /// 对单个URL执行电商体检
    Audit { url: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut builder = ConfigManager::custom()
        .http_timeout(cli.timeout)
        .verbose(cli.verbose);

    match cli.command {
        Command::Serve { bind } => {
            builder = builder.bind_addr(bind);
            server::serve(builder.build()).await?;
        }
        Command::Detect { url } => {
            let config = builder.build();
            let target = normalize_url(&url)?;
            let fetcher = PageFetcher::new(&config)?;
            let page = fetcher.fetch(&target).await?;

            let technologies = global_detector().detect(&page.body, &page.headers);
            println!("{}", serde_json::to_string_pretty(&technologies)?);
        }
        Command::Audit { url } => {
            let config = builder.build();
            let target = normalize_url(&url)?;
            let fetcher = PageFetcher::new(&config)?;
            let page = fetcher.fetch(&target).await?;

            let result = evaluate_store(
                &page.requested_url,
                &page.final_url,
                &page.body,
                &page.headers,
                page.fetch_time_ms,
            );
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

/// 初始化日志：默认info，--verbose升级为debug，RUST_LOG可覆盖
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "storescan=debug" } else { "storescan=info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
