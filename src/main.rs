//! voxmap - 配音元数据维护工具
//!
//! - import: 将后端字典 JSON 导入存储
//! - export: 以后端字典 JSON 输出
//! - report: 列出需要重新录制的 content id

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use voxmap::application::{
    GetRecordedVoiceovers, GetRecordedVoiceoversHandler, ImportRecordedVoiceovers,
    ImportRecordedVoiceoversHandler, ListContentIdsNeedingUpdate,
    ListContentIdsNeedingUpdateHandler, RecordedVoiceoversRepositoryPort,
};
use voxmap::config::{load_config, load_config_from_path, print_config, AppConfig};
use voxmap::domain::voiceover::RecordedVoiceoversDict;
use voxmap::infrastructure::persistence::sled::{SledStoreConfig, SledVoiceoverRepository};

#[derive(Debug, Parser)]
#[command(name = "voxmap", about = "Recorded voiceover metadata maintenance")]
struct Cli {
    /// 配置文件路径（默认搜索 config.toml / config.local.toml）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 导入后端字典 JSON
    Import { owner_id: String, file: PathBuf },
    /// 输出 owner 的后端字典 JSON
    Export { owner_id: String },
    /// 列出每个 owner 中需要更新的 content id
    Report,
}

fn init_logging(config: &AppConfig) {
    let log_filter = format!("{},voxmap={}", config.log.level, config.log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = match cli.config.as_deref() {
        Some(path) => load_config_from_path(Some(path)),
        None => load_config(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_logging(&config);
    print_config(&config);

    if let Some(parent) = std::path::Path::new(&config.storage.db_path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let store = SledVoiceoverRepository::new(&SledStoreConfig {
        db_path: config.storage.db_path.clone(),
    })?
    .arc();
    let repo: Arc<dyn RecordedVoiceoversRepositoryPort> = store.clone();

    match cli.command {
        Command::Import { owner_id, file } => {
            let json = tokio::fs::read_to_string(&file).await?;
            let dict: RecordedVoiceoversDict = serde_json::from_str(&json)?;
            let response = ImportRecordedVoiceoversHandler::new(repo)
                .handle(ImportRecordedVoiceovers { owner_id, dict })
                .await?;
            tracing::info!(
                owner_id = %response.owner_id,
                content_ids = response.content_id_count,
                file = %file.display(),
                "Import complete"
            );
        }
        Command::Export { owner_id } => {
            let dict = GetRecordedVoiceoversHandler::new(repo)
                .handle(GetRecordedVoiceovers { owner_id })
                .await?;
            println!("{}", serde_json::to_string_pretty(&dict)?);
        }
        Command::Report => {
            let reports = ListContentIdsNeedingUpdateHandler::new(repo)
                .handle(ListContentIdsNeedingUpdate)
                .await?;
            for report in &reports {
                if report.content_ids.is_empty() {
                    println!("{}: up to date", report.owner_id);
                } else {
                    println!("{}: {}", report.owner_id, report.content_ids.join(", "));
                }
            }
            tracing::info!(owners = reports.len(), "Report complete");
        }
    }

    store.flush()?;
    Ok(())
}
