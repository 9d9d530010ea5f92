// apps/wl_cli/src/main.rs

//! WaveLab 命令行界面
//!
//! 无头运行波浪模拟、查看几何体规模、验证求解器参数。

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// WaveLab 演示套件命令行工具
#[derive(Parser)]
#[command(name = "wl_cli")]
#[command(author = "WaveLab Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "WaveLab demo suite toolkit", long_about = None)]
struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 运行波浪模拟
    Run(commands::run::RunArgs),
    /// 显示几何体信息
    Info(commands::info::InfoArgs),
    /// 验证求解器参数
    Validate(commands::validate::ValidateArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // 执行命令
    match cli.command {
        Commands::Run(args) => commands::run::execute(args),
        Commands::Info(args) => commands::info::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
    }
}
