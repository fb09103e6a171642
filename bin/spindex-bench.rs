use std::time::Instant;

use clap::Parser;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spindex::config::LoggingConfig;
use spindex::{IndexConfig, Rectangle, Result, SpatialIndex};
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about = "Populate a quadtree index with random boxes and time a query", long_about = None)]
struct Args {
    /// 配置文件路径
    #[arg(short, long, default_value = "spindex.toml")]
    config: String,

    /// 生成默认配置文件并退出
    #[arg(long)]
    generate_config: bool,

    /// 插入的随机条目数量
    #[arg(short = 'n', long, default_value_t = 10_000)]
    items: usize,

    /// 随机数种子
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// 查询矩形：X1 Y1 X2 Y2
    #[arg(long, num_args = 4, value_names = ["X1", "Y1", "X2", "Y2"], allow_hyphen_values = true)]
    query: Option<Vec<f64>>,

    /// Log level (overrides config file)
    #[arg(long)]
    log_level: Option<String>,

    /// 打印完整的树结构
    #[arg(long)]
    dump_tree: bool,
}

/// 测试数据：中心落在 [5, 95) 的 2x2 矩形
#[derive(Debug, Clone, Copy, PartialEq)]
struct Item {
    id: usize,
    bbox: Rectangle,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 生成默认配置文件
    if args.generate_config {
        let config = IndexConfig::default();
        config.save_to_file(&args.config)?;
        println!("✅ Generated default configuration: {}", args.config);
        return Ok(());
    }

    // 加载配置
    let mut config = IndexConfig::from_file(&args.config)?;

    // 命令行参数覆盖配置文件
    if let Some(log_level) = args.log_level {
        config.logging.level = log_level;
    }

    // 验证配置
    config.validate()?;

    // 初始化日志系统
    init_logging(&config.logging)?;
    info!("📦 Version: {}", env!("CARGO_PKG_VERSION"));
    config.print_summary();

    let mut index: SpatialIndex<Item> = SpatialIndex::from_settings(&config.index)?;

    // 填充索引
    let mut rng = StdRng::seed_from_u64(args.seed);
    let started = Instant::now();
    for id in 0..args.items {
        let x: f64 = rng.gen_range(5..95) as f64;
        let y: f64 = rng.gen_range(5..95) as f64;
        let item = Item {
            id,
            bbox: Rectangle::new(x - 1.0, y - 1.0, x + 1.0, y + 1.0),
        };
        index.insert(item, item.bbox);
    }
    info!(
        items = index.count(),
        depth = index.depth(),
        quadrants = index.iter().count(),
        elapsed = ?started.elapsed(),
        "index populated"
    );

    // 测试相交查询
    let query = match args.query.as_deref() {
        Some([x1, y1, x2, y2]) => Rectangle::new(*x1, *y1, *x2, *y2),
        Some(other) => return Err(format!("--query expects 4 values, got {}", other.len()).into()),
        None => Rectangle::new(51.0, 51.0, 86.0, 86.0),
    };
    println!("{} {}", "testing hit".cyan().bold(), query);
    let started = Instant::now();
    let matches = index.intersect(query);
    let elapsed = started.elapsed();

    println!(
        "{} {} matches in {:.6} seconds",
        "✓".green(),
        matches.len().to_string().bold(),
        elapsed.as_secs_f64()
    );

    if args.dump_tree {
        println!();
        println!("{}", index.structure_string());
    }

    Ok(())
}

/// 初始化日志系统
fn init_logging(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    match (config.output.as_str(), &config.log_file) {
        ("file", Some(log_file)) => {
            // 确保日志目录存在
            if let Some(parent) = log_file.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)?;

            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(file)
                        .with_target(false),
                )
                .with(tracing_subscriber::filter::LevelFilter::from_level(filter))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(tracing_subscriber::fmt::layer().with_target(false))
                .with(tracing_subscriber::filter::LevelFilter::from_level(filter))
                .init();
        }
    }

    Ok(())
}
