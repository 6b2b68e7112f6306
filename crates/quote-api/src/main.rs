//! 報價命令列工具：從檔案或 stdin 讀取 JSON 請求，輸出回應封包或客戶報價文字

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use quote_api::{logging, render_preview, QuoteService};
use quote_calc::rush::parse_date;
use quote_core::{QuoteConfig, WorkCalendar};

#[derive(Debug, Parser)]
#[command(name = "quote", version, about = "網版印刷報價計算")]
struct Cli {
    /// 請求 JSON 檔案（省略時從 stdin 讀取）
    input: Option<PathBuf>,

    /// 以縮排格式輸出 JSON
    #[arg(long)]
    pretty: bool,

    /// 輸出客戶報價文字而非 JSON
    #[arg(long)]
    preview: bool,

    /// 拒絕低於價格表最低件數的訂單
    #[arg(long)]
    enforce_minimum: bool,

    /// 不計入生產天數的休假日（可重複）
    #[arg(long = "holiday", value_name = "YYYY-MM-DD")]
    holidays: Vec<String>,

    /// 未設置 RUST_LOG 時的日誌級別
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn read_input(input: Option<&PathBuf>) -> anyhow::Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("無法讀取 {}", path.display())),
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("無法讀取 stdin")?;
            Ok(body)
        }
    }
}

fn build_config(cli: &Cli) -> anyhow::Result<QuoteConfig> {
    let holidays = cli
        .holidays
        .iter()
        .map(|value| parse_date(value))
        .collect::<Result<Vec<_>, _>>()
        .context("休假日格式錯誤")?;

    Ok(QuoteConfig::new()
        .with_calendar(WorkCalendar::default().with_holidays(holidays))
        .with_enforce_minimum_quantity(cli.enforce_minimum))
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let service = QuoteService::new(build_config(&cli)?);
    let body = read_input(cli.input.as_ref())?;
    let response = service.handle(&body);

    match (&response.data, cli.preview) {
        (Some(result), true) => println!("{}", render_preview(result)),
        _ => println!("{}", response.to_json(cli.pretty)?),
    }

    Ok(if response.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
