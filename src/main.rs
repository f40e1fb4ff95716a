use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use biogas_viability::app::{self, AppError};
use biogas_viability::config::{self, DEFAULT_CONFIG_PATH};
use biogas_viability::i18n::{self, keys, Translator};
use biogas_viability::ui_cli;

#[derive(Parser, Debug)]
#[command(name = "biogas_viability", version, about = "Biogas-to-energy financial viability engine")]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 표시 언어 (ko/en/pt)
    #[arg(long, global = true)]
    lang: Option<String>,
    /// debug 로그 출력
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 프로젝트 입력 파일(TOML)을 평가한다
    Evaluate {
        input: PathBuf,
        /// 보고서 대신 JSON 출력
        #[arg(long)]
        json: bool,
        /// 전망 기간 [년]
        #[arg(long)]
        horizon: Option<u32>,
    },
    /// 장비 카탈로그를 출력한다
    Catalog,
    /// 대화형 메뉴
    Interactive,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut cfg = match config::load_or_default(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            let tr = Translator::new_with_pack(&i18n::resolve_language(cli.lang.as_deref(), None), None);
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            return ExitCode::FAILURE;
        }
    };
    let lang = i18n::resolve_language(cli.lang.as_deref(), cfg.language_override());
    let mut tr = Translator::new_with_pack(&lang, None);

    match try_run(cli, &mut cfg, &mut tr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli, cfg: &mut config::Config, tr: &mut Translator) -> Result<(), AppError> {
    match cli.command.unwrap_or(Command::Interactive) {
        Command::Evaluate {
            input,
            json,
            horizon,
        } => {
            let mut run_cfg = cfg.clone();
            if let Some(years) = horizon {
                run_cfg.engine.horizon_years = years;
            }
            app::evaluate_file(&input, &run_cfg, tr, json)
        }
        Command::Catalog => {
            ui_cli::print_catalog(tr);
            Ok(())
        }
        Command::Interactive => app::run(cfg, &cli.config, tr),
    }
}

/// 로그는 stderr로 보낸다. RUST_LOG가 있으면 그것을 따른다.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
