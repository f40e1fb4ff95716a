use std::path::Path;

use crate::biogas::LivestockEntry;
use crate::config::{Config, ConfigError};
use crate::finance::PaymentMethod;
use crate::i18n::{self, Translator};
use crate::proposal::{self, CurrentCosts, FinancingChoice, ProposalError, ProposalInput};
use crate::ui_cli::{self, MenuChoice, QuickEstimateInput};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 프로젝트 입력 파일 오류
    Proposal(ProposalError),
    /// JSON 출력 오류
    Json(serde_json::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Proposal(e) => write!(f, "입력 오류: {e}"),
            AppError::Json(e) => write!(f, "JSON 출력 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ProposalError> for AppError {
    fn from(value: ProposalError) -> Self {
        AppError::Proposal(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        AppError::Json(value)
    }
}

/// 입력 파일을 평가해 텍스트 보고서 또는 JSON을 출력한다.
pub fn evaluate_file(
    path: &Path,
    config: &Config,
    tr: &Translator,
    json: bool,
) -> Result<(), AppError> {
    let input = proposal::load_input(path)?;
    let report = proposal::run_proposal(&input, config);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        ui_cli::print_report(tr, &report);
    }
    Ok(())
}

/// 간이 평가 입력을 프로젝트 입력으로 옮긴다.
pub fn quick_estimate_proposal(q: &QuickEstimateInput) -> ProposalInput {
    ProposalInput {
        name: None,
        livestock: vec![LivestockEntry {
            species: q.species.clone(),
            class: q.class.clone(),
            headcount: q.headcount,
            confinement_hours: q.confinement_hours,
        }],
        substrates: Vec::new(),
        site: Default::default(),
        features: Default::default(),
        current_costs: CurrentCosts::from_monthly_bill(q.energy_cost_per_kwh, q.monthly_bill),
        financing: FinancingChoice {
            method: if q.direct_payment {
                PaymentMethod::Direct
            } else {
                PaymentMethod::Financing
            },
            ..FinancingChoice::default()
        },
        operation: Default::default(),
    }
}

/// 대화형 메뉴 루프를 실행한다. 언어를 바꾸면 설정 파일에 저장하고 번역기를 다시 만든다.
pub fn run(config: &mut Config, config_path: &Path, tr: &mut Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::QuickEstimate => {
                let q = ui_cli::prompt_quick_estimate(tr)?;
                let report = proposal::run_proposal(&quick_estimate_proposal(&q), config);
                ui_cli::print_report(tr, &report);
            }
            MenuChoice::Catalog => ui_cli::print_catalog(tr),
            MenuChoice::Settings => {
                if let Some(code) = ui_cli::prompt_language(tr, &config.language)? {
                    config.language = code;
                    config.save(config_path)?;
                    let lang = i18n::resolve_language(None, config.language_override());
                    *tr = Translator::new_with_pack(&lang, None);
                }
            }
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
