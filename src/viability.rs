//! 규칙 기반 사업성 판정.
//!
//! 규칙은 모두 평가되며, 걸린 항목은 순서대로 전부 돌려준다. 점수는 100점에서
//! 감점하고 0 아래로 내려가지 않는다. 하드 실패가 하나라도 있으면 점수와 관계없이
//! 사업성이 없다.
use serde::{Deserialize, Serialize};

use crate::biogas::YieldResult;
use crate::finance::ProjectedCashFlow;

/// 판정 기준. 설정 파일에서 덮어쓸 수 있다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViabilityThresholds {
    /// 이 값 미만이면 하드 실패 [m³/일]
    pub min_daily_biogas_m3: f64,
    /// 이 값 미만이면 감점 [m³/일]
    pub ideal_daily_biogas_m3: f64,
    pub min_power_kw: f64,
    pub ideal_power_kw: f64,
    /// 이 값을 넘으면 맞춤 설계 [m³]
    pub max_standard_volume_m3: f64,
    pub max_payback_years: f64,
    pub min_score: u32,
}

impl Default for ViabilityThresholds {
    fn default() -> Self {
        Self {
            min_daily_biogas_m3: 10.0,
            ideal_daily_biogas_m3: 50.0,
            min_power_kw: 25.0,
            ideal_power_kw: 50.0,
            max_standard_volume_m3: 10_000.0,
            max_payback_years: 20.0,
            min_score: 50,
        }
    }
}

/// 판정 항목. 표시 문구는 표현 계층에서 번역한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum ViabilityIssue {
    BiogasTooLow { daily_biogas_m3: f64, minimum: f64 },
    BiogasBelowIdeal { daily_biogas_m3: f64, ideal: f64 },
    PowerTooLow { installed_power_kw: f64, minimum: f64 },
    PowerBelowIdeal { installed_power_kw: f64, ideal: f64 },
    BiodigesterOversized { required_volume_m3: f64, maximum: f64 },
    NegativeMonthlyCashFlow { monthly_net_cash_flow: f64 },
    PaybackTooLong { payback_years: f64, maximum: f64 },
    NoPaybackWithinHorizon { horizon_years: u32 },
    InsufficientEnergy { daily_energy_kwh: f64, daily_demand_kwh: f64 },
}

/// 항목의 영향.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// 점수와 무관하게 사업성 없음
    HardFail,
    /// 감점만
    Warning,
}

impl ViabilityIssue {
    pub fn severity(&self) -> Severity {
        match self {
            ViabilityIssue::BiogasTooLow { .. }
            | ViabilityIssue::PowerTooLow { .. }
            | ViabilityIssue::NegativeMonthlyCashFlow { .. }
            | ViabilityIssue::PaybackTooLong { .. }
            | ViabilityIssue::NoPaybackWithinHorizon { .. }
            | ViabilityIssue::InsufficientEnergy { .. } => Severity::HardFail,
            ViabilityIssue::BiogasBelowIdeal { .. }
            | ViabilityIssue::PowerBelowIdeal { .. }
            | ViabilityIssue::BiodigesterOversized { .. } => Severity::Warning,
        }
    }

    /// 감점 폭.
    pub fn penalty(&self) -> u32 {
        match self {
            ViabilityIssue::BiogasTooLow { .. } => 40,
            ViabilityIssue::BiogasBelowIdeal { .. } => 15,
            ViabilityIssue::PowerTooLow { .. } => 30,
            ViabilityIssue::PowerBelowIdeal { .. } | ViabilityIssue::BiodigesterOversized { .. } => 10,
            _ => 0,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ViabilityIssue::BiogasTooLow { .. } => "biogas_too_low",
            ViabilityIssue::BiogasBelowIdeal { .. } => "biogas_below_ideal",
            ViabilityIssue::PowerTooLow { .. } => "power_too_low",
            ViabilityIssue::PowerBelowIdeal { .. } => "power_below_ideal",
            ViabilityIssue::BiodigesterOversized { .. } => "biodigester_oversized",
            ViabilityIssue::NegativeMonthlyCashFlow { .. } => "negative_monthly_cash_flow",
            ViabilityIssue::PaybackTooLong { .. } => "payback_too_long",
            ViabilityIssue::NoPaybackWithinHorizon { .. } => "no_payback_within_horizon",
            ViabilityIssue::InsufficientEnergy { .. } => "insufficient_energy",
        }
    }
}

/// 판정 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViabilityVerdict {
    pub is_viable: bool,
    pub issues: Vec<ViabilityIssue>,
    /// 0~100
    pub score: u32,
}

impl ViabilityVerdict {
    pub fn has_hard_fail(&self) -> bool {
        self.issues.iter().any(|i| i.severity() == Severity::HardFail)
    }

    pub fn has_issue(&self, code: &str) -> bool {
        self.issues.iter().any(|i| i.code() == code)
    }
}

/// 판정에 필요한 값.
#[derive(Debug, Clone, Copy)]
pub struct ViabilityContext<'a> {
    pub yield_result: &'a YieldResult,
    pub cash_flow: &'a ProjectedCashFlow,
    /// 월 순절감액 − 첫 달 납부액 [R$/월]
    pub monthly_net_cash_flow: f64,
    pub monthly_consumption_kwh: f64,
}

pub fn evaluate(ctx: &ViabilityContext<'_>, thresholds: &ViabilityThresholds) -> ViabilityVerdict {
    let y = ctx.yield_result;
    let mut issues = Vec::new();

    if y.daily_biogas_m3 < thresholds.min_daily_biogas_m3 {
        issues.push(ViabilityIssue::BiogasTooLow {
            daily_biogas_m3: y.daily_biogas_m3,
            minimum: thresholds.min_daily_biogas_m3,
        });
    } else if y.daily_biogas_m3 < thresholds.ideal_daily_biogas_m3 {
        issues.push(ViabilityIssue::BiogasBelowIdeal {
            daily_biogas_m3: y.daily_biogas_m3,
            ideal: thresholds.ideal_daily_biogas_m3,
        });
    }

    if y.installed_power_kw < thresholds.min_power_kw {
        issues.push(ViabilityIssue::PowerTooLow {
            installed_power_kw: y.installed_power_kw,
            minimum: thresholds.min_power_kw,
        });
    } else if y.installed_power_kw < thresholds.ideal_power_kw {
        issues.push(ViabilityIssue::PowerBelowIdeal {
            installed_power_kw: y.installed_power_kw,
            ideal: thresholds.ideal_power_kw,
        });
    }

    if y.required_biodigester_volume_m3 > thresholds.max_standard_volume_m3 {
        issues.push(ViabilityIssue::BiodigesterOversized {
            required_volume_m3: y.required_biodigester_volume_m3,
            maximum: thresholds.max_standard_volume_m3,
        });
    }

    if ctx.monthly_net_cash_flow < 0.0 {
        issues.push(ViabilityIssue::NegativeMonthlyCashFlow {
            monthly_net_cash_flow: ctx.monthly_net_cash_flow,
        });
    }

    let cf = ctx.cash_flow;
    if !cf.years.is_empty() {
        if !cf.pays_back() {
            issues.push(ViabilityIssue::NoPaybackWithinHorizon {
                horizon_years: cf.years.len() as u32,
            });
        } else if cf.payback_simple > thresholds.max_payback_years {
            issues.push(ViabilityIssue::PaybackTooLong {
                payback_years: cf.payback_simple,
                maximum: thresholds.max_payback_years,
            });
        }
    }

    let daily_demand_kwh = ctx.monthly_consumption_kwh / 30.0;
    if y.daily_energy_kwh < daily_demand_kwh {
        issues.push(ViabilityIssue::InsufficientEnergy {
            daily_energy_kwh: y.daily_energy_kwh,
            daily_demand_kwh,
        });
    }

    let penalty: u32 = issues.iter().map(ViabilityIssue::penalty).sum();
    let score = 100u32.saturating_sub(penalty);
    let hard_fail = issues.iter().any(|i| i.severity() == Severity::HardFail);

    ViabilityVerdict {
        is_viable: score >= thresholds.min_score && !hard_fail,
        issues,
        score,
    }
}
