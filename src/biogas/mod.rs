//! 바이오가스/에너지 생산량 추정.
//!
//! 추정 방식은 [`YieldModel`] 트레이트 뒤에 둔다. 현재 구현은 휘발성 고형물(VS)
//! 기반 [`VolatileSolidsModel`] 하나뿐이며, 다른 방식을 추가할 때도 호출부는
//! 모델을 명시적으로 골라 넘긴다.

pub mod volatile_solids;

use serde::{Deserialize, Serialize};

use crate::units::MassUnit;

pub use volatile_solids::VolatileSolidsModel;

/// 바이오가스 1 m³당 발전량 [kWh/m³]
pub const KWH_PER_M3_BIOGAS: f64 = 2.0;
/// 기본 수리학적 체류시간 [일]
pub const DEFAULT_HRT_DAYS: f64 = 30.0;
/// 기본 목표 운전시간 [h/일]
pub const DEFAULT_OPERATING_HOURS: f64 = 14.0;

/// 사육 두수 입력 한 줄.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LivestockEntry {
    pub species: String,
    pub class: String,
    pub headcount: u32,
    /// 하루 중 축사 체류 시간 [h] (0~24)
    pub confinement_hours: f64,
}

/// 가축분뇨 외 기질 입력 한 줄.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstrateEntry {
    pub kind: String,
    /// 일일 투입량
    pub daily_mass: f64,
    #[serde(default)]
    pub unit: MassUnit,
}

/// 추정 조건.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldParams {
    pub hydraulic_retention_days: f64,
    pub target_operating_hours: f64,
}

impl Default for YieldParams {
    fn default() -> Self {
        Self {
            hydraulic_retention_days: DEFAULT_HRT_DAYS,
            target_operating_hours: DEFAULT_OPERATING_HOURS,
        }
    }
}

/// 가축 항목별 기여분.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LivestockContribution {
    pub species: String,
    pub class: String,
    pub headcount: u32,
    pub volatile_solids_kg: f64,
    pub biogas_m3: f64,
}

/// 기질 항목별 기여분.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstrateContribution {
    pub kind: String,
    pub mass_kg: f64,
    pub biogas_m3: f64,
}

/// 카탈로그에서 찾지 못해 0으로 처리된 입력.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum UnrecognizedEntry {
    Livestock { species: String, class: String },
    Substrate { kind: String },
}

/// 생산량 추정 결과. 입력이 비어 있으면 모든 값이 0이다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct YieldResult {
    /// 일일 바이오가스 [m³/일]
    pub daily_biogas_m3: f64,
    pub livestock_biogas_m3: f64,
    pub substrate_biogas_m3: f64,
    /// 일일 VS [kg/일]
    pub daily_volatile_solids_kg: f64,
    /// 일일 발전 가능량 [kWh/일]
    pub daily_energy_kwh: f64,
    /// 설치 출력 [kW]
    pub installed_power_kw: f64,
    pub operating_hours_per_day: f64,
    /// 일일 투입 바이오매스 체적 [m³/일]
    pub daily_biomass_volume_m3: f64,
    /// 필요 소화조 체적 [m³]
    pub required_biodigester_volume_m3: f64,
    pub livestock_detail: Vec<LivestockContribution>,
    pub substrate_detail: Vec<SubstrateContribution>,
    pub unrecognized: Vec<UnrecognizedEntry>,
}

impl YieldResult {
    /// 월 바이오가스 [m³/월] (30일 기준)
    pub fn monthly_biogas_m3(&self) -> f64 {
        self.daily_biogas_m3 * 30.0
    }

    /// 월 발전량 [kWh/월] (30일 기준)
    pub fn monthly_energy_kwh(&self) -> f64 {
        self.daily_energy_kwh * 30.0
    }

    pub fn has_livestock(&self) -> bool {
        !self.livestock_detail.is_empty()
    }

    pub fn has_substrates(&self) -> bool {
        !self.substrate_detail.is_empty()
    }
}

/// 생산량 추정 전략.
pub trait YieldModel {
    fn estimate(
        &self,
        livestock: &[LivestockEntry],
        substrates: &[SubstrateEntry],
        params: YieldParams,
    ) -> YieldResult;
}

/// 기본 모델(VS 기반)로 생산량을 추정한다.
pub fn estimate_yield(
    livestock: &[LivestockEntry],
    substrates: &[SubstrateEntry],
    params: YieldParams,
) -> YieldResult {
    VolatileSolidsModel::default().estimate(livestock, substrates, params)
}
