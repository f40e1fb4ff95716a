//! CAPEX/OPEX 산출 모듈 모음.
//!
//! 모든 소계/합계는 항목에서 매번 다시 합산한다. 별도로 저장하거나 설정할 수 없다.

pub mod capex;
pub mod opex;

use serde::{Deserialize, Serialize};

pub use capex::{
    build_capex, CapexBreakdown, CapexCategory, CapexCategoryKind, CapexItem, CostLine,
};
pub use opex::{
    build_opex, project_opex, ExternalBiomass, OpexBreakdown, OpexInput, OpexItem, OpexItems,
    OpexProjectionYear,
};

/// 부가 설비 선택 여부.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// 열 회수
    pub thermal: bool,
    /// 바이오메탄 정제
    pub biomethane: bool,
    /// 유기무기질 비료 공장
    pub organomineral: bool,
}

/// 계통 연계 조건.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteConditions {
    /// 3상 배전망 보유 여부
    pub three_phase_grid: bool,
    /// 배전망까지 연장 거리 [m]
    #[serde(default)]
    pub grid_distance_m: f64,
}

impl Default for SiteConditions {
    fn default() -> Self {
        Self {
            three_phase_grid: true,
            grid_distance_m: 0.0,
        }
    }
}

/// 요약표 한 줄. 0원 항목은 요약에서 빠진다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostShare<K> {
    pub key: K,
    pub value: f64,
    /// 합계 대비 비중 [%]
    pub percentage: f64,
}

/// 금액을 원 단위(R$ 1)로 반올림한다.
pub fn round_currency(value: f64) -> f64 {
    if value.is_finite() {
        value.round()
    } else {
        0.0
    }
}

pub(crate) fn shares<K>(
    entries: impl Iterator<Item = (K, f64)>,
    total: f64,
) -> Vec<CostShare<K>> {
    entries
        .filter(|(_, value)| *value > 0.0)
        .map(|(key, value)| CostShare {
            key,
            value,
            percentage: if total > 0.0 { value / total * 100.0 } else { 0.0 },
        })
        .collect()
}
