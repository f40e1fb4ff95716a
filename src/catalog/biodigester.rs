//! 표준 원형 바이오다이제스터 표와 용량 기반 선정.
use serde::{Deserialize, Serialize};
use tracing::warn;

/// 바이오다이제스터 형상.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiodigesterShape {
    Circular,
    Rectangular,
}

/// 표준 바이오다이제스터 모델. 금액 단위는 R$.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiodigesterModel {
    /// 유효 체적 [m³]
    pub volume_m3: f64,
    /// 직경 [m]
    pub diameter_m: f64,
    /// 깊이 [m]
    pub depth_m: f64,
    pub geomembrane_cost: f64,
    pub labor_cost: f64,
    pub civil_cost: f64,
    pub total_cost: f64,
    pub shape: BiodigesterShape,
}

impl BiodigesterModel {
    const fn circular(
        volume_m3: f64,
        diameter_m: f64,
        geomembrane_cost: f64,
        labor_cost: f64,
        civil_cost: f64,
        total_cost: f64,
    ) -> Self {
        Self {
            volume_m3,
            diameter_m,
            depth_m: STANDARD_DEPTH_M,
            geomembrane_cost,
            labor_cost,
            civil_cost,
            total_cost,
            shape: BiodigesterShape::Circular,
        }
    }

    /// 요구 체적이 이 모델보다 크면 참. 맞춤 설계가 필요한 경우다.
    pub fn is_undersized_for(&self, required_volume_m3: f64) -> bool {
        self.volume_m3 < required_volume_m3
    }
}

/// 체적 오름차순으로 정렬된 카탈로그를 반환한다.
pub fn biodigester_models() -> &'static [BiodigesterModel] {
    BIODIGESTERS
}

/// 요구 체적 이상인 가장 작은 모델을 고른다.
///
/// 최대 모델로도 부족하면 최대 모델을 돌려준다. 호출자는
/// [`BiodigesterModel::is_undersized_for`]로 맞춤 설계 여부를 판단해야 한다.
pub fn select_biodigester(required_volume_m3: f64) -> &'static BiodigesterModel {
    if let Some(model) = BIODIGESTERS.iter().find(|b| b.volume_m3 >= required_volume_m3) {
        return model;
    }
    let largest = &BIODIGESTERS[BIODIGESTERS.len() - 1];
    warn!(
        required_volume_m3,
        largest_volume_m3 = largest.volume_m3,
        "required biodigester volume exceeds catalog; custom engineering needed"
    );
    largest
}

const STANDARD_DEPTH_M: f64 = 4.5;

const BIODIGESTERS: &[BiodigesterModel] = &[
    BiodigesterModel::circular(1500.0, 25.0, 70_847.0, 16_680.0, 44_096.0, 131_623.0),
    BiodigesterModel::circular(2000.0, 28.0, 92_217.0, 18_070.0, 44_176.0, 154_463.0),
    BiodigesterModel::circular(2500.0, 30.0, 106_271.0, 19_460.0, 80_859.0, 206_590.0),
    BiodigesterModel::circular(3000.0, 34.0, 127_641.0, 20_850.0, 80_923.0, 229_414.0),
    BiodigesterModel::circular(3500.0, 36.0, 127_641.0, 22_240.0, 80_979.0, 230_860.0),
    BiodigesterModel::circular(4000.0, 38.0, 141_694.0, 23_630.0, 119_848.0, 285_172.0),
    BiodigesterModel::circular(4500.0, 40.0, 163_064.0, 25_020.0, 119_895.0, 307_979.0),
    BiodigesterModel::circular(5000.0, 42.0, 163_064.0, 26_410.0, 122_543.0, 312_017.0),
    BiodigesterModel::circular(6000.0, 46.0, 184_434.0, 29_190.0, 140_000.0, 353_624.0),
    BiodigesterModel::circular(8000.0, 52.0, 220_000.0, 35_000.0, 180_000.0, 435_000.0),
    BiodigesterModel::circular(10000.0, 58.0, 260_000.0, 42_000.0, 220_000.0, 522_000.0),
];
