//! 바이오가스 발전기 표, 선정 로직, 발전 계통 부대설비 단가.
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 바이오가스 발전기 모델. 금액 단위는 R$.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeneratorModel {
    pub id: &'static str,
    pub brand: &'static str,
    pub model: &'static str,
    /// 정격 출력 [kW]
    pub power_kw: f64,
    /// 바이오가스 소비량 [m³/h]
    pub biogas_consumption_m3_per_h: f64,
    /// 변환 계수 [kWh/m³]
    pub conversion_factor: f64,
    pub cost: f64,
    /// 월 유지보수비 [R$/월]
    pub maintenance_cost_monthly: f64,
    /// 하루 최소/최대 운전시간 [h]
    pub min_operating_hours: f64,
    pub max_operating_hours: f64,
}

impl GeneratorModel {
    /// 주어진 일일 바이오가스로 가동 가능한 시간. 소비량이 0이면 0을 반환한다.
    pub fn hours_for(&self, daily_biogas_m3: f64) -> f64 {
        if self.biogas_consumption_m3_per_h > 0.0 {
            daily_biogas_m3 / self.biogas_consumption_m3_per_h
        } else {
            0.0
        }
    }

    /// 운전시간이 [min, max] 범위 안이면 적합하다.
    pub fn is_suitable_for(&self, daily_biogas_m3: f64) -> bool {
        if self.biogas_consumption_m3_per_h <= 0.0 {
            return false;
        }
        let hours = self.hours_for(daily_biogas_m3);
        hours >= self.min_operating_hours && hours <= self.max_operating_hours
    }
}

/// 선정 결과. 어떤 경로로 골랐는지 함께 돌려준다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "path", content = "generator", rename_all = "snake_case")]
pub enum GeneratorSelection {
    /// 운전시간 범위를 만족하는 후보 중 변환 계수가 가장 높은 모델
    InRange(&'static GeneratorModel),
    /// 범위를 만족하는 모델이 없어 공칭 소비량이 가장 가까운 모델
    ClosestMatch(&'static GeneratorModel),
}

impl GeneratorSelection {
    pub fn model(&self) -> &'static GeneratorModel {
        match self {
            GeneratorSelection::InRange(g) | GeneratorSelection::ClosestMatch(g) => g,
        }
    }

    pub fn is_in_range(&self) -> bool {
        matches!(self, GeneratorSelection::InRange(_))
    }
}

/// 발전 계통 부대설비(패널, 기계실, 전기 설치) 비용.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationComponents {
    pub management_panel: f64,
    pub protection_panel: f64,
    pub machine_house: f64,
    pub installation: f64,
}

pub fn generator_models() -> &'static [GeneratorModel] {
    GENERATORS
}

/// 일일 바이오가스량에 맞는 발전기를 고른다.
///
/// 1단계: 운전시간이 모델 범위에 드는 후보만 남기고 변환 계수가 가장 높은 것을 고른다.
/// 동률이면 카탈로그 순서상 앞선 모델이 유지된다.
/// 2단계: 후보가 없으면 `|소비량 × 목표시간 − 일일 바이오가스|`가 최소인 모델을 고른다.
pub fn select_generator(daily_biogas_m3: f64, target_operating_hours: f64) -> GeneratorSelection {
    let best_in_range = GENERATORS
        .iter()
        .filter(|g| g.is_suitable_for(daily_biogas_m3))
        .fold(None::<&'static GeneratorModel>, |best, g| match best {
            Some(b) if b.conversion_factor >= g.conversion_factor => Some(b),
            _ => Some(g),
        });
    if let Some(g) = best_in_range {
        debug!(id = g.id, daily_biogas_m3, "generator selected within operating range");
        return GeneratorSelection::InRange(g);
    }

    let mismatch = |g: &GeneratorModel| {
        (g.biogas_consumption_m3_per_h * target_operating_hours - daily_biogas_m3).abs()
    };
    let mut closest = &GENERATORS[0];
    for g in &GENERATORS[1..] {
        if mismatch(g) < mismatch(closest) {
            closest = g;
        }
    }
    debug!(
        id = closest.id,
        daily_biogas_m3, "no generator within operating range; using closest nominal match"
    );
    GeneratorSelection::ClosestMatch(closest)
}

/// 실제 운전시간. 모델 최대 운전시간으로 상한을 둔다.
pub fn operating_hours(daily_biogas_m3: f64, generator: &GeneratorModel) -> f64 {
    generator
        .hours_for(daily_biogas_m3)
        .min(generator.max_operating_hours)
}

/// 발전기 기준 일일 발전량 [kWh/일].
pub fn daily_energy_kwh(daily_biogas_m3: f64, generator: &GeneratorModel) -> f64 {
    generator.power_kw * operating_hours(daily_biogas_m3, generator)
}

/// 출력 구간별 부대설비 비용을 반환한다.
pub fn generation_components(power_kw: f64) -> GenerationComponents {
    let (management_panel, protection_panel, machine_house, installation) = if power_kw <= 50.0 {
        (25_000.0, 15_000.0, 30_000.0, 20_000.0)
    } else if power_kw <= 100.0 {
        (35_000.0, 22_000.0, 45_000.0, 30_000.0)
    } else if power_kw <= 200.0 {
        (50_000.0, 30_000.0, 65_000.0, 45_000.0)
    } else if power_kw <= 300.0 {
        (65_000.0, 40_000.0, 85_000.0, 60_000.0)
    } else {
        (85_000.0, 55_000.0, 120_000.0, 80_000.0)
    };
    GenerationComponents {
        management_panel,
        protection_panel,
        machine_house,
        installation,
    }
}

const GENERATORS: &[GeneratorModel] = &[
    GeneratorModel {
        id: "mwm-25",
        brand: "MWM",
        model: "D229-4",
        power_kw: 25.0,
        biogas_consumption_m3_per_h: 15.0,
        conversion_factor: 1.67,
        cost: 85_000.0,
        maintenance_cost_monthly: 1_500.0,
        min_operating_hours: 4.0,
        max_operating_hours: 20.0,
    },
    GeneratorModel {
        id: "mwm-40",
        brand: "MWM",
        model: "D229-6",
        power_kw: 40.0,
        biogas_consumption_m3_per_h: 22.0,
        conversion_factor: 1.82,
        cost: 120_000.0,
        maintenance_cost_monthly: 2_000.0,
        min_operating_hours: 4.0,
        max_operating_hours: 20.0,
    },
    GeneratorModel {
        id: "fpt-75",
        brand: "FPT",
        model: "4C",
        power_kw: 75.0,
        biogas_consumption_m3_per_h: 40.0,
        conversion_factor: 1.88,
        cost: 180_000.0,
        maintenance_cost_monthly: 3_806.0,
        min_operating_hours: 6.0,
        max_operating_hours: 20.0,
    },
    GeneratorModel {
        id: "scania-120",
        brand: "Scania",
        model: "SGI-120",
        power_kw: 120.0,
        biogas_consumption_m3_per_h: 55.0,
        conversion_factor: 2.18,
        cost: 280_000.0,
        maintenance_cost_monthly: 5_000.0,
        min_operating_hours: 8.0,
        max_operating_hours: 20.0,
    },
    GeneratorModel {
        id: "cat-180",
        brand: "Caterpillar",
        model: "G3306",
        power_kw: 180.0,
        biogas_consumption_m3_per_h: 80.0,
        conversion_factor: 2.25,
        cost: 420_000.0,
        maintenance_cost_monthly: 7_500.0,
        min_operating_hours: 8.0,
        max_operating_hours: 20.0,
    },
    GeneratorModel {
        id: "gmg-260",
        brand: "Caterpillar",
        model: "GMG 260",
        power_kw: 260.0,
        biogas_consumption_m3_per_h: 118.0,
        conversion_factor: 2.20,
        cost: 580_000.0,
        maintenance_cost_monthly: 10_000.0,
        min_operating_hours: 10.0,
        max_operating_hours: 20.0,
    },
    GeneratorModel {
        id: "cat-400",
        brand: "Caterpillar",
        model: "G3412",
        power_kw: 400.0,
        biogas_consumption_m3_per_h: 175.0,
        conversion_factor: 2.29,
        cost: 850_000.0,
        maintenance_cost_monthly: 15_000.0,
        min_operating_hours: 10.0,
        max_operating_hours: 20.0,
    },
    GeneratorModel {
        id: "cat-500",
        brand: "Caterpillar",
        model: "G3508",
        power_kw: 500.0,
        biogas_consumption_m3_per_h: 220.0,
        conversion_factor: 2.27,
        cost: 1_050_000.0,
        maintenance_cost_monthly: 18_000.0,
        min_operating_hours: 10.0,
        max_operating_hours: 20.0,
    },
];
