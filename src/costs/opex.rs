//! 월 OPEX 10개 항목 산출과 물가 상승 반영 전망.
use serde::{Deserialize, Serialize};

use super::{round_currency, shares, CostShare, FeatureFlags};

/// 외부 바이오매스 운송 단가 [R$/(kg·km)]
const LOGISTICS_PER_KG_KM: f64 = 0.0005;
const DAYS_PER_MONTH: f64 = 30.0;

// 유지보수 = 기본료 + kW당 단가 × 출력
const BIODIGESTION_BASE: f64 = 500.0;
const BIODIGESTION_PER_KW: f64 = 7.24;
const TREATMENT_BASE: f64 = 100.0;
const TREATMENT_PER_KW: f64 = 0.81;
const GENERATION_BASE: f64 = 1_000.0;
const GENERATION_PER_KW: f64 = 37.41;
const THERMAL_BASE: f64 = 300.0;
const THERMAL_PER_KW: f64 = 5.0;
const BIOMETHANE_BASE: f64 = 500.0;
const BIOMETHANE_PER_KW: f64 = 15.0;
const ORGANOMINERAL_MONTHLY: f64 = 2_500.0;

const OPERATOR_SALARY: f64 = 3_500.0;
/// 급여 대비 사회보장/복리후생 배수
const OPERATOR_BENEFITS_MULTIPLIER: f64 = 1.66;
const PART_TIME_OPERATION: f64 = 1_500.0;
const ADMINISTRATIVE_MONTHLY: f64 = 250.0;

/// 외부에서 들여오는 바이오매스.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExternalBiomass {
    pub daily_mass_kg: f64,
    pub distance_km: f64,
}

/// OPEX 산출 입력.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OpexInput {
    pub installed_power_kw: f64,
    pub features: FeatureFlags,
    pub dedicated_operator: bool,
    pub external_biomass: Option<ExternalBiomass>,
    /// 바이오매스 공급자 보상 [R$/월]
    pub biomass_remuneration: f64,
}

/// OPEX 항목 식별자.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpexItem {
    Logistics,
    BiodigestionMaintenance,
    BiogasTreatmentMaintenance,
    ElectricGenerationMaintenance,
    ThermalMaintenance,
    BiomethaneMaintenance,
    OrganomineralMaintenance,
    Operation,
    Administrative,
    BiomassRemuneration,
}

impl OpexItem {
    pub fn code(&self) -> &'static str {
        match self {
            OpexItem::Logistics => "logistics",
            OpexItem::BiodigestionMaintenance => "biodigestion_maintenance",
            OpexItem::BiogasTreatmentMaintenance => "biogas_treatment_maintenance",
            OpexItem::ElectricGenerationMaintenance => "electric_generation_maintenance",
            OpexItem::ThermalMaintenance => "thermal_maintenance",
            OpexItem::BiomethaneMaintenance => "biomethane_maintenance",
            OpexItem::OrganomineralMaintenance => "organomineral_maintenance",
            OpexItem::Operation => "operation",
            OpexItem::Administrative => "administrative",
            OpexItem::BiomassRemuneration => "biomass_remuneration",
        }
    }
}

/// 월 OPEX 항목 [R$/월].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OpexItems {
    pub logistics: f64,
    pub biodigestion_maintenance: f64,
    pub biogas_treatment_maintenance: f64,
    pub electric_generation_maintenance: f64,
    pub thermal_maintenance: f64,
    pub biomethane_maintenance: f64,
    pub organomineral_maintenance: f64,
    pub operation: f64,
    pub administrative: f64,
    pub biomass_remuneration: f64,
}

impl OpexItems {
    /// 항목을 표기 순서대로 나열한다.
    pub fn entries(&self) -> [(OpexItem, f64); 10] {
        [
            (OpexItem::Logistics, self.logistics),
            (OpexItem::BiodigestionMaintenance, self.biodigestion_maintenance),
            (OpexItem::BiogasTreatmentMaintenance, self.biogas_treatment_maintenance),
            (OpexItem::ElectricGenerationMaintenance, self.electric_generation_maintenance),
            (OpexItem::ThermalMaintenance, self.thermal_maintenance),
            (OpexItem::BiomethaneMaintenance, self.biomethane_maintenance),
            (OpexItem::OrganomineralMaintenance, self.organomineral_maintenance),
            (OpexItem::Operation, self.operation),
            (OpexItem::Administrative, self.administrative),
            (OpexItem::BiomassRemuneration, self.biomass_remuneration),
        ]
    }
}

/// 월/연 합계는 항목에서 매번 계산한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "OpexRecord", from = "OpexRecord")]
pub struct OpexBreakdown {
    items: OpexItems,
}

#[derive(Serialize, Deserialize)]
struct OpexRecord {
    #[serde(flatten)]
    items: OpexItems,
    #[serde(default)]
    monthly_total: f64,
    #[serde(default)]
    annual_total: f64,
}

impl From<OpexBreakdown> for OpexRecord {
    fn from(o: OpexBreakdown) -> Self {
        Self {
            items: o.items,
            monthly_total: o.monthly_total(),
            annual_total: o.annual_total(),
        }
    }
}

impl From<OpexRecord> for OpexBreakdown {
    fn from(r: OpexRecord) -> Self {
        Self { items: r.items }
    }
}

impl From<OpexItems> for OpexBreakdown {
    fn from(items: OpexItems) -> Self {
        Self { items }
    }
}

impl OpexBreakdown {
    pub fn items(&self) -> &OpexItems {
        &self.items
    }

    pub fn monthly_total(&self) -> f64 {
        self.items.entries().iter().map(|(_, v)| v).sum()
    }

    pub fn annual_total(&self) -> f64 {
        self.monthly_total() * 12.0
    }

    /// 0이 아닌 항목과 월 합계 대비 비중.
    pub fn summary(&self) -> Vec<CostShare<OpexItem>> {
        shares(self.items.entries().into_iter(), self.monthly_total())
    }
}

/// 설치 출력, 부가 설비, 운전 인력 형태로 월 OPEX를 산출한다. 각 항목은 원 단위로 반올림한다.
pub fn build_opex(input: &OpexInput) -> OpexBreakdown {
    let power = input.installed_power_kw.max(0.0);
    let gated = |enabled: bool, base: f64, per_kw: f64| {
        if enabled {
            round_currency(base + per_kw * power)
        } else {
            0.0
        }
    };

    let logistics = input
        .external_biomass
        .map(|b| b.daily_mass_kg.max(0.0) * b.distance_km.max(0.0) * LOGISTICS_PER_KG_KM * DAYS_PER_MONTH)
        .unwrap_or(0.0);
    let operation = if input.dedicated_operator {
        OPERATOR_SALARY * OPERATOR_BENEFITS_MULTIPLIER
    } else {
        PART_TIME_OPERATION
    };

    OpexBreakdown {
        items: OpexItems {
            logistics: round_currency(logistics),
            biodigestion_maintenance: gated(true, BIODIGESTION_BASE, BIODIGESTION_PER_KW),
            biogas_treatment_maintenance: gated(true, TREATMENT_BASE, TREATMENT_PER_KW),
            electric_generation_maintenance: gated(true, GENERATION_BASE, GENERATION_PER_KW),
            thermal_maintenance: gated(input.features.thermal, THERMAL_BASE, THERMAL_PER_KW),
            biomethane_maintenance: gated(
                input.features.biomethane,
                BIOMETHANE_BASE,
                BIOMETHANE_PER_KW,
            ),
            organomineral_maintenance: gated(input.features.organomineral, ORGANOMINERAL_MONTHLY, 0.0),
            operation: round_currency(operation),
            administrative: ADMINISTRATIVE_MONTHLY,
            biomass_remuneration: round_currency(input.biomass_remuneration.max(0.0)),
        },
    }
}

/// 연도별 OPEX 전망 한 줄.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpexProjectionYear {
    pub year: u32,
    pub monthly: f64,
    pub annual: f64,
}

/// `(1 + 물가상승률)^(연차−1)`로 OPEX를 연도별로 늘린다. 1년차는 현재 값과 같다.
pub fn project_opex(opex: &OpexBreakdown, inflation_rate: f64, years: u32) -> Vec<OpexProjectionYear> {
    let monthly0 = opex.monthly_total();
    (1..=years)
        .map(|year| {
            let factor = (1.0 + inflation_rate).powi(year as i32 - 1);
            OpexProjectionYear {
                year,
                monthly: monthly0 * factor,
                annual: monthly0 * factor * 12.0,
            }
        })
        .collect()
}
