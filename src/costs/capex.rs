//! CAPEX 10개 분류 산출.
use serde::{Deserialize, Serialize};

use super::{round_currency, shares, CostShare, FeatureFlags, SiteConditions};
use crate::biogas::YieldResult;
use crate::catalog::{generation_components, BiodigesterModel, GeneratorModel};

// 단가 [R$]. kW는 설치 출력, m³/일은 일일 투입 체적 또는 바이오가스량 기준.
const EXECUTIVE_PROJECTS_PER_KW: f64 = 200.0;
const CONSTRUCTION_MONITORING_PER_KW: f64 = 150.0;
const GD_PROJECT_FEE: f64 = 8_500.0;
const PIT_PLAN_FEE: f64 = 5_000.0;
const PRETREATMENT_CIVIL_PER_M3_DAY: f64 = 800.0;
const PRETREATMENT_MECHANICAL_PER_M3_DAY: f64 = 600.0;
const AGITATION_PER_M3_VOLUME: f64 = 15.0;
const REGULATOR_VALVES_FEE: f64 = 12_000.0;
const DIGESTATE_PIPING_PER_M3_DAY: f64 = 200.0;
const LAGOON_STORAGE_DAYS: f64 = 30.0;
const LAGOON_PER_M3: f64 = 25.0;
const BIODESULFURIZER_PER_M3_BIOGAS: f64 = 20.0;
const DRYER_PER_M3_BIOGAS: f64 = 15.0;
const CARBON_FILTER_PER_M3_BIOGAS: f64 = 10.0;
const BIOGAS_PIPING_PER_M3_BIOGAS: f64 = 8.0;
const THERMAL_EQUIPMENT_PER_KW: f64 = 800.0;
const THERMAL_INSTALLATION_PER_KW: f64 = 300.0;
const PURIFICATION_PER_M3_BIOGAS: f64 = 150.0;
const COMPRESSION_PER_M3_BIOGAS: f64 = 80.0;
const BIOMETHANE_STORAGE_PER_M3_BIOGAS: f64 = 50.0;
const ORGANOMINERAL_EQUIPMENT_FEE: f64 = 180_000.0;
const ORGANOMINERAL_CIVIL_FEE: f64 = 80_000.0;
const ELECTRICAL_MATERIALS_PER_KW: f64 = 150.0;
/// 이 출력을 넘으면 변압기가 필요하다 [kW]
const TRANSFORMER_THRESHOLD_KW: f64 = 75.0;
const TRANSFORMER_PER_KW: f64 = 400.0;
/// 3상 배전망이 없을 때 가산 비용
const NO_THREE_PHASE_PENALTY: f64 = 20_000.0;
const GRID_EXTENSION_PER_M: f64 = 500.0;

/// CAPEX 분류. 순서는 보고서 표기 순서(00~09)와 같다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapexCategoryKind {
    ProjectManagement,
    Pretreatment,
    BiodigestionSystem,
    Digestate,
    BiogasConduction,
    ElectricGeneration,
    Thermal,
    Biomethane,
    Organomineral,
    Infrastructure,
}

impl CapexCategoryKind {
    pub const ALL: [CapexCategoryKind; 10] = [
        CapexCategoryKind::ProjectManagement,
        CapexCategoryKind::Pretreatment,
        CapexCategoryKind::BiodigestionSystem,
        CapexCategoryKind::Digestate,
        CapexCategoryKind::BiogasConduction,
        CapexCategoryKind::ElectricGeneration,
        CapexCategoryKind::Thermal,
        CapexCategoryKind::Biomethane,
        CapexCategoryKind::Organomineral,
        CapexCategoryKind::Infrastructure,
    ];

    /// 번역 키 등에 쓰는 코드.
    pub fn code(&self) -> &'static str {
        match self {
            CapexCategoryKind::ProjectManagement => "project_management",
            CapexCategoryKind::Pretreatment => "pretreatment",
            CapexCategoryKind::BiodigestionSystem => "biodigestion_system",
            CapexCategoryKind::Digestate => "digestate",
            CapexCategoryKind::BiogasConduction => "biogas_conduction",
            CapexCategoryKind::ElectricGeneration => "electric_generation",
            CapexCategoryKind::Thermal => "thermal",
            CapexCategoryKind::Biomethane => "biomethane",
            CapexCategoryKind::Organomineral => "organomineral",
            CapexCategoryKind::Infrastructure => "infrastructure",
        }
    }
}

/// CAPEX 세부 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapexItem {
    ExecutiveProjects,
    ConstructionMonitoring,
    GdProject,
    PitPlan,
    PretreatmentCivil,
    PretreatmentMechanical,
    BiodigesterCivil,
    BiodigesterLabor,
    Geomembrane,
    AgitationSystem,
    RegulatorValves,
    DigestatePiping,
    StorageLagoon,
    Biodesulfurizer,
    Dryer,
    ActivatedCarbonFilter,
    BiogasPiping,
    Generator,
    ManagementPanel,
    ProtectionPanel,
    MachineHouse,
    ThermalEquipment,
    ThermalInstallation,
    PurificationSystem,
    Compression,
    BiomethaneStorage,
    OrganomineralEquipment,
    OrganomineralCivil,
    ElectricalServices,
    ElectricalMaterials,
    Transformers,
    ThreePhaseGrid,
    GridExtension,
}

/// 금액이 붙은 항목 한 줄.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostLine {
    pub item: CapexItem,
    pub amount: f64,
}

impl CostLine {
    fn new(item: CapexItem, amount: f64) -> Self {
        Self {
            item,
            amount: round_currency(amount),
        }
    }
}

/// CAPEX 분류 하나. 소계는 항목 합으로만 구한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "CategoryRecord", from = "CategoryRecord")]
pub struct CapexCategory {
    kind: CapexCategoryKind,
    lines: Vec<CostLine>,
}

#[derive(Serialize, Deserialize)]
struct CategoryRecord {
    kind: CapexCategoryKind,
    lines: Vec<CostLine>,
    #[serde(default)]
    subtotal: f64,
}

impl From<CapexCategory> for CategoryRecord {
    fn from(c: CapexCategory) -> Self {
        let subtotal = c.subtotal();
        Self {
            kind: c.kind,
            lines: c.lines,
            subtotal,
        }
    }
}

impl From<CategoryRecord> for CapexCategory {
    fn from(r: CategoryRecord) -> Self {
        Self {
            kind: r.kind,
            lines: r.lines,
        }
    }
}

impl CapexCategory {
    fn new(kind: CapexCategoryKind, lines: Vec<CostLine>) -> Self {
        Self { kind, lines }
    }

    /// 비활성 기능 분류. 항목은 남기되 금액은 0이다.
    fn zeroed(kind: CapexCategoryKind, items: &[CapexItem]) -> Self {
        let lines = items.iter().map(|&item| CostLine::new(item, 0.0)).collect();
        Self { kind, lines }
    }

    pub fn kind(&self) -> CapexCategoryKind {
        self.kind
    }

    pub fn lines(&self) -> &[CostLine] {
        &self.lines
    }

    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(|l| l.amount).sum()
    }
}

/// CAPEX 전체. `total() == Σ subtotal()`이 항상 성립한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "CapexRecord", from = "CapexRecord")]
pub struct CapexBreakdown {
    categories: Vec<CapexCategory>,
}

#[derive(Serialize, Deserialize)]
struct CapexRecord {
    categories: Vec<CapexCategory>,
    #[serde(default)]
    total: f64,
}

impl From<CapexBreakdown> for CapexRecord {
    fn from(c: CapexBreakdown) -> Self {
        let total = c.total();
        Self {
            categories: c.categories,
            total,
        }
    }
}

impl From<CapexRecord> for CapexBreakdown {
    fn from(r: CapexRecord) -> Self {
        Self {
            categories: r.categories,
        }
    }
}

impl CapexBreakdown {
    pub fn categories(&self) -> &[CapexCategory] {
        &self.categories
    }

    pub fn category(&self, kind: CapexCategoryKind) -> Option<&CapexCategory> {
        self.categories.iter().find(|c| c.kind == kind)
    }

    pub fn subtotal(&self, kind: CapexCategoryKind) -> f64 {
        self.category(kind).map(CapexCategory::subtotal).unwrap_or(0.0)
    }

    /// 특정 항목 금액. 없으면 0.
    pub fn amount(&self, item: CapexItem) -> f64 {
        self.categories
            .iter()
            .flat_map(|c| c.lines.iter())
            .filter(|l| l.item == item)
            .map(|l| l.amount)
            .sum()
    }

    pub fn total(&self) -> f64 {
        self.categories.iter().map(CapexCategory::subtotal).sum()
    }

    /// 0이 아닌 분류별 금액과 비중.
    pub fn summary(&self) -> Vec<CostShare<CapexCategoryKind>> {
        let total = self.total();
        shares(self.categories.iter().map(|c| (c.kind, c.subtotal())), total)
    }
}

/// 생산량, 선정 장비, 계통 조건, 부가 설비로 CAPEX를 산출한다.
///
/// 단가 항목은 설치 출력(kW), 일일 투입 체적(m³/일), 일일 바이오가스(m³/일),
/// 필요 소화조 체적(m³) 중 해당 규모에 곱한다. 열 회수/바이오메탄/비료 공장은
/// 기능이 꺼져 있으면 0이다.
pub fn build_capex(
    yield_result: &YieldResult,
    biodigester: &BiodigesterModel,
    generator: &GeneratorModel,
    site: SiteConditions,
    features: FeatureFlags,
) -> CapexBreakdown {
    use CapexCategoryKind as K;
    use CapexItem as I;

    let power_kw = yield_result.installed_power_kw;
    let biomass_m3_day = yield_result.daily_biomass_volume_m3;
    let biogas_m3_day = yield_result.daily_biogas_m3;
    let volume_m3 = yield_result.required_biodigester_volume_m3;
    let components = generation_components(generator.power_kw);

    let project_management = CapexCategory::new(
        K::ProjectManagement,
        vec![
            CostLine::new(I::ExecutiveProjects, power_kw * EXECUTIVE_PROJECTS_PER_KW),
            CostLine::new(I::ConstructionMonitoring, power_kw * CONSTRUCTION_MONITORING_PER_KW),
            CostLine::new(I::GdProject, GD_PROJECT_FEE),
            CostLine::new(I::PitPlan, PIT_PLAN_FEE),
        ],
    );

    let pretreatment = CapexCategory::new(
        K::Pretreatment,
        vec![
            CostLine::new(I::PretreatmentCivil, biomass_m3_day * PRETREATMENT_CIVIL_PER_M3_DAY),
            CostLine::new(
                I::PretreatmentMechanical,
                biomass_m3_day * PRETREATMENT_MECHANICAL_PER_M3_DAY,
            ),
        ],
    );

    let biodigestion = CapexCategory::new(
        K::BiodigestionSystem,
        vec![
            CostLine::new(I::BiodigesterCivil, biodigester.civil_cost),
            CostLine::new(I::BiodigesterLabor, biodigester.labor_cost),
            CostLine::new(I::Geomembrane, biodigester.geomembrane_cost),
            CostLine::new(I::AgitationSystem, volume_m3 * AGITATION_PER_M3_VOLUME),
            CostLine::new(I::RegulatorValves, REGULATOR_VALVES_FEE),
        ],
    );

    let digestate = CapexCategory::new(
        K::Digestate,
        vec![
            CostLine::new(I::DigestatePiping, biomass_m3_day * DIGESTATE_PIPING_PER_M3_DAY),
            CostLine::new(
                I::StorageLagoon,
                biomass_m3_day * LAGOON_STORAGE_DAYS * LAGOON_PER_M3,
            ),
        ],
    );

    let conduction = CapexCategory::new(
        K::BiogasConduction,
        vec![
            CostLine::new(I::Biodesulfurizer, biogas_m3_day * BIODESULFURIZER_PER_M3_BIOGAS),
            CostLine::new(I::Dryer, biogas_m3_day * DRYER_PER_M3_BIOGAS),
            CostLine::new(I::ActivatedCarbonFilter, biogas_m3_day * CARBON_FILTER_PER_M3_BIOGAS),
            CostLine::new(I::BiogasPiping, biogas_m3_day * BIOGAS_PIPING_PER_M3_BIOGAS),
        ],
    );

    let generation = CapexCategory::new(
        K::ElectricGeneration,
        vec![
            CostLine::new(I::Generator, generator.cost),
            CostLine::new(I::ManagementPanel, components.management_panel),
            CostLine::new(I::ProtectionPanel, components.protection_panel),
            CostLine::new(I::MachineHouse, components.machine_house),
        ],
    );

    let thermal_items = [I::ThermalEquipment, I::ThermalInstallation];
    let thermal = if features.thermal {
        CapexCategory::new(
            K::Thermal,
            vec![
                CostLine::new(I::ThermalEquipment, power_kw * THERMAL_EQUIPMENT_PER_KW),
                CostLine::new(I::ThermalInstallation, power_kw * THERMAL_INSTALLATION_PER_KW),
            ],
        )
    } else {
        CapexCategory::zeroed(K::Thermal, &thermal_items)
    };

    let biomethane_items = [I::PurificationSystem, I::Compression, I::BiomethaneStorage];
    let biomethane = if features.biomethane {
        CapexCategory::new(
            K::Biomethane,
            vec![
                CostLine::new(I::PurificationSystem, biogas_m3_day * PURIFICATION_PER_M3_BIOGAS),
                CostLine::new(I::Compression, biogas_m3_day * COMPRESSION_PER_M3_BIOGAS),
                CostLine::new(
                    I::BiomethaneStorage,
                    biogas_m3_day * BIOMETHANE_STORAGE_PER_M3_BIOGAS,
                ),
            ],
        )
    } else {
        CapexCategory::zeroed(K::Biomethane, &biomethane_items)
    };

    let organomineral_items = [I::OrganomineralEquipment, I::OrganomineralCivil];
    let organomineral = if features.organomineral {
        CapexCategory::new(
            K::Organomineral,
            vec![
                CostLine::new(I::OrganomineralEquipment, ORGANOMINERAL_EQUIPMENT_FEE),
                CostLine::new(I::OrganomineralCivil, ORGANOMINERAL_CIVIL_FEE),
            ],
        )
    } else {
        CapexCategory::zeroed(K::Organomineral, &organomineral_items)
    };

    let transformers = if power_kw > TRANSFORMER_THRESHOLD_KW {
        power_kw * TRANSFORMER_PER_KW
    } else {
        0.0
    };
    let three_phase = if site.three_phase_grid {
        0.0
    } else {
        NO_THREE_PHASE_PENALTY
    };
    let infrastructure = CapexCategory::new(
        K::Infrastructure,
        vec![
            CostLine::new(I::ElectricalServices, components.installation),
            CostLine::new(I::ElectricalMaterials, power_kw * ELECTRICAL_MATERIALS_PER_KW),
            CostLine::new(I::Transformers, transformers),
            CostLine::new(I::ThreePhaseGrid, three_phase),
            CostLine::new(
                I::GridExtension,
                site.grid_distance_m.max(0.0) * GRID_EXTENSION_PER_M,
            ),
        ],
    );

    CapexBreakdown {
        categories: vec![
            project_management,
            pretreatment,
            biodigestion,
            digestate,
            conduction,
            generation,
            thermal,
            biomethane,
            organomineral,
            infrastructure,
        ],
    }
}
