//! 가축 종/분류별 휘발성 고형물(VS) 계수와 기질별 바이오가스 수율 표.
//! 값은 현장 실측 기반 경험치이며 공식으로 유도하지 않는다.
use serde::Serialize;

use super::matches_name;

/// 가축 1두당 VS 배출량과 VS당 바이오가스 수율.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LivestockProfile {
    /// 종 코드 (swine, cattle, poultry)
    pub species: &'static str,
    /// 분류 코드 (finishing, sow 등)
    pub class: &'static str,
    /// 현지 표기명 (보고서용)
    pub label: &'static str,
    pub species_aliases: &'static [&'static str],
    pub class_aliases: &'static [&'static str],
    /// 두당 일일 VS [kg/두·일] (24시간 사육 기준)
    pub vs_kg_per_head_day: f64,
    /// VS 1 kg당 바이오가스 [L/kg VS]
    pub biogas_liters_per_kg_vs: f64,
    /// 공정 효율 (0~1)
    pub process_efficiency: f64,
}

/// 기질(가축분뇨 외) 톤당 바이오가스 수율.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SubstrateProfile {
    pub kind: &'static str,
    pub label: &'static str,
    pub aliases: &'static [&'static str],
    /// 톤당 바이오가스 [m³/t]
    pub biogas_m3_per_tonne: f64,
    /// 공정 효율 (0~1)
    pub process_efficiency: f64,
}

pub fn livestock_profiles() -> &'static [LivestockProfile] {
    LIVESTOCK
}

pub fn substrate_profiles() -> &'static [SubstrateProfile] {
    SUBSTRATES
}

/// 종/분류 이름으로 가축 계수를 찾는다. 코드, 현지 표기 모두 허용한다.
pub fn find_livestock(species: &str, class: &str) -> Option<&'static LivestockProfile> {
    LIVESTOCK.iter().find(|p| {
        matches_name(species, p.species, p.species_aliases)
            && matches_name(class, p.class, p.class_aliases)
    })
}

pub fn find_substrate(kind: &str) -> Option<&'static SubstrateProfile> {
    SUBSTRATES.iter().find(|s| {
        matches_name(kind, s.kind, s.aliases) || s.label.eq_ignore_ascii_case(kind.trim())
    })
}

const SWINE: &[&str] = &["suino", "Suíno", "pig"];
const CATTLE: &[&str] = &["bovino", "Bovino", "bovine"];
const POULTRY: &[&str] = &["aves", "Aves", "chicken"];

const SWINE_L_PER_KG_VS: f64 = 474.5;
const CATTLE_L_PER_KG_VS: f64 = 350.0;
const POULTRY_L_PER_KG_VS: f64 = 450.0;
const DEFAULT_EFFICIENCY: f64 = 0.80;

const LIVESTOCK: &[LivestockProfile] = &[
    LivestockProfile {
        species: "swine",
        class: "sow",
        label: "Suíno - Matriz",
        species_aliases: SWINE,
        class_aliases: &["Matriz"],
        vs_kg_per_head_day: 0.72,
        biogas_liters_per_kg_vs: SWINE_L_PER_KG_VS,
        process_efficiency: DEFAULT_EFFICIENCY,
    },
    LivestockProfile {
        species: "swine",
        class: "nursery",
        label: "Suíno - Crechário",
        species_aliases: SWINE,
        class_aliases: &["Crechário (Lâmina d'água)", "Crechário", "crechario"],
        vs_kg_per_head_day: 0.25,
        biogas_liters_per_kg_vs: SWINE_L_PER_KG_VS,
        process_efficiency: DEFAULT_EFFICIENCY,
    },
    LivestockProfile {
        species: "swine",
        class: "finishing",
        label: "Suíno - Terminação",
        species_aliases: SWINE,
        class_aliases: &["Terminação/Maraã", "Terminação", "terminacao"],
        vs_kg_per_head_day: 0.50,
        biogas_liters_per_kg_vs: SWINE_L_PER_KG_VS,
        process_efficiency: DEFAULT_EFFICIENCY,
    },
    LivestockProfile {
        species: "cattle",
        class: "breeding_cow",
        label: "Bovino - Matriz UPD",
        species_aliases: CATTLE,
        class_aliases: &["Matriz UPD"],
        vs_kg_per_head_day: 2.5,
        biogas_liters_per_kg_vs: CATTLE_L_PER_KG_VS,
        process_efficiency: DEFAULT_EFFICIENCY,
    },
    LivestockProfile {
        species: "cattle",
        class: "feedlot",
        label: "Bovino - Terminação Confinamento",
        species_aliases: CATTLE,
        class_aliases: &["Terminação Confinamento", "confinamento"],
        vs_kg_per_head_day: 3.0,
        biogas_liters_per_kg_vs: CATTLE_L_PER_KG_VS,
        process_efficiency: DEFAULT_EFFICIENCY,
    },
    LivestockProfile {
        species: "poultry",
        class: "layer",
        label: "Aves - Poedeira",
        species_aliases: POULTRY,
        class_aliases: &["Poedeira"],
        vs_kg_per_head_day: 0.025,
        biogas_liters_per_kg_vs: POULTRY_L_PER_KG_VS,
        process_efficiency: DEFAULT_EFFICIENCY,
    },
    LivestockProfile {
        species: "poultry",
        class: "broiler",
        label: "Aves - Frango de Corte",
        species_aliases: POULTRY,
        class_aliases: &["Frango de Corte", "frango"],
        vs_kg_per_head_day: 0.020,
        biogas_liters_per_kg_vs: POULTRY_L_PER_KG_VS,
        process_efficiency: DEFAULT_EFFICIENCY,
    },
];

const SUBSTRATES: &[SubstrateProfile] = &[
    SubstrateProfile {
        kind: "rso",
        label: "RSO",
        aliases: &["organic_solid_waste"],
        biogas_m3_per_tonne: 81.6,
        process_efficiency: 0.80,
    },
    SubstrateProfile {
        kind: "rsu",
        label: "RSU",
        aliases: &["municipal_solid_waste"],
        biogas_m3_per_tonne: 100.0,
        process_efficiency: 0.80,
    },
    SubstrateProfile {
        kind: "vinasse",
        label: "Vinhaça",
        aliases: &["vinhaca"],
        biogas_m3_per_tonne: 25.0,
        process_efficiency: 0.85,
    },
    SubstrateProfile {
        kind: "agroindustrial",
        label: "Resíduo Agroindustrial",
        aliases: &["agroindustrial_residue"],
        biogas_m3_per_tonne: 60.0,
        process_efficiency: 0.80,
    },
];
