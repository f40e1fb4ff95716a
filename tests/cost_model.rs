//! CAPEX/OPEX 산출과 합계 불변식 테스트.
use biogas_viability::biogas::{estimate_yield, LivestockEntry, YieldParams, YieldResult};
use biogas_viability::catalog::{select_biodigester, select_generator};
use biogas_viability::costs::{
    build_capex, build_opex, project_opex, CapexBreakdown, CapexCategoryKind, CapexItem,
    ExternalBiomass, FeatureFlags, OpexBreakdown, OpexInput, SiteConditions,
};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {tol})"
    );
}

fn swine_yield(headcount: u32) -> YieldResult {
    estimate_yield(
        &[LivestockEntry {
            species: "swine".into(),
            class: "finishing".into(),
            headcount,
            confinement_hours: 18.0,
        }],
        &[],
        YieldParams::default(),
    )
}

fn capex_for(y: &YieldResult, site: SiteConditions, features: FeatureFlags) -> CapexBreakdown {
    let biodigester = select_biodigester(y.required_biodigester_volume_m3);
    let generator = select_generator(y.daily_biogas_m3, 14.0);
    build_capex(y, biodigester, generator.model(), site, features)
}

const ALL_FEATURES: FeatureFlags = FeatureFlags {
    thermal: true,
    biomethane: true,
    organomineral: true,
};

#[test]
fn capex_total_equals_sum_of_subtotals() {
    let sites = [
        SiteConditions::default(),
        SiteConditions {
            three_phase_grid: false,
            grid_distance_m: 1234.5,
        },
    ];
    for headcount in [0, 50, 800, 5000, 20_000, 120_000] {
        let y = swine_yield(headcount);
        for site in sites {
            for features in [FeatureFlags::default(), ALL_FEATURES] {
                let capex = capex_for(&y, site, features);
                let sum: f64 = capex.categories().iter().map(|c| c.subtotal()).sum();
                assert_eq!(capex.total(), sum, "headcount={headcount}");
                for c in capex.categories() {
                    let items: f64 = c.lines().iter().map(|l| l.amount).sum();
                    assert_eq!(c.subtotal(), items);
                    for line in c.lines() {
                        assert_eq!(line.amount, line.amount.round());
                    }
                }
            }
        }
    }
}

#[test]
fn capex_has_ten_categories_in_order() {
    let capex = capex_for(&swine_yield(5000), SiteConditions::default(), FeatureFlags::default());
    let kinds: Vec<_> = capex.categories().iter().map(|c| c.kind()).collect();
    assert_eq!(kinds, CapexCategoryKind::ALL.to_vec());
}

#[test]
fn reference_farm_capex() {
    let capex = capex_for(&swine_yield(5000), SiteConditions::default(), FeatureFlags::default());
    assert_eq!(capex.subtotal(CapexCategoryKind::ProjectManagement), 49_088.0);
    assert_eq!(capex.subtotal(CapexCategoryKind::Pretreatment), 18_375.0);
    assert_eq!(capex.subtotal(CapexCategoryKind::BiodigestionSystem), 149_529.0);
    assert_eq!(capex.subtotal(CapexCategoryKind::Digestate), 12_469.0);
    assert_eq!(capex.subtotal(CapexCategoryKind::BiogasConduction), 37_723.0);
    assert_eq!(capex.subtotal(CapexCategoryKind::ElectricGeneration), 565_000.0);
    assert_eq!(capex.subtotal(CapexCategoryKind::Infrastructure), 100_923.0);
    assert_eq!(capex.amount(CapexItem::Generator), 420_000.0);
    assert_close("total", capex.total(), 933_107.0, 1e-6);
}

#[test]
fn optional_categories_are_zero_unless_enabled() {
    let y = swine_yield(5000);
    let off = capex_for(&y, SiteConditions::default(), FeatureFlags::default());
    for kind in [
        CapexCategoryKind::Thermal,
        CapexCategoryKind::Biomethane,
        CapexCategoryKind::Organomineral,
    ] {
        assert_eq!(off.subtotal(kind), 0.0);
    }
    let on = capex_for(&y, SiteConditions::default(), ALL_FEATURES);
    assert!(on.subtotal(CapexCategoryKind::Thermal) > 0.0);
    assert!(on.subtotal(CapexCategoryKind::Biomethane) > 0.0);
    assert_eq!(on.subtotal(CapexCategoryKind::Organomineral), 260_000.0);
    assert!(on.total() > off.total());
}

#[test]
fn grid_conditions_add_penalty_and_extension() {
    let y = swine_yield(5000);
    let base = capex_for(&y, SiteConditions::default(), FeatureFlags::default());
    let remote = capex_for(
        &y,
        SiteConditions {
            three_phase_grid: false,
            grid_distance_m: 200.0,
        },
        FeatureFlags::default(),
    );
    assert_eq!(remote.amount(CapexItem::ThreePhaseGrid), 20_000.0);
    assert_eq!(remote.amount(CapexItem::GridExtension), 100_000.0);
    assert_eq!(remote.total() - base.total(), 120_000.0);
}

#[test]
fn transformer_only_above_threshold() {
    // 3,000두 → 약 61 kW, 5,000두 → 약 102 kW
    let small = capex_for(&swine_yield(3000), SiteConditions::default(), FeatureFlags::default());
    let large = capex_for(&swine_yield(5000), SiteConditions::default(), FeatureFlags::default());
    assert_eq!(small.amount(CapexItem::Transformers), 0.0);
    assert_eq!(large.amount(CapexItem::Transformers), 40_671.0);
}

#[test]
fn capex_summary_skips_zero_categories() {
    let capex = capex_for(&swine_yield(5000), SiteConditions::default(), FeatureFlags::default());
    let summary = capex.summary();
    assert_eq!(summary.len(), 7);
    let pct: f64 = summary.iter().map(|s| s.percentage).sum();
    assert_close("pct", pct, 100.0, 1e-9);
}

#[test]
fn capex_json_recomputes_totals() {
    let capex = capex_for(&swine_yield(5000), SiteConditions::default(), FeatureFlags::default());
    let mut value = serde_json::to_value(&capex).unwrap_or_default();
    assert_eq!(value["total"], serde_json::json!(capex.total()));
    // 저장된 합계는 신뢰하지 않는다
    value["total"] = serde_json::json!(1.0);
    value["categories"][0]["subtotal"] = serde_json::json!(2.0);
    let restored: CapexBreakdown = serde_json::from_value(value).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(restored, capex);
    assert_eq!(restored.total(), capex.total());
}

#[test]
fn opex_reference_farm_with_dedicated_operator() {
    let power = 1423.5 / 14.0;
    let opex = build_opex(&OpexInput {
        installed_power_kw: power,
        dedicated_operator: true,
        ..OpexInput::default()
    });
    let items = opex.items();
    assert_eq!(items.biodigestion_maintenance, 1_236.0);
    assert_eq!(items.biogas_treatment_maintenance, 182.0);
    assert_eq!(items.electric_generation_maintenance, 4_804.0);
    assert_eq!(items.operation, 5_810.0);
    assert_eq!(items.administrative, 250.0);
    assert_eq!(items.thermal_maintenance, 0.0);
    assert_eq!(opex.monthly_total(), 12_282.0);
    assert_eq!(opex.annual_total(), 12_282.0 * 12.0);
}

#[test]
fn opex_without_power_keeps_fixed_fees() {
    let opex = build_opex(&OpexInput::default());
    // 500 + 100 + 1000 + 1500(비전담) + 250
    assert_eq!(opex.monthly_total(), 3_350.0);
}

#[test]
fn opex_feature_gates_and_logistics() {
    let opex = build_opex(&OpexInput {
        installed_power_kw: 100.0,
        features: ALL_FEATURES,
        dedicated_operator: false,
        external_biomass: Some(ExternalBiomass {
            daily_mass_kg: 10_000.0,
            distance_km: 20.0,
        }),
        biomass_remuneration: 1_000.0,
    });
    let items = opex.items();
    assert_eq!(items.thermal_maintenance, 800.0);
    assert_eq!(items.biomethane_maintenance, 2_000.0);
    assert_eq!(items.organomineral_maintenance, 2_500.0);
    assert_eq!(items.logistics, 3_000.0);
    assert_eq!(items.biomass_remuneration, 1_000.0);
    let sum: f64 = items.entries().iter().map(|(_, v)| v).sum();
    assert_eq!(opex.monthly_total(), sum);
    assert_eq!(opex.annual_total(), sum * 12.0);
}

#[test]
fn opex_json_recomputes_totals() {
    let opex = build_opex(&OpexInput {
        installed_power_kw: 60.0,
        ..OpexInput::default()
    });
    let mut value = serde_json::to_value(opex).unwrap_or_default();
    assert_eq!(value["monthly_total"], serde_json::json!(opex.monthly_total()));
    value["monthly_total"] = serde_json::json!(0.0);
    value["annual_total"] = serde_json::json!(0.0);
    let restored: OpexBreakdown = serde_json::from_value(value).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(restored.monthly_total(), opex.monthly_total());
}

#[test]
fn opex_projection_applies_inflation() {
    let opex = build_opex(&OpexInput::default());
    let years = project_opex(&opex, 0.041, 3);
    assert_eq!(years.len(), 3);
    assert_eq!(years[0].monthly, 3_350.0);
    assert_close("y2", years[1].monthly, 3_350.0 * 1.041, 1e-9);
    assert_close("y3 annual", years[2].annual, 3_350.0 * 1.041 * 1.041 * 12.0, 1e-6);
}
