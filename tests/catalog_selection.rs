//! 장비 카탈로그와 선정 로직 테스트.
use biogas_viability::catalog::{
    biodigester_models, daily_energy_kwh, find_livestock, find_substrate, generation_components,
    generator_models, livestock_profiles, operating_hours, select_biodigester, select_generator,
    substrate_profiles, GeneratorModel, GeneratorSelection,
};

#[test]
fn biodigester_catalog_is_sorted_and_cost_monotonic() {
    let models = biodigester_models();
    assert_eq!(models.len(), 11);
    for pair in models.windows(2) {
        assert!(pair[0].volume_m3 < pair[1].volume_m3);
        assert!(pair[0].total_cost <= pair[1].total_cost);
    }
}

#[test]
fn biodigester_total_cost_is_sum_of_parts() {
    for b in biodigester_models() {
        assert_eq!(b.total_cost, b.geomembrane_cost + b.labor_cost + b.civil_cost);
    }
}

#[test]
fn selected_biodigester_always_covers_requirement() {
    let largest = biodigester_models().last().map(|b| b.volume_m3).unwrap_or(0.0);
    let mut v = 0.0;
    while v <= largest {
        let model = select_biodigester(v);
        assert!(model.volume_m3 >= v, "v={v} got {}", model.volume_m3);
        assert!(!model.is_undersized_for(v));
        // 더 작은 모델로는 충족하지 못해야 한다
        let smaller = biodigester_models()
            .iter()
            .filter(|b| b.volume_m3 < model.volume_m3)
            .any(|b| b.volume_m3 >= v);
        assert!(!smaller, "v={v}");
        v += 137.0;
    }
}

#[test]
fn oversized_requirement_returns_largest_model() {
    let model = select_biodigester(25_000.0);
    assert_eq!(model.volume_m3, 10_000.0);
    assert!(model.is_undersized_for(25_000.0));
}

#[test]
fn exact_catalog_volume_selects_that_model() {
    assert_eq!(select_biodigester(2000.0).volume_m3, 2000.0);
    assert_eq!(select_biodigester(2000.1).volume_m3, 2500.0);
}

#[test]
fn in_range_generator_prefers_highest_conversion_factor() {
    // 711.75 m³/일: fpt-75, scania-120, cat-180이 범위 안
    let sel = select_generator(711.75, 14.0);
    assert!(sel.is_in_range());
    assert_eq!(sel.model().id, "cat-180");
    for g in generator_models().iter().filter(|g| g.is_suitable_for(711.75)) {
        assert!(g.conversion_factor <= sel.model().conversion_factor);
    }
}

#[test]
fn no_biogas_falls_back_to_closest_nominal_match() {
    let sel = select_generator(0.0, 14.0);
    assert!(matches!(sel, GeneratorSelection::ClosestMatch(g) if g.id == "mwm-25"));
}

#[test]
fn very_large_production_falls_back_to_largest_consumer() {
    let sel = select_generator(10_000.0, 14.0);
    assert!(!sel.is_in_range());
    assert_eq!(sel.model().id, "cat-500");
}

#[test]
fn operating_hours_are_capped_at_model_maximum() {
    let g = generator_models()
        .iter()
        .find(|g| g.id == "mwm-25")
        .copied()
        .unwrap_or_else(|| panic!("mwm-25 missing"));
    assert_eq!(operating_hours(150.0, &g), 10.0);
    assert_eq!(operating_hours(1_000.0, &g), g.max_operating_hours);
    assert_eq!(daily_energy_kwh(150.0, &g), 250.0);
}

#[test]
fn zero_consumption_generator_is_guarded() {
    let g = GeneratorModel {
        id: "test",
        brand: "test",
        model: "zero",
        power_kw: 10.0,
        biogas_consumption_m3_per_h: 0.0,
        conversion_factor: 2.0,
        cost: 1.0,
        maintenance_cost_monthly: 0.0,
        min_operating_hours: 0.0,
        max_operating_hours: 24.0,
    };
    assert_eq!(g.hours_for(100.0), 0.0);
    assert!(!g.is_suitable_for(100.0));
    assert_eq!(operating_hours(100.0, &g), 0.0);
}

#[test]
fn generation_component_tiers() {
    assert_eq!(generation_components(25.0).management_panel, 25_000.0);
    assert_eq!(generation_components(50.0).installation, 20_000.0);
    assert_eq!(generation_components(50.1).installation, 30_000.0);
    assert_eq!(generation_components(180.0).machine_house, 65_000.0);
    assert_eq!(generation_components(260.0).protection_panel, 40_000.0);
    assert_eq!(generation_components(500.0).machine_house, 120_000.0);
}

#[test]
fn every_feedstock_profile_is_found_by_its_code() {
    assert!(!livestock_profiles().is_empty());
    for p in livestock_profiles() {
        let found = find_livestock(p.species, p.class).map(|f| (f.species, f.class));
        assert_eq!(found, Some((p.species, p.class)));
        assert!(p.process_efficiency > 0.0 && p.process_efficiency <= 1.0);
    }
    assert!(!substrate_profiles().is_empty());
    for s in substrate_profiles() {
        assert_eq!(find_substrate(s.kind).map(|f| f.kind), Some(s.kind));
    }
}
