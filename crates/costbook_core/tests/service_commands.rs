use costbook_core::{RawCostConfig, RecipeService, ServiceError, Store, UsageInput};

const EPS: f64 = 1e-9;

fn seeded_service(dir: &tempfile::TempDir) -> RecipeService {
    let mut service = RecipeService::new(Store::open(dir.path()).unwrap());
    service
        .add_ingredient("Flour", "1000", "grams", "40")
        .unwrap();
    service
        .add_product(
            "Bread",
            "500",
            "grams",
            &[UsageInput {
                name: "Flour".to_string(),
                quantity: "300".to_string(),
                unit: "grams".to_string(),
            }],
        )
        .unwrap();
    service
}

#[test]
fn add_ingredient_parses_raw_strings_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let service = seeded_service(&dir);

    let flour = service.get_ingredient("Flour").unwrap();
    assert_eq!(flour.quantity, 1000.0);
    assert_eq!(flour.cost, 40.0);

    let reloaded = Store::open(dir.path()).unwrap();
    assert_eq!(reloaded.list_ingredient_names(), ["Flour"]);
}

#[test]
fn add_ingredient_reports_the_offending_field() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = RecipeService::new(Store::open(dir.path()).unwrap());

    let err = service
        .add_ingredient("Flour", "a lot", "grams", "40")
        .unwrap_err();
    match err {
        ServiceError::Input(input) => assert_eq!(input.field, "quantity"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(service.list_ingredient_names().is_empty());
}

#[test]
fn add_product_requires_at_least_one_usage_entry() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = seeded_service(&dir);

    let err = service.add_product("Toast", "200", "grams", &[]).unwrap_err();
    match err {
        ServiceError::Input(input) => assert_eq!(input.field, "ingredients"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn update_ingredient_cost_signals_absent_names_without_failing() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = seeded_service(&dir);

    assert!(service.update_ingredient_cost("Flour", "45.5").unwrap());
    assert!(!service.update_ingredient_cost("Sugar", "10").unwrap());
    assert_eq!(service.get_ingredient("Flour").unwrap().cost, 45.5);
}

#[test]
fn update_ingredient_cost_rejects_unparsable_cost() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = seeded_service(&dir);

    let err = service.update_ingredient_cost("Flour", "cheap").unwrap_err();
    match err {
        ServiceError::Input(input) => assert_eq!(input.field, "new_cost"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(service.get_ingredient("Flour").unwrap().cost, 40.0);
}

#[test]
fn scale_product_parses_raw_target_and_flags_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let service = seeded_service(&dir);

    let scaled = service.scale_product("Bread", "1000", "pieces").unwrap();
    assert!(scaled.unit_mismatch);
    assert!((scaled.ingredients[0].quantity - 600.0).abs() < EPS);
}

#[test]
fn scale_product_reports_unknown_products() {
    let dir = tempfile::tempdir().unwrap();
    let service = seeded_service(&dir);

    let err = service.scale_product("Cake", "1000", "grams").unwrap_err();
    assert!(matches!(err, ServiceError::ProductNotFound(ref name) if name == "Cake"));
}

#[test]
fn save_scaled_product_defaults_the_derived_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = seeded_service(&dir);

    service
        .save_scaled_product("Bread", "", "1000", "grams")
        .unwrap();

    let derived = service.get_product("Bread_scaled").unwrap();
    assert_eq!(derived.quantity, 1000.0);
    assert!((derived.ingredients[0].quantity - 600.0).abs() < EPS);

    let reloaded = Store::open(dir.path()).unwrap();
    assert_eq!(reloaded.list_product_names(), ["Bread", "Bread_scaled"]);
}

#[test]
fn save_scaled_product_honours_an_explicit_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = seeded_service(&dir);

    service
        .save_scaled_product("Bread", " Party Bread ", "2500", "grams")
        .unwrap();

    let derived = service.get_product("Party Bread").unwrap();
    assert!((derived.ingredients[0].quantity - 1500.0).abs() < EPS);
}

#[test]
fn price_product_runs_the_worked_example_from_raw_strings() {
    let dir = tempfile::tempdir().unwrap();
    let service = seeded_service(&dir);
    let raw = RawCostConfig {
        wastage_pct: "10".to_string(),
        utilities: "5".to_string(),
        packaging: "2".to_string(),
        shipping: "3".to_string(),
        taxes_pct: "5".to_string(),
        labour: "10".to_string(),
        profit_pct: "20".to_string(),
    };

    let breakdown = service.price_product("Bread", &raw).unwrap();
    assert!((breakdown.base_cost - 12.0).abs() < EPS);
    assert!((breakdown.final_price - 40.56).abs() < EPS);
}

#[test]
fn price_product_reports_unknown_products() {
    let dir = tempfile::tempdir().unwrap();
    let service = seeded_service(&dir);

    let err = service
        .price_product("Cake", &RawCostConfig::default())
        .unwrap_err();
    assert!(matches!(err, ServiceError::ProductNotFound(_)));
}

#[test]
fn listings_stay_sorted_for_ui_pickers() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = seeded_service(&dir);
    service
        .add_ingredient("Butter", "250", "grams", "120")
        .unwrap();
    service
        .add_ingredient("Yeast", "10", "grams", "15")
        .unwrap();

    assert_eq!(
        service.list_ingredient_names(),
        ["Butter", "Flour", "Yeast"]
    );
    assert_eq!(service.list_product_names(), ["Bread"]);
}
