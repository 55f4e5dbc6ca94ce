use costbook_core::{scale, Product};

const EPS: f64 = 1e-9;

fn bread() -> Product {
    let mut bread = Product::new("Bread", 500.0, "grams");
    bread.add_ingredient("Flour", 300.0, "grams");
    bread
}

fn layered_cake() -> Product {
    let mut cake = Product::new("Cake", 1000.0, "grams");
    cake.add_ingredient("Flour", 400.0, "grams");
    cake.add_ingredient("Sugar", 200.0, "grams");
    cake.add_ingredient("Eggs", 4.0, "pieces");
    cake
}

#[test]
fn doubling_bread_doubles_the_flour() {
    let scaled = scale(&bread(), 1000.0, "grams").unwrap();

    assert!(!scaled.unit_mismatch);
    assert_eq!(scaled.ingredients.len(), 1);
    assert_eq!(scaled.ingredients[0].name, "Flour");
    assert!((scaled.ingredients[0].quantity - 600.0).abs() < EPS);
    assert_eq!(scaled.ingredients[0].unit, "grams");
}

#[test]
fn every_entry_scales_by_the_same_factor_in_order() {
    let cake = layered_cake();
    let scaled = scale(&cake, 1500.0, "grams").unwrap();

    assert_eq!(scaled.ingredients.len(), cake.ingredients.len());
    for (original, result) in cake.ingredients.iter().zip(&scaled.ingredients) {
        assert_eq!(result.name, original.name);
        assert_eq!(result.unit, original.unit);
        assert!((result.quantity - original.quantity * 1.5).abs() < EPS);
    }
}

#[test]
fn scaling_to_the_original_size_is_the_identity() {
    let cake = layered_cake();
    let scaled = scale(&cake, cake.quantity, &cake.unit).unwrap();

    assert!(!scaled.unit_mismatch);
    for (original, result) in cake.ingredients.iter().zip(&scaled.ingredients) {
        assert!((result.quantity - original.quantity).abs() < EPS);
    }
}

#[test]
fn unit_mismatch_is_flagged_but_scaling_proceeds() {
    let scaled = scale(&bread(), 1000.0, "milliliters").unwrap();

    assert!(scaled.unit_mismatch);
    assert!((scaled.ingredients[0].quantity - 600.0).abs() < EPS);
}

#[test]
fn unit_comparison_is_case_sensitive() {
    let scaled = scale(&bread(), 500.0, "Grams").unwrap();
    assert!(scaled.unit_mismatch);
}

#[test]
fn scale_does_not_mutate_the_input_product() {
    let cake = layered_cake();
    let before = cake.clone();
    scale(&cake, 250.0, "grams").unwrap();
    assert_eq!(cake, before);
}

#[test]
fn rejects_non_positive_and_non_finite_targets() {
    for target in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let err = scale(&bread(), target, "grams").unwrap_err();
        assert_eq!(err.field, "target_quantity");
    }
}

#[test]
fn rejects_zero_batch_size_instead_of_dividing_by_zero() {
    let mut broken = bread();
    broken.quantity = 0.0;

    let err = scale(&broken, 1000.0, "grams").unwrap_err();
    assert_eq!(err.field, "product_quantity");
}

#[test]
fn into_product_carries_the_target_batch_and_entries() {
    let scaled = scale(&bread(), 1000.0, "grams").unwrap();
    let derived = scaled.into_product("Bread_scaled");

    assert_eq!(derived.name, "Bread_scaled");
    assert_eq!(derived.quantity, 1000.0);
    assert_eq!(derived.unit, "grams");
    assert!((derived.ingredients[0].quantity - 600.0).abs() < EPS);
    assert!(derived.validate().is_ok());
}
