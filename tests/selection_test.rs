use pack_picker_rs::models::{PricePreference, Product, SelectionCriteria};
use pack_picker_rs::selector::select_products;
use pack_picker_rs::SelectError;

fn product(id: &str, name: &str, pack: &str, price: f64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        brand: Some("Fresho".to_string()),
        pack_size: pack.to_string(),
        pack_desc: None,
        price,
        mrp: None,
        available: true,
    }
}

fn onion_packs(packs: &[(&str, &str, f64)]) -> Vec<Product> {
    packs
        .iter()
        .map(|(id, pack, price)| product(id, "Onion", pack, *price))
        .collect()
}

fn total_grams(catalog: &[Product], recs: &[pack_picker_rs::Recommendation]) -> f64 {
    recs.iter()
        .map(|r| {
            let p = catalog.iter().find(|p| p.id == r.product_id).unwrap();
            let grams: f64 = p
                .pack_size
                .split_whitespace()
                .next()
                .unwrap()
                .parse()
                .unwrap();
            let grams = if p.pack_size.ends_with("kg") {
                grams * 1000.0
            } else {
                grams
            };
            grams * f64::from(r.count)
        })
        .sum()
}

#[test]
fn test_result_always_within_tolerance_band() {
    let catalog = onion_packs(&[("a", "100 g", 10.0), ("b", "200 g", 18.0), ("c", "500 g", 40.0)]);

    for quantity in ["220 g", "280 g", "600 g", "1 kg", "1.5 kg", "90 g"] {
        let criteria = SelectionCriteria::new("onion", quantity);
        let recs = select_products(&catalog, &criteria)
            .unwrap_or_else(|e| panic!("{quantity} should be feasible: {e}"));

        let total = total_grams(&catalog, &recs);
        let required = pack_picker_rs::quantity::parse_quantity(quantity)
            .unwrap()
            .base_amount();
        let ratio = total / required;
        assert!(
            (0.85..=1.15).contains(&ratio),
            "{quantity}: total {total} g is {ratio:.3} of required"
        );
    }
}

#[test]
fn test_220g_prefers_single_200g_pack() {
    let catalog = onion_packs(&[("a", "100 g", 10.0), ("b", "200 g", 18.0)]);
    let criteria = SelectionCriteria::new("onion", "220 g");
    let recs = select_products(&catalog, &criteria).unwrap();

    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].product_id, "b");
    assert_eq!(recs[0].count, 1);
}

#[test]
fn test_280g_takes_one_of_each() {
    let catalog = onion_packs(&[("a", "100 g", 10.0), ("b", "200 g", 18.0)]);
    let criteria = SelectionCriteria::new("onion", "280 g");
    let recs = select_products(&catalog, &criteria).unwrap();

    assert_eq!(recs.len(), 2);
    assert!(recs.iter().all(|r| r.count == 1));
    let total = total_grams(&catalog, &recs);
    assert_eq!(total, 300.0);
}

#[test]
fn test_600g_takes_100_plus_500() {
    let catalog = onion_packs(&[("a", "100 g", 10.0), ("b", "500 g", 40.0)]);
    let criteria = SelectionCriteria::new("onion", "600 g");
    let recs = select_products(&catalog, &criteria).unwrap();

    assert_eq!(recs.len(), 2);
    assert!(recs.iter().all(|r| r.count == 1));
    assert_eq!(total_grams(&catalog, &recs), 600.0);
}

#[test]
fn test_idempotent_across_calls() {
    let catalog = onion_packs(&[("a", "100 g", 10.0), ("b", "200 g", 18.0), ("c", "500 g", 40.0)]);
    let criteria = SelectionCriteria::new("onion", "700 g");

    let runs: Vec<_> = (0..5)
        .map(|_| select_products(&catalog, &criteria).unwrap())
        .collect();

    for run in &runs[1..] {
        assert_eq!(run.len(), runs[0].len());
        for (a, b) in run.iter().zip(&runs[0]) {
            assert_eq!(a.product_id, b.product_id);
            assert_eq!(a.count, b.count);
            assert_eq!(a.price, b.price);
        }
    }
}

#[test]
fn test_unavailable_products_never_selected() {
    let mut catalog = onion_packs(&[("a", "500 g", 25.0)]);
    catalog[0].available = false;
    catalog.push(product("b", "Onion", "250 g", 15.0));

    let criteria = SelectionCriteria::new("onion", "500 g");
    let recs = select_products(&catalog, &criteria).unwrap();

    assert!(recs.iter().all(|r| r.product_id != "a"));
    // Fulfilled with 2 x 250 g instead
    assert_eq!(recs[0].product_id, "b");
    assert_eq!(recs[0].count, 2);
}

#[test]
fn test_all_unavailable_is_no_candidate() {
    let mut catalog = onion_packs(&[("a", "500 g", 25.0)]);
    catalog[0].available = false;

    let criteria = SelectionCriteria::new("onion", "500 g");
    assert!(matches!(
        select_products(&catalog, &criteria),
        Err(SelectError::NoCandidate(_))
    ));
}

#[test]
fn test_variant_is_not_the_base_ingredient() {
    let catalog = vec![
        product("spring", "Spring Onion", "100 g", 15.0),
        product("plain", "Onion", "500 g", 25.0),
    ];

    let criteria = SelectionCriteria::new("onion", "500 g");
    let recs = select_products(&catalog, &criteria).unwrap();
    assert_eq!(recs[0].product_id, "plain");

    // And the variant request still works
    let criteria = SelectionCriteria::new("spring onion", "100 g");
    let recs = select_products(&catalog, &criteria).unwrap();
    assert_eq!(recs[0].product_id, "spring");
}

#[test]
fn test_decimal_quantity_accepted() {
    let catalog = onion_packs(&[("a", "500 g", 25.0), ("b", "1 kg", 45.0)]);
    let criteria = SelectionCriteria::new("onion", "1.5 kg");
    let recs = select_products(&catalog, &criteria).unwrap();

    assert_eq!(total_grams(&catalog, &recs), 1500.0);
}

#[test]
fn test_piece_default_unit() {
    let catalog = vec![product("eggs6", "Eggs", "6 pcs", 48.0)];
    // "6" with no unit defaults to piece
    let criteria = SelectionCriteria::new("eggs", "6");
    let recs = select_products(&catalog, &criteria).unwrap();

    assert_eq!(recs[0].product_id, "eggs6");
    assert_eq!(recs[0].count, 1);
}

#[test]
fn test_budget_vs_premium_pick_different_skus() {
    let mut economy = product("economy", "Onion", "500 g", 20.0);
    economy.brand = Some("Local".to_string());
    economy.mrp = Some(22.0);
    let mut premium = product("premium", "Onion", "500 g", 45.0);
    premium.brand = Some("Local".to_string());
    premium.mrp = Some(60.0);
    let catalog = vec![economy, premium];

    let budget = SelectionCriteria::new("onion", "500 g")
        .with_price_preference(PricePreference::Budget);
    let recs = select_products(&catalog, &budget).unwrap();
    assert_eq!(recs[0].product_id, "economy");

    let premium = SelectionCriteria::new("onion", "500 g")
        .with_price_preference(PricePreference::Premium);
    let recs = select_products(&catalog, &premium).unwrap();
    assert_eq!(recs[0].product_id, "premium");
}

#[test]
fn test_brand_preference_steers_family() {
    let mut fresho = product("f", "Onion", "500 g", 30.0);
    fresho.brand = Some("Fresho".to_string());
    let mut local = product("l", "Onion", "500 g", 20.0);
    local.brand = Some("Local".to_string());
    let catalog = vec![local, fresho];

    let criteria = SelectionCriteria::new("onion", "500 g").with_preference("Fresho");
    let recs = select_products(&catalog, &criteria).unwrap();
    assert_eq!(recs[0].product_id, "f");
}

#[test]
fn test_pack_description_bridges_piece_to_weight() {
    let mut cauliflower = product("c1", "Cauliflower", "1 pc", 35.0);
    cauliflower.pack_desc = Some("Approx 400 g per piece".to_string());
    let catalog = vec![cauliflower];

    let criteria = SelectionCriteria::new("cauliflower", "800 g");
    let recs = select_products(&catalog, &criteria).unwrap();

    assert_eq!(recs[0].count, 2);
}
