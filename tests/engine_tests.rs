//! Engine property tests over the fixed sample catalog.

use vitrine::prelude::*;
use vitrine::store::sample::sample_catalog;

fn products() -> Vec<Product> {
    sample_catalog().products
}

fn ids(items: &[Product]) -> Vec<&str> {
    items.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn unconstrained_criteria_return_all_items_in_input_order() {
    let items = products();
    let result = visible(&items, &FilterCriteria::default());
    assert_eq!(ids(&result), ids(&items));
}

#[test]
fn min_rating_bounds_every_result() {
    let items = products();
    for threshold in [0.0, 2.5, 5.0, 6.0] {
        let criteria = FilterCriteria {
            min_rating: Some(threshold),
            ..Default::default()
        };
        let result = visible(&items, &criteria);
        assert!(result.iter().all(|p| p.rating >= threshold || threshold <= 0.0));
        if threshold == 0.0 {
            assert_eq!(result.len(), items.len());
        }
        if threshold == 6.0 {
            assert!(result.is_empty());
        }
    }
}

#[test]
fn filtering_is_idempotent() {
    let items = products();
    let criteria = FilterCriteria {
        categories: vec!["1".to_string()],
        min_rating: Some(4.5),
        sort_by: Some(SortKey::Rating),
        sort_order: SortDirection::Desc,
        ..Default::default()
    };
    let once = visible(&items, &criteria);
    let twice = visible(&once, &criteria);
    assert_eq!(once, twice);
}

#[test]
fn price_asc_and_desc_are_exact_reverses() {
    let items = products();
    let asc = visible(
        &items,
        &FilterCriteria {
            sort_by: Some(SortKey::Price),
            sort_order: SortDirection::Asc,
            ..Default::default()
        },
    );
    let desc = visible(
        &items,
        &FilterCriteria {
            sort_by: Some(SortKey::Price),
            sort_order: SortDirection::Desc,
            ..Default::default()
        },
    );
    // The sample catalog has no price ties, so stable asc/desc are exact
    // mirror images
    let mut reversed = desc.clone();
    reversed.reverse();
    assert_eq!(ids(&asc), ids(&reversed));

    let mut prices: Vec<f64> = asc.iter().map(|p| p.price).collect();
    let mut sorted = prices.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    prices.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(prices, sorted);
}

#[test]
fn bestseller_tag_selects_exactly_the_tagged_items() {
    let items = products();
    let criteria = FilterCriteria {
        tags: vec!["bestseller".to_string()],
        ..Default::default()
    };
    let result = visible(&items, &criteria);
    assert_eq!(ids(&result), vec!["1", "2", "8", "9"]);
}

#[test]
fn in_stock_electronics_by_ascending_price() {
    let items = products();
    let criteria = FilterCriteria {
        categories: vec!["1".to_string()],
        in_stock_only: true,
        sort_by: Some(SortKey::Price),
        sort_order: SortDirection::Asc,
        ..Default::default()
    };
    let result = visible(&items, &criteria);

    assert!(!result.is_empty());
    for product in &result {
        assert_eq!(product.category_id, "1");
        assert!(product.in_stock);
    }
    for pair in result.windows(2) {
        assert!(pair[0].price <= pair[1].price);
    }
    // PS5 (1299) < Galaxy S24 (2599) < iPhone (2999) < MacBook (4599) < Canon (8599)
    assert_eq!(ids(&result), vec!["9", "2", "1", "5", "12"]);
}

#[test]
fn empty_price_band_yields_empty_result() {
    let items = products();
    let criteria = FilterCriteria {
        price_range: Some(PriceRange {
            min: 5000.0,
            max: 6000.0,
        }),
        ..Default::default()
    };
    assert!(visible(&items, &criteria).is_empty());
}

#[test]
fn tag_nobody_has_yields_empty_result() {
    let items = products();
    let criteria = FilterCriteria {
        tags: vec!["nonexistent-tag".to_string()],
        ..Default::default()
    };
    assert!(visible(&items, &criteria).is_empty());
}

#[test]
fn popularity_sort_orders_by_review_count() {
    let items = products();
    let criteria = FilterCriteria {
        sort_by: Some(SortKey::Popularity),
        sort_order: SortDirection::Desc,
        ..Default::default()
    };
    let result = visible(&items, &criteria);
    // Harry Potter collection has the most reviews (445)
    assert_eq!(result[0].id, "8");
    for pair in result.windows(2) {
        assert!(pair[0].review_count >= pair[1].review_count);
    }
}

#[test]
fn text_query_reaches_descriptions() {
    let items = products();
    let criteria = FilterCriteria {
        search_query: Some("android".to_string()),
        ..Default::default()
    };
    // "Android" appears in the Galaxy S24 description
    let result = visible(&items, &criteria);
    assert_eq!(ids(&result), vec!["2"]);
}
