//! Built-in sample catalog
//!
//! A fixed 12-product, 6-category catalog used by the demo application and
//! the test suite. Kept deliberately small and diverse: every facet
//! dimension has multiple values, one product is out of stock, and prices
//! span three orders of magnitude.

use crate::core::product::{CatalogSnapshot, Category, Product};
use chrono::{DateTime, TimeZone, Utc};

fn category(id: &str, name: &str, slug: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    original_price: Option<f64>,
    category_id: &str,
    brand: &str,
    rating: f64,
    review_count: u32,
    stock_quantity: u32,
    image_url: &str,
    tags: &[&str],
    features: &[&str],
    created_at: DateTime<Utc>,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        original_price,
        category_id: category_id.to_string(),
        brand: brand.to_string(),
        rating,
        review_count,
        in_stock: stock_quantity > 0,
        stock_quantity,
        image_url: image_url.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        features: features.iter().map(|f| f.to_string()).collect(),
        created_at,
        updated_at: Utc::now(),
    }
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    // Static in-range dates
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// The fixed sample catalog: 6 categories and 12 products.
pub fn sample_catalog() -> CatalogSnapshot {
    let categories = vec![
        category("1", "ელექტრონიკა", "electronics"),
        category("2", "ტანსაცმელი", "clothing"),
        category("3", "წიგნები", "books"),
        category("4", "სპორტი", "sports"),
        category("5", "სახლი და ბაღი", "home-garden"),
        category("6", "სილამაზე", "beauty"),
    ];

    let products = vec![
        product(
            "1",
            "iPhone 15 Pro",
            "უახლესი Apple-ის სმარტფონი პროფესიონალური კამერით",
            2999.0,
            Some(3299.0),
            "1",
            "Apple",
            4.8,
            245,
            15,
            "https://images.unsplash.com/photo-1592750475338-74b7b21085ab?w=300&h=300&fit=crop",
            &["premium", "new", "bestseller"],
            &["A17 Pro chip", "48MP Camera", "5G"],
            date(2024, 1, 15),
        ),
        product(
            "2",
            "Samsung Galaxy S24",
            "ინოვაციური Android სმარტფონი AI ფუნქციებით",
            2599.0,
            None,
            "1",
            "Samsung",
            4.6,
            189,
            8,
            "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=300&h=300&fit=crop",
            &["android", "ai", "bestseller"],
            &["AI Photography", "120Hz Display", "S Pen"],
            date(2024, 1, 20),
        ),
        product(
            "3",
            "Nike Air Max 270",
            "კომფორტული სპორტული ფეხსაცმელი ყოველდღიური ტარებისთვის",
            450.0,
            Some(520.0),
            "4",
            "Nike",
            4.4,
            156,
            25,
            "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=300&h=300&fit=crop",
            &["sport", "comfortable", "lifestyle"],
            &["Air Cushioning", "Breathable", "Lightweight"],
            date(2024, 1, 10),
        ),
        product(
            "4",
            "Adidas Ultraboost 22",
            "პრემიუმ სირბილის ფეხსაცმელი ენერგიის დაბრუნებით",
            380.0,
            None,
            "4",
            "Adidas",
            4.7,
            203,
            0,
            "https://images.unsplash.com/photo-1549298916-b41d501d3772?w=300&h=300&fit=crop",
            &["sport", "running", "premium"],
            &["Boost Technology", "Primeknit Upper", "Energy Return"],
            date(2024, 1, 5),
        ),
        product(
            "5",
            "MacBook Pro 14\"",
            "პროფესიონალური ლეპტოპი M3 ჩიპით კრეატიებისთვის",
            4599.0,
            None,
            "1",
            "Apple",
            4.9,
            89,
            5,
            "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=300&h=300&fit=crop",
            &["premium", "professional", "new"],
            &["M3 Chip", "Liquid Retina XDR", "22-hour battery"],
            date(2024, 1, 25),
        ),
        product(
            "6",
            "Zara ზამთრის ქურთუკი",
            "ელეგანტური ზამთრის ქურთუკი ქალებისთვის",
            180.0,
            Some(220.0),
            "2",
            "Zara",
            4.2,
            78,
            12,
            "https://images.unsplash.com/photo-1539533018447-63fcce2678e3?w=300&h=300&fit=crop",
            &["fashion", "winter", "elegant"],
            &["Water Resistant", "Warm Lining", "Stylish Cut"],
            date(2023, 12, 20),
        ),
        product(
            "7",
            "H&M მაისური",
            "კომფორტული ყოველდღიური მაისური სხვადასხვა ფერებში",
            25.0,
            None,
            "2",
            "H&M",
            4.0,
            124,
            50,
            "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=300&h=300&fit=crop",
            &["casual", "basic", "affordable"],
            &["100% Cotton", "Machine Washable", "Various Colors"],
            date(2024, 1, 1),
        ),
        product(
            "8",
            "ჰარი პოტერი - სრული კოლექცია",
            "J.K. Rowling-ის ჰარი პოტერის სრული კოლექცია ქართულად",
            120.0,
            None,
            "3",
            "Scholastic",
            4.9,
            445,
            20,
            "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=300&h=300&fit=crop",
            &["books", "fantasy", "bestseller", "collection"],
            &["Georgian Translation", "Hardcover", "Complete Series"],
            date(2023, 11, 15),
        ),
        product(
            "9",
            "PlayStation 5",
            "ახალი თაობის გეიმინგ კონსოლი 4K გრაფიკით",
            1299.0,
            None,
            "1",
            "Sony",
            4.8,
            312,
            3,
            "https://images.unsplash.com/photo-1606813907291-d86efa9b94db?w=300&h=300&fit=crop",
            &["gaming", "new", "premium", "bestseller"],
            &["4K Gaming", "Ray Tracing", "SSD Storage"],
            date(2024, 1, 30),
        ),
        product(
            "10",
            "IKEA სამუშაო მაგიდა",
            "თანამედროვე დიზაინის სამუშაო მაგიდა სახლისთვის",
            150.0,
            None,
            "5",
            "IKEA",
            4.3,
            67,
            8,
            "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=300&h=300&fit=crop",
            &["furniture", "modern", "home-office"],
            &["Adjustable Height", "Cable Management", "Easy Assembly"],
            date(2023, 12, 10),
        ),
        product(
            "11",
            "L'Oréal სახის კრემი",
            "ანტი-ეიჯინგ სახის კრემი ყველა ტიპის კანისთვის",
            45.0,
            Some(55.0),
            "6",
            "L'Oréal",
            4.1,
            198,
            30,
            "https://images.unsplash.com/photo-1556228578-8c89e6adf883?w=300&h=300&fit=crop",
            &["beauty", "skincare", "anti-aging"],
            &["Anti-Aging", "Moisturizing", "SPF Protection"],
            date(2023, 12, 5),
        ),
        product(
            "12",
            "Canon EOS R5",
            "პროფესიონალური უკადრო კამერა 45MP რეზოლუციით",
            8599.0,
            None,
            "1",
            "Canon",
            4.7,
            156,
            2,
            "https://images.unsplash.com/photo-1502920917128-1aa500764cbd?w=300&h=300&fit=crop",
            &["professional", "photography", "premium"],
            &["45MP Sensor", "8K Video", "In-Body Stabilization"],
            date(2024, 2, 1),
        ),
    ];

    CatalogSnapshot {
        categories,
        products,
    }
}
