use storefront_api::{
    config::parse_flag,
    dto::cart::{CartItemDto, CartList, line_total},
    models::ProductItem,
    routes::params::{MAX_PER_PAGE, Pagination, ProductQuery, ProductSortBy, SortOrder},
};

#[test]
fn pagination_defaults() {
    let (page, per_page, offset) = Pagination::default().normalize();
    assert_eq!((page, per_page, offset), (1, 20, 0));
}

#[test]
fn pagination_clamps_bad_input() {
    assert_eq!(Pagination::new(0, 0).normalize(), (1, 1, 0));
    assert_eq!(Pagination::new(-5, 1000).normalize(), (1, MAX_PER_PAGE, 0));
    assert_eq!(Pagination::new(3, 10).normalize(), (3, 10, 20));
}

#[test]
fn pagination_offset_does_not_overflow() {
    let (_, per_page, offset) = Pagination::new(i64::MAX, MAX_PER_PAGE).normalize();
    assert_eq!(per_page, MAX_PER_PAGE);
    assert_eq!(offset, i64::MAX);
}

#[test]
fn product_query_parses_from_query_string() {
    let query: ProductQuery = parse_query(
        "page=2&per_page=5&category_id=3&is_aksiya=true&sort_by=price&sort_order=asc",
    );
    assert_eq!(query.pagination().normalize(), (2, 5, 5));
    assert_eq!(query.category_id, Some(3));
    assert_eq!(query.is_aksiya, Some(true));
    assert_eq!(query.sort_by, Some(ProductSortBy::Price));
    assert_eq!(query.sort_order, Some(SortOrder::Asc));
}

fn parse_query(raw: &str) -> ProductQuery {
    let uri: axum::http::Uri = format!("/api/products?{raw}").parse().unwrap();
    axum::extract::Query::<ProductQuery>::try_from_uri(&uri).unwrap().0
}

#[test]
fn flags() {
    for on in ["1", "true", "TRUE", " yes ", "on"] {
        assert!(parse_flag(on), "{on}");
    }
    for off in ["0", "false", "no", "off", ""] {
        assert!(!parse_flag(off), "{off}");
    }
}

fn cart_line(quantity: i32, price: i64) -> CartItemDto {
    CartItemDto {
        id: 1,
        quantity,
        item: ProductItem {
            id: 1,
            product_id: 1,
            color_id: 1,
            price,
            image: None,
            created_at: chrono::Utc::now(),
        },
        product_name: "Play Station 5".to_string(),
        line_total: line_total(price, quantity),
    }
}

#[test]
fn cart_totals() {
    let cart = CartList::from_lines(vec![cart_line(2, 599), cart_line(1, 2499)]);
    assert_eq!(cart.total_quantity, 3);
    assert_eq!(cart.total_price, 2 * 599 + 2499);

    let empty = CartList::from_lines(Vec::new());
    assert_eq!((empty.total_quantity, empty.total_price), (0, 0));
}

#[test]
fn cart_total_saturates_instead_of_overflowing() {
    let big = i64::MAX / 2 + 1;
    let cart = CartList::from_lines(vec![cart_line(1, big), cart_line(1, big)]);
    assert_eq!(cart.total_price, i64::MAX);
    assert_eq!(cart.total_quantity, 2);
}

#[test]
fn line_total_saturates() {
    assert_eq!(line_total(i64::MAX, 2), i64::MAX);
}
