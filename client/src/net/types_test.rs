use super::*;

fn sample_user() -> User {
    User {
        user_id: 7,
        username: "jdoe".to_owned(),
        email: "jdoe@example.com".to_owned(),
        first_name: None,
        last_name: None,
        address: None,
        city: None,
        state: None,
        zip_code: None,
        country: None,
        phone_number: None,
        role: "customer".to_owned(),
    }
}

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_api_payload_ignoring_timestamps() {
    let json = serde_json::json!({
        "user_id": 7,
        "username": "jdoe",
        "email": "jdoe@example.com",
        "first_name": "Jane",
        "last_name": null,
        "city": "Oslo",
        "role": "admin",
        "created_at": "2024-05-01T10:00:00",
        "updated_at": null
    });
    let user: User = serde_json::from_value(json).unwrap();
    assert_eq!(user.user_id, 7);
    assert_eq!(user.first_name.as_deref(), Some("Jane"));
    assert_eq!(user.last_name, None);
    assert_eq!(user.city.as_deref(), Some("Oslo"));
    assert_eq!(user.role, "admin");
}

#[test]
fn user_serialization_omits_absent_optionals() {
    let value = serde_json::to_value(sample_user()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "user_id": 7,
            "username": "jdoe",
            "email": "jdoe@example.com",
            "role": "customer"
        })
    );
}

#[test]
fn user_missing_role_is_rejected() {
    let json = serde_json::json!({ "user_id": 1, "username": "a", "email": "a@b.c" });
    assert!(serde_json::from_value::<User>(json).is_err());
}

#[test]
fn display_name_prefers_full_name() {
    let user = User {
        first_name: Some("Jane".to_owned()),
        last_name: Some("Doe".to_owned()),
        ..sample_user()
    };
    assert_eq!(user.display_name(), "Jane Doe");
}

#[test]
fn display_name_falls_back_to_username() {
    let user = User { first_name: Some("   ".to_owned()), ..sample_user() };
    assert_eq!(user.display_name(), "jdoe");
}

#[test]
fn address_lines_group_locality() {
    let user = User {
        address: Some("1 Main St".to_owned()),
        city: Some("Springfield".to_owned()),
        state: Some("IL".to_owned()),
        zip_code: Some("62701".to_owned()),
        country: Some("USA".to_owned()),
        ..sample_user()
    };
    assert_eq!(user.address_lines(), vec!["1 Main St", "Springfield, IL, 62701", "USA"]);
}

#[test]
fn address_lines_empty_without_address() {
    assert!(sample_user().address_lines().is_empty());
}

// =============================================================
// Product
// =============================================================

fn product_json(price: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "product_id": 3,
        "name": "Canvas Sneaker",
        "description": null,
        "price": price,
        "stock_quantity": 0,
        "image_url": "/img/sneaker.png",
        "category_id": 2,
        "category": { "category_id": 2, "name": "Shoes" },
        "created_at": "2024-05-01T10:00:00",
        "updated_at": "2024-05-01T10:00:00"
    })
}

#[test]
fn product_price_accepts_decimal_string() {
    let product: Product = serde_json::from_value(product_json(serde_json::json!("49.90"))).unwrap();
    assert_eq!(product.price, "49.90");
    assert_eq!(product.display_price(), "$49.90");
    assert_eq!(product.category.name, "Shoes");
    assert!(!product.in_stock());
}

#[test]
fn product_price_accepts_number() {
    let product: Product = serde_json::from_value(product_json(serde_json::json!(12.5))).unwrap();
    assert_eq!(product.price, "12.5");
}

#[test]
fn product_price_rejects_non_numeric_text() {
    assert!(serde_json::from_value::<Product>(product_json(serde_json::json!("free"))).is_err());
}

// =============================================================
// TokenResponse
// =============================================================

#[test]
fn token_response_carries_user() {
    let json = serde_json::json!({
        "access_token": "eyJhbGciOi",
        "token_type": "bearer",
        "user": serde_json::to_value(sample_user()).unwrap()
    });
    let resp: TokenResponse = serde_json::from_value(json).unwrap();
    assert_eq!(resp.access_token, "eyJhbGciOi");
    assert_eq!(resp.token_type, "bearer");
    assert_eq!(resp.user, sample_user());
}
