#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn shop_now_message_matches_storefront_copy() {
    assert_eq!(SHOP_NOW_MESSAGE, "Shop Now button clicked!");
}

#[test]
fn show_is_callable_without_browser() {
    show("hello");
    shop_now_clicked();
}
