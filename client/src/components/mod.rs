//! Reusable view components shared by the pages.

pub mod nav_bar;
pub mod product_card;
