#[cfg(test)]
#[path = "shop_test.rs"]
mod shop_test;

use crate::net::types::{Product, UserData};

/// Wish list and cart contents. Only their sizes matter to the header.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShopState {
    pub wish_list: Vec<Product>,
    pub cart: Vec<Product>,
}

impl ShopState {
    #[must_use]
    pub fn wish_count(&self) -> usize {
        self.wish_list.len()
    }

    #[must_use]
    pub fn cart_count(&self) -> usize {
        self.cart.len()
    }
}

impl From<UserData> for ShopState {
    fn from(data: UserData) -> Self {
        Self { wish_list: data.wishlist, cart: data.cart }
    }
}
