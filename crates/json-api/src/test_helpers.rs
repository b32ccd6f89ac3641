//! Test helpers.

use std::{collections::BTreeSet, sync::Arc};

use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use catalog_app::{
    context::AppContext,
    domain::{
        MockEntitiesService, categories::Category, entity::EntityId, products::Product,
    },
};

use crate::{resources::catcher, state::State};

pub(crate) fn make_category(id: EntityId, name: &str, products: BTreeSet<EntityId>) -> Category {
    Category {
        id,
        name: name.to_string(),
        products,
    }
}

pub(crate) fn make_product(id: EntityId, title: &str, categories: BTreeSet<EntityId>) -> Product {
    Product {
        id,
        title: title.to_string(),
        price: Decimal::new(1000, 2),
        discounted_price: Decimal::new(800, 2),
        description: "...".to_string(),
        image: "...".to_string(),
        categories,
    }
}

pub(crate) fn strict_categories_mock() -> MockEntitiesService<Category> {
    let mut categories = MockEntitiesService::new();

    categories.expect_list().never();
    categories.expect_get().never();
    categories.expect_create().never();
    categories.expect_update().never();
    categories.expect_delete().never();

    categories
}

pub(crate) fn strict_products_mock() -> MockEntitiesService<Product> {
    let mut products = MockEntitiesService::new();

    products.expect_list().never();
    products.expect_get().never();
    products.expect_create().never();
    products.expect_update().never();
    products.expect_delete().never();

    products
}

pub(crate) fn state_with(
    categories: MockEntitiesService<Category>,
    products: MockEntitiesService<Product>,
) -> Arc<State> {
    State::from_app_context(AppContext::new(Arc::new(categories), Arc::new(products)))
}

pub(crate) fn categories_service(categories: MockEntitiesService<Category>, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(categories, strict_products_mock())))
            .push(route),
    )
    .catcher(catcher())
}

pub(crate) fn products_service(products: MockEntitiesService<Product>, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(strict_categories_mock(), products)))
            .push(route),
    )
    .catcher(catcher())
}
