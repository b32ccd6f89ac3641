//! Get Handler

use std::marker::PhantomData;

use salvo::{async_trait, prelude::*};

use crate::{
    extensions::*,
    resources::{Resource, errors::into_status_error},
};

use super::{path_id, render_error};

/// `GET /{prefix}/{id}`
pub(crate) struct Get<T>(PhantomData<fn() -> T>);

impl<T> Get<T> {
    pub(crate) fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Resource> Get<T> {
    async fn respond(req: &Request, depot: &Depot) -> Result<Json<T::Response>, StatusError> {
        let id = path_id(req)?;
        let state = depot.state_or_500()?;

        let entity = T::service(&state.app)
            .get(id)
            .await
            .map_err(into_status_error)?;

        Ok(Json(T::Response::from(entity)))
    }
}

#[async_trait]
impl<T: Resource> Handler for Get<T> {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        _ctrl: &mut FlowCtrl,
    ) {
        match Self::respond(req, depot).await {
            Ok(body) => res.render(body),
            Err(error) => render_error(res, error),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use catalog_app::domain::{
        EntitiesServiceError, MockEntitiesService, categories::Category, products::Product,
    };

    use crate::{
        resources::{categories::CategoryResponse, products::ProductResponse, resource},
        test_helpers::{categories_service, make_category, make_product, products_service},
    };

    use super::*;

    fn make_service(categories: MockEntitiesService<Category>) -> Service {
        categories_service(categories, resource::<Category>("/categories"))
    }

    #[tokio::test]
    async fn test_get_category_returns_category() -> TestResult {
        let mut categories = MockEntitiesService::<Category>::new();

        categories
            .expect_get()
            .once()
            .withf(|id| *id == 1)
            .return_once(|_| Ok(make_category(1, "Books", BTreeSet::new())));

        categories.expect_list().never();
        categories.expect_create().never();
        categories.expect_update().never();
        categories.expect_delete().never();

        let mut res = TestClient::get("http://example.com/categories/1")
            .send(&make_service(categories))
            .await;

        let body: CategoryResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body,
            CategoryResponse {
                id: 1,
                name: "Books".to_string(),
                products: Vec::new(),
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_get_product_includes_category_ids() -> TestResult {
        let mut products = MockEntitiesService::<Product>::new();

        products
            .expect_get()
            .once()
            .withf(|id| *id == 7)
            .return_once(|_| Ok(make_product(7, "Go Guide", BTreeSet::from([2, 1]))));

        let mut res = TestClient::get("http://example.com/products/7")
            .send(&products_service(products, resource::<Product>("/products")))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, 7);
        assert_eq!(body.categories, vec![1, 2]);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_category_not_found_returns_404() -> TestResult {
        let mut categories = MockEntitiesService::<Category>::new();

        categories
            .expect_get()
            .once()
            .withf(|id| *id == 99)
            .return_once(|_| Err(EntitiesServiceError::NotFound));

        let mut res = TestClient::get("http://example.com/categories/99")
            .send(&make_service(categories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert!(
            res.take_string().await?.is_empty(),
            "404 carries no body"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_get_non_numeric_id_returns_404() -> TestResult {
        let mut categories = MockEntitiesService::<Category>::new();

        categories.expect_get().never();

        let res = TestClient::get("http://example.com/categories/books")
            .send(&make_service(categories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
