//! Delete Handler

use std::marker::PhantomData;

use salvo::{async_trait, prelude::*};

use crate::{
    extensions::*,
    resources::{Resource, errors::into_status_error},
};

use super::{path_id, render_error};

/// `DELETE /{prefix}/{id}`
pub(crate) struct Delete<T>(PhantomData<fn() -> T>);

impl<T> Delete<T> {
    pub(crate) fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Resource> Delete<T> {
    async fn respond(req: &Request, depot: &Depot) -> Result<(), StatusError> {
        let id = path_id(req)?;
        let state = depot.state_or_500()?;

        T::service(&state.app)
            .delete(id)
            .await
            .map_err(into_status_error)
    }
}

#[async_trait]
impl<T: Resource> Handler for Delete<T> {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        _ctrl: &mut FlowCtrl,
    ) {
        match Self::respond(req, depot).await {
            Ok(()) => {
                res.status_code(StatusCode::NO_CONTENT);
            }
            Err(error) => render_error(res, error),
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use catalog_app::domain::{
        EntitiesServiceError, MockEntitiesService, categories::Category, products::Product,
    };

    use crate::{
        resources::resource,
        test_helpers::{categories_service, products_service},
    };

    use super::*;

    #[tokio::test]
    async fn test_delete_product_returns_204() -> TestResult {
        let mut products = MockEntitiesService::<Product>::new();

        products
            .expect_delete()
            .once()
            .withf(|id| *id == 3)
            .return_once(|_| Ok(()));

        products.expect_list().never();
        products.expect_get().never();
        products.expect_create().never();
        products.expect_update().never();

        let res = TestClient::delete("http://example.com/products/3")
            .send(&products_service(products, resource::<Product>("/products")))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_category_not_found_returns_404() -> TestResult {
        let mut categories = MockEntitiesService::<Category>::new();

        categories
            .expect_delete()
            .once()
            .withf(|id| *id == 12)
            .return_once(|_| Err(EntitiesServiceError::NotFound));

        let mut res = TestClient::delete("http://example.com/categories/12")
            .send(&categories_service(
                categories,
                resource::<Category>("/categories"),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert!(
            res.take_string().await?.is_empty(),
            "404 carries no body"
        );

        Ok(())
    }
}
