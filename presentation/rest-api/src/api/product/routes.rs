use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::product::model::{
    BulkCreateProductsParams, BulkUpdateProductsParams, DeleteProductParams, GetProductParams,
    GetProductsParams, PartialUpdateProductParams, Product,
};
use business::domain::product::use_cases::bulk_create::BulkCreateProductsUseCase;
use business::domain::product::use_cases::bulk_update::BulkUpdateProductsUseCase;
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::delete::DeleteProductUseCase;
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::GetProductByIdUseCase;
use business::domain::product::use_cases::partial_update::PartialUpdateProductUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    BulkUpdateProductRequest, CreateProductRequest, DeletedProductResponse,
    PartialUpdateProductRequest, ProductResponse,
};
use crate::api::product::error_mapper::invalid_id;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    create_use_case: Arc<dyn CreateProductUseCase>,
    partial_update_use_case: Arc<dyn PartialUpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    bulk_create_use_case: Arc<dyn BulkCreateProductsUseCase>,
    bulk_update_use_case: Arc<dyn BulkUpdateProductsUseCase>,
}

impl ProductApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        create_use_case: Arc<dyn CreateProductUseCase>,
        partial_update_use_case: Arc<dyn PartialUpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        bulk_create_use_case: Arc<dyn BulkCreateProductsUseCase>,
        bulk_update_use_case: Arc<dyn BulkUpdateProductsUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            create_use_case,
            partial_update_use_case,
            delete_use_case,
            bulk_create_use_case,
            bulk_update_use_case,
        }
    }
}

fn to_responses(products: Vec<Product>) -> Vec<ProductResponse> {
    products.into_iter().map(ProductResponse::from).collect()
}

/// Product catalogue API
///
/// Listing, lookup, creation, partial update, deletion and batch writes.
#[OpenApi]
impl ProductApi {
    /// List products
    ///
    /// `limit` defaults to 50 and is capped at 50; unparsable values fall back
    /// to the default. `name` and `title` filter by exact match.
    #[oai(path = "/api/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(
        &self,
        limit: Query<Option<String>>,
        offset: Query<Option<String>>,
        name: Query<Option<String>>,
        title: Query<Option<String>>,
    ) -> GetAllProductsResponse {
        let params = GetProductsParams::from_query(
            limit.0.as_deref(),
            offset.0.as_deref(),
            name.0,
            title.0,
        );

        match self.get_all_use_case.execute(params).await {
            Ok(products) => GetAllProductsResponse::Ok(Json(to_responses(products))),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/api/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return GetProductByIdResponse::BadRequest(invalid_id());
        };

        match self.get_by_id_use_case.execute(GetProductParams { id }).await {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a product
    #[oai(path = "/api/product", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        match self.create_use_case.execute(body.0.into()).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Create several products in one statement
    ///
    /// At most 1000 rows per request. Row order in the response is not
    /// guaranteed; match rows by name and title.
    #[oai(path = "/api/products", method = "post", tag = "ApiTags::Products")]
    async fn bulk_create_products(
        &self,
        body: Json<Vec<CreateProductRequest>>,
    ) -> BulkCreateProductsResponse {
        let params = BulkCreateProductsParams {
            items: body.0.into_iter().map(Into::into).collect(),
        };

        match self.bulk_create_use_case.execute(params).await {
            Ok(products) => BulkCreateProductsResponse::Created(Json(to_responses(products))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => BulkCreateProductsResponse::BadRequest(json),
                    _ => BulkCreateProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Update name and title of several products in one statement
    ///
    /// At most 1000 rows per request. Ids that do not exist are skipped; only
    /// the updated rows are returned.
    #[oai(path = "/api/products", method = "patch", tag = "ApiTags::Products")]
    async fn bulk_update_products(
        &self,
        body: Json<Vec<BulkUpdateProductRequest>>,
    ) -> BulkUpdateProductsResponse {
        let params = BulkUpdateProductsParams {
            items: body.0.into_iter().map(Into::into).collect(),
        };

        match self.bulk_update_use_case.execute(params).await {
            Ok(products) => BulkUpdateProductsResponse::Ok(Json(to_responses(products))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => BulkUpdateProductsResponse::BadRequest(json),
                    _ => BulkUpdateProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Partially update a product
    ///
    /// Only the fields present in the body are written.
    #[oai(path = "/api/products/:id", method = "patch", tag = "ApiTags::Products")]
    async fn partial_update_product(
        &self,
        id: Path<String>,
        body: Json<PartialUpdateProductRequest>,
    ) -> PartialUpdateProductResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return PartialUpdateProductResponse::BadRequest(invalid_id());
        };

        let params = PartialUpdateProductParams {
            id,
            name: body.0.name,
            title: body.0.title,
        };

        match self.partial_update_use_case.execute(params).await {
            Ok(product) => PartialUpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => PartialUpdateProductResponse::BadRequest(json),
                    404 => PartialUpdateProductResponse::NotFound(json),
                    _ => PartialUpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    #[oai(path = "/api/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return DeleteProductResponse::BadRequest(invalid_id());
        };

        match self.delete_use_case.execute(DeleteProductParams { id }).await {
            Ok(id) => DeleteProductResponse::Ok(Json(DeletedProductResponse { id })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum BulkCreateProductsResponse {
    #[oai(status = 201)]
    Created(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum BulkUpdateProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum PartialUpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<DeletedProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
