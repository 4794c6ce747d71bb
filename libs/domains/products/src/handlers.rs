//! HTTP handlers for the Products API

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::extractors::{
    AvailabilityBody, CreatePayload, ProductKey, ReplacePayload, ValidationErrorResponse,
};
use crate::models::{
    AvailabilityUpdatedResponse, CreateProduct, MessageResponse, Product, ProductCreatedResponse,
    ProductDeletedResponse, ProductListResponse, ProductResponse, ReplaceProduct,
    ServerErrorResponse,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

const TAG: &str = "products";

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        replace_product,
        change_availability,
        delete_product,
    ),
    components(schemas(
        Product,
        CreateProduct,
        ReplaceProduct,
        ProductListResponse,
        ProductResponse,
        ProductCreatedResponse,
        AvailabilityUpdatedResponse,
        ProductDeletedResponse,
        MessageResponse,
        ServerErrorResponse,
        ValidationErrorResponse,
    )),
    tags(
        (name = TAG, description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the product router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product)
                .put(replace_product)
                .patch(change_availability)
                .delete(delete_product),
        )
        .with_state(shared_service)
}

/// List every product
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All products, ordered by id", body = ProductListResponse),
        (status = 500, description = "Persistence failure", body = ServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<ProductListResponse>> {
    let data = service.list_products().await?;
    Ok(Json(ProductListResponse { data }))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = ProductCreatedResponse),
        (status = 400, description = "Failed input checks", body = ValidationErrorResponse),
        (status = 500, description = "Persistence failure", body = ServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    CreatePayload(input): CreatePayload,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProductCreatedResponse {
            message: "Product created successfully".to_owned(),
            product,
        }),
    ))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 400, description = "Malformed id", body = ValidationErrorResponse),
        (status = 404, description = "No product with this id", body = MessageResponse),
        (status = 500, description = "Persistence failure", body = ServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ProductKey(id): ProductKey,
) -> ProductResult<Json<ProductResponse>> {
    let data = service.get_product(id).await?;
    Ok(Json(ProductResponse { data }))
}

/// Replace every mutable field of a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    request_body = ReplaceProduct,
    responses(
        (status = 200, description = "Product replaced", body = ProductResponse),
        (status = 400, description = "Failed input checks", body = ValidationErrorResponse),
        (status = 404, description = "No product with this id", body = MessageResponse),
        (status = 500, description = "Persistence failure", body = ServerErrorResponse)
    )
)]
async fn replace_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ReplacePayload(id, input): ReplacePayload,
) -> ProductResult<Json<ProductResponse>> {
    let data = service.replace_product(id, input).await?;
    Ok(Json(ProductResponse { data }))
}

/// Update only the availability flag of a product
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Availability updated", body = AvailabilityUpdatedResponse),
        (status = 400, description = "Malformed id, or no availability value", body = MessageResponse),
        (status = 404, description = "No product with this id", body = MessageResponse),
        (status = 500, description = "Persistence failure", body = ServerErrorResponse)
    )
)]
async fn change_availability<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ProductKey(id): ProductKey,
    AvailabilityBody(availability): AvailabilityBody,
) -> ProductResult<Json<AvailabilityUpdatedResponse>> {
    let data = service.change_availability(id, availability).await?;

    Ok(Json(AvailabilityUpdatedResponse {
        message: "Product availability updated".to_owned(),
        data,
    }))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product deleted", body = ProductDeletedResponse),
        (status = 400, description = "Malformed id", body = ValidationErrorResponse),
        (status = 404, description = "No product with this id", body = MessageResponse),
        (status = 500, description = "Persistence failure", body = ServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ProductKey(id): ProductKey,
) -> ProductResult<Json<ProductDeletedResponse>> {
    service.delete_product(id).await?;

    Ok(Json(ProductDeletedResponse {
        data: "Product deleted".to_owned(),
    }))
}
