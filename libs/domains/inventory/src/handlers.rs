use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{IdPath, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, LowStockQuery, NameQuery, Product, StockUpdate};
use crate::repository::ProductRepository;
use crate::service::InventoryService;

/// OpenAPI documentation for the inventory API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
        search_by_category,
        search_by_name,
        low_stock_products,
        update_stock,
        list_categories,
    ),
    components(schemas(Product, CreateProduct, StockUpdate)),
    tags(
        (name = "Products", description = "Inventory management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: InventoryService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/categories", get(list_categories))
        .route("/category/{category}", get(search_by_category))
        .route("/search", get(search_by_name))
        .route("/low-stock", get(low_stock_products))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/{id}/stock", axum::routing::put(update_stock))
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 500, description = "Storage failure")
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<InventoryService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, description = "Validation failure"),
        (status = 500, description = "Storage failure")
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<InventoryService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.add_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Product not found")
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<InventoryService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<Product>> {
    let product = service
        .get_product(id)
        .await?
        .ok_or(ProductError::NotFound(id))?;
    Ok(Json(product))
}

/// Update an existing product; the path id wins over any id in the body
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    request_body = CreateProduct,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Validation failure"),
        (status = 404, description = "Product not found")
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<InventoryService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<Json<Product>> {
    let product = Product::from_create(id, input);
    if !service.update_product(&product).await? {
        return Err(ProductError::NotFound(id));
    }
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found")
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<InventoryService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<StatusCode> {
    if !service.delete_product(id).await? {
        return Err(ProductError::NotFound(id));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Products in the given category (exact match)
#[utoipa::path(
    get,
    path = "/category/{category}",
    tag = "Products",
    params(
        ("category" = String, Path, description = "Category to match exactly")
    ),
    responses(
        (status = 200, description = "Products in the category", body = Vec<Product>),
        (status = 400, description = "Blank category")
    )
)]
async fn search_by_category<R: ProductRepository>(
    State(service): State<Arc<InventoryService<R>>>,
    Path(category): Path<String>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.search_by_category(&category).await?;
    Ok(Json(products))
}

/// Products whose name contains the fragment, case-insensitively
#[utoipa::path(
    get,
    path = "/search",
    tag = "Products",
    params(NameQuery),
    responses(
        (status = 200, description = "Matching products", body = Vec<Product>),
        (status = 400, description = "Blank name fragment")
    )
)]
async fn search_by_name<R: ProductRepository>(
    State(service): State<Arc<InventoryService<R>>>,
    Query(query): Query<NameQuery>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.search_by_name(&query.name).await?;
    Ok(Json(products))
}

/// Products at or below the stock threshold
#[utoipa::path(
    get,
    path = "/low-stock",
    tag = "Products",
    params(LowStockQuery),
    responses(
        (status = 200, description = "Low stock products", body = Vec<Product>),
        (status = 400, description = "Negative threshold")
    )
)]
async fn low_stock_products<R: ProductRepository>(
    State(service): State<Arc<InventoryService<R>>>,
    Query(query): Query<LowStockQuery>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.low_stock_products(query.threshold).await?;
    Ok(Json(products))
}

/// Replace a product's stock quantity
#[utoipa::path(
    put,
    path = "/{id}/stock",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    request_body = StockUpdate,
    responses(
        (status = 200, description = "Stock updated", body = Product),
        (status = 400, description = "Negative quantity"),
        (status = 404, description = "Product not found")
    )
)]
async fn update_stock<R: ProductRepository>(
    State(service): State<Arc<InventoryService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(update): ValidatedJson<StockUpdate>,
) -> ProductResult<Json<Product>> {
    if !service.update_stock_quantity(id, update.quantity).await? {
        return Err(ProductError::NotFound(id));
    }
    let product = service
        .get_product(id)
        .await?
        .ok_or(ProductError::NotFound(id))?;
    Ok(Json(product))
}

/// Distinct category strings, sorted
#[utoipa::path(
    get,
    path = "/categories",
    tag = "Products",
    responses(
        (status = 200, description = "Sorted distinct categories", body = Vec<String>)
    )
)]
async fn list_categories<R: ProductRepository>(
    State(service): State<Arc<InventoryService<R>>>,
) -> ProductResult<Json<Vec<String>>> {
    let categories = service.categories().await?;
    Ok(Json(categories))
}
