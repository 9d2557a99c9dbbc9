use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{instrument, warn};
use uuid::Uuid;

use crate::config::email::EmailConfig;
use crate::modules::orders::model::{
    Order, OrderFilterParams, OrderItemResponse, OrderItemRow, OrderResponse, OrderStatus,
    PaginatedOrdersResponse, PlaceOrderDto, PlaceOrderItemDto, UpdateOrderStatusDto,
};
use crate::modules::products::model::Product;
use crate::utils::email::EmailService;
use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationMeta;

const ORDER_COLUMNS: &str =
    "id, user_id, total, status, shipping_address, order_number, delivery_fee, created_at";
const PRODUCT_COLUMNS: &str =
    "id, name, price, description, stock, category_id, attributes, image_url, featured, \
     created_at, updated_at";

/// Σ(price × quantity) over the submitted lines, plus the delivery fee.
pub fn compute_order_total(items: &[PlaceOrderItemDto], delivery_fee: Decimal) -> Decimal {
    items
        .iter()
        .map(|item| item.price * Decimal::from(item.quantity))
        .sum::<Decimal>()
        + delivery_fee
}

fn generate_order_number() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("ORD-{}", id[..12].to_uppercase())
}

pub struct OrderService;

impl OrderService {
    /// The order placement workflow: validate, total, persist order and
    /// items atomically, then dispatch notifications off the request
    /// path. The notifications start only after the transaction has
    /// committed and their failures never surface to the caller.
    #[instrument(skip(db, dto, email_config))]
    pub async fn place_order(
        db: &PgPool,
        user_id: Uuid,
        user_email: &str,
        mut dto: PlaceOrderDto,
        email_config: &EmailConfig,
        reprice_items: bool,
    ) -> Result<OrderResponse, AppError> {
        for item in &dto.items {
            if item.price < Decimal::ZERO {
                return Err(AppError::bad_request("Item price must not be negative"));
            }
        }

        let delivery_fee = dto.delivery_fee.unwrap_or(Decimal::ZERO);
        if delivery_fee < Decimal::ZERO {
            return Err(AppError::bad_request("Delivery fee must not be negative"));
        }

        // Optional repricing hook: trust the catalog over the client.
        if reprice_items {
            for item in &mut dto.items {
                let current = sqlx::query_scalar::<_, Decimal>(
                    "SELECT price FROM products WHERE id = $1",
                )
                .bind(item.product_id)
                .fetch_optional(db)
                .await?
                .ok_or_else(|| AppError::bad_request("Unknown product in order"))?;
                item.price = current;
            }
        }

        let total = compute_order_total(&dto.items, delivery_fee);

        let order_number = dto
            .order_number
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(generate_order_number);

        // Customer name for the confirmation email, fetched before the
        // write so the transaction stays minimal.
        let customer_name = sqlx::query_scalar::<_, String>("SELECT name FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(db)
            .await?
            .unwrap_or_else(|| user_email.to_string());

        let mut tx = db.begin().await?;

        let order = sqlx::query_as::<_, Order>(&format!(
            "INSERT INTO orders (user_id, total, status, shipping_address, order_number, delivery_fee)
             VALUES ($1, $2, 'pending', $3, $4, $5)
             RETURNING {ORDER_COLUMNS}"
        ))
        .bind(user_id)
        .bind(total)
        .bind(&dto.shipping_address)
        .bind(&order_number)
        .bind(delivery_fee)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_order_insert_error)?;

        for item in &dto.items {
            sqlx::query(
                "INSERT INTO order_items (order_id, product_id, quantity, price)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(order.id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(item.price)
            .execute(&mut *tx)
            .await
            .map_err(map_order_insert_error)?;
        }

        tx.commit().await?;

        let response = Self::load_order_items(db, order).await?;

        // Fire-and-forget notifications: best effort, one attempt,
        // never awaited by the caller.
        let mailer = EmailService::new(email_config.clone());
        let to_email = user_email.to_string();
        let number = response.order_number.clone();
        let order_total = response.total;
        tokio::spawn(async move {
            if let Err(e) = mailer
                .send_order_confirmation(&to_email, &customer_name, &number, order_total)
                .await
            {
                warn!(order_number = %number, error = %e.error, "Order confirmation email failed");
            }
            if let Err(e) = mailer
                .send_admin_order_notification(&number, &to_email, order_total)
                .await
            {
                warn!(order_number = %number, error = %e.error, "Admin order notification failed");
            }
        });

        Ok(response)
    }

    pub async fn list_my_orders(db: &PgPool, user_id: Uuid) -> Result<Vec<OrderResponse>, AppError> {
        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(db)
        .await?;

        let mut responses = Vec::with_capacity(orders.len());
        for order in orders {
            responses.push(Self::load_order_items(db, order).await?);
        }
        Ok(responses)
    }

    /// Owner-scoped lookup. An order that exists but belongs to someone
    /// else is indistinguishable from one that does not exist: 404
    /// either way.
    pub async fn get_my_order(
        db: &PgPool,
        user_id: Uuid,
        order_id: Uuid,
    ) -> Result<OrderResponse, AppError> {
        let order = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1 AND user_id = $2"
        ))
        .bind(order_id)
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("Order not found"))?;

        Self::load_order_items(db, order).await
    }

    pub async fn admin_list_orders(
        db: &PgPool,
        params: OrderFilterParams,
    ) -> Result<PaginatedOrdersResponse, AppError> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM orders WHERE ($1::order_status IS NULL OR status = $1)",
        )
        .bind(params.status)
        .fetch_one(db)
        .await?;

        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders
             WHERE ($1::order_status IS NULL OR status = $1)
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        ))
        .bind(params.status)
        .bind(params.pagination.limit())
        .bind(params.pagination.offset())
        .fetch_all(db)
        .await?;

        Ok(PaginatedOrdersResponse {
            data: orders,
            meta: PaginationMeta::new(total, &params.pagination),
        })
    }

    pub async fn admin_get_order(db: &PgPool, order_id: Uuid) -> Result<OrderResponse, AppError> {
        let order = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(order_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("Order not found"))?;

        Self::load_order_items(db, order).await
    }

    pub async fn admin_update_status(
        db: &PgPool,
        order_id: Uuid,
        dto: UpdateOrderStatusDto,
    ) -> Result<Order, AppError> {
        let status = OrderStatus::parse(&dto.status).ok_or_else(|| {
            AppError::bad_request(format!("Invalid order status: {}", dto.status))
        })?;

        let order = sqlx::query_as::<_, Order>(&format!(
            "UPDATE orders SET status = $2 WHERE id = $1 RETURNING {ORDER_COLUMNS}"
        ))
        .bind(order_id)
        .bind(status)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("Order not found"))?;

        Ok(order)
    }

    async fn load_order_items(db: &PgPool, order: Order) -> Result<OrderResponse, AppError> {
        let items = sqlx::query_as::<_, OrderItemRow>(
            "SELECT order_id, product_id, quantity, price
             FROM order_items WHERE order_id = $1",
        )
        .bind(order.id)
        .fetch_all(db)
        .await?;

        let product_ids: Vec<Uuid> = items.iter().map(|i| i.product_id).collect();
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ANY($1)"
        ))
        .bind(&product_ids)
        .fetch_all(db)
        .await?;

        let items = items
            .into_iter()
            .map(|item| {
                let product = products.iter().find(|p| p.id == item.product_id).cloned();
                OrderItemResponse {
                    product_id: item.product_id,
                    quantity: item.quantity,
                    price: item.price,
                    product,
                }
            })
            .collect();

        Ok(OrderResponse {
            id: order.id,
            user_id: order.user_id,
            total: order.total,
            status: order.status,
            shipping_address: order.shipping_address,
            order_number: order.order_number,
            delivery_fee: order.delivery_fee,
            created_at: order.created_at,
            items,
        })
    }
}

fn map_order_insert_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        match db_err.code().as_deref() {
            // Foreign key: a submitted product does not exist.
            Some("23503") => return AppError::bad_request("Unknown product in order"),
            // Unique: caller reused an order number.
            Some("23505") => return AppError::bad_request("Order number already exists"),
            _ => {}
        }
    }
    AppError::database(e)
}
