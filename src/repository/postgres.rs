//! PostgreSQL-backed repositories.
//!
//! One `PgRepository` serves all four tables; each entity gets its own
//! `Repository` impl with hand-written SQL. Ids come from `BIGSERIAL` columns.

use async_trait::async_trait;

use super::Repository;
use crate::{
    db::DbPool,
    error::AppError,
    models::{
        Client, ClientDetails, Entity, Product, ProductDetails, Seller, SellerDetails,
        Transaction, TransactionDetails,
    },
};

#[derive(Clone)]
pub struct PgRepository {
    pool: DbPool,
}

impl PgRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Map "zero rows touched" to `NotFound`.
    fn expect_row<E: Entity>(row: Option<E>, id: i64) -> Result<E, AppError> {
        row.ok_or_else(|| AppError::not_found(E::KIND, id))
    }

    async fn delete_from(&self, sql: &str, kind: &'static str, id: i64) -> Result<(), AppError> {
        let deleted = sqlx::query(sql)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if deleted == 0 {
            return Err(AppError::not_found(kind, id));
        }

        Ok(())
    }
}

#[async_trait]
impl Repository<Client> for PgRepository {
    async fn insert(&self, details: ClientDetails) -> Result<Client, AppError> {
        let client = sqlx::query_as::<_, Client>(
            "INSERT INTO clients (name, email) VALUES ($1, $2) RETURNING id, name, email",
        )
        .bind(details.name)
        .bind(details.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(client)
    }

    async fn save(&self, record: Client) -> Result<Client, AppError> {
        let client = sqlx::query_as::<_, Client>(
            "UPDATE clients SET name = $2, email = $3 WHERE id = $1 RETURNING id, name, email",
        )
        .bind(record.id)
        .bind(&record.name)
        .bind(&record.email)
        .fetch_optional(&self.pool)
        .await?;

        Self::expect_row(client, record.id)
    }

    async fn find_all(&self) -> Result<Vec<Client>, AppError> {
        let clients = sqlx::query_as::<_, Client>("SELECT id, name, email FROM clients ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(clients)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, AppError> {
        let client =
            sqlx::query_as::<_, Client>("SELECT id, name, email FROM clients WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(client)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.delete_from("DELETE FROM clients WHERE id = $1", Client::KIND, id)
            .await
    }
}

#[async_trait]
impl Repository<Product> for PgRepository {
    async fn insert(&self, details: ProductDetails) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price, stock)
            VALUES ($1, $2, $3)
            RETURNING id, name, price, stock
            "#,
        )
        .bind(details.name)
        .bind(details.price)
        .bind(details.stock)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    async fn save(&self, record: Product) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = $2, price = $3, stock = $4
            WHERE id = $1
            RETURNING id, name, price, stock
            "#,
        )
        .bind(record.id)
        .bind(&record.name)
        .bind(record.price)
        .bind(record.stock)
        .fetch_optional(&self.pool)
        .await?;

        Self::expect_row(product, record.id)
    }

    async fn find_all(&self) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, stock FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, stock FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.delete_from("DELETE FROM products WHERE id = $1", Product::KIND, id)
            .await
    }
}

#[async_trait]
impl Repository<Seller> for PgRepository {
    async fn insert(&self, details: SellerDetails) -> Result<Seller, AppError> {
        let seller = sqlx::query_as::<_, Seller>(
            "INSERT INTO sellers (name, email) VALUES ($1, $2) RETURNING id, name, email",
        )
        .bind(details.name)
        .bind(details.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(seller)
    }

    async fn save(&self, record: Seller) -> Result<Seller, AppError> {
        let seller = sqlx::query_as::<_, Seller>(
            "UPDATE sellers SET name = $2, email = $3 WHERE id = $1 RETURNING id, name, email",
        )
        .bind(record.id)
        .bind(&record.name)
        .bind(&record.email)
        .fetch_optional(&self.pool)
        .await?;

        Self::expect_row(seller, record.id)
    }

    async fn find_all(&self) -> Result<Vec<Seller>, AppError> {
        let sellers = sqlx::query_as::<_, Seller>("SELECT id, name, email FROM sellers ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(sellers)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Seller>, AppError> {
        let seller =
            sqlx::query_as::<_, Seller>("SELECT id, name, email FROM sellers WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(seller)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.delete_from("DELETE FROM sellers WHERE id = $1", Seller::KIND, id)
            .await
    }
}

#[async_trait]
impl Repository<Transaction> for PgRepository {
    async fn insert(&self, details: TransactionDetails) -> Result<Transaction, AppError> {
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (
                client_id,
                product_id,
                seller_id,
                quantity,
                date,
                approved
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(details.client_id)
        .bind(details.product_id)
        .bind(details.seller_id)
        .bind(details.quantity)
        .bind(details.date)
        .bind(details.approved)
        .fetch_one(&self.pool)
        .await?;

        Ok(transaction)
    }

    async fn save(&self, record: Transaction) -> Result<Transaction, AppError> {
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            UPDATE transactions
            SET client_id = $2,
                product_id = $3,
                seller_id = $4,
                quantity = $5,
                date = $6,
                approved = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(record.id)
        .bind(record.client_id)
        .bind(record.product_id)
        .bind(record.seller_id)
        .bind(record.quantity)
        .bind(record.date)
        .bind(record.approved)
        .fetch_optional(&self.pool)
        .await?;

        Self::expect_row(transaction, record.id)
    }

    async fn find_all(&self) -> Result<Vec<Transaction>, AppError> {
        let transactions =
            sqlx::query_as::<_, Transaction>("SELECT * FROM transactions ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(transactions)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Transaction>, AppError> {
        let transaction = sqlx::query_as::<_, Transaction>("SELECT * FROM transactions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(transaction)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.delete_from("DELETE FROM transactions WHERE id = $1", Transaction::KIND, id)
            .await
    }
}
