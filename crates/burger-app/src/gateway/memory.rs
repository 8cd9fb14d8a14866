//! In-memory backend implementing every gateway trait.
//!
//! Exists to exercise the engine: the demo binary and the integration tests
//! run against it. State lives behind one mutex, which is fine here because
//! every call copies data in or out and never awaits while holding the lock.

use crate::gateway::{
    CatalogGateway, Credentials, FeedGateway, FeedPage, GatewayError, HistoryGateway,
    OrderGateway, ProfileUpdate, RegisterData, SessionGateway,
};
use crate::model::{Ingredient, IngredientId, IngredientKind, Order, OrderStatus, User};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

struct Account {
    password: String,
    user: User,
}

struct Inner {
    ingredients: Vec<Ingredient>,
    orders: Vec<Order>,
    next_number: u32,
    accounts: HashMap<String, Account>,
    session: Option<User>,
}

/// One in-process backend behind all five gateway traits.
pub struct InMemoryBackend {
    inner: Mutex<Inner>,
}

impl InMemoryBackend {
    /// Backend with a given menu and no registered accounts.
    pub fn new(ingredients: Vec<Ingredient>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                ingredients,
                orders: Vec::new(),
                next_number: 1,
                accounts: HashMap::new(),
                session: None,
            }),
        }
    }

    /// Backend pre-loaded with a small menu and one account
    /// (`alice@example.com` / `hunter2`).
    pub fn seeded() -> Self {
        let backend = Self::new(sample_menu());
        {
            let mut inner = backend.inner.lock().unwrap();
            inner.accounts.insert(
                "alice@example.com".to_string(),
                Account {
                    password: "hunter2".to_string(),
                    user: User {
                        name: "Alice".to_string(),
                        email: "alice@example.com".to_string(),
                    },
                },
            );
        }
        backend
    }

    fn make_order(inner: &mut Inner, ingredients: Vec<IngredientId>) -> Order {
        let number = inner.next_number;
        inner.next_number += 1;

        let name = ingredients
            .first()
            .and_then(|id| inner.ingredients.iter().find(|i| &i.id == id))
            .map(|i| format!("{} burger", i.name))
            .unwrap_or_else(|| "Burger".to_string());

        Order {
            id: format!("order_{number}"),
            number,
            // Fresh orders are still being cooked.
            status: OrderStatus::Pending,
            name,
            ingredients,
            created_at: "2026-08-25T00:00:00.000Z".to_string(),
            updated_at: "2026-08-25T00:00:00.000Z".to_string(),
        }
    }
}

/// A small, self-consistent menu: one bun, one sauce, two mains.
pub fn sample_menu() -> Vec<Ingredient> {
    fn entry(id: &str, name: &str, kind: IngredientKind, price: u64) -> Ingredient {
        Ingredient {
            id: IngredientId(id.to_string()),
            name: name.to_string(),
            kind,
            price,
            image: format!("https://example.com/{id}.png"),
            image_mobile: format!("https://example.com/{id}-mobile.png"),
            image_large: format!("https://example.com/{id}-large.png"),
        }
    }

    vec![
        entry("bun", "Sesame bun", IngredientKind::Bun, 50),
        entry("sauce-1", "Spicy sauce", IngredientKind::Sauce, 20),
        entry("main-1", "Beef patty", IngredientKind::Main, 80),
        entry("main-2", "Cheddar", IngredientKind::Main, 30),
    ]
}

#[async_trait]
impl CatalogGateway for InMemoryBackend {
    async fn fetch_ingredients(&self) -> Result<Vec<Ingredient>, GatewayError> {
        Ok(self.inner.lock().unwrap().ingredients.clone())
    }
}

#[async_trait]
impl OrderGateway for InMemoryBackend {
    async fn submit_order(&self, ingredients: Vec<IngredientId>) -> Result<Order, GatewayError> {
        let mut inner = self.inner.lock().unwrap();
        let order = Self::make_order(&mut inner, ingredients);
        inner.orders.push(order.clone());
        Ok(order)
    }
}

#[async_trait]
impl FeedGateway for InMemoryBackend {
    async fn fetch_feed(&self) -> Result<FeedPage, GatewayError> {
        let inner = self.inner.lock().unwrap();
        Ok(FeedPage {
            orders: inner.orders.clone(),
            total: inner.orders.len() as u64,
            total_today: inner.orders.len() as u64,
        })
    }

    async fn order_by_number(&self, number: u32) -> Result<Option<Order>, GatewayError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.orders.iter().find(|o| o.number == number).cloned())
    }
}

#[async_trait]
impl HistoryGateway for InMemoryBackend {
    async fn own_orders(&self) -> Result<Vec<Order>, GatewayError> {
        // Single-tenant demo backend: the history is the full order list.
        Ok(self.inner.lock().unwrap().orders.clone())
    }
}

#[async_trait]
impl SessionGateway for InMemoryBackend {
    async fn login(&self, credentials: Credentials) -> Result<User, GatewayError> {
        let mut inner = self.inner.lock().unwrap();
        let user = match inner.accounts.get(&credentials.email) {
            Some(account) if account.password == credentials.password => account.user.clone(),
            _ => return Err(GatewayError::InvalidCredentials),
        };
        inner.session = Some(user.clone());
        Ok(user)
    }

    async fn register(&self, data: RegisterData) -> Result<User, GatewayError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.accounts.contains_key(&data.email) {
            return Err(GatewayError::Remote("Email already registered".to_string()));
        }
        let user = User {
            name: data.name,
            email: data.email.clone(),
        };
        inner.accounts.insert(
            data.email,
            Account {
                password: data.password,
                user: user.clone(),
            },
        );
        inner.session = Some(user.clone());
        Ok(user)
    }

    async fn fetch_user(&self) -> Result<User, GatewayError> {
        self.inner
            .lock()
            .unwrap()
            .session
            .clone()
            .ok_or_else(|| GatewayError::Remote("Not authenticated".to_string()))
    }

    async fn update_user(&self, update: ProfileUpdate) -> Result<User, GatewayError> {
        let mut inner = self.inner.lock().unwrap();
        let current = inner
            .session
            .clone()
            .ok_or_else(|| GatewayError::Remote("Not authenticated".to_string()))?;

        let old_email = current.email.clone();
        let mut account = inner
            .accounts
            .remove(&old_email)
            .ok_or_else(|| GatewayError::Remote("Unknown account".to_string()))?;

        if let Some(name) = update.name {
            account.user.name = name;
        }
        if let Some(email) = update.email {
            account.user.email = email;
        }
        if let Some(password) = update.password {
            account.password = password;
        }

        let user = account.user.clone();
        inner.accounts.insert(user.email.clone(), account);
        inner.session = Some(user.clone());
        Ok(user)
    }

    async fn logout(&self) -> Result<(), GatewayError> {
        self.inner.lock().unwrap().session = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn submit_assigns_sequential_numbers() {
        let backend = InMemoryBackend::seeded();
        let first = backend
            .submit_order(vec![IngredientId::from("bun")])
            .await
            .unwrap();
        let second = backend
            .submit_order(vec![IngredientId::from("bun")])
            .await
            .unwrap();
        assert_eq!(first.number, 1);
        assert_eq!(second.number, 2);
        assert_eq!(first.status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn lookup_misses_return_none() {
        let backend = InMemoryBackend::seeded();
        assert!(backend.order_by_number(404).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn login_rejects_bad_password() {
        let backend = InMemoryBackend::seeded();
        let result = backend
            .login(Credentials {
                email: "alice@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await;
        assert!(matches!(result, Err(GatewayError::InvalidCredentials)));
    }
}
