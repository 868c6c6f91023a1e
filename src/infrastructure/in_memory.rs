use crate::domain::order::{SalesOrder, SalesOrderLine};
use crate::domain::ports::OrderStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for sales orders and their lines.
///
/// `Clone` shares the underlying maps, so one instance can back both the
/// purchase manager and the caller layer the way a shared database
/// session would. Suited to tests and CLI runs; a relational store sits
/// behind the same port in a deployment.
#[derive(Default, Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<u32, SalesOrder>>>,
    lines: Arc<RwLock<HashMap<u32, SalesOrderLine>>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create_order(&self, order: SalesOrder) -> Result<()> {
        let mut orders = self.orders.write().await;
        orders.insert(order.order, order);
        Ok(())
    }

    async fn order_by_id(&self, order_id: u32) -> Result<Option<SalesOrder>> {
        let orders = self.orders.read().await;
        Ok(orders.get(&order_id).cloned())
    }

    async fn orders(&self) -> Result<Vec<SalesOrder>> {
        let orders = self.orders.read().await;
        let mut all: Vec<SalesOrder> = orders.values().cloned().collect();
        all.sort_by_key(|order| order.order);
        Ok(all)
    }

    async fn orders_by_customer(&self, customer_id: u32) -> Result<Vec<SalesOrder>> {
        let orders = self.orders.read().await;
        let mut matching: Vec<SalesOrder> = orders
            .values()
            .filter(|order| order.customer == customer_id)
            .cloned()
            .collect();
        matching.sort_by_key(|order| order.order);
        Ok(matching)
    }

    async fn update_order(&self, order: SalesOrder) -> Result<()> {
        let mut orders = self.orders.write().await;
        orders.insert(order.order, order);
        Ok(())
    }

    async fn delete_order(&self, order_id: u32) -> Result<()> {
        let mut orders = self.orders.write().await;
        orders.remove(&order_id);
        Ok(())
    }

    async fn create_line(&self, line: SalesOrderLine) -> Result<()> {
        let mut lines = self.lines.write().await;
        lines.insert(line.line, line);
        Ok(())
    }

    async fn line_by_id(&self, line_id: u32) -> Result<Option<SalesOrderLine>> {
        let lines = self.lines.read().await;
        Ok(lines.get(&line_id).cloned())
    }

    async fn update_line(&self, line: SalesOrderLine) -> Result<()> {
        let mut lines = self.lines.write().await;
        lines.insert(line.line, line);
        Ok(())
    }

    async fn delete_line(&self, line_id: u32) -> Result<()> {
        let mut lines = self.lines.write().await;
        lines.remove(&line_id);
        Ok(())
    }
}
