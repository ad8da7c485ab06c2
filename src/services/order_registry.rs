use crate::error::Result;
use crate::model::{OrderId, OrderStatus, SharedOrder};
use resource_store::SequencedStore;
use tracing::{debug, info, instrument};

/// Registry of submitted orders, keyed by sequential [`OrderId`]s.
///
/// The registry is the only place order ids are minted. Ids start at 1 and are
/// never handed out twice, even after an order is removed.
#[derive(Debug, Default)]
pub struct OrderRegistry {
    store: SequencedStore<OrderId, SharedOrder>,
}

impl OrderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `order` under the next id.
    ///
    /// The order is reset to `CREATED` and stamped with its id, so a table that
    /// shares the order can find its registry entry again.
    #[instrument(skip(self, order))]
    pub fn add_order(&mut self, order: SharedOrder) -> OrderId {
        debug!(lines = order.borrow().line_count(), "add_order called");
        let id = self.store.insert_with(|id| {
            let mut registered = order.borrow_mut();
            registered.set_status(OrderStatus::Created);
            registered.assign_id(*id);
            drop(registered);
            order
        });
        info!(order_id = %id, "Order registered");
        id
    }

    /// Looks up a registered order.
    pub fn get_order(&self, id: OrderId) -> Result<&SharedOrder> {
        Ok(self.store.get(&id)?)
    }

    /// Drops the registry's handle to the order. The table keeps its own.
    #[instrument(skip(self))]
    pub fn remove_order(&mut self, id: OrderId) -> Result<SharedOrder> {
        Ok(self.store.remove(&id)?)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Registered orders in registration order.
    pub fn orders(&self) -> impl Iterator<Item = (OrderId, &SharedOrder)> + '_ {
        self.store.iter().map(|(id, order)| (*id, order))
    }
}
