//! Data-source boundary validation
//!
//! The lifecycle engines trust their input and never validate; floors
//! handed over by the external data source are checked once here
//! instead. The inbound contract: ids unique within their entity
//! type, capacity seats at least one guest, orders carry at least one
//! item, back-references consistent, quantities positive, prices
//! non-negative.

use std::collections::HashSet;

use shared::models::Table;
use shared::{FloorError, FloorResult};

/// Validate a floor handed over by the data source.
///
/// Returns the first violation found. `Table.number` is display-only
/// and deliberately not checked for uniqueness.
pub fn validate_floor(tables: &[Table]) -> FloorResult<()> {
    let mut table_ids = HashSet::new();
    let mut order_ids = HashSet::new();

    for table in tables {
        if !table_ids.insert(table.id.as_str()) {
            return Err(FloorError::DuplicateTableId(table.id.clone()));
        }
        if table.capacity < 1 {
            return Err(FloorError::InvalidCapacity {
                table_id: table.id.clone(),
                capacity: table.capacity,
            });
        }

        for order in &table.orders {
            if !order_ids.insert(order.id.as_str()) {
                return Err(FloorError::DuplicateOrderId(order.id.clone()));
            }
            if order.table_id != table.id {
                return Err(FloorError::TableMismatch {
                    order_id: order.id.clone(),
                    referenced: order.table_id.clone(),
                    actual: table.id.clone(),
                });
            }
            if order.items.is_empty() {
                return Err(FloorError::EmptyOrder(order.id.clone()));
            }

            for item in &order.items {
                if item.quantity < 1 {
                    return Err(FloorError::InvalidQuantity {
                        order_id: order.id.clone(),
                        item_id: item.id.clone(),
                        quantity: item.quantity,
                    });
                }
                if item.price < 0.0 {
                    return Err(FloorError::NegativePrice {
                        order_id: order.id.clone(),
                        item_id: item.id.clone(),
                        price: item.price,
                    });
                }
            }
        }
    }

    Ok(())
}
