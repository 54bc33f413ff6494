use rust_decimal::{Decimal, RoundingStrategy};
use stockroom_core::Entity;

/// One inventory entry.
///
/// Construction does not validate; the store enforces code uniqueness and
/// callers supply quantity/price through the validated value objects.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRecord {
    name: String,
    code: String,
    quantity: u32,
    price: f64,
}

impl InventoryRecord {
    pub fn new(name: impl Into<String>, code: impl Into<String>, quantity: u32, price: f64) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            quantity,
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// Display line used by list and update flows.
    pub fn formatted(&self) -> String {
        self.to_string()
    }
}

impl Entity for InventoryRecord {
    type Id = str;

    fn id(&self) -> &str {
        &self.code
    }
}

impl core::fmt::Display for InventoryRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Item: {}, Code: {}, Quantity: {}, Price: ${}",
            self.name,
            self.code,
            self.quantity,
            price_to_cents(self.price)
        )
    }
}

/// Two-decimal price text, exact ties rounded away from zero.
///
/// Works on the exact binary value, so 2.125 becomes 2.13 while 1.005
/// (stored just below 1.005) stays 1.00.
fn price_to_cents(price: f64) -> String {
    match Decimal::from_f64_retain(price) {
        Some(exact) => {
            let mut rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            rounded.to_string()
        }
        // Outside Decimal's range.
        None => format!("{price:.2}"),
    }
}
