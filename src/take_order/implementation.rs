use tracing::{debug, warn};

use super::public_types::*;
use crate::catalog::PriceList;
use crate::common::simple_types::*;

/// One priced entry of the current order. `line_total` is kept equal to
/// `quantity * unit_price` by every mutation.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderLine {
    item: ItemNumber,
    name: ProductName,
    quantity: Quantity,
    unit_price: Price,
    line_total: Price,
}

impl OrderLine {
    fn new(item: ItemNumber, name: ProductName, quantity: Quantity, unit_price: Price) -> Self {
        Self {
            item,
            name,
            quantity,
            unit_price,
            line_total: unit_price * quantity,
        }
    }

    pub fn item(&self) -> ItemNumber {
        self.item
    }
    pub fn name(&self) -> &ProductName {
        &self.name
    }
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }
    pub fn unit_price(&self) -> Price {
        self.unit_price
    }
    pub fn line_total(&self) -> Price {
        self.line_total
    }

    fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
        self.line_total = self.unit_price * self.quantity;
    }
}

/// Sum of the line totals; zero for no lines.
pub fn compute_grand_total(lines: &[OrderLine]) -> GrandTotal {
    GrandTotal::sum_prices(lines.iter().map(OrderLine::line_total))
}

/// The current order plus the price list it is priced from.
///
/// Lines are only ever appended or have their quantity changed; a fresh order
/// is a fresh aggregator.
#[derive(Clone, Debug)]
pub struct OrderAggregator {
    price_list: PriceList,
    lines: Vec<OrderLine>,
}

impl OrderAggregator {
    pub fn new(price_list: PriceList) -> Self {
        Self {
            price_list,
            lines: Vec::new(),
        }
    }

    pub fn price_list(&self) -> &PriceList {
        &self.price_list
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn line(&self, item: ItemNumber) -> Option<&OrderLine> {
        self.lines.iter().find(|line| line.item == item)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn grand_total(&self) -> GrandTotal {
        compute_grand_total(&self.lines)
    }

    /// Adds one of `name`: bumps the existing line, or appends a new one
    /// priced from the price list (unknown names cost zero).
    pub fn add_or_increment(&mut self, name: ProductName) -> OrderEvent {
        if let Some(line) = self.lines.iter_mut().find(|line| line.name == name) {
            let quantity = line.quantity + Quantity::ONE;
            line.set_quantity(quantity);
            debug!(item = %line.item, name = %line.name, %quantity, "line incremented");
            return LineIncremented {
                item: line.item,
                quantity,
            }
            .into();
        }

        let unit_price = self.price_list.price_of(name.as_str()).unwrap_or_else(|| {
            debug!(%name, "no price listed, charging zero");
            Price::ZERO
        });
        let Some(item) = ItemNumber::after(self.lines.len()) else {
            warn!(%name, lines = self.lines.len(), "no item numbers left, line not added");
            return OrderFull { name }.into();
        };
        self.lines
            .push(OrderLine::new(item, name.clone(), Quantity::ONE, unit_price));
        debug!(%item, %name, %unit_price, "line added");

        LineAdded {
            item,
            name,
            unit_price,
        }
        .into()
    }

    /// Overrides the quantity of line `item` with `raw_input`. Blank,
    /// malformed or negative input, or a quantity whose line total is not
    /// finite, leaves the line as it was.
    pub fn set_quantity(&mut self, item: ItemNumber, raw_input: &str) -> OrderEvent {
        let Some(line) = self.lines.iter_mut().find(|line| line.item == item) else {
            debug!(%item, "no such line, quantity ignored");
            return QuantityIgnored {
                item,
                reason: IgnoredReason::NoSuchLine,
            }
            .into();
        };

        let unit_price = line.unit_price;
        let parsed = Quantity::parse(raw_input).and_then(|quantity| {
            if (unit_price * quantity).value().is_finite() {
                Ok(quantity)
            } else {
                Err(QuantityRejection::TooLarge)
            }
        });

        match parsed {
            Ok(quantity) => {
                line.set_quantity(quantity);
                debug!(%item, %quantity, line_total = %line.line_total, "quantity set");
                QuantityChanged {
                    item,
                    quantity,
                    line_total: line.line_total,
                }
                .into()
            }
            Err(rejection) => {
                debug!(%item, raw_input, %rejection, "quantity ignored");
                QuantityIgnored {
                    item,
                    reason: IgnoredReason::Rejected(rejection),
                }
                .into()
            }
        }
    }
}
