use crate::common::simple_types::*;

#[derive(Clone, Debug, PartialEq)]
pub struct LineAdded {
    pub item: ItemNumber,
    pub name: ProductName,
    pub unit_price: Price,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineIncremented {
    pub item: ItemNumber,
    pub quantity: Quantity,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuantityChanged {
    pub item: ItemNumber,
    pub quantity: Quantity,
    pub line_total: Price,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuantityIgnored {
    pub item: ItemNumber,
    pub reason: IgnoredReason,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrderFull {
    pub name: ProductName,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoredReason {
    NoSuchLine,
    Rejected(QuantityRejection),
}

/// What a single order mutation did. Nothing here is an error: ignored input
/// is reported, never raised.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum OrderEvent {
    LineAdded(LineAdded),
    LineIncremented(LineIncremented),
    QuantityChanged(QuantityChanged),
    QuantityIgnored(QuantityIgnored),
    OrderFull(OrderFull),
}

impl OrderEvent {
    pub fn changed_order(&self) -> bool {
        !matches!(
            self,
            OrderEvent::QuantityIgnored(_) | OrderEvent::OrderFull(_)
        )
    }
}

impl From<LineAdded> for OrderEvent {
    fn from(v: LineAdded) -> Self {
        Self::LineAdded(v)
    }
}

impl From<LineIncremented> for OrderEvent {
    fn from(v: LineIncremented) -> Self {
        Self::LineIncremented(v)
    }
}

impl From<QuantityChanged> for OrderEvent {
    fn from(v: QuantityChanged) -> Self {
        Self::QuantityChanged(v)
    }
}

impl From<QuantityIgnored> for OrderEvent {
    fn from(v: QuantityIgnored) -> Self {
        Self::QuantityIgnored(v)
    }
}

impl From<OrderFull> for OrderEvent {
    fn from(v: OrderFull) -> Self {
        Self::OrderFull(v)
    }
}
