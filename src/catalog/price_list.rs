use indexmap::IndexMap;

use crate::common::simple_types::{Price, ProductName};

const DEMO_PRICES: &[(&str, f64)] = &[
    ("SOPA", 5.00),
    ("CREMA", 6.50),
    ("ENTRADAS", 0.00),
    ("MENÚ 8 SOLES", 8.00),
    ("MILANESA C/ PAPAS FRITAS", 12.00),
    ("POLLO PARRILLERO", 13.00),
    ("TRUCHA FRITA", 15.00),
    ("LOMO SALTADO", 14.00),
    ("CEVICHE CLÁSICO", 18.00),
    ("AJÍ DE GALLINA", 10.00),
    ("ARROZ CON POLLO", 10.00),
    ("TALLARÍN SALTADO", 12.00),
];

/// Product name to unit price, in menu order. Immutable once built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceList {
    prices: IndexMap<String, Price>,
}

impl PriceList {
    /// Builds a list from entries; a repeated name takes the later price but
    /// keeps its first position.
    pub fn from_entries(entries: impl IntoIterator<Item = (ProductName, Price)>) -> Self {
        let mut prices = IndexMap::new();
        for (name, price) in entries {
            prices.insert(name.as_str().to_owned(), price);
        }
        Self { prices }
    }

    pub fn demo() -> Self {
        let prices = DEMO_PRICES
            .iter()
            .map(|(name, price)| ((*name).to_owned(), Price::new(*price)))
            .collect();
        Self { prices }
    }

    pub fn price_of(&self, name: &str) -> Option<Price> {
        self.prices.get(name).copied()
    }

    /// Names in menu order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.prices.keys().map(String::as_str)
    }

    /// Name at a 1-based menu position.
    pub fn name_at(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|index| self.prices.get_index(index))
            .map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Merges `other` into `self`; prices from `other` win.
    pub(crate) fn extend(&mut self, other: PriceList) {
        self.prices.extend(other.prices);
    }
}
