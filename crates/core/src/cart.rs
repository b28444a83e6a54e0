//! Cart

use std::{iter, num::NonZeroU32, sync::Arc};

use thiserror::Error;

use crate::{items::CartItem, products::ProductId};

/// Errors related to cart operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// A product id was zero, negative or out of range.
    #[error("Invalid product id: {0}")]
    InvalidProductId(i64),

    /// No line for the product exists in the cart.
    #[error("Product {0} is not in the cart")]
    ItemNotFound(ProductId),

    /// The line is already at the configured per-line limit (product, limit).
    #[error("Product {id} is already at the quantity limit of {limit}")]
    QuantityLimit {
        /// Product whose line is full
        id: ProductId,
        /// Configured per-line limit
        limit: NonZeroU32,
    },

    /// The line quantity cannot be represented.
    #[error("Quantity of product {0} would overflow")]
    QuantityOverflow(ProductId),
}

/// An immutable snapshot of the cart lines.
///
/// Operations never modify a snapshot in place. Each one that changes the cart returns a new
/// snapshot, so two snapshots can be checked for change with [`Cart::ptr_eq`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Arc<[CartItem]>,
}

impl Cart {
    /// Create a new empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cart from existing lines.
    ///
    /// Lines for a product that already appeared are merged into the first line for it.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityOverflow`] if merging lines overflows a quantity.
    pub fn with_items(items: impl IntoIterator<Item = CartItem>) -> Result<Self, CartError> {
        let mut merged: Vec<CartItem> = Vec::new();

        for item in items {
            match merged.iter_mut().find(|line| line.id() == item.id()) {
                Some(line) => {
                    let quantity = line
                        .quantity()
                        .checked_add(item.quantity())
                        .and_then(NonZeroU32::new)
                        .ok_or(CartError::QuantityOverflow(item.id()))?;

                    *line = CartItem::with_quantity(item.id(), quantity);
                }
                None => merged.push(item),
            }
        }

        Ok(Self {
            items: merged.into(),
        })
    }

    /// Quantity of the product in the cart, or 0 when it has no line.
    pub fn quantity(&self, id: ProductId) -> u32 {
        self.get(id).map_or(0, CartItem::quantity)
    }

    /// The line for the product, if present.
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Check if the product has a line in the cart.
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the cart with one more unit of the product.
    ///
    /// A product without a line is appended with a quantity of 1. An existing line keeps its
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityOverflow`] if the line is already at `u32::MAX`.
    pub fn increased(&self, id: ProductId) -> Result<Self, CartError> {
        if !self.contains(id) {
            let items = self
                .items
                .iter()
                .copied()
                .chain(iter::once(CartItem::new(id)))
                .collect();

            return Ok(Self { items });
        }

        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id() == id {
                    item.incremented()
                } else {
                    Ok(*item)
                }
            })
            .collect::<Result<Arc<[CartItem]>, CartError>>()?;

        Ok(Self { items })
    }

    /// Returns the cart with one unit fewer of the product. The line is dropped when its last
    /// unit goes.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] if the product has no line.
    pub fn decreased(&self, id: ProductId) -> Result<Self, CartError> {
        if !self.contains(id) {
            return Err(CartError::ItemNotFound(id));
        }

        let items = self
            .items
            .iter()
            .filter_map(|item| {
                if item.id() == id {
                    item.decremented()
                } else {
                    Some(*item)
                }
            })
            .collect();

        Ok(Self { items })
    }

    /// Returns the cart without the product's line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] if the product has no line.
    pub fn removed(&self, id: ProductId) -> Result<Self, CartError> {
        if !self.contains(id) {
            return Err(CartError::ItemNotFound(id));
        }

        let items = self
            .items
            .iter()
            .filter(|item| item.id() != id)
            .copied()
            .collect();

        Ok(Self { items })
    }

    /// Sum of the quantities of every line, recomputed from the lines.
    pub fn total_quantity(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity()))
            .sum()
    }

    /// The cart lines in order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Iterate over the cart lines in order.
    pub fn iter(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter()
    }

    /// Get the number of distinct lines in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check whether two snapshots are the same value, not merely equal contents.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn id(raw: u32) -> Result<ProductId, CartError> {
        ProductId::new(raw)
    }

    fn lines(cart: &Cart) -> Vec<(u32, u32)> {
        cart.iter()
            .map(|item| (item.id().get(), item.quantity()))
            .collect()
    }

    #[test]
    fn new_is_empty() -> TestResult {
        let cart = Cart::new();

        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.quantity(id(1)?), 0);

        Ok(())
    }

    #[test]
    fn increased_appends_new_line() -> TestResult {
        let cart = Cart::new().increased(id(1)?)?.increased(id(2)?)?;

        assert_eq!(lines(&cart), vec![(1, 1), (2, 1)]);

        Ok(())
    }

    #[test]
    fn increased_existing_line_keeps_order() -> TestResult {
        let cart = Cart::new()
            .increased(id(1)?)?
            .increased(id(2)?)?
            .increased(id(3)?)?
            .increased(id(2)?)?;

        assert_eq!(lines(&cart), vec![(1, 1), (2, 2), (3, 1)]);

        Ok(())
    }

    #[test]
    fn increased_leaves_previous_snapshot_untouched() -> TestResult {
        let before = Cart::new().increased(id(1)?)?;
        let after = before.increased(id(1)?)?;

        assert_eq!(before.quantity(id(1)?), 1);
        assert_eq!(after.quantity(id(1)?), 2);
        assert!(!before.ptr_eq(&after));

        Ok(())
    }

    #[test]
    fn increased_overflow_errors() -> TestResult {
        let cart = Cart::with_items([CartItem::with_quantity(id(1)?, NonZeroU32::MAX)])?;

        assert_eq!(
            cart.increased(id(1)?),
            Err(CartError::QuantityOverflow(id(1)?))
        );

        Ok(())
    }

    #[test]
    fn decreased_last_unit_drops_line() -> TestResult {
        let cart = Cart::new().increased(id(1)?)?.increased(id(2)?)?;

        let cart = cart.decreased(id(1)?)?;

        assert_eq!(lines(&cart), vec![(2, 1)]);
        assert!(!cart.contains(id(1)?));

        Ok(())
    }

    #[test]
    fn decreased_keeps_line_above_one() -> TestResult {
        let cart = Cart::new()
            .increased(id(1)?)?
            .increased(id(1)?)?
            .increased(id(1)?)?;

        let cart = cart.decreased(id(1)?)?;

        assert_eq!(cart.quantity(id(1)?), 2);

        Ok(())
    }

    #[test]
    fn decreased_missing_errors() -> TestResult {
        let cart = Cart::new().increased(id(1)?)?;

        assert_eq!(cart.decreased(id(2)?), Err(CartError::ItemNotFound(id(2)?)));

        Ok(())
    }

    #[test]
    fn removed_drops_whole_line() -> TestResult {
        let cart = Cart::new()
            .increased(id(1)?)?
            .increased(id(1)?)?
            .increased(id(2)?)?;

        let cart = cart.removed(id(1)?)?;

        assert_eq!(lines(&cart), vec![(2, 1)]);
        assert_eq!(cart.total_quantity(), 1);

        Ok(())
    }

    #[test]
    fn removed_missing_errors() -> TestResult {
        let cart = Cart::new();

        assert_eq!(cart.removed(id(5)?), Err(CartError::ItemNotFound(id(5)?)));

        Ok(())
    }

    #[test]
    fn total_quantity_sums_lines() -> TestResult {
        let cart = Cart::with_items([
            CartItem::with_quantity(id(1)?, NonZeroU32::MIN.saturating_add(2)),
            CartItem::with_quantity(id(2)?, NonZeroU32::MIN.saturating_add(3)),
        ])?;

        assert_eq!(cart.total_quantity(), 7);

        Ok(())
    }

    #[test]
    fn total_quantity_does_not_overflow_u32() -> TestResult {
        let cart = Cart::with_items([
            CartItem::with_quantity(id(1)?, NonZeroU32::MAX),
            CartItem::with_quantity(id(2)?, NonZeroU32::MAX),
        ])?;

        assert_eq!(cart.total_quantity(), 2 * u64::from(u32::MAX));

        Ok(())
    }

    #[test]
    fn with_items_merges_duplicate_ids() -> TestResult {
        let cart = Cart::with_items([
            CartItem::new(id(1)?),
            CartItem::new(id(2)?),
            CartItem::new(id(1)?),
        ])?;

        assert_eq!(lines(&cart), vec![(1, 2), (2, 1)]);

        Ok(())
    }

    #[test]
    fn walkthrough() -> TestResult {
        let cart = Cart::new().increased(id(1)?)?;
        assert_eq!(lines(&cart), vec![(1, 1)]);
        assert_eq!(cart.total_quantity(), 1);

        let cart = cart.increased(id(1)?)?;
        assert_eq!(lines(&cart), vec![(1, 2)]);
        assert_eq!(cart.total_quantity(), 2);

        let cart = cart.increased(id(2)?)?;
        assert_eq!(lines(&cart), vec![(1, 2), (2, 1)]);
        assert_eq!(cart.total_quantity(), 3);

        let cart = cart.decreased(id(1)?)?;
        assert_eq!(lines(&cart), vec![(1, 1), (2, 1)]);
        assert_eq!(cart.total_quantity(), 2);

        let cart = cart.decreased(id(2)?)?;
        assert_eq!(lines(&cart), vec![(1, 1)]);
        assert_eq!(cart.total_quantity(), 1);

        let cart = cart.removed(id(1)?)?;
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);

        Ok(())
    }
}
