//! Items

use std::num::NonZeroU32;

use crate::{cart::CartError, products::ProductId};

/// A single cart line: one distinct product and how many of it are in the cart.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CartItem {
    id: ProductId,
    quantity: NonZeroU32,
}

impl CartItem {
    /// Creates a new line holding a single unit of the product
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            quantity: NonZeroU32::MIN,
        }
    }

    /// Creates a new line with the given quantity
    pub fn with_quantity(id: ProductId, quantity: NonZeroU32) -> Self {
        Self { id, quantity }
    }

    /// Returns the product id of the line
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Returns the quantity of the line
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Returns the line with one more unit.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityOverflow`] if the quantity is already `u32::MAX`.
    pub fn incremented(&self) -> Result<Self, CartError> {
        let quantity = self
            .quantity
            .checked_add(1)
            .ok_or(CartError::QuantityOverflow(self.id))?;

        Ok(Self { quantity, ..*self })
    }

    /// Returns the line with one unit fewer, or `None` when the last unit goes.
    pub fn decremented(&self) -> Option<Self> {
        NonZeroU32::new(self.quantity.get() - 1).map(|quantity| Self { quantity, ..*self })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_starts_at_one() -> TestResult {
        let item = CartItem::new(ProductId::new(3)?);

        assert_eq!(item.id(), ProductId::new(3)?);
        assert_eq!(item.quantity(), 1);

        Ok(())
    }

    #[test]
    fn incremented_adds_one() -> TestResult {
        let item = CartItem::new(ProductId::new(1)?).incremented()?.incremented()?;

        assert_eq!(item.quantity(), 3);

        Ok(())
    }

    #[test]
    fn incremented_at_max_overflows() -> TestResult {
        let id = ProductId::new(1)?;
        let item = CartItem::with_quantity(id, NonZeroU32::MAX);

        assert!(matches!(
            item.incremented(),
            Err(CartError::QuantityOverflow(overflowed)) if overflowed == id
        ));

        Ok(())
    }

    #[test]
    fn decremented_removes_last_unit() -> TestResult {
        let item = CartItem::new(ProductId::new(1)?);

        assert_eq!(item.decremented(), None);

        Ok(())
    }

    #[test]
    fn decremented_keeps_id() -> TestResult {
        let id = ProductId::new(9)?;
        let item = CartItem::new(id).incremented()?;

        assert_eq!(item.decremented(), Some(CartItem::new(id)));

        Ok(())
    }
}
