//! Cart summary

use std::io;

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::Cart,
    catalog::Catalog,
    pricing::{PricingError, cart_subtotal, line_total},
};

/// Errors that can occur when rendering a cart summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Error pricing a cart line.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Error writing the summary.
    #[error("Failed to write cart summary: {0}")]
    Io(#[from] io::Error),
}

/// Tabular view of a cart against a catalog, for terminal output.
#[derive(Debug)]
pub struct CartSummary<'a> {
    cart: &'a Cart,
    catalog: &'a Catalog,
    is_open: bool,
}

impl<'a> CartSummary<'a> {
    /// Create a summary of the cart
    pub fn new(cart: &'a Cart, catalog: &'a Catalog) -> Self {
        Self {
            cart,
            catalog,
            is_open: false,
        }
    }

    /// Include the cart panel visibility in the footer
    #[must_use]
    pub fn with_panel(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    /// Write the summary table and totals.
    ///
    /// # Errors
    ///
    /// Returns a `SummaryError` if a line cannot be priced or the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), SummaryError> {
        let mut builder = Builder::default();

        builder.push_record(["#", "Item", "Qty", "Unit Price", "Line Total"]);

        for item in self.cart {
            let (name, unit_price) = match self.catalog.get(item.id()) {
                Some(product) => (product.name.clone(), product.price.to_string()),
                None => return Err(PricingError::UnknownProduct(item.id()).into()),
            };

            builder.push_record([
                item.id().to_string(),
                name,
                item.quantity().to_string(),
                unit_price,
                line_total(item, self.catalog)?.to_string(),
            ]);
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(
            1,
            HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤')),
        );

        table.with(theme);
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(2..5), Alignment::right());

        writeln!(out, "\n{table}")?;

        let subtotal = cart_subtotal(self.cart, self.catalog)?;
        let panel = if self.is_open { "open" } else { "closed" };

        writeln!(
            out,
            " Items: {}  Lines: {}  Subtotal: {subtotal}  Panel: {panel}",
            self.cart.total_quantity(),
            self.cart.len(),
        )?;

        Ok(())
    }
}
