//! Plain-text rendering of catalog, cart and checkout results.

use std::io::{self, Write};

use ecommerce_cart_core::{
    CartLineItem, CartTotals, Catalog, CheckoutReceipt, Confirmation, FormReport, Price,
};

/// Catalog listing, one product per block.
pub fn catalog(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    for product in catalog.products() {
        writeln!(
            out,
            "[{}] {} {}  {}",
            product.id,
            product.image,
            product.title,
            Price::usd(product.price)
        )?;
        writeln!(out, "     {}", product.description)?;
    }
    Ok(())
}

/// Cart rows, or the empty-cart message.
pub fn cart_items(out: &mut impl Write, items: &[CartLineItem]) -> io::Result<()> {
    if items.is_empty() {
        writeln!(out, "Your cart is empty")?;
        writeln!(out, "Add some products to get started!")?;
        return Ok(());
    }

    for line in items {
        let line_total = line
            .line_total()
            .map_or_else(|| "n/a".to_owned(), |t| Price::usd(t).display());
        writeln!(
            out,
            "[{}] {} {}  {} each  x{}  {line_total}",
            line.id,
            line.image,
            line.title,
            Price::usd(line.price),
            line.quantity,
        )?;
    }
    Ok(())
}

/// Subtotal, tax and total lines.
pub fn totals(out: &mut impl Write, totals: &CartTotals) -> io::Result<()> {
    writeln!(out, "Subtotal: {}", Price::usd(totals.subtotal))?;
    writeln!(out, "Tax:      {}", Price::usd(totals.tax))?;
    writeln!(out, "Total:    {}", Price::usd(totals.total))
}

/// The cart count badge; nothing when the cart is empty.
pub fn badge(out: &mut impl Write, item_count: u64) -> io::Result<()> {
    if item_count > 0 {
        writeln!(out, "Cart: {item_count}")?;
    }
    Ok(())
}

/// The "added to cart" notice.
pub fn confirmation(out: &mut impl Write, confirmation: &Confirmation) -> io::Result<()> {
    writeln!(out, "✔ {}", confirmation.message)
}

/// Field errors from a rejected checkout.
pub fn form_errors(out: &mut impl Write, report: &FormReport) -> io::Result<()> {
    for (field, reason) in report.errors() {
        writeln!(out, "{field}: {reason}")?;
    }
    Ok(())
}

/// Order confirmation with the purchased lines and totals.
pub fn receipt(out: &mut impl Write, receipt: &CheckoutReceipt) -> io::Result<()> {
    writeln!(out, "Order placed successfully! Thank you for your purchase.")?;
    writeln!(out, "Order {}", receipt.order_id)?;
    writeln!(out, "Placed {}", receipt.placed_at.to_rfc3339())?;
    cart_items(out, &receipt.items)?;
    totals(out, &receipt.totals)
}
