use crate::cart::{CartLineResult, LineOutcome};
use crate::compare::ItemComparison;
use crate::models::{Product, Recommendation};

fn product_label(catalog: &[Product], id: &str) -> String {
    catalog
        .iter()
        .find(|p| p.id == id)
        .map(|p| match &p.brand {
            Some(brand) => format!("{} {} ({})", brand, p.name, p.pack_size),
            None => format!("{} ({})", p.name, p.pack_size),
        })
        .unwrap_or_else(|| id.to_string())
}

/// Display the recommendations for one ingredient.
pub fn display_recommendations(catalog: &[Product], ingredient: &str, recs: &[Recommendation]) {
    if recs.is_empty() {
        println!("No recommendation for '{ingredient}'.");
        return;
    }

    println!();
    println!("=== Picks for '{ingredient}' ===");
    println!();

    let total: f64 = recs.iter().map(|r| r.price).sum();
    for (i, rec) in recs.iter().enumerate() {
        println!(
            "{:>3}. {} x {:<30} Rs {:>8.2}",
            i + 1,
            rec.count,
            product_label(catalog, &rec.product_id),
            rec.price
        );
        println!("     {}", rec.reasoning);
    }

    println!();
    println!("Total: Rs {total:.2}");
    println!();
}

/// Display a processed cart, line by line.
pub fn display_cart_report(catalog: &[Product], results: &[CartLineResult]) {
    if results.is_empty() {
        println!("Cart is empty.");
        return;
    }

    println!();
    println!("=== Cart ===");
    println!();

    let mut grand_total = 0.0;
    let mut fulfilled = 0;

    for result in results {
        match &result.outcome {
            LineOutcome::Fulfilled(recs) => {
                let line_total: f64 = recs.iter().map(|r| r.price).sum();
                grand_total += line_total;
                fulfilled += 1;

                let picks: Vec<String> = recs
                    .iter()
                    .map(|r| format!("{} x {}", r.count, product_label(catalog, &r.product_id)))
                    .collect();
                println!(
                    "  [ok]   {:<20} {:<10} -> {}  (Rs {:.2})",
                    result.item.ingredient,
                    result.item.required_quantity,
                    picks.join(" + "),
                    line_total
                );
            }
            LineOutcome::Failed(message) => {
                println!(
                    "  [skip] {:<20} {:<10} -> {}",
                    result.item.ingredient, result.item.required_quantity, message
                );
            }
        }
    }

    println!();
    println!("--- Summary ---");
    println!("Fulfilled: {} of {} lines", fulfilled, results.len());
    println!("Cart total: Rs {grand_total:.2}");
    println!();
}

/// Display a cross-platform price comparison.
pub fn display_comparison(comparisons: &[ItemComparison]) {
    if comparisons.is_empty() {
        println!("Nothing to compare.");
        return;
    }

    println!();
    println!("=== Price comparison ===");

    for comparison in comparisons {
        println!();
        println!("{}:", comparison.ingredient);

        for platform_quote in &comparison.quotes {
            match &platform_quote.quote {
                Some(quote) => {
                    let brand = quote.brand.as_deref().unwrap_or("-");
                    println!(
                        "  {:<12} Rs {:>8.2}  {} x {} [{}] ({})",
                        platform_quote.platform,
                        quote.total_price,
                        quote.count,
                        quote.product_name,
                        brand,
                        quote.pack_size
                    );
                }
                None => {
                    println!("  {:<12} not found", platform_quote.platform);
                }
            }
        }

        let cheapest = comparison
            .quotes
            .iter()
            .filter_map(|pq| pq.quote.as_ref().map(|q| (&pq.platform, q.total_price)))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        if let Some((platform, price)) = cheapest {
            println!("  cheapest: {platform} at Rs {price:.2}");
        }
    }
    println!();
}
