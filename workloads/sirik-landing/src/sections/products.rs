//! Product carousel, quantity picker and comparison table.

use sirik_commerce::catalog::PRODUCT_FEATURES;
use sirik_commerce::session::SessionView;

use super::{disabled_attr, html_escape};
use crate::data::{ComparisonRow, ProductsContent};

/// Render the product section for the current carousel position.
pub fn render_products(content: &ProductsContent, view: &SessionView) -> String {
    let product = &view.current_product;

    let badges: String = PRODUCT_FEATURES
        .iter()
        .map(|f| format!(r#"<span class="feature-badge">{}</span>"#, html_escape(f)))
        .collect();

    format!(
        r#"<section id="products" class="products" data-section="products">
    <div class="section-header">
        <h2>{}</h2>
        <p>{}</p>
    </div>
    <div class="product-showcase" data-product-id="{}">
        <button class="carousel-prev" aria-label="Previous product">&lsaquo;</button>
        <img src="{}" alt="{}">
        <button class="carousel-next" aria-label="Next product">&rsaquo;</button>
        <span class="carousel-position">{} / {}</span>
    </div>
    <div class="product-details">
        <h3>{}</h3>
        <p class="product-price">{}</p>
        <p>{}</p>
        <div class="feature-badges">{}</div>
        <div class="quantity-selector">
            <button aria-label="Decrease quantity">-</button>
            <span class="quantity">{}</span>
            <button aria-label="Increase quantity">+</button>
        </div>
        <button class="add-to-cart"{}>Add to Cart</button>
    </div>
    {}
</section>"#,
        html_escape(&content.section_title),
        html_escape(&content.tagline),
        product.id,
        html_escape(&product.image),
        html_escape(&product.name),
        view.product_index + 1,
        view.product_count,
        html_escape(&product.name),
        html_escape(&product.price.display()),
        html_escape(&product.description),
        badges,
        view.quantity,
        disabled_attr(view.actions.can_add_to_cart),
        render_comparison(&content.comparison_title, &content.comparison)
    )
}

fn render_comparison(title: &str, rows: &[ComparisonRow]) -> String {
    let body: String = rows
        .iter()
        .map(|row| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                html_escape(&row.criterion),
                mark(row.sirik),
                mark(row.cola),
                mark(row.herbal_juice)
            )
        })
        .collect();

    format!(
        r#"<div class="comparison">
        <h3>{}</h3>
        <table>
            <thead><tr><th>Criteria</th><th>SIRIK</th><th>Cola/Soda</th><th>Herbal Juice</th></tr></thead>
            <tbody>{}</tbody>
        </table>
    </div>"#,
        html_escape(title),
        body
    )
}

fn mark(yes: bool) -> &'static str {
    if yes {
        r#"<span class="yes">✓</span>"#
    } else {
        r#"<span class="no">✗</span>"#
    }
}
