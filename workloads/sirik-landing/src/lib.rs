//! SIRIK landing page.
//!
//! Renders the marketing sections from [`SiteContent`] and the storefront
//! state from a [`SessionView`] snapshot into a single HTML document. All
//! text is HTML-escaped. Styling and animation are left to the client.

mod data;
mod sections;

use chrono::{Datelike, Utc};
use sirik_commerce::session::SessionView;

pub use data::*;
use sections::{
    html_escape, render_about, render_contact, render_footer, render_header, render_hero,
    render_panel, render_products, render_values,
};

/// Render the whole page for the current calendar year.
pub fn render_page(content: &SiteContent, view: &SessionView) -> String {
    render_document(content, view, Utc::now().year())
}

fn render_document(content: &SiteContent, view: &SessionView, year: i32) -> String {
    let sections = [
        render_header(&content.header, view.item_count),
        render_hero(&content.hero),
        render_about(&content.about),
        render_products(&content.products, view),
        render_values(&content.values),
        render_contact(&content.contact),
        render_panel(view),
        render_footer(&content.footer, year),
    ];

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{}</title>
</head>
<body data-session="{}" data-step="{}">
<main>
{}
</main>
</body>
</html>
"#,
        html_escape(&content.title),
        html_escape(view.session_id.as_str()),
        view.step.as_str(),
        sections.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use sirik_commerce::prelude::*;

    use super::*;

    fn session() -> CheckoutSession {
        CheckoutSession::new(
            Catalog::default(),
            MockPincodeDirectory::instant(),
            MockPaymentGateway::instant(),
            Duration::ZERO,
        )
    }

    fn render(session: &CheckoutSession) -> String {
        render_document(&SiteContent::default(), &session.snapshot().unwrap(), 2025)
    }

    #[test]
    fn test_marketing_sections_present() {
        let html = render(&session());
        assert!(html.contains("Ancient Cool.<br>Modern Fuel."));
        assert!(html.contains("Our Story"));
        assert!(html.contains("Science + Tradition"));
        assert!(html.contains("Good for the Gut. Great for the Gram."));
        assert!(html.contains("<th>Cola/Soda</th>"));
        assert!(html.contains("hello@sirikbeverage.com"));
        assert!(html.contains("&copy; 2025 SIRIK Beverage"));
        for label in ["Shop", "About", "Values", "Contact"] {
            assert!(html.contains(&format!(">{}</a>", label)));
        }
    }

    #[test]
    fn test_current_product_shown() {
        let mut session = session();
        session.next_product();
        let html = render(&session);
        assert!(html.contains("Ginger Zest"));
        assert!(html.contains("₹150.00"));
        assert!(html.contains("2 / 3"));
        assert!(!html.contains("data-panel"));
    }

    #[test]
    fn test_empty_cart_has_no_checkout_button() {
        let mut session = session();
        session.open_cart().unwrap();
        let html = render(&session);
        assert!(html.contains("Your cart is empty"));
        assert!(!html.contains("Proceed to Checkout"));
    }

    #[test]
    fn test_cart_panel_lists_lines() {
        let mut session = session();
        session.add_to_cart(ProductId::new(1), 3).unwrap();
        let html = render(&session);
        assert!(html.contains("Proceed to Checkout"));
        assert!(html.contains("₹80.00 &times; 3"));
        assert!(html.contains("₹240.00"));
        assert!(html.contains(r#"<span class="cart-badge">3</span>"#));
    }

    #[test]
    fn test_submit_disabled_until_resolved() {
        let mut session = session();
        session.add_to_cart(ProductId::new(1), 1).unwrap();
        session.proceed_to_checkout().unwrap();
        session.set_address_field(AddressField::Pincode, "600001").unwrap();
        let html = render(&session);
        assert!(html.contains(r#"class="continue" disabled>Continue to Payment"#));
        assert!(html.contains(r#"class="check-pincode">Check"#));
    }

    #[tokio::test]
    async fn test_resolved_pincode_enables_submit() {
        let mut session = session();
        session.add_to_cart(ProductId::new(1), 1).unwrap();
        session.proceed_to_checkout().unwrap();
        session.set_address_field(AddressField::Pincode, "600001").unwrap();
        session.check_pincode().await.unwrap();

        let html = render(&session);
        assert!(html.contains(r#"value="Chennai" readonly"#));
        assert!(html.contains(r#"class="continue">Continue to Payment"#));
    }

    #[test]
    fn test_pincode_message_rendered() {
        let mut session = session();
        session.add_to_cart(ProductId::new(1), 1).unwrap();
        session.proceed_to_checkout().unwrap();
        session.set_address_field(AddressField::Pincode, "12").unwrap();
        assert!(session.begin_pincode_check().is_err());

        let html = render(&session);
        assert!(html.contains("Please enter a valid 6-digit pincode"));
        assert!(html.contains(r#"class="check-pincode" disabled>"#));
    }

    #[test]
    fn test_user_input_is_escaped() {
        let mut session = session();
        session.add_to_cart(ProductId::new(1), 1).unwrap();
        session.proceed_to_checkout().unwrap();
        session.set_address_field(AddressField::Name, r#"<script>"x"</script>"#).unwrap();
        let html = render(&session);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;&quot;x&quot;&lt;/script&gt;"));
    }

    #[tokio::test]
    async fn test_confirmation_panel() {
        let mut session = session();
        session.add_to_cart(ProductId::new(2), 2).unwrap();
        session.proceed_to_checkout().unwrap();
        session.set_address_field(AddressField::Name, "Asha Rao").unwrap();
        session.set_address_field(AddressField::Phone, "9876543210").unwrap();
        session.set_address_field(AddressField::Address, "12 Temple Street").unwrap();
        session.set_address_field(AddressField::Pincode, "560001").unwrap();
        session.submit_address().await.unwrap();

        let payment = render(&session);
        assert!(payment.contains("Pay ₹300.00"));
        assert!(payment.contains("Bengaluru, Karnataka - 560001"));

        let details = PaymentDetails::new("4111 1111 1111 1111", "12/30", "123", "Asha Rao");
        session.pay(details).await.unwrap();
        let html = render(&session);
        assert!(html.contains("Payment Successful!"));
        assert!(html.contains("Order total: ₹300.00"));
    }

    #[test]
    fn test_site_content_json_defaults() {
        let content: SiteContent = serde_json::from_str(r#"{"title":"Preview"}"#).unwrap();
        assert_eq!(content.title, "Preview");
        assert_eq!(content.header, HeaderContent::default());
    }
}
