//! Copy for each landing page section.

use serde::{Deserialize, Serialize};

/// An in-page navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub anchor: String,
}

impl NavLink {
    pub fn new(label: &str, anchor: &str) -> Self {
        Self {
            label: label.to_string(),
            anchor: anchor.to_string(),
        }
    }
}

/// Header bar content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderContent {
    pub brand: String,
    pub links: Vec<NavLink>,
    pub cta_text: String,
    pub cta_anchor: String,
}

impl Default for HeaderContent {
    fn default() -> Self {
        Self {
            brand: "SIRIK".to_string(),
            links: vec![
                NavLink::new("Shop", "products"),
                NavLink::new("About", "about"),
                NavLink::new("Values", "values"),
                NavLink::new("Contact", "contact"),
            ],
            cta_text: "Shop Now".to_string(),
            cta_anchor: "products".to_string(),
        }
    }
}

/// Hero banner content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    /// One entry per rendered line.
    pub headline: Vec<String>,
    pub subheadline: String,
    pub poster_image: Option<String>,
    pub primary_cta: NavLink,
    pub secondary_cta: NavLink,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            headline: vec!["Ancient Cool.".to_string(), "Modern Fuel.".to_string()],
            subheadline: "Indian roots. Global glow-up. Low sugar. Prebiotic. Vegan. Big vibe."
                .to_string(),
            poster_image: Some(
                "https://res.cloudinary.com/dnbqgzh4t/image/upload/v1749029292/hiqzd2zatgky8pg9e4cv.jpg"
                    .to_string(),
            ),
            primary_cta: NavLink::new("Shop Now", "products"),
            secondary_cta: NavLink::new("Learn More", "about"),
        }
    }
}

/// A titled block of prose with an image and a closing highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryBlock {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub highlight: String,
    pub image: String,
    pub image_alt: String,
}

/// "Our Story" section: brand story then founder story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    pub section_title: String,
    pub brand: StoryBlock,
    pub founder: StoryBlock,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            section_title: "Our Story".to_string(),
            brand: StoryBlock {
                title: "Born From Cravings. Built Without Compromise.".to_string(),
                paragraphs: vec![
                    "SIRIK was created as a revolutionary soda alternative that combines ancient wisdom with modern science. We use real ingredients like Nannari root, add zero sugar, and avoid all preservatives to deliver clean, refreshing flavors.".to_string(),
                    "Our mission isn't about canceling soda, it's about redefining it. We believe you deserve drinks that are both delicious and beneficial, without the guilt or artificial ingredients found in conventional sodas.".to_string(),
                ],
                highlight: "Each can of SIRIK is crafted to provide a moment of joy that's good for your body and your taste buds.".to_string(),
                image: "https://images.pexels.com/photos/5947020/pexels-photo-5947020.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string(),
                image_alt: "SIRIK Beverage Production".to_string(),
            },
            founder: StoryBlock {
                title: "Meet the Mind Behind the Madness".to_string(),
                paragraphs: vec![
                    "Growing up, Srikar YS was fascinated by the homemade Nannari drinks his family prepared: sweet, earthy, and incredibly refreshing. But as an engineer with a fast-paced lifestyle, he grew frustrated with the market's offerings: either sugar-loaded sodas or bland \"healthy\" alternatives.".to_string(),
                    "This frustration sparked an idea: What if he could recreate those authentic flavors from his childhood, but in a modern, convenient format without the sugar crash? After years of experimentation, SIRIK was born.".to_string(),
                ],
                highlight: "\"SIRIK isn't here to ride a health trend. We're here to start a clean soda revolution.\"".to_string(),
                image: "https://res.cloudinary.com/dnbqgzh4t/image/upload/v1749027629/raargd3djhdrycti37ci.avif".to_string(),
                image_alt: "SIRIK Founder".to_string(),
            },
        }
    }
}

/// A brand value card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandValue {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl BrandValue {
    pub fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuesContent {
    pub section_title: String,
    pub section_subtitle: String,
    pub values: Vec<BrandValue>,
}

impl Default for ValuesContent {
    fn default() -> Self {
        Self {
            section_title: "Our Values".to_string(),
            section_subtitle: "These core principles guide everything we do, from sourcing ingredients to designing our products and interacting with our community.".to_string(),
            values: vec![
                BrandValue::new(
                    "leaf",
                    "Real Roots",
                    "We source authentic ingredients with cultural significance, like Nannari root, creating flavors with genuine heritage and purpose.",
                ),
                BrandValue::new(
                    "zap",
                    "Modern Fuel",
                    "Our drinks are designed to energize naturally, without the crash that comes from artificial ingredients and excessive sugar.",
                ),
                BrandValue::new(
                    "heart",
                    "No Harmful Ingredients",
                    "We proudly leave out artificial sweeteners, preservatives, and other additives that don't belong in your body.",
                ),
                BrandValue::new(
                    "flask",
                    "Science + Tradition",
                    "We marry ancient herbal wisdom with modern nutritional science to create beverages that honor the past while embracing the future.",
                ),
            ],
        }
    }
}

/// One row of the comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub criterion: String,
    pub sirik: bool,
    pub cola: bool,
    pub herbal_juice: bool,
}

impl ComparisonRow {
    pub fn new(criterion: &str, sirik: bool, cola: bool, herbal_juice: bool) -> Self {
        Self {
            criterion: criterion.to_string(),
            sirik,
            cola,
            herbal_juice,
        }
    }
}

/// Product section framing. The products themselves come from the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductsContent {
    pub section_title: String,
    pub tagline: String,
    pub comparison_title: String,
    pub comparison: Vec<ComparisonRow>,
}

impl Default for ProductsContent {
    fn default() -> Self {
        Self {
            section_title: "Our Products".to_string(),
            tagline: "Good for the Gut. Great for the Gram.".to_string(),
            comparison_title: "Compare With Sugary Soft Drinks".to_string(),
            comparison: vec![
                ComparisonRow::new("Low Sugar", true, false, true),
                ComparisonRow::new("Gut-Friendly Prebiotics", true, false, true),
                ComparisonRow::new("Preservative-Free", true, false, true),
                ComparisonRow::new("Ancient Ingredients", true, false, true),
                ComparisonRow::new("Light, Fizzy Format", true, true, false),
            ],
        }
    }
}

/// A way to reach the brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactChannel {
    pub label: String,
    pub note: String,
    pub value: String,
    pub href: Option<String>,
}

impl ContactChannel {
    pub fn new(label: &str, note: &str, value: &str, href: Option<&str>) -> Self {
        Self {
            label: label.to_string(),
            note: note.to_string(),
            value: value.to_string(),
            href: href.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactContent {
    pub section_title: String,
    pub section_subtitle: String,
    pub inquiry_types: Vec<String>,
    pub channels: Vec<ContactChannel>,
}

impl Default for ContactContent {
    fn default() -> Self {
        Self {
            section_title: "Let's Talk, Let's Collab".to_string(),
            section_subtitle:
                "Got questions? Feedback? Want to collaborate? We'd love to hear from you!"
                    .to_string(),
            inquiry_types: ["Wholesale Inquiry", "Feedback", "Press", "Other"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            channels: vec![
                ContactChannel::new(
                    "WhatsApp",
                    "Quick response during business hours",
                    "+91 98765 43210",
                    None,
                ),
                ContactChannel::new(
                    "Email",
                    "For inquiries and collaborations",
                    "hello@sirikbeverage.com",
                    Some("mailto:hello@sirikbeverage.com"),
                ),
                ContactChannel::new(
                    "Instagram",
                    "Follow us for updates and behind-the-scenes",
                    "@sirikbeverage",
                    None,
                ),
                ContactChannel::new("Location", "Crafted with pride in", "Bengaluru, India", None),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterContent {
    pub blurb: String,
    pub quick_links: Vec<NavLink>,
    pub newsletter_note: String,
    pub copyright_holder: String,
    pub made_in: String,
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            blurb: "Redefining soda with ancient wisdom and modern science. Refreshing, clean, and good for you.".to_string(),
            quick_links: vec![
                NavLink::new("Home", "home"),
                NavLink::new("About Us", "about"),
                NavLink::new("Products", "products"),
                NavLink::new("Contact", "contact"),
            ],
            newsletter_note: "Subscribe to our newsletter for updates, promotions, and more."
                .to_string(),
            copyright_holder: "SIRIK Beverage".to_string(),
            made_in: "Bengaluru".to_string(),
        }
    }
}

/// Complete page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub title: String,
    pub header: HeaderContent,
    pub hero: HeroContent,
    pub about: AboutContent,
    pub values: ValuesContent,
    pub products: ProductsContent,
    pub contact: ContactContent,
    pub footer: FooterContent,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            title: "SIRIK | Ancient Cool. Modern Fuel.".to_string(),
            header: HeaderContent::default(),
            hero: HeroContent::default(),
            about: AboutContent::default(),
            values: ValuesContent::default(),
            products: ProductsContent::default(),
            contact: ContactContent::default(),
            footer: FooterContent::default(),
        }
    }
}
