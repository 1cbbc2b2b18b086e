//! Product catalog - the fixed set of templates a logo is rendered onto

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product template in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    #[serde(rename = "T-Shirt (White)")]
    TShirtWhite,
    #[serde(rename = "T-Shirt (Black)")]
    TShirtBlack,
    #[serde(rename = "Hoodie")]
    Hoodie,
    #[serde(rename = "Coffee Mug")]
    CoffeeMug,
    #[serde(rename = "Tote Bag")]
    ToteBag,
    #[serde(rename = "Cap")]
    Cap,
    #[serde(rename = "Phone Case")]
    PhoneCase,
}

impl ProductType {
    /// All products in catalog order.
    pub const ALL: [ProductType; 7] = [
        Self::TShirtWhite,
        Self::TShirtBlack,
        Self::Hoodie,
        Self::CoffeeMug,
        Self::ToteBag,
        Self::Cap,
        Self::PhoneCase,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::TShirtWhite => "T-Shirt (White)",
            Self::TShirtBlack => "T-Shirt (Black)",
            Self::Hoodie => "Hoodie",
            Self::CoffeeMug => "Coffee Mug",
            Self::ToteBag => "Tote Bag",
            Self::Cap => "Cap",
            Self::PhoneCase => "Phone Case",
        }
    }

    /// Lowercased display name with whitespace runs collapsed to `-`.
    ///
    /// `T-Shirt (White)` becomes `t-shirt-(white)`.
    pub fn file_slug(&self) -> String {
        self.display_name()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Instruction used for the initial render of this product.
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::TShirtWhite => {
                "Create a photorealistic product mockup of a plain white crew-neck cotton t-shirt. \
                 Print the provided logo centered on the chest so it follows the fabric folds, \
                 with soft studio lighting and a clean neutral background."
            }
            Self::TShirtBlack => {
                "Create a photorealistic product mockup of a plain black crew-neck cotton t-shirt. \
                 Print the provided logo centered on the chest with realistic ink texture on dark \
                 fabric, soft studio lighting and a clean neutral background."
            }
            Self::Hoodie => {
                "Create a photorealistic product mockup of a heather grey pullover hoodie with a \
                 front pocket. Place the provided logo on the chest above the pocket as a screen \
                 print, with natural fabric wrinkles and studio lighting."
            }
            Self::CoffeeMug => {
                "Create a photorealistic product mockup of a glossy white ceramic coffee mug on a \
                 wooden table. Wrap the provided logo around the visible side of the mug with \
                 correct curvature and subtle reflections."
            }
            Self::ToteBag => {
                "Create a photorealistic product mockup of a natural canvas tote bag hanging \
                 against a light wall. Print the provided logo in the middle of the bag with \
                 visible canvas weave texture."
            }
            Self::Cap => {
                "Create a photorealistic product mockup of a structured baseball cap shown at a \
                 slight angle. Place the provided logo on the front panel as a raised embroidery \
                 with realistic stitching."
            }
            Self::PhoneCase => {
                "Create a photorealistic product mockup of a matte smartphone case seen from the \
                 back. Print the provided logo in the center of the case, keeping the camera \
                 cutout visible, with clean product-shot lighting."
            }
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One catalog entry: the product and the instruction used to render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTemplate {
    pub product: ProductType,
    pub instruction: String,
}

impl ProductTemplate {
    pub fn new(product: ProductType, instruction: impl Into<String>) -> Self {
        Self {
            product,
            instruction: instruction.into(),
        }
    }
}

/// The fixed product catalog, in catalog order.
pub fn product_catalog() -> Vec<ProductTemplate> {
    ProductType::ALL
        .iter()
        .map(|product| ProductTemplate::new(*product, product.instruction()))
        .collect()
}
