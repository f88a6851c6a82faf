//! Price variants derived from a product's base price.
//!
//! Variants are never stored: every call to [`variants_for`] rebuilds the full
//! set from the price it is given, so a variant list can never disagree with the
//! product it was derived from.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, ValueObject};

/// Identifier of a price variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantId {
    #[default]
    Default,
    Large,
    Premium,
}

impl VariantId {
    /// Every variant, in display order.
    pub const ALL: [VariantId; 3] = [VariantId::Default, VariantId::Large, VariantId::Premium];

    pub fn as_str(&self) -> &'static str {
        match self {
            VariantId::Default => "default",
            VariantId::Large => "large",
            VariantId::Premium => "premium",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            VariantId::Default => "Default",
            VariantId::Large => "Large",
            VariantId::Premium => "Premium",
        }
    }

    /// Factor applied to the base price.
    pub fn multiplier(&self) -> f64 {
        match self {
            VariantId::Default => 1.0,
            VariantId::Large => 1.2,
            VariantId::Premium => 1.5,
        }
    }
}

impl core::fmt::Display for VariantId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariantId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VariantId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| DomainError::unknown("variant", s))
    }
}

/// A name/price alternative for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    pub name: String,
    pub price: f64,
}

impl ValueObject for Variant {}

impl Variant {
    /// Price as displayed: the default variant shows the base price as given
    /// (`695`, `109.95`), scaled variants always show two decimals (`75.00`).
    pub fn price_label(&self) -> String {
        match self.id {
            VariantId::Default => format!("{}", self.price),
            _ => format!("{:.2}", self.price),
        }
    }

    /// Option text shown in the variant selector.
    pub fn option_label(&self) -> String {
        format!("{} - ${}", self.name, self.price_label())
    }
}

/// Round to two decimal places, working from the exact binary value.
///
/// `14.984999...` (the double nearest `9.99 * 1.5`) rounds down to `14.98`;
/// scaling by 100 first would land on an exact `.5` and round up. Exact ties
/// (values that are odd multiples of 1/8, such as `0.375`) round up.
pub fn round_to_cents(value: f64) -> f64 {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        return (value * 100.0 + 0.5).floor() / 100.0;
    }

    // `{:.2}` rounds the exact decimal expansion; no ties remain here.
    let fixed = format!("{value:.2}");
    fixed
        .parse()
        .unwrap_or_else(|_| (value * 100.0).round() / 100.0)
}

/// Derive the three variants for a base price.
///
/// The default variant carries the base price untouched; the others are
/// scaled and rounded to cents.
pub fn variants_for(base_price: f64) -> [Variant; 3] {
    VariantId::ALL.map(|id| {
        let price = match id {
            VariantId::Default => base_price,
            _ => round_to_cents(base_price * id.multiplier()),
        };
        Variant {
            id,
            name: id.name().to_string(),
            price,
        }
    })
}

/// The variant matching `selected`, or the first variant when none matches.
pub fn current_variant(variants: &[Variant; 3], selected: VariantId) -> &Variant {
    variants
        .iter()
        .find(|variant| variant.id == selected)
        .unwrap_or(&variants[0])
}
