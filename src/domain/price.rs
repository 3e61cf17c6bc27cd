// src/domain/price.rs

//! Price labels and price-range buckets.
//!
//! Listing prices arrive as display strings with the unit baked in
//! ("₹1.25 Cr", "₹85 L", "₹55,000/mo"). Everything here maps them onto a
//! single axis measured in lakhs so sale prices and rents can be compared.
//! Nothing in this module fails: unreadable input reads as zero (prices)
//! or as an open bound (bucket labels).

/// One lakh, in rupees.
pub const LAKH: f64 = 100_000.0;

/// Lakhs per crore.
pub const LAKHS_PER_CRORE: f64 = 100.0;

const RUPEE: char = '₹';
const MONTHLY_SUFFIX: &str = "/mo";
const RANGE_SEPARATOR: &str = " - ";
const OPEN_ENDED_MARKER: &str = "Cr+";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceUnit {
    Crore,
    Lakh,
    Rupee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Periodicity {
    OneTime,
    Monthly,
}

/// Structured form of a display price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceTag {
    pub amount: f64,
    pub unit: PriceUnit,
    pub periodicity: Periodicity,
}

impl PriceTag {
    /// Read a display price. Returns `None` when no numeric literal is present.
    ///
    /// A bare rupee amount (no `Cr`/`L`) is always read as a monthly rent,
    /// with or without the `/mo` suffix.
    pub fn parse(label: &str) -> Option<Self> {
        let clean = label.replace(RUPEE, "").replace(MONTHLY_SUFFIX, "");
        let amount = leading_decimal(&clean)?;

        let unit = unit_of(&clean);
        let periodicity = if unit == PriceUnit::Rupee || label.contains(MONTHLY_SUFFIX) {
            Periodicity::Monthly
        } else {
            Periodicity::OneTime
        };

        Some(Self {
            amount,
            unit,
            periodicity,
        })
    }

    /// Value on the lakh scale. Crore and lakh amounts are taken as-is,
    /// rupee amounts are monthly rents and get annualized first.
    pub fn in_lakhs(&self) -> f64 {
        match self.unit {
            PriceUnit::Crore => self.amount * LAKHS_PER_CRORE,
            PriceUnit::Lakh => self.amount,
            PriceUnit::Rupee => (self.amount * 12.0) / LAKH,
        }
    }
}

/// Normalize a display price to lakhs. Malformed input yields `0.0`.
pub fn normalize_price(label: &str) -> f64 {
    PriceTag::parse(label)
        .map(|tag| tag.in_lakhs())
        .unwrap_or(0.0)
}

/// An inclusive `[lower, upper]` interval on the lakh scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub lower: f64,
    pub upper: f64,
}

impl PriceRange {
    /// Parse a bucket label such as `"₹50L - ₹1Cr"` or `"₹5Cr - ₹10Cr+"`.
    ///
    /// Bounds are never annualized. A lower bound that is not a crore or
    /// lakh amount reads as 0; an upper bound that is not one, or that
    /// carries the `Cr+` marker, is unbounded. A label without a separator
    /// (`"₹10Cr+"`) is a lower bound with no upper limit.
    pub fn parse(label: &str) -> Self {
        let (lower, upper) = match label.split_once(RANGE_SEPARATOR) {
            Some((lower, upper)) => (lower, Some(upper)),
            None => (label, None),
        };

        let lower = bound_value(lower).unwrap_or(0.0);
        let upper = match upper {
            Some(token) if !token.contains(OPEN_ENDED_MARKER) => {
                bound_value(token).unwrap_or(f64::INFINITY)
            }
            _ => f64::INFINITY,
        };

        Self { lower, upper }
    }

    pub fn contains(&self, lakhs: f64) -> bool {
        lakhs >= self.lower && lakhs <= self.upper
    }
}

/// True when `price` falls inside the bucket described by `range_label`.
pub fn in_price_range(price: &str, range_label: &str) -> bool {
    PriceRange::parse(range_label).contains(normalize_price(price))
}

fn unit_of(clean: &str) -> PriceUnit {
    if clean.contains("Cr") {
        PriceUnit::Crore
    } else if clean.contains('L') {
        PriceUnit::Lakh
    } else {
        PriceUnit::Rupee
    }
}

fn bound_value(token: &str) -> Option<f64> {
    let amount = leading_decimal(token)?;
    match unit_of(token) {
        PriceUnit::Crore => Some(amount * LAKHS_PER_CRORE),
        PriceUnit::Lakh => Some(amount),
        PriceUnit::Rupee => None,
    }
}

/// Keep digits and dots, then read the longest leading decimal literal.
/// "55,000" reads 55000, "1.2.3" reads 1.2, "." reads nothing.
fn leading_decimal(s: &str) -> Option<f64> {
    let digits: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in digits.char_indices() {
        if c == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        }
        end = i + 1;
    }

    digits[..end].parse::<f64>().ok()
}
