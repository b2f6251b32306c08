//! Category Model
//!
//! Two-level classification: every [`Subcategory`] belongs to exactly one
//! [`Category`]. The parent is fixed and derived, never chosen independently.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Gaming,
    Office,
    Mobile,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Gaming, Category::Office, Category::Mobile];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gaming => "gaming",
            Self::Office => "office",
            Self::Mobile => "mobile",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Gaming => "Gaming",
            Self::Office => "Office",
            Self::Mobile => "Mobile",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Gaming => "Gaming Peripherals & Accessories",
            Self::Office => "Office Equipment & Productivity Tools",
            Self::Mobile => "Mobile Accessories & Gadgets",
        }
    }

    /// Subcategories whose parent is this category
    pub fn subcategories(&self) -> impl Iterator<Item = Subcategory> + '_ {
        Subcategory::ALL
            .into_iter()
            .filter(move |sub| sub.parent() == *self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category or subcategory name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownCategory {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory {
                kind: "category",
                value: s.to_string(),
            })
    }
}

/// Fine-grained product classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subcategory {
    Mouse,
    Keyboard,
    Headset,
    Webcam,
    Monitor,
    Speaker,
    Microphone,
    Powerbank,
    Cable,
    Storage,
    Computer,
    Laptop,
}

impl Subcategory {
    pub const ALL: [Subcategory; 12] = [
        Subcategory::Mouse,
        Subcategory::Keyboard,
        Subcategory::Headset,
        Subcategory::Webcam,
        Subcategory::Monitor,
        Subcategory::Speaker,
        Subcategory::Microphone,
        Subcategory::Powerbank,
        Subcategory::Cable,
        Subcategory::Storage,
        Subcategory::Computer,
        Subcategory::Laptop,
    ];

    /// The fixed parent category
    pub const fn parent(&self) -> Category {
        match self {
            Self::Mouse | Self::Keyboard | Self::Headset => Category::Gaming,
            Self::Webcam
            | Self::Monitor
            | Self::Speaker
            | Self::Microphone
            | Self::Storage
            | Self::Computer
            | Self::Laptop => Category::Office,
            Self::Powerbank | Self::Cable => Category::Mobile,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mouse => "mouse",
            Self::Keyboard => "keyboard",
            Self::Headset => "headset",
            Self::Webcam => "webcam",
            Self::Monitor => "monitor",
            Self::Speaker => "speaker",
            Self::Microphone => "microphone",
            Self::Powerbank => "powerbank",
            Self::Cable => "cable",
            Self::Storage => "storage",
            Self::Computer => "computer",
            Self::Laptop => "laptop",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mouse => "Mouse",
            Self::Keyboard => "Keyboard",
            Self::Headset => "Headset",
            Self::Webcam => "Webcam",
            Self::Monitor => "Monitor",
            Self::Speaker => "Speaker",
            Self::Microphone => "Microphone",
            Self::Powerbank => "Power Bank",
            Self::Cable => "Cable",
            Self::Storage => "Storage",
            Self::Computer => "Computer",
            Self::Laptop => "Laptop",
        }
    }
}

impl fmt::Display for Subcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subcategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory {
                kind: "subcategory",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_subcategory_has_one_parent() {
        let gaming: Vec<_> = Category::Gaming.subcategories().collect();
        let office: Vec<_> = Category::Office.subcategories().collect();
        let mobile: Vec<_> = Category::Mobile.subcategories().collect();

        assert_eq!(
            gaming,
            vec![Subcategory::Mouse, Subcategory::Keyboard, Subcategory::Headset]
        );
        assert_eq!(office.len(), 7);
        assert_eq!(mobile, vec![Subcategory::Powerbank, Subcategory::Cable]);
        assert_eq!(gaming.len() + office.len() + mobile.len(), 12);
    }

    #[test]
    fn test_webcam_belongs_to_office() {
        assert_eq!(Subcategory::Webcam.parent(), Category::Office);
        assert_eq!(Subcategory::Storage.parent(), Category::Office);
        assert_eq!(Subcategory::Cable.parent(), Category::Mobile);
    }

    #[test]
    fn test_parse_and_serde() {
        assert_eq!("laptop".parse::<Subcategory>(), Ok(Subcategory::Laptop));
        assert_eq!("mobile".parse::<Category>(), Ok(Category::Mobile));
        assert!("accessories".parse::<Subcategory>().is_err());

        let json = serde_json::to_string(&Subcategory::Powerbank).unwrap();
        assert_eq!(json, "\"powerbank\"");
        assert_eq!(Subcategory::Powerbank.label(), "Power Bank");
    }
}
