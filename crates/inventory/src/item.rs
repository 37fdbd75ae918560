use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ItemId};

use crate::price::{Price, round_cents};

/// Item category tag. Each category has a fixed maintenance-fee rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Equipment,
    Furniture,
    LabEquipment,
}

impl ItemCategory {
    /// Share of the purchase price charged as maintenance fee.
    pub fn rate(self) -> f64 {
        match self {
            ItemCategory::Equipment => 0.05,
            ItemCategory::Furniture => 0.02,
            ItemCategory::LabEquipment => 0.10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ItemCategory::Equipment => "Equipment",
            ItemCategory::Furniture => "Furniture",
            ItemCategory::LabEquipment => "LabEquipment",
        }
    }
}

/// Category-specific attributes of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ItemKind {
    /// General equipment (laptops, projectors, ...).
    Equipment { brand: String },
    Furniture { material: String },
    LabEquipment { lab_category: String },
}

impl ItemKind {
    pub fn category(&self) -> ItemCategory {
        match self {
            ItemKind::Equipment { .. } => ItemCategory::Equipment,
            ItemKind::Furniture { .. } => ItemCategory::Furniture,
            ItemKind::LabEquipment { .. } => ItemCategory::LabEquipment,
        }
    }

    /// The category attribute's display label and value.
    fn attribute(&self) -> (&'static str, &str) {
        match self {
            ItemKind::Equipment { brand } => ("Brand", brand),
            ItemKind::Furniture { material } => ("Material", material),
            ItemKind::LabEquipment { lab_category } => ("Lab Type", lab_category),
        }
    }
}

/// Attributes common to every item, as supplied by the caller at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub id: String,
    pub name: String,
    pub purchase_date: NaiveDate,
    pub price: f64,
    pub warranty_end: NaiveDate,
}

/// A catalogued inventory item.
///
/// The identifier is fixed at creation. `available` is the single source of
/// truth for whether the item may be assigned; it is only toggled by staff
/// assignment and return.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryItem {
    id: ItemId,
    name: String,
    purchase_date: NaiveDate,
    price: Price,
    warranty_end: NaiveDate,
    available: bool,
    kind: ItemKind,
}

impl InventoryItem {
    /// Validate and build an item. New items are always available.
    pub fn new(details: NewItem, kind: ItemKind) -> DomainResult<Self> {
        let id = ItemId::new(details.id)
            .map_err(|_| DomainError::invalid_item("item id cannot be blank"))?;
        let name = non_blank(details.name, "item name")?;
        let price = Price::new(details.price)?;
        let kind = match kind {
            ItemKind::Equipment { brand } => ItemKind::Equipment {
                brand: non_blank(brand, "brand")?,
            },
            ItemKind::Furniture { material } => ItemKind::Furniture {
                material: non_blank(material, "material")?,
            },
            ItemKind::LabEquipment { lab_category } => ItemKind::LabEquipment {
                lab_category: non_blank(lab_category, "lab category")?,
            },
        };

        Ok(Self {
            id,
            name,
            purchase_date: details.purchase_date,
            price,
            warranty_end: details.warranty_end,
            available: true,
            kind,
        })
    }

    pub fn equipment(
        id: impl Into<String>,
        name: impl Into<String>,
        brand: impl Into<String>,
        purchase_date: NaiveDate,
        price: f64,
        warranty_end: NaiveDate,
    ) -> DomainResult<Self> {
        Self::new(
            NewItem {
                id: id.into(),
                name: name.into(),
                purchase_date,
                price,
                warranty_end,
            },
            ItemKind::Equipment {
                brand: brand.into(),
            },
        )
    }

    pub fn furniture(
        id: impl Into<String>,
        name: impl Into<String>,
        material: impl Into<String>,
        purchase_date: NaiveDate,
        price: f64,
        warranty_end: NaiveDate,
    ) -> DomainResult<Self> {
        Self::new(
            NewItem {
                id: id.into(),
                name: name.into(),
                purchase_date,
                price,
                warranty_end,
            },
            ItemKind::Furniture {
                material: material.into(),
            },
        )
    }

    pub fn lab_equipment(
        id: impl Into<String>,
        name: impl Into<String>,
        lab_category: impl Into<String>,
        purchase_date: NaiveDate,
        price: f64,
        warranty_end: NaiveDate,
    ) -> DomainResult<Self> {
        Self::new(
            NewItem {
                id: id.into(),
                name: name.into(),
                purchase_date,
                price,
                warranty_end,
            },
            ItemKind::LabEquipment {
                lab_category: lab_category.into(),
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the item's name. Blank names are rejected.
    pub fn rename(&mut self, name: impl Into<String>) -> DomainResult<()> {
        self.name = non_blank(name.into(), "item name")?;
        Ok(())
    }

    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn warranty_end(&self) -> NaiveDate {
        self.warranty_end
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn category(&self) -> ItemCategory {
        self.kind.category()
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Maintenance fee: purchase price times the category rate. Never stored.
    pub fn maintenance_fee(&self) -> f64 {
        self.price.amount() * self.category().rate()
    }

    /// Whether the warranty ended strictly before `today`.
    pub fn is_warranty_expired(&self, today: NaiveDate) -> bool {
        self.warranty_end < today
    }

    /// Human-readable one-line rendering, for display only.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (label, value) = self.kind.attribute();
        write!(
            f,
            "[{}] ID: {}, Name: {}, Price: {}, Purchased: {}, Warranty End: {}, Available: {}, {}: {}, Maintenance Fee: {:.2}",
            self.category().label(),
            self.id,
            self.name,
            self.price,
            self.purchase_date,
            self.warranty_end,
            self.available,
            label,
            value,
            round_cents(self.maintenance_fee()),
        )
    }
}

fn non_blank(value: String, field: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::invalid_item(format!("{field} cannot be blank")));
    }
    Ok(trimmed.to_string())
}
