//! Environment-driven configuration.

use anyhow::{Context, bail};
use chrono::{Local, NaiveDate};

use stockroom_inventory::{DEFAULT_ITEM_CAPACITY, DEFAULT_STAFF_CAPACITY};

pub const MAX_ITEMS_VAR: &str = "STOCKROOM_MAX_ITEMS";
pub const MAX_STAFF_VAR: &str = "STOCKROOM_MAX_STAFF";
pub const TODAY_VAR: &str = "STOCKROOM_TODAY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Catalog capacity.
    pub max_items: usize,
    /// Staff directory capacity.
    pub max_staff: usize,
    /// Fixed "today" for warranty reports; `None` means the local date.
    pub today: Option<NaiveDate>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_ITEM_CAPACITY,
            max_staff: DEFAULT_STAFF_CAPACITY,
            today: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let max_items = match lookup(MAX_ITEMS_VAR) {
            Some(raw) => parse_capacity(MAX_ITEMS_VAR, &raw)?,
            None => defaults.max_items,
        };
        let max_staff = match lookup(MAX_STAFF_VAR) {
            Some(raw) => parse_capacity(MAX_STAFF_VAR, &raw)?,
            None => defaults.max_staff,
        };
        let today = lookup(TODAY_VAR)
            .map(|raw| {
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .with_context(|| format!("{TODAY_VAR} must be a YYYY-MM-DD date, got {raw:?}"))
            })
            .transpose()?;

        Ok(Self {
            max_items,
            max_staff,
            today,
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

fn parse_capacity(var: &str, raw: &str) -> anyhow::Result<usize> {
    let value: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("{var} must be a positive integer, got {raw:?}"))?;
    if value == 0 {
        bail!("{var} must be greater than zero");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.max_items, 100);
        assert_eq!(config.max_staff, 50);
    }

    #[test]
    fn values_are_read_from_the_environment() {
        let config = AppConfig::from_lookup(lookup(&[
            (MAX_ITEMS_VAR, "10"),
            (MAX_STAFF_VAR, " 3 "),
            (TODAY_VAR, "2025-02-28"),
        ]))
        .unwrap();

        assert_eq!(config.max_items, 10);
        assert_eq!(config.max_staff, 3);
        assert_eq!(config.today(), NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = AppConfig::from_lookup(lookup(&[(MAX_ITEMS_VAR, "lots")])).unwrap_err();
        assert!(err.to_string().contains(MAX_ITEMS_VAR));

        let err = AppConfig::from_lookup(lookup(&[(MAX_STAFF_VAR, "0")])).unwrap_err();
        assert!(err.to_string().contains("greater than zero"));

        let err = AppConfig::from_lookup(lookup(&[(TODAY_VAR, "28/02/2025")])).unwrap_err();
        assert!(err.to_string().contains(TODAY_VAR));
    }
}
