//! Builders assembling item lists from domain entities

use tracing::debug;

use super::{BreadcrumbList, Carousel, ListItem};
use crate::error::{Error, Result};
use crate::thing::Thing;
use crate::value::Value;

/// Kinds Google renders as carousel items.
const CAROUSEL_ITEM_TYPES: &[&str] = &["Course", "Movie", "Recipe", "Restaurant"];

fn carousel_mismatch() -> Error {
    Error::TypeMismatch {
        property: "itemListElement".to_string(),
        expected: CAROUSEL_ITEM_TYPES.iter().map(|name| name.to_string()).collect(),
    }
}

fn is_carousel_item(thing: &Thing) -> bool {
    CAROUSEL_ITEM_TYPES.iter().any(|name| thing.is_a(name))
}

/// Every list element of a carousel wraps a Course, Movie, Recipe or Restaurant.
pub(super) fn check_carousel_items(carousel: &Thing) -> Result<()> {
    let elements = match carousel.get("itemListElement") {
        None => return Ok(()),
        Some(Value::List(items)) => items.as_slice(),
        Some(single) => std::slice::from_ref(single),
    };
    for element in elements {
        let item = match element.as_entity() {
            Some(list_item) if list_item.is_a("ListItem") => list_item.get("item"),
            _ => Some(element),
        };
        match item.and_then(Value::as_entity) {
            Some(thing) if is_carousel_item(thing) => {}
            _ => return Err(carousel_mismatch()),
        }
    }
    Ok(())
}

impl Carousel {
    /// Wrap `items` into positioned list items, numbered from 1 in input order.
    ///
    /// # Errors
    /// Returns a type error if an item is not a Course, Movie, Recipe or
    /// Restaurant.
    pub fn new(items: impl IntoIterator<Item = Thing>) -> Result<Thing> {
        let elements = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                if !is_carousel_item(&item) {
                    debug!(kind = %item.kind(), "rejected carousel item");
                    return Err(carousel_mismatch());
                }
                ListItem::builder()
                    .prop("position", index as i64 + 1)
                    .prop("item", item)
                    .build()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::builder().prop("itemListElement", elements).build()
    }
}

impl BreadcrumbList {
    /// Build a breadcrumb from `(name, url)` pairs, root first.
    ///
    /// The last crumb is the current page and may omit its URL.
    pub fn from_trail<'a>(
        trail: impl IntoIterator<Item = (&'a str, Option<&'a str>)>,
    ) -> Result<Thing> {
        let elements = trail
            .into_iter()
            .enumerate()
            .map(|(index, (name, url))| {
                ListItem::builder()
                    .prop("name", name)
                    .prop("position", index as i64 + 1)
                    .prop("item", url)
                    .build()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(elements).build()
    }
}
