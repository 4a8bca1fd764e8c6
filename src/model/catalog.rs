//! Catalog types and the transforms that turn them into picker forests.
//!
//! Two catalogs feed the pickers: the location catalog (province →
//! municipality → sector → sub-sector) and the characteristic catalog
//! (category → option). Both arrive as JSON from the upstream API; the
//! transforms here build [`HierarchyNode`] forests whose ids are ancestor
//! slugs joined with `_`, which keeps every id unique across the whole
//! forest without any central registry.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{CascadaError, CascadaResult};
use crate::model::node::HierarchyNode;

/// Slug used for node ids: lowercased, whitespace runs collapsed to `-`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_gap = false;
    for ch in text.trim().chars() {
        if ch.is_whitespace() {
            in_gap = true;
            continue;
        }
        if in_gap && !slug.is_empty() {
            slug.push('-');
        }
        in_gap = false;
        for lower in ch.to_lowercase() {
            slug.push(lower);
        }
    }
    slug
}

// ---------------------------------------------------------------------------
// Location catalog
// ---------------------------------------------------------------------------

/// One sector with its (possibly empty) sub-sector names.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSector {
    pub barrio: String,
    #[serde(default)]
    pub sub_barrios: Vec<String>,
}

/// One municipality with its sectors.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMunicipality {
    pub nombre: String,
    #[serde(default)]
    pub sectores: Vec<RawSector>,
}

/// One province as shipped by the location catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProvince {
    pub provincia: String,
    #[serde(default)]
    pub municipios: Vec<RawMunicipality>,
}

/// Build the location forest: province → municipality → sector → sub-sector.
///
/// A sector with no sub-sectors becomes a leaf, so the picker bottoms out
/// one level earlier for it, with no empty fourth column.
pub fn location_forest(provinces: &[RawProvince]) -> Vec<HierarchyNode> {
    provinces
        .iter()
        .map(|province| {
            let province_id = slugify(&province.provincia);
            let municipalities = province
                .municipios
                .iter()
                .map(|municipality| {
                    let municipality_id =
                        format!("{}_{}", province_id, slugify(&municipality.nombre));
                    let sectors = municipality
                        .sectores
                        .iter()
                        .map(|sector| {
                            let sector_id =
                                format!("{}_{}", municipality_id, slugify(&sector.barrio));
                            let sub_sectors = sector
                                .sub_barrios
                                .iter()
                                .map(|sub| {
                                    HierarchyNode::leaf(
                                        format!("{}_{}", sector_id, slugify(sub)),
                                        sub.clone(),
                                    )
                                })
                                .collect();
                            HierarchyNode::branch(sector_id, sector.barrio.clone(), sub_sectors)
                        })
                        .collect();
                    HierarchyNode::branch(municipality_id, municipality.nombre.clone(), sectors)
                })
                .collect();
            HierarchyNode::branch(province_id, province.provincia.clone(), municipalities)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Characteristic catalog
// ---------------------------------------------------------------------------

/// Declared shape of a characteristic's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacteristicKind {
    Select,
    NumberRange,
    Boolean,
}

/// One option of a `select` characteristic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacteristicOption {
    pub label: String,
    pub value: String,
}

/// One characteristic as shipped by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Characteristic {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: CharacteristicKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CharacteristicOption>,
}

/// Typed view of the meta payload attached to characteristic option leaves.
///
/// The picker core treats meta as opaque JSON; consumers that need to map a
/// committed leaf back to a characteristic key/value deserialize into this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicRef {
    pub characteristic_id: String,
    pub value: String,
}

/// Options offered for a boolean characteristic.
const BOOLEAN_OPTIONS: [&str; 2] = ["Sí", "No"];

/// Build the characteristics forest: category → option.
///
/// `number_range` characteristics have no option tree (their min/max bounds
/// are edited directly through the amenity store), so they are left out of
/// the forest entirely.
pub fn characteristics_forest(characteristics: &[Characteristic]) -> Vec<HierarchyNode> {
    characteristics
        .iter()
        .filter_map(|characteristic| {
            let options: Vec<HierarchyNode> = match characteristic.kind {
                CharacteristicKind::Select => characteristic
                    .options
                    .iter()
                    .map(|option| option_leaf(&characteristic.id, &option.value, &option.label))
                    .collect(),
                CharacteristicKind::Boolean => BOOLEAN_OPTIONS
                    .iter()
                    .map(|value| option_leaf(&characteristic.id, value, value))
                    .collect(),
                CharacteristicKind::NumberRange => return None,
            };
            Some(HierarchyNode::branch(
                characteristic.id.clone(),
                characteristic.label.clone(),
                options,
            ))
        })
        .collect()
}

fn option_leaf(characteristic_id: &str, value: &str, label: &str) -> HierarchyNode {
    HierarchyNode::leaf_with_meta(
        format!("{}-{}", characteristic_id, value),
        label,
        json!({ "characteristicId": characteristic_id, "value": value }),
    )
}

// ---------------------------------------------------------------------------
// Property types
// ---------------------------------------------------------------------------

/// One property type (apartment, villa, lot, …).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyType {
    pub id: String,
    pub name: String,
}

/// Build the flat property-type forest: every type is a selectable leaf.
pub fn property_type_forest(types: &[PropertyType]) -> Vec<HierarchyNode> {
    types
        .iter()
        .map(|property_type| HierarchyNode::leaf(property_type.id.clone(), property_type.name.clone()))
        .collect()
}

// ---------------------------------------------------------------------------
// File loading
// ---------------------------------------------------------------------------

/// Load the location catalog from a JSON file.
pub fn load_locations(path: &Path) -> CascadaResult<Vec<RawProvince>> {
    parse_catalog(path)
}

/// Load the characteristic catalog from a JSON file.
pub fn load_characteristics(path: &Path) -> CascadaResult<Vec<Characteristic>> {
    parse_catalog(path)
}

/// Load the property-type catalog from a JSON file.
pub fn load_property_types(path: &Path) -> CascadaResult<Vec<PropertyType>> {
    parse_catalog(path)
}

fn parse_catalog<T: serde::de::DeserializeOwned>(path: &Path) -> CascadaResult<T> {
    if !path.exists() {
        return Err(CascadaError::CatalogNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| CascadaError::InvalidCatalog {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
