use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::product::{FieldMap, SemanticField};

struct FieldRule {
    field: SemanticField,
    matcher: &'static LazyLock<Regex>,
    default_header: &'static str,
}

// `.` stands in for accented vowels so exports in either encoding still match.
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)art.culo").unwrap());
static DESCRIPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)descripci.n.*art.culo").unwrap());
static WAREHOUSE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^bodega$").unwrap());
static WAREHOUSE_DESC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)descripci.n.*bodega").unwrap());
static CLASSIFICATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)clasificacion1").unwrap());
static STOCK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)cant.*disp").unwrap());
static PRICE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)precio_venta").unwrap());

static FIELD_RULES: [FieldRule; 7] = [
    FieldRule {
        field: SemanticField::Code,
        matcher: &CODE_RE,
        default_header: "Artículo",
    },
    FieldRule {
        field: SemanticField::Description,
        matcher: &DESCRIPTION_RE,
        default_header: "Descripción Artículo",
    },
    FieldRule {
        field: SemanticField::Warehouse,
        matcher: &WAREHOUSE_RE,
        default_header: "Bodega",
    },
    FieldRule {
        field: SemanticField::WarehouseDesc,
        matcher: &WAREHOUSE_DESC_RE,
        default_header: "Descripción Bodega",
    },
    FieldRule {
        field: SemanticField::Classification,
        matcher: &CLASSIFICATION_RE,
        default_header: "Clasificacion1",
    },
    FieldRule {
        field: SemanticField::Stock,
        matcher: &STOCK_RE,
        default_header: "Cant. Disponible",
    },
    FieldRule {
        field: SemanticField::Price,
        matcher: &PRICE_RE,
        default_header: "PRECIO_VENTA",
    },
];

pub fn default_header(field: SemanticField) -> &'static str {
    FIELD_RULES
        .iter()
        .find(|rule| rule.field == field)
        .map(|rule| rule.default_header)
        .unwrap_or_default()
}

pub fn default_field_map() -> FieldMap {
    FieldMap {
        code: default_header(SemanticField::Code).to_string(),
        description: default_header(SemanticField::Description).to_string(),
        warehouse: default_header(SemanticField::Warehouse).to_string(),
        warehouse_desc: default_header(SemanticField::WarehouseDesc).to_string(),
        classification: default_header(SemanticField::Classification).to_string(),
        stock: default_header(SemanticField::Stock).to_string(),
        price: default_header(SemanticField::Price).to_string(),
    }
}

/// Picks, for every semantic field, the first header in declaration order that
/// matches its pattern. Unmatched fields keep their literal default name.
pub fn resolve_field_map<S: AsRef<str>>(headers: &[S]) -> FieldMap {
    let mut map = default_field_map();
    for rule in &FIELD_RULES {
        let found = headers
            .iter()
            .map(|header| header.as_ref())
            .find(|header| rule.matcher.is_match(header));
        match found {
            Some(header) => *map.header_mut(rule.field) = header.to_string(),
            None => log::debug!(
                "no header matched field {}; using default {:?}",
                rule.field.name(),
                rule.default_header
            ),
        }
    }
    map
}
