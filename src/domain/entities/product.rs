#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SemanticField {
    Code,
    Description,
    Warehouse,
    WarehouseDesc,
    Classification,
    Stock,
    Price,
}

impl SemanticField {
    pub fn name(self) -> &'static str {
        match self {
            SemanticField::Code => "code",
            SemanticField::Description => "description",
            SemanticField::Warehouse => "warehouse",
            SemanticField::WarehouseDesc => "warehouseDesc",
            SemanticField::Classification => "classification",
            SemanticField::Stock => "stock",
            SemanticField::Price => "price",
        }
    }
}

/// Source header chosen for each semantic field of one ingested table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMap {
    pub code: String,
    pub description: String,
    pub warehouse: String,
    pub warehouse_desc: String,
    pub classification: String,
    pub stock: String,
    pub price: String,
}

impl FieldMap {
    pub fn header(&self, field: SemanticField) -> &str {
        match field {
            SemanticField::Code => &self.code,
            SemanticField::Description => &self.description,
            SemanticField::Warehouse => &self.warehouse,
            SemanticField::WarehouseDesc => &self.warehouse_desc,
            SemanticField::Classification => &self.classification,
            SemanticField::Stock => &self.stock,
            SemanticField::Price => &self.price,
        }
    }

    pub(crate) fn header_mut(&mut self, field: SemanticField) -> &mut String {
        match field {
            SemanticField::Code => &mut self.code,
            SemanticField::Description => &mut self.description,
            SemanticField::Warehouse => &mut self.warehouse,
            SemanticField::WarehouseDesc => &mut self.warehouse_desc,
            SemanticField::Classification => &mut self.classification,
            SemanticField::Stock => &mut self.stock,
            SemanticField::Price => &mut self.price,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductRecord {
    pub code: String,
    pub description: String,
    pub warehouse: String,
    pub warehouse_desc: String,
    pub classification: String,
    pub stock: String,
    pub price: String,
}

impl ProductRecord {
    pub fn warehouse_label(&self) -> String {
        warehouse_label(&self.warehouse, &self.warehouse_desc)
    }
}

/// Display and match key for a warehouse. Filter options and filter matching
/// must both go through here so a selected option string-equals the record key.
pub fn warehouse_label(warehouse: &str, warehouse_desc: &str) -> String {
    if warehouse_desc.is_empty() {
        warehouse.to_string()
    } else {
        format!("{warehouse} - {warehouse_desc}")
    }
}
