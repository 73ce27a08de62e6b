use simcop_core::{ColumnDescription, SpecialtyCatalogEntry};

fn width(value: &str) -> usize {
    value.chars().count()
}

pub(crate) fn format_catalog_table(entries: &[SpecialtyCatalogEntry]) -> Vec<String> {
    let mut code_width = width("CODE");
    let mut name_width = width("NAME");
    let mut category_width = width("CATEGORY");
    for entry in entries {
        code_width = code_width.max(width(&entry.code));
        name_width = name_width.max(width(&entry.name));
        category_width = category_width.max(width(entry.category.as_str()));
    }

    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(format!(
        "{:<code_width$}  {:<name_width$}  {:<category_width$}  {:<36}  DESCRIPTION",
        "CODE", "NAME", "CATEGORY", "ID",
    ));
    for entry in entries {
        lines.push(format!(
            "{:<code_width$}  {:<name_width$}  {:<category_width$}  {:<36}  {}",
            entry.code,
            entry.name,
            entry.category.as_str(),
            entry.id.to_string(),
            entry.description.as_deref().unwrap_or("-"),
        ));
    }
    lines
}

pub(crate) fn print_catalog_table(entries: &[SpecialtyCatalogEntry]) {
    for line in format_catalog_table(entries) {
        println!("{line}");
    }
}

pub(crate) fn format_table_list(tables: &[String]) -> Vec<String> {
    if tables.is_empty() {
        return vec!["No tables in this database".to_string()];
    }
    let mut lines = Vec::with_capacity(tables.len() + 1);
    lines.push(format!("--- Tables ({}) ---", tables.len()));
    lines.extend(tables.iter().map(|table| format!("- {table}")));
    lines
}

pub(crate) fn format_column(column: &ColumnDescription) -> String {
    let nullability = if column.nullable { "NULL" } else { "NOT NULL" };
    format!("{} ({}) - {}", column.field, column.column_type, nullability)
}

pub(crate) fn print_columns(columns: &[ColumnDescription]) {
    for column in columns {
        println!("{}", format_column(column));
    }
}
