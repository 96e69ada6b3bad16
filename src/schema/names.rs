//! Field-name listings for a [`Schema`]

use crate::schema::types::Schema;

/// Separator used by [`Schema::names_as_csv`]
pub const CSV_SEPARATOR: &str = ",";

/// Separator used by [`Schema::names_as_sql`], suitable for a column list
pub const SQL_SEPARATOR: &str = ", ";

impl Schema {
    /// All field names, sorted ascending
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.iter().map(|p| p.name.clone()).collect();
        names.sort();
        names
    }

    /// Sorted field names joined with `separator`; empty schema gives `""`
    pub fn names_as_delimited_list(&self, separator: &str) -> String {
        self.names().join(separator)
    }

    /// Sorted field names as a CSV header, e.g. `A,B`
    pub fn names_as_csv(&self) -> String {
        self.names_as_delimited_list(CSV_SEPARATOR)
    }

    /// Sorted field names as a SQL column list, e.g. `A, B`
    pub fn names_as_sql(&self) -> String {
        self.names_as_delimited_list(SQL_SEPARATOR)
    }
}
