//! Explicit layout of every table the crate manages.
//!
//! The sea-orm entities create the tables; this module is the readable
//! contract the repository and services check against. Tests below keep the
//! two in agreement.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSchema {
    pub name: &'static str,
    pub sql_type: &'static str,
    pub max_len: Option<usize>,
    pub nullable: bool,
    pub primary_key: bool,
    pub references: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    pub table: &'static str,
    pub columns: &'static [ColumnSchema],
}

impl TableSchema {
    pub fn column(&self, name: &str) -> Option<&'static ColumnSchema> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn primary_key(&self) -> Option<&'static ColumnSchema> {
        self.columns.iter().find(|column| column.primary_key)
    }
}

const fn column(name: &'static str, sql_type: &'static str) -> ColumnSchema {
    ColumnSchema {
        name,
        sql_type,
        max_len: None,
        nullable: false,
        primary_key: false,
        references: None,
    }
}

pub const INGREDIENTS_MAX_LEN: usize = 65_555;

pub const GROCERY_LIST_INGREDIENTS: &str = "grocery_list_ingredients";

pub static USERS: TableSchema = TableSchema {
    table: "users",
    columns: &[
        ColumnSchema {
            primary_key: true,
            ..column("id", "bigint")
        },
        column("email", "varchar"),
        column("created_at", "timestamptz"),
        column("updated_at", "timestamptz"),
    ],
};

pub static GROCERY_LIST: TableSchema = TableSchema {
    table: "grocery_list",
    columns: &[
        ColumnSchema {
            primary_key: true,
            ..column("grocery_list_id", "bigint")
        },
        ColumnSchema {
            nullable: true,
            ..column("grocery_list_title", "varchar")
        },
        ColumnSchema {
            max_len: Some(INGREDIENTS_MAX_LEN),
            nullable: true,
            ..column(GROCERY_LIST_INGREDIENTS, "varchar")
        },
        ColumnSchema {
            references: Some("users"),
            ..column("grocery_list_user_id", "bigint")
        },
        column("created_at", "timestamptz"),
        column("updated_at", "timestamptz"),
    ],
};

pub fn tables() -> &'static [&'static TableSchema] {
    static TABLES: [&TableSchema; 2] = [&USERS, &GROCERY_LIST];
    &TABLES
}

pub fn max_ingredients_len() -> usize {
    GROCERY_LIST
        .column(GROCERY_LIST_INGREDIENTS)
        .and_then(|column| column.max_len)
        .unwrap_or(INGREDIENTS_MAX_LEN)
}
