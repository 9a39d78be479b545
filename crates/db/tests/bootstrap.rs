use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify the role seeds.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    // Health check
    strata_db::health_check(&pool).await.unwrap();

    // The five well-known roles must be seeded with stable ids.
    let roles: Vec<(i64, String)> = sqlx::query_as("SELECT id, name FROM roles ORDER BY id")
        .fetch_all(&pool)
        .await
        .unwrap();

    let expected = [
        (1, "admin"),
        (2, "owner"),
        (3, "tenant"),
        (4, "security"),
        (5, "maintenance"),
    ];
    assert_eq!(roles.len(), expected.len(), "exactly five seeded roles");
    for ((id, name), (want_id, want_name)) in roles.iter().zip(expected) {
        assert_eq!(*id, want_id, "role id for {want_name} must be stable");
        assert_eq!(name, want_name);
    }
}

/// All `id` primary keys use bigint.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_pks_are_bigint(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rows.is_empty(), "schema should define tables with id columns");
    for (table, data_type) in &rows {
        assert_eq!(
            data_type, "bigint",
            "Table {table}.id should be bigint, got {data_type}"
        );
    }
}

/// Every table carries a created_at timestamptz.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_tables_have_created_at(pool: PgPool) {
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT table_name
         FROM information_schema.tables
         WHERE table_schema = 'public'
           AND table_type = 'BASE TABLE'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    for (table,) in &tables {
        let result: Option<(String,)> = sqlx::query_as(&format!(
            "SELECT data_type
             FROM information_schema.columns
             WHERE table_schema = 'public'
               AND table_name = '{table}'
               AND column_name = 'created_at'"
        ))
        .fetch_optional(&pool)
        .await
        .unwrap();

        let (data_type,) =
            result.unwrap_or_else(|| panic!("Table {table} is missing column created_at"));
        assert_eq!(
            data_type, "timestamp with time zone",
            "Table {table}.created_at should be timestamptz, got {data_type}"
        );
    }
}

/// No character varying columns should exist -- TEXT is preferred.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_no_varchar_columns(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, column_name
         FROM information_schema.columns
         WHERE table_schema = 'public'
           AND data_type = 'character varying'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name, column_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(
        rows.is_empty(),
        "found varchar columns, expected TEXT: {rows:?}"
    );
}

/// Every money column is numeric, never float.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_no_float_money_columns(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, column_name
         FROM information_schema.columns
         WHERE table_schema = 'public'
           AND data_type IN ('real', 'double precision')
           AND (column_name LIKE 'amount%' OR column_name LIKE 'base%'
                OR column_name IN ('late_fee', 'hourly_rate', 'deposit_amount',
                                   'total_amount', 'ownership_share', 'cost_factor'))
         ORDER BY table_name, column_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(
        rows.is_empty(),
        "found floating-point money columns: {rows:?}"
    );
}
