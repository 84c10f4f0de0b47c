//! Product Repository
//!
//! Storage for catalog products: CRUD, the filtered/paginated list query,
//! and the facet aggregates behind `GET /api/products/meta`.

use std::collections::BTreeMap;
use std::str::FromStr;

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use shared::catalog::{CatalogMeta, CategoryFacet, PriceBounds, ProductQuery};
use shared::models::{Category, Product};

use super::{RepoError, RepoResult};
use crate::catalog::{NewProduct, ProductPatch};

const PRODUCT_COLUMNS: &str = "id, name, category, subcategory, thickness, finish, price, \
     image, images, description, specs, is_featured, created_at, updated_at";

/// Raw table row; `images`/`specs` are JSON text columns.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    category: String,
    subcategory: String,
    thickness: Option<String>,
    finish: Option<String>,
    price: f64,
    image: String,
    images: String,
    description: String,
    specs: String,
    is_featured: bool,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepoError;

    fn try_from(row: ProductRow) -> RepoResult<Self> {
        let category = Category::from_str(&row.category)
            .map_err(|e| RepoError::Database(format!("corrupt product {}: {e}", row.id)))?;
        let images: Vec<String> = serde_json::from_str(&row.images)
            .map_err(|e| RepoError::Database(format!("corrupt product {}: images: {e}", row.id)))?;
        let specs: BTreeMap<String, String> = serde_json::from_str(&row.specs)
            .map_err(|e| RepoError::Database(format!("corrupt product {}: specs: {e}", row.id)))?;

        Ok(Product {
            id: row.id,
            name: row.name,
            category,
            subcategory: row.subcategory,
            thickness: row.thickness,
            finish: row.finish,
            price: row.price,
            image: row.image,
            images,
            description: row.description,
            specs,
            is_featured: row.is_featured,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn rows_to_products(rows: Vec<ProductRow>) -> RepoResult<Vec<Product>> {
    rows.into_iter().map(Product::try_from).collect()
}

/// Insert a new product and return the stored record.
pub async fn create(pool: &SqlitePool, data: NewProduct) -> RepoResult<Product> {
    let images_json =
        serde_json::to_string(&data.images).map_err(|e| RepoError::Database(e.to_string()))?;
    let specs_json =
        serde_json::to_string(&data.specs).map_err(|e| RepoError::Database(e.to_string()))?;
    let primary_image = data
        .images
        .first()
        .cloned()
        .ok_or_else(|| RepoError::Validation("images cannot be empty".into()))?;

    // Ids embed ms + 12 random bits; regenerate on a same-ms collision.
    let mut attempts = 0;
    let id = loop {
        let id = shared::util::snowflake_id();
        let now = shared::util::now_millis();
        let result = sqlx::query(
            "INSERT INTO product (id, name, category, subcategory, thickness, finish, price, \
             image, images, description, specs, is_featured, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?13)",
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.category.as_str())
        .bind(&data.subcategory)
        .bind(&data.thickness)
        .bind(&data.finish)
        .bind(data.price)
        .bind(&primary_image)
        .bind(&images_json)
        .bind(&data.description)
        .bind(&specs_json)
        .bind(data.is_featured)
        .bind(now)
        .execute(pool)
        .await;

        match result {
            Ok(_) => break id,
            Err(sqlx::Error::Database(db_err))
                if matches!(db_err.kind(), sqlx::error::ErrorKind::UniqueViolation)
                    && attempts < 3 =>
            {
                attempts += 1;
            }
            Err(e) => return Err(e.into()),
        }
    };

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create product".into()))
}

/// Look up one product by id.
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Product>> {
    let sql = format!("SELECT {PRODUCT_COLUMNS} FROM product WHERE id = ?");
    let row = sqlx::query_as::<_, ProductRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.map(Product::try_from).transpose()
}

/// Filtered, paginated catalog page plus the total match count
/// (pagination-independent).
pub async fn list(pool: &SqlitePool, query: &ProductQuery) -> RepoResult<(Vec<Product>, u64)> {
    let mut count_query: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT COUNT(*) FROM product");
    push_filter(&mut count_query, query);
    let total: i64 = count_query.build_query_scalar().fetch_one(pool).await?;

    let page = query.page.max(1) as i64;
    let limit = query.limit.max(1) as i64;

    let mut page_query: QueryBuilder<Sqlite> =
        QueryBuilder::new(format!("SELECT {PRODUCT_COLUMNS} FROM product"));
    push_filter(&mut page_query, query);
    page_query.push(" ORDER BY created_at DESC, id DESC");
    page_query.push(" LIMIT ");
    page_query.push_bind(limit);
    page_query.push(" OFFSET ");
    page_query.push_bind((page - 1) * limit);

    let rows: Vec<ProductRow> = page_query.build_query_as().fetch_all(pool).await?;

    Ok((rows_to_products(rows)?, total as u64))
}

/// Compile the filter into a WHERE clause. Shared by the COUNT and page
/// queries so both always agree. All present predicates AND together.
fn push_filter(builder: &mut QueryBuilder<'_, Sqlite>, query: &ProductQuery) {
    builder.push(" WHERE 1 = 1");

    if query.featured {
        builder.push(" AND is_featured = 1");
    }

    if let Some(ids) = &query.ids {
        if ids.is_empty() {
            // `ids=` was present but held nothing well-formed: match nothing
            builder.push(" AND 0 = 1");
        } else {
            builder.push(" AND id IN (");
            {
                let mut separated = builder.separated(", ");
                for id in ids {
                    separated.push_bind(*id);
                }
            }
            builder.push(")");
        }
    }

    if let Some(exclude_id) = query.exclude_id {
        builder.push(" AND id != ");
        builder.push_bind(exclude_id);
    }

    push_in_list(builder, "category", &query.categories);
    push_in_list(builder, "subcategory", &query.subcategories);
    push_in_list(builder, "thickness", &query.thicknesses);
    push_in_list(builder, "finish", &query.finishes);

    if let Some(search) = &query.search {
        // SQLite LIKE is case-insensitive for ASCII; matches name only
        builder.push(" AND name LIKE ");
        builder.push_bind(format!("%{}%", escape_like(search)));
        builder.push(" ESCAPE '\\'");
    }

    if let Some(min) = query.min_price {
        builder.push(" AND price >= ");
        builder.push_bind(min);
    }
    if let Some(max) = query.max_price {
        builder.push(" AND price <= ");
        builder.push_bind(max);
    }
}

fn push_in_list(builder: &mut QueryBuilder<'_, Sqlite>, column: &str, values: &[String]) {
    if values.is_empty() {
        return;
    }
    builder.push(format!(" AND {column} IN ("));
    {
        let mut separated = builder.separated(", ");
        for value in values {
            separated.push_bind(value.clone());
        }
    }
    builder.push(")");
}

/// Escape LIKE metacharacters so search terms match literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Apply a partial patch and return the updated record.
pub async fn update(pool: &SqlitePool, id: i64, patch: ProductPatch) -> RepoResult<Product> {
    if patch.is_empty() {
        return find_by_id(pool, id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Product {id} not found")));
    }

    let now = shared::util::now_millis();

    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE product SET ");
    {
        let mut set = builder.separated(", ");

        if let Some(name) = &patch.name {
            set.push("name = ");
            set.push_bind_unseparated(name.clone());
        }
        if let Some(category) = patch.category {
            set.push("category = ");
            set.push_bind_unseparated(category.as_str());
        }
        if let Some(subcategory) = &patch.subcategory {
            set.push("subcategory = ");
            set.push_bind_unseparated(subcategory.clone());
        }
        if let Some(thickness) = &patch.thickness {
            set.push("thickness = ");
            set.push_bind_unseparated(thickness.clone());
        }
        if let Some(finish) = &patch.finish {
            set.push("finish = ");
            set.push_bind_unseparated(finish.clone());
        }
        if let Some(price) = patch.price {
            set.push("price = ");
            set.push_bind_unseparated(price);
        }
        if let Some(description) = &patch.description {
            set.push("description = ");
            set.push_bind_unseparated(description.clone());
        }
        if let Some(images) = &patch.images {
            let images_json = serde_json::to_string(images)
                .map_err(|e| RepoError::Database(e.to_string()))?;
            let primary_image = images
                .first()
                .cloned()
                .ok_or_else(|| RepoError::Validation("images cannot be empty".into()))?;
            set.push("images = ");
            set.push_bind_unseparated(images_json);
            // the scalar mirror always tracks images[0]
            set.push("image = ");
            set.push_bind_unseparated(primary_image);
        }
        if let Some(specs) = &patch.specs {
            let specs_json = serde_json::to_string(specs)
                .map_err(|e| RepoError::Database(e.to_string()))?;
            set.push("specs = ");
            set.push_bind_unseparated(specs_json);
        }
        if let Some(is_featured) = patch.is_featured {
            set.push("is_featured = ");
            set.push_bind_unseparated(is_featured);
        }

        set.push("updated_at = ");
        set.push_bind_unseparated(now);
    }
    builder.push(" WHERE id = ");
    builder.push_bind(id);

    let result = builder.build().execute(pool).await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Product {id} not found")));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Product {id} not found")))
}

/// Hard delete. A missing id is an error, not a no-op.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let result = sqlx::query("DELETE FROM product WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Product {id} not found")));
    }
    Ok(())
}

/// Facet metadata over the whole catalog, independent of any filter:
/// distinct subcategories grouped per category (sorted), distinct
/// non-empty thickness/finish values (sorted), global price bounds.
pub async fn meta(pool: &SqlitePool) -> RepoResult<CatalogMeta> {
    let pairs: Vec<(String, String)> = sqlx::query_as(
        "SELECT DISTINCT category, subcategory FROM product \
         ORDER BY category ASC, subcategory ASC",
    )
    .fetch_all(pool)
    .await?;

    let mut categories: Vec<CategoryFacet> = Vec::new();
    for (category, subcategory) in pairs {
        match categories.last_mut() {
            Some(facet) if facet.name == category => facet.subcategories.push(subcategory),
            _ => categories.push(CategoryFacet {
                name: category,
                subcategories: vec![subcategory],
            }),
        }
    }

    let thicknesses = distinct_classifier(pool, "thickness").await?;
    let finishes = distinct_classifier(pool, "finish").await?;

    let (min, max): (f64, f64) =
        sqlx::query_as("SELECT COALESCE(MIN(price), 0.0), COALESCE(MAX(price), 0.0) FROM product")
            .fetch_one(pool)
            .await?;

    Ok(CatalogMeta {
        categories,
        thicknesses,
        finishes,
        price: PriceBounds { min, max },
    })
}

/// Distinct non-empty values of an optional classifier column, sorted.
async fn distinct_classifier(pool: &SqlitePool, column: &str) -> RepoResult<Vec<String>> {
    let sql = format!(
        "SELECT DISTINCT {column} FROM product \
         WHERE {column} IS NOT NULL AND TRIM({column}) != '' ORDER BY {column} ASC"
    );
    let rows: Vec<(String,)> = sqlx::query_as(&sql).fetch_all(pool).await?;
    Ok(rows.into_iter().map(|(value,)| value).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn test_pool() -> SqlitePool {
        DbService::in_memory().await.expect("in-memory db").pool
    }

    fn sample(name: &str, category: Category, subcategory: &str, price: f64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            category,
            subcategory: subcategory.to_string(),
            thickness: None,
            finish: None,
            price,
            images: vec![format!("/uploads/{}.jpg", name.to_lowercase().replace(' ', "-"))],
            description: format!("{name} description"),
            specs: BTreeMap::new(),
            is_featured: false,
        }
    }

    /// Pin creation time so list ordering is deterministic in tests.
    async fn set_created_at(pool: &SqlitePool, id: i64, created_at: i64) {
        sqlx::query("UPDATE product SET created_at = ? WHERE id = ?")
            .bind(created_at)
            .bind(id)
            .execute(pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn create_and_find_round_trip() {
        let pool = test_pool().await;
        let mut data = sample("Kridha Walnut", Category::Sunmica, "1mm", 950.0);
        data.thickness = Some("1mm".into());
        data.specs.insert("Grade".into(), "Premium".into());
        data.is_featured = true;

        let created = create(&pool, data).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.image, created.images[0]);
        assert_eq!(created.created_at, created.updated_at);
        assert!(created.is_featured);

        let found = find_by_id(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Kridha Walnut");
        assert_eq!(found.category, Category::Sunmica);
        assert_eq!(found.specs.get("Grade").map(String::as_str), Some("Premium"));
        assert_eq!(found.thickness.as_deref(), Some("1mm"));
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_unknown() {
        let pool = test_pool().await;
        assert!(find_by_id(&pool, 42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_defaults_to_newest_first() {
        let pool = test_pool().await;
        let mut ids = Vec::new();
        for i in 0..3 {
            let product = create(&pool, sample(&format!("P{i}"), Category::Panels, "Sheets", 100.0))
                .await
                .unwrap();
            set_created_at(&pool, product.id, 1_000 * (i + 1)).await;
            ids.push(product.id);
        }

        let (products, total) = list(&pool, &ProductQuery::default()).await.unwrap();
        assert_eq!(total, 3);
        let listed: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(listed, vec![ids[2], ids[1], ids[0]]);
    }

    #[tokio::test]
    async fn featured_pagination_scenario() {
        // 14 products, 8 featured; featured page 2 with limit 5 holds the
        // 6th..8th newest featured products.
        let pool = test_pool().await;
        let mut featured_newest_first = Vec::new();
        for i in 0..14 {
            let mut data = sample(&format!("P{i:02}"), Category::Sunmica, "1mm", 100.0);
            data.is_featured = i < 8;
            let product = create(&pool, data).await.unwrap();
            // older products get lower created_at
            set_created_at(&pool, product.id, 1_000 * (100 - i)).await;
            if i < 8 {
                featured_newest_first.push(product.id);
            }
        }

        let query = ProductQuery {
            featured: true,
            limit: 5,
            page: 2,
            ..Default::default()
        };
        let (products, total) = list(&pool, &query).await.unwrap();
        assert_eq!(total, 8);
        assert_eq!(products.len(), 3);
        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, featured_newest_first[5..8].to_vec());
        assert_eq!(shared::catalog::total_pages_for(total, 5), 2);
    }

    #[tokio::test]
    async fn page_beyond_total_is_empty_with_true_count() {
        let pool = test_pool().await;
        for i in 0..3 {
            create(&pool, sample(&format!("P{i}"), Category::Panels, "Louvers", 50.0))
                .await
                .unwrap();
        }

        let query = ProductQuery {
            page: 5,
            ..Default::default()
        };
        let (products, total) = list(&pool, &query).await.unwrap();
        assert!(products.is_empty());
        assert_eq!(total, 3);
    }

    #[tokio::test]
    async fn ids_and_exclude_combine_with_and_semantics() {
        let pool = test_pool().await;
        let a = create(&pool, sample("A", Category::Sunmica, "1mm", 10.0)).await.unwrap();
        let b = create(&pool, sample("B", Category::Sunmica, "1mm", 20.0)).await.unwrap();
        let c = create(&pool, sample("C", Category::Sunmica, "1mm", 30.0)).await.unwrap();

        let query = ProductQuery {
            ids: Some(vec![a.id, b.id, c.id]),
            exclude_id: Some(b.id),
            ..Default::default()
        };
        let (products, total) = list(&pool, &query).await.unwrap();
        assert_eq!(total, 2);
        let mut ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        ids.sort();
        let mut expected = vec![a.id, c.id];
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn present_but_empty_ids_matches_nothing() {
        let pool = test_pool().await;
        create(&pool, sample("A", Category::Sunmica, "1mm", 10.0)).await.unwrap();

        let query = ProductQuery {
            ids: Some(Vec::new()),
            ..Default::default()
        };
        let (products, total) = list(&pool, &query).await.unwrap();
        assert!(products.is_empty());
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn search_matches_name_case_insensitively() {
        let pool = test_pool().await;
        create(&pool, sample("Walnut Oak", Category::Sunmica, "1mm", 10.0)).await.unwrap();
        create(&pool, sample("WALNUT Prime", Category::Sunmica, "1mm", 20.0)).await.unwrap();
        let mut teak = sample("Teak", Category::Sunmica, "1mm", 30.0);
        teak.description = "walnut-look teak".into(); // search must not match descriptions
        create(&pool, teak).await.unwrap();

        let query = ProductQuery {
            search: Some("walnut".into()),
            ..Default::default()
        };
        let (products, total) = list(&pool, &query).await.unwrap();
        assert_eq!(total, 2);
        assert!(products.iter().all(|p| p.name.to_lowercase().contains("walnut")));
    }

    #[tokio::test]
    async fn search_treats_like_metacharacters_literally() {
        let pool = test_pool().await;
        create(&pool, sample("100% Walnut", Category::Sunmica, "1mm", 10.0)).await.unwrap();
        create(&pool, sample("100x Walnut", Category::Sunmica, "1mm", 20.0)).await.unwrap();

        let query = ProductQuery {
            search: Some("100%".into()),
            ..Default::default()
        };
        let (products, total) = list(&pool, &query).await.unwrap();
        assert_eq!(total, 1);
        assert_eq!(products[0].name, "100% Walnut");
    }

    #[tokio::test]
    async fn price_bounds_are_inclusive_and_independent() {
        let pool = test_pool().await;
        for (name, price) in [("A", 100.0), ("B", 200.0), ("C", 300.0)] {
            create(&pool, sample(name, Category::Panels, "Sheets", price)).await.unwrap();
        }

        let query = ProductQuery {
            min_price: Some(100.0),
            max_price: Some(200.0),
            ..Default::default()
        };
        let (_, total) = list(&pool, &query).await.unwrap();
        assert_eq!(total, 2);

        let query = ProductQuery {
            min_price: Some(250.0),
            ..Default::default()
        };
        let (_, total) = list(&pool, &query).await.unwrap();
        assert_eq!(total, 1);

        let query = ProductQuery {
            max_price: Some(99.99),
            ..Default::default()
        };
        let (_, total) = list(&pool, &query).await.unwrap();
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn category_and_subcategory_filters() {
        let pool = test_pool().await;
        create(&pool, sample("S1", Category::Sunmica, "1mm", 10.0)).await.unwrap();
        create(&pool, sample("S2", Category::Sunmica, "0.8mm", 20.0)).await.unwrap();
        create(&pool, sample("P1", Category::Panels, "Louvers", 30.0)).await.unwrap();

        let query = ProductQuery {
            categories: vec!["Sunmica".into()],
            ..Default::default()
        };
        let (_, total) = list(&pool, &query).await.unwrap();
        assert_eq!(total, 2);

        let query = ProductQuery {
            categories: vec!["Sunmica".into()],
            subcategories: vec!["0.8mm".into()],
            ..Default::default()
        };
        let (products, total) = list(&pool, &query).await.unwrap();
        assert_eq!(total, 1);
        assert_eq!(products[0].name, "S2");
    }

    #[tokio::test]
    async fn update_replaces_images_and_mirror() {
        let pool = test_pool().await;
        let created = create(&pool, sample("A", Category::Sunmica, "1mm", 10.0)).await.unwrap();

        let patch = ProductPatch {
            price: Some(99.0),
            images: Some(vec!["x.jpg".into(), "y.jpg".into()]),
            ..Default::default()
        };
        let updated = update(&pool, created.id, patch).await.unwrap();
        assert_eq!(updated.price, 99.0);
        assert_eq!(updated.images, vec!["x.jpg", "y.jpg"]);
        assert_eq!(updated.image, "x.jpg");
        assert_eq!(updated.name, "A"); // untouched fields survive
        assert!(updated.updated_at >= updated.created_at);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let pool = test_pool().await;
        let patch = ProductPatch {
            price: Some(1.0),
            ..Default::default()
        };
        assert!(matches!(
            update(&pool, 4242, patch).await,
            Err(RepoError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn empty_patch_returns_current_record() {
        let pool = test_pool().await;
        let created = create(&pool, sample("A", Category::Sunmica, "1mm", 10.0)).await.unwrap();
        let unchanged = update(&pool, created.id, ProductPatch::default()).await.unwrap();
        assert_eq!(unchanged.updated_at, created.updated_at);
    }

    #[tokio::test]
    async fn delete_is_hard_and_missing_id_errors() {
        let pool = test_pool().await;
        let created = create(&pool, sample("A", Category::Sunmica, "1mm", 10.0)).await.unwrap();

        delete(&pool, created.id).await.unwrap();
        assert!(find_by_id(&pool, created.id).await.unwrap().is_none());
        assert!(matches!(
            delete(&pool, created.id).await,
            Err(RepoError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn meta_groups_and_sorts_facets() {
        let pool = test_pool().await;
        let mut p = sample("S1", Category::Sunmica, "B", 120.0);
        p.thickness = Some("1mm".into());
        p.finish = Some("Gloss".into());
        create(&pool, p).await.unwrap();

        let mut p = sample("S2", Category::Sunmica, "A", 80.0);
        p.thickness = Some("0.8mm".into());
        create(&pool, p).await.unwrap();

        // duplicate subcategory must not repeat in the facet
        create(&pool, sample("S3", Category::Sunmica, "A", 200.0)).await.unwrap();

        let mut p = sample("P1", Category::Panels, "C", 500.0);
        p.finish = Some("Matte".into());
        create(&pool, p).await.unwrap();

        let meta = meta(&pool).await.unwrap();
        assert_eq!(
            meta.categories,
            vec![
                CategoryFacet {
                    name: "Panels".into(),
                    subcategories: vec!["C".into()],
                },
                CategoryFacet {
                    name: "Sunmica".into(),
                    subcategories: vec!["A".into(), "B".into()],
                },
            ]
        );
        assert_eq!(meta.thicknesses, vec!["0.8mm", "1mm"]);
        assert_eq!(meta.finishes, vec!["Gloss", "Matte"]);
        assert_eq!(meta.price, PriceBounds { min: 80.0, max: 500.0 });
    }

    #[tokio::test]
    async fn meta_on_empty_catalog_is_zeroed() {
        let pool = test_pool().await;
        let meta = meta(&pool).await.unwrap();
        assert!(meta.categories.is_empty());
        assert!(meta.thicknesses.is_empty());
        assert!(meta.finishes.is_empty());
        assert_eq!(meta.price, PriceBounds { min: 0.0, max: 0.0 });
    }

    #[tokio::test]
    async fn meta_price_bounds_follow_the_catalog() {
        let pool = test_pool().await;
        create(&pool, sample("A", Category::Sunmica, "1mm", 100.0)).await.unwrap();
        let before = meta(&pool).await.unwrap();
        assert_eq!(before.price, PriceBounds { min: 100.0, max: 100.0 });

        // a cheaper product lowers the min on the next meta call
        create(&pool, sample("B", Category::Sunmica, "1mm", 40.0)).await.unwrap();
        let after = meta(&pool).await.unwrap();
        assert_eq!(after.price, PriceBounds { min: 40.0, max: 100.0 });
    }

    #[tokio::test]
    async fn meta_ignores_active_filters_by_construction() {
        // meta takes no filter argument at all; assert it sees everything
        // even when a narrow list query would not.
        let pool = test_pool().await;
        let mut p = sample("S1", Category::Sunmica, "1mm", 100.0);
        p.thickness = Some("1mm".into());
        create(&pool, p).await.unwrap();
        let mut p = sample("P1", Category::Panels, "Louvers", 900.0);
        p.thickness = Some("18mm".into());
        create(&pool, p).await.unwrap();

        let query = ProductQuery {
            categories: vec!["Sunmica".into()],
            ..Default::default()
        };
        let (_, total) = list(&pool, &query).await.unwrap();
        assert_eq!(total, 1);

        let meta = meta(&pool).await.unwrap();
        assert_eq!(meta.categories.len(), 2);
        assert_eq!(meta.thicknesses, vec!["18mm", "1mm"]);
    }
}
