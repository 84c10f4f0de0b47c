//! End-to-end test: the typed client against a real served backend.
//!
//! Spins up the full katta-server router on an ephemeral port (in-memory
//! SQLite, temp work dir) and drives it through `CatalogClient`.

use std::sync::Arc;

use argon2::Argon2;
use argon2::password_hash::{PasswordHasher, SaltString, rand_core::OsRng};

use katta_client::{CatalogClient, ClientError};
use katta_server::auth::{JwtConfig, JwtService};
use katta_server::db::DbService;
use katta_server::{Config, ServerState, build_app};
use shared::catalog::ProductQuery;
use shared::models::{ImagesInput, NumberOrText, ProductCreate, ProductUpdate};

const ADMIN_EMAIL: &str = "admin@katta.test";
const ADMIN_PASSWORD: &str = "client-integration-secret";

/// Serve the real application router on an ephemeral port; returns the
/// base URL. The temp dir must outlive the test.
async fn serve(work_dir: &tempfile::TempDir) -> String {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(ADMIN_PASSWORD.as_bytes(), &salt)
        .expect("hash password")
        .to_string();

    let config = Config {
        work_dir: work_dir.path().to_string_lossy().into_owned(),
        http_port: 0,
        environment: "test".to_string(),
        cors_origins: Vec::new(),
        admin_email: Some(ADMIN_EMAIL.to_string()),
        admin_password_hash: Some(password_hash),
        jwt: JwtConfig {
            secret: "client-integration-secret-0123456789abcdef".to_string(),
            expiration_minutes: 60,
            issuer: "katta-server".to_string(),
            audience: "katta-admin".to_string(),
        },
    };

    let db = DbService::in_memory().await.expect("in-memory db");
    let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
    let state = ServerState::new(config, db.pool, jwt_service);
    let app = build_app().with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    format!("http://{addr}")
}

fn create_payload(name: &str) -> ProductCreate {
    ProductCreate {
        name: Some(name.to_string()),
        category: Some("Sunmica".to_string()),
        subcategory: Some("1mm".to_string()),
        price: Some(NumberOrText::Number(950.0)),
        images: Some(ImagesInput::List(vec!["/uploads/a.jpg".to_string()])),
        description: Some(format!("{name} description")),
        ..Default::default()
    }
}

#[tokio::test]
async fn catalog_round_trip_over_http() {
    let work_dir = tempfile::tempdir().expect("temp work dir");
    let base_url = serve(&work_dir).await;

    let mut client = CatalogClient::new(&base_url).expect("client");

    // empty catalog
    let page = client.products(&ProductQuery::default()).await.expect("list");
    assert_eq!(page.total_count, 0);
    assert_eq!(page.total_pages, 1);

    // admin session
    let login = client.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.expect("login");
    assert_eq!(login.admin.role, "admin");
    assert!(client.token().is_some());

    // create, read back, list
    let created = client
        .create_product(&create_payload("Kridha Walnut"))
        .await
        .expect("create");
    assert_eq!(created.image, created.images[0]);

    let fetched = client.product(created.id).await.expect("get");
    assert_eq!(fetched.name, "Kridha Walnut");

    let page = client.products(&ProductQuery::default()).await.expect("list");
    assert_eq!(page.total_count, 1);

    // facet metadata reflects the catalog
    let meta = client.meta().await.expect("meta");
    assert_eq!(meta.categories.len(), 1);
    assert_eq!(meta.price.min, 950.0);

    // upload an image, reference it in an update
    let upload = client
        .upload_image("swatch.png", b"fake-png-bytes".to_vec())
        .await
        .expect("upload");
    assert!(upload.image_url.starts_with("/uploads/"));

    let updated = client
        .update_product(
            created.id,
            &ProductUpdate {
                image: Some(upload.image_url.clone()),
                ..Default::default()
            },
        )
        .await
        .expect("update");
    assert_eq!(updated.images, vec![upload.image_url]);

    // delete, then the record is gone
    assert!(client.delete_product(created.id).await.expect("delete"));
    let missing = client.product(created.id).await;
    assert!(matches!(missing, Err(ClientError::Api { status: 404, .. })));
}

#[tokio::test]
async fn invalid_login_is_rejected() {
    let work_dir = tempfile::tempdir().expect("temp work dir");
    let base_url = serve(&work_dir).await;

    let mut client = CatalogClient::new(&base_url).expect("client");
    let result = client.login(ADMIN_EMAIL, "wrong-password").await;
    assert!(matches!(result, Err(ClientError::Api { status: 400, .. })));
    assert!(client.token().is_none());
}
