use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use scrawl::app::{self, AppState};
use scrawl::store::client::{FilePostStore, PostStore};

/// Holds the temp store directory and provides the Axum router for
/// integration tests.
///
/// Store files live for as long as this struct does; the directory is
/// removed automatically on drop.
pub struct TestEnv {
    dir: TempDir,
    pub store: Arc<dyn PostStore>,
    pub router: axum::Router,
}

impl TestEnv {
    /// Build a file-backed environment with the given live and template
    /// documents. `None` means the file is absent (unreadable).
    pub fn with_documents(live: Option<&str>, template: Option<&str>) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store_path = dir.path().join("resources.json");
        let template_path = dir.path().join("resources.template.json");

        if let Some(raw) = live {
            std::fs::write(&store_path, raw).expect("Failed to write live store");
        }
        if let Some(raw) = template {
            std::fs::write(&template_path, raw).expect("Failed to write template");
        }

        let store: Arc<dyn PostStore> =
            Arc::new(FilePostStore::new(&store_path, &template_path));
        let router = app::router(
            AppState {
                store: store.clone(),
            },
            "public",
        );

        Self { dir, store, router }
    }

    /// Path of the live store document inside the temp directory.
    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("resources.json")
    }

    /// Path of the template document inside the temp directory.
    pub fn template_path(&self) -> PathBuf {
        self.dir.path().join("resources.template.json")
    }

    /// Build an `axum_test::TestServer` from this environment's router.
    pub fn server(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .expect_success_by_default()
            .build(self.router.clone())
    }

    /// Build a `TestServer` that does NOT expect success by default (for error tests).
    pub fn server_permissive(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .build(self.router.clone())
    }
}

/// A two-post store document with numeric IDs 1 and 2.
pub fn two_posts() -> &'static str {
    r#"{
  "resources": [
    {
      "id": 1,
      "title": "Post 1",
      "content": "Content 1",
      "author": "Author 1"
    },
    {
      "id": 2,
      "title": "Post 2",
      "content": "Content 2",
      "author": "Author 2"
    }
  ]
}"#
}

/// A document mixing a string-typed ID with a numeric one.
pub fn mixed_id_posts() -> &'static str {
    r#"{
  "resources": [
    {
      "id": "1",
      "title": "Post 1",
      "content": "Content 1",
      "author": "Author 1"
    },
    {
      "id": 2,
      "title": "Post 2",
      "content": "Content 2",
      "author": "Author 2"
    }
  ]
}"#
}
