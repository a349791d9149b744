//! Seed data loading for the setup endpoint.
use std::path::Path;

use engine::CashFlow;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedFile {
    cash_flows: Vec<CashFlow>,
}

/// Read the seed document at `path`.
///
/// A missing or malformed file yields an empty list instead of an error;
/// the setup endpoint succeeds without seed data.
pub(crate) async fn load(path: &Path) -> Vec<CashFlow> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!("seed file {} not readable: {err}", path.display());
            return Vec::new();
        }
    };

    match serde_json::from_str::<SeedFile>(&raw) {
        Ok(seed) => seed.cash_flows,
        Err(err) => {
            tracing::warn!("seed file {} is not valid JSON: {err}", path.display());
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn scratch_file(name: &str) -> PathBuf {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/test_seeds");
        std::fs::create_dir_all(&root).unwrap();
        root.join(format!("{}_{}.json", name, uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn missing_file_yields_an_empty_list() {
        let records = load(Path::new("does-not-exist.json")).await;
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn malformed_json_yields_an_empty_list() {
        let path = scratch_file("malformed");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(load(&path).await.is_empty());
    }

    #[tokio::test]
    async fn well_formed_seed_is_loaded() {
        let path = scratch_file("seed");
        std::fs::write(
            &path,
            r#"{
                "cashFlows": [
                    {
                        "id": "seed-1",
                        "type": "income",
                        "source": "bank",
                        "label": "salary",
                        "amount": 100.0,
                        "description": "january",
                        "createdAt": "2024-06-15T08:00:00Z",
                        "updatedAt": "2024-06-15T08:00:00Z"
                    }
                ]
            }"#,
        )
        .unwrap();

        let records = load(&path).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "seed-1");
        assert_eq!(records[0].kind, "income");
    }
}
