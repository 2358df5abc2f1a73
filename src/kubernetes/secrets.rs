// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Storage secret preflight

use crate::constants::storage;
use crate::error::{ProvisionError, Result};
use k8s_openapi::api::core::v1::Secret;
use kube::{Api, Client};
use tracing::{debug, instrument};

/// Ensure the storage secret referenced by game server Pods exists in `namespace`.
///
/// The secret is never created here. A missing secret is reported as
/// [`ProvisionError::MissingSecret`], a secret without one of the storage
/// account keys as [`ProvisionError::MissingSecretKey`].
#[instrument(skip(client))]
pub async fn ensure_storage_secret(client: &Client, namespace: &str) -> Result<()> {
    let secrets: Api<Secret> = Api::namespaced(client.clone(), namespace);

    match secrets.get(storage::SECRET_NAME).await {
        Ok(secret) => {
            let data = secret.data.unwrap_or_default();
            for key in [storage::ACCOUNT_NAME_KEY, storage::ACCOUNT_KEY_KEY] {
                if !data.contains_key(key) {
                    return Err(ProvisionError::MissingSecretKey {
                        namespace: namespace.to_string(),
                        secret: storage::SECRET_NAME.to_string(),
                        key: key.to_string(),
                    });
                }
            }
            debug!("Secret {}/{} present", namespace, storage::SECRET_NAME);
            Ok(())
        }
        Err(kube::Error::Api(err)) if err.code == 404 => Err(ProvisionError::MissingSecret {
            namespace: namespace.to_string(),
            secret: storage::SECRET_NAME.to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{not_found_json, secret_json, MockService};

    const SECRET_PATH: &str = "/api/v1/namespaces/games/secrets/openarena-storage-secret";

    #[tokio::test]
    async fn test_ensure_storage_secret_present() {
        let client = MockService::new()
            .on_get(SECRET_PATH, 200, &secret_json("openarena-storage-secret", "games"))
            .into_client();

        ensure_storage_secret(&client, "games").await.unwrap();
    }

    #[tokio::test]
    async fn test_ensure_storage_secret_missing() {
        let client = MockService::new()
            .on_get(
                SECRET_PATH,
                404,
                &not_found_json("secrets", "openarena-storage-secret"),
            )
            .into_client();

        let err = ensure_storage_secret(&client, "games").await.unwrap_err();

        assert!(matches!(
            err,
            ProvisionError::MissingSecret { ref namespace, ref secret }
                if namespace == "games" && secret == "openarena-storage-secret"
        ));
    }

    fn secret_with_data(data: serde_json::Value) -> String {
        serde_json::json!({
            "apiVersion": "v1",
            "kind": "Secret",
            "metadata": { "name": "openarena-storage-secret", "namespace": "games" },
            "type": "Opaque",
            "data": data
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_ensure_storage_secret_without_data() {
        let client = MockService::new()
            .on_get(SECRET_PATH, 200, &secret_with_data(serde_json::json!({})))
            .into_client();

        let err = ensure_storage_secret(&client, "games").await.unwrap_err();

        assert!(matches!(
            err,
            ProvisionError::MissingSecretKey { ref key, .. } if key == "azurestorageaccountname"
        ));
    }

    #[tokio::test]
    async fn test_ensure_storage_secret_missing_account_key() {
        let client = MockService::new()
            .on_get(
                SECRET_PATH,
                200,
                &secret_with_data(serde_json::json!({ "azurestorageaccountname": "YXJlbmE=" })),
            )
            .into_client();

        let err = ensure_storage_secret(&client, "games").await.unwrap_err();

        assert!(matches!(
            err,
            ProvisionError::MissingSecretKey { ref namespace, ref secret, ref key }
                if namespace == "games"
                    && secret == "openarena-storage-secret"
                    && key == "azurestorageaccountkey"
        ));
    }

    #[tokio::test]
    async fn test_ensure_storage_secret_forbidden() {
        let body = serde_json::json!({
            "kind": "Status",
            "apiVersion": "v1",
            "status": "Failure",
            "message": "secrets is forbidden",
            "reason": "Forbidden",
            "code": 403
        })
        .to_string();
        let client = MockService::new()
            .on_get(SECRET_PATH, 403, &body)
            .into_client();

        let err = ensure_storage_secret(&client, "games").await.unwrap_err();

        assert!(matches!(err, ProvisionError::KubeError(_)));
    }
}
