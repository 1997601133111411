use axum::Json;
use tracing::debug;

use crate::models::{Catalog, StatusPayload};

/// `GET /`: the service name, a success message and the static records.
pub async fn status<C: Catalog>() -> Json<StatusPayload<C::Record>> {
    debug!(
        service = C::SERVICE,
        records = C::records().len(),
        "Served status"
    );
    Json(StatusPayload::of::<C>())
}
