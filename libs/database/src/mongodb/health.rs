use mongodb::Client;

use super::connector::ping;
use crate::common::{DatabaseError, DatabaseResult};

/// Check MongoDB health with a `ping` against the admin database
///
/// # Example
/// ```ignore
/// use database::mongodb::{connect, check_health};
///
/// let client = connect("mongodb://localhost:27017").await?;
/// check_health(&client).await?;
/// ```
pub async fn check_health(client: &Client) -> DatabaseResult<()> {
    ping(client)
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))
}
