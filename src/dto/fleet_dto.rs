use serde::Serialize;

use crate::models::vehicle::Vehicle;
use crate::services::fleet_query_service::FleetQuery;

pub const EMPTY_FLEET_MESSAGE: &str = "No vehicles found. Try adjusting your search.";

// Response de una consulta sobre la flota
#[derive(Debug, Serialize)]
pub struct FleetQueryResponse {
    pub query: FleetQuery,
    pub total: usize,
    pub vehicles: Vec<Vehicle>,
    /// Solo presente cuando el resultado está vacío
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

impl FleetQueryResponse {
    pub fn new(query: FleetQuery, vehicles: Vec<&Vehicle>) -> Self {
        let empty_message = vehicles.is_empty().then(|| EMPTY_FLEET_MESSAGE.to_string());
        Self {
            query,
            total: vehicles.len(),
            vehicles: vehicles.into_iter().cloned().collect(),
            empty_message,
        }
    }
}
