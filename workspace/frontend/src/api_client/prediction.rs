use common::{ClientError, Operation, PREDICT_ENDPOINT, PredictionRequest, PredictionResult};

/// Ask the service for min/max/modal prices under the given conditions.
pub async fn predict(request: &PredictionRequest) -> Result<PredictionResult, ClientError> {
    log::info!(
        "Requesting prediction for {} / {} in {}",
        request.crop, request.variety, request.region
    );
    super::post(PREDICT_ENDPOINT, request, Operation::Predict).await
}
