use common::{ActualDataRecord, ClientError, Operation, SUBMIT_ACTUAL_DATA_ENDPOINT, SubmissionAck};

/// Send an observed market outcome back to the service for future training.
pub async fn submit_actual_data(record: &ActualDataRecord) -> Result<SubmissionAck, ClientError> {
    log::debug!("Sending actual data: {:?}", record);
    super::post(SUBMIT_ACTUAL_DATA_ENDPOINT, record, Operation::SubmitActualData).await
}
