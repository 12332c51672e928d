use dsr_core::error::ClientError;
use teloxide::RequestError;

pub struct WrappedClientError(ClientError);

impl From<WrappedClientError> for ClientError {
    fn from(value: WrappedClientError) -> Self {
        value.0
    }
}

impl From<RequestError> for WrappedClientError {
    fn from(value: RequestError) -> Self {
        Self(ClientError::Communication(value.into()))
    }
}
