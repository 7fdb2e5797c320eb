use chd_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RiskError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("invalid patient form: {}", .0.join("; "))]
    InvalidPatient(Vec<String>),
}
