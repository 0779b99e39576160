// src/presentation/http/state.rs
use crate::application::services::SecurityServices;

#[derive(Clone)]
pub struct HttpState {
    pub security: SecurityServices,
}
