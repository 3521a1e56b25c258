//! HTTP adapter for reservation acquisition.
//!
//! - `GET /api/reservations/wizard/fields` - ordered field list
//! - `POST /api/reservations/wizard/steps` - submit one wizard answer
//! - `POST /api/reservations/assistant/messages` - one conversational turn

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AssistantMessageRequest, AssistantMessageResponse, HealthResponse, ProgressResponse,
    ReplyStatus, WizardFieldResponse, WizardFieldsResponse, WizardStepRequest,
    WizardStepResponse,
};
pub use handlers::ReservationAppState;
pub use routes::{api_router, reservation_routes};
