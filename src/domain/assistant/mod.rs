//! Conversational mode: interprets free-text model replies into either a
//! complete reservation or a request for more information.

mod extractor;
mod instructions;
mod turn;

pub use extractor::{AssistantReply, ConversationalExtractor, MAX_RESPONSE_LENGTH};
pub use instructions::system_instruction;
pub use turn::{Turn, TurnRole};
