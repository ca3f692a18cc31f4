pub mod client_state;
pub mod text_embedding_events;
