pub mod app_config;
pub mod sample;
pub mod train_repo;
pub mod ticket_repo;

pub use train_repo::InMemoryTrainRepository;
pub use ticket_repo::InMemoryTicketRepository;
