pub mod engine;
pub mod protocol;

pub mod flow_client;
pub mod prompt_builder;
pub mod reply_parser;
