use std::sync::mpsc::{Receiver, Sender};

use anyhow::Context;
use tracing::{error, info, warn};

use crate::engine::flow_client::FlowClient;
use crate::engine::prompt_builder::PromptBuilder;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::reply_parser::{self, ReplyOutcome};
use crate::model::profile::UserProfile;

/// Worker that owns the flow client. Lives on its own thread so the window
/// never blocks on the network; commands arrive over `rx`, results leave
/// over `tx`.
pub struct Engine {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    client: FlowClient,
}

impl Engine {
    pub fn new(
        rx: Receiver<EngineCommand>,
        tx: Sender<EngineResponse>,
        client: FlowClient,
    ) -> Self {
        Self { rx, tx, client }
    }

    /// Runs until the command channel closes.
    pub fn run(&mut self) {
        while let Ok(cmd) = self.rx.recv() {
            match cmd {
                EngineCommand::SubmitProfile(profile) => {
                    let response = self.submit_profile(&profile);
                    if self.tx.send(response).is_err() {
                        // The window is gone; nobody is listening.
                        break;
                    }
                }
            }
        }
    }

    fn submit_profile(&self, profile: &UserProfile) -> EngineResponse {
        let prompt = PromptBuilder::build(profile);
        info!(chars = prompt.len(), "submitting profile to the flow");

        let reply = match self
            .client
            .run_flow(&prompt)
            .context("astrology flow call failed")
        {
            Ok(reply) => reply,
            Err(err) => {
                error!("{err:#}");
                return EngineResponse::RequestFailed {
                    detail: format!("{err:#}"),
                };
            }
        };

        match reply_parser::evaluate_reply(&reply) {
            ReplyOutcome::Rejected(message) => {
                warn!(%message, "flow rejected the request");
                EngineResponse::FlowRejected { message }
            }
            ReplyOutcome::Empty => {
                warn!("flow reply held no usable text");
                EngineResponse::EmptyReply
            }
            ReplyOutcome::Reading(reading) => {
                info!("reading ready");
                EngineResponse::ReadingReady(reading)
            }
        }
    }
}
