use crate::model::profile::UserProfile;
use crate::model::reading::Reading;

#[derive(Debug)]
pub enum EngineCommand {
    SubmitProfile(UserProfile),
}

#[derive(Debug)]
pub enum EngineResponse {
    /// The flow answered with usable text, already split into sections.
    ReadingReady(Reading),
    /// The flow answered but the reply held no usable text.
    EmptyReply,
    /// The flow answered with an explicit error field.
    FlowRejected { message: String },
    /// The request never produced a reply at all.
    RequestFailed { detail: String },
}
