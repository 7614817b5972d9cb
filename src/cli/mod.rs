pub mod ask;
pub mod chat;
pub mod doctor;
pub mod topics;

use crate::config::GuideConfig;
use crate::guide::Guide;
use crate::knowledge;

/// Build the guide with the configured match policy.
pub fn guide_from(config: &GuideConfig) -> Guide {
    Guide::new(knowledge::binondo(), config.matching.policy)
}
