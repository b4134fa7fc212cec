//! Services the pages reach through a yew context.
//!
//! # Design
//! - One API client, password estimator, and bot-check config per app boot.
//! - Client and estimator compare by pointer; swapping either re-renders consumers.

use crate::app::preferences::{api_base_url, bot_check_config};
use crate::core::captcha::BotCheckConfig;
use crate::core::strength::{PasswordScorer, ZxcvbnScorer};
use crate::services::api::ApiClient;
use std::rc::Rc;

#[derive(Clone)]
pub(crate) struct Services {
    pub api: Rc<ApiClient>,
    pub scorer: Rc<dyn PasswordScorer>,
    pub bot_check: BotCheckConfig,
}

impl Services {
    /// Services configured from the page's `<meta>` tags.
    pub(crate) fn from_environment() -> Self {
        Self {
            api: Rc::new(ApiClient::new(api_base_url())),
            scorer: Rc::new(ZxcvbnScorer),
            bot_check: bot_check_config(),
        }
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.api, &other.api)
            && Rc::ptr_eq(&self.scorer, &other.scorer)
            && self.bot_check == other.bot_check
    }
}
