use rb_contracts::rb::{RbConfig, RbUserInfo};
use serde_json::{Map, Value};
use std::collections::HashMap;

use super::actions::{RbAction, Section};

/// View state of one section
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    pub filters: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RbState {
    pub user: RbUserInfo,
    pub config: RbConfig,
    pub sidebar_visible: bool,
    pub pages: HashMap<Section, PageState>,
    /// Current `path?query`
    pub location: String,
}

impl RbState {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            user: RbUserInfo::default(),
            config: RbConfig::default(),
            sidebar_visible: false,
            pages: HashMap::new(),
            location: location.into(),
        }
    }

    pub fn page(&self, section: Section) -> Option<&PageState> {
        self.pages.get(&section)
    }

    /// Reducer. Pure and synchronous; side effects live in `RbStore`.
    pub fn apply(&mut self, action: &RbAction) {
        match action {
            RbAction::ResetPageState(section) => {
                self.pages.insert(*section, PageState::default());
            }
            RbAction::SetFilters {
                section,
                filters,
                merge,
            } => {
                let page = self.pages.entry(*section).or_default();
                if *merge {
                    page.filters
                        .extend(filters.iter().map(|(k, v)| (k.clone(), v.clone())));
                } else {
                    page.filters = filters.clone();
                }
            }
            RbAction::ToggleAdminOverride => {
                self.user.is_admin_override_enabled = !self.user.is_admin_override_enabled;
            }
            RbAction::SetUserInfo(user) => self.user = user.clone(),
            RbAction::SetConfig(config) => self.config = config.clone(),
            RbAction::SetSidebarVisible(visible) => self.sidebar_visible = *visible,
            RbAction::Push(url) => self.location = url.clone(),
        }
    }
}

impl Default for RbState {
    fn default() -> Self {
        Self::new("/")
    }
}
