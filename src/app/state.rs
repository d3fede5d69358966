use std::collections::BTreeMap;

use crate::data::LoadStatus;

#[derive(Clone)]
pub(crate) struct RunningState;

pub(crate) enum AppState {
    Bootstrapping(BootstrapState),
    Running(RunningState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Bootstrapping(BootstrapState::default())
    }
}

#[derive(Default, Clone)]
pub(crate) struct BootstrapState {
    pub(crate) cards: BTreeMap<usize, (String, LoadStatus)>,
    pub(crate) total_cards: usize,
    pub(crate) completed: usize,
    pub(crate) failed: usize,
    /// Set when the embedded sheet itself cannot be decoded; the app parks
    /// on the bootstrap screen showing this message.
    pub(crate) fatal: Option<String>,
}
