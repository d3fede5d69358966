mod bootstrap;
mod phase_view;
mod running;

pub(crate) use phase_view::PhaseView;
