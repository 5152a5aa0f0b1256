mod cabinet;
mod home;
mod register;
mod state;
mod tasks;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use cabinet::CabinetView;
pub use home::HomeView;
pub use register::RegisterView;
pub use state::{Notice, NoticeKind, ViewError, ViewState, view_state_from_resource};
pub use tasks::TasksView;
