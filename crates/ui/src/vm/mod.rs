mod cabinet_vm;
mod task_vm;

pub use cabinet_vm::{CabinetVm, ResultRowVm, map_cabinet};
pub use task_vm::{TaskCardVm, map_task_cards};
