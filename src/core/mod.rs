pub mod gate;
pub mod greeting;
pub mod reminder;
pub mod task;
pub mod task_list;
